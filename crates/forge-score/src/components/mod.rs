pub mod consistency;
pub mod delivery_success;
pub mod quality;
pub mod reliability;
