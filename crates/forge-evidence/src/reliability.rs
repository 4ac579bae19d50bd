use forge_core::models::{
    Delivery, DeliveryStatus, ProjectStatus, ReliabilityCounts, TeamMembership,
};

/// Reliability counts from deliveries and team memberships.
///
/// `projects_no_show` has no data source yet and stays 0; it is a named
/// input so a future signal can populate it without an interface change.
pub fn compute(deliveries: &[Delivery], memberships: &[TeamMembership]) -> ReliabilityCounts {
    let completed = deliveries
        .iter()
        .filter(|d| matches!(d.status, DeliveryStatus::Completed | DeliveryStatus::Verified))
        .count() as u32;

    let dropped = deliveries
        .iter()
        .filter(|d| d.status == DeliveryStatus::Dropped)
        .count() as u32;

    let projects_completed = memberships
        .iter()
        .filter(|m| m.project_status == ProjectStatus::Completed)
        .count() as u32;

    let projects_abandoned = memberships
        .iter()
        .filter(|m| m.project_status.is_abandoned())
        .count() as u32;

    ReliabilityCounts {
        total_deliveries: deliveries.len() as u32,
        completed_deliveries: completed,
        dropped_deliveries: dropped,
        projects_joined: memberships.len() as u32,
        projects_completed,
        projects_abandoned,
        projects_no_show: 0,
    }
}
