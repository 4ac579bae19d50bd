use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use forge_core::constants::SUSTAINED_DELIVERY_DAYS;
use forge_core::models::{Delivery, DeliveryStatus, DeliveryStats, ProjectStatus};

/// Verified-delivery counts for the delivery-success dimension.
///
/// `project_status` maps project ids to the status carried on the
/// builder's memberships; deliveries under unknown projects simply don't
/// count as team-completed.
pub fn compute(
    deliveries: &[Delivery],
    project_status: &HashMap<String, ProjectStatus>,
    now: DateTime<Utc>,
) -> DeliveryStats {
    let verified: Vec<&Delivery> = deliveries
        .iter()
        .filter(|d| d.status == DeliveryStatus::Verified)
        .collect();

    let sustained = verified.iter().filter(|d| is_sustained(d, now)).count() as u32;

    let team_completed = verified
        .iter()
        .filter(|d| {
            d.project_id
                .as_ref()
                .and_then(|id| project_status.get(id))
                .is_some_and(|s| *s == ProjectStatus::Completed)
        })
        .count() as u32;

    DeliveryStats {
        verified: verified.len() as u32,
        sustained,
        team_completed,
    }
}

/// A delivery is sustained when it started at least 90 wall-clock days
/// before evaluation time (millisecond delta, per the scoring contract).
pub fn is_sustained(delivery: &Delivery, now: DateTime<Utc>) -> bool {
    delivery.started_at.is_some_and(|started| {
        (now - started).num_milliseconds()
            >= Duration::days(SUSTAINED_DELIVERY_DAYS).num_milliseconds()
    })
}
