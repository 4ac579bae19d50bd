use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use forge_core::constants::RECENCY_DEFAULT_DAYS;
use forge_core::models::{ActivityEvent, ConsistencyInputs, Delivery, DeliveryStatus};

/// Milliseconds in one week, the bucket size for the active-week set.
const WEEK_MS: i64 = 7 * 24 * 60 * 60 * 1000;

const TRAILING_WINDOW_DAYS: i64 = 365;
const RECENT_DELIVERY_WINDOW_DAYS: i64 = 182;

/// Consistency inputs: recent-delivery count, the de-duplicated active-week
/// set over the trailing 12 months, and days since the last qualifying
/// event.
///
/// Qualifying events are completion timestamps of verified/completed
/// deliveries plus any activity event inside the trailing window.
pub fn compute(
    deliveries: &[Delivery],
    activity: &[ActivityEvent],
    now: DateTime<Utc>,
) -> ConsistencyInputs {
    let window_start = now - Duration::days(TRAILING_WINDOW_DAYS);

    let deliveries_last_6_months = deliveries
        .iter()
        .filter(|d| d.created_at >= now - Duration::days(RECENT_DELIVERY_WINDOW_DAYS))
        .count() as u32;

    let completion_events = deliveries
        .iter()
        .filter(|d| {
            matches!(
                d.status,
                DeliveryStatus::Verified | DeliveryStatus::Completed
            )
        })
        .filter_map(|d| d.completed_at);
    let activity_events = activity.iter().map(|e| e.occurred_at);

    let qualifying: Vec<DateTime<Utc>> = completion_events
        .chain(activity_events)
        .filter(|t| *t >= window_start && *t <= now)
        .collect();

    let weeks: HashSet<i64> = qualifying
        .iter()
        .map(|t| t.timestamp_millis().div_euclid(WEEK_MS))
        .collect();

    let recency_days = qualifying
        .iter()
        .max()
        .map(|latest| (now - *latest).num_days().max(0) as u32)
        .unwrap_or(RECENCY_DEFAULT_DAYS);

    ConsistencyInputs {
        deliveries_last_6_months,
        active_weeks_last_12: weeks.len() as u32,
        recency_days,
    }
}
