use forge_core::models::QualityRecord;

/// Per-delivery ceiling with no depth flags set.
const BASE_CEILING: f64 = 400.0;
/// Ceiling gained per distinct depth flag. A system touching auth, a
/// database, payments etc. can earn more per delivery than a trivial one.
const DEPTH_CEILING_STEP: f64 = 100.0;
/// Flat bonus for a delivery sustained past 90 days.
const SUSTAINED_BONUS: f64 = 50.0;
/// Bonus per positive ownership signal. Heuristic input, kept small.
const OWNERSHIP_BONUS: f64 = 25.0;
/// Points per update window, capped at 30 windows.
const MAINTENANCE_STEP: f64 = 5.0;
/// Volume bonus per doubling of verified deliveries.
const VOLUME_BONUS_SCALE: f64 = 25.0;
/// Cap on the volume bonus so quantity cannot substitute for depth.
const VOLUME_BONUS_CAP: f64 = 100.0;

/// Delivery-quality component: per-delivery scores averaged, plus a
/// log-bounded volume bonus.
///
/// The average means a pile of shallow deliveries stays shallow; only the
/// small volume bonus rewards count, and it saturates fast.
pub fn calculate(records: &[QualityRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }

    let sum: f64 = records.iter().map(per_delivery).sum();
    let mean = sum / records.len() as f64;

    let volume = ((records.len() as f64 + 1.0).log2() * VOLUME_BONUS_SCALE).min(VOLUME_BONUS_CAP);

    (mean + volume).clamp(0.0, 1000.0)
}

/// Score one verified delivery: pass ratio over its assessed signals,
/// scaled by a depth-dependent ceiling, plus sustained / ownership /
/// maintenance bonuses.
fn per_delivery(record: &QualityRecord) -> f64 {
    let ceiling = BASE_CEILING + record.depth.count() as f64 * DEPTH_CEILING_STEP;

    let assessed = record.signals.assessed();
    let signal_ratio = if assessed == 0 {
        0.0
    } else {
        record.signals.passed() as f64 / assessed as f64
    };

    let mut score = ceiling * signal_ratio;

    if record.sustained_90_days {
        score += SUSTAINED_BONUS;
    }

    let ownership_positives = [
        record.ownership.deployment_owner,
        record.ownership.domain_owner,
        record.ownership.primary_operator,
    ]
    .iter()
    .filter(|s| **s == Some(true))
    .count() as f64;
    score += ownership_positives * OWNERSHIP_BONUS;

    score += record.update_windows.min(30) as f64 * MAINTENANCE_STEP;

    score.clamp(0.0, 1000.0)
}
