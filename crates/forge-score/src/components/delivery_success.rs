use forge_core::models::DeliveryStats;

/// Score awarded per doubling of verified deliveries.
const CURVE_SCALE: f64 = 200.0;
/// Bonus scale for sustained (90-day) deliveries.
const SUSTAINED_SCALE: f64 = 40.0;
/// Bonus scale for deliveries whose team project completed.
const TEAM_COMPLETED_SCALE: f64 = 30.0;

/// Delivery-success component: `clamp(log2(n + 1) × 200, 0, 1000)`.
///
/// Logarithmic on purpose: each additional verified delivery yields a
/// diminishing marginal gain (1 ≈ 200, 5 ≈ 517, 10 ≈ 692). Sustained and
/// team-completed deliveries layer smaller log-bounded bonuses on top, so
/// each strictly increases the component and never decreases it.
pub fn calculate(stats: &DeliveryStats) -> f64 {
    if stats.verified == 0 {
        return 0.0;
    }

    let base = (curve(stats.verified) * CURVE_SCALE).clamp(0.0, 1000.0);
    let sustained = curve(stats.sustained) * SUSTAINED_SCALE;
    let team = curve(stats.team_completed) * TEAM_COMPLETED_SCALE;

    (base + sustained + team).clamp(0.0, 1000.0)
}

fn curve(n: u32) -> f64 {
    (n as f64 + 1.0).log2()
}
