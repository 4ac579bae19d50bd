//! Tiered, saturating confidence: 0–100, built additively from evidence
//! thresholds. Never decreases as positive evidence accumulates.

/// Delivery-count tiers and their increments.
const DELIVERY_TIERS: [(u32, u32); 4] = [(1, 20), (3, 15), (5, 10), (10, 10)];
/// Team/collaborator tiers.
const TEAM_TIERS: [(u32, u32); 2] = [(1, 15), (3, 10)];
/// Tenure tiers (active months or observed outcomes), +5 each.
const TENURE_TIERS: [u32; 4] = [1, 3, 6, 12];
const TENURE_INCREMENT: u32 = 5;

/// Confidence from delivery count, team/collaborator count, and tenure.
/// The tier sums reach exactly 100 (55 + 25 + 20) and the result is
/// bounded there.
pub fn calculate(deliveries: u32, teams: u32, tenure: u32) -> u8 {
    let mut confidence = 0u32;

    for (threshold, increment) in DELIVERY_TIERS {
        if deliveries >= threshold {
            confidence += increment;
        }
    }
    for (threshold, increment) in TEAM_TIERS {
        if teams >= threshold {
            confidence += increment;
        }
    }
    for threshold in TENURE_TIERS {
        if tenure >= threshold {
            confidence += TENURE_INCREMENT;
        }
    }

    confidence.min(100) as u8
}
