use forge_core::models::{
    ConfidenceInputs, ConsistencyInputs, DeliveryStats, DepthFlags, OwnershipSignals,
    QualityRecord, ReliabilityCounts, ScoreInputs, VerificationSignals,
};
use forge_score::components::{consistency, delivery_success, quality, reliability};
use forge_score::{confidence, formula};
use proptest::prelude::*;

fn arb_signal() -> impl Strategy<Value = Option<bool>> {
    prop_oneof![Just(None), Just(Some(true)), Just(Some(false))]
}

fn arb_quality_record() -> impl Strategy<Value = QualityRecord> {
    (
        proptest::array::uniform5(arb_signal()),
        proptest::array::uniform6(any::<bool>()),
        any::<bool>(),
        proptest::array::uniform3(arb_signal()),
        0u32..200,
    )
        .prop_map(|(signals, depth, sustained, ownership, update_windows)| QualityRecord {
            signals: VerificationSignals {
                deployment_reachable: signals[0],
                repo_exists: signals[1],
                contribution_evidence: signals[2],
                timeline_evidence: signals[3],
                collaborator_attested: signals[4],
            },
            depth: DepthFlags {
                auth: depth[0],
                database: depth[1],
                api: depth[2],
                integrations: depth[3],
                payments: depth[4],
                background_jobs: depth[5],
            },
            sustained_90_days: sustained,
            ownership: OwnershipSignals {
                deployment_owner: ownership[0],
                domain_owner: ownership[1],
                primary_operator: ownership[2],
            },
            update_windows,
        })
}

// ── Monotonicity of delivery success ─────────────────────────────────────

proptest! {
    #[test]
    fn delivery_success_monotonic(n1 in 0u32..1000, n2 in 0u32..1000) {
        let (lo, hi) = if n1 <= n2 { (n1, n2) } else { (n2, n1) };
        let lo_score = delivery_success::calculate(&DeliveryStats { verified: lo, sustained: 0, team_completed: 0 });
        let hi_score = delivery_success::calculate(&DeliveryStats { verified: hi, sustained: 0, team_completed: 0 });
        prop_assert!(lo_score <= hi_score);
    }
}

// ── Component bounds ─────────────────────────────────────────────────────

proptest! {
    #[test]
    fn reliability_bounded(
        total in 0u32..10_000,
        completed in 0u32..10_000,
        dropped in 0u32..10_000,
        abandoned in 0u32..1000,
    ) {
        let counts = ReliabilityCounts {
            total_deliveries: total,
            completed_deliveries: completed.min(total),
            dropped_deliveries: dropped.min(total),
            projects_abandoned: abandoned,
            ..Default::default()
        };
        let score = reliability::calculate(&counts);
        prop_assert!((0.0..=1000.0).contains(&score));
    }

    #[test]
    fn quality_bounded(records in proptest::collection::vec(arb_quality_record(), 0..40)) {
        let score = quality::calculate(&records);
        prop_assert!((0.0..=1000.0).contains(&score));
    }

    #[test]
    fn consistency_bounded(
        d6 in 0u32..100,
        weeks in 0u32..53,
        recency in 0u32..400,
    ) {
        let score = consistency::calculate(&ConsistencyInputs {
            deliveries_last_6_months: d6,
            active_weeks_last_12: weeks,
            recency_days: recency,
        });
        prop_assert!((0.0..=1000.0).contains(&score));
    }
}

// ── Confidence saturation and monotonicity ───────────────────────────────

proptest! {
    #[test]
    fn confidence_bounded_and_monotonic(
        deliveries in 0u32..100,
        teams in 0u32..100,
        tenure in 0u32..100,
    ) {
        let c = confidence::calculate(deliveries, teams, tenure);
        prop_assert!(c <= 100);
        // Non-decreasing in each argument independently.
        prop_assert!(confidence::calculate(deliveries + 1, teams, tenure) >= c);
        prop_assert!(confidence::calculate(deliveries, teams + 1, tenure) >= c);
        prop_assert!(confidence::calculate(deliveries, teams, tenure + 1) >= c);
    }
}

// ── Effective-score damping ──────────────────────────────────────────────

proptest! {
    #[test]
    fn effective_never_exceeds_raw(score in 0u32..=1000, conf in 0u8..=100) {
        let effective = formula::effective_score(score, conf);
        prop_assert!(effective <= score);
        // Floor: never below 60% (rounding aside).
        prop_assert!(effective as f64 >= score as f64 * 0.6 - 0.5);
    }
}

// ── Full formula: bounds and purity ──────────────────────────────────────

proptest! {
    #[test]
    fn full_score_bounded_and_pure(
        verified in 0u32..100,
        sustained in 0u32..100,
        team in 0u32..100,
        total in 0u32..200,
        completed in 0u32..200,
        dropped in 0u32..50,
        records in proptest::collection::vec(arb_quality_record(), 0..10),
        weeks in 0u32..53,
        recency in 0u32..400,
        collaborators in 0u32..30,
        outcomes in 0u32..30,
    ) {
        let inputs = ScoreInputs {
            delivery: DeliveryStats {
                verified,
                sustained: sustained.min(verified),
                team_completed: team.min(verified),
            },
            reliability: ReliabilityCounts {
                total_deliveries: total,
                completed_deliveries: completed.min(total),
                dropped_deliveries: dropped.min(total),
                ..Default::default()
            },
            quality: records,
            consistency: ConsistencyInputs {
                deliveries_last_6_months: 0,
                active_weeks_last_12: weeks,
                recency_days: recency,
            },
            confidence: ConfidenceInputs {
                verified_deliveries: verified,
                sustained_deliveries: sustained.min(verified),
                distinct_collaborators: collaborators,
                outcomes,
            },
        };

        let outcome = formula::compute(&inputs);
        prop_assert!(outcome.score <= 1000);
        prop_assert!(outcome.confidence <= 100);
        prop_assert!(outcome.effective_score <= outcome.score);

        // Bit-identical on a second run: no hidden state or randomness.
        prop_assert_eq!(formula::compute(&inputs), outcome);
    }
}
