use forge_core::models::{Availability, InviteHistory, ProjectStage};
use forge_match::{acceptance, compatibility, BuilderHistory};
use proptest::prelude::*;
use test_fixtures::{make_builder, make_project};

fn arb_availability() -> impl Strategy<Value = Availability> {
    prop_oneof![
        Just(Availability::Available),
        Just(Availability::OpenToOpportunities),
        Just(Availability::Busy),
        Just(Availability::Unavailable),
    ]
}

fn arb_stage() -> impl Strategy<Value = ProjectStage> {
    prop_oneof![
        Just(ProjectStage::Idea),
        Just(ProjectStage::Mvp),
        Just(ProjectStage::Beta),
        Just(ProjectStage::Launched),
    ]
}

// ── Acceptance bounds and reason cardinality ─────────────────────────────

proptest! {
    #[test]
    fn acceptance_always_in_5_to_95_with_1_to_3_reasons(
        availability in arb_availability(),
        stage in arb_stage(),
        owner_score in 0u32..=1000,
        compat in 0u8..=100,
        received in 0u32..50,
        accepted in 0u32..50,
        declined in 0u32..50,
        recent in 0u32..20,
    ) {
        let mut project = make_project("p1", "owner");
        project.stage = stage;

        let history = InviteHistory {
            received: received.max(accepted + declined),
            accepted,
            declined,
            recent_7d: recent,
        };

        let estimate = acceptance::estimate(availability, &project, owner_score, &history, compat);
        prop_assert!((5..=95).contains(&estimate.percent));
        prop_assert!((1..=3).contains(&estimate.reasons.len()));
    }
}

// ── Compatibility bounds ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn compatibility_bounded(
        engineering in 0u8..=100,
        design in 0u8..=100,
        reliability in 0u8..=100,
        hours in proptest::option::of(0u32..80),
        availability in arb_availability(),
        verified in 0u32..30,
        require_skills in any::<bool>(),
    ) {
        let mut project = make_project("p1", "owner");
        if require_skills {
            project.required_skills = vec!["engineering".to_string(), "design".to_string()];
        }

        let mut builder = make_builder("b1");
        builder.skills.engineering = engineering;
        builder.skills.design = design;
        builder.reliability_score = reliability;
        builder.hours_per_week = hours;
        builder.availability = availability;

        let history = BuilderHistory {
            verified_deliveries: verified,
            stack_tags: vec!["rust".to_string()],
        };

        let breakdown = compatibility(&project, &builder, &history);
        prop_assert!(breakdown.score_percent <= 100);
        prop_assert!(breakdown.capability_fit <= 100);
        prop_assert!(breakdown.reliability_fit <= 100);
        prop_assert!(breakdown.commitment_fit <= 100);
        prop_assert!(breakdown.delivery_history_fit <= 100);
    }
}

// ── Monotonicity: more skill never hurts ─────────────────────────────────

proptest! {
    #[test]
    fn raising_a_required_skill_never_lowers_capability(
        base_level in 0u8..=90,
        bump in 1u8..=10,
    ) {
        let mut project = make_project("p1", "owner");
        project.required_skills = vec!["engineering".to_string()];

        let mut weaker = make_builder("b1");
        weaker.skills.engineering = base_level;
        let mut stronger = make_builder("b2");
        stronger.skills.engineering = base_level + bump;

        let history = BuilderHistory::default();
        let weak = compatibility(&project, &weaker, &history);
        let strong = compatibility(&project, &stronger, &history);
        prop_assert!(strong.capability_fit >= weak.capability_fit);
        prop_assert!(strong.score_percent >= weak.score_percent);
    }
}
