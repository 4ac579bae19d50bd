use chrono::{Duration, Utc};
use forge_core::models::{
    AcceptanceConfidence, Availability, DeliveryStatus, InvitationStatus, InviteHistory,
    MatchOutcome, ProjectStage,
};
use forge_match::{acceptance, compatibility, ranking, BuilderHistory, MatchEngine};
use test_fixtures::{
    make_builder, make_delivery, make_invitation, make_project, InMemoryStore,
};

fn estimate_with_availability(availability: Availability) -> u8 {
    let project = make_project("p1", "owner");
    acceptance::estimate(
        availability,
        &project,
        500,
        &InviteHistory::default(),
        70,
    )
    .percent
}

// ── Acceptance ordering and magnitudes ───────────────────────────────────

#[test]
fn available_beats_busy_by_exactly_35_points() {
    let available = estimate_with_availability(Availability::Available);
    let busy = estimate_with_availability(Availability::Busy);
    assert_eq!(available - busy, 35);
}

#[test]
fn acceptance_clamps_to_5_and_95() {
    let project = {
        let mut p = make_project("p1", "owner");
        p.stage = ProjectStage::Launched;
        p
    };

    // Everything positive.
    let high = acceptance::estimate(
        Availability::Available,
        &project,
        700,
        &InviteHistory {
            received: 10,
            accepted: 10,
            declined: 0,
            recent_7d: 0,
        },
        90,
    );
    assert_eq!(high.percent, 95);

    // Everything negative.
    let low = acceptance::estimate(
        Availability::Unavailable,
        &make_project("p2", "owner"),
        100,
        &InviteHistory {
            received: 10,
            accepted: 0,
            declined: 10,
            recent_7d: 8,
        },
        10,
    );
    assert_eq!(low.percent, 5);
}

#[test]
fn historical_rate_term_is_centered() {
    let project = make_project("p1", "owner");
    // 7 of 10 accepted: (0.7 - 0.5) × 20 = +4 over the no-history case.
    let with_history = acceptance::estimate(
        Availability::Busy,
        &project,
        0,
        &InviteHistory {
            received: 10,
            accepted: 7,
            declined: 3,
            recent_7d: 0,
        },
        60,
    );
    let without = acceptance::estimate(
        Availability::Busy,
        &project,
        0,
        &InviteHistory::default(),
        60,
    );
    assert_eq!(with_history.percent, without.percent + 4);
}

#[test]
fn invite_spam_is_penalized() {
    let project = make_project("p1", "owner");
    let calm = acceptance::estimate(
        Availability::Available,
        &project,
        0,
        &InviteHistory::default(),
        60,
    );
    let flooded = acceptance::estimate(
        Availability::Available,
        &project,
        0,
        &InviteHistory {
            recent_7d: 6,
            ..Default::default()
        },
        60,
    );
    assert_eq!(calm.percent - flooded.percent, 10);
}

// ── Acceptance confidence tiers ──────────────────────────────────────────

#[test]
fn confidence_tiers_follow_history_volume() {
    let project = make_project("p1", "owner");

    let fresh = acceptance::estimate(
        Availability::Available,
        &project,
        0,
        &InviteHistory::default(),
        50,
    );
    assert_eq!(fresh.confidence, AcceptanceConfidence::Low);

    let some = acceptance::estimate(
        Availability::Available,
        &project,
        0,
        &InviteHistory {
            received: 2,
            ..Default::default()
        },
        50,
    );
    assert_eq!(some.confidence, AcceptanceConfidence::Medium);

    let seasoned = acceptance::estimate(
        Availability::Available,
        &project,
        0,
        &InviteHistory {
            received: 10,
            accepted: 7,
            declined: 3,
            recent_7d: 0,
        },
        50,
    );
    assert_eq!(seasoned.confidence, AcceptanceConfidence::High);
}

// ── Reasons ──────────────────────────────────────────────────────────────

#[test]
fn reasons_are_always_between_one_and_three() {
    let project = make_project("p1", "owner");

    // Nothing specific fires: generic fallback, exactly one reason.
    let quiet = acceptance::estimate(
        Availability::Busy,
        &project,
        0,
        &InviteHistory::default(),
        10,
    );
    assert_eq!(
        quiet.reasons,
        vec!["Based on availability and project fit".to_string()]
    );

    // Four rules fire: truncated to three.
    let loud = acceptance::estimate(
        Availability::Available,
        &project,
        700,
        &InviteHistory {
            received: 10,
            accepted: 9,
            declined: 1,
            recent_7d: 0,
        },
        85,
    );
    assert_eq!(loud.reasons.len(), 3);
}

// ── Compatibility monotonicity ───────────────────────────────────────────

#[test]
fn skill_overlap_never_lowers_the_score() {
    let mut project = make_project("p1", "owner");
    project.required_skills = vec!["engineering".to_string(), "design".to_string()];

    let mut weak = make_builder("weak");
    weak.skills.engineering = 0;
    weak.skills.design = 0;

    let mut strong = make_builder("strong");
    strong.skills.engineering = 90;
    strong.skills.design = 80;

    let history = BuilderHistory::default();
    let weak_fit = compatibility(&project, &weak, &history);
    let strong_fit = compatibility(&project, &strong, &history);

    assert!(strong_fit.capability_fit > weak_fit.capability_fit);
    assert!(strong_fit.score_percent >= weak_fit.score_percent);
}

#[test]
fn hours_outside_the_window_score_lower() {
    let project = make_project("p1", "owner"); // window 10–30.

    let mut inside = make_builder("inside");
    inside.hours_per_week = Some(20);
    let mut below = make_builder("below");
    below.hours_per_week = Some(2);
    let mut above = make_builder("above");
    above.hours_per_week = Some(60);

    let history = BuilderHistory::default();
    let inside_fit = compatibility(&project, &inside, &history).commitment_fit;
    assert!(compatibility(&project, &below, &history).commitment_fit < inside_fit);
    assert!(compatibility(&project, &above, &history).commitment_fit < inside_fit);
}

#[test]
fn team_size_gap_dampens_commitment() {
    let project = make_project("p1", "owner"); // target team size 3.

    let mut aligned = make_builder("aligned");
    aligned.preferred_team_size = Some(3);
    let mut solo = make_builder("solo");
    solo.preferred_team_size = Some(8);
    let mut unstated = make_builder("unstated");
    unstated.preferred_team_size = None;

    let history = BuilderHistory::default();
    let aligned_fit = compatibility(&project, &aligned, &history).commitment_fit;
    assert!(compatibility(&project, &solo, &history).commitment_fit < aligned_fit);
    assert_eq!(
        compatibility(&project, &unstated, &history).commitment_fit,
        aligned_fit
    );
}

#[test]
fn delivery_history_rewards_volume_and_tag_overlap() {
    let mut project = make_project("p1", "owner");
    project.tags = vec!["rust".to_string()];

    let builder = make_builder("b");
    let none = compatibility(&project, &builder, &BuilderHistory::default());
    let seasoned = compatibility(
        &project,
        &builder,
        &BuilderHistory {
            verified_deliveries: 5,
            stack_tags: vec!["rust".to_string()],
        },
    );
    assert!(seasoned.delivery_history_fit > none.delivery_history_fit);
}

// ── Ranking ──────────────────────────────────────────────────────────────

fn outcome(builder_id: &str, score: u8, forge_score: u32) -> MatchOutcome {
    MatchOutcome {
        builder_id: builder_id.to_string(),
        score,
        explanation: String::new(),
        capability_fit: 0,
        reliability_fit: 0,
        commitment_fit: 0,
        delivery_history_fit: 0,
        forge_score,
        acceptance: forge_core::models::AcceptanceEstimate {
            percent: 50,
            confidence: AcceptanceConfidence::Low,
            reasons: vec![],
        },
    }
}

#[test]
fn ranking_sorts_ties_by_forge_score_then_input_order() {
    let ranked = ranking::rank(
        vec![
            outcome("a", 70, 100),
            outcome("b", 80, 50),
            outcome("c", 70, 400),
            outcome("d", 70, 100),
        ],
        10,
    );
    let ids: Vec<&str> = ranked.iter().map(|o| o.builder_id.as_str()).collect();
    // b wins on score; c breaks the 70-tie on forge score; a and d are
    // fully tied and keep input order.
    assert_eq!(ids, vec!["b", "c", "a", "d"]);
}

#[test]
fn ranking_truncates_to_the_page_size() {
    let candidates: Vec<MatchOutcome> =
        (0..30).map(|i| outcome(&format!("b{i}"), 50, i)).collect();
    assert_eq!(ranking::rank(candidates.clone(), 10).len(), 10);
    assert_eq!(ranking::rank(candidates, 20).len(), 20);
}

// ── Engine over the repositories ─────────────────────────────────────────

#[test]
fn match_engine_ranks_and_pages_the_pool() {
    let store = InMemoryStore::new();
    let now = Utc::now();

    let mut owner = make_builder("owner");
    owner.forge_score = 650;
    store.add_builder(owner);

    let mut project = make_project("p1", "owner");
    project.required_skills = vec!["engineering".to_string()];
    store.add_project(project);

    for i in 0..12 {
        let mut candidate = make_builder(&format!("c{i}"));
        candidate.skills.engineering = (i * 8) as u8;
        candidate.forge_score = 100 * i as u32;
        store.add_builder(candidate);
    }
    // Give one candidate real delivery history.
    let mut delivery = make_delivery("c11", DeliveryStatus::Verified);
    delivery.stack = vec!["rust".to_string()];
    store.add_delivery(delivery);
    store.add_invitation(make_invitation(
        "c11",
        "p1",
        InvitationStatus::Accepted,
        now - Duration::days(30),
    ));

    let engine = MatchEngine::new(&store, &store, &store, &store);
    let matches = engine.match_for_project("p1", now).unwrap();

    assert_eq!(matches.len(), 10, "owner view pages at 10");
    for pair in matches.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score
                    && pair[0].forge_score >= pair[1].forge_score)
        );
    }
    for m in &matches {
        assert_ne!(m.builder_id, "owner");
        assert!(!m.explanation.is_empty());
        assert!((5..=95).contains(&m.acceptance.percent));
        assert!(!m.acceptance.reasons.is_empty());
    }

    // Deterministic: the same request returns the same page.
    let again = engine.match_for_project("p1", now).unwrap();
    let ids: Vec<_> = matches.iter().map(|m| &m.builder_id).collect();
    let again_ids: Vec<_> = again.iter().map(|m| &m.builder_id).collect();
    assert_eq!(ids, again_ids);
}

#[test]
fn role_matcher_filters_by_role_and_pages_at_20() {
    let store = InMemoryStore::new();
    let now = Utc::now();
    store.add_builder(make_builder("owner"));
    store.add_project(make_project("p1", "owner"));

    for i in 0..25 {
        let mut candidate = make_builder(&format!("c{i}"));
        candidate.roles = vec!["fullstack".to_string()];
        store.add_builder(candidate);
    }
    let mut designer = make_builder("designer");
    designer.roles = vec!["design".to_string()];
    store.add_builder(designer);

    let engine = MatchEngine::new(&store, &store, &store, &store);
    let matches = engine.match_for_role("p1", "fullstack", now).unwrap();

    assert_eq!(matches.len(), 20, "role view pages at 20");
    assert!(matches.iter().all(|m| m.builder_id != "designer"));
}

#[test]
fn unknown_project_is_a_not_found_error() {
    let store = InMemoryStore::new();
    let engine = MatchEngine::new(&store, &store, &store, &store);
    let err = engine.match_for_project("missing", Utc::now()).unwrap_err();
    assert!(err.is_not_found());
}
