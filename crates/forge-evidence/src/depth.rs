//! Keyword classification of delivery stack tags and titles into depth
//! flags. The flags are a boolean feature vector at the score-engine
//! boundary; the vocabulary lives only here and can evolve freely.

use regex::Regex;
use std::sync::LazyLock;

use forge_core::models::DepthFlags;

static AUTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(auth|oauth|login|signin|signup|jwt|sso|session)s?\b").unwrap()
});

static DATABASE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(database|postgres|postgresql|mysql|sqlite|mongodb|mongo|redis|sql|supabase|dynamodb)\b")
        .unwrap()
});

static API_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(api|rest|graphql|grpc|endpoint)s?\b").unwrap()
});

static INTEGRATIONS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(integration|webhook|zapier|slack|discord|twilio|sendgrid|firebase|aws|gcp|s3)s?\b")
        .unwrap()
});

static PAYMENTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(payment|stripe|paypal|billing|checkout|subscription)s?\b").unwrap()
});

static BACKGROUND_JOBS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(queue|worker|cron|background job|scheduler|sidekiq|celery)s?\b").unwrap()
});

/// Pluggable depth classifier. The default uses the built-in vocabularies;
/// a replacement can be constructed from custom patterns without touching
/// the score engine.
pub struct DepthClassifier {
    auth: &'static Regex,
    database: &'static Regex,
    api: &'static Regex,
    integrations: &'static Regex,
    payments: &'static Regex,
    background_jobs: &'static Regex,
}

impl Default for DepthClassifier {
    fn default() -> Self {
        Self {
            auth: &AUTH_RE,
            database: &DATABASE_RE,
            api: &API_RE,
            integrations: &INTEGRATIONS_RE,
            payments: &PAYMENTS_RE,
            background_jobs: &BACKGROUND_JOBS_RE,
        }
    }
}

impl DepthClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the concatenation of a delivery's stack tags and title.
    pub fn classify(&self, stack: &[String], title: &str) -> DepthFlags {
        let mut text = stack.join(" ");
        text.push(' ');
        text.push_str(title);

        DepthFlags {
            auth: self.auth.is_match(&text),
            database: self.database.is_match(&text),
            api: self.api.is_match(&text),
            integrations: self.integrations.is_match(&text),
            payments: self.payments.is_match(&text),
            background_jobs: self.background_jobs.is_match(&text),
        }
    }
}
