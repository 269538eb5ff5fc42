use std::sync::Arc;

use crate::config::Config;
use crate::matching::scorer::{MatchScorer, WeightedMatchScorer};
use crate::store::memory::{InMemoryCandidateRepository, InMemoryGigRepository};
use crate::store::{CandidateRepository, GigRepository};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: WeightedMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
    pub candidates: Arc<dyn CandidateRepository>,
    pub gigs: Arc<dyn GigRepository>,
}

impl AppState {
    /// State backed by fresh in-memory repositories.
    pub fn in_memory(config: Config) -> Self {
        AppState {
            config,
            scorer: Arc::new(WeightedMatchScorer::default()),
            candidates: Arc::new(InMemoryCandidateRepository::new()),
            gigs: Arc::new(InMemoryGigRepository::new()),
        }
    }
}
