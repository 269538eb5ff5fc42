//! Candidate and gig repositories.
//!
//! Handlers only see `Arc<dyn CandidateRepository>` / `Arc<dyn GigRepository>`; the backend
//! (in-memory or Postgres) is chosen once at startup from `DATABASE_URL`.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CandidateRecord, GigRecord, NewCandidate, NewGig};

#[async_trait]
pub trait CandidateRepository: Send + Sync {
    async fn create(&self, candidate: NewCandidate) -> Result<CandidateRecord, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<CandidateRecord>, AppError>;

    /// Replaces the stored fields. `None` when no candidate has this id.
    async fn update(
        &self,
        id: Uuid,
        candidate: NewCandidate,
    ) -> Result<Option<CandidateRecord>, AppError>;

    /// All candidates, oldest first.
    async fn list(&self) -> Result<Vec<CandidateRecord>, AppError>;
}

#[async_trait]
pub trait GigRepository: Send + Sync {
    async fn create(&self, gig: NewGig) -> Result<GigRecord, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<GigRecord>, AppError>;

    async fn update(&self, id: Uuid, gig: NewGig) -> Result<Option<GigRecord>, AppError>;
}
