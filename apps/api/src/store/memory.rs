use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{CandidateRecord, GigRecord, NewCandidate, NewGig};
use crate::store::{CandidateRepository, GigRepository};

/// Per-instance candidate store used when no database is configured, and in tests.
/// Records are kept in insertion order.
#[derive(Default)]
pub struct InMemoryCandidateRepository {
    records: RwLock<Vec<CandidateRecord>>,
}

impl InMemoryCandidateRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CandidateRepository for InMemoryCandidateRepository {
    async fn create(&self, candidate: NewCandidate) -> Result<CandidateRecord, AppError> {
        let now = Utc::now();
        let record = CandidateRecord {
            candidate: candidate.into_candidate(Uuid::new_v4()),
            created_at: now,
            updated_at: now,
        };
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<CandidateRecord>, AppError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.candidate.id == id).cloned())
    }

    async fn update(
        &self,
        id: Uuid,
        candidate: NewCandidate,
    ) -> Result<Option<CandidateRecord>, AppError> {
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|r| r.candidate.id == id) else {
            return Ok(None);
        };
        record.candidate = candidate.into_candidate(id);
        record.updated_at = Utc::now();
        Ok(Some(record.clone()))
    }

    async fn list(&self) -> Result<Vec<CandidateRecord>, AppError> {
        Ok(self.records.read().await.clone())
    }
}

#[derive(Default)]
pub struct InMemoryGigRepository {
    records: RwLock<Vec<GigRecord>>,
}

impl InMemoryGigRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GigRepository for InMemoryGigRepository {
    async fn create(&self, gig: NewGig) -> Result<GigRecord, AppError> {
        let now = Utc::now();
        let record = GigRecord {
            gig: gig.into_gig(Uuid::new_v4()),
            created_at: now,
            updated_at: now,
        };
        self.records.write().await.push(record.clone());
        Ok(record)
    }

    async fn get(&self, id: Uuid) -> Result<Option<GigRecord>, AppError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.gig.id == id).cloned())
    }

    async fn update(&self, id: Uuid, gig: NewGig) -> Result<Option<GigRecord>, AppError> {
        let mut records = self.records.write().await;
        let Some(record) = records.iter_mut().find(|r| r.gig.id == id) else {
            return Ok(None);
        };
        record.gig = gig.into_gig(id);
        record.updated_at = Utc::now();
        Ok(Some(record.clone()))
    }
}
