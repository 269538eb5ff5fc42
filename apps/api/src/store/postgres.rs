use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{Candidate, CandidateRecord, Gig, GigRecord, NewCandidate, NewGig};
use crate::store::{CandidateRepository, GigRepository};

#[derive(Debug, Clone, FromRow)]
struct CandidateRow {
    id: Uuid,
    name: String,
    skills: Vec<String>,
    experience: String,
    location: String,
    expected_salary: String,
    availability: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CandidateRow> for CandidateRecord {
    fn from(row: CandidateRow) -> Self {
        CandidateRecord {
            candidate: Candidate {
                id: row.id,
                name: row.name,
                skills: row.skills,
                experience: row.experience,
                location: row.location,
                expected_salary: row.expected_salary,
                availability: row.availability,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
struct GigRow {
    id: Uuid,
    title: String,
    company: String,
    description: Option<String>,
    criteria: Value,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<GigRow> for GigRecord {
    type Error = AppError;

    fn try_from(row: GigRow) -> Result<Self, Self::Error> {
        let criteria = serde_json::from_value(row.criteria)
            .with_context(|| format!("gig {} has malformed criteria JSON", row.id))?;
        Ok(GigRecord {
            gig: Gig {
                id: row.id,
                title: row.title,
                company: row.company,
                description: row.description,
                criteria,
            },
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn criteria_json(gig: &NewGig) -> Result<Value, AppError> {
    Ok(serde_json::to_value(&gig.criteria).context("failed to serialize gig criteria")?)
}

/// Candidates in the `candidates` table (see migrations/0001_init.sql).
pub struct PgCandidateRepository {
    pool: PgPool,
}

impl PgCandidateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateRepository for PgCandidateRepository {
    async fn create(&self, candidate: NewCandidate) -> Result<CandidateRecord, AppError> {
        let row: CandidateRow = sqlx::query_as(
            r#"
            INSERT INTO candidates
                (id, name, skills, experience, location, expected_salary, availability)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&candidate.name)
        .bind(&candidate.skills)
        .bind(&candidate.experience)
        .bind(&candidate.location)
        .bind(&candidate.expected_salary)
        .bind(&candidate.availability)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn get(&self, id: Uuid) -> Result<Option<CandidateRecord>, AppError> {
        let row: Option<CandidateRow> = sqlx::query_as("SELECT * FROM candidates WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Into::into))
    }

    async fn update(
        &self,
        id: Uuid,
        candidate: NewCandidate,
    ) -> Result<Option<CandidateRecord>, AppError> {
        let row: Option<CandidateRow> = sqlx::query_as(
            r#"
            UPDATE candidates
            SET name = $2, skills = $3, experience = $4, location = $5,
                expected_salary = $6, availability = $7, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&candidate.name)
        .bind(&candidate.skills)
        .bind(&candidate.experience)
        .bind(&candidate.location)
        .bind(&candidate.expected_salary)
        .bind(&candidate.availability)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<CandidateRecord>, AppError> {
        let rows: Vec<CandidateRow> =
            sqlx::query_as("SELECT * FROM candidates ORDER BY created_at, id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

/// Gigs in the `gigs` table; criteria live in a JSONB column.
pub struct PgGigRepository {
    pool: PgPool,
}

impl PgGigRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GigRepository for PgGigRepository {
    async fn create(&self, gig: NewGig) -> Result<GigRecord, AppError> {
        let criteria = criteria_json(&gig)?;
        let row: GigRow = sqlx::query_as(
            r#"
            INSERT INTO gigs (id, title, company, description, criteria)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&gig.title)
        .bind(&gig.company)
        .bind(&gig.description)
        .bind(criteria)
        .fetch_one(&self.pool)
        .await?;
        row.try_into()
    }

    async fn get(&self, id: Uuid) -> Result<Option<GigRecord>, AppError> {
        let row: Option<GigRow> = sqlx::query_as("SELECT * FROM gigs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(GigRecord::try_from).transpose()
    }

    async fn update(&self, id: Uuid, gig: NewGig) -> Result<Option<GigRecord>, AppError> {
        let criteria = criteria_json(&gig)?;
        let row: Option<GigRow> = sqlx::query_as(
            r#"
            UPDATE gigs
            SET title = $2, company = $3, description = $4, criteria = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&gig.title)
        .bind(&gig.company)
        .bind(&gig.description)
        .bind(criteria)
        .fetch_optional(&self.pool)
        .await?;
        row.map(GigRecord::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn gig_row(criteria: Value) -> GigRow {
        GigRow {
            id: Uuid::new_v4(),
            title: "Data intern".to_string(),
            company: "Acme".to_string(),
            description: None,
            criteria,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_gig_row_decodes_criteria() {
        let row = gig_row(json!({
            "required_skills": ["SQL"],
            "experience_level": "entry",
            "work_type": "onsite",
            "location": "Nairobi, Kenya"
        }));
        let record = GigRecord::try_from(row).unwrap();
        assert_eq!(record.gig.criteria.required_skills, vec!["SQL"]);
        assert_eq!(record.gig.criteria.location.as_deref(), Some("Nairobi, Kenya"));
    }

    #[test]
    fn test_gig_row_with_bad_criteria_is_internal_error() {
        let result = GigRecord::try_from(gig_row(json!({"required_skills": 3})));
        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[test]
    fn test_candidate_row_maps_fields() {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let record: CandidateRecord = CandidateRow {
            id,
            name: "Kofi".to_string(),
            skills: vec!["Go".to_string()],
            experience: "2".to_string(),
            location: "Accra".to_string(),
            expected_salary: "$30,000".to_string(),
            availability: "Available".to_string(),
            created_at: now,
            updated_at: now,
        }
        .into();
        assert_eq!(record.candidate.id, id);
        assert_eq!(record.candidate.skills, vec!["Go"]);
    }
}
