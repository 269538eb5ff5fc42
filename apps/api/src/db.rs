use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::Config;
use crate::matching::scorer::WeightedMatchScorer;
use crate::state::AppState;
use crate::store::postgres::{PgCandidateRepository, PgGigRepository};

/// Schema for the Postgres repositories, embedded from `apps/api/migrations`.
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Creates a PostgreSQL connection pool for the candidate/gig tables.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .context("failed to connect to DATABASE_URL")?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Picks the repository backend: Postgres when `DATABASE_URL` is set, memory otherwise.
pub async fn build_state(config: Config) -> Result<AppState> {
    let Some(database_url) = config.database_url.clone() else {
        warn!("DATABASE_URL not set; candidates and gigs are kept in memory");
        return Ok(AppState::in_memory(config));
    };

    let pool = create_pool(&database_url).await?;
    MIGRATOR
        .run(&pool)
        .await
        .context("failed to apply database migrations")?;
    info!("Database migrations applied");

    Ok(AppState {
        config,
        scorer: Arc::new(WeightedMatchScorer::default()),
        candidates: Arc::new(PgCandidateRepository::new(pool.clone())),
        gigs: Arc::new(PgGigRepository::new(pool)),
    })
}
