//! Axum route handlers for the Matching API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::ranking::find_best_matches;
use crate::matching::validation::{
    resolve_limit, validate_candidate_skills, validate_criteria, validate_new_candidate,
};
use crate::models::{
    Candidate, CandidateRecord, GigRecord, MatchingCriteria, NewCandidate, NewGig, SmartMatch,
};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub candidate: Candidate,
    pub gig_id: Uuid,
    pub criteria: MatchingCriteria,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub candidates: Vec<Candidate>,
    pub gig_id: Uuid,
    pub criteria: MatchingCriteria,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub gig_id: Uuid,
    pub matches: Vec<SmartMatch>,
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/matches/score
///
/// Scores a single candidate against a gig's criteria.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<SmartMatch>, AppError> {
    validate_criteria(&request.criteria)?;
    validate_candidate_skills(&request.candidate.skills)?;

    let smart_match = state
        .scorer
        .score(&request.candidate, request.gig_id, &request.criteria);

    info!(
        candidate_id = %smart_match.candidate_id,
        gig_id = %smart_match.gig_id,
        overall_score = smart_match.overall_score,
        "Scored candidate"
    );
    Ok(Json(smart_match))
}

/// POST /api/v1/matches/rank
///
/// Ranks the supplied candidates for one gig. Matches under 40 are dropped.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    validate_criteria(&request.criteria)?;
    for candidate in &request.candidates {
        validate_candidate_skills(&candidate.skills)?;
    }
    let limit = resolve_limit(request.limit, state.config.default_match_limit)?;

    let matches = find_best_matches(
        state.scorer.as_ref(),
        &request.candidates,
        request.gig_id,
        &request.criteria,
        limit,
    );

    info!(
        gig_id = %request.gig_id,
        candidates = request.candidates.len(),
        returned = matches.len(),
        "Ranked candidates for gig"
    );
    Ok(Json(RankResponse {
        gig_id: request.gig_id,
        matches,
    }))
}

/// GET /api/v1/gigs/:id/matches
///
/// Ranks every stored candidate against a stored gig.
pub async fn handle_gig_matches(
    State(state): State<AppState>,
    Path(gig_id): Path<Uuid>,
    Query(params): Query<LimitQuery>,
) -> Result<Json<RankResponse>, AppError> {
    let limit = resolve_limit(params.limit, state.config.default_match_limit)?;

    let gig = state
        .gigs
        .get(gig_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Gig {gig_id} not found")))?;

    let candidates: Vec<Candidate> = state
        .candidates
        .list()
        .await?
        .into_iter()
        .map(|record| record.candidate)
        .collect();

    let matches = find_best_matches(
        state.scorer.as_ref(),
        &candidates,
        gig_id,
        &gig.gig.criteria,
        limit,
    );

    Ok(Json(RankResponse { gig_id, matches }))
}

// ────────────────────────────────────────────────────────────────────────────
// Candidates
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/candidates
pub async fn handle_create_candidate(
    State(state): State<AppState>,
    Json(request): Json<NewCandidate>,
) -> Result<(StatusCode, Json<CandidateRecord>), AppError> {
    validate_new_candidate(&request)?;
    let record = state.candidates.create(request).await?;
    info!(candidate_id = %record.candidate.id, "Created candidate");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CandidateRecord>, AppError> {
    state
        .candidates
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))
}

/// PUT /api/v1/candidates/:id
pub async fn handle_update_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<NewCandidate>,
) -> Result<Json<CandidateRecord>, AppError> {
    validate_new_candidate(&request)?;
    state
        .candidates
        .update(id, request)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))
}

// ────────────────────────────────────────────────────────────────────────────
// Gigs
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/gigs
pub async fn handle_create_gig(
    State(state): State<AppState>,
    Json(request): Json<NewGig>,
) -> Result<(StatusCode, Json<GigRecord>), AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    validate_criteria(&request.criteria)?;
    let record = state.gigs.create(request).await?;
    info!(gig_id = %record.gig.id, "Created gig");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/v1/gigs/:id
pub async fn handle_get_gig(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GigRecord>, AppError> {
    state
        .gigs
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Gig {id} not found")))
}

/// PUT /api/v1/gigs/:id
pub async fn handle_update_gig(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<NewGig>,
) -> Result<Json<GigRecord>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    validate_criteria(&request.criteria)?;
    state
        .gigs
        .update(id, request)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Gig {id} not found")))
}
