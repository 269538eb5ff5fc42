//! Boundary checks for scoring inputs. The scorer itself never fails; these reject
//! records that would otherwise be silently coerced to neutral scores.

use crate::errors::AppError;
use crate::matching::ranking::MAX_MATCH_LIMIT;
use crate::models::{MatchingCriteria, NewCandidate};

fn has_blank(items: &[String]) -> bool {
    items.iter().any(|s| s.trim().is_empty())
}

pub fn validate_criteria(criteria: &MatchingCriteria) -> Result<(), AppError> {
    if criteria.required_skills.is_empty() {
        return Err(AppError::Validation(
            "criteria.required_skills must contain at least one skill".to_string(),
        ));
    }
    if has_blank(&criteria.required_skills) || has_blank(&criteria.preferred_skills) {
        return Err(AppError::Validation(
            "criteria skill lists cannot contain blank entries".to_string(),
        ));
    }
    if let Some(range) = &criteria.salary_range {
        if range.min > range.max {
            return Err(AppError::Validation(format!(
                "criteria.salary_range.min ({}) exceeds max ({})",
                range.min, range.max
            )));
        }
    }
    Ok(())
}

pub fn validate_candidate_skills(skills: &[String]) -> Result<(), AppError> {
    if has_blank(skills) {
        return Err(AppError::Validation(
            "candidate skills cannot contain blank entries".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_new_candidate(candidate: &NewCandidate) -> Result<(), AppError> {
    validate_candidate_skills(&candidate.skills)
}

/// Resolves an optional request limit against the configured default.
pub fn resolve_limit(requested: Option<usize>, default: usize) -> Result<usize, AppError> {
    let limit = requested.unwrap_or(default);
    if limit == 0 || limit > MAX_MATCH_LIMIT {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_MATCH_LIMIT}"
        )));
    }
    Ok(limit)
}
