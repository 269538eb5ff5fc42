use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scored compatibility between one candidate and one gig.
///
/// Every score is an integer in 0 – 100, rounded from the scorer's internal f64 values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmartMatch {
    pub candidate_id: Uuid,
    pub gig_id: Uuid,
    pub skill_match: u32,
    pub experience_match: u32,
    pub location_match: u32,
    pub salary_match: u32,
    pub availability_match: u32,
    pub overall_score: u32,
    pub reasoning: Vec<String>,
    pub recommendations: Vec<String>,
}
