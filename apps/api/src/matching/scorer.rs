//! Match Scoring — pluggable, trait-based scorer that measures a candidate against a gig.
//!
//! Default: `WeightedMatchScorer` (pure, synchronous, deterministic).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, so ranking and handlers never name the backend.

use uuid::Uuid;

use crate::matching::experience::{parse_years, score_experience};
use crate::matching::location::score_location;
use crate::matching::narrative::{build_narrative, NarrativeInput};
use crate::matching::salary::score_salary;
use crate::matching::skills::assess_skills;
use crate::models::{Candidate, MatchingCriteria, SmartMatch};

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Scores one candidate against one gig's criteria. Implementations must be pure:
/// the same inputs always produce the same `SmartMatch`.
pub trait MatchScorer: Send + Sync {
    fn score(&self, candidate: &Candidate, gig_id: Uuid, criteria: &MatchingCriteria)
        -> SmartMatch;
}

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub skill: f64,
    pub experience: f64,
    pub location: f64,
    pub salary: f64,
    pub availability: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skill: 0.4,
            experience: 0.25,
            location: 0.15,
            salary: 0.1,
            availability: 0.1,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedMatchScorer
// ────────────────────────────────────────────────────────────────────────────

/// Weighted five-factor scorer.
///
/// 1. skill (0.4): required/preferred overlap
/// 2. experience (0.25): years vs the level's band
/// 3. location (0.15): remote, or region overlap
/// 4. salary (0.1): expected vs offered range
/// 5. availability (0.1): "Available" in the candidate's status
#[derive(Debug, Clone, Default)]
pub struct WeightedMatchScorer {
    pub weights: ScoreWeights,
}

impl MatchScorer for WeightedMatchScorer {
    fn score(
        &self,
        candidate: &Candidate,
        gig_id: Uuid,
        criteria: &MatchingCriteria,
    ) -> SmartMatch {
        compute_smart_match(candidate, gig_id, criteria, &self.weights)
    }
}

/// Availability is a plain status string; only the literal "Available" counts.
pub fn score_availability(availability: &str) -> f64 {
    if availability.contains("Available") {
        100.0
    } else {
        50.0
    }
}

/// Maps a score into 0 – 100; non-finite values become 0.
fn clamp_score(score: f64) -> f64 {
    if score.is_finite() {
        score.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn to_output(score: f64) -> u32 {
    clamp_score(score).round() as u32
}

pub fn compute_smart_match(
    candidate: &Candidate,
    gig_id: Uuid,
    criteria: &MatchingCriteria,
    weights: &ScoreWeights,
) -> SmartMatch {
    let skills = assess_skills(
        &candidate.skills,
        &criteria.required_skills,
        &criteria.preferred_skills,
    );
    let skill_match = clamp_score(skills.score);

    let years = parse_years(&candidate.experience);
    let experience_match = clamp_score(score_experience(years, criteria.experience_level));

    let location_match = clamp_score(score_location(
        &candidate.location,
        criteria.location.as_deref(),
        criteria.work_type,
    ));

    let salary_match = clamp_score(score_salary(
        &candidate.expected_salary,
        criteria.salary_range.as_ref(),
    ));

    let availability_match = score_availability(&candidate.availability);

    let overall = clamp_score(
        skill_match * weights.skill
            + experience_match * weights.experience
            + location_match * weights.location
            + salary_match * weights.salary
            + availability_match * weights.availability,
    );

    let narrative = build_narrative(&NarrativeInput {
        skill_match,
        experience_match,
        location_match,
        years,
        level: criteria.experience_level,
        missing_required: &skills.missing_required,
    });

    SmartMatch {
        candidate_id: candidate.id,
        gig_id,
        skill_match: to_output(skill_match),
        experience_match: to_output(experience_match),
        location_match: to_output(location_match),
        salary_match: to_output(salary_match),
        availability_match: to_output(availability_match),
        overall_score: to_output(overall),
        reasoning: narrative.reasoning,
        recommendations: narrative.recommendations,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceLevel, SalaryRange, WorkType};

    fn make_candidate(skills: &[&str], experience: &str, location: &str) -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            name: "Test Candidate".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: experience.to_string(),
            location: location.to_string(),
            expected_salary: String::new(),
            availability: "Available".to_string(),
        }
    }

    fn make_criteria(
        required: &[&str],
        level: ExperienceLevel,
        work_type: WorkType,
    ) -> MatchingCriteria {
        MatchingCriteria {
            required_skills: required.iter().map(|s| s.to_string()).collect(),
            preferred_skills: vec![],
            experience_level: level,
            location: None,
            salary_range: None,
            work_type,
            availability: None,
        }
    }

    fn all_scores(m: &SmartMatch) -> [u32; 6] {
        [
            m.skill_match,
            m.experience_match,
            m.location_match,
            m.salary_match,
            m.availability_match,
            m.overall_score,
        ]
    }

    #[test]
    fn test_weights_sum_to_one() {
        let w = ScoreWeights::default();
        let sum = w.skill + w.experience + w.location + w.salary + w.availability;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_worked_example_scores_87() {
        let candidate = make_candidate(&["React", "Node.js"], "4", "Remote");
        let criteria = make_criteria(&["React"], ExperienceLevel::Mid, WorkType::Remote);
        let gig_id = Uuid::new_v4();

        let m = WeightedMatchScorer::default().score(&candidate, gig_id, &criteria);

        assert_eq!(m.skill_match, 80);
        assert_eq!(m.experience_match, 100);
        assert_eq!(m.location_match, 100);
        assert_eq!(m.salary_match, 50);
        assert_eq!(m.availability_match, 100);
        assert_eq!(m.overall_score, 87);
        assert_eq!(m.candidate_id, candidate.id);
        assert_eq!(m.gig_id, gig_id);
        assert!(m.reasoning[0].starts_with("Excellent skill match (80%)"));
        assert!(m.recommendations.is_empty());
    }

    #[test]
    fn test_remote_always_full_location() {
        let candidate = make_candidate(&["Go"], "2", "Nowhere, Atlantis");
        let mut criteria = make_criteria(&["Go"], ExperienceLevel::Junior, WorkType::Remote);
        criteria.location = Some("Tokyo, Japan".to_string());
        let m = WeightedMatchScorer::default().score(&candidate, Uuid::new_v4(), &criteria);
        assert_eq!(m.location_match, 100);
    }

    #[test]
    fn test_empty_required_skills_scores_zero_not_nan() {
        let candidate = make_candidate(&["Rust"], "7", "Berlin");
        let criteria = make_criteria(&[], ExperienceLevel::Senior, WorkType::Remote);
        let m = WeightedMatchScorer::default().score(&candidate, Uuid::new_v4(), &criteria);
        assert_eq!(m.skill_match, 0);
        // 0 + 25 + 15 + 5 + 10
        assert_eq!(m.overall_score, 55);
    }

    #[test]
    fn test_malformed_candidate_stays_in_bounds() {
        let mut candidate = make_candidate(&[""], "lots", "");
        candidate.expected_salary = "99999999999999999999999999".to_string();
        candidate.availability = "unavailable".to_string();
        let mut criteria = make_criteria(&["Rust"], ExperienceLevel::Lead, WorkType::Onsite);
        criteria.location = Some("Oslo".to_string());
        criteria.salary_range = Some(SalaryRange { min: 0, max: 0 });

        let m = WeightedMatchScorer::default().score(&candidate, Uuid::new_v4(), &criteria);
        for score in all_scores(&m) {
            assert!(score <= 100, "Score out of range: {score}");
        }
        assert_eq!(m.skill_match, 0);
        assert_eq!(m.experience_match, 0);
        assert_eq!(m.salary_match, 50);
        assert_eq!(m.availability_match, 50);
    }

    #[test]
    fn test_scores_bounded_across_inputs() {
        let levels = [
            ExperienceLevel::Entry,
            ExperienceLevel::Junior,
            ExperienceLevel::Mid,
            ExperienceLevel::Senior,
            ExperienceLevel::Lead,
            ExperienceLevel::Unknown,
        ];
        let scorer = WeightedMatchScorer::default();
        for level in levels {
            for years in ["0", "3", "9", "30", "n/a"] {
                for salary in ["", "$10", "$60,000", "$900,000"] {
                    let mut candidate =
                        make_candidate(&["Rust", "SQL"], years, "Austin, TX, USA");
                    candidate.expected_salary = salary.to_string();
                    let mut criteria =
                        make_criteria(&["Rust", "Kafka"], level, WorkType::Hybrid);
                    criteria.preferred_skills = vec!["SQL".to_string()];
                    criteria.location = Some("Dallas, TX, USA".to_string());
                    criteria.salary_range = Some(SalaryRange {
                        min: 50_000,
                        max: 80_000,
                    });

                    let m = scorer.score(&candidate, Uuid::new_v4(), &criteria);
                    for score in all_scores(&m) {
                        assert!(score <= 100);
                    }
                }
            }
        }
    }

    #[test]
    fn test_senior_gap_recommendation() {
        let candidate = make_candidate(&["Java"], "2", "Remote");
        let criteria = make_criteria(&["Java"], ExperienceLevel::Senior, WorkType::Remote);
        let m = WeightedMatchScorer::default().score(&candidate, Uuid::new_v4(), &criteria);
        // 6 - 2 = 4 years short → 20
        assert_eq!(m.experience_match, 20);
        assert!(m
            .recommendations
            .iter()
            .any(|r| r.contains("before targeting senior roles")));
    }

    #[test]
    fn test_negative_experience_is_not_full_credit() {
        let candidate = make_candidate(&["Go"], "-2", "Remote");
        let junior = make_criteria(&["Go"], ExperienceLevel::Junior, WorkType::Remote);
        let entry = make_criteria(&["Go"], ExperienceLevel::Entry, WorkType::Remote);
        let scorer = WeightedMatchScorer::default();

        assert_eq!(scorer.score(&candidate, Uuid::new_v4(), &junior).experience_match, 40);
        assert_eq!(scorer.score(&candidate, Uuid::new_v4(), &entry).experience_match, 60);
    }

    #[test]
    fn test_availability_is_case_sensitive() {
        assert_eq!(score_availability("Available immediately"), 100.0);
        assert_eq!(score_availability("Not Available"), 100.0);
        assert_eq!(score_availability("available"), 50.0);
        assert_eq!(score_availability(""), 50.0);
    }

    #[test]
    fn test_custom_weights() {
        let scorer = WeightedMatchScorer {
            weights: ScoreWeights {
                skill: 1.0,
                experience: 0.0,
                location: 0.0,
                salary: 0.0,
                availability: 0.0,
            },
        };
        let candidate = make_candidate(&["React"], "4", "Remote");
        let criteria = make_criteria(&["React"], ExperienceLevel::Mid, WorkType::Remote);
        assert_eq!(scorer.score(&candidate, Uuid::new_v4(), &criteria).overall_score, 80);
    }
}
