use tracing::debug;
use uuid::Uuid;

use crate::matching::scorer::MatchScorer;
use crate::models::{Candidate, MatchingCriteria, SmartMatch};

/// Matches scoring below this are never returned from ranking.
pub const MIN_OVERALL_SCORE: u32 = 40;
pub const DEFAULT_MATCH_LIMIT: usize = 10;
pub const MAX_MATCH_LIMIT: usize = 100;

/// Scores every candidate for one gig and returns the best `limit` matches.
///
/// Candidates under `MIN_OVERALL_SCORE` are dropped. The sort is stable, so candidates
/// with equal overall scores keep their input order.
pub fn find_best_matches(
    scorer: &dyn MatchScorer,
    candidates: &[Candidate],
    gig_id: Uuid,
    criteria: &MatchingCriteria,
    limit: usize,
) -> Vec<SmartMatch> {
    let mut matches: Vec<SmartMatch> = candidates
        .iter()
        .map(|candidate| scorer.score(candidate, gig_id, criteria))
        .filter(|m| m.overall_score >= MIN_OVERALL_SCORE)
        .collect();

    let qualified = matches.len();
    matches.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));
    matches.truncate(limit);

    debug!(
        %gig_id,
        scored = candidates.len(),
        qualified,
        returned = matches.len(),
        "Ranked candidates"
    );

    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::scorer::WeightedMatchScorer;
    use crate::models::{ExperienceLevel, WorkType};

    fn make_candidate(skills: &[&str], experience: &str, availability: &str) -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            name: String::new(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: experience.to_string(),
            location: "Remote".to_string(),
            expected_salary: String::new(),
            availability: availability.to_string(),
        }
    }

    fn criteria() -> MatchingCriteria {
        MatchingCriteria {
            required_skills: vec!["React".to_string(), "TypeScript".to_string()],
            preferred_skills: vec!["GraphQL".to_string()],
            experience_level: ExperienceLevel::Mid,
            location: None,
            salary_range: None,
            work_type: WorkType::Remote,
            availability: None,
        }
    }

    /// Scorer that returns a fixed overall score per candidate name.
    struct FixedScorer;

    impl MatchScorer for FixedScorer {
        fn score(&self, candidate: &Candidate, gig_id: Uuid, _: &MatchingCriteria) -> SmartMatch {
            SmartMatch {
                candidate_id: candidate.id,
                gig_id,
                skill_match: 0,
                experience_match: 0,
                location_match: 0,
                salary_match: 0,
                availability_match: 0,
                overall_score: candidate.name.parse().unwrap_or(0),
                reasoning: vec![],
                recommendations: vec![],
            }
        }
    }

    fn named(score: &str) -> Candidate {
        Candidate {
            name: score.to_string(),
            ..make_candidate(&[], "0", "")
        }
    }

    #[test]
    fn test_sorted_descending_and_filtered() {
        let candidates = vec![
            make_candidate(&["React"], "4", "Available"),
            make_candidate(&["React", "TypeScript", "GraphQL"], "4", "Available"),
            make_candidate(&[], "0", "Busy"),
            make_candidate(&["React", "TypeScript"], "9", "Busy"),
        ];
        let matches = find_best_matches(
            &WeightedMatchScorer::default(),
            &candidates,
            Uuid::new_v4(),
            &criteria(),
            DEFAULT_MATCH_LIMIT,
        );

        assert!(matches.iter().all(|m| m.overall_score >= MIN_OVERALL_SCORE));
        assert!(matches
            .windows(2)
            .all(|w| w[0].overall_score >= w[1].overall_score));
        assert_eq!(matches[0].candidate_id, candidates[1].id);
        assert!(!matches.iter().any(|m| m.candidate_id == candidates[2].id));
    }

    #[test]
    fn test_limit_truncates() {
        let candidates: Vec<Candidate> = (0..25)
            .map(|_| make_candidate(&["React", "TypeScript"], "4", "Available"))
            .collect();
        let scorer = WeightedMatchScorer::default();
        let gig_id = Uuid::new_v4();

        let matches = find_best_matches(&scorer, &candidates, gig_id, &criteria(), 10);
        assert_eq!(matches.len(), 10);

        let none = find_best_matches(&scorer, &candidates, gig_id, &criteria(), 0);
        assert!(none.is_empty());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let candidates = vec![named("70"), named("90"), named("70"), named("39"), named("70")];
        let matches = find_best_matches(&FixedScorer, &candidates, Uuid::new_v4(), &criteria(), 10);

        let ids: Vec<Uuid> = matches.iter().map(|m| m.candidate_id).collect();
        assert_eq!(
            ids,
            vec![candidates[1].id, candidates[0].id, candidates[2].id, candidates[4].id]
        );
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let candidates = vec![named("40"), named("39")];
        let matches = find_best_matches(&FixedScorer, &candidates, Uuid::new_v4(), &criteria(), 10);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].overall_score, 40);
    }

    #[test]
    fn test_empty_candidates() {
        let matches = find_best_matches(&FixedScorer, &[], Uuid::new_v4(), &criteria(), 10);
        assert!(matches.is_empty());
    }
}
