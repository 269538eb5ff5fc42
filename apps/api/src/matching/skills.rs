//! Skill overlap between a candidate and a gig's required/preferred skill lists.

const REQUIRED_SHARE: f64 = 0.8;
const PREFERRED_SHARE: f64 = 0.2;

/// Result of comparing candidate skills to the gig's skill lists.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillAssessment {
    /// 0.0 – 100.0
    pub score: f64,
    /// Required skills no candidate skill covers, in criteria order.
    pub missing_required: Vec<String>,
}

/// A skill is covered when any candidate skill contains it or is contained by it,
/// case-insensitively. Blank candidate skills cover nothing.
pub fn skill_covered(candidate_skills_lower: &[String], skill: &str) -> bool {
    let skill_lower = skill.trim().to_lowercase();
    if skill_lower.is_empty() {
        return false;
    }
    candidate_skills_lower
        .iter()
        .any(|c| c.contains(&skill_lower) || skill_lower.contains(c.as_str()))
}

/// Scores skill overlap: 80% of the weight comes from required skills, 20% from preferred.
///
/// An empty required list yields 0 rather than dividing by zero.
pub fn assess_skills(
    candidate_skills: &[String],
    required: &[String],
    preferred: &[String],
) -> SkillAssessment {
    if required.is_empty() {
        return SkillAssessment {
            score: 0.0,
            missing_required: vec![],
        };
    }

    let lowered: Vec<String> = candidate_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let mut missing_required = Vec::new();
    let mut matched_required = 0usize;
    for skill in required {
        if skill_covered(&lowered, skill) {
            matched_required += 1;
        } else {
            missing_required.push(skill.clone());
        }
    }

    let required_score = matched_required as f64 / required.len() as f64 * REQUIRED_SHARE;

    let preferred_score = if preferred.is_empty() {
        0.0
    } else {
        let matched = preferred
            .iter()
            .filter(|s| skill_covered(&lowered, s))
            .count();
        matched as f64 / preferred.len() as f64 * PREFERRED_SHARE
    };

    SkillAssessment {
        score: ((required_score + preferred_score) * 100.0).min(100.0),
        missing_required,
    }
}
