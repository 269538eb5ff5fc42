//! Deterministic reasoning/recommendation strings for a scored match.

use crate::models::ExperienceLevel;

/// Candidates below this many years get the "too early for senior" advice.
const SENIOR_MIN_YEARS_HINT: i64 = 5;

/// Inputs the templates read. Scores are the unrounded 0 – 100 values.
pub struct NarrativeInput<'a> {
    pub skill_match: f64,
    pub experience_match: f64,
    pub location_match: f64,
    pub years: i64,
    pub level: ExperienceLevel,
    pub missing_required: &'a [String],
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Narrative {
    pub reasoning: Vec<String>,
    pub recommendations: Vec<String>,
}

pub fn build_narrative(input: &NarrativeInput<'_>) -> Narrative {
    let mut narrative = Narrative::default();
    let skill_pct = input.skill_match.round() as u32;

    if input.skill_match >= 80.0 {
        narrative.reasoning.push(format!(
            "Excellent skill match ({skill_pct}%) with the required technologies"
        ));
    } else if input.skill_match >= 60.0 {
        narrative.reasoning.push(format!(
            "Good skill match ({skill_pct}%) covering most required skills"
        ));
    } else {
        narrative.reasoning.push(format!(
            "Limited skill match ({skill_pct}%) against the required skills"
        ));
        if !input.missing_required.is_empty() {
            narrative.recommendations.push(format!(
                "Consider developing skills in: {}",
                input.missing_required.join(", ")
            ));
        }
    }

    let level = input.level.as_str();
    if input.experience_match >= 90.0 {
        narrative
            .reasoning
            .push(format!("Experience fits the {level} level requirements"));
    } else if input.experience_match < 60.0 {
        if input.level == ExperienceLevel::Senior && input.years < SENIOR_MIN_YEARS_HINT {
            narrative.recommendations.push(
                "Gain more hands-on experience before targeting senior roles".to_string(),
            );
        } else {
            narrative.recommendations.push(format!(
                "Experience differs from the {level} level this gig expects"
            ));
        }
    }

    if input.location_match < 50.0 {
        narrative.recommendations.push(
            "Location may be a concern; discuss remote or relocation options".to_string(),
        );
    }

    narrative
}
