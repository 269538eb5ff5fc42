use crate::models::SalaryRange;

const NEUTRAL_SCORE: f64 = 50.0;

/// Keeps only ASCII digits ("$85,000" → 85000). `None` when no digits remain or the
/// number overflows.
pub fn parse_salary(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse::<u64>().ok()
}

/// Scores the candidate's expected salary against the offered range.
///
/// Asking below the floor is penalized at twice the rate of asking above the ceiling.
pub fn score_salary(expected_salary: &str, range: Option<&SalaryRange>) -> f64 {
    let Some(range) = range else {
        return NEUTRAL_SCORE;
    };
    let Some(expected) = parse_salary(expected_salary) else {
        return NEUTRAL_SCORE;
    };

    let (min, max, expected) = (range.min as f64, range.max as f64, expected as f64);

    let score = if expected < min {
        100.0 - (min - expected) / min * 100.0
    } else if expected > max {
        if max <= 0.0 {
            0.0
        } else {
            100.0 - (expected - max) / max * 50.0
        }
    } else {
        100.0
    };

    if score.is_finite() {
        score.clamp(0.0, 100.0)
    } else {
        0.0
    }
}
