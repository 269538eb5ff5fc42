use crate::models::ExperienceLevel;

/// Neutral score for a level outside the known bands.
const UNKNOWN_LEVEL_SCORE: f64 = 50.0;
const UNDER_PENALTY_PER_YEAR: f64 = 20.0;
const OVER_PENALTY_PER_YEAR: f64 = 10.0;

/// Inclusive year band for a level, or `None` for `Unknown`.
pub fn experience_band(level: ExperienceLevel) -> Option<(i64, i64)> {
    match level {
        ExperienceLevel::Entry => Some((0, 1)),
        ExperienceLevel::Junior => Some((1, 3)),
        ExperienceLevel::Mid => Some((3, 6)),
        ExperienceLevel::Senior => Some((6, 10)),
        ExperienceLevel::Lead => Some((8, 15)),
        ExperienceLevel::Unknown => None,
    }
}

/// Reads the leading signed integer from free text ("5+ years" → 5, "-2" → -2).
/// Non-numeric text gives 0. Negative values are kept so the under-qualified penalty
/// applies to them.
pub fn parse_years(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    let years = digits.parse::<i64>().unwrap_or(0);

    if negative {
        -years
    } else {
        years
    }
}

/// Scores years of experience against the level's band.
///
/// Falling short costs 20 points a year, overshooting costs 10.
pub fn score_experience(years: i64, level: ExperienceLevel) -> f64 {
    let Some((min, max)) = experience_band(level) else {
        return UNKNOWN_LEVEL_SCORE;
    };

    if years < min {
        (100.0 - (min as f64 - years as f64) * UNDER_PENALTY_PER_YEAR).max(0.0)
    } else if years > max {
        (100.0 - (years as f64 - max as f64) * OVER_PENALTY_PER_YEAR).max(0.0)
    } else {
        100.0
    }
}
