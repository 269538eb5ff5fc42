use crate::models::WorkType;

const NEUTRAL_SCORE: f64 = 50.0;

fn split_parts(location: &str) -> Vec<String> {
    location
        .split(',')
        .map(|p| p.trim().to_lowercase())
        .filter(|p| !p.is_empty())
        .collect()
}

/// Scores how well the candidate's location fits the gig.
///
/// Remote gigs always score 100. A missing job location is neutral (50), and so is a
/// blank candidate location: the empty string would otherwise be "contained" in every
/// job location and score 100. Otherwise a full-string containment scores 100, and
/// failing that the comma-separated parts ("City, State, Country") are compared pairwise.
pub fn score_location(
    candidate_location: &str,
    job_location: Option<&str>,
    work_type: WorkType,
) -> f64 {
    if work_type == WorkType::Remote {
        return 100.0;
    }

    let job = match job_location.map(str::trim) {
        Some(j) if !j.is_empty() => j.to_lowercase(),
        _ => return NEUTRAL_SCORE,
    };
    let candidate = candidate_location.trim().to_lowercase();
    if candidate.is_empty() {
        return NEUTRAL_SCORE;
    }

    if candidate.contains(&job) || job.contains(&candidate) {
        return 100.0;
    }

    let candidate_parts = split_parts(&candidate);
    let job_parts = split_parts(&job);
    let denominator = candidate_parts.len().max(job_parts.len());
    if denominator == 0 {
        return 0.0;
    }

    let matching = candidate_parts
        .iter()
        .filter(|cp| {
            job_parts
                .iter()
                .any(|jp| cp.contains(jp.as_str()) || jp.contains(cp.as_str()))
        })
        .count();

    matching as f64 / denominator as f64 * 100.0
}
