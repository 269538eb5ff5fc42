use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A job-seeker profile as supplied by the profile store. Read-only input to the scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    #[serde(default)]
    pub name: String,
    pub skills: Vec<String>,
    /// Free-text years of experience, e.g. "4" or "5+ years".
    #[serde(deserialize_with = "text_or_number")]
    pub experience: String,
    /// Comma-delimited region hierarchy, e.g. "Austin, TX, USA".
    #[serde(default)]
    pub location: String,
    /// Free-text currency string, e.g. "$85,000".
    #[serde(default)]
    pub expected_salary: String,
    #[serde(default)]
    pub availability: String,
}

/// Candidate payload for create/update — everything but the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCandidate {
    #[serde(default)]
    pub name: String,
    pub skills: Vec<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub experience: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub expected_salary: String,
    #[serde(default)]
    pub availability: String,
}

impl NewCandidate {
    pub fn into_candidate(self, id: Uuid) -> Candidate {
        Candidate {
            id,
            name: self.name,
            skills: self.skills,
            experience: self.experience,
            location: self.location,
            expected_salary: self.expected_salary,
            availability: self.availability,
        }
    }
}

/// A stored candidate with its lifecycle timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Accepts `4`, `4.5` or `"4 years"` and keeps the textual form.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(s) => s,
        TextOrNumber::Int(n) => n.to_string(),
        TextOrNumber::Float(f) => f.to_string(),
    })
}
