use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Seniority band a gig is hiring for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Junior,
    Mid,
    Senior,
    Lead,
    /// Any level string outside the known set. Scored as neutral.
    #[serde(other)]
    Unknown,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "entry",
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Lead => "lead",
            ExperienceLevel::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    Remote,
    Onsite,
    Hybrid,
}

/// When the gig needs someone to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "immediate")]
    Immediate,
    #[serde(rename = "2weeks")]
    TwoWeeks,
    #[serde(rename = "1month")]
    OneMonth,
    #[serde(rename = "flexible")]
    Flexible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
}

/// Gig-side requirements used to score candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingCriteria {
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_range: Option<SalaryRange>,
    pub work_type: WorkType,
    #[serde(default)]
    pub availability: Option<Availability>,
}

/// A short-term job or internship posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gig {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: Option<String>,
    pub criteria: MatchingCriteria,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGig {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: Option<String>,
    pub criteria: MatchingCriteria,
}

impl NewGig {
    pub fn into_gig(self, id: Uuid) -> Gig {
        Gig {
            id,
            title: self.title,
            company: self.company,
            description: self.description,
            criteria: self.criteria,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GigRecord {
    #[serde(flatten)]
    pub gig: Gig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
