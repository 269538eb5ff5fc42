pub mod candidate;
pub mod gig;
pub mod smart_match;

pub use candidate::{Candidate, CandidateRecord, NewCandidate};
pub use gig::{
    ExperienceLevel, Gig, GigRecord, MatchingCriteria, NewGig, SalaryRange, WorkType,
};
pub use smart_match::SmartMatch;
