// Candidate ↔ gig matching.
// Sub-scores (skills, experience, location, salary) live in their own modules;
// scorer.rs weights them, ranking.rs orders a batch, handlers.rs exposes both over HTTP.

pub mod experience;
pub mod handlers;
pub mod location;
pub mod narrative;
pub mod ranking;
pub mod salary;
pub mod scorer;
pub mod skills;
pub mod validation;
