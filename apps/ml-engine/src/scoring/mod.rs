// Resume/job match scoring.
// Implements: skill extraction, experience extraction, component scorers, aggregation.
// Everything here is pure; the only long-lived data is the skill vocabulary.

pub mod aggregate;
pub mod experience;
pub mod handlers;
pub mod scorer;
pub mod similarity;
pub mod skills;
pub mod vocabulary;
