//! Command and query handlers, one module per operation.

mod get_results;
mod reset_results;
mod score_checklist;
mod score_personality;
mod score_satisfaction;

pub use get_results::{GetResultsHandler, GetResultsQuery};
pub use reset_results::{ResetResultsCommand, ResetResultsHandler};
pub use score_checklist::{ScoreChecklistCommand, ScoreChecklistHandler};
pub use score_personality::{ScorePersonalityCommand, ScorePersonalityHandler};
pub use score_satisfaction::{ScoreSatisfactionCommand, ScoreSatisfactionHandler};
