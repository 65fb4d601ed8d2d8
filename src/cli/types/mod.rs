//! Type-safe wrappers for ESPN Fantasy Basketball identifiers.

pub mod ids;
pub mod time;

pub use ids::{LeagueId, PlayerId};
pub use time::Season;
