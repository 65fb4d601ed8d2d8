//! Normalized league data returned to internal consumers.
//!
//! These types never carry session credentials.

mod league;
mod player;

#[cfg(test)]
mod tests;

pub use league::{League, Member, Record, RosterEntry, Standing, Team};
pub use player::Player;
