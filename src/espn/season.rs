//! Ordered season candidates for acquisitions.
//!
//! ESPN partitions everything by season and does not say which one is
//! current. A new season may not be provisioned yet, or the league may have
//! rolled over early, so acquisitions walk a short fixed list instead of
//! trusting a single year.

use crate::cli::types::Season;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonFallback {
    candidates: Vec<Season>,
}

impl SeasonFallback {
    /// Keep the given order, dropping repeated seasons.
    pub fn new(seasons: impl IntoIterator<Item = Season>) -> Self {
        let mut candidates = Vec::new();
        for season in seasons {
            if !candidates.contains(&season) {
                candidates.push(season);
            }
        }
        Self { candidates }
    }

    /// `[current, previous, next]`.
    pub fn around(current: Season) -> Self {
        Self::new([current, current.previous(), current.next()])
    }

    pub fn candidates(&self) -> &[Season] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
