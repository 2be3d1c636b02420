//! Matching statistics.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Running statistics for one matching session.
///
/// Distance figures cover non-exempt proximity matches only; exact matches
/// have zero in-plane distance by definition and exempted pairs never feed
/// the aggregates.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchStats {
    /// Pairs matched by exact in-plane coincidence.
    pub exact: usize,
    /// Pairs matched by nearest-neighbour assignment.
    pub proximity: usize,
    /// Pairs with an exempted endpoint.
    pub exempt: usize,
    /// Smallest recorded proximity distance.
    pub min_distance: Option<f64>,
    /// Largest recorded proximity distance.
    pub max_distance: Option<f64>,
    total_distance: f64,
    recorded: usize,
}

impl MatchStats {
    pub(crate) fn record_distance(&mut self, distance: f64) {
        self.min_distance = Some(self.min_distance.map_or(distance, |d| d.min(distance)));
        self.max_distance = Some(self.max_distance.map_or(distance, |d| d.max(distance)));
        self.total_distance += distance;
        self.recorded += 1;
    }

    /// Average recorded proximity distance, if any was recorded.
    pub fn average_distance(&self) -> Option<f64> {
        (self.recorded > 0).then(|| self.total_distance / self.recorded as f64)
    }
}
