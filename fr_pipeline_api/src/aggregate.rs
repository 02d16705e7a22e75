use crate::records::{AggregatedPair, EdgeKind, PairKey};
use crate::MutualCount;

/// Per-pair reduction state for the mutual-count aggregation: one `Existing`
/// observation poisons the pair permanently, otherwise every `Candidate`
/// observation adds one mutual friend. Observation order does not matter.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PairAccumulator {
    connected: bool,
    candidates: MutualCount,
}

impl PairAccumulator {
    pub fn observe(&mut self, kind: EdgeKind) {
        match kind {
            EdgeKind::Existing => self.connected = true,
            EdgeKind::Candidate => self.candidates += 1,
        }
    }

    /// Finalizes the group: directly connected pairs produce nothing, every
    /// other observed pair carries at least one nomination.
    pub fn into_aggregated(self, pair: PairKey) -> Option<AggregatedPair> {
        if self.connected {
            None
        } else {
            Some(AggregatedPair::new(pair, self.candidates))
        }
    }
}
