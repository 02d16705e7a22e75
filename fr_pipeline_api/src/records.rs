use crate::{MutualCount, UserId};
use abomonation_derive::Abomonation;
use derive_new::new;
use itertools::Itertools;
use serde_derive::{Deserialize, Serialize};

/// One user's friend list, decoded from a single input record.
///
/// `friends` is expected to contain no duplicates and never the owner
/// itself; friendship is assumed symmetric in the source data, though
/// nothing here enforces that.
#[derive(Abomonation, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize, new)]
pub struct AdjacencyRecord {
    pub owner: UserId,
    pub friends: Vec<UserId>,
}

impl AdjacencyRecord {
    /// Expands the record into pairwise edge observations: one `Existing`
    /// observation per direct friend, plus one `Candidate` observation per
    /// unordered 2-combination of the friend list. For `k` friends this
    /// yields exactly `k + k*(k-1)/2` observations.
    ///
    /// Direct friends are not filtered out of the candidates here: a pair
    /// can be directly connected in one record while a third user's record
    /// independently nominates it, and the aggregation downstream must see
    /// both signals before deciding.
    pub fn observations(&self) -> Vec<EdgeObservation> {
        let friends_len = self.friends.len();
        let mut observations =
            Vec::with_capacity(friends_len + (friends_len * friends_len.saturating_sub(1)) / 2);
        for &friend in &self.friends {
            observations.push(EdgeObservation::new(
                PairKey::new(self.owner, friend),
                EdgeKind::Existing,
            ));
        }
        for (&first, &second) in self.friends.iter().tuple_combinations() {
            observations
                .push(EdgeObservation::new(PairKey::new(first, second), EdgeKind::Candidate));
        }
        observations
    }
}

/// An unordered pair of two distinct users, stored smaller id first so that
/// both orientations of the same pair collapse to one grouping key.
#[derive(
    Abomonation,
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
)]
pub struct PairKey {
    smaller: UserId,
    larger: UserId,
}

impl PairKey {
    pub fn new(a: UserId, b: UserId) -> Self {
        assert!(a != b, "Degenerate user pair ({}, {})", a, b);
        if a < b {
            Self { smaller: a, larger: b }
        } else {
            Self { smaller: b, larger: a }
        }
    }

    pub fn smaller(self) -> UserId {
        self.smaller
    }

    pub fn larger(self) -> UserId {
        self.larger
    }
}

/// Whether an observation records a direct friendship or a shared-friend
/// nomination.
#[derive(
    Abomonation,
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
)]
pub enum EdgeKind {
    Existing,
    Candidate,
}

#[derive(
    Abomonation,
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    new,
)]
pub struct EdgeObservation {
    pub pair: PairKey,
    pub kind: EdgeKind,
}

/// A user pair that is not directly connected, with the number of mutual
/// friends nominating it. Only pairs with at least one nomination are ever
/// materialized.
#[derive(
    Abomonation,
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    new,
)]
pub struct AggregatedPair {
    pub pair: PairKey,
    pub mutual_count: MutualCount,
}

impl AggregatedPair {
    /// Mutual-friend recommendations are symmetric: one aggregated pair
    /// produces exactly two directed recommendations with the same count.
    pub fn recommendations(self) -> [Recommendation; 2] {
        [
            Recommendation::new(self.pair.smaller, self.pair.larger, self.mutual_count),
            Recommendation::new(self.pair.larger, self.pair.smaller, self.mutual_count),
        ]
    }
}

#[derive(
    Abomonation,
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    new,
)]
pub struct Recommendation {
    pub source: UserId,
    pub candidate: UserId,
    pub mutual_count: MutualCount,
}

/// The final per-user output: candidate ids in descending mutual-count
/// order, truncated to [`crate::RANKED_LIMIT`] entries.
#[derive(Abomonation, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize, new)]
pub struct RecommendationList {
    pub owner: UserId,
    pub ranked: Vec<UserId>,
}

#[cfg(test)]
mod tests {
    use crate::records::{AdjacencyRecord, EdgeKind, EdgeObservation, PairKey};
    use crate::records::{AggregatedPair, Recommendation};

    #[test]
    fn pair_key_is_canonical() {
        let inputs = vec![(2, 7), (7, 2), (0, 1), (u64::MAX, 0)];
        for (index, (a, b)) in inputs.into_iter().enumerate() {
            let key = PairKey::new(a, b);
            assert_eq!(key, PairKey::new(b, a), "Input {} is not symmetric", index);
            assert!(key.smaller() < key.larger(), "Input {} is not ordered", index);
        }
    }

    #[test]
    #[should_panic(expected = "Degenerate user pair")]
    fn pair_key_rejects_equal_ids() {
        let _ = PairKey::new(3, 3);
    }

    #[test]
    fn observation_counts_match_friend_count() {
        let inputs = vec![(0, 0, 0), (1, 1, 0), (2, 2, 1), (3, 3, 3), (10, 10, 45)];
        for (index, (friends_len, existing, candidates)) in inputs.into_iter().enumerate() {
            let record = AdjacencyRecord::new(1000, (0..friends_len).collect());
            let observations = record.observations();
            let existing_found =
                observations.iter().filter(|o| o.kind == EdgeKind::Existing).count();
            let candidates_found =
                observations.iter().filter(|o| o.kind == EdgeKind::Candidate).count();
            assert_eq!(existing_found, existing, "Input {} existing count", index);
            assert_eq!(candidates_found, candidates, "Input {} candidate count", index);
        }
    }

    #[test]
    fn observations_canonicalize_both_directions() {
        let record = AdjacencyRecord::new(5, vec![9, 3]);
        let mut observations = record.observations();
        observations.sort_unstable();
        let mut expected = vec![
            EdgeObservation::new(PairKey::new(5, 9), EdgeKind::Existing),
            EdgeObservation::new(PairKey::new(3, 5), EdgeKind::Existing),
            EdgeObservation::new(PairKey::new(3, 9), EdgeKind::Candidate),
        ];
        expected.sort_unstable();
        assert_eq!(observations, expected);
    }

    #[test]
    fn aggregated_pair_expands_symmetrically() {
        let [first, second] = AggregatedPair::new(PairKey::new(3, 0), 2).recommendations();
        assert_eq!(first, Recommendation::new(0, 3, 2));
        assert_eq!(second, Recommendation::new(3, 0, 2));
    }
}
