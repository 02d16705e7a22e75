//! Pure data model and stage functions of the mutual-friend recommendation
//! pipeline. Everything in this crate is a deterministic function of its
//! input: no IO, no clocks, no shared state. The `friendrank` crate wires
//! these stages into timely dataflow operators, but any engine providing
//! map, flat-map and group-by-key can drive them.

mod aggregate;
mod decode;
mod records;
mod select;

// Public exports from root of the crate.
pub use aggregate::PairAccumulator;
pub use decode::{decode_adjacency, MalformedRecord};
pub use records::{
    AdjacencyRecord, AggregatedPair, EdgeKind, EdgeObservation, PairKey, Recommendation,
    RecommendationList,
};
pub use select::{select_top_candidates, SelectorConfig, DEFAULT_SCAN_THRESHOLD, RANKED_LIMIT};

// Universally used types.
pub type UserId = u64;
pub type MutualCount = u64;
