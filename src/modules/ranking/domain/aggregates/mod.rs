/// Aggregates for the Ranking Bounded Context
///
/// `TierList` is the root; entries are only reachable and mutable through it.
mod tier_list;

pub use tier_list::{TierList, TierListChange, TierListEntry};
