pub mod tier_level;

pub use tier_level::TierLevel;
