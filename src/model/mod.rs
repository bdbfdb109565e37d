pub mod item;
pub mod scores;
pub mod thresholds;
