//! Subset collection and aggregate estimation.

mod estimate;
mod subset;

pub use estimate::{estimate, CategoryCounts};
pub use subset::collect_subset;
