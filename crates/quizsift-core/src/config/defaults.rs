//! Default values for all configuration sections.

/// Path of the source dataset, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/JEOPARDY_QUESTIONS1.json";

/// Directory that filtered subsets are written into.
pub const DEFAULT_OUTPUT_DIR: &str = "subsets";

/// Maximum number of records collected into one subset file.
pub const DEFAULT_SUBSET_CAP: usize = 1000;

/// Global occurrence count at or below which an entity is rare.
pub const DEFAULT_RARE_THRESHOLD: u32 = 3;
