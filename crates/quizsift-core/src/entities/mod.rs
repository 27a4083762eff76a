//! Named-entity recognition and global rarity bookkeeping.

mod frequency;
mod recognizer;
mod types;

pub use frequency::{has_rare_entity, EntityFrequencyTable};
pub use recognizer::{EntityRecognizer, HeuristicRecognizer};
pub use types::{EntityLabel, EntitySpan};
