//! Full-dataset category counting.

use crate::classify::CategoryClassifier;
use crate::dataset::Record;

/// Aggregate membership counts over the entire dataset, never capped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub total: usize,
    pub numeric: usize,
    pub foreign: usize,
    pub rare_entity: usize,
}

/// Scan every record and count category membership. Unlike subset
/// collection this always walks the full dataset.
pub fn estimate<'r, I>(records: I, classifier: &CategoryClassifier<'_>) -> CategoryCounts
where
    I: IntoIterator<Item = &'r Record>,
{
    let mut counts = CategoryCounts::default();
    for record in records {
        counts.total += 1;
        let set = classifier.classify(record);
        if set.number {
            counts.numeric += 1;
        }
        if set.foreign {
            counts.foreign += 1;
        }
        if set.rare_entity {
            counts.rare_entity += 1;
        }
    }
    counts
}
