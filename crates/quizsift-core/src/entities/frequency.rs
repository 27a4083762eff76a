//! Global entity frequency counting.
//!
//! Rarity is a property of the whole dataset, so the table is built in a
//! full first pass and read-only afterwards. Keys are whitespace-trimmed
//! span texts, case- and punctuation-sensitive.

use rustc_hash::FxHashMap;

use super::recognizer::EntityRecognizer;
use crate::dataset::Record;

/// Occurrence counts for every qualifying entity across the dataset.
#[derive(Debug, Default)]
pub struct EntityFrequencyTable {
    counts: FxHashMap<String, u32>,
}

impl EntityFrequencyTable {
    /// Count every Person/Organization/Gpe span over the given records'
    /// question texts. Records can arrive through any iterator so callers
    /// can attach progress reporting.
    pub fn build<'r, I>(records: I, recognizer: &dyn EntityRecognizer) -> Self
    where
        I: IntoIterator<Item = &'r Record>,
    {
        let mut counts: FxHashMap<String, u32> = FxHashMap::default();
        for record in records {
            for span in recognizer.recognize(&record.question) {
                if span.label.counts_toward_rarity() {
                    *counts.entry(span.text.trim().to_string()).or_insert(0) += 1;
                }
            }
        }
        Self { counts }
    }

    /// Global occurrence count for an entity text (trimmed key).
    pub fn count(&self, entity: &str) -> u32 {
        self.counts.get(entity.trim()).copied().unwrap_or(0)
    }

    /// Number of distinct entities.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts: the total number of qualifying spans seen.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }
}

/// True iff the text contains at least one qualifying entity whose global
/// frequency is at or below `threshold`. Short-circuits on the first
/// qualifying span in document order.
pub fn has_rare_entity(
    text: &str,
    recognizer: &dyn EntityRecognizer,
    frequencies: &EntityFrequencyTable,
    threshold: u32,
) -> bool {
    recognizer
        .recognize(text)
        .iter()
        .filter(|span| span.label.counts_toward_rarity())
        .any(|span| frequencies.count(&span.text) <= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::recognizer::HeuristicRecognizer;

    fn dataset() -> Vec<Record> {
        vec![
            Record::new("the emperor Napoleon Bonaparte invaded Russia", ""),
            Record::new("the city of Moscow welcomed Napoleon Bonaparte", ""),
            Record::new("troops marched toward Moscow in winter", ""),
        ]
    }

    #[test]
    fn counts_every_qualifying_span() {
        let recognizer = HeuristicRecognizer::new();
        let records = dataset();
        let table = EntityFrequencyTable::build(records.iter(), &recognizer);

        assert_eq!(table.count("Napoleon Bonaparte"), 2);
        assert_eq!(table.count("Moscow"), 2);
        assert_eq!(table.count("Russia"), 1);
        assert_eq!(table.count("never seen"), 0);
    }

    #[test]
    fn total_equals_sum_of_spans() {
        let recognizer = HeuristicRecognizer::new();
        let records = dataset();
        let table = EntityFrequencyTable::build(records.iter(), &recognizer);

        let spans: u64 = records
            .iter()
            .map(|r| {
                recognizer
                    .recognize(&r.question)
                    .iter()
                    .filter(|s| s.label.counts_toward_rarity())
                    .count() as u64
            })
            .sum();
        assert_eq!(table.total(), spans);
    }

    #[test]
    fn rarity_is_monotonic_in_the_threshold() {
        let recognizer = HeuristicRecognizer::new();
        let records = dataset();
        let table = EntityFrequencyTable::build(records.iter(), &recognizer);

        for record in &records {
            for low in 0..4u32 {
                let at_low = has_rare_entity(&record.question, &recognizer, &table, low);
                let at_high = has_rare_entity(&record.question, &recognizer, &table, low + 1);
                // Raising the threshold can only add positives.
                assert!(!at_low || at_high);
            }
        }
    }

    #[test]
    fn rarity_uses_the_global_table() {
        let recognizer = HeuristicRecognizer::new();
        let records = dataset();
        let table = EntityFrequencyTable::build(records.iter(), &recognizer);

        // "Russia" occurs once globally, so record 0 has a rare entity at
        // threshold 1 even though the record itself is never re-counted.
        assert!(has_rare_entity(
            &records[0].question,
            &recognizer,
            &table,
            1
        ));
        // At threshold 0 nothing qualifies.
        assert!(!has_rare_entity(
            &records[0].question,
            &recognizer,
            &table,
            0
        ));
    }
}
