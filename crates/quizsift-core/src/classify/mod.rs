//! Category classification over records.

mod language;
mod numeric;

pub use language::{LanguageDetector, LanguageVerdict, WhatlangDetector};
pub use numeric::contains_number;

use crate::dataset::Record;
use crate::entities::{has_rare_entity, EntityFrequencyTable, EntityRecognizer};

/// The three filter categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Number,
    Foreign,
    RareEntity,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[Self::Number, Self::Foreign, Self::RareEntity]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Number => "numbers",
            Self::Foreign => "non_english",
            Self::RareEntity => "rare_proper_nouns",
        }
    }

    /// File name of the subset this category is written to.
    pub fn subset_file_name(&self) -> String {
        format!("{}_subset.jsonl", self.name())
    }
}

/// Per-record category membership.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategorySet {
    pub number: bool,
    pub foreign: bool,
    pub rare_entity: bool,
}

impl CategorySet {
    pub fn contains(&self, category: Category) -> bool {
        match category {
            Category::Number => self.number,
            Category::Foreign => self.foreign,
            Category::RareEntity => self.rare_entity,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.number || self.foreign || self.rare_entity)
    }
}

/// Evaluates all three category predicates against single records.
///
/// Numeric and language membership examine question and answer; entity
/// rarity examines the question only, against the global frequency table.
pub struct CategoryClassifier<'a> {
    detector: &'a dyn LanguageDetector,
    recognizer: &'a dyn EntityRecognizer,
    frequencies: &'a EntityFrequencyTable,
    rare_threshold: u32,
}

impl<'a> CategoryClassifier<'a> {
    pub fn new(
        detector: &'a dyn LanguageDetector,
        recognizer: &'a dyn EntityRecognizer,
        frequencies: &'a EntityFrequencyTable,
        rare_threshold: u32,
    ) -> Self {
        Self {
            detector,
            recognizer,
            frequencies,
            rare_threshold,
        }
    }

    pub fn has_number(&self, record: &Record) -> bool {
        contains_number(&record.question) || contains_number(&record.answer)
    }

    pub fn is_foreign(&self, record: &Record) -> bool {
        self.detector.is_foreign(&record.question) || self.detector.is_foreign(&record.answer)
    }

    pub fn has_rare_entity(&self, record: &Record) -> bool {
        has_rare_entity(
            &record.question,
            self.recognizer,
            self.frequencies,
            self.rare_threshold,
        )
    }

    pub fn classify(&self, record: &Record) -> CategorySet {
        CategorySet {
            number: self.has_number(record),
            foreign: self.is_foreign(record),
            rare_entity: self.has_rare_entity(record),
        }
    }
}
