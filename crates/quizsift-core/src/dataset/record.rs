//! The dataset record type.

use serde::{Deserialize, Serialize};

/// One question/answer record.
///
/// Only `question` and `answer` are examined by the classifiers; every
/// other field the source file carries is preserved in `extra` and written
/// back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    /// Construct a record with no passthrough fields. Mostly used by tests.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            extra: serde_json::Map::new(),
        }
    }
}
