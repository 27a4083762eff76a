//! Language identification behind a trait seam.

use tracing::debug;
use whatlang::Lang;

/// Three-valued language classification result.
///
/// `Unknown` means the classifier could not produce a best guess (empty or
/// script-free input, for example). Policy: `Unknown` is treated as
/// not-foreign, so it never places a record in the non-English subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageVerdict {
    English,
    Foreign,
    Unknown,
}

/// Best-guess language classification over free text.
pub trait LanguageDetector: Send + Sync {
    /// Classify a single text.
    fn classify(&self, text: &str) -> LanguageVerdict;

    /// Human-readable detector name.
    fn name(&self) -> &str;

    /// True iff the verdict is `Foreign`. `Unknown` maps to false.
    fn is_foreign(&self, text: &str) -> bool {
        self.classify(text) == LanguageVerdict::Foreign
    }
}

/// Trigram-based detector backed by `whatlang`.
pub struct WhatlangDetector;

impl WhatlangDetector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageDetector for WhatlangDetector {
    fn classify(&self, text: &str) -> LanguageVerdict {
        match whatlang::detect_lang(text) {
            Some(Lang::Eng) => LanguageVerdict::English,
            Some(_) => LanguageVerdict::Foreign,
            None => {
                debug!(text_len = text.len(), "no language verdict, treating as not foreign");
                LanguageVerdict::Unknown
            }
        }
    }

    fn name(&self) -> &str {
        "whatlang"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_english_is_english() {
        let detector = WhatlangDetector::new();
        let verdict =
            detector.classify("This is a simple English sentence about the weather in spring.");
        assert_eq!(verdict, LanguageVerdict::English);
        assert!(!detector.is_foreign("This is a simple English sentence about the weather."));
    }

    #[test]
    fn cyrillic_text_is_foreign() {
        let detector = WhatlangDetector::new();
        let verdict = detector.classify("Это предложение написано на русском языке");
        assert_eq!(verdict, LanguageVerdict::Foreign);
    }

    #[test]
    fn empty_text_is_unknown_and_not_foreign() {
        let detector = WhatlangDetector::new();
        assert_eq!(detector.classify(""), LanguageVerdict::Unknown);
        assert!(!detector.is_foreign(""));
    }
}
