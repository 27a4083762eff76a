//! Heuristic named-entity recognition.
//!
//! Finds runs of capitalized tokens and labels them with static cue tables:
//! org suffixes and known organizations, a gazetteer of geo-political
//! names, and honorifics that mark the following run as a person. A heavier
//! model-backed recognizer can replace this behind the same trait.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

use super::types::{EntityLabel, EntitySpan};

/// Ordered entity extraction over free text.
pub trait EntityRecognizer: Send + Sync {
    /// Recognize entity spans, in document order.
    fn recognize(&self, text: &str) -> Vec<EntitySpan>;

    /// Human-readable recognizer name.
    fn name(&self) -> &str;
}

/// Capitalized words that never start or join an entity run.
const STOPWORDS: &[&str] = &[
    "A", "An", "The", "This", "That", "These", "Those", "It", "Its", "He", "She", "His", "Her",
    "They", "Their", "We", "Our", "You", "Your", "I", "Who", "What", "When", "Where", "Which",
    "Why", "How", "In", "On", "At", "Of", "For", "From", "To", "By", "With", "As", "And", "Or",
    "But", "Not", "No", "Yes", "If", "Is", "Are", "Was", "Were", "Be", "Been", "Do", "Does",
    "Did", "Has", "Have", "Had", "Can", "Could", "May", "Might", "Will", "Would", "Shall",
    "Should", "One", "Two", "Also", "After", "Before", "During", "Under", "Over", "Between",
    "Here", "There", "Now", "Then", "So", "Such", "Some", "Any", "All", "Each", "Both",
    "Named", "Called", "Seen", "Heard",
];

/// Lowercase tokens allowed inside a run when flanked by capitalized tokens.
const CONNECTORS: &[&str] = &[
    "of", "the", "de", "da", "di", "du", "la", "le", "van", "von", "der", "del", "and",
];

/// Titles that mark the following run as a person.
const HONORIFICS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Miss", "Dr", "Prof", "Professor", "Sir", "Dame", "Lady", "Lord",
    "President", "Senator", "Governor", "General", "Colonel", "Captain", "Admiral", "Judge",
    "King", "Queen", "Prince", "Princess", "Emperor", "Empress", "Pope", "Saint", "St",
    "Chancellor", "Chief", "Reverend", "Rabbi",
];

/// Tokens that mark a run as an organization when they appear in it.
const ORG_KEYWORDS: &[&str] = &[
    "Inc", "Corp", "Corporation", "Co", "Company", "Ltd", "LLC", "University", "College",
    "Institute", "Academy", "School", "Museum", "Library", "Association", "Society",
    "Foundation", "Committee", "Council", "League", "Club", "Party", "Church", "Bank",
    "Airlines", "Studios", "Records", "Press", "Times", "Post", "Journal", "Orchestra",
    "Symphony", "Ballet", "Opera", "Bureau", "Agency", "Department", "Brothers", "Bros",
];

/// Well-known organizations, mostly acronyms.
const ORG_NAMES: &[&str] = &[
    "NASA", "NATO", "FBI", "CIA", "IRS", "UN", "UNESCO", "UNICEF", "WHO", "NFL", "NBA", "MLB",
    "NHL", "NCAA", "BBC", "NBC", "CBS", "ABC", "CNN", "MTV", "HBO", "PBS", "MGM", "RCA", "IBM",
    "GE", "GM", "RAF", "KGB", "OPEC", "MIT", "UCLA", "Harvard", "Yale", "Princeton", "Oxford",
    "Cambridge", "Congress", "Parliament", "Pentagon", "Interpol", "Greenpeace",
];

/// Countries, cities, states, and multi-word geo-political names.
const GPE_NAMES: &[&str] = &[
    // Multi-word
    "United States", "United Kingdom", "New York", "New York City", "New Jersey", "New Mexico",
    "New Hampshire", "New Orleans", "New Zealand", "North Korea", "South Korea",
    "North Carolina", "South Carolina", "North Dakota", "South Dakota", "West Virginia",
    "Rhode Island", "Great Britain", "Soviet Union", "Saudi Arabia", "Costa Rica",
    "Puerto Rico", "Sri Lanka", "Hong Kong", "El Salvador", "San Francisco", "Los Angeles",
    "Las Vegas", "Buenos Aires", "Rio de Janeiro", "Mexico City", "South Africa",
    // Countries & regions
    "America", "England", "Scotland", "Wales", "Ireland", "Britain", "France", "Germany",
    "Italy", "Spain", "Portugal", "Russia", "China", "Japan", "India", "Canada", "Mexico",
    "Brazil", "Argentina", "Chile", "Peru", "Colombia", "Venezuela", "Cuba", "Jamaica",
    "Haiti", "Panama", "Egypt", "Kenya", "Nigeria", "Ethiopia", "Morocco", "Algeria",
    "Libya", "Tunisia", "Greece", "Turkey", "Israel", "Iraq", "Iran", "Afghanistan",
    "Pakistan", "Vietnam", "Korea", "Thailand", "Malaysia", "Indonesia", "Singapore",
    "Philippines", "Australia", "Austria", "Switzerland", "Sweden", "Norway", "Denmark",
    "Finland", "Poland", "Hungary", "Romania", "Bulgaria", "Ukraine", "Belgium",
    "Netherlands", "Holland", "USA", "USSR", "UK", "UAE",
    // Cities
    "London", "Paris", "Rome", "Madrid", "Berlin", "Munich", "Hamburg", "Vienna", "Moscow",
    "Beijing", "Tokyo", "Cairo", "Athens", "Jerusalem", "Istanbul", "Amsterdam", "Brussels",
    "Geneva", "Zurich", "Stockholm", "Oslo", "Copenhagen", "Helsinki", "Warsaw", "Budapest",
    "Prague", "Dublin", "Lisbon", "Venice", "Florence", "Naples", "Milan", "Sydney",
    "Toronto", "Montreal", "Havana", "Bangkok", "Manila", "Chicago", "Boston",
    "Philadelphia", "Washington", "Hollywood", "Dallas", "Houston", "Seattle", "Denver",
    "Detroit", "Miami", "Atlanta", "Baltimore", "Pittsburgh", "Cleveland", "Cincinnati",
    "Nashville", "Memphis",
    // US states
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa",
    "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan",
    "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada", "Ohio",
    "Oklahoma", "Oregon", "Pennsylvania", "Tennessee", "Texas", "Utah", "Vermont",
    "Virginia", "Wisconsin", "Wyoming",
];

static STOPWORD_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| STOPWORDS.iter().copied().collect());
static CONNECTOR_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| CONNECTORS.iter().copied().collect());
static HONORIFIC_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| HONORIFICS.iter().copied().collect());
static ORG_KEYWORD_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| ORG_KEYWORDS.iter().copied().collect());
static ORG_NAME_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| ORG_NAMES.iter().copied().collect());
static GPE_NAME_SET: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| GPE_NAMES.iter().copied().collect());

/// One alphabetic token with its position.
#[derive(Debug, Clone, Copy)]
struct Token<'t> {
    text: &'t str,
    start: usize,
    end: usize,
    sentence_initial: bool,
}

impl Token<'_> {
    fn is_capitalized(&self) -> bool {
        let mut chars = self.text.chars();
        match chars.next() {
            Some(first) => first.is_uppercase() && self.text.chars().count() >= 2,
            None => false,
        }
    }

    fn is_all_caps(&self) -> bool {
        self.text.chars().count() >= 2 && self.text.chars().all(|c| c.is_uppercase())
    }
}

/// Split text into alphabetic tokens, tracking sentence starts.
fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;
    let mut sentence_initial = true;

    for (idx, ch) in text.char_indices() {
        if ch.is_alphabetic() {
            if start.is_none() {
                start = Some(idx);
            }
        } else {
            if let Some(s) = start.take() {
                tokens.push(Token {
                    text: &text[s..idx],
                    start: s,
                    end: idx,
                    sentence_initial,
                });
                sentence_initial = false;
            }
            if matches!(ch, '.' | '!' | '?' | ';' | ':') {
                sentence_initial = true;
            }
        }
    }
    if let Some(s) = start {
        tokens.push(Token {
            text: &text[s..],
            start: s,
            end: text.len(),
            sentence_initial,
        });
    }
    tokens
}

/// Rule-based recognizer over capitalized token runs.
pub struct HeuristicRecognizer;

impl HeuristicRecognizer {
    pub fn new() -> Self {
        Self
    }

    /// A token that can start or extend a run. Honorifics sit outside the
    /// run and instead mark the following run as a person.
    fn is_run_token(token: &Token<'_>) -> bool {
        token.is_capitalized()
            && !STOPWORD_SET.contains(token.text)
            && !HONORIFIC_SET.contains(token.text)
    }

    /// Label a completed run of tokens `tokens[first..=last]`.
    fn label_run(text: &str, tokens: &[Token<'_>], first: usize, last: usize) -> EntityLabel {
        let run_text = &text[tokens[first].start..tokens[last].end];
        let run_tokens = &tokens[first..=last];

        if GPE_NAME_SET.contains(run_text) {
            return EntityLabel::Gpe;
        }
        if run_tokens
            .iter()
            .any(|t| ORG_KEYWORD_SET.contains(t.text) || ORG_NAME_SET.contains(t.text))
        {
            return EntityLabel::Organization;
        }
        if first == last && run_tokens[0].is_all_caps() {
            return EntityLabel::Organization;
        }
        let preceded_by_honorific = first > 0 && HONORIFIC_SET.contains(tokens[first - 1].text);
        if preceded_by_honorific {
            return EntityLabel::Person;
        }
        if last > first {
            return EntityLabel::Person;
        }
        // Single unknown token. Sentence-initial capitalization carries no
        // signal, so those spans are kept but do not count toward rarity.
        if run_tokens[0].sentence_initial {
            EntityLabel::Other
        } else {
            EntityLabel::Person
        }
    }
}

impl Default for HeuristicRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRecognizer for HeuristicRecognizer {
    fn recognize(&self, text: &str) -> Vec<EntitySpan> {
        let tokens = tokenize(text);
        let mut spans = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            if !Self::is_run_token(&tokens[i]) {
                i += 1;
                continue;
            }

            let first = i;
            let mut last = i;
            let mut j = i + 1;
            while j < tokens.len() {
                if Self::is_run_token(&tokens[j]) {
                    last = j;
                    j += 1;
                } else if CONNECTOR_SET.contains(tokens[j].text)
                    && j + 1 < tokens.len()
                    && Self::is_run_token(&tokens[j + 1])
                {
                    // Connector joins two capitalized tokens, as in
                    // "University of Chicago".
                    last = j + 1;
                    j += 2;
                } else {
                    break;
                }
            }

            spans.push(EntitySpan {
                text: text[tokens[first].start..tokens[last].end].to_string(),
                label: Self::label_run(text, &tokens, first, last),
                offset: tokens[first].start,
            });
            i = j;
        }

        spans
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
