use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use once_cell::sync::Lazy;

use crate::core::is_well_formed_code;
use crate::util::char_class::is_word_char;

/// common words mapped to an escape-prefixed symbol; `Alice` is the one capitalized entry
static COMMON_WORDS: [(&str, &str); 36] = [
    ("the", "_a"),
    ("and", "_b"),
    ("say", "_c"),
    ("she", "_d"),
    ("her", "_e"),
    ("that", "_f"),
    ("have", "_g"),
    ("with", "_h"),
    ("what", "_i"),
    ("for", "_j"),
    ("not", "_k"),
    ("was", "_l"),
    ("very", "_m"),
    ("Alice", "_n"),
    ("thing", "_o"),
    ("said", "_p"),
    ("this", "_q"),
    ("down", "_r"),
    ("you", "_s"),
    ("how", "_t"),
    ("but", "_u"),
    ("from", "_v"),
    ("went", "_w"),
    ("get", "_x"),
    ("will", "_y"),
    ("my", "_z"),
    ("one", "_0"),
    ("all", "_1"),
    ("would", "_2"),
    ("there", "_3"),
    ("their", "_4"),
    ("if", "_5"),
    ("about", "_6"),
    ("which", "_7"),
    ("out", "_8"),
    ("so", "_9"),
];

/// the compiled-in table, built on first use and shared read-only afterwards
pub static DICTIONARY: Lazy<StaticDictionary> = Lazy::new(|| StaticDictionary::from_entries(&COMMON_WORDS));

pub trait WordTable: Display + Send + Sync {
    /// exact, case-sensitive lookup of a word
    fn code_for(&self, word: &str) -> Option<&str>;
    /// reverse lookup; anything that is not a known code is absent
    fn word_for(&self, code: &str) -> Option<&str>;
    fn len(&self) -> usize;
    fn entries(&self) -> &[(&'static str, &'static str)];

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct StaticDictionary {
    entries: Vec<(&'static str, &'static str)>,
    codes: HashMap<&'static str, &'static str>,
    words: HashMap<&'static str, &'static str>,
}

impl StaticDictionary {
    /// builds both lookup directions at once. Later duplicates are ignored so
    /// words and codes stay unique keys, and entries that could be read back as
    /// the wrong kind of run are dropped
    pub fn from_entries(entries: &'static [(&'static str, &'static str)]) -> StaticDictionary {
        let mut codes = HashMap::with_capacity(entries.len());
        let mut words = HashMap::with_capacity(entries.len());
        let mut kept = Vec::with_capacity(entries.len());
        for &(word, code) in entries {
            let is_word = !word.is_empty() && word.chars().all(is_word_char);
            if !is_word || !is_well_formed_code(code) {
                continue;
            }
            if codes.contains_key(word) || words.contains_key(code) {
                continue;
            }
            codes.insert(word, code);
            words.insert(code, word);
            kept.push((word, code));
        }
        StaticDictionary { entries: kept, codes, words }
    }
}

impl WordTable for StaticDictionary {
    fn code_for(&self, word: &str) -> Option<&str> {
        self.codes.get(word).copied()
    }

    fn word_for(&self, code: &str) -> Option<&str> {
        self.words.get(code).copied()
    }

    fn len(&self) -> usize {
        self.codes.len()
    }

    fn entries(&self) -> &[(&'static str, &'static str)] {
        &self.entries
    }
}

impl Display for StaticDictionary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let entries_str = self.entries.iter()
            .map(|(word, code)| format!("{}={}", word, code))
            .collect::<Vec<String>>()
            .join(", ");
        write!(f, "[{}]", entries_str)
    }
}
