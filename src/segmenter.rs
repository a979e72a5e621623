//! # Segmenter Module
//!
//! Splits one utterance that may name several items (batch voice entry) into
//! candidate item names.
//!
//! ## Rules
//!
//! The first applicable rule wins:
//!
//! 1. Comma-like punctuation (`,` `，` `;` `；` `、`)
//! 2. Connectives meaning "and" / "plus" / "also", when they yield at least two parts
//! 3. Whitespace, when every token is at least two characters long
//! 4. Greedy longest-match against a dictionary, for text in scripts without
//!    word separators
//! 5. The whole trimmed utterance
//!
//! English connectives dangling at either end ("apples and") are dropped first.
//!
//! Greedy longest-match is locally optimal only: a long dictionary hit can
//! swallow the start of the next item. The vocabulary is short curated nouns,
//! which keeps this rare.

use crate::catalog_model::{is_cjk_char, Catalog};
use lazy_static::lazy_static;
use log::{debug, info, trace};
use regex::Regex;
use std::collections::HashSet;

const DELIMITER_PATTERN: &str = r"[,，;；、]";

// Longer Chinese connectives come first so "以及" is not split at "及"
const CONNECTIVE_PATTERN: &str =
    r"(?i)\s+(?:and|plus|also)\s+|\s*&\s*|以及|還有|还有|加上|和|及|與|与|同|跟";

// English connectives left dangling at either end, e.g. "apples and"
const EDGE_CONNECTIVE_PATTERN: &str =
    r"(?i)^(?:(?:and|plus|also)\s+|&\s*)+|(?:\s+(?:and|plus|also)|\s*&)+$";

lazy_static! {
    static ref DELIMITER_REGEX: Regex =
        Regex::new(DELIMITER_PATTERN).expect("Delimiter pattern should be valid");
    static ref CONNECTIVE_REGEX: Regex =
        Regex::new(CONNECTIVE_PATTERN).expect("Connective pattern should be valid");
    static ref EDGE_CONNECTIVE_REGEX: Regex =
        Regex::new(EDGE_CONNECTIVE_PATTERN).expect("Edge connective pattern should be valid");
}

/// Utterance splitter with a dictionary for unsegmented scripts
#[derive(Debug, Clone)]
pub struct Segmenter {
    /// Multi-character words, longest first
    vocabulary: Vec<String>,
}

impl Segmenter {
    /// Create a segmenter whose dictionary is the catalog's CJK keywords
    pub fn new(catalog: &Catalog) -> Self {
        Self::with_vocabulary(catalog.cjk_vocabulary().iter().cloned())
    }

    /// Create a segmenter with a custom dictionary.
    ///
    /// Single-character words are dropped so segmentation never produces
    /// one-character fragments.
    pub fn with_vocabulary<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: HashSet<String> = words
            .into_iter()
            .map(|w| w.into().trim().to_string())
            .filter(|w| w.chars().count() >= 2)
            .collect();

        let mut vocabulary: Vec<String> = unique.into_iter().collect();
        vocabulary.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        info!("Creating Segmenter with {} dictionary words", vocabulary.len());
        Self { vocabulary }
    }

    /// Split an utterance into item names.
    ///
    /// Every returned string is trimmed and non-empty; a blank utterance
    /// yields an empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pantry::catalog_model::Catalog;
    /// use pantry::segmenter::Segmenter;
    ///
    /// let segmenter = Segmenter::new(&Catalog::builtin());
    /// assert_eq!(segmenter.segment("apples, milk, bread"), vec!["apples", "milk", "bread"]);
    /// assert_eq!(segmenter.segment("蘋果和牛奶"), vec!["蘋果", "牛奶"]);
    /// assert_eq!(segmenter.segment("蘋果牛奶"), vec!["蘋果", "牛奶"]);
    /// ```
    pub fn segment(&self, utterance: &str) -> Vec<String> {
        let stripped = strip_edge_connectives(utterance);
        let text = stripped.as_str();
        if text.is_empty() {
            return Vec::new();
        }

        if DELIMITER_REGEX.is_match(text) {
            let parts = split_non_empty(&DELIMITER_REGEX, text);
            debug!("Split '{}' on delimiters into {:?}", text, parts);
            return parts;
        }

        if CONNECTIVE_REGEX.is_match(text) {
            let parts = split_non_empty(&CONNECTIVE_REGEX, text);
            if parts.len() >= 2 {
                debug!("Split '{}' on connectives into {:?}", text, parts);
                return parts;
            }
            trace!("Connective split of '{}' gave {} part(s), ignoring", text, parts.len());
        }

        let words: Vec<&str> = text.split_whitespace().collect();
        if words.len() >= 2 && words.iter().all(|w| w.chars().count() >= 2) {
            debug!("Split '{}' on whitespace into {:?}", text, words);
            return words.into_iter().map(str::to_string).collect();
        }

        if text.chars().any(is_cjk_char) {
            let parts = self.greedy_split(text);
            debug!("Dictionary split '{}' into {:?}", text, parts);
            return parts;
        }

        vec![text.to_string()]
    }

    /// Repeatedly take the longest dictionary word that starts the remaining
    /// text; the first unmatched remainder becomes the last token.
    fn greedy_split(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut rest = text.trim();

        while !rest.is_empty() {
            match self.vocabulary.iter().find(|w| rest.starts_with(w.as_str())) {
                Some(word) => {
                    trace!("Dictionary hit '{}'", word);
                    tokens.push(word.clone());
                    rest = rest[word.len()..].trim_start();
                }
                None => {
                    tokens.push(rest.trim_end().to_string());
                    break;
                }
            }
        }
        tokens
    }
}

fn strip_edge_connectives(text: &str) -> String {
    EDGE_CONNECTIVE_REGEX
        .replace_all(text.trim(), "")
        .trim()
        .to_string()
}

fn split_non_empty(regex: &Regex, text: &str) -> Vec<String> {
    regex
        .split(text)
        .map(strip_edge_connectives)
        .filter(|part| !part.is_empty())
        .collect()
}
