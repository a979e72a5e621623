//! # Catalog Data Model
//!
//! This module defines the reference data the engine classifies against: top-level
//! categories, their subcategories, and the [`Catalog`] that groups them.
//!
//! ## Core Concepts
//!
//! - **CategoryTag**: Top-level grouping (`Food` or `Household`)
//! - **SubcategoryEntry**: A subcategory with a canonical key, localized labels,
//!   a default shelf-life, and the keywords that signal it
//! - **Catalog**: Immutable category -> ordered subcategories table, with lookup
//!   indices built once at construction
//!
//! ## Usage
//!
//! ```rust
//! use pantry::catalog_model::{Catalog, CategoryTag};
//!
//! let catalog = Catalog::builtin();
//! let meat = catalog.find("Meat").unwrap();
//! assert_eq!(meat.0, CategoryTag::Food);
//! assert!(catalog.catch_all_of(CategoryTag::Household).is_some());
//! ```

use crate::localization::Locale;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// Top-level item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryTag {
    Food,
    Household,
}

impl CategoryTag {
    /// Categories in the order they are stored in the catalog
    pub const ALL: [CategoryTag; 2] = [CategoryTag::Food, CategoryTag::Household];

    /// Parse a category name, case-insensitively
    pub fn parse(name: &str) -> Option<CategoryTag> {
        match name.trim().to_lowercase().as_str() {
            "food" => Some(CategoryTag::Food),
            "household" => Some(CategoryTag::Household),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryTag::Food => write!(f, "Food"),
            CategoryTag::Household => write!(f, "Household"),
        }
    }
}

/// A subcategory definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubcategoryEntry {
    /// Stable, locale-independent key (the English name, e.g. "Fruits & Vegetables")
    pub key: String,

    /// Localized labels; English is always present
    pub display_name: HashMap<Locale, String>,

    /// Suggested days until expiry when this subcategory is chosen
    pub default_shelf_life_days: u32,

    /// Lower-cased keywords, mixed scripts
    pub keywords: Vec<String>,

    /// Whether this is the category's "Other ..." bucket
    pub is_catch_all: bool,
}

impl SubcategoryEntry {
    /// Create an entry whose English label is its key
    pub fn new(key: &str, default_shelf_life_days: u32) -> Self {
        let mut display_name = HashMap::new();
        display_name.insert(Locale::En, key.to_string());
        Self {
            key: key.to_string(),
            display_name,
            default_shelf_life_days,
            keywords: Vec::new(),
            is_catch_all: false,
        }
    }

    /// Add a localized label
    pub fn with_label(mut self, locale: Locale, label: &str) -> Self {
        self.display_name.insert(locale, label.to_string());
        self
    }

    /// Add keywords; they are lower-cased and trimmed, blanks are skipped
    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords.extend(
            keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty()),
        );
        self
    }

    /// Mark this entry as the category's catch-all
    pub fn catch_all(mut self) -> Self {
        self.is_catch_all = true;
        self
    }

    /// Label in the given locale, falling back to English and then to the key
    pub fn display_name(&self, locale: Locale) -> &str {
        self.display_name
            .get(&locale)
            .or_else(|| self.display_name.get(&Locale::En))
            .map(String::as_str)
            .unwrap_or(&self.key)
    }
}

/// Static table of subcategories grouped by category.
///
/// Built once and never mutated; share it as `Arc<Catalog>`.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<(CategoryTag, Vec<SubcategoryEntry>)>,
    /// Lower-cased canonical key or display name -> (category, position)
    name_index: HashMap<String, (CategoryTag, usize)>,
    cjk_vocabulary: Vec<String>,
}

impl Catalog {
    /// Build a catalog from per-category subcategory lists.
    ///
    /// # Panics
    ///
    /// Panics when the table is malformed: a category listed twice or with no
    /// subcategories, more than one catch-all in a category, a catch-all that
    /// is not last, or a canonical key used twice.
    pub fn new(categories: Vec<(CategoryTag, Vec<SubcategoryEntry>)>) -> Self {
        let mut seen_categories = HashSet::new();
        let mut seen_keys = HashSet::new();
        let mut name_index = HashMap::new();

        for (category, entries) in &categories {
            assert!(
                seen_categories.insert(*category),
                "Category {} is listed more than once",
                category
            );
            assert!(
                !entries.is_empty(),
                "Category {} has no subcategories",
                category
            );

            let catch_alls = entries.iter().filter(|e| e.is_catch_all).count();
            assert!(
                catch_alls <= 1,
                "Category {} has {} catch-all subcategories",
                category,
                catch_alls
            );
            if catch_alls == 1 {
                assert!(
                    entries.last().map(|e| e.is_catch_all).unwrap_or(false),
                    "Catch-all subcategory of {} must be last",
                    category
                );
            }

            for (position, entry) in entries.iter().enumerate() {
                assert!(
                    seen_keys.insert(entry.key.to_lowercase()),
                    "Subcategory key '{}' is used more than once",
                    entry.key
                );
                name_index.insert(entry.key.to_lowercase(), (*category, position));
                for label in entry.display_name.values() {
                    name_index
                        .entry(label.to_lowercase())
                        .or_insert((*category, position));
                }
            }
        }

        let cjk_vocabulary = build_cjk_vocabulary(&categories);

        info!(
            "Built catalog with {} categories, {} subcategories, {} segmentation terms",
            categories.len(),
            seen_keys.len(),
            cjk_vocabulary.len()
        );

        Self {
            categories,
            name_index,
            cjk_vocabulary,
        }
    }

    /// The built-in multilingual catalog, shared process-wide
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&crate::catalog_data::BUILTIN_CATALOG)
    }

    /// Subcategories of a category, in catalog order
    pub fn subcategories_of(&self, category: CategoryTag) -> &[SubcategoryEntry] {
        self.categories
            .iter()
            .find(|(tag, _)| *tag == category)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or(&[])
    }

    /// Every (category, subcategory) pair, in catalog order
    pub fn all_entries(&self) -> Vec<(CategoryTag, &SubcategoryEntry)> {
        self.categories
            .iter()
            .flat_map(|(tag, entries)| entries.iter().map(move |entry| (*tag, entry)))
            .collect()
    }

    /// Look up a subcategory by canonical key or any localized label, case-insensitively
    pub fn find(&self, key_or_label: &str) -> Option<(CategoryTag, &SubcategoryEntry)> {
        let needle = key_or_label.trim().to_lowercase();
        let found = self
            .name_index
            .get(&needle)
            .and_then(|(tag, position)| {
                self.subcategories_of(*tag)
                    .get(*position)
                    .map(|entry| (*tag, entry))
            });
        debug!(
            "Catalog lookup '{}' -> {:?}",
            key_or_label,
            found.map(|(_, entry)| entry.key.as_str())
        );
        found
    }

    /// The category's catch-all entry, if it has one
    pub fn catch_all_of(&self, category: CategoryTag) -> Option<&SubcategoryEntry> {
        self.subcategories_of(category)
            .iter()
            .find(|entry| entry.is_catch_all)
    }

    /// The first subcategory of a category that is not its catch-all
    pub fn first_specific_of(&self, category: CategoryTag) -> Option<&SubcategoryEntry> {
        self.subcategories_of(category)
            .iter()
            .find(|entry| !entry.is_catch_all)
    }

    /// Multi-character CJK keywords, longest first, for dictionary segmentation
    pub fn cjk_vocabulary(&self) -> &[String] {
        &self.cjk_vocabulary
    }
}

/// Whether a character belongs to a script written without word separators
pub fn is_cjk_char(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{30FF}'   // Hiragana, Katakana
        | '\u{3400}'..='\u{4DBF}' // CJK Extension A
        | '\u{4E00}'..='\u{9FFF}' // CJK Unified Ideographs
        | '\u{F900}'..='\u{FAFF}' // CJK Compatibility Ideographs
        | '\u{20000}'..='\u{2FA1F}')
}

fn build_cjk_vocabulary(categories: &[(CategoryTag, Vec<SubcategoryEntry>)]) -> Vec<String> {
    let unique: HashSet<&str> = categories
        .iter()
        .flat_map(|(_, entries)| entries.iter())
        .flat_map(|entry| entry.keywords.iter())
        .map(String::as_str)
        .filter(|k| k.chars().count() >= 2 && k.chars().any(is_cjk_char))
        .collect();

    let mut vocabulary: Vec<String> = unique.into_iter().map(str::to_string).collect();
    // Longest first, then alphabetically for a stable order
    vocabulary.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    vocabulary
}
