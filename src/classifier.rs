//! # Classifier Module
//!
//! Infers a `(category, subcategory)` pair for a free-text item name (typed,
//! voice-transcribed or barcode-derived) from the catalog's keywords.
//!
//! ## Match tiers
//!
//! The first tier that produces a match wins; within a tier, categories are
//! searched in [`EngineConfig::category_order`] and subcategories in catalog
//! order, so the first-defined subcategory wins a tie.
//!
//! 1. **Special token**: a short culture-specific token pins the category
//! 2. **Exact**: the name equals a keyword, or contains it as a whole word
//! 3. **Prefix**: the name starts with a keyword
//! 4. **Suffix**: the name ends with a keyword
//! 5. **Substring**: the name contains a keyword of at least
//!    [`EngineConfig::min_substring_chars`] characters
//! 6. **Generic household**: the name contains a generic household noun
//!
//! Catch-all subcategories never match a keyword.

use crate::catalog_data::{GENERIC_HOUSEHOLD_TERMS, SPECIAL_TOKENS};
use crate::catalog_model::{Catalog, CategoryTag, SubcategoryEntry};
use crate::engine_config::EngineConfig;
use log::{debug, info, trace};
use serde::Serialize;
use std::sync::Arc;

/// Which rule produced a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchTier {
    SpecialToken,
    Exact,
    Prefix,
    Suffix,
    Substring,
    GenericHousehold,
}

/// Keyword tiers, in priority order
const KEYWORD_TIERS: [MatchTier; 4] = [
    MatchTier::Exact,
    MatchTier::Prefix,
    MatchTier::Suffix,
    MatchTier::Substring,
];

/// A successful classification
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult<'a> {
    pub category: CategoryTag,
    pub subcategory: &'a SubcategoryEntry,
    /// The rule that matched
    pub tier: MatchTier,
    /// The keyword, special token or generic term that matched
    pub matched: String,
}

/// Keyword classifier over a shared catalog
#[derive(Debug, Clone)]
pub struct Classifier {
    catalog: Arc<Catalog>,
    category_order: Vec<CategoryTag>,
    min_substring_chars: usize,
    /// Longest first
    special_tokens: Vec<(String, CategoryTag)>,
    generic_household_terms: Vec<String>,
}

impl Classifier {
    /// Create a classifier with the built-in special-token and generic-term tables
    pub fn new(catalog: Arc<Catalog>, config: &EngineConfig) -> Self {
        info!(
            "Creating Classifier: category_order={:?}, min_substring_chars={}",
            config.category_order, config.min_substring_chars
        );
        Self {
            catalog,
            category_order: config.category_order.clone(),
            min_substring_chars: config.min_substring_chars,
            special_tokens: Vec::new(),
            generic_household_terms: Vec::new(),
        }
        .with_special_tokens(SPECIAL_TOKENS)
        .with_generic_household_terms(GENERIC_HOUSEHOLD_TERMS)
    }

    /// Replace the special-token table
    pub fn with_special_tokens(mut self, tokens: &[(&str, CategoryTag)]) -> Self {
        self.special_tokens = tokens
            .iter()
            .map(|(token, category)| (token.trim().to_lowercase(), *category))
            .filter(|(token, _)| !token.is_empty())
            .collect();
        // Stable sort keeps table order among equal lengths
        self.special_tokens
            .sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
        self
    }

    /// Replace the generic household-term list
    pub fn with_generic_household_terms(mut self, terms: &[&str]) -> Self {
        self.generic_household_terms = terms
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        self
    }

    /// The catalog this classifier reads
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Classify an item name. `None` means no rule matched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pantry::catalog_model::{Catalog, CategoryTag};
    /// use pantry::classifier::Classifier;
    /// use pantry::engine_config::EngineConfig;
    ///
    /// let classifier = Classifier::new(Catalog::builtin(), &EngineConfig::default());
    /// let result = classifier.classify("chicken breast").unwrap();
    /// assert_eq!(result.category, CategoryTag::Food);
    /// assert_eq!(result.subcategory.key, "Meat");
    /// assert!(classifier.classify("xyz123").is_none());
    /// ```
    pub fn classify(&self, name: &str) -> Option<ClassificationResult<'_>> {
        let input = normalize(name);
        if input.is_empty() {
            return None;
        }
        trace!("Classifying '{}'", input);

        let result = self
            .match_special_token(&input)
            .or_else(|| self.match_keywords(&input))
            .or_else(|| self.match_generic_household(&input));

        match &result {
            Some(r) => debug!(
                "Classified '{}' as {}/{} via {:?} ('{}')",
                name, r.category, r.subcategory.key, r.tier, r.matched
            ),
            None => debug!("No classification for '{}'", name),
        }
        result
    }

    fn match_special_token(&self, input: &str) -> Option<ClassificationResult<'_>> {
        let (token, category) = self
            .special_tokens
            .iter()
            .find(|(token, _)| input.contains(token.as_str()))?;

        let related = |keyword: &str| keyword.contains(token.as_str()) || token.contains(keyword);
        let specific = || {
            self.catalog
                .subcategories_of(*category)
                .iter()
                .filter(|entry| !entry.is_catch_all)
        };

        // Prefer a related keyword the name itself contains, then any related keyword
        let subcategory = specific()
            .find(|entry| {
                entry
                    .keywords
                    .iter()
                    .any(|kw| related(kw.as_str()) && input.contains(kw.as_str()))
            })
            .or_else(|| {
                specific().find(|entry| entry.keywords.iter().any(|kw| related(kw.as_str())))
            })
            .or_else(|| self.catalog.first_specific_of(*category))?;

        Some(ClassificationResult {
            category: *category,
            subcategory,
            tier: MatchTier::SpecialToken,
            matched: token.clone(),
        })
    }

    fn match_keywords(&self, input: &str) -> Option<ClassificationResult<'_>> {
        let padded = format!(" {input} ");

        for tier in KEYWORD_TIERS {
            for category in &self.category_order {
                for subcategory in self.catalog.subcategories_of(*category) {
                    if subcategory.is_catch_all {
                        continue;
                    }
                    let hit = subcategory
                        .keywords
                        .iter()
                        .find(|kw| self.keyword_matches(tier, input, &padded, kw));
                    if let Some(keyword) = hit {
                        return Some(ClassificationResult {
                            category: *category,
                            subcategory,
                            tier,
                            matched: keyword.clone(),
                        });
                    }
                }
            }
        }
        None
    }

    fn keyword_matches(&self, tier: MatchTier, input: &str, padded: &str, keyword: &str) -> bool {
        match tier {
            MatchTier::Exact => input == keyword || padded.contains(&format!(" {keyword} ")),
            MatchTier::Prefix => input.starts_with(keyword),
            MatchTier::Suffix => input.ends_with(keyword),
            MatchTier::Substring => {
                keyword.chars().count() >= self.min_substring_chars && input.contains(keyword)
            }
            MatchTier::SpecialToken | MatchTier::GenericHousehold => false,
        }
    }

    fn match_generic_household(&self, input: &str) -> Option<ClassificationResult<'_>> {
        let term = self
            .generic_household_terms
            .iter()
            .find(|term| input.contains(term.as_str()))?;
        let subcategory = self.catalog.first_specific_of(CategoryTag::Household)?;

        Some(ClassificationResult {
            category: CategoryTag::Household,
            subcategory,
            tier: MatchTier::GenericHousehold,
            matched: term.clone(),
        })
    }
}

/// Trim, lower-case and collapse internal whitespace
fn normalize(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_classifier() -> Classifier {
        Classifier::new(Catalog::builtin(), &EngineConfig::default())
    }

    fn key_of(classifier: &Classifier, name: &str) -> Option<String> {
        classifier
            .classify(name)
            .map(|r| r.subcategory.key.clone())
    }

    fn tiny_catalog(food: &[(&str, &[&str])], household: &[(&str, &[&str])]) -> Arc<Catalog> {
        fn build(entries: &[(&str, &[&str])]) -> Vec<SubcategoryEntry> {
            entries
                .iter()
                .map(|(key, keywords)| SubcategoryEntry::new(key, 7).with_keywords(keywords))
                .collect()
        }
        Arc::new(Catalog::new(vec![
            (CategoryTag::Food, build(food)),
            (CategoryTag::Household, build(household)),
        ]))
    }

    #[test]
    fn test_whole_word_match() {
        let classifier = create_classifier();
        let result = classifier.classify("chicken breast").unwrap();
        assert_eq!(result.category, CategoryTag::Food);
        assert_eq!(result.subcategory.key, "Meat");
        assert_eq!(result.tier, MatchTier::Exact);
        assert_eq!(result.matched, "chicken");
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        let classifier = create_classifier();
        assert_eq!(key_of(&classifier, "  Chicken   BREAST "), Some("Meat".to_string()));
    }

    #[test]
    fn test_no_match() {
        let classifier = create_classifier();
        assert!(classifier.classify("xyz123").is_none());
        assert!(classifier.classify("").is_none());
        assert!(classifier.classify("   ").is_none());
    }

    #[test]
    fn test_prefix_and_suffix_tiers() {
        let classifier = create_classifier();

        let result = classifier.classify("applesauce").unwrap();
        assert_eq!(result.subcategory.key, "Fruits & Vegetables");
        assert_eq!(result.tier, MatchTier::Prefix);

        let result = classifier.classify("pineapple").unwrap();
        assert_eq!(result.subcategory.key, "Fruits & Vegetables");
        assert_eq!(result.tier, MatchTier::Suffix);

        let result = classifier.classify("新鮮牛奶").unwrap();
        assert_eq!(result.subcategory.key, "Dairy & Eggs");
        assert_eq!(result.tier, MatchTier::Suffix);
    }

    #[test]
    fn test_substring_tier() {
        let classifier = create_classifier();
        let result = classifier.classify("bigbottleofshampoo123").unwrap();
        assert_eq!(result.category, CategoryTag::Household);
        assert_eq!(result.subcategory.key, "Personal Care");
        assert_eq!(result.tier, MatchTier::Substring);
    }

    #[test]
    fn test_substring_length_guard_is_configurable() {
        let classifier = create_classifier();
        // "牛奶" is only two characters, too short for a bare substring match
        assert!(classifier.classify("有機牛奶盒").is_none());

        let config = EngineConfig {
            min_substring_chars: 2,
            ..Default::default()
        };
        let classifier = Classifier::new(Catalog::builtin(), &config);
        assert_eq!(key_of(&classifier, "有機牛奶盒"), Some("Dairy & Eggs".to_string()));
    }

    #[test]
    fn test_household_searched_before_food() {
        let classifier = create_classifier();
        let result = classifier.classify("rice cooker").unwrap();
        assert_eq!(result.category, CategoryTag::Household);
        assert_eq!(result.subcategory.key, "Kitchen Supplies");
    }

    #[test]
    fn test_category_order_is_configurable() {
        let catalog = tiny_catalog(&[("Drinks", &["bottle"])], &[("Containers", &["bottle"])]);

        let classifier = Classifier::new(Arc::clone(&catalog), &EngineConfig::default());
        assert_eq!(classifier.classify("bottle").unwrap().category, CategoryTag::Household);

        let config = EngineConfig {
            category_order: vec![CategoryTag::Food, CategoryTag::Household],
            ..Default::default()
        };
        let classifier = Classifier::new(catalog, &config);
        assert_eq!(classifier.classify("bottle").unwrap().category, CategoryTag::Food);
    }

    #[test]
    fn test_exact_beats_substring_regardless_of_order() {
        let catalog = tiny_catalog(
            &[("Sauces", &["eatballs"]), ("Meat", &["meatballs"])],
            &[("Cleaning", &["soap"])],
        );
        let classifier = Classifier::new(catalog, &EngineConfig::default());
        let result = classifier.classify("meatballs").unwrap();
        assert_eq!(result.subcategory.key, "Meat");
        assert_eq!(result.tier, MatchTier::Exact);
    }

    #[test]
    fn test_tie_within_tier_goes_to_first_defined() {
        let catalog = tiny_catalog(
            &[("Meat", &["meat"]), ("Sauces", &["meat sauce"])],
            &[("Cleaning", &["soap"])],
        );
        let classifier = Classifier::new(catalog, &EngineConfig::default());
        let result = classifier.classify("meat sauce").unwrap();
        assert_eq!(result.subcategory.key, "Meat");
        assert_eq!(result.matched, "meat");
    }

    #[test]
    fn test_special_token_beats_exact() {
        let catalog = tiny_catalog(&[("Bakery", &["bread"])], &[("Kitchen", &["bread bin"])]);
        let classifier = Classifier::new(catalog, &EngineConfig::default())
            .with_special_tokens(&[("bread", CategoryTag::Food)]);

        let result = classifier.classify("bread bin").unwrap();
        assert_eq!(result.subcategory.key, "Bakery");
        assert_eq!(result.tier, MatchTier::SpecialToken);
    }

    #[test]
    fn test_exact_beats_prefix() {
        // The prefix keyword sits in the category searched first
        let catalog = tiny_catalog(&[("Fruit", &["apple"])], &[("Software", &["app"])]);
        let classifier = Classifier::new(catalog, &EngineConfig::default());

        let result = classifier.classify("apple").unwrap();
        assert_eq!(result.subcategory.key, "Fruit");
        assert_eq!(result.tier, MatchTier::Exact);
    }

    #[test]
    fn test_prefix_beats_suffix() {
        let catalog = tiny_catalog(
            &[("Pans", &["pan"]), ("Fried", &["fry"])],
            &[("Cleaning", &["soap"])],
        );
        let classifier = Classifier::new(catalog, &EngineConfig::default());
        let result = classifier.classify("frypan").unwrap();
        assert_eq!(result.subcategory.key, "Fried");
        assert_eq!(result.tier, MatchTier::Prefix);
    }

    #[test]
    fn test_suffix_beats_longer_substring() {
        let catalog = tiny_catalog(
            &[("Condiments", &["salt"])],
            &[("Appliances", &["dishwasher"])],
        );
        let classifier = Classifier::new(catalog, &EngineConfig::default());

        let result = classifier.classify("superdishwashersalt").unwrap();
        assert_eq!(result.subcategory.key, "Condiments");
        assert_eq!(result.tier, MatchTier::Suffix);
    }

    #[test]
    fn test_keyword_beats_generic_household_term() {
        let catalog = tiny_catalog(&[("Snacks", &["chips"])], &[("Cleaning", &["soap"])]);
        let classifier = Classifier::new(catalog, &EngineConfig::default());

        let result = classifier.classify("chips storage tin").unwrap();
        assert_eq!(result.subcategory.key, "Snacks");
        assert_eq!(result.tier, MatchTier::Exact);

        let result = classifier.classify("storage tin").unwrap();
        assert_eq!(result.subcategory.key, "Cleaning");
        assert_eq!(result.tier, MatchTier::GenericHousehold);
    }

    #[test]
    fn test_catch_all_never_matches_keywords() {
        let catalog = Arc::new(Catalog::new(vec![(
            CategoryTag::Food,
            vec![
                SubcategoryEntry::new("Meat", 3).with_keywords(&["beef"]),
                SubcategoryEntry::new("Other Food", 30)
                    .with_keywords(&["mystery"])
                    .catch_all(),
            ],
        )]));
        let classifier = Classifier::new(catalog, &EngineConfig::default());
        assert!(classifier.classify("mystery").is_none());
    }

    #[test]
    fn test_special_token_prefers_keyword_in_name() {
        let classifier = create_classifier();

        let result = classifier.classify("廁紙").unwrap();
        assert_eq!(result.tier, MatchTier::SpecialToken);
        assert_eq!(result.matched, "廁紙");
        assert_eq!(result.subcategory.key, "Paper Products");

        // "梘" only appears inside the Cleaning Supplies keyword "番梘"
        let result = classifier.classify("洗手梘").unwrap();
        assert_eq!(result.tier, MatchTier::SpecialToken);
        assert_eq!(result.subcategory.key, "Cleaning Supplies");
    }

    #[test]
    fn test_common_characters_do_not_pin_category() {
        let classifier = create_classifier();

        let result = classifier.classify("紙杯蛋糕").unwrap();
        assert_eq!(result.category, CategoryTag::Food);
        assert_eq!(result.subcategory.key, "Bakery");

        let result = classifier.classify("菜籽油").unwrap();
        assert_eq!(result.category, CategoryTag::Food);
        assert_eq!(result.subcategory.key, "Condiments & Sauces");

        let result = classifier.classify("錫紙").unwrap();
        assert_eq!(result.tier, MatchTier::Exact);
        assert_eq!(result.subcategory.key, "Kitchen Supplies");

        let result = classifier.classify("白菜仔").unwrap();
        assert_eq!(result.tier, MatchTier::Prefix);
        assert_eq!(result.subcategory.key, "Fruits & Vegetables");
    }

    #[test]
    fn test_special_token_falls_back_to_first_specific() {
        let classifier = create_classifier();
        let result = classifier.classify("今晚餸").unwrap();
        assert_eq!(result.category, CategoryTag::Food);
        assert_eq!(result.subcategory.key, "Fruits & Vegetables");
        assert_eq!(result.matched, "餸");
    }

    #[test]
    fn test_generic_household_fallback() {
        let classifier = create_classifier();

        let result = classifier.classify("storage box").unwrap();
        assert_eq!(result.tier, MatchTier::GenericHousehold);
        assert_eq!(result.category, CategoryTag::Household);
        assert_eq!(result.subcategory.key, "Cleaning Supplies");

        let result = classifier.classify("收納箱").unwrap();
        assert_eq!(result.tier, MatchTier::GenericHousehold);
    }

    #[test]
    fn test_substitute_tables() {
        let classifier = create_classifier()
            .with_special_tokens(&[])
            .with_generic_household_terms(&[]);
        assert!(classifier.classify("storage box").is_none());
        assert!(classifier.classify("今晚餸").is_none());
    }
}
