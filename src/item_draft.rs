//! # Item Draft Pipeline
//!
//! [`ItemEngine`] wires one shared catalog into the classifier, segmenter and
//! quantity scaler, and turns a spoken or typed utterance into pre-filled
//! [`ItemDraft`]s ready for a form or editor.

use crate::catalog_model::{Catalog, CategoryTag};
use crate::classifier::{ClassificationResult, Classifier, MatchTier};
use crate::engine_config::{EngineConfig, HouseholdSettings};
use crate::quantity_scaler::{QuantityScaler, ScalingInput, ScalingOutcome};
use crate::segmenter::Segmenter;
use chrono::{Days, NaiveDate};
use log::{debug, info, warn};
use serde::Serialize;
use std::sync::Arc;

/// Pre-filled fields for one item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDraft {
    /// Item name as segmented from the utterance
    pub name: String,
    pub category: Option<CategoryTag>,
    /// Canonical subcategory key
    pub subcategory_key: Option<String>,
    /// Subcategory label in the household's locale
    pub display_name: Option<String>,
    pub match_tier: Option<MatchTier>,
    pub shelf_life_days: Option<u32>,
    /// `today + shelf_life_days`
    pub suggested_expiry: Option<NaiveDate>,
    pub quantity: i64,
    pub quantity_adjusted: bool,
}

/// Facade over the classification, segmentation and scaling components
#[derive(Debug, Clone)]
pub struct ItemEngine {
    catalog: Arc<Catalog>,
    classifier: Classifier,
    segmenter: Segmenter,
    scaler: QuantityScaler,
}

impl ItemEngine {
    pub fn new(catalog: Arc<Catalog>, config: &EngineConfig) -> Self {
        info!("Creating ItemEngine");
        Self {
            classifier: Classifier::new(Arc::clone(&catalog), config),
            segmenter: Segmenter::new(&catalog),
            scaler: QuantityScaler::new(Arc::clone(&catalog), config),
            catalog,
        }
    }

    /// Engine over the built-in catalog with default heuristics
    pub fn builtin() -> Self {
        Self::new(Catalog::builtin(), &EngineConfig::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// See [`Classifier::classify`]
    pub fn classify(&self, name: &str) -> Option<ClassificationResult<'_>> {
        self.classifier.classify(name)
    }

    /// See [`Segmenter::segment`]
    pub fn segment(&self, utterance: &str) -> Vec<String> {
        self.segmenter.segment(utterance)
    }

    /// See [`QuantityScaler::scale`]
    pub fn scale(&self, input: &ScalingInput) -> ScalingOutcome {
        self.scaler.scale(input)
    }

    /// Default shelf-life for an item the caller has already placed in `category`.
    ///
    /// Uses the classified subcategory when it belongs to `category`; otherwise
    /// the category's catch-all entry (or its last entry when it has none).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pantry::catalog_model::CategoryTag;
    /// use pantry::item_draft::ItemEngine;
    ///
    /// let engine = ItemEngine::builtin();
    /// assert_eq!(engine.default_shelf_life_days(CategoryTag::Food, "salmon fillet"), 2);
    /// assert_eq!(engine.default_shelf_life_days(CategoryTag::Food, "xyz123"), 30);
    /// ```
    pub fn default_shelf_life_days(&self, category: CategoryTag, name: &str) -> u32 {
        if let Some(result) = self.classify(name) {
            if result.category == category {
                return result.subcategory.default_shelf_life_days;
            }
            debug!(
                "'{}' classified as {} but requested {}, using fallback",
                name, result.category, category
            );
        }

        let fallback = self
            .catalog
            .catch_all_of(category)
            .or_else(|| self.catalog.subcategories_of(category).last());
        match fallback {
            Some(entry) => entry.default_shelf_life_days,
            None => {
                warn!("Catalog has no {} subcategories", category);
                0
            }
        }
    }

    /// Draft one item name
    pub fn draft_item(
        &self,
        name: &str,
        base_quantity: i64,
        settings: &HouseholdSettings,
        today: NaiveDate,
    ) -> ItemDraft {
        let name = name.trim();
        let classification = self.classify(name);

        let subcategory_key = classification.as_ref().map(|r| r.subcategory.key.as_str());
        let outcome = self.scale(&ScalingInput::from_settings(
            base_quantity,
            subcategory_key,
            settings,
        ));

        let draft = match classification {
            Some(result) => {
                let days = result.subcategory.default_shelf_life_days;
                ItemDraft {
                    name: name.to_string(),
                    category: Some(result.category),
                    subcategory_key: Some(result.subcategory.key.clone()),
                    display_name: Some(
                        result.subcategory.display_name(settings.locale).to_string(),
                    ),
                    match_tier: Some(result.tier),
                    shelf_life_days: Some(days),
                    suggested_expiry: today.checked_add_days(Days::new(u64::from(days))),
                    quantity: outcome.final_quantity,
                    quantity_adjusted: outcome.was_adjusted,
                }
            }
            None => ItemDraft {
                name: name.to_string(),
                category: None,
                subcategory_key: None,
                display_name: None,
                match_tier: None,
                shelf_life_days: None,
                suggested_expiry: None,
                quantity: outcome.final_quantity,
                quantity_adjusted: outcome.was_adjusted,
            },
        };

        debug!("Drafted {:?}", draft);
        draft
    }

    /// Segment an utterance and draft every item in it, in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use pantry::engine_config::HouseholdSettings;
    /// use pantry::item_draft::ItemEngine;
    ///
    /// let engine = ItemEngine::builtin();
    /// let settings = HouseholdSettings { family_size: 3, ..Default::default() };
    /// let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    ///
    /// let drafts = engine.draft_items("beef, milk", 1, &settings, today);
    /// assert_eq!(drafts.len(), 2);
    /// assert_eq!(drafts[0].quantity, 3);
    /// assert_eq!(drafts[1].quantity, 1);
    /// ```
    pub fn draft_items(
        &self,
        utterance: &str,
        base_quantity: i64,
        settings: &HouseholdSettings,
        today: NaiveDate,
    ) -> Vec<ItemDraft> {
        let drafts: Vec<ItemDraft> = self
            .segment(utterance)
            .iter()
            .map(|name| self.draft_item(name, base_quantity, settings, today))
            .collect();

        info!(
            "Drafted {} item(s), {} classified",
            drafts.len(),
            drafts.iter().filter(|d| d.category.is_some()).count()
        );
        drafts
    }
}
