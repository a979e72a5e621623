//! # Quantity Scaler Module
//!
//! Adjusts a purchase quantity to the size of the household.
//!
//! ## Policies
//!
//! - **Basic**: only a fixed set of subcategories (by default Meat, Seafood and
//!   Fruits & Vegetables) scale, as `quantity × family size`
//! - **Advanced**: every subcategory scales, as `quantity × family size × multiplier`,
//!   with the multiplier looked up by canonical key (1 when absent)
//!
//! Results are rounded half away from zero and never drop below 1.

use crate::catalog_model::Catalog;
use crate::engine_config::{sanitize_multiplier, EngineConfig, HouseholdSettings};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// How quantities scale with family size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalingPolicy {
    /// Fixed subcategory set, multiplier 1
    Basic,
    /// Every subcategory, per-subcategory multiplier
    Advanced,
}

impl ScalingPolicy {
    /// Parse a policy name, case-insensitively
    pub fn parse(name: &str) -> Option<ScalingPolicy> {
        match name.trim().to_lowercase().as_str() {
            "basic" => Some(ScalingPolicy::Basic),
            "advanced" => Some(ScalingPolicy::Advanced),
            _ => None,
        }
    }
}

/// One scaling computation
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingInput {
    /// Quantity the user entered
    pub base_quantity: i64,
    /// Number of people in the household
    pub family_size: i64,
    /// Canonical key or localized name of the item's subcategory
    pub subcategory_key: Option<String>,
    pub policy: ScalingPolicy,
    /// Canonical key -> multiplier (Advanced policy only)
    pub multipliers: HashMap<String, f64>,
    pub auto_adjust_enabled: bool,
}

impl ScalingInput {
    /// Build an input from a household's settings
    pub fn from_settings(
        base_quantity: i64,
        subcategory_key: Option<&str>,
        settings: &HouseholdSettings,
    ) -> Self {
        Self {
            base_quantity,
            family_size: settings.family_size,
            subcategory_key: subcategory_key.map(str::to_string),
            policy: settings.policy,
            multipliers: settings.multipliers.clone(),
            auto_adjust_enabled: settings.auto_adjust_enabled,
        }
    }
}

/// Result of a scaling computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScalingOutcome {
    /// Quantity to pre-fill, at least 1
    pub final_quantity: i64,
    /// Whether it differs from the base quantity
    pub was_adjusted: bool,
}

impl ScalingOutcome {
    fn unchanged(quantity: i64) -> Self {
        Self {
            final_quantity: quantity,
            was_adjusted: false,
        }
    }
}

/// Scales quantities against a shared catalog
#[derive(Debug, Clone)]
pub struct QuantityScaler {
    catalog: Arc<Catalog>,
    /// Lower-cased canonical keys eligible under the Basic policy
    auto_scale_keys: HashSet<String>,
}

impl QuantityScaler {
    pub fn new(catalog: Arc<Catalog>, config: &EngineConfig) -> Self {
        let auto_scale_keys = config
            .basic_auto_scale_keys
            .iter()
            .map(|k| k.trim().to_lowercase())
            .collect();
        Self {
            catalog,
            auto_scale_keys,
        }
    }

    /// Compute the adjusted quantity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pantry::catalog_model::Catalog;
    /// use pantry::engine_config::EngineConfig;
    /// use pantry::quantity_scaler::{QuantityScaler, ScalingInput, ScalingPolicy};
    /// use std::collections::HashMap;
    ///
    /// let scaler = QuantityScaler::new(Catalog::builtin(), &EngineConfig::default());
    /// let outcome = scaler.scale(&ScalingInput {
    ///     base_quantity: 2,
    ///     family_size: 4,
    ///     subcategory_key: Some("Meat".to_string()),
    ///     policy: ScalingPolicy::Basic,
    ///     multipliers: HashMap::new(),
    ///     auto_adjust_enabled: true,
    /// });
    /// assert_eq!(outcome.final_quantity, 8);
    /// assert!(outcome.was_adjusted);
    /// ```
    pub fn scale(&self, input: &ScalingInput) -> ScalingOutcome {
        if input.base_quantity < 1 {
            warn!("Non-positive base quantity {}, using 1", input.base_quantity);
            return ScalingOutcome::unchanged(1);
        }
        let base = input.base_quantity;

        if !input.auto_adjust_enabled || input.family_size <= 1 {
            trace!(
                "Scaling skipped: auto_adjust={}, family_size={}",
                input.auto_adjust_enabled,
                input.family_size
            );
            return ScalingOutcome::unchanged(base);
        }

        let Some(raw_key) = input
            .subcategory_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
        else {
            return ScalingOutcome::unchanged(base);
        };

        let Some((_, entry)) = self.catalog.find(raw_key) else {
            debug!("Unknown subcategory '{}', quantity unchanged", raw_key);
            return ScalingOutcome::unchanged(base);
        };
        let key = entry.key.as_str();

        let multiplier = match input.policy {
            ScalingPolicy::Basic => {
                if !self.auto_scale_keys.contains(&key.to_lowercase()) {
                    trace!("'{}' is not auto-scaled under the Basic policy", key);
                    return ScalingOutcome::unchanged(base);
                }
                1.0
            }
            ScalingPolicy::Advanced => {
                sanitize_multiplier(lookup_multiplier(&input.multipliers, key))
            }
        };

        let scaled = (base as f64 * input.family_size as f64 * multiplier).round();
        let final_quantity = (scaled as i64).max(1);

        debug!(
            "Scaled '{}' ({:?}): {} x {} x {} -> {}",
            key, input.policy, base, input.family_size, multiplier, final_quantity
        );

        ScalingOutcome {
            final_quantity,
            was_adjusted: final_quantity != base,
        }
    }
}

fn lookup_multiplier(multipliers: &HashMap<String, f64>, key: &str) -> Option<f64> {
    multipliers.get(key).copied().or_else(|| {
        multipliers
            .iter()
            .find(|(k, _)| k.trim().eq_ignore_ascii_case(key))
            .map(|(_, m)| *m)
    })
}
