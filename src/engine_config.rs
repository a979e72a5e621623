//! # Engine Configuration Module
//!
//! Tunable heuristics shared by every engine component ([`EngineConfig`]) and
//! the per-household scaling preferences supplied by callers
//! ([`HouseholdSettings`]), with loaders for JSON multiplier files and
//! environment variables.

use crate::catalog_data::DEFAULT_AUTO_SCALE_KEYS;
use crate::catalog_model::CategoryTag;
use crate::engine_errors::ConfigError;
use crate::localization::Locale;
use crate::quantity_scaler::ScalingPolicy;
use log::{debug, info, warn};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

// Constants for engine configuration
pub const DEFAULT_MIN_SUBSTRING_CHARS: usize = 3;
pub const DEFAULT_FAMILY_SIZE: i64 = 1;
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

// Environment variables read by `HouseholdSettings::from_env`
pub const ENV_FAMILY_SIZE: &str = "PANTRY_FAMILY_SIZE";
pub const ENV_SCALING_POLICY: &str = "PANTRY_SCALING_POLICY";
pub const ENV_AUTO_ADJUST: &str = "PANTRY_AUTO_ADJUST";
pub const ENV_MULTIPLIERS_FILE: &str = "PANTRY_MULTIPLIERS_FILE";
pub const ENV_LOCALE: &str = "PANTRY_LOCALE";

/// Heuristics used by the classifier and the quantity scaler
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Minimum keyword length, in characters, for a bare substring match
    pub min_substring_chars: usize,
    /// Order categories are searched in during keyword matching
    pub category_order: Vec<CategoryTag>,
    /// Canonical keys that scale with family size under the Basic policy
    pub basic_auto_scale_keys: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_substring_chars: DEFAULT_MIN_SUBSTRING_CHARS,
            // Household keywords are more specific than the food-leaning generic words
            category_order: vec![CategoryTag::Household, CategoryTag::Food],
            basic_auto_scale_keys: DEFAULT_AUTO_SCALE_KEYS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

/// A household's quantity-scaling preferences
#[derive(Debug, Clone, PartialEq)]
pub struct HouseholdSettings {
    /// Number of people the household buys for
    pub family_size: i64,
    /// Which subcategories scale, and how
    pub policy: ScalingPolicy,
    /// Canonical subcategory key -> multiplier, used by the Advanced policy
    pub multipliers: HashMap<String, f64>,
    /// Master switch for automatic adjustment
    pub auto_adjust_enabled: bool,
    /// Locale for display names in item drafts
    pub locale: Locale,
}

impl Default for HouseholdSettings {
    fn default() -> Self {
        Self {
            family_size: DEFAULT_FAMILY_SIZE,
            policy: ScalingPolicy::Basic,
            multipliers: HashMap::new(),
            auto_adjust_enabled: true,
            locale: Locale::En,
        }
    }
}

impl HouseholdSettings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through a variable lookup function.
    ///
    /// Unset variables keep their defaults. A malformed family size, policy or
    /// auto-adjust flag is an error; the multipliers file is loaded with
    /// [`load_multipliers`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(raw) = lookup(ENV_FAMILY_SIZE) {
            settings.family_size = raw.trim().parse().map_err(|_| {
                ConfigError::InvalidValue(format!("{ENV_FAMILY_SIZE}='{raw}' is not an integer"))
            })?;
        }

        if let Some(raw) = lookup(ENV_SCALING_POLICY) {
            settings.policy = ScalingPolicy::parse(&raw).ok_or_else(|| {
                ConfigError::InvalidValue(format!(
                    "{ENV_SCALING_POLICY}='{raw}' is not 'basic' or 'advanced'"
                ))
            })?;
        }

        if let Some(raw) = lookup(ENV_AUTO_ADJUST) {
            settings.auto_adjust_enabled = parse_flag(&raw).ok_or_else(|| {
                ConfigError::InvalidValue(format!("{ENV_AUTO_ADJUST}='{raw}' is not a boolean"))
            })?;
        }

        if let Some(path) = lookup(ENV_MULTIPLIERS_FILE) {
            settings.multipliers = load_multipliers(Path::new(path.trim()))?;
        }

        if let Some(raw) = lookup(ENV_LOCALE) {
            settings.locale = Locale::from_tag(&raw);
        }

        info!(
            "Household settings: family_size={}, policy={:?}, auto_adjust={}, multipliers={}, locale={}",
            settings.family_size,
            settings.policy,
            settings.auto_adjust_enabled,
            settings.multipliers.len(),
            settings.locale
        );

        Ok(settings)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Load a JSON multiplier file: an object mapping canonical subcategory keys to numbers.
///
/// # Examples
///
/// ```json
/// { "Meat": 1.5, "Beverages": 2, "Snacks": 0.5 }
/// ```
pub fn load_multipliers(path: &Path) -> Result<HashMap<String, f64>, ConfigError> {
    debug!("Loading multipliers from {}", path.display());
    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
    parse_multipliers(&content)
}

/// Parse multiplier JSON. Values that are not positive finite numbers are
/// replaced with 1 so a bad entry never blocks quantity entry.
pub fn parse_multipliers(json: &str) -> Result<HashMap<String, f64>, ConfigError> {
    let value: Value = serde_json::from_str(json)?;
    let object = value.as_object().ok_or_else(|| {
        ConfigError::Parse("multipliers must be a JSON object of key -> number".to_string())
    })?;

    let multipliers = object
        .iter()
        .map(|(key, raw)| {
            let parsed = match raw {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            let multiplier = sanitize_multiplier(parsed);
            if parsed != Some(multiplier) {
                warn!(
                    "Multiplier for '{}' is not a positive number ({}), using {}",
                    key, raw, multiplier
                );
            }
            (key.clone(), multiplier)
        })
        .collect();

    Ok(multipliers)
}

/// Positive finite multipliers pass through; anything else becomes 1
pub fn sanitize_multiplier(raw: Option<f64>) -> f64 {
    match raw {
        Some(m) if m.is_finite() && m > 0.0 => m,
        _ => DEFAULT_MULTIPLIER,
    }
}
