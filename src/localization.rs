//! # Localization Module
//!
//! Locales supported by the catalog's display names, and resolution of
//! BCP-47 language tags (as reported by the device or the caller) onto them.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use unic_langid::LanguageIdentifier;

/// A locale the catalog carries labels for
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Locale {
    /// English, also the fallback for every missing label
    #[default]
    #[serde(rename = "en")]
    En,
    /// Traditional Chinese (Hong Kong, Taiwan, Macau)
    #[serde(rename = "zh-Hant")]
    ZhHant,
    /// Simplified Chinese (mainland China, Singapore)
    #[serde(rename = "zh-Hans")]
    ZhHans,
}

impl Locale {
    /// Every supported locale, English first
    pub const ALL: [Locale; 3] = [Locale::En, Locale::ZhHant, Locale::ZhHans];

    /// Canonical locale code, e.g. `"zh-Hant"`
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhHant => "zh-Hant",
            Locale::ZhHans => "zh-Hans",
        }
    }

    /// Resolve a language tag to a supported locale.
    ///
    /// Chinese tags pick their script from an explicit script subtag first,
    /// then from the region (`TW`, `HK`, `MO` are Traditional). Bare `zh`
    /// resolves to Simplified. Anything unparseable or unsupported falls
    /// back to English.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pantry::localization::Locale;
    ///
    /// assert_eq!(Locale::from_tag("zh-TW"), Locale::ZhHant);
    /// assert_eq!(Locale::from_tag("zh-Hans-HK"), Locale::ZhHans);
    /// assert_eq!(Locale::from_tag("fr-FR"), Locale::En);
    /// ```
    pub fn from_tag(tag: &str) -> Locale {
        let langid: LanguageIdentifier = match tag.trim().replace('_', "-").parse() {
            Ok(langid) => langid,
            Err(e) => {
                warn!("Could not parse locale tag '{}': {}, using English", tag, e);
                return Locale::En;
            }
        };

        let locale = match langid.language.as_str() {
            "zh" => match langid.script.as_ref().map(|s| s.as_str()) {
                Some("Hant") => Locale::ZhHant,
                Some("Hans") => Locale::ZhHans,
                _ => match langid.region.as_ref().map(|r| r.as_str()) {
                    Some("TW") | Some("HK") | Some("MO") => Locale::ZhHant,
                    _ => Locale::ZhHans,
                },
            },
            "en" => Locale::En,
            other => {
                debug!("Unsupported language '{}', falling back to English", other);
                Locale::En
            }
        };

        debug!("Resolved locale tag '{}' -> {}", tag, locale);
        locale
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
