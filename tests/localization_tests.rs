//! # Localization Tests
//!
//! Locale resolution and localized subcategory labels.

use pantry::catalog_model::Catalog;
use pantry::localization::Locale;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_tags() {
        assert_eq!(Locale::from_tag("zh-Hant-HK"), Locale::ZhHant);
        assert_eq!(Locale::from_tag("zh-TW"), Locale::ZhHant);
        assert_eq!(Locale::from_tag("zh-CN"), Locale::ZhHans);
        assert_eq!(Locale::from_tag("en-GB"), Locale::En);
    }

    #[test]
    fn test_display_names_per_locale() {
        let catalog = Catalog::builtin();
        let (_, meat) = catalog.find("Meat").unwrap();

        assert_eq!(meat.display_name(Locale::En), "Meat");
        assert_eq!(meat.display_name(Locale::ZhHant), "肉類");
        assert_eq!(meat.display_name(Locale::ZhHans), "肉类");
    }

    #[test]
    fn test_lookup_by_localized_label() {
        let catalog = Catalog::builtin();
        let (_, entry) = catalog.find("个人护理").unwrap();
        assert_eq!(entry.key, "Personal Care");
    }

    #[test]
    fn test_locale_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Locale::ZhHant).unwrap(), "\"zh-Hant\"");
        assert_eq!(Locale::ZhHans.to_string(), "zh-Hans");
    }
}
