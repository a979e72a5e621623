#[cfg(test)]
mod tests {
    use pantry::catalog_model::Catalog;
    use pantry::segmenter::Segmenter;

    fn create_segmenter() -> Segmenter {
        Segmenter::new(&Catalog::builtin())
    }

    /// Input characters minus separators and whitespace
    fn content_chars(text: &str, separators: &[char]) -> String {
        text.chars()
            .filter(|c| !c.is_whitespace() && !separators.contains(c))
            .collect()
    }

    #[test]
    fn test_scenario_comma_list() {
        let segmenter = create_segmenter();
        assert_eq!(
            segmenter.segment("apples, milk, bread"),
            vec!["apples", "milk", "bread"]
        );
    }

    #[test]
    fn test_scenario_chinese_connective() {
        let segmenter = create_segmenter();
        assert_eq!(segmenter.segment("蘋果和牛奶"), vec!["蘋果", "牛奶"]);
    }

    #[test]
    fn test_mixed_connectives() {
        let segmenter = create_segmenter();
        assert_eq!(segmenter.segment("牛奶還有雞蛋"), vec!["牛奶", "雞蛋"]);
        assert_eq!(segmenter.segment("牛奶加上麵包"), vec!["牛奶", "麵包"]);
        assert_eq!(
            segmenter.segment("toilet paper also dish soap"),
            vec!["toilet paper", "dish soap"]
        );
    }

    #[test]
    fn test_delimiters_take_precedence_over_connectives() {
        let segmenter = create_segmenter();
        assert_eq!(
            segmenter.segment("salt and pepper, olive oil"),
            vec!["salt and pepper", "olive oil"]
        );
    }

    #[test]
    fn test_dictionary_segmentation() {
        let segmenter = create_segmenter();
        assert_eq!(segmenter.segment("蘋果牛奶麵包"), vec!["蘋果", "牛奶", "麵包"]);
    }

    #[test]
    fn test_total_coverage() {
        let segmenter = create_segmenter();
        let separators = [',', '，', ';', '；', '、'];

        for input in [
            "apples, milk, bread",
            "蘋果牛奶麵包",
            "三文魚雞蛋",
            "牛奶新鮮貨",
            "milk eggs bread",
            "雞蛋、豆腐；  牛奶",
        ] {
            let joined: String = segmenter.segment(input).concat();
            assert_eq!(
                content_chars(&joined, &separators),
                content_chars(input, &separators),
                "segmenting '{}'",
                input
            );
        }
    }

    #[test]
    fn test_atomic_input_is_idempotent() {
        let segmenter = create_segmenter();
        for input in ["milk", "牛奶", "和牛", "vitamin c"] {
            assert_eq!(segmenter.segment(input), vec![input]);
        }
    }

    #[test]
    fn test_segmentation_is_deterministic() {
        let segmenter = create_segmenter();
        for input in ["apples, milk", "蘋果牛奶", "beef and rice", ""] {
            assert_eq!(segmenter.segment(input), segmenter.segment(input));
        }
    }

    #[test]
    fn test_custom_vocabulary() {
        let segmenter = Segmenter::with_vocabulary(vec!["りんご".to_string(), "牛乳".to_string()]);
        assert_eq!(segmenter.segment("りんご牛乳"), vec!["りんご", "牛乳"]);
    }
}
