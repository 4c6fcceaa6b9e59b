use super::*;

#[test]
fn predefined_cuisine_yields_mapped_keyword() {
    let criteria = build_criteria(None, Some(Cuisine::Chinese), None);
    assert_eq!(criteria.cuisine_keyword.as_deref(), Some("中式餐廳"));
    assert_eq!(criteria.price_level, None);
}

#[test]
fn predefined_cuisine_ignores_custom_text() {
    let criteria = build_criteria(None, Some(Cuisine::Korean), Some("拉麵"));
    assert_eq!(criteria.cuisine_keyword.as_deref(), Some("韓式料理"));
}

#[test]
fn custom_cuisine_uses_text_verbatim() {
    let criteria = build_criteria(None, Some(Cuisine::Custom), Some("  素食 bistro "));
    assert_eq!(criteria.cuisine_keyword.as_deref(), Some("  素食 bistro "));
}

#[test]
fn custom_cuisine_with_empty_text_has_no_keyword() {
    assert_eq!(
        build_criteria(None, Some(Cuisine::Custom), Some("")).cuisine_keyword,
        None
    );
    assert_eq!(
        build_criteria(None, Some(Cuisine::Custom), None).cuisine_keyword,
        None
    );
}

#[test]
fn no_cuisine_means_no_keyword() {
    let criteria = build_criteria(Some(PriceTier::Three), None, Some("拉麵"));
    assert_eq!(criteria.cuisine_keyword, None);
    assert_eq!(criteria.price_level, Some(3));
}

#[test]
fn price_tier_passes_through_as_level() {
    for tier in PriceTier::ALL {
        let criteria = build_criteria(Some(tier), None, None);
        assert_eq!(criteria.price_level, Some(tier.level()));
    }
}

#[test]
fn build_criteria_is_idempotent() {
    let first = build_criteria(Some(PriceTier::Two), Some(Cuisine::Custom), Some("火鍋"));
    let second = build_criteria(Some(PriceTier::Two), Some(Cuisine::Custom), Some("火鍋"));
    assert_eq!(first, second);
}

#[test]
fn add_custom_cuisine_commits_text_and_clears_input() {
    let mut form = SearchForm {
        cuisine: Some(Cuisine::Japanese),
        custom_input: "火鍋".to_string(),
        ..SearchForm::default()
    };
    form.add_custom_cuisine();

    assert_eq!(form.cuisine, Some(Cuisine::Custom));
    assert_eq!(form.custom_keyword, "火鍋");
    assert!(form.custom_input.is_empty());
    assert_eq!(form.criteria().cuisine_keyword.as_deref(), Some("火鍋"));
}

#[test]
fn add_custom_cuisine_with_empty_input_is_a_no_op() {
    let mut form = SearchForm {
        cuisine: Some(Cuisine::Western),
        ..SearchForm::default()
    };
    let before = form.clone();
    form.add_custom_cuisine();
    assert_eq!(form, before);
}

#[test]
fn custom_selection_falls_back_to_typed_text() {
    let mut form = SearchForm::default();
    form.select_cuisine(Some(Cuisine::Custom));
    form.custom_input = "早午餐".to_string();
    assert_eq!(form.criteria().cuisine_keyword.as_deref(), Some("早午餐"));
}

#[test]
fn selecting_predefined_cuisine_drops_committed_custom_keyword() {
    let mut form = SearchForm {
        custom_input: "火鍋".to_string(),
        ..SearchForm::default()
    };
    form.add_custom_cuisine();
    form.select_cuisine(Some(Cuisine::Japanese));

    assert!(form.custom_keyword.is_empty());
    assert_eq!(form.criteria().cuisine_keyword.as_deref(), Some("日本料理"));
}

#[test]
fn current_keyword_label_follows_selection() {
    let mut form = SearchForm::default();
    assert_eq!(form.current_keyword_label(), "");

    form.select_cuisine(Some(Cuisine::Korean));
    assert_eq!(form.current_keyword_label(), "韓式料理");

    form.custom_input = "咖哩".to_string();
    form.add_custom_cuisine();
    assert_eq!(form.current_keyword_label(), "咖哩");
}
