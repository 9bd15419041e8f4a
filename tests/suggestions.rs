use std::collections::BTreeMap;

use sbdelivery::screens::dishes::suggestions::find_suggestions;

#[test]
fn pizza_query_yields_full_names() {
    let corpus = ["Пицца Маргарита", "Пицца с ветчиной", "Паста"];
    let found = find_suggestions("пицц", corpus);
    assert_eq!(
        found,
        BTreeMap::from([
            ("пицца маргарита".to_string(), 1),
            ("пицца с ветчиной".to_string(), 1),
        ])
    );
}

#[test]
fn blank_query_finds_nothing() {
    assert!(find_suggestions("   ", ["Soup"]).is_empty());
}
