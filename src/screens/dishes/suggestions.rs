//! Autocomplete suggestions for the dishes search box.

use std::collections::BTreeMap;

/// Characters that start a new word when scanning left from a match.
const WORD_BOUNDARIES: [char; 5] = [' ', ',', '"', '.', ';'];

/// Characters that end a suggestion when scanning right from a match.
///
/// A space does not end it: the suggestion runs to the end of the phrase,
/// so "пицц" completes to "пицца маргарита" rather than just "пицца".
const PHRASE_BOUNDARIES: [char; 4] = [',', '"', '.', ';'];

/// Build a `fragment -> occurrences` map for `query` over dish titles.
///
/// Every case-insensitive occurrence of the trimmed query is widened to the
/// enclosing fragment, lower-cased and counted. A blank query yields an
/// empty map.
pub fn find_suggestions<'a, I>(query: &str, titles: I) -> BTreeMap<String, u32>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut suggestions = BTreeMap::new();
    let needle: Vec<char> = query.trim().chars().map(fold_case).collect();
    if needle.is_empty() {
        return suggestions;
    }

    for title in titles {
        let original: Vec<char> = title.chars().collect();
        let folded: Vec<char> = original.iter().copied().map(fold_case).collect();

        let mut from = 0;
        while let Some(found) = find_from(&folded, &needle, from) {
            let match_end = found + needle.len();
            let start = original[..found]
                .iter()
                .rposition(|c| WORD_BOUNDARIES.contains(c))
                .map(|boundary| boundary + 1)
                .unwrap_or(0);
            let end = original[match_end..]
                .iter()
                .position(|c| PHRASE_BOUNDARIES.contains(c))
                .map(|offset| match_end + offset)
                .unwrap_or(original.len());

            let fragment: String = original[start..end].iter().collect();
            *suggestions.entry(fragment.to_lowercase()).or_insert(0) += 1;
            from = match_end;
        }
    }

    suggestions
}

/// Single-char case folding keeps indices of the folded and original text aligned.
fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if from > haystack.len() || needle.len() > haystack.len() - from {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|index| from + index)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Space is a left boundary only; this case needs whole phrases back.
    #[test]
    fn cyrillic_query_matches_case_insensitively() {
        let corpus = ["Пицца Маргарита", "Пицца с ветчиной", "Паста"];
        let suggestions = find_suggestions("пицц", corpus);

        let expected: BTreeMap<String, u32> = [
            ("пицца маргарита".to_string(), 1),
            ("пицца с ветчиной".to_string(), 1),
        ]
        .into_iter()
        .collect();
        assert_eq!(suggestions, expected);
    }

    #[test]
    fn blank_query_yields_nothing() {
        assert!(find_suggestions("   ", ["Pizza"]).is_empty());
        assert!(find_suggestions("", ["Pizza"]).is_empty());
    }

    #[test]
    fn match_in_middle_starts_at_word_boundary() {
        let suggestions = find_suggestions("гари", ["Пицца Маргарита"]);
        assert_eq!(suggestions.get("маргарита"), Some(&1));
        assert_eq!(suggestions.len(), 1);
    }

    #[test]
    fn phrase_ends_at_punctuation() {
        let suggestions = find_suggestions("soup", ["Soup of the day, large", "Fish soup; spicy"]);
        assert_eq!(suggestions.get("soup of the day"), Some(&1));
        assert_eq!(suggestions.get("soup"), Some(&1));
    }

    #[test]
    fn repeated_fragments_are_counted() {
        let suggestions = find_suggestions("roll", ["Roll", "roll", "Spring roll"]);
        assert_eq!(suggestions.get("roll"), Some(&3));
    }

    #[test]
    fn multiple_occurrences_in_one_title() {
        let suggestions = find_suggestions("cake", ["Cake, cheesecake"]);
        assert_eq!(suggestions.get("cake"), Some(&1));
        assert_eq!(suggestions.get("cheesecake"), Some(&1));
    }

    #[test]
    fn query_is_trimmed() {
        let suggestions = find_suggestions("  tea ", ["Green tea"]);
        assert_eq!(suggestions.get("tea"), Some(&1));
    }

    #[test]
    fn no_match_yields_nothing() {
        assert!(find_suggestions("sushi", ["Pizza", "Pasta"]).is_empty());
    }
}
