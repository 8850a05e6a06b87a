//! Text tokenization for search scoring.

/// Characters that delimit tokens, in addition to whitespace.
const TOKEN_PUNCTUATION: &[char] = &[
    ',', '.', ':', ';', '!', '?', '(', ')', '[', ']', '{', '}', '\'', '"',
];

/// Splits raw text into lowercase word tokens.
///
/// Splits on whitespace and common punctuation, drops empty tokens, and
/// preserves occurrence order (used downstream for the position bonus).
/// No stemming, no stop-word removal. Never panics; empty input produces
/// an empty vec.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| c.is_whitespace() || TOKEN_PUNCTUATION.contains(&c))
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("The quick brown fox", vec!["the", "quick", "brown", "fox"])]
    #[case("Hello, world!", vec!["hello", "world"])]
    #[case("a.b:c;d!e?f", vec!["a", "b", "c", "d", "e", "f"])]
    #[case("(parens) [brackets] {braces}", vec!["parens", "brackets", "braces"])]
    #[case("don't \"quote\" me", vec!["don", "t", "quote", "me"])]
    #[case("  spaced   out  ", vec!["spaced", "out"])]
    fn test_tokenize(#[case] input: &str, #[case] expected: Vec<&str>) {
        let expected: Vec<String> = expected.iter().map(ToString::to_string).collect();
        check!(tokenize(input) == expected);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t")]
    #[case(".,;:!?")]
    fn test_tokenize_empty_results(#[case] input: &str) {
        check!(tokenize(input).is_empty());
    }

    #[test]
    fn test_order_preserved_with_repeats() {
        check!(tokenize("cat dog cat") == vec!["cat", "dog", "cat"]);
    }

    #[test]
    fn test_unicode_does_not_panic() {
        // Hyphens and underscores are not in the punctuation set and survive.
        check!(tokenize("naïve café-style") == vec!["naïve", "café-style"]);
    }
}
