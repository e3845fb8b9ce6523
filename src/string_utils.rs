use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use strum_macros::Display;

use crate::constants::titleize::{DELIMITER_PATTERN, WORD_SEPARATOR};

static DELIMITER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(DELIMITER_PATTERN).unwrap());

/// Defines what happens to the characters following the first one of each word
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasePolicy {
    /// Lowercase the remainder of the word ("hELLO" -> "Hello")
    #[default]
    #[strum(serialize = "lower")]
    Lower,
    /// Keep the remainder of the word untouched ("hELLO" -> "HELLO")
    #[strum(serialize = "preserve")]
    Preserve,
}

/// Splits the input into words using runs of `_`, `-` and spaces as separators.
///
/// Consecutive delimiters count as a single split point. A leading delimiter run
/// yields a leading empty word, while trailing empty words are dropped.
///
/// # Examples
///
/// ```
/// use titleize::string_utils::split_words;
///
/// assert_eq!(split_words("_a__b-c "), vec!["", "a", "b", "c"]);
/// assert!(split_words("_-").is_empty());
/// ```
pub fn split_words(input: &str) -> Vec<&str> {
    let mut words: Vec<&str> = DELIMITER_REGEX.split(input).collect();
    while words.last().is_some_and(|word| word.is_empty()) {
        words.pop();
    }
    words
}

/// Uppercases the first character of a word, handling the rest according to the policy.
///
/// When the uppercase mapping of the first character expands into several
/// characters, only the first one is kept uppercase ("ß" -> "Ss").
///
/// # Arguments
/// * `word` - The word to capitalize
/// * `policy` - What to do with the remaining characters
///
/// # Returns
/// The capitalized word, or an empty string for an empty word
pub fn capitalize(word: &str, policy: CasePolicy) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str();
            let mut capitalized = String::with_capacity(word.len());
            let mut upper = first.to_uppercase();
            capitalized.extend(upper.next());
            capitalized.extend(upper.flat_map(char::to_lowercase));
            match policy {
                CasePolicy::Lower => capitalized.push_str(&rest.to_lowercase()),
                CasePolicy::Preserve => capitalized.push_str(rest),
            }
            capitalized
        }
        None => String::new(),
    }
}

/// Title-cases the input, lowercasing everything but the first letter of each word.
///
/// # Examples
///
/// ```
/// use titleize::string_utils::titleize;
///
/// assert_eq!(titleize("hello_world"), "Hello World");
/// assert_eq!(titleize("a_b-c d"), "A B C D");
/// assert_eq!(titleize("a__b"), "A B");
/// assert_eq!(titleize(""), "");
/// ```
pub fn titleize(input: &str) -> String {
    titleize_with(input, CasePolicy::default())
}

/// Title-cases the input using the given policy for the remainder of each word.
///
/// # Examples
///
/// ```
/// use titleize::string_utils::{titleize_with, CasePolicy};
///
/// assert_eq!(titleize_with("rust-API_docs", CasePolicy::Preserve), "Rust API Docs");
/// assert_eq!(titleize_with("rust-API_docs", CasePolicy::Lower), "Rust Api Docs");
/// ```
pub fn titleize_with(input: &str, policy: CasePolicy) -> String {
    split_words(input)
        .into_iter()
        .map(|word| capitalize(word, policy))
        .collect::<Vec<String>>()
        .join(WORD_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::titleize::DELIMITERS;

    #[test]
    fn test_titleize_single_word() {
        assert_eq!(titleize("hello"), "Hello");
    }

    #[test]
    fn test_titleize_empty() {
        assert_eq!(titleize(""), "");
    }

    #[test]
    fn test_titleize_only_delimiters() {
        assert_eq!(titleize("_- -_"), "");
    }

    #[test]
    fn test_titleize_keeps_leading_empty_word() {
        assert_eq!(titleize("_a"), " A");
        assert_eq!(titleize("__-a"), " A");
    }

    #[test]
    fn test_titleize_delimiter_equivalence() {
        assert_eq!(titleize("a_b-c d"), "A B C D");
        assert_eq!(titleize("a b c d"), "A B C D");
    }

    #[test]
    fn test_titleize_collapses_consecutive_delimiters() {
        assert_eq!(titleize("a__b"), "A B");
        assert_eq!(titleize("a _-_ b"), "A B");
        assert_eq!(titleize("a  b"), "A B");
    }

    #[test]
    fn test_titleize_edge_delimiters() {
        assert_eq!(titleize("_a-"), " A");
        assert_eq!(titleize(" hello world "), " Hello World");
        assert_eq!(titleize("trailing_only__"), "Trailing Only");
    }

    #[test]
    fn test_titleize_lowercases_remainder() {
        assert_eq!(titleize("hELLO wORLD"), "Hello World");
        assert_eq!(titleize("SCREAMING_SNAKE_CASE"), "Screaming Snake Case");
    }

    #[test]
    fn test_titleize_preserve_policy() {
        assert_eq!(
            titleize_with("hELLO wORLD", CasePolicy::Preserve),
            "HELLO WORLD"
        );
        assert_eq!(
            titleize_with("getting-started_with_HTML", CasePolicy::Preserve),
            "Getting Started With HTML"
        );
    }

    #[test]
    fn test_titleize_is_idempotent() {
        let samples = [
            "hello world",
            "blog_post-archive",
            "  mixed__CASE-input ",
            "already Title Cased",
        ];
        for sample in samples {
            let once = titleize(sample);
            assert_eq!(titleize(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_titleize_words_start_uppercase() {
        let output = titleize("the quick brown fox jumps over the lazy dog");
        assert_eq!(output.split(' ').count(), 9);
        assert!(output
            .split(' ')
            .all(|word| word.chars().next().is_some_and(char::is_uppercase)));
    }

    #[test]
    fn test_titleize_output_has_no_delimiters() {
        let output = titleize("__release-notes__for - v2_ ");
        assert!(!output.contains(&DELIMITERS[..2]));
        assert!(!output.contains("  "));
        assert!(!output.ends_with(' '));
        assert_eq!(output, " Release Notes For V2");
    }

    #[test]
    fn test_titleize_keeps_other_characters() {
        assert_eq!(titleize("2024_recap"), "2024 Recap");
        assert_eq!(titleize("c++.and.rust"), "C++.and.rust");
        assert_eq!(titleize("tabs\tare\tnot_delimiters"), "Tabs\tare\tnot Delimiters");
    }

    #[test]
    fn test_titleize_unicode() {
        assert_eq!(titleize("élan_vital"), "Élan Vital");
        assert_eq!(titleize("ÅNGSTRÖM-unit"), "Ångström Unit");
        assert_eq!(titleize("straße"), "Straße");
    }

    #[test]
    fn test_capitalize_expanding_first_letter() {
        assert_eq!(titleize("ßig"), "Ssig");
        assert_eq!(capitalize("ßIG", CasePolicy::Preserve), "SsIG");
        assert_eq!(capitalize("ﬁne", CasePolicy::Lower), "Fine");
    }

    #[test]
    fn test_capitalize_empty_word() {
        assert_eq!(capitalize("", CasePolicy::Lower), "");
        assert_eq!(capitalize("", CasePolicy::Preserve), "");
    }

    #[test]
    fn test_split_words_segments() {
        assert_eq!(split_words("a__b"), vec!["a", "b"]);
        assert_eq!(split_words("-a-b-"), vec!["", "a", "b"]);
        assert!(split_words("").is_empty());
        assert_eq!(split_words("word"), vec!["word"]);
    }

    #[test]
    fn test_case_policy_display() {
        assert_eq!(CasePolicy::Lower.to_string(), "lower");
        assert_eq!(CasePolicy::Preserve.to_string(), "preserve");
        assert_eq!(CasePolicy::default(), CasePolicy::Lower);
    }
}
