//! Letter and word tabulation.
//!
//! Both tabulators lowercase the text first, then count tokens into a
//! fresh [`FrequencyMap`]. Nothing is cached between calls.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{FrequencyMap, WordRule};

/// Word pattern for [`WordRule::Boundary`]: runs of word characters
/// between word boundaries.
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("valid regex"));

/// Count every alphabetic character of `text` after lowercasing.
///
/// Digits, punctuation and whitespace are ignored. The "is a letter" test
/// is [`char::is_alphabetic`], so it does not depend on the locale.
///
/// # Examples
///
/// ```
/// use freqtab_core::tabulate::tabulate_letters;
///
/// let letters = tabulate_letters("Hello, World!");
/// assert_eq!(letters.get(&'l'), 3);
/// assert_eq!(letters.get(&'o'), 2);
/// assert_eq!(letters.total(), 10);
/// ```
pub fn tabulate_letters(text: &str) -> FrequencyMap<char> {
    // Whole-string lowercasing is context sensitive (final sigma), and
    // matches the words produced by `tabulate_words`.
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect()
}

/// Count the words of `text` after lowercasing, split according to `rule`.
///
/// # Examples
///
/// ```
/// use freqtab_core::models::WordRule;
/// use freqtab_core::tabulate::tabulate_words;
///
/// let words = tabulate_words("The dog. The dog", WordRule::Whitespace);
/// assert_eq!(words.get("dog."), 1);
/// assert_eq!(words.get("dog"), 1);
///
/// let words = tabulate_words("The dog. The dog", WordRule::Boundary);
/// assert_eq!(words.get("dog"), 2);
/// ```
pub fn tabulate_words(text: &str, rule: WordRule) -> FrequencyMap<String> {
    let lower = text.to_lowercase();

    match rule {
        WordRule::Whitespace => lower.split_whitespace().map(str::to_string).collect(),
        WordRule::Boundary => WORD_RE
            .find_iter(&lower)
            .map(|m| m.as_str().to_string())
            .collect(),
    }
}

/// [`tabulate_words`] with the default [`WordRule::Whitespace`].
pub fn tabulate_words_default(text: &str) -> FrequencyMap<String> {
    tabulate_words(text, WordRule::default())
}

/// Number of whitespace-delimited tokens in `text`.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
