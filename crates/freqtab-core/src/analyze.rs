//! Full text analysis.
//!
//! Combines both tabulators, the ranked views and the summary statistics
//! into a single [`TextReport`] that front ends can render directly.

use crate::models::{AnalyzeOptions, TextReport};
use crate::rank::top_n;
use crate::stats::summarize;
use crate::tabulate::{count_words, tabulate_letters, tabulate_words};

/// Analyze `text` and build a [`TextReport`].
///
/// Empty text is not an error: the report then has empty maps, no
/// statistics and empty rankings.
///
/// # Examples
///
/// ```
/// use freqtab_core::analyze::analyze;
/// use freqtab_core::models::AnalyzeOptions;
///
/// let report = analyze("hello world", AnalyzeOptions::default());
/// assert_eq!(report.word_count, 2);
/// assert_eq!(report.letter_count, 10);
/// assert_eq!(report.top_letters[0].token, 'l');
/// ```
pub fn analyze(text: &str, options: AnalyzeOptions) -> TextReport {
    let letters = tabulate_letters(text);
    let words = tabulate_words(text, options.word_rule);

    TextReport {
        text_length: text.chars().count(),
        word_count: count_words(text),
        letter_count: letters.total(),
        unique_letters: letters.len(),
        unique_words: words.len(),
        word_rule: options.word_rule,
        letter_statistics: summarize(&letters),
        word_statistics: summarize(&words),
        top_letters: top_n(&letters, options.top),
        top_words: top_n(&words, options.top),
        letters,
        words,
    }
}
