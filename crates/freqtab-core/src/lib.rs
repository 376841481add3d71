//! # freqtab-core
//!
//! A letter and word frequency tabulation library for Rust.
//!
//! This library counts how often each letter and each word occurs in a
//! text, ranks the results deterministically, and summarizes them. It
//! produces data only; rendering is left to the caller.
//!
//! ## Features
//!
//! - **Letter Tabulation**: Case-folded counts of alphabetic characters,
//!   independent of locale.
//! - **Word Tabulation**: Case-folded word counts with a selectable
//!   [`WordRule`] (whitespace split or word-boundary match).
//! - **Deterministic Ranking**: Count descending, ties broken by token
//!   ascending, with a bounded top-N view.
//! - **Summary Statistics**: Mean, median, spread and extremes of counts.
//!
//! ## Example
//!
//! ```rust
//! use freqtab_core::prelude::*;
//!
//! let letters = tabulate_letters("hello world");
//! let words = tabulate_words("aa bb aa", WordRule::Whitespace);
//!
//! assert_eq!(most_common(&letters), Some(RankedEntry::new('l', 3)));
//! assert_eq!(top_n(&words, 1), vec![RankedEntry::new("aa".to_string(), 2)]);
//! ```

pub mod analyze;
pub mod error;
pub mod input;
pub mod models;
pub mod rank;
pub mod stats;
pub mod tabulate;

// Re-export commonly used types at the crate root
pub use analyze::analyze;
pub use error::{FreqTabError, Result};
pub use input::{require_text, text_from_bytes};
pub use models::{
    AnalyzeOptions, FrequencyMap, FrequencyStats, RankedEntry, TextReport, WordRule,
};
pub use rank::{most_common, ranked, top_n};
pub use stats::summarize;
pub use tabulate::{tabulate_letters, tabulate_words, tabulate_words_default};

/// Prelude module for convenient imports.
///
/// ```
/// use freqtab_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::analyze::analyze;
    pub use crate::error::{FreqTabError, Result};
    pub use crate::input::{require_text, text_from_bytes};
    pub use crate::models::*;
    pub use crate::rank::{most_common, ranked, top_n};
    pub use crate::stats::summarize;
    pub use crate::tabulate::{tabulate_letters, tabulate_words, tabulate_words_default};
}
