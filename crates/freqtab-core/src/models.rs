//! Core data types for freqtab.
//!
//! This module defines the primary types used throughout the library:
//! - [`FrequencyMap`] - Token to occurrence count mapping
//! - [`RankedEntry`] - A `(token, count)` pair in ranked order
//! - [`WordRule`] - How text is split into words
//! - [`FrequencyStats`] - Summary statistics over one map
//! - [`AnalyzeOptions`] - Knobs for a full text analysis
//! - [`TextReport`] - Complete result of a text analysis

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::{FreqTabError, Result};

/// Mapping from a token to the number of times it was seen.
///
/// Counts are always positive: a token that never occurred is simply
/// absent. The running total is kept alongside the counts so that
/// `total()` never has to walk the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyMap<K>
where
    K: Eq + Hash,
{
    counts: HashMap<K, usize>,
    total: usize,
}

impl<K> FrequencyMap<K>
where
    K: Eq + Hash,
{
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }

    /// Records one occurrence of `token` and returns its new count.
    pub fn insert(&mut self, token: K) -> usize {
        let count = self.counts.entry(token).or_insert(0);
        *count += 1;
        self.total += 1;
        *count
    }

    /// Count for `token`, or zero when it was never seen.
    pub fn get<Q>(&self, token: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Returns `true` if `token` was seen at least once.
    pub fn contains<Q>(&self, token: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.contains_key(token)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Iterates over `(token, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(token, count)| (token, *count))
    }

    /// All `(token, count)` pairs ordered by token ascending.
    pub fn sorted_by_token(&self) -> Vec<(&K, usize)>
    where
        K: Ord,
    {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<K> Default for FrequencyMap<K>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FromIterator<K> for FrequencyMap<K>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut map = Self::new();
        for token in iter {
            map.insert(token);
        }
        map
    }
}

// Serialized as an object with keys in ascending order so that JSON output
// is byte-for-byte reproducible.
impl<K> Serialize for FrequencyMap<K>
where
    K: Eq + Hash + Ord + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let entries = self.sorted_by_token();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (token, count) in entries {
            map.serialize_entry(token, &count)?;
        }
        map.end()
    }
}

/// A `(token, count)` pair taken from a ranked [`FrequencyMap`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RankedEntry<K> {
    pub token: K,
    pub count: usize,
}

impl<K> RankedEntry<K> {
    pub fn new(token: K, count: usize) -> Self {
        Self { token, count }
    }
}

/// Rule used to split text into words.
///
/// Both rules operate on the lowercased text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordRule {
    /// Split on runs of whitespace; punctuation stays attached ("dog." is
    /// its own word).
    #[default]
    Whitespace,
    /// Take every `\b\w+\b` match; surrounding punctuation is dropped.
    Boundary,
}

impl std::fmt::Display for WordRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordRule::Whitespace => write!(f, "whitespace"),
            WordRule::Boundary => write!(f, "boundary"),
        }
    }
}

impl FromStr for WordRule {
    type Err = FreqTabError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "whitespace" => Ok(WordRule::Whitespace),
            "boundary" => Ok(WordRule::Boundary),
            _ => Err(FreqTabError::ParseError(format!(
                "Unknown word rule: '{}'. Expected 'whitespace' or 'boundary'",
                s
            ))),
        }
    }
}

/// Summary statistics over the counts of a non-empty [`FrequencyMap`].
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FrequencyStats<K> {
    /// Sum of all counts.
    pub total_count: usize,
    /// Number of distinct tokens.
    pub unique_items: usize,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation of the counts.
    pub std_dev: f64,
    pub min_freq: usize,
    pub max_freq: usize,
    pub most_common: RankedEntry<K>,
}

/// Options for [`crate::analyze::analyze`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzeOptions {
    /// Word tokenization rule.
    pub word_rule: WordRule,
    /// Length bound of the ranked letter and word lists.
    pub top: usize,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            word_rule: WordRule::default(),
            top: 10,
        }
    }
}

/// Complete result of analyzing one text.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TextReport {
    /// Length of the input in characters.
    pub text_length: usize,
    /// Number of whitespace-delimited tokens, independent of the word rule.
    pub word_count: usize,
    /// Number of alphabetic characters.
    pub letter_count: usize,
    pub unique_letters: usize,
    pub unique_words: usize,
    pub word_rule: WordRule,
    pub letters: FrequencyMap<char>,
    pub words: FrequencyMap<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_statistics: Option<FrequencyStats<char>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_statistics: Option<FrequencyStats<String>>,
    pub top_letters: Vec<RankedEntry<char>>,
    pub top_words: Vec<RankedEntry<String>>,
}
