//! Ranking of frequency maps.
//!
//! Ranked order is count descending, then token ascending. The tie-break
//! makes the order total, so equal inputs always rank identically no
//! matter how the underlying hash map iterates.

use std::cmp::Ordering;
use std::hash::Hash;

use crate::models::{FrequencyMap, RankedEntry};

/// Ordering of two `(token, count)` pairs in ranked order.
fn rank_order<K: Ord>(a: (&K, usize), b: (&K, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

/// Return at most `n` entries of `map` in ranked order.
///
/// `n == 0` yields an empty list; an `n` larger than the map yields every
/// entry.
///
/// # Examples
///
/// ```
/// use freqtab_core::rank::top_n;
/// use freqtab_core::tabulate::tabulate_words_default;
///
/// let words = tabulate_words_default("aa bb aa");
/// let top = top_n(&words, 1);
/// assert_eq!(top.len(), 1);
/// assert_eq!(top[0].token, "aa");
/// assert_eq!(top[0].count, 2);
/// ```
pub fn top_n<K>(map: &FrequencyMap<K>, n: usize) -> Vec<RankedEntry<K>>
where
    K: Eq + Hash + Ord + Clone,
{
    if n == 0 {
        return Vec::new();
    }

    let mut entries: Vec<(&K, usize)> = map.iter().collect();
    entries.sort_unstable_by(|a, b| rank_order(*a, *b));
    entries.truncate(n);

    entries
        .into_iter()
        .map(|(token, count)| RankedEntry::new(token.clone(), count))
        .collect()
}

/// Every entry of `map` in ranked order.
pub fn ranked<K>(map: &FrequencyMap<K>) -> Vec<RankedEntry<K>>
where
    K: Eq + Hash + Ord + Clone,
{
    top_n(map, map.len())
}

/// The single top-ranked entry, or `None` when `map` is empty.
///
/// Uses the same ordering as [`top_n`], so for a non-empty map the result
/// equals `top_n(map, 1)[0]`.
pub fn most_common<K>(map: &FrequencyMap<K>) -> Option<RankedEntry<K>>
where
    K: Eq + Hash + Ord + Clone,
{
    map.iter()
        .min_by(|a, b| rank_order(*a, *b))
        .map(|(token, count)| RankedEntry::new(token.clone(), count))
}
