//! Summary statistics over the counts of a frequency map.

use std::hash::Hash;

use crate::models::{FrequencyMap, FrequencyStats};
use crate::rank::most_common;

/// Summarize the counts of `map`.
///
/// Returns `None` for an empty map, since none of the measures are defined
/// without data. The standard deviation is the population one.
///
/// # Examples
///
/// ```
/// use freqtab_core::stats::summarize;
/// use freqtab_core::tabulate::tabulate_letters;
///
/// let stats = summarize(&tabulate_letters("aab")).unwrap();
/// assert_eq!(stats.total_count, 3);
/// assert_eq!(stats.unique_items, 2);
/// assert_eq!(stats.mean, 1.5);
/// assert_eq!(stats.most_common.token, 'a');
/// ```
pub fn summarize<K>(map: &FrequencyMap<K>) -> Option<FrequencyStats<K>>
where
    K: Eq + Hash + Ord + Clone,
{
    let most_common = most_common(map)?;

    let mut counts: Vec<usize> = map.iter().map(|(_, count)| count).collect();
    counts.sort_unstable();

    let n = counts.len() as f64;
    let total = map.total();
    let mean = total as f64 / n;
    let variance = counts
        .iter()
        .map(|&c| {
            let d = c as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    Some(FrequencyStats {
        total_count: total,
        unique_items: counts.len(),
        mean,
        median: median(&counts),
        std_dev: variance.sqrt(),
        min_freq: counts[0],
        max_freq: counts[counts.len() - 1],
        most_common,
    })
}

/// Median of a sorted, non-empty slice.
fn median(sorted: &[usize]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) as f64 / 2.0
    } else {
        sorted[mid] as f64
    }
}
