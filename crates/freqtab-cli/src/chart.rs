//! ASCII bar charts for ranked frequency entries.

use std::fmt::Display;
use std::fmt::Write;

use freqtab_core::RankedEntry;

const NO_DATA: &str = "No data to chart\n";

/// Render `entries` as a titled bar chart, one row per entry.
///
/// Bars are drawn with `#` and scaled so the largest count spans `width`
/// characters. Labels are left-aligned and padded to the widest label
/// (at least two characters).
pub fn render<K: Display>(title: &str, entries: &[RankedEntry<K>], width: usize) -> String {
    let Some(max) = entries.iter().map(|e| e.count).max() else {
        return NO_DATA.to_string();
    };

    let labels: Vec<String> = entries.iter().map(|e| e.token.to_string()).collect();
    let label_width = labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(2);

    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "-".repeat(title.chars().count()));

    for (label, entry) in labels.iter().zip(entries) {
        let bar = "#".repeat(bar_length(entry.count, max, width));
        let _ = writeln!(
            out,
            "{:<label_width$} | {} {}",
            label, bar, entry.count
        );
    }

    out
}

/// Bar length for `count`, scaled against `max`, rounded down.
fn bar_length(count: usize, max: usize, width: usize) -> usize {
    if max == 0 {
        return 0;
    }
    count * width / max
}
