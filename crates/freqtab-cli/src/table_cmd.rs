//! `letters` and `words`: a single frequency table each.

use std::fmt::Display;

use freqtab_core::{tabulate_letters, tabulate_words};
use tracing::debug;

use crate::chart;
use crate::cli::{ChartArgs, LettersArgs, WordsArgs};
use crate::error::CliResult;
use crate::output::{OutputFormat, emit};
use crate::shared::{TableOutput, parse_word_rule, read_input, table_output};

pub fn run_letters(args: LettersArgs, output_format: OutputFormat) -> CliResult<()> {
    let text = read_input(&args.input)?;

    let letters = tabulate_letters(&text);
    debug!(total = letters.total(), unique = letters.len(), "Tabulated letters");

    let table = table_output(&letters, args.top);
    emit(output_format, &table, |table| {
        print_table("letter", "letters", table, args.top, &args.chart)
    })
}

pub fn run_words(args: WordsArgs, output_format: OutputFormat) -> CliResult<()> {
    let rule = parse_word_rule(&args.rule)?;
    let text = read_input(&args.input)?;

    let words = tabulate_words(&text, rule);
    debug!(%rule, total = words.total(), unique = words.len(), "Tabulated words");

    let table = table_output(&words, args.top);
    emit(output_format, &table, |table| {
        print_table("word", "words", table, args.top, &args.chart)
    })
}

fn print_table<K: Display>(
    singular: &str,
    plural: &str,
    table: &TableOutput<K>,
    top: Option<usize>,
    chart: &ChartArgs,
) {
    println!("Total {}: {}", plural, table.total);
    println!("Unique {}: {}", plural, table.unique);
    println!();

    match top {
        Some(n) => {
            println!("Top {} {}:", n, plural);
            for (i, entry) in table.entries.iter().enumerate() {
                println!("{}. '{}': {} times", i + 1, entry.token, entry.count);
            }
        }
        None => {
            let mut heading = singular.to_string();
            heading[..1].make_ascii_uppercase();
            println!("{} frequencies:", heading);
            for entry in &table.entries {
                println!("  '{}': {}", entry.token, entry.count);
            }
        }
    }

    if chart.chart {
        let title = format!("{} FREQUENCY CHART", singular.to_uppercase());
        println!();
        print!(
            "{}",
            chart::render(&title, &table.entries, usize::from(chart.width))
        );
    }
}
