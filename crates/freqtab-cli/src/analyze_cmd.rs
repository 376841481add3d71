use std::fmt::Display;

use freqtab_core::{AnalyzeOptions, FrequencyStats, RankedEntry, TextReport, analyze};
use tracing::debug;

use crate::chart;
use crate::cli::AnalyzeArgs;
use crate::error::CliResult;
use crate::output::{OutputFormat, emit};
use crate::shared::{parse_word_rule, read_input};

const RULE: &str = "==================================================";

pub fn run_analyze(args: AnalyzeArgs, output_format: OutputFormat) -> CliResult<()> {
    let options = AnalyzeOptions {
        word_rule: parse_word_rule(&args.rule)?,
        top: args.top,
    };
    let text = read_input(&args.input)?;

    let report = analyze(&text, options);
    debug!(
        letters = report.letter_count,
        words = report.word_count,
        rule = %report.word_rule,
        "Analyzed text"
    );

    emit(output_format, &report, |report| {
        print_summary(report);
        print_ranking("letters", &report.top_letters, args.top);
        print_ranking("words", &report.top_words, args.top);

        if args.chart.chart {
            let width = usize::from(args.chart.width);
            println!();
            print!(
                "{}",
                chart::render("LETTER FREQUENCY CHART", &report.top_letters, width)
            );
            println!();
            print!(
                "{}",
                chart::render("WORD FREQUENCY CHART", &report.top_words, width)
            );
        }
    })
}

fn print_summary(report: &TextReport) {
    println!("TEXT ANALYSIS SUMMARY");
    println!("{}", RULE);
    println!("Total characters: {}", report.text_length);
    println!("Total words: {}", report.word_count);
    println!("Total letters: {}", report.letter_count);
    println!("Unique letters: {}", report.unique_letters);
    println!("Unique words: {}", report.unique_words);
    print_most_common("letter", report.letter_statistics.as_ref());
    print_most_common("word", report.word_statistics.as_ref());
    println!("{}", RULE);
}

fn print_most_common<K: Display>(what: &str, stats: Option<&FrequencyStats<K>>) {
    match stats {
        Some(stats) => {
            println!(
                "Most common {}: '{}' (appears {} times)",
                what, stats.most_common.token, stats.most_common.count
            );
            println!(
                "  mean {:.2}, median {:.1}, std dev {:.2}, range {}..={}",
                stats.mean, stats.median, stats.std_dev, stats.min_freq, stats.max_freq
            );
        }
        None => println!("Most common {}: (none)", what),
    }
}

fn print_ranking<K: Display>(what: &str, entries: &[RankedEntry<K>], top: usize) {
    println!();
    println!("Top {} {}:", top, what);
    if entries.is_empty() {
        println!("  (none)");
    }
    for (i, entry) in entries.iter().enumerate() {
        println!("{}. '{}': {} times", i + 1, entry.token, entry.count);
    }
}
