use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Letter and word frequency analysis tool
#[derive(Parser, Debug)]
#[command(name = "freqtab", version)]
#[command(about = "Letter and word frequency analysis tool")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output_format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count letters in a text
    Letters(LettersArgs),
    /// Count words in a text
    Words(WordsArgs),
    /// Full analysis: summary, statistics and rankings for letters and words
    Analyze(AnalyzeArgs),
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Input file path (use - for stdin)
    #[arg(default_value = "-")]
    pub input: String,

    /// Analyze this text instead of reading the input file
    #[arg(long, conflicts_with = "sample")]
    pub text: Option<String>,

    /// Analyze the built-in sample text
    #[arg(long)]
    pub sample: bool,
}

#[derive(clap::Args, Debug)]
pub struct ChartArgs {
    /// Print an ASCII bar chart
    #[arg(long)]
    pub chart: bool,

    /// Width in characters of the longest chart bar (1-1000)
    #[arg(
        long,
        default_value_t = 50,
        value_parser = clap::value_parser!(u16).range(1..=1000)
    )]
    pub width: u16,
}

#[derive(clap::Args, Debug)]
pub struct LettersArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Show only the N most common letters, in ranked order
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    #[command(flatten)]
    pub chart: ChartArgs,
}

#[derive(clap::Args, Debug)]
pub struct WordsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Word rule: whitespace, boundary
    #[arg(short = 'r', long, default_value = "whitespace")]
    pub rule: String,

    /// Show only the N most common words, in ranked order
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    #[command(flatten)]
    pub chart: ChartArgs,
}

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Word rule: whitespace, boundary
    #[arg(short = 'r', long, default_value = "whitespace")]
    pub rule: String,

    /// Length of the ranked letter and word lists
    #[arg(short = 'n', long, default_value_t = 10)]
    pub top: usize,

    #[command(flatten)]
    pub chart: ChartArgs,
}
