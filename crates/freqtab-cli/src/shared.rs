use std::fs;
use std::hash::Hash;
use std::io::{self, IsTerminal, Read};

use freqtab_core::{FrequencyMap, RankedEntry, WordRule, require_text, text_from_bytes, top_n};
use serde::Serialize;
use tracing::debug;

use crate::cli::InputArgs;
use crate::error::{CliError, CliResult};

/// Text used by `--sample`.
pub const SAMPLE_TEXT: &str =
    "The quick brown fox jumps over the lazy dog. This is a sample text for demonstration.";

/// Resolve the text to analyze: `--text`, then `--sample`, then the input
/// file (or stdin for `-`).
///
/// Reading `-` from an interactive terminal counts as no text at all.
pub fn read_input(args: &InputArgs) -> CliResult<String> {
    let supplied = if let Some(text) = &args.text {
        debug!(chars = text.chars().count(), "Using inline text");
        Some(text.clone())
    } else if args.sample {
        debug!("Using sample text");
        Some(SAMPLE_TEXT.to_string())
    } else if args.input == "-" {
        if io::stdin().is_terminal() {
            None
        } else {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .map_err(CliError::ReadStdin)?;
            Some(decode(&buf, "<stdin>")?)
        }
    } else {
        let bytes = fs::read(&args.input).map_err(|source| CliError::OpenFile {
            path: args.input.clone(),
            source,
        })?;
        Some(decode(&bytes, &args.input)?)
    };

    Ok(require_text(supplied.as_deref())?.to_string())
}

fn decode(bytes: &[u8], input: &str) -> CliResult<String> {
    debug!(bytes = bytes.len(), input, "Read input");

    text_from_bytes(bytes)
        .map(str::to_string)
        .map_err(|source| CliError::Decode {
            input: input.to_string(),
            source,
        })
}

pub fn parse_word_rule(s: &str) -> CliResult<WordRule> {
    Ok(s.parse::<WordRule>()?)
}

/// Serialized form of a single frequency table.
#[derive(Debug, Serialize)]
pub struct TableOutput<K> {
    pub total: usize,
    pub unique: usize,
    pub entries: Vec<RankedEntry<K>>,
}

/// Entries of `map`: the `top` ranked ones when a bound is given,
/// otherwise all of them ordered by token.
pub fn table_output<K>(map: &FrequencyMap<K>, top: Option<usize>) -> TableOutput<K>
where
    K: Eq + Hash + Ord + Clone,
{
    let entries = match top {
        Some(n) => top_n(map, n),
        None => map
            .sorted_by_token()
            .into_iter()
            .map(|(token, count)| RankedEntry::new(token.clone(), count))
            .collect(),
    };

    TableOutput {
        total: map.total(),
        unique: map.len(),
        entries,
    }
}
