// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;

// local imports
use crate::settings::MatchMode;

// ---

/// Prints lines matching glob patterns.
///
/// Patterns support `*` (any sequence of characters), `?` (any single character)
/// and `\*`, `\?` for literal wildcard characters. A pattern must match the whole line.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Opt {
    /// Glob patterns to match lines against.
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Additional pattern, may be repeated, useful for patterns starting with '-'.
    #[arg(short = 'e', long = "pattern", value_name = "PATTERN", allow_hyphen_values = true)]
    pub extra_patterns: Vec<String>,

    /// Input file, may be repeated, '-' stands for standard input [default: -].
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// How multiple patterns are combined [default: from configuration].
    #[arg(long, value_enum, env = "GLOBGREP_MODE", overrides_with = "mode")]
    pub mode: Option<MatchMode>,

    /// Select lines that do not match.
    #[arg(short = 'v', long)]
    pub invert_match: bool,

    /// Print only the number of selected lines per input.
    #[arg(short, long)]
    pub count: bool,

    /// Prefix each line with its line number.
    #[arg(short = 'n', long)]
    pub line_number: bool,

    /// Prefix each line with the input name, implied for multiple inputs.
    #[arg(short = 'H', long)]
    pub with_filename: bool,

    /// Prefix each line with the first pattern that matched it.
    #[arg(long)]
    pub show_pattern: bool,

    /// Skip lines longer than this number of characters [default: from configuration].
    #[arg(long, env = "GLOBGREP_MAX_LINE_LENGTH", overrides_with = "max_line_length")]
    pub max_line_length: Option<usize>,

    /// Configuration file path, may be repeated.
    ///
    /// An empty value or '-' discards the default configuration file and all configuration files given before it.
    #[arg(long, value_name = "FILE")]
    pub config: Vec<String>,
}

impl Opt {
    /// Returns the configuration files that remain after the last reset marker
    /// and whether the default configuration file is to be skipped.
    pub fn config_files(&self) -> (&[String], bool) {
        let (offset, no_default) = self
            .config
            .iter()
            .rposition(|x| x.is_empty() || x == "-")
            .map(|x| (x + 1, true))
            .unwrap_or_default();

        (&self.config[offset..], no_default)
    }

    /// Returns all patterns given on the command line, positional ones first.
    pub fn all_patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().chain(&self.extra_patterns).map(String::as_str)
    }
}

#[cfg(test)]
mod tests;
