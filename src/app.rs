// std imports
use std::io::{BufRead, Write};
use std::ops::AddAssign;

// third-party imports
use glob_expr::{GlobMatcher, GlobSet};

// local imports
use crate::error::{Error, Result};
use crate::input::InputReference;
use crate::settings::MatchMode;

// ---

/// Builds the pattern set, rejecting patterns longer than `max_length` characters.
pub fn build_glob_set<I>(patterns: I, max_length: Option<usize>) -> Result<GlobSet>
where
    I: IntoIterator,
    I::Item: Into<GlobMatcher>,
{
    let set = patterns
        .into_iter()
        .map(Into::into)
        .map(|glob: GlobMatcher| match max_length {
            Some(limit) if glob.pattern().chars().count() > limit => Err(Error::PatternTooLong {
                pattern: glob.pattern().into(),
                limit,
            }),
            _ => Ok(glob),
        })
        .collect::<Result<GlobSet>>()?;

    if set.is_empty() {
        return Err(Error::NoPatterns);
    }

    Ok(set)
}

// ---

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub globs: GlobSet,
    pub mode: MatchMode,
    pub invert: bool,
    pub count: bool,
    pub line_number: bool,
    pub with_filename: bool,
    pub show_pattern: bool,
    pub max_line_length: Option<usize>,
}

/// Line counters collected while processing inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub lines: u64,
    pub selected: u64,
    pub skipped: u64,
}

impl AddAssign for Stats {
    fn add_assign(&mut self, other: Self) {
        self.lines += other.lines;
        self.selected += other.selected;
        self.skipped += other.skipped;
    }
}

pub struct App {
    options: Options,
}

impl App {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn run(&self, inputs: &[InputReference], output: &mut dyn Write) -> Result<Stats> {
        let with_filename = self.options.with_filename || inputs.len() > 1;
        let mut total = Stats::default();

        for input in inputs {
            let name = input.description();
            let stats = self.process(&name, input.open()?, with_filename, output)?;
            log::debug!("{}: {:?}", name, stats);
            total += stats;
        }

        Ok(total)
    }

    /// Filters lines of a single input and writes the selected ones,
    /// or only their number in count mode.
    pub fn process(
        &self,
        name: &str,
        mut input: impl BufRead,
        with_filename: bool,
        output: &mut dyn Write,
    ) -> Result<Stats> {
        let mut stats = Stats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            stats.lines += 1;

            let line = String::from_utf8_lossy(trim_eol(&buf));

            if let Some(limit) = self.options.max_line_length {
                if line.chars().count() > limit {
                    log::warn!("{}:{}: line is longer than {} characters, skipped", name, stats.lines, limit);
                    stats.skipped += 1;
                    continue;
                }
            }

            let Some(selection) = self.select(&line) else {
                continue;
            };
            stats.selected += 1;

            if self.options.count {
                continue;
            }

            if with_filename {
                write!(output, "{}:", name)?;
            }
            if self.options.line_number {
                write!(output, "{}:", stats.lines)?;
            }
            if self.options.show_pattern {
                if let Some(glob) = selection.glob {
                    write!(output, "{}:", glob)?;
                }
            }
            writeln!(output, "{}", line)?;
        }

        if self.options.count {
            if with_filename {
                write!(output, "{}:", name)?;
            }
            writeln!(output, "{}", stats.selected)?;
        }

        Ok(stats)
    }

    fn select(&self, line: &str) -> Option<Selection<'_>> {
        let globs = &self.options.globs;
        let (matched, glob) = match self.options.mode {
            MatchMode::Any => {
                let glob = globs.first_match(line);
                (glob.is_some(), glob)
            }
            MatchMode::All => (globs.all_match(line), globs.iter().next()),
        };

        if matched == self.options.invert {
            return None;
        }

        Some(Selection {
            glob: glob.filter(|_| !self.options.invert),
        })
    }
}

// ---

struct Selection<'a> {
    glob: Option<&'a GlobMatcher>,
}

fn trim_eol(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
