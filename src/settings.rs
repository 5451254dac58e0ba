// std imports
use std::include_str;
use std::path::PathBuf;

// third-party imports
use clap::ValueEnum;
use config::{Config, File, FileFormat};
use glob_expr::GlobMatcher;
use serde::Deserialize;

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS_RAW: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    #[serde(default)]
    pub mode: MatchMode,
    #[serde(default)]
    pub patterns: Vec<GlobMatcher>,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub line_number: bool,
    #[serde(default)]
    pub limits: Limits,
}

impl Settings {
    /// Loads the embedded defaults and layers the given sources on top, in order.
    pub fn load(sources: impl IntoIterator<Item = Source>) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS_RAW, FileFormat::Yaml));

        for source in sources {
            builder = match source {
                Source::File(file) => {
                    log::debug!("adding configuration source {:?}", &file);
                    builder.add_source(File::from(file.filename).required(file.required))
                }
                Source::Str(content, format) => builder.add_source(File::from_str(&content, format)),
            };
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::load([]).unwrap()
    }
}

// ---

#[derive(Debug, Clone)]
pub enum Source {
    File(SourceFile),
    Str(String, FileFormat),
}

impl From<SourceFile> for Source {
    fn from(file: SourceFile) -> Self {
        Self::File(file)
    }
}

#[derive(Debug, Clone)]
pub struct SourceFile {
    pub filename: PathBuf,
    pub required: bool,
}

impl SourceFile {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            required: true,
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }
}

// ---

/// How a line is tested against several patterns.
#[derive(Debug, Deserialize, ValueEnum, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// A line is selected if any pattern matches it.
    #[default]
    Any,
    /// A line is selected only if all patterns match it.
    All,
}

// ---

/// Bounds that keep backtracking cost under control for untrusted input.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Limits {
    pub max_pattern_length: Option<usize>,
    pub max_line_length: Option<usize>,
}
