// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod settings;

// public uses
pub use app::{App, Options, Stats};
pub use glob_expr::{GlobMatcher, GlobSet};
pub use settings::{MatchMode, Settings};
