// std imports
use std::env;
use std::path::PathBuf;

// local imports
use crate::error::Result;
use crate::settings::{Settings, Source, SourceFile};

// ---

pub const APP_NAME: &str = "globgrep";
pub const CONFIG_FILE_NAME: &str = "config.yaml";
pub const CONFIG_ENV_VAR: &str = "GLOBGREP_CONFIG";

/// Starts building a settings loader that layers the given configuration files
/// on top of the embedded defaults and the user configuration file.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    Loader::new(paths.into_iter().map(|path| path.into()).collect())
}

/// Returns the location of the user configuration file.
///
/// [`CONFIG_ENV_VAR`] takes priority over the platform configuration directory.
pub fn default_config_path() -> Option<PathBuf> {
    match env::var_os(CONFIG_ENV_VAR) {
        Some(path) if !path.is_empty() => Some(path.into()),
        _ => dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME)),
    }
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            no_default: false,
        }
    }

    /// Skips the user configuration file, keeping only embedded defaults and explicit files.
    pub fn no_default(self, no_default: bool) -> Self {
        Self { no_default, ..self }
    }

    pub fn load(self) -> Result<Settings> {
        let mut sources = Vec::<Source>::with_capacity(self.paths.len() + 1);

        if !self.no_default {
            if let Some(path) = default_config_path() {
                sources.push(SourceFile::new(path).required(false).into());
            } else {
                log::debug!("configuration directory is not available");
            }
        }

        sources.extend(self.paths.into_iter().map(|path| Source::from(SourceFile::new(path))));

        Settings::load(sources)
    }
}
