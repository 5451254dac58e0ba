// std imports
use std::fs::File;
use std::io::{self, BufRead, BufReader, stdin};
use std::path::PathBuf;

// local imports
use crate::error::{Error, Result};

// ---

pub type InputStream = Box<dyn BufRead + Send>;

/// Identifies a source of input lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputReference {
    Stdin,
    File(PathBuf),
}

impl InputReference {
    /// Interprets a command line path, `-` stands for standard input.
    pub fn from_arg(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }

    pub fn open(&self) -> Result<InputStream> {
        match self {
            Self::Stdin => Ok(Box::new(BufReader::new(stdin()))),
            Self::File(path) => {
                log::debug!("opening {}", path.display());
                let file = File::open(path).map_err(|err| match err.kind() {
                    io::ErrorKind::NotFound => Error::FileNotFound {
                        filename: path.display().to_string(),
                    },
                    _ => Error::Io(err),
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    pub fn description(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".into(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
