//! Request loading for the nthbuyer CLI.

use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the request text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RequestSource {
    /// JSON given inline on the command line.
    Inline(String),
    /// JSON read from stdin.
    Stdin,
    /// JSON read from a file.
    File(PathBuf),
}

impl RequestSource {
    /// Picks the source from the mutually exclusive input flags.
    pub(crate) fn from_args(json: Option<String>, file: Option<PathBuf>) -> Result<Self> {
        match (json, file) {
            (Some(json), _) => Ok(Self::Inline(json)),
            (None, Some(path)) if path.as_os_str() == "-" => Ok(Self::Stdin),
            (None, Some(path)) => Ok(Self::File(path)),
            (None, None) => bail!("No request given; pass --input-json or --input-file"),
        }
    }

    /// Reads the request text.
    pub(crate) fn read(self) -> Result<String> {
        let label = self.to_string();
        let text = match self {
            Self::Inline(json) => json,
            Self::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read request from stdin")?;
                text
            }
            Self::File(path) => read_file(&path)?,
        };

        debug!(source = %label, bytes = text.len(), "Request loaded");
        Ok(text)
    }
}

impl std::fmt::Display for RequestSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inline(_) => write!(f, "inline"),
            Self::Stdin => write!(f, "stdin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))
}
