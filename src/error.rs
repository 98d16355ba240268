// Error kinds for the word cloud pipeline.
//
// Configuration errors are fatal and stop a tracker from being built.
// Ignore-list errors are recovered by the loader. Input and output errors
// end a run; a broken output pipe is treated as a clean exit by the binary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Invalid construction parameters for a tracker or update schedule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cloud size must be greater than zero")]
    ZeroCloudSize,
    #[error("window size must be greater than zero")]
    ZeroWindowSize,
    #[error("minimum frequency must be at least 1")]
    ZeroMinFrequency,
    #[error("update frequency must be greater than zero")]
    ZeroUpdateFrequency,
}

/// The ignore list could not be read.
#[derive(Debug, Error)]
#[error("failed to read ignore list {}: {source}", .path.display())]
pub struct IgnoreListError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Failures that end a pipeline run.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl Error {
    /// True when the downstream consumer went away (e.g. `| head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Error::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
