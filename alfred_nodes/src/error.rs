//! Provides the [`enum@Error`] type used by all alfred_nodes code.
//!
//! Every variant's message is shown to the user as the title of an Alfred result, so messages are
//! written for them rather than for a log file.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "usage: alfred_nodes <config filename> [query]";

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid arguments, {}", USAGE)]
    InvalidArguments,
    #[error("invalid config file {}", .path.display())]
    InvalidConfigFile { path: PathBuf, source: io::Error },
    #[error("invalid config content in {}: {source}", .path.display())]
    MalformedConfig { path: PathBuf, source: serde_json::Error },
    #[error("duplicated node {name}")]
    DuplicatedNode { name: String },
    #[error("could not write output: {0}")]
    Output(#[from] serde_json::Error),
}
