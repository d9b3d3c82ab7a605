//! An Alfred script filter over a fixed list of named nodes.
//!
//! Given a JSON config of nodes, we print the nodes' Alfred results as JSON, optionally fuzzy
//! filtered and ranked by a query. Whatever happens, stdout gets exactly one line of valid Alfred
//! JSON: errors are reported as a single result rather than through stderr or the exit code.

use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use tracing::{info, warn};

pub mod config;
pub mod error;
pub mod matcher;
pub mod output;

use config::Config;
use error::Error;
use output::Items;

#[derive(Parser, Default, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON file listing the nodes to choose from.
    pub config: Option<PathBuf>,

    /// Only show nodes whose name fuzzy matches QUERY, best match first. Taken verbatim, even if
    /// it looks like a flag.
    pub query: Option<String>,

    /// Log more detail to stderr. Repeat for even more.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parse a command line, taking the argument after CONFIG verbatim as the query.
    ///
    /// Flags are only recognised before CONFIG, so a query like `-v`, `--help` or `--` is still a
    /// query. Arguments after the query are ignored.
    pub fn try_parse_split<I, T>(raw: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let raw: Vec<OsString> = raw.into_iter().map(Into::into).collect();
        let Some(config_ix) = raw.iter().skip(1).position(|arg| !is_flag(arg)).map(|ix| ix + 1)
        else {
            return Self::try_parse_from(raw);
        };

        let mut args = Self::try_parse_from(&raw[..=config_ix])?;
        args.query = raw.get(config_ix + 1).map(|query| query.to_string_lossy().into_owned());
        Ok(args)
    }
}

fn is_flag(arg: &OsStr) -> bool {
    arg.len() > 1 && arg.to_string_lossy().starts_with('-')
}

/// Load the config named by `args` and pick the results to show.
pub fn run(args: &Args) -> Result<Items, Error> {
    let path = args.config.as_deref().ok_or(Error::InvalidArguments)?;
    let config = Config::load(path)?.validated()?;
    info!(path = %path.display(), nodes = config.nodes.len(), "loaded config");

    let selected = matcher::select(&config, args.query.as_deref());
    Ok(Items::from_nodes(selected))
}

/// Like [`run`], but turns errors into a result Alfred can show.
pub fn respond(args: &Args) -> Items {
    run(args).unwrap_or_else(|err| report(&err))
}

pub fn report(err: &Error) -> Items {
    warn!(error = ?err, "reporting error as a result");
    Items::error(&err.to_string())
}
