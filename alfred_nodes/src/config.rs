//! Loads and validates the node config.
//!
//! The config is a JSON object of the form:
//!
//! ```json
//! { "nodes": [ { "name": "...", "conf": { "valid": true, "title": "...", "subtitle": "...", "arg": "...", "autocomplete": "..." } } ] }
//! ```
//!
//! Decoding is lenient: unknown keys are ignored and missing keys take their zero value.

use crate::error::Error;
use fuzzy_find::Source;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::debug;

/// A single Alfred result. We never look inside it, just pass it through.
#[derive(Serialize, Deserialize, Default, Eq, PartialEq, Clone, Debug)]
#[serde(default)]
pub struct Item {
    pub valid: bool,
    pub title: String,
    pub subtitle: String,
    pub arg: String,
    pub autocomplete: String,
}

/// A named entry in the config. The name is what queries match against.
#[derive(Deserialize, Default, Eq, PartialEq, Clone, Debug)]
#[serde(default)]
pub struct Node {
    pub name: String,
    pub conf: Item,
}

#[derive(Deserialize, Default, Eq, PartialEq, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub nodes: Vec<Node>,
}

impl Config {
    /// Read and decode the config at `path`.
    ///
    /// Failing to open or read the file is an [`Error::InvalidConfigFile`], whatever the reason.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .map_err(|source| Error::InvalidConfigFile { path: path.to_path_buf(), source })?;
        let config = Self::parse(&contents)
            .map_err(|source| Error::MalformedConfig { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), nodes = config.nodes.len(), "decoded config");
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Check node names are unique, returning the config untouched if they are.
    pub fn validated(self) -> Result<Self, Error> {
        match first_duplicate(&self.nodes) {
            Some(name) => Err(Error::DuplicatedNode { name: name.to_string() }),
            None => Ok(self),
        }
    }
}

/// The name of the first node whose name was already used by an earlier node.
pub fn first_duplicate(nodes: &[Node]) -> Option<&str> {
    let mut seen = HashSet::new();
    nodes.iter().map(|node| node.name.as_str()).find(|name| !seen.insert(*name))
}

impl Source for Config {
    fn string(&self, i: usize) -> &str {
        &self.nodes[i].name
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
pub mod test_nodes {
    use super::*;

    pub fn node(name: &str) -> Node {
        Node {
            name: name.to_string(),
            conf: Item {
                valid: true,
                title: format!("{} title", name),
                subtitle: format!("{} subtitle", name),
                arg: name.to_string(),
                autocomplete: name.to_string(),
            },
        }
    }

    pub fn config(names: &[&str]) -> Config {
        Config { nodes: names.iter().map(|name| node(name)).collect() }
    }
}
