//! The JSON Alfred reads from our stdout.

use crate::config::{Item, Node};
use crate::error::Error;
use serde::Serialize;

/// The script filter response: a list of results, `{"items": [...]}`.
#[derive(Serialize, Default, Eq, PartialEq, Clone, Debug)]
pub struct Items {
    pub items: Vec<Item>,
}

impl Items {
    pub fn from_nodes<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> Self {
        Items { items: nodes.into_iter().map(|node| node.conf.clone()).collect() }
    }

    /// A single result showing `message`.
    ///
    /// Alfred only ever reads stdout, so errors are reported as a normal, selectable result.
    pub fn error(message: &str) -> Self {
        let item = Item {
            valid: true,
            title: message.to_string(),
            autocomplete: message.to_string(),
            ..Item::default()
        };
        Items { items: vec![item] }
    }

    /// Compact JSON, on a single line.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }
}
