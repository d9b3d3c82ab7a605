//! Narrows the config's nodes down to the ones matching a query.

use crate::config::{Config, Node};
use fuzzy_find::Pattern;
use fuzzy_find::find::find;
use tracing::debug;

/// The nodes to show for `query`, in display order.
///
/// With no query, or an empty one, this is every node in config order. Otherwise it is the nodes
/// whose name fuzzy matches the query, best match first.
pub fn select<'a>(config: &'a Config, query: Option<&str>) -> Vec<&'a Node> {
    match query.and_then(Pattern::new) {
        None => config.nodes.iter().collect(),
        Some(pattern) => {
            let matches = find(&pattern, config);
            debug!(query, matched = matches.len(), of = config.nodes.len(), "matched nodes");
            matches.into_iter().map(|m| &config.nodes[m.index]).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_nodes::config;
    use test_case::test_case;

    #[test_case(None, vec!["alpha", "beta", "gamma"] ; "no query")]
    #[test_case(Some(""), vec!["alpha", "beta", "gamma"] ; "empty query")]
    #[test_case(Some("ga"), vec!["gamma"] ; "subsequence")]
    #[test_case(Some("a"), vec!["alpha", "gamma", "beta"] ; "ranked")]
    #[test_case(Some("zzz"), vec![] ; "nothing")]
    fn test_select(query: Option<&str>, expected: Vec<&str>) {
        let config = config(&["alpha", "beta", "gamma"]);
        let actual: Vec<&str> =
            select(&config, query).iter().map(|node| node.name.as_str()).collect();
        assert_eq!(expected, actual);
    }

    #[test]
    fn matches_name_only() {
        let mut config = config(&["zzz", "gamma"]);
        config.nodes[0].conf.title = "gamma".to_string();
        config.nodes[0].conf.subtitle = "gamma".to_string();
        config.nodes[0].conf.arg = "gamma".to_string();
        let actual: Vec<&str> =
            select(&config, Some("ga")).iter().map(|node| node.name.as_str()).collect();
        assert_eq!(vec!["gamma"], actual);
    }

    #[test]
    fn select_leaves_config_alone() {
        let original = config(&["beta", "alpha"]);
        let copy = original.clone();
        let _ = select(&copy, Some("a"));
        assert_eq!(original, copy);
    }
}
