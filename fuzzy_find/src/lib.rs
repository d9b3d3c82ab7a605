//! This crate ranks a list of candidate strings by how well a short query matches each of them as
//! a fuzzy subsequence: the query characters have to appear in the candidate, in order, but not
//! necessarily next to each other.
//!
//! The scoring mimics the usual "fuzzy finder" behaviour found in editors and launchers. Matches
//! score higher when they start early in the candidate, when matched characters are adjacent, and
//! when they land on word boundaries (after a separator, or on a camel case hump). Unmatched
//! characters cost a little, so shorter candidates win ties.
//!
//! The crate provides one trait and two functions:
//!
//! - a [`Source`] is an indexed collection of candidate strings.
//! - [`find`](find::find) returns the [`Match`]es for a [`Pattern`], best first.
//! - [`find_no_sort`](find::find_no_sort) returns the same matches in source order.
//!
//! ```rust
//! use fuzzy_find::Pattern;
//! use fuzzy_find::find::find;
//!
//! let names = vec!["alpha", "beta", "gamma"];
//! let pattern = Pattern::new("ga").expect("query is not empty");
//! let matches = find(&pattern, &names);
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].index, 2);
//! ```

pub mod find;
pub mod pattern;

pub use pattern::Pattern;

/// An indexed collection of candidate strings.
///
/// Matches refer back to candidates by their position in the source, so callers can keep the
/// data they actually care about next to the string that is matched.
pub trait Source {
    /// The candidate string at index `i`.
    fn string(&self, i: usize) -> &str;

    /// The number of candidates.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: AsRef<str>> Source for [S] {
    fn string(&self, i: usize) -> &str {
        self[i].as_ref()
    }

    fn len(&self) -> usize {
        <[S]>::len(self)
    }
}

impl<S: AsRef<str>> Source for Vec<S> {
    fn string(&self, i: usize) -> &str {
        self[i].as_ref()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

/// A candidate that contains every character of the [`Pattern`].
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Match {
    /// The index of the candidate in its [`Source`].
    pub index: usize,

    /// Higher is better. Scores are only meaningful relative to other matches of the same pattern.
    pub score: isize,

    /// The character (not byte) positions in the candidate that matched each pattern character.
    pub matched_indexes: Vec<usize>,
}
