//! The query side of a match.

use nonempty::NonEmpty;

/// A case folded, non-empty query.
///
/// An empty query would match everything equally well, so we refuse to build one and let callers
/// decide what "no query" means for them.
#[derive(Eq, PartialEq, Clone, Debug)]
pub struct Pattern {
    chars: NonEmpty<char>,
}

impl Pattern {
    pub fn new(query: &str) -> Option<Self> {
        NonEmpty::from_vec(query.chars().map(fold).collect()).map(|chars| Pattern { chars })
    }

    pub fn get(&self, i: usize) -> Option<char> {
        self.chars.get(i).copied()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: a pattern has at least one character.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Case folding used on both sides of a comparison.
///
/// Characters whose lowercase form is several characters long fold to the first of them.
pub fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn empty_query_has_no_pattern() {
        assert_eq!(None, Pattern::new(""));
    }

    #[test_case("a", vec!['a'] ; "single")]
    #[test_case("Ab", vec!['a', 'b'] ; "ascii upper")]
    #[test_case("ÉTÉ", vec!['é', 't', 'é'] ; "unicode upper")]
    #[test_case("a b", vec!['a', ' ', 'b'] ; "keeps spaces")]
    fn folds_query(query: &str, expected: Vec<char>) {
        let pattern = Pattern::new(query).expect("Cannot build pattern");
        let actual: Vec<char> = (0..pattern.len()).filter_map(|i| pattern.get(i)).collect();
        assert_eq!(expected, actual);
        assert!(!pattern.is_empty());
    }
}
