//! Scores candidates against a [`Pattern`].
//!
//! We walk each candidate once. For the current pattern character we score every occurrence we see
//! and remember the best one, then commit it as soon as the next pattern character could start
//! (the candidate's next character is the next pattern character) or the candidate runs out. So
//! for the pattern `tk` and the candidate `The Black Knight`, we skip the `k` in `Black` in favour
//! of the `K` starting a word.
//!
//! A candidate only matches if every pattern character gets committed, which happens exactly when
//! the pattern is a subsequence of the candidate.

use crate::{Match, Pattern, Source};
use crate::pattern::fold;

pub const FIRST_CHAR_MATCH_BONUS: isize = 10;
pub const MATCH_FOLLOWING_SEPARATOR_BONUS: isize = 20;
pub const CAMEL_CASE_MATCH_BONUS: isize = 20;
pub const ADJACENT_MATCH_BONUS: isize = 5;
pub const UNMATCHED_LEADING_CHAR_PENALTY: isize = -5;
pub const MAX_UNMATCHED_LEADING_CHAR_PENALTY: isize = -15;

const SEPARATORS: [char; 6] = ['/', '-', '_', ' ', '.', '\\'];

/// Find all candidates matching `pattern`, best match first.
///
/// Candidates with equal scores keep their order from `source`.
pub fn find<S: Source + ?Sized>(pattern: &Pattern, source: &S) -> Vec<Match> {
    let mut matches = find_no_sort(pattern, source);
    matches.sort_by(|a, b| b.score.cmp(&a.score));
    matches
}

/// Find all candidates matching `pattern`, in the order they appear in `source`.
pub fn find_no_sort<S: Source + ?Sized>(pattern: &Pattern, source: &S) -> Vec<Match> {
    (0..source.len())
        .filter_map(|index| {
            Walk::new(pattern)
                .run(source.string(index))
                .map(|(score, matched_indexes)| Match { index, score, matched_indexes })
        })
        .collect()
}

/// The state of a single pass over one candidate.
struct Walk<'a> {
    pattern: &'a Pattern,
    /// Index of the pattern character we are looking for.
    patt_ix: usize,
    /// Score and position of the best occurrence of the current pattern character so far.
    best: Option<(isize, usize)>,
    /// Running bonus for runs of adjacent matches. Each adjacent match is worth more than the last.
    adjacent_bonus: isize,
    score: isize,
    matched: Vec<usize>,
}

impl<'a> Walk<'a> {
    fn new(pattern: &'a Pattern) -> Self {
        Walk {
            pattern,
            patt_ix: 0,
            best: None,
            adjacent_bonus: 0,
            score: 0,
            matched: Vec::with_capacity(pattern.len()),
        }
    }

    fn run(mut self, candidate: &str) -> Option<(isize, Vec<usize>)> {
        let text: Vec<char> = candidate.chars().collect();
        let mut last: Option<char> = None;

        for (ix, &c) in text.iter().enumerate() {
            let Some(patt) = self.pattern.get(self.patt_ix) else { break };

            if fold(c) == patt {
                let score = self.occurrence_score(ix, c, last);
                if self.best.map_or(true, |(best, _)| score > best) {
                    self.best = Some((score, ix));
                }
            }

            let next_starts = match (self.pattern.get(self.patt_ix + 1), text.get(ix + 1)) {
                (_, None) => true,
                (Some(next_patt), Some(&next_c)) => fold(next_c) == next_patt,
                (None, Some(_)) => false,
            };
            if next_starts {
                self.commit();
            }

            last = Some(c);
        }

        if self.matched.len() != self.pattern.len() {
            return None;
        }

        let unmatched = self.matched.len() as isize - text.len() as isize;
        Some((self.score.saturating_add(unmatched), self.matched))
    }

    fn occurrence_score(&mut self, ix: usize, c: char, last: Option<char>) -> isize {
        let mut score = 0;
        if ix == 0 {
            score += FIRST_CHAR_MATCH_BONUS;
        }
        if last.map_or(false, char::is_lowercase) && c.is_uppercase() {
            score += CAMEL_CASE_MATCH_BONUS;
        }
        if last.map_or(false, |l| SEPARATORS.contains(&l)) {
            score += MATCH_FOLLOWING_SEPARATOR_BONUS;
        }
        if self.matched.last().map_or(false, |&prev| prev + 1 == ix) {
            let bonus = self.adjacent_bonus.saturating_mul(2).saturating_add(ADJACENT_MATCH_BONUS);
            score = score.saturating_add(bonus);
            self.adjacent_bonus = self.adjacent_bonus.saturating_add(bonus);
        }
        score
    }

    fn commit(&mut self) {
        let Some((mut score, ix)) = self.best.take() else { return };
        if self.matched.is_empty() {
            let penalty = (ix as isize).saturating_mul(UNMATCHED_LEADING_CHAR_PENALTY);
            score += penalty.max(MAX_UNMATCHED_LEADING_CHAR_PENALTY);
        }
        self.score = self.score.saturating_add(score);
        self.matched.push(ix);
        self.patt_ix += 1;
    }
}
