//! Separator characters
//!
//!     A separator is any character that delimits words in a definition: whitespace and
//!     punctuation, typically. The set is built once from a literal string and only ever
//!     queried for membership afterwards.

use std::collections::HashSet;
use std::fmt;

/// Separators used when nothing else is configured: space, tab and comma.
///
/// The trailing space repeats the first one; set semantics absorb it.
pub const DEFAULT_SEPARATORS: &str = " \t, ";

/// An immutable set of separator characters.
#[derive(Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: HashSet<char>,
}

impl SeparatorSet {
    /// Collect the distinct characters of `literal`.
    pub fn from_chars(literal: &str) -> Self {
        literal.chars().collect()
    }

    /// Whether `ch` is a separator.
    #[inline]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Iterate the separators in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::from_chars(DEFAULT_SEPARATORS)
    }
}

impl FromIterator<char> for SeparatorSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        SeparatorSet {
            chars: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for SeparatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars: Vec<char> = self.iter().collect();
        chars.sort_unstable();
        f.debug_set().entries(chars).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(chars: &[char]) -> SeparatorSet {
        chars.iter().copied().collect()
    }

    #[test]
    fn test_single_char() {
        assert_eq!(SeparatorSet::from_chars("a"), set_of(&['a']));
    }

    #[test]
    fn test_repeated_char_is_absorbed() {
        let set = SeparatorSet::from_chars("aa");
        assert_eq!(set, set_of(&['a']));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_long_repeated_runs() {
        let set = SeparatorSet::from_chars("aaaaaaaaaabbbbbbbbbccccccccddddddd");
        assert_eq!(set, set_of(&['a', 'b', 'c', 'd']));
    }

    #[test]
    fn test_special_characters() {
        let set = SeparatorSet::from_chars(">[]< :)*");
        assert_eq!(set, set_of(&['[', ']', ' ', '<', '>', ':', ')', '*']));
    }

    #[test]
    fn test_empty_literal_gives_empty_set() {
        let set = SeparatorSet::from_chars("");
        assert!(set.is_empty());
        assert!(!set.contains(' '));
    }

    #[test]
    fn test_default_separators() {
        let set = SeparatorSet::default();
        assert_eq!(set.len(), 3);
        assert!(set.contains(' '));
        assert!(set.contains('\t'));
        assert!(set.contains(','));
        assert!(!set.contains('.'));
    }

    #[test]
    fn test_debug_is_sorted() {
        let set = SeparatorSet::from_chars("c,a");
        assert_eq!(format!("{set:?}"), "{',', 'a', 'c'}");
    }
}
