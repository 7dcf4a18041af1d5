//! Word / separator tokenizer
//!
//!     A definition is split into maximal runs of two alternating classes: words (no
//!     separator characters) and separator runs (only separator characters). The class of
//!     a run is decided by its first character; the run then extends until the class
//!     changes or the text ends. A separator run may mix different separators.
//!
//!     The tokenizer keeps no state. Calling it again at `position + token.len()` yields
//!     the next run, and doing so from 0 until the end reproduces the text exactly. The
//!     [Tokens] iterator does just that.
//!
//!     Positions are byte offsets into the text and must fall on a char boundary.

use super::separators::SeparatorSet;
use serde::Serialize;

/// The class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A run of non-separator characters
    Word,
    /// A run of separator characters
    Separator,
}

impl TokenKind {
    #[inline]
    fn of(ch: char, separators: &SeparatorSet) -> Self {
        if separators.contains(ch) {
            TokenKind::Separator
        } else {
            TokenKind::Word
        }
    }
}

/// A maximal homogeneous run inside a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset of the first character.
    pub offset: usize,
}

impl<'a> Token<'a> {
    /// Byte offset just past the last character.
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Return the word or separator run of `text` starting at `position`.
///
/// # Panics
///
/// If `position >= text.len()` or `position` is not on a char boundary.
pub fn next_word_or_separator<'a>(
    text: &'a str,
    position: usize,
    separators: &SeparatorSet,
) -> &'a str {
    next_token(text, position, separators).text
}

fn next_token<'a>(text: &'a str, position: usize, separators: &SeparatorSet) -> Token<'a> {
    assert!(
        position < text.len(),
        "position {position} out of range for text of length {}",
        text.len()
    );
    assert!(
        text.is_char_boundary(position),
        "position {position} is not on a char boundary"
    );

    let rest = &text[position..];
    let kind = match rest.chars().next() {
        Some(ch) => TokenKind::of(ch, separators),
        None => unreachable!("non-empty by the range check"),
    };
    let len = rest
        .char_indices()
        .find(|&(_, ch)| TokenKind::of(ch, separators) != kind)
        .map_or(rest.len(), |(idx, _)| idx);

    Token {
        kind,
        text: &rest[..len],
        offset: position,
    }
}

/// Tokenize `text` from the start.
pub fn tokenize<'a>(text: &'a str, separators: &'a SeparatorSet) -> Tokens<'a> {
    Tokens {
        text,
        separators,
        offset: 0,
    }
}

/// Iterator over the tokens of a text, in order.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    separators: &'a SeparatorSet,
    offset: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.text.len() {
            return None;
        }
        let token = next_token(self.text, self.offset, self.separators);
        self.offset = token.end();
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn seps(chars: &str) -> SeparatorSet {
        SeparatorSet::from_chars(chars)
    }

    #[test]
    fn test_separator_run_between_words() {
        assert_eq!(next_word_or_separator("babb", 1, &seps("a")), "a");
    }

    #[test]
    fn test_single_char_word() {
        assert_eq!(next_word_or_separator("abab", 1, &seps("a")), "b");
    }

    #[test]
    fn test_separator_run_of_mixed_separators() {
        let text = "grab apple from tree";
        assert_eq!(next_word_or_separator(text, 5, &seps("aple")), "apple");
    }

    #[test]
    fn test_word_runs_into_space() {
        let text = "grab apple from tree";
        assert_eq!(next_word_or_separator(text, 11, &seps("aplet")), "from ");
    }

    #[test]
    fn test_whitespace_separators() {
        let text = "grab apple from tree";
        assert_eq!(next_word_or_separator(text, 0, &seps(" ")), "grab");
        assert_eq!(next_word_or_separator(text, 4, &seps("ba")), " ");
    }

    #[test]
    fn test_end_of_text_ends_the_run() {
        assert_eq!(next_word_or_separator("one two", 4, &seps(" ")), "two");
        assert_eq!(next_word_or_separator("x  ", 1, &seps(" ")), "  ");
    }

    #[test]
    fn test_empty_separator_set_yields_whole_rest() {
        assert_eq!(next_word_or_separator("a, b", 1, &seps("")), ", b");
    }

    #[test]
    fn test_multibyte_characters() {
        let text = "café, thé";
        let separators = seps(", ");
        let tokens: Vec<_> = tokenize(text, &separators).map(|t| t.text).collect();
        assert_eq!(tokens, vec!["café", ", ", "thé"]);
    }

    #[test]
    fn test_tokens_carry_kind_and_offset() {
        let separators = seps(" ,");
        let tokens: Vec<_> = tokenize("to be, or", &separators).collect();
        assert_eq!(
            tokens,
            vec![
                Token {
                    kind: TokenKind::Word,
                    text: "to",
                    offset: 0,
                },
                Token {
                    kind: TokenKind::Separator,
                    text: " ",
                    offset: 2,
                },
                Token {
                    kind: TokenKind::Word,
                    text: "be",
                    offset: 3,
                },
                Token {
                    kind: TokenKind::Separator,
                    text: ", ",
                    offset: 5,
                },
                Token {
                    kind: TokenKind::Word,
                    text: "or",
                    offset: 7,
                },
            ]
        );
    }

    #[test]
    fn test_tokenize_empty_text() {
        assert_eq!(tokenize("", &seps(" ")).count(), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_position_past_end_panics() {
        next_word_or_separator("abc", 3, &seps(" "));
    }

    #[test]
    #[should_panic(expected = "char boundary")]
    fn test_position_inside_char_panics() {
        next_word_or_separator("é", 1, &seps(" "));
    }
}
