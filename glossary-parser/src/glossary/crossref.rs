//! Cross-referencing of definitions
//!
//!     A definition is walked token by token. Each token that is exactly a known term
//!     becomes a link to that term; everything else, separator runs included, is kept as
//!     literal text. Matching is whole-token and case-sensitive: a term embedded in a
//!     longer word is never linked.
//!
//!     Concatenating the visible text of the fragments gives back the definition.

use super::loader::Glossary;
use super::separators::SeparatorSet;
use super::tokenizer::{tokenize, Tokens};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::hash::BuildHasher;

/// Anything that can answer "is this a glossary term?".
pub trait TermLookup {
    fn is_term(&self, candidate: &str) -> bool;
}

impl TermLookup for Glossary {
    fn is_term(&self, candidate: &str) -> bool {
        self.contains_term(candidate)
    }
}

impl<V, S: BuildHasher> TermLookup for HashMap<String, V, S> {
    fn is_term(&self, candidate: &str) -> bool {
        self.contains_key(candidate)
    }
}

impl<S: BuildHasher> TermLookup for HashSet<String, S> {
    fn is_term(&self, candidate: &str) -> bool {
        self.contains(candidate)
    }
}

impl TermLookup for BTreeSet<String> {
    fn is_term(&self, candidate: &str) -> bool {
        self.contains(candidate)
    }
}

/// A piece of a rendered definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Text copied verbatim
    Text(&'a str),
    /// A token naming a term; target and label are both the token
    Link(&'a str),
}

impl<'a> Fragment<'a> {
    /// The text a reader sees for this fragment.
    pub fn as_str(&self) -> &'a str {
        match self {
            Fragment::Text(text) | Fragment::Link(text) => text,
        }
    }

    pub fn is_link(&self) -> bool {
        matches!(self, Fragment::Link(_))
    }
}

/// Lazily cross-reference a definition.
pub struct CrossReferences<'a, L: ?Sized> {
    tokens: Tokens<'a>,
    lookup: &'a L,
}

impl<'a, L: TermLookup + ?Sized> CrossReferences<'a, L> {
    pub fn new(definition: &'a str, lookup: &'a L, separators: &'a SeparatorSet) -> Self {
        CrossReferences {
            tokens: tokenize(definition, separators),
            lookup,
        }
    }
}

impl<'a, L: TermLookup + ?Sized> Iterator for CrossReferences<'a, L> {
    type Item = Fragment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.tokens.next().map(|token| {
            if self.lookup.is_term(token.text) {
                Fragment::Link(token.text)
            } else {
                Fragment::Text(token.text)
            }
        })
    }
}

/// Split `definition` into text and link fragments.
///
/// Adjacent text tokens are kept as separate fragments, one per token.
pub fn cross_reference<'a, L: TermLookup + ?Sized>(
    definition: &'a str,
    lookup: &'a L,
    separators: &'a SeparatorSet,
) -> Vec<Fragment<'a>> {
    CrossReferences::new(definition, lookup, separators).collect()
}
