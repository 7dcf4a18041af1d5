//! Glossary loading
//!
//!     This module turns glossary source text into a [Glossary]: the list of terms, kept in
//!     ascending order, and the term → definition map.
//!
//! Format
//!
//!     Records are line oriented. The first line of a record is the term, every following
//!     line up to the next empty line (or the end of input) is part of its definition.
//!     Definition lines are concatenated as they are, nothing is inserted between them.
//!
//! Malformed Input
//!
//!     - Extra empty lines between records are skipped.
//!     - A term with no definition line (end of input, or an empty line right after it)
//!       is rejected with [LoadError::MissingDefinition].
//!     - A term that appears twice is rejected with [LoadError::DuplicateTerm].
//!
//!     Only truly empty lines separate records; a line holding spaces is content.

use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Error that can occur when loading a glossary
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: term '{term}' has no definition")]
    MissingDefinition { term: String, line: usize },

    #[error("line {line}: term '{term}' is defined more than once")]
    DuplicateTerm { term: String, line: usize },
}

/// A loaded glossary.
///
/// `terms` is sorted after every insertion and holds exactly the keys of `definitions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Glossary {
    terms: Vec<String>,
    definitions: HashMap<String, String>,
}

/// A term with its definition, as yielded by [Glossary::iter].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry<'a> {
    pub term: &'a str,
    pub definition: &'a str,
}

impl Glossary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse glossary source text.
    pub fn parse(source: &str) -> Result<Self, LoadError> {
        Self::from_lines(source.lines().map(|line| Ok(line.to_string())))
    }

    /// Read a glossary from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LoadError> {
        Self::from_lines(reader.lines())
    }

    /// Read a glossary file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading glossary file");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    fn from_lines<I>(lines: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = io::Result<String>>,
    {
        let mut glossary = Glossary::new();
        let mut lines = lines.into_iter().enumerate();

        loop {
            // Skip the empty lines in front of the next record
            let (term_idx, term) = loop {
                match lines.next() {
                    None => {
                        info!(terms = glossary.len(), "glossary loaded");
                        return Ok(glossary);
                    }
                    Some((idx, line)) => {
                        let line = line?;
                        if !line.is_empty() {
                            break (idx, line);
                        }
                    }
                }
            };
            let term_line = term_idx + 1;

            let mut definition = match lines.next() {
                Some((_, line)) => line?,
                None => String::new(),
            };
            if definition.is_empty() {
                return Err(LoadError::MissingDefinition {
                    term,
                    line: term_line,
                });
            }
            for (_, line) in lines.by_ref() {
                let line = line?;
                if line.is_empty() {
                    break;
                }
                definition.push_str(&line);
            }

            if glossary.contains_term(&term) {
                return Err(LoadError::DuplicateTerm {
                    term,
                    line: term_line,
                });
            }
            debug!(term = %term, line = term_line, "loaded glossary entry");
            glossary.insert(term, definition);
        }
    }

    /// Add a term, keeping the term list sorted.
    ///
    /// Returns the previous definition if the term was already present; the term list is
    /// not changed in that case.
    pub fn insert(
        &mut self,
        term: impl Into<String>,
        definition: impl Into<String>,
    ) -> Option<String> {
        let term = term.into();
        if let Err(idx) = self.terms.binary_search(&term) {
            self.terms.insert(idx, term.clone());
        }
        self.definitions.insert(term, definition.into())
    }

    /// All terms in ascending order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn definition(&self, term: &str) -> Option<&str> {
        self.definitions.get(term).map(String::as_str)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.definitions.contains_key(term)
    }

    pub fn definitions(&self) -> &HashMap<String, String> {
        &self.definitions
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Entries in term order.
    pub fn iter(&self) -> impl Iterator<Item = Entry<'_>> {
        self.terms.iter().filter_map(|term| {
            self.definitions.get(term).map(|definition| Entry {
                term,
                definition,
            })
        })
    }
}

impl Serialize for Glossary {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
