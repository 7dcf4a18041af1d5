//! # glossary-parser
//!
//! Reads glossary files and cross-references their definitions.
//!
//! A glossary file is a flat list of records, each one a term line followed by one or more
//! definition lines, with records separated by an empty line:
//!
//!     meaning
//!     something that one wishes to convey, especially by language
//!
//!     term
//!     a word whose definition is in a glossary
//!
//! Layout
//!
//!     src/glossary
//!       ├── separators   The set of characters that delimit words
//!       ├── tokenizer    Maximal word / separator runs over a definition
//!       ├── loader       File → sorted term list + term → definition map
//!       └── crossref     Definition → text and link fragments
//!
//!     This is a pure library: nothing here prints, prompts or writes files. The HTML side
//!     lives in glossary-babel and the shell side in glossary-cli.

pub mod glossary;

pub use glossary::crossref::{cross_reference, CrossReferences, Fragment, TermLookup};
pub use glossary::loader::{Entry, Glossary, LoadError};
pub use glossary::separators::{SeparatorSet, DEFAULT_SEPARATORS};
pub use glossary::tokenizer::{next_word_or_separator, tokenize, Token, TokenKind, Tokens};
