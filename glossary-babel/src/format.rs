//! Format trait definition
//!
//! This module defines the Format trait that every page format implements. A format
//! decides what a page looks like and what its file is called; it never touches the disk.

use crate::error::FormatError;
use glossary_parser::Fragment;

/// Trait for page formats
///
/// # Examples
///
/// ```ignore
/// struct PlainText;
///
/// impl Format for PlainText {
///     fn name(&self) -> &str {
///         "text"
///     }
///
///     fn index_file(&self) -> &str {
///         "index.txt"
///     }
///
///     fn page_file(&self, term: &str) -> String {
///         format!("{term}.txt")
///     }
///
///     fn render_index(&self, terms: &[String]) -> Result<String, FormatError> {
///         Ok(terms.join("\n"))
///     }
///
///     fn render_term_page(&self, term: &str, fragments: &[Fragment<'_>]) -> Result<String, FormatError> {
///         Ok(format!("{term}: {}", fragments.iter().map(|f| f.as_str()).collect::<String>()))
///     }
/// }
/// ```
pub trait Format {
    /// The name of this format (e.g., "html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File name of the index page
    fn index_file(&self) -> &str;

    /// File name of the page for `term`
    fn page_file(&self, term: &str) -> String;

    /// Render the index page listing `terms` in the given order
    fn render_index(&self, terms: &[String]) -> Result<String, FormatError>;

    /// Render the page for `term` from its cross-referenced definition
    fn render_term_page(&self, term: &str, fragments: &[Fragment<'_>])
        -> Result<String, FormatError>;
}
