//! HTML format implementation
//!
//! Strategy: direct fragments → HTML text generation (one-way only)
//!
//! # Pages
//!
//! | Page | Content |
//! |------|---------|
//! | Index | Site title, `<hr>`, index heading, `<ul>` with one `<li><a>` per term |
//! | Term | Term as a bold italic coloured `<h2>`, definition in `<blockquote>`, `<hr>`, "Return to index" footer |
//!
//! Pages carry no doctype and no stylesheet. Links are relative: every page lives in the
//! same directory, a term's page is `<term>.<page_extension>`.

mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use glossary_parser::Fragment;

pub use serializer::{render_index, render_term_page};

/// Knobs for the generated pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Title and top heading of the index page
    pub title: String,
    /// Heading above the term list
    pub index_heading: String,
    /// File name of the index page, target of the footer link
    pub index_file: String,
    /// Extension of term pages, without the dot
    pub page_extension: String,
    /// Colour of the term heading
    pub term_color: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        HtmlOptions {
            title: "Glossary".to_string(),
            index_heading: "Index".to_string(),
            index_file: "index.html".to_string(),
            page_extension: "html".to_string(),
            term_color: "red".to_string(),
        }
    }
}

impl HtmlOptions {
    /// Relative link target of a term's page.
    pub fn page_href(&self, term: &str) -> String {
        format!("{}.{}", term, self.page_extension)
    }
}

/// HTML pages with configurable options
#[derive(Debug, Clone, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        HtmlFormat { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "Cross-linked static HTML pages"
    }

    fn index_file(&self) -> &str {
        &self.options.index_file
    }

    fn page_file(&self, term: &str) -> String {
        self.options.page_href(term)
    }

    fn render_index(&self, terms: &[String]) -> Result<String, FormatError> {
        render_index(terms, &self.options)
    }

    fn render_term_page(
        &self,
        term: &str,
        fragments: &[Fragment<'_>],
    ) -> Result<String, FormatError> {
        render_term_page(term, fragments, &self.options)
    }
}
