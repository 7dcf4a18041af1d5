//! Glossary → Site
//!
//!     A site is the index page followed by one page per term, in term-list order. Pages
//!     are rendered in memory; writing them is left to [publish](crate::publish).

use crate::error::FormatError;
use crate::format::Format;
use glossary_parser::{cross_reference, Glossary, SeparatorSet};
use std::collections::HashSet;
use tracing::info;

/// One rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// File name relative to the output directory
    pub file_name: String,
    pub contents: String,
}

/// All pages of a glossary, index first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Site {
    pub pages: Vec<Page>,
}

impl Site {
    pub fn index(&self) -> Option<&Page> {
        self.pages.first()
    }

    /// Term pages in term order.
    pub fn term_pages(&self) -> &[Page] {
        self.pages.get(1..).unwrap_or_default()
    }

    pub fn page(&self, file_name: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.file_name == file_name)
    }
}

/// Render every page of `glossary`.
///
/// Fails if a term cannot name a file in the output directory, or if two pages would end
/// up with the same file name.
pub fn build_site(
    glossary: &Glossary,
    separators: &SeparatorSet,
    format: &dyn Format,
) -> Result<Site, FormatError> {
    let index_file = format.index_file().to_string();
    let mut seen = HashSet::from([index_file.clone()]);
    let mut pages = Vec::with_capacity(glossary.len() + 1);

    pages.push(Page {
        file_name: index_file,
        contents: format.render_index(glossary.terms())?,
    });

    for entry in glossary.iter() {
        let file_name = format.page_file(entry.term);
        check_file_name(entry.term, &file_name)?;
        if !seen.insert(file_name.clone()) {
            return Err(FormatError::FileNameCollision {
                term: entry.term.to_string(),
                file: file_name,
            });
        }

        let fragments = cross_reference(entry.definition, glossary, separators);
        pages.push(Page {
            file_name,
            contents: format.render_term_page(entry.term, &fragments)?,
        });
    }

    info!(format = format.name(), pages = pages.len(), "site rendered");
    Ok(Site { pages })
}

/// A page file must stay inside the output directory.
fn check_file_name(term: &str, file_name: &str) -> Result<(), FormatError> {
    let escapes = file_name.contains(['/', '\\'])
        || file_name == "."
        || file_name == ".."
        || term == "."
        || term == "..";
    if escapes {
        return Err(FormatError::InvalidFileName {
            term: term.to_string(),
        });
    }
    Ok(())
}
