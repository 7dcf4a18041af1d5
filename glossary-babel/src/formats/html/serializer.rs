//! HTML page text
//!
//! Pages are written line by line with one space of indentation per nesting level.

use super::HtmlOptions;
use crate::error::FormatError;
use glossary_parser::Fragment;
use std::fmt::Write;
use tracing::debug;

/// Render the index page, listing `terms` in the given order.
pub fn render_index(terms: &[String], options: &HtmlOptions) -> Result<String, FormatError> {
    let mut out = String::new();

    write_head(&mut out, &options.title)?;
    writeln!(out, "  <h2>{}</h2>", options.title)?;
    writeln!(out, "  <hr>")?;
    writeln!(out, "  <h3>{}</h3>", options.index_heading)?;
    writeln!(out, "  <ul>")?;
    for term in terms {
        writeln!(out, "   <li>")?;
        writeln!(
            out,
            "    <a href=\"{}\">{}</a>",
            options.page_href(term),
            term
        )?;
        writeln!(out, "   </li>")?;
    }
    writeln!(out, "  </ul>")?;
    write_tail(&mut out)?;

    debug!(terms = terms.len(), "rendered index page");
    Ok(out)
}

/// Render the page of one term from its cross-referenced definition.
pub fn render_term_page(
    term: &str,
    fragments: &[Fragment<'_>],
    options: &HtmlOptions,
) -> Result<String, FormatError> {
    let mut out = String::new();

    write_head(&mut out, term)?;
    writeln!(out, "  <h2>")?;
    writeln!(out, "   <b>")?;
    writeln!(out, "    <i>")?;
    writeln!(
        out,
        "     <font color=\"{}\">{}</font>",
        options.term_color, term
    )?;
    writeln!(out, "    </i>")?;
    writeln!(out, "   </b>")?;
    writeln!(out, "  </h2>")?;

    writeln!(out, "  <blockquote>")?;
    write!(out, "   ")?;
    for fragment in fragments {
        match fragment {
            Fragment::Text(text) => out.push_str(text),
            Fragment::Link(target) => write!(
                out,
                "<a href=\"{}\">{}</a>",
                options.page_href(target),
                target
            )?,
        }
    }
    writeln!(out)?;
    writeln!(out, "  </blockquote>")?;

    writeln!(out, "  <hr>")?;
    writeln!(out, "  <p>")?;
    writeln!(out, "   Return to")?;
    writeln!(out, "   <a href=\"{}\">index</a>", options.index_file)?;
    writeln!(out, "   .")?;
    writeln!(out, "  </p>")?;
    write_tail(&mut out)?;

    debug!(term, links = fragments.iter().filter(|f| f.is_link()).count(), "rendered term page");
    Ok(out)
}

fn write_head(out: &mut String, title: &str) -> Result<(), FormatError> {
    writeln!(out, "<html>")?;
    writeln!(out, " <head>")?;
    writeln!(out, "  <title>{title}</title>")?;
    writeln!(out, " </head>")?;
    writeln!(out, " <body>")?;
    Ok(())
}

fn write_tail(out: &mut String) -> Result<(), FormatError> {
    writeln!(out, " </body>")?;
    writeln!(out, "</html>")?;
    Ok(())
}
