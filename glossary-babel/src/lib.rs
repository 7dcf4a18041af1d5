//! Site generation for glossaries
//!
//!     This crate turns a loaded [Glossary](glossary_parser::Glossary) into a set of pages
//!     and writes them out: one index page listing every term, and one page per term with
//!     its definition cross-linked to the other terms.
//!
//! Architecture
//!
//!     - Format trait: how a page is rendered and what its file is called
//!     - site: Glossary → Site (an ordered list of in-memory pages)
//!     - publish: Site → files in an existing directory
//!
//!     Like glossary-parser this is a pure lib, shell agnostic: no printing, no prompts, no
//!     env vars. The only side effect lives in [publish].
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── formats
//!     │   └── html
//!     │       ├── serializer.rs   # Page text
//!     │       └── mod.rs          # HtmlFormat + HtmlOptions
//!     ├── site.rs
//!     ├── publish.rs
//!     └── lib.rs
//!
//!     Term and definition text is emitted as is. Nothing is escaped.

pub mod error;
pub mod format;
pub mod formats;
pub mod publish;
pub mod site;

pub use error::{FormatError, PublishError};
pub use format::Format;
pub use formats::html::{HtmlFormat, HtmlOptions};
pub use publish::{publish, PublishOptions, PublishResult};
pub use site::{build_site, Page, Site};
