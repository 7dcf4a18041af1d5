//! Format implementations

pub mod html;

pub use html::HtmlFormat;
