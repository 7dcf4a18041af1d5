//! Main module for glossary library functionality

pub mod crossref;
pub mod loader;
pub mod separators;
pub mod tokenizer;
