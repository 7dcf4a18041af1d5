//! Shared configuration loader for the glossary toolchain.
//!
//! `defaults/glossary.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`GlossaryConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use glossary_babel::{HtmlOptions, PublishOptions};
use glossary_parser::SeparatorSet;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/glossary.default.toml");

/// Top-level configuration consumed by glossary applications.
#[derive(Debug, Clone, Deserialize)]
pub struct GlossaryConfig {
    pub tokenizer: TokenizerConfig,
    pub site: SiteConfig,
    pub output: OutputConfig,
}

/// How definitions are split into words.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenizerConfig {
    /// Literal list of separator characters.
    pub separators: String,
}

/// Text and naming of the generated pages.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    pub index_heading: String,
    pub index_file: String,
    pub page_extension: String,
    pub term_color: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub create_dir: bool,
}

impl GlossaryConfig {
    /// The separator set described by `tokenizer.separators`.
    pub fn separator_set(&self) -> SeparatorSet {
        SeparatorSet::from_chars(&self.tokenizer.separators)
    }

    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            title: self.site.title.clone(),
            index_heading: self.site.index_heading.clone(),
            index_file: self.site.index_file.clone(),
            page_extension: self.site.page_extension.clone(),
            term_color: self.site.term_color.clone(),
        }
    }

    pub fn publish_options(&self) -> PublishOptions {
        PublishOptions {
            create_dir: self.output.create_dir,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (used for command line flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<GlossaryConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<GlossaryConfig, ConfigError> {
    Loader::new().build()
}
