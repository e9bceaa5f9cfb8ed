//! Shared configuration loader for xmldoc.
//!
//! `defaults/xmldoc.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`XmlDocConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use xmldoc_babel::markdown::{LineBreakStyle, LinkMap, MarkdownOptions};
use xmldoc_babel::model::{ParseOptions, SeePolicy};
use xmldoc_babel::XmlDocError;

const DEFAULT_TOML: &str = include_str!("../defaults/xmldoc.default.toml");

/// Top-level configuration consumed by xmldoc applications.
#[derive(Debug, Clone, Deserialize)]
pub struct XmlDocConfig {
    pub parse: ParseConfig,
    pub markdown: MarkdownConfig,
    pub references: ReferencesConfig,
}

impl XmlDocConfig {
    pub fn parse_options(&self) -> ParseOptions {
        (&self.parse).into()
    }

    pub fn markdown_options(&self) -> MarkdownOptions {
        (&self.markdown).into()
    }

    /// Build the resolver for code references; fails on an invalid `base_url`.
    pub fn link_map(&self) -> Result<LinkMap, XmlDocError> {
        LinkMap::try_from(&self.references)
    }
}

/// Model building knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ParseConfig {
    pub see_without_target: SeePolicy,
}

impl From<&ParseConfig> for ParseOptions {
    fn from(config: &ParseConfig) -> Self {
        ParseOptions {
            see_without_target: config.see_without_target,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub line_breaks: LineBreakStyle,
}

impl From<&MarkdownConfig> for MarkdownOptions {
    fn from(config: &MarkdownConfig) -> Self {
        MarkdownOptions {
            line_breaks: config.line_breaks,
        }
    }
}

/// Link targets for code references.
#[derive(Debug, Clone, Deserialize)]
pub struct ReferencesConfig {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub links: Vec<LinkConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LinkConfig {
    pub id: String,
    pub target: String,
}

impl TryFrom<&ReferencesConfig> for LinkMap {
    type Error = XmlDocError;

    fn try_from(config: &ReferencesConfig) -> Result<Self, Self::Error> {
        let mut links = match config.base_url.as_deref() {
            Some(base_url) if !base_url.trim().is_empty() => {
                LinkMap::new().with_base_url(base_url)?
            }
            _ => LinkMap::new(),
        };
        for link in &config.links {
            links.insert(link.id.as_str(), link.target.as_str());
        }
        Ok(links)
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

    /// Apply a single key/value override (useful for command line settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<XmlDocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<XmlDocConfig, ConfigError> {
    Loader::new().build()
}
