//! Resolution of `cref` references to link targets.
//!
//! Resolving a code reference properly needs a semantic model of the documented program,
//! which this crate does not have. [`LinkResolver`] is the seam for plugging one in; the
//! built-in implementations either never resolve or look targets up in a fixed table.

use crate::error::XmlDocError;
use crate::model::MemberId;
use std::collections::HashMap;
use url::Url;

/// Maps a code reference to a link target (URL or anchor).
pub trait LinkResolver {
    fn resolve(&self, reference: &MemberId) -> Option<String>;
}

/// Resolves nothing: references render as inline code without a link.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLinkResolver;

impl LinkResolver for NoLinkResolver {
    fn resolve(&self, _reference: &MemberId) -> Option<String> {
        None
    }
}

impl<F> LinkResolver for F
where
    F: Fn(&MemberId) -> Option<String>,
{
    fn resolve(&self, reference: &MemberId) -> Option<String> {
        self(reference)
    }
}

/// Table-driven resolver.
///
/// Explicit entries are keyed by the full id (`T:System.String`). References without an entry
/// resolve against `base_url` when one is set, using the API-browser style slug of the name
/// (`System.Collections.Generic.List`1` becomes `system.collections.generic.list-1`).
/// References the compiler could not resolve (`!:`) and unprefixed ones only use explicit
/// entries.
#[derive(Debug, Clone, Default)]
pub struct LinkMap {
    links: HashMap<String, String>,
    base_url: Option<Url>,
}

impl LinkMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, target: impl Into<String>) {
        self.links.insert(id.into(), target.into());
    }

    pub fn with_link(mut self, id: impl Into<String>, target: impl Into<String>) -> Self {
        self.insert(id, target);
        self
    }

    /// Set the base URL for references without an explicit entry.
    ///
    /// The URL must be absolute; a missing trailing slash is added so the slug is appended
    /// rather than replacing the last path segment.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, XmlDocError> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let url = Url::parse(&normalized)
            .map_err(|e| XmlDocError::invalid_argument("base_url", e.to_string()))?;
        self.base_url = Some(url);
        Ok(self)
    }

    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl LinkResolver for LinkMap {
    fn resolve(&self, reference: &MemberId) -> Option<String> {
        if let Some(target) = self.links.get(&reference.to_string()) {
            return Some(target.clone());
        }
        if !reference.is_resolved() {
            return None;
        }
        let base_url = self.base_url.as_ref()?;
        base_url
            .join(&slug(reference.name()))
            .ok()
            .map(|url| url.to_string())
    }
}

fn slug(name: &str) -> String {
    let without_parameters = name.split('(').next().unwrap_or(name);
    without_parameters.to_lowercase().replace('`', "-")
}
