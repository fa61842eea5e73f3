//! Core types for icon resolution

use std::sync::Arc;
use serde::{Serialize, Deserialize};

/// Namespace of the glyphs shipped inside this crate
pub const BUILTIN_NAMESPACE: &str = "builtin";

/// Size used when the caller does not ask for one
pub const DEFAULT_ICON_SIZE: u32 = 60;

/// Color used when the caller does not ask for one
pub const DEFAULT_ICON_COLOR: &str = "currentColor";

/// Size and color requested for a single icon
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderParams {
    /// Width and height in pixels
    pub size: u32,
    /// Any CSS color
    pub color: String,
}

impl RenderParams {
    pub fn new(size: u32, color: impl Into<String>) -> Self {
        Self { size, color: color.into() }
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self::new(DEFAULT_ICON_SIZE, DEFAULT_ICON_COLOR)
    }
}

/// Canonical identifier split into its two halves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalName<'a> {
    pub namespace: &'a str,
    pub name: &'a str,
}

impl<'a> CanonicalName<'a> {
    /// Parse `namespace:name`. Both halves must be non-empty.
    pub fn parse(identifier: &'a str) -> Option<Self> {
        let (namespace, name) = identifier.split_once(':')?;
        if namespace.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self { namespace, name })
    }
}

/// A canonical identifier together with the parameters to draw it with
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedIcon {
    /// `namespace:kebab-name`
    pub identifier: Arc<str>,
    pub params: RenderParams,
}

impl ResolvedIcon {
    pub fn new(identifier: impl Into<Arc<str>>, params: RenderParams) -> Self {
        Self { identifier: identifier.into(), params }
    }

    pub fn canonical(&self) -> Option<CanonicalName<'_>> {
        CanonicalName::parse(&self.identifier)
    }
}

/// Output of a successful render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIcon {
    /// Identifier that was actually drawn
    pub identifier: Arc<str>,
    /// Standalone `<svg>` document
    pub svg: String,
    pub params: RenderParams,
    /// Set when the fallback glyph stands in for the requested icon
    pub is_fallback: bool,
}

/// Outcome of normalizing one raw identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedName {
    /// `namespace:kebab-name`
    pub canonical: Arc<str>,
    /// Set when the input could not be resolved and the fallback identifier
    /// was substituted
    pub is_fallback: bool,
}

/// One entry of a curated icon list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CuratedIcon {
    /// Name shown in the picker and stored on selection
    pub name: &'static str,
    /// Canonical identifier used to draw the grid cell
    pub canonical: &'static str,
}

impl CuratedIcon {
    pub const fn new(name: &'static str, canonical: &'static str) -> Self {
        Self { name, canonical }
    }
}

/// Snapshot of cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CacheStatistics {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}

impl CacheStatistics {
    /// Fraction of lookups served from the cache
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_name_parse() {
        let parsed = CanonicalName::parse("tabler:brand-mysql").unwrap();
        assert_eq!(parsed.namespace, "tabler");
        assert_eq!(parsed.name, "brand-mysql");

        assert!(CanonicalName::parse("TbBrandMysql").is_none());
        assert!(CanonicalName::parse(":brand-mysql").is_none());
        assert!(CanonicalName::parse("tabler:").is_none());
    }

    #[test]
    fn test_hit_rate() {
        let stats = CacheStatistics { entries: 1, hits: 3, misses: 1 };
        assert_eq!(stats.hit_rate(), 0.75);
        assert_eq!(CacheStatistics::default().hit_rate(), 0.0);
    }
}
