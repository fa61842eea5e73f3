//! Configuration for the icon resolver

use std::path::Path;
use ahash::AHashSet;
use serde::{Serialize, Deserialize};

use crate::{
    catalog,
    error::{IconResolveError, Result},
    tables::{AliasTable, PrefixTable},
    types::{CanonicalName, RenderParams, DEFAULT_ICON_COLOR, DEFAULT_ICON_SIZE},
};

/// Generic "code" glyph drawn in place of anything that cannot be resolved
pub const DEFAULT_FALLBACK_IDENTIFIER: &str = "builtin:code-tags";

/// Configuration for the icon resolver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    // Name tables
    /// Library prefix -> namespace
    pub prefixes: PrefixTable,
    /// Exact identifier overrides
    pub aliases: AliasTable,
    /// Namespaces accepted as canonical input besides the prefix targets
    pub namespaces: AHashSet<String>,

    // Fallback
    /// Identifier substituted for unresolvable input
    pub fallback_identifier: String,

    // Render defaults
    /// Size used by `load_icon` when none is given
    pub default_size: u32,
    /// Color used by `load_icon` when none is given
    pub default_color: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            prefixes: PrefixTable::default(),
            aliases: AliasTable::default(),
            namespaces: catalog::namespaces().map(str::to_string).collect(),
            fallback_identifier: DEFAULT_FALLBACK_IDENTIFIER.to_string(),
            default_size: DEFAULT_ICON_SIZE,
            default_color: DEFAULT_ICON_COLOR.to_string(),
        }
    }
}

impl ResolverConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("Loaded resolver configuration from {:?}", path);
        Self::from_json_str(&json)
    }

    /// Check that the fallback identifier is usable
    pub fn validate(&self) -> Result<()> {
        if CanonicalName::parse(&self.fallback_identifier).is_none() {
            return Err(IconResolveError::InvalidConfig(format!(
                "fallback identifier '{}' is not in namespace:name form",
                self.fallback_identifier
            )));
        }
        Ok(())
    }

    /// Replace the prefix table
    pub fn with_prefixes(mut self, prefixes: PrefixTable) -> Self {
        self.prefixes = prefixes;
        self
    }

    /// Replace the alias table
    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    /// Add a single alias on top of the current table
    pub fn with_alias(mut self, identifier: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.insert(identifier, canonical);
        self
    }

    /// Add a single prefix on top of the current table
    pub fn with_prefix(mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.prefixes.insert(prefix, namespace);
        self
    }

    /// Set the fallback identifier
    pub fn with_fallback(mut self, identifier: impl Into<String>) -> Self {
        self.fallback_identifier = identifier.into();
        self
    }

    /// Set the default render size and color
    pub fn with_default_params(mut self, size: u32, color: impl Into<String>) -> Self {
        self.default_size = size;
        self.default_color = color.into();
        self
    }

    /// Add a namespace that canonical input may use
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespaces.insert(namespace.into());
        self
    }

    /// Whether canonical input in `namespace` is passed through unchanged
    pub fn knows_namespace(&self, namespace: &str) -> bool {
        self.prefixes.knows_namespace(namespace) || self.namespaces.contains(namespace)
    }

    pub fn default_params(&self) -> RenderParams {
        RenderParams::new(self.default_size, self.default_color.clone())
    }
}
