//! Rendering backend seam and an Iconify icon-set backed implementation

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use dashmap::DashMap;
use serde::{Serialize, Deserialize};

use crate::{
    error::{RenderError, Result},
    types::{CanonicalName, RenderParams, RenderedIcon, ResolvedIcon},
};

/// Turns a canonical identifier into SVG, or reports why it cannot
pub trait IconRenderer: Send + Sync {
    fn render(&self, icon: &ResolvedIcon) -> std::result::Result<RenderedIcon, RenderError>;
}

impl<R: IconRenderer + ?Sized> IconRenderer for &R {
    fn render(&self, icon: &ResolvedIcon) -> std::result::Result<RenderedIcon, RenderError> {
        (**self).render(icon)
    }
}

impl<R: IconRenderer + ?Sized> IconRenderer for Arc<R> {
    fn render(&self, icon: &ResolvedIcon) -> std::result::Result<RenderedIcon, RenderError> {
        (**self).render(icon)
    }
}

/// Wrap an icon body in a standalone `<svg>` element sized and colored per
/// `params`. Bodies draw with `currentColor`.
pub fn svg_document(view_box: &str, body: &str, params: &RenderParams) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="{view_box}" style="color: {color}">{body}</svg>"#,
        size = params.size,
        color = escape_attribute(&params.color),
    )
}

/// Escape a value for use inside a double- or single-quoted XML attribute
pub fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn default_dimension() -> u32 {
    16
}

/// Single icon in an Iconify JSON icon set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconData {
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// Alternative name pointing at another icon of the same set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconAlias {
    pub parent: String,
}

/// Iconify JSON icon set: `{"prefix", "icons", "aliases", "width", "height"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSet {
    /// Namespace of the set, e.g. `"mdi"`
    pub prefix: String,
    pub icons: BTreeMap<String, IconData>,
    #[serde(default)]
    pub aliases: BTreeMap<String, IconAlias>,
    #[serde(default = "default_dimension")]
    pub width: u32,
    #[serde(default = "default_dimension")]
    pub height: u32,
}

impl IconSet {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Look up an icon, following one level of aliasing
    pub fn icon(&self, name: &str) -> Option<&IconData> {
        self.icons.get(name).or_else(|| {
            self.aliases
                .get(name)
                .and_then(|alias| self.icons.get(&alias.parent))
        })
    }

    fn view_box(&self, icon: &IconData) -> String {
        format!(
            "0 0 {} {}",
            icon.width.unwrap_or(self.width),
            icon.height.unwrap_or(self.height)
        )
    }
}

/// Renders from icon sets registered by namespace
#[derive(Debug, Default)]
pub struct IconSetRenderer {
    sets: DashMap<String, Arc<IconSet>>,
}

impl IconSetRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a set under its own prefix, replacing any previous one
    pub fn add_set(&self, set: IconSet) {
        log::debug!("Registered icon set '{}' with {} icons", set.prefix, set.icons.len());
        self.sets.insert(set.prefix.clone(), Arc::new(set));
    }

    pub fn add_json(&self, json: &str) -> Result<()> {
        self.add_set(IconSet::from_json_str(json)?);
        Ok(())
    }

    /// Register the icon set stored in a JSON file
    pub fn add_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = std::fs::read_to_string(path.as_ref())?;
        self.add_json(&json)
    }

    pub fn has_namespace(&self, namespace: &str) -> bool {
        self.sets.contains_key(namespace)
    }

    pub fn namespaces(&self) -> Vec<String> {
        let mut namespaces: Vec<String> = self.sets.iter().map(|entry| entry.key().clone()).collect();
        namespaces.sort();
        namespaces
    }
}

impl IconRenderer for IconSetRenderer {
    fn render(&self, icon: &ResolvedIcon) -> std::result::Result<RenderedIcon, RenderError> {
        let canonical = CanonicalName::parse(&icon.identifier)
            .ok_or_else(|| RenderError::InvalidIdentifier(icon.identifier.to_string()))?;

        let set = self
            .sets
            .get(canonical.namespace)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| RenderError::UnknownNamespace(canonical.namespace.to_string()))?;

        let data = set.icon(canonical.name).ok_or_else(|| RenderError::IconNotFound {
            namespace: canonical.namespace.to_string(),
            name: canonical.name.to_string(),
        })?;

        Ok(RenderedIcon {
            identifier: icon.identifier.clone(),
            svg: svg_document(&set.view_box(data), &data.body, &icon.params),
            params: icon.params.clone(),
            is_fallback: false,
        })
    }
}
