//! Icon picker state
//!
//! Two variants share the same selection contract:
//! - [`IconPicker`] browses a curated catalog or accepts a typed identifier.
//!   It emits the display name or the raw typed string; normalization happens
//!   again at render time.
//! - [`LibraryPicker`] browses whole library bundles tab by tab and emits the
//!   library's native export name.

use std::sync::Arc;

use crate::{
    bundle::{BundleCache, BundleLoader, IconBundle},
    catalog::CatalogKind,
    render::IconRenderer,
    resolver::IconResolver,
    types::{CuratedIcon, RenderParams, RenderedIcon},
};

/// Grid cell size in pixels
pub const PICKER_ICON_SIZE: u32 = 24;

/// Preview size in pixels
pub const PREVIEW_ICON_SIZE: u32 = 32;

/// Default accent color of picker glyphs
pub const PICKER_ICON_COLOR: &str = "#0ea5e9";

/// Where a committed value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    Curated,
    Custom,
    Library,
}

/// Value the caller should store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub value: String,
    pub source: SelectionSource,
}

/// One rendered cell of the curated grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub name: &'static str,
    pub icon: RenderedIcon,
    pub selected: bool,
}

/// Curated grid plus custom identifier field
#[derive(Debug, Clone)]
pub struct IconPicker {
    kind: CatalogKind,
    params: RenderParams,
    search: String,
    custom: String,
    preview: Option<RenderedIcon>,
    selected: String,
}

impl IconPicker {
    pub fn new(kind: CatalogKind) -> Self {
        Self {
            kind,
            params: RenderParams::new(PICKER_ICON_SIZE, PICKER_ICON_COLOR),
            search: String::new(),
            custom: String::new(),
            preview: None,
            selected: String::new(),
        }
    }

    /// Set the size and color of grid cells
    pub fn with_params(mut self, params: RenderParams) -> Self {
        self.params = params;
        self
    }

    /// Mark a previously stored value as the current selection
    pub fn with_selected(mut self, selected: impl Into<String>) -> Self {
        self.selected = selected.into();
        self
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Catalog entries whose display name contains the search text,
    /// case-insensitive, in catalog order
    pub fn filtered(&self) -> Vec<&'static CuratedIcon> {
        let needle = self.search.to_lowercase();
        self.kind
            .icons()
            .iter()
            .filter(|icon| icon.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn is_selected(&self, name: &str) -> bool {
        let selected = self.selected.trim();
        !selected.is_empty() && selected.to_lowercase() == name.to_lowercase()
    }

    /// Render every filtered entry. A cell that fails to draw shows the
    /// fallback glyph and stays selectable.
    pub fn grid<R: IconRenderer>(&self, resolver: &IconResolver<R>) -> Vec<GridCell> {
        self.filtered()
            .into_iter()
            .map(|icon| GridCell {
                name: icon.name,
                icon: resolver.render_canonical(icon.canonical, self.params.clone()),
                selected: self.is_selected(icon.name),
            })
            .collect()
    }

    /// Choose a grid entry. Emits the display name.
    pub fn select(&mut self, name: &str) -> Option<Selection> {
        let icon = self.kind.icons().iter().find(|icon| icon.name == name)?;
        self.selected = icon.name.to_string();
        Some(Selection {
            value: icon.name.to_string(),
            source: SelectionSource::Curated,
        })
    }

    pub fn custom(&self) -> &str {
        &self.custom
    }

    /// Edit the custom field; any preview is discarded
    pub fn set_custom(&mut self, custom: impl Into<String>) {
        self.custom = custom.into();
        self.preview = None;
    }

    /// Whether the custom value can be committed
    pub fn can_commit(&self) -> bool {
        !self.custom.trim().is_empty()
    }

    /// Render the custom identifier. Resolution failures show the fallback
    /// glyph and do not prevent committing.
    pub fn preview<R: IconRenderer>(&mut self, resolver: &IconResolver<R>) -> Option<&RenderedIcon> {
        let custom = self.custom.trim();
        if custom.is_empty() {
            return None;
        }
        let params = RenderParams::new(PREVIEW_ICON_SIZE, self.params.color.clone());
        self.preview = Some(resolver.load_icon_with(custom, params));
        self.preview.as_ref()
    }

    pub fn current_preview(&self) -> Option<&RenderedIcon> {
        self.preview.as_ref()
    }

    /// Commit the typed identifier as-is (trimmed) and reset the field
    pub fn commit_custom(&mut self) -> Option<Selection> {
        if !self.can_commit() {
            return None;
        }
        let value = self.custom.trim().to_string();
        self.custom.clear();
        self.preview = None;
        self.selected = value.clone();
        Some(Selection {
            value,
            source: SelectionSource::Custom,
        })
    }
}

impl Default for IconPicker {
    fn default() -> Self {
        Self::new(CatalogKind::default())
    }
}

/// Identifies one tab load so late results can be recognised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    prefix: String,
}

impl LoadTicket {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

/// Tab state of the library-backed picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabState {
    /// No tab chosen yet
    Idle,
    /// Waiting for the bundle of this prefix
    Loading(String),
    /// Bundle available (possibly empty after a failed load)
    Ready(Arc<IconBundle>),
}

/// Picker over whole icon library bundles, one tab per prefix
#[derive(Debug, Clone)]
pub struct LibraryPicker {
    tabs: Vec<String>,
    generation: u64,
    state: TabState,
    search: String,
}

impl LibraryPicker {
    pub fn new<S: Into<String>>(tabs: impl IntoIterator<Item = S>) -> Self {
        Self {
            tabs: tabs.into_iter().map(Into::into).collect(),
            generation: 0,
            state: TabState::Idle,
            search: String::new(),
        }
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    pub fn state(&self) -> &TabState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, TabState::Loading(_))
    }

    /// Start showing `prefix`. Any load still in flight becomes stale.
    pub fn switch_tab(&mut self, prefix: impl Into<String>) -> LoadTicket {
        let prefix = prefix.into();
        self.generation += 1;
        self.state = TabState::Loading(prefix.clone());
        LoadTicket {
            generation: self.generation,
            prefix,
        }
    }

    /// Apply a finished load. Returns `false` and drops the bundle when the
    /// ticket no longer belongs to the active tab.
    pub fn complete(&mut self, ticket: LoadTicket, bundle: Arc<IconBundle>) -> bool {
        if ticket.generation != self.generation {
            log::debug!("Discarding stale icon bundle '{}'", ticket.prefix);
            return false;
        }
        self.state = TabState::Ready(bundle);
        true
    }

    /// Switch to `prefix` and load it through `bundles`
    pub async fn open_tab<L: BundleLoader>(&mut self, prefix: &str, bundles: &BundleCache<L>) -> bool {
        let ticket = self.switch_tab(prefix);
        let bundle = bundles.get(prefix).await;
        self.complete(ticket, bundle)
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Export names of the active bundle matching the search text.
    /// Empty while loading.
    pub fn filtered(&self) -> Vec<String> {
        match &self.state {
            TabState::Ready(bundle) => bundle
                .search(&self.search)
                .into_iter()
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Choose an export name from the active bundle
    pub fn select(&self, name: &str) -> Option<Selection> {
        match &self.state {
            TabState::Ready(bundle) if bundle.icons.contains_key(name) => Some(Selection {
                value: name.to_string(),
                source: SelectionSource::Library,
            }),
            _ => None,
        }
    }
}
