//! On-demand icon library bundles
//!
//! A bundle is a whole icon library keyed by its short prefix (`"Fa"`,
//! `"Si"`, ...) mapping native export names (`"FaReact"`) to SVG markup.
//! Bundles are loaded lazily and kept in a [`ResolutionCache`] for the rest
//! of the session.

use std::collections::BTreeMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use serde::{Serialize, Deserialize};
use tokio::task;
use walkdir::WalkDir;

use crate::{
    cache::ResolutionCache,
    error::{IconResolveError, Result},
    render::svg_document,
    types::{CacheStatistics, RenderParams},
};

/// A loaded icon library
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconBundle {
    /// Library prefix this bundle was loaded for
    pub prefix: String,
    /// viewBox shared by every icon in the bundle
    #[serde(default = "default_view_box")]
    pub view_box: String,
    /// Native export name -> SVG body
    pub icons: BTreeMap<String, String>,
}

fn default_view_box() -> String {
    "0 0 24 24".to_string()
}

impl IconBundle {
    /// Bundle with no icons, used when a load fails
    pub fn empty(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            view_box: default_view_box(),
            icons: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.icons.keys().map(String::as_str)
    }

    /// Export names containing `query`, case-insensitive, in name order
    pub fn search(&self, query: &str) -> Vec<&str> {
        let query = query.to_lowercase();
        self.names()
            .filter(|name| name.to_lowercase().contains(&query))
            .collect()
    }

    /// SVG document for an export name
    pub fn render(&self, name: &str, params: &RenderParams) -> Option<String> {
        self.icons
            .get(name)
            .map(|body| svg_document(&self.view_box, body, params))
    }
}

/// Loads a library bundle by prefix
pub trait BundleLoader: Send + Sync {
    fn load(&self, prefix: &str) -> impl Future<Output = Result<IconBundle>> + Send;
}

/// Reads bundles from `<root>/<prefix>.json`
#[derive(Debug, Clone)]
pub struct DirectoryBundleLoader {
    root: PathBuf,
}

impl DirectoryBundleLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn bundle_path(&self, prefix: &str) -> Result<PathBuf> {
        let valid = !prefix.is_empty() && prefix.chars().all(|c| c.is_ascii_alphanumeric());
        if !valid {
            return Err(IconResolveError::BundleLoad {
                prefix: prefix.to_string(),
                reason: "prefix must be alphanumeric".to_string(),
            });
        }
        Ok(self.root.join(format!("{}.json", prefix)))
    }

    /// Prefixes of every bundle file under the root, sorted
    pub async fn available_prefixes(&self) -> Result<Vec<String>> {
        let root = self.root.clone();
        task::spawn_blocking(move || scan_bundles_sync(&root))
            .await
            .map_err(|e| IconResolveError::BundleLoad {
                prefix: String::new(),
                reason: e.to_string(),
            })?
    }
}

fn scan_bundles_sync(root: &Path) -> Result<Vec<String>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut prefixes: Vec<String> = WalkDir::new(root)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "json"))
        .filter_map(|entry| {
            entry
                .path()
                .file_stem()
                .and_then(|stem| stem.to_str())
                .map(str::to_string)
        })
        .collect();

    prefixes.sort();
    Ok(prefixes)
}

impl BundleLoader for DirectoryBundleLoader {
    async fn load(&self, prefix: &str) -> Result<IconBundle> {
        let path = self.bundle_path(prefix)?;
        let json = tokio::fs::read_to_string(&path).await?;
        let mut bundle: IconBundle = serde_json::from_str(&json)?;
        if bundle.prefix.is_empty() {
            bundle.prefix = prefix.to_string();
        }
        Ok(bundle)
    }
}

/// Loader plus per-prefix cache of loaded bundles
pub struct BundleCache<L> {
    loader: L,
    bundles: ResolutionCache<Arc<IconBundle>>,
}

impl<L: BundleLoader> BundleCache<L> {
    pub fn new(loader: L) -> Self {
        Self::with_cache(loader, ResolutionCache::new())
    }

    pub fn with_cache(loader: L, bundles: ResolutionCache<Arc<IconBundle>>) -> Self {
        Self { loader, bundles }
    }

    /// Cached bundle for `prefix`, loading it on first use.
    ///
    /// Concurrent first requests may both load; the last one stored wins.
    pub async fn try_get(&self, prefix: &str) -> Result<Arc<IconBundle>> {
        if let Some(bundle) = self.bundles.get(prefix) {
            return Ok(bundle);
        }

        let bundle = Arc::new(self.loader.load(prefix).await?);
        log::info!("Loaded icon bundle '{}' with {} icons", prefix, bundle.len());
        self.bundles.insert(prefix, bundle.clone());
        Ok(bundle)
    }

    /// Like [`try_get`](Self::try_get), but a failed load yields an empty
    /// bundle. Failures are not cached so a later call retries.
    pub async fn get(&self, prefix: &str) -> Arc<IconBundle> {
        match self.try_get(prefix).await {
            Ok(bundle) => bundle,
            Err(e) => {
                log::warn!("Failed to load icon bundle '{}': {}", prefix, e);
                Arc::new(IconBundle::empty(prefix))
            }
        }
    }

    pub fn is_loaded(&self, prefix: &str) -> bool {
        self.bundles.contains_key(prefix)
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn statistics(&self) -> CacheStatistics {
        self.bundles.statistics()
    }
}
