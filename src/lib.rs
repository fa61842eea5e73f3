//! Icon identifier resolution for the portfolio site
//!
//! Turns loosely specified icon names (`"TbBrandMysql"`, `"FaReact"`,
//! `"tabler:brand-mysql"`) into rendered SVG glyphs, degrading to a generic
//! placeholder glyph whenever a name cannot be resolved or drawn.

pub mod types;
pub mod error;
pub mod config;
pub mod tables;
pub mod normalize;
pub mod cache;
pub mod render;
pub mod builtin;
pub mod fallback;
pub mod bundle;
pub mod resolver;
pub mod catalog;
pub mod picker;

pub use bundle::{BundleCache, BundleLoader, DirectoryBundleLoader, IconBundle};
pub use cache::{CachingNormalizer, Clock, EvictionPolicy, MaxAge, NeverEvict, ResolutionCache, SystemClock};
pub use catalog::CatalogKind;
pub use config::{ResolverConfig, DEFAULT_FALLBACK_IDENTIFIER};
pub use error::{IconResolveError, RenderError, Result};
pub use fallback::FallbackPolicy;
pub use normalize::{split_prefix, to_kebab_case, Normalizer};
pub use picker::{IconPicker, LibraryPicker, LoadTicket, Selection, SelectionSource, TabState};
pub use render::{escape_attribute, IconRenderer, IconSet, IconSetRenderer};
pub use resolver::IconResolver;
pub use tables::{AliasTable, PrefixTable};
pub use types::{CacheStatistics, CuratedIcon, RenderParams, RenderedIcon, ResolvedIcon, ResolvedName};
