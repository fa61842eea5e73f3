//! Resolver facade: normalize, cache, render, fall back

use std::sync::Arc;

use crate::{
    cache::CachingNormalizer,
    config::ResolverConfig,
    error::Result,
    fallback::{self, FallbackPolicy},
    normalize::Normalizer,
    render::IconRenderer,
    types::{RenderParams, RenderedIcon, ResolvedIcon},
};

/// Resolves loosely specified identifiers into rendered icons.
///
/// Owns its name cache, so independent resolvers never share state. Wrap it
/// in an `Arc` to share one across consumers.
pub struct IconResolver<R> {
    names: CachingNormalizer,
    fallback: FallbackPolicy,
    renderer: R,
    default_params: RenderParams,
}

impl<R: IconRenderer> IconResolver<R> {
    pub fn new(config: ResolverConfig, renderer: R) -> Self {
        let fallback = FallbackPolicy::new(config.fallback_identifier.as_str());
        let default_params = config.default_params();
        Self {
            names: CachingNormalizer::new(Normalizer::new(config)),
            fallback,
            renderer,
            default_params,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn names(&self) -> &CachingNormalizer {
        &self.names
    }

    pub fn fallback_policy(&self) -> &FallbackPolicy {
        &self.fallback
    }

    pub fn default_params(&self) -> &RenderParams {
        &self.default_params
    }

    /// Canonical identifier, memoized by the raw input
    pub fn canonical(&self, identifier: &str) -> Arc<str> {
        self.names.resolve(identifier)
    }

    /// Canonical identifier paired with render parameters
    pub fn resolve(&self, identifier: &str, params: RenderParams) -> ResolvedIcon {
        ResolvedIcon::new(self.canonical(identifier), params)
    }

    /// Render an identifier with the configured default size and color
    pub fn load_icon(&self, identifier: &str) -> RenderedIcon {
        self.load_icon_with(identifier, self.default_params.clone())
    }

    /// Render an identifier; anything unresolvable becomes the fallback glyph
    pub fn load_icon_with(&self, identifier: &str, params: RenderParams) -> RenderedIcon {
        let name = self.names.resolve_name(identifier);
        if name.is_fallback {
            return self.fallback.fallback(&self.renderer, &params);
        }
        self.fallback.render(&self.renderer, &ResolvedIcon::new(name.canonical, params))
    }

    /// Async form of [`load_icon_with`](Self::load_icon_with). Resolution is
    /// synchronous; this exists so callers can treat both loading paths alike.
    pub async fn load_icon_async(&self, identifier: &str, params: RenderParams) -> RenderedIcon {
        self.load_icon_with(identifier, params)
    }

    /// Render every identifier in isolation, one output per input
    pub fn load_icons<S: AsRef<str>>(&self, identifiers: &[S], params: &RenderParams) -> Vec<RenderedIcon> {
        identifiers
            .iter()
            .map(|identifier| self.load_icon_with(identifier.as_ref(), params.clone()))
            .collect()
    }

    /// Render an identifier that is already canonical, skipping normalization
    pub fn render_canonical(&self, canonical: &str, params: RenderParams) -> RenderedIcon {
        self.fallback.render(&self.renderer, &ResolvedIcon::new(canonical, params))
    }

    /// Resolve and render without substituting the fallback glyph
    pub fn try_load_icon(&self, identifier: &str, params: RenderParams) -> Result<RenderedIcon> {
        let canonical = self.names.normalizer().try_normalize(identifier)?;
        let icon = ResolvedIcon::new(canonical, params);
        Ok(fallback::try_render(&self.renderer, &icon)?)
    }
}
