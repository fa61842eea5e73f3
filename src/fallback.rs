//! Fallback policy
//!
//! Every icon is rendered inside its own boundary: a failure substitutes the
//! fallback glyph for that icon only, with the caller's size and color.

use std::sync::Arc;

use crate::{
    builtin::{self, BuiltinRenderer},
    error::RenderError,
    render::IconRenderer,
    types::{CanonicalName, RenderParams, RenderedIcon, ResolvedIcon, BUILTIN_NAMESPACE},
};

/// Substitutes a placeholder glyph for icons that cannot be drawn
#[derive(Debug, Clone)]
pub struct FallbackPolicy {
    fallback_identifier: Arc<str>,
}

impl FallbackPolicy {
    pub fn new(fallback_identifier: impl Into<Arc<str>>) -> Self {
        Self { fallback_identifier: fallback_identifier.into() }
    }

    pub fn fallback_identifier(&self) -> &str {
        &self.fallback_identifier
    }

    /// Render one icon; never fails
    pub fn render<R: IconRenderer + ?Sized>(&self, renderer: &R, icon: &ResolvedIcon) -> RenderedIcon {
        match try_render(renderer, icon) {
            Ok(rendered) => rendered,
            Err(e) => {
                log::debug!("Rendering '{}' failed, using fallback: {}", icon.identifier, e);
                self.fallback(renderer, &icon.params)
            }
        }
    }

    /// Render each icon in isolation. The output has one entry per input.
    pub fn render_all<R: IconRenderer + ?Sized>(&self, renderer: &R, icons: &[ResolvedIcon]) -> Vec<RenderedIcon> {
        icons.iter().map(|icon| self.render(renderer, icon)).collect()
    }

    /// The fallback glyph at the given size and color.
    ///
    /// A configured fallback the renderer cannot draw degrades to the
    /// builtin code glyph.
    pub fn fallback<R: IconRenderer + ?Sized>(&self, renderer: &R, params: &RenderParams) -> RenderedIcon {
        let icon = ResolvedIcon::new(self.fallback_identifier.clone(), params.clone());
        match try_render(renderer, &icon) {
            Ok(mut rendered) => {
                rendered.is_fallback = true;
                rendered
            }
            Err(e) => {
                log::debug!("Fallback '{}' unavailable: {}", self.fallback_identifier, e);
                builtin::code_tags(params, true)
            }
        }
    }
}

impl Default for FallbackPolicy {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_FALLBACK_IDENTIFIER)
    }
}

/// Builtin glyphs first, then the supplied backend
pub fn try_render<R: IconRenderer + ?Sized>(
    renderer: &R,
    icon: &ResolvedIcon,
) -> Result<RenderedIcon, RenderError> {
    match CanonicalName::parse(&icon.identifier) {
        Some(canonical) if canonical.namespace == BUILTIN_NAMESPACE => BuiltinRenderer.render(icon),
        _ => renderer.render(icon),
    }
}
