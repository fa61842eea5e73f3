//! Glyphs compiled into the crate
//!
//! These never depend on an icon set being loaded, which makes them safe to
//! use as the last line of the fallback chain.

use crate::{
    error::RenderError,
    render::{svg_document, IconRenderer},
    types::{CanonicalName, RenderParams, RenderedIcon, ResolvedIcon, BUILTIN_NAMESPACE},
};

/// Local name of the generic "code" glyph
pub const CODE_TAGS: &str = "code-tags";

/// Local name of the React logo glyph
pub const REACT_LOGO: &str = "react-logo";

const CODE_TAGS_VIEW_BOX: &str = "0 0 24 24";
const CODE_TAGS_BODY: &str = r#"<path fill="currentColor" d="M14.6 16.6l4.6-4.6l-4.6-4.6L16 6l6 6l-6 6l-1.4-1.4m-5.2 0L4.8 12l4.6-4.6L8 6l-6 6l6 6l1.4-1.4Z"/>"#;

const REACT_LOGO_VIEW_BOX: &str = "-11.5 -10.23174 23 20.46348";
const REACT_LOGO_BODY: &str = concat!(
    r#"<title>React</title>"#,
    r#"<circle cx="0" cy="0" r="2.05" fill="currentColor"/>"#,
    r#"<g stroke="currentColor" fill="none" stroke-width="0.75">"#,
    r#"<ellipse rx="11" ry="4.2"/>"#,
    r#"<ellipse rx="11" ry="4.2" transform="rotate(60)"/>"#,
    r#"<ellipse rx="11" ry="4.2" transform="rotate(120)"/>"#,
    r#"</g>"#,
);

/// `(view_box, body)` for a builtin glyph
pub fn glyph(name: &str) -> Option<(&'static str, &'static str)> {
    match name {
        CODE_TAGS => Some((CODE_TAGS_VIEW_BOX, CODE_TAGS_BODY)),
        REACT_LOGO => Some((REACT_LOGO_VIEW_BOX, REACT_LOGO_BODY)),
        _ => None,
    }
}

/// Names of every builtin glyph
pub fn names() -> &'static [&'static str] {
    &[CODE_TAGS, REACT_LOGO]
}

/// The always-available fallback glyph
pub fn code_tags(params: &RenderParams, is_fallback: bool) -> RenderedIcon {
    RenderedIcon {
        identifier: format!("{}:{}", BUILTIN_NAMESPACE, CODE_TAGS).into(),
        svg: svg_document(CODE_TAGS_VIEW_BOX, CODE_TAGS_BODY, params),
        params: params.clone(),
        is_fallback,
    }
}

/// Renders identifiers in the `builtin` namespace
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinRenderer;

impl IconRenderer for BuiltinRenderer {
    fn render(&self, icon: &ResolvedIcon) -> Result<RenderedIcon, RenderError> {
        let canonical = CanonicalName::parse(&icon.identifier)
            .ok_or_else(|| RenderError::InvalidIdentifier(icon.identifier.to_string()))?;
        if canonical.namespace != BUILTIN_NAMESPACE {
            return Err(RenderError::UnknownNamespace(canonical.namespace.to_string()));
        }

        let (view_box, body) = glyph(canonical.name).ok_or_else(|| RenderError::IconNotFound {
            namespace: BUILTIN_NAMESPACE.to_string(),
            name: canonical.name.to_string(),
        })?;

        Ok(RenderedIcon {
            identifier: icon.identifier.clone(),
            svg: svg_document(view_box, body, &icon.params),
            params: icon.params.clone(),
            is_fallback: false,
        })
    }
}
