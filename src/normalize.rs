//! Name normalization: react-icons style names to canonical identifiers
//!
//! `"TbBrandMysql"` is split into the library prefix `"Tb"` and the local
//! name `"BrandMysql"`, the prefix is looked up in the [`PrefixTable`] and the
//! local name is kebab-cased, giving `"tabler:brand-mysql"`.

use std::sync::OnceLock;
use regex::Regex;

use crate::{
    config::ResolverConfig,
    error::{IconResolveError, Result},
    tables::PrefixTable,
    types::{CanonicalName, ResolvedName},
};

static LOWER_UPPER: OnceLock<Regex> = OnceLock::new();
static ACRONYM_BOUNDARY: OnceLock<Regex> = OnceLock::new();

fn lower_upper_pattern() -> &'static Regex {
    LOWER_UPPER.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap())
}

fn acronym_boundary_pattern() -> &'static Regex {
    ACRONYM_BOUNDARY.get_or_init(|| Regex::new(r"([A-Z])([A-Z][a-z])").unwrap())
}

/// Convert a mixed/Pascal case name to lowercase hyphen-separated form.
///
/// `"BrandMysql"` -> `"brand-mysql"`, `"ABCDef"` -> `"abc-def"`,
/// `"HTML5"` -> `"html5"`.
pub fn to_kebab_case(name: &str) -> String {
    let split = lower_upper_pattern().replace_all(name, "$1-$2");
    let split = acronym_boundary_pattern().replace_all(&split, "$1-$2");
    split.to_lowercase()
}

/// Split an identifier into `(prefix, local_name)`.
///
/// Known prefixes of three or more characters win over the two-character
/// split, so `"Fa6Github"` is `("Fa6", "Github")` and never `("Fa", "6Github")`.
pub fn split_prefix<'a>(identifier: &'a str, prefixes: &PrefixTable) -> (&'a str, &'a str) {
    for prefix in prefixes.long_prefixes() {
        if let Some(rest) = identifier.strip_prefix(prefix) {
            return (&identifier[..prefix.len()], rest);
        }
    }

    let split_at = identifier
        .char_indices()
        .nth(2)
        .map(|(idx, _)| idx)
        .unwrap_or(identifier.len());
    identifier.split_at(split_at)
}

/// Converts raw identifiers into canonical `namespace:kebab-name` form
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: ResolverConfig,
}

impl Normalizer {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn fallback_identifier(&self) -> &str {
        &self.config.fallback_identifier
    }

    /// Normalize, substituting the fallback identifier for anything that
    /// cannot be resolved. Never fails.
    pub fn normalize(&self, identifier: &str) -> String {
        self.resolve(identifier).canonical.to_string()
    }

    /// Normalize, recording whether the fallback identifier was substituted
    pub fn resolve(&self, identifier: &str) -> ResolvedName {
        match self.try_normalize(identifier) {
            Ok(canonical) => ResolvedName { canonical: canonical.into(), is_fallback: false },
            Err(err) => {
                if let IconResolveError::UnknownPrefix { prefix, identifier } = &err {
                    log::warn!("Unknown prefix: {} for icon {}", prefix, identifier);
                }
                ResolvedName {
                    canonical: self.config.fallback_identifier.as_str().into(),
                    is_fallback: true,
                }
            }
        }
    }

    /// Normalize, reporting why resolution failed
    pub fn try_normalize(&self, identifier: &str) -> Result<String> {
        let trimmed = identifier.trim();
        if trimmed.is_empty() {
            return Err(IconResolveError::EmptyInput);
        }

        if let Some(aliased) = self.config.aliases.get(trimmed) {
            return Ok(aliased.to_string());
        }

        // Stored values may already be canonical
        if let Some(canonical) = CanonicalName::parse(trimmed) {
            if self.config.knows_namespace(canonical.namespace) {
                return Ok(trimmed.to_string());
            }
        }

        let (prefix, name) = split_prefix(trimmed, &self.config.prefixes);
        let namespace = self.config.prefixes.namespace(prefix).ok_or_else(|| {
            IconResolveError::UnknownPrefix {
                prefix: prefix.to_string(),
                identifier: trimmed.to_string(),
            }
        })?;

        Ok(format!("{}:{}", namespace, to_kebab_case(name)))
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FALLBACK_IDENTIFIER;
    use crate::tables::AliasTable;

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("BrandMysql"), "brand-mysql");
        assert_eq!(to_kebab_case("ABCDef"), "abc-def");
        assert_eq!(to_kebab_case("HTML5"), "html5");
        assert_eq!(to_kebab_case("Html5Parser"), "html5-parser");
        assert_eq!(to_kebab_case("Css3Alt"), "css3-alt");
        assert_eq!(to_kebab_case("GitAlt"), "git-alt");
        assert_eq!(to_kebab_case(""), "");
    }

    #[test]
    fn test_to_kebab_case_is_idempotent() {
        for input in ["BrandMysql", "HTMLParser", "NodeJs", "brand-mysql", "a-b-c"] {
            let once = to_kebab_case(input);
            assert_eq!(to_kebab_case(&once), once);
        }
    }

    #[test]
    fn test_split_prefix_prefers_long_prefixes() {
        let prefixes = PrefixTable::default();
        assert_eq!(split_prefix("Fa6Github", &prefixes), ("Fa6", "Github"));
        assert_eq!(split_prefix("Hi2Home", &prefixes), ("Hi2", "Home"));
        assert_eq!(split_prefix("VscCode", &prefixes), ("Vsc", "Code"));
        assert_eq!(split_prefix("FaGithub", &prefixes), ("Fa", "Github"));
        assert_eq!(split_prefix("X", &prefixes), ("X", ""));
    }

    #[test]
    fn test_split_prefix_respects_char_boundaries() {
        let prefixes = PrefixTable::default();
        assert_eq!(split_prefix("ÉtÉté", &prefixes), ("Ét", "Été"));
    }

    #[test]
    fn test_normalize_end_to_end() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize("TbBrandMysql"), "tabler:brand-mysql");
        assert_eq!(normalizer.normalize("  SiDocker "), "simple-icons:docker");
        assert_eq!(normalizer.normalize("Fa6Github"), "fa6:github");
        assert_eq!(normalizer.normalize("LiaJava"), "la:java");
        assert_eq!(normalizer.normalize("TfiWrite"), "tabler:write");
        assert_eq!(normalizer.normalize("FaCss3Alt"), "fa:css3-alt");
    }

    #[test]
    fn test_alias_wins_over_mechanical_derivation() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize("FaReact"), "builtin:react-logo");
        assert_ne!(normalizer.normalize("FaReact"), "fa:react");
        assert_eq!(normalizer.normalize("FaVuejs"), "fa:vuejs");
        assert_eq!(normalizer.normalize("SiReactNative"), "builtin:react-logo");
        assert_eq!(normalizer.normalize("REACT"), "builtin:react-logo");
    }

    #[test]
    fn test_unknown_prefix_falls_back() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize("XyUnknownIcon"), DEFAULT_FALLBACK_IDENTIFIER);
        assert!(matches!(
            normalizer.try_normalize("XyUnknownIcon"),
            Err(IconResolveError::UnknownPrefix { ref prefix, .. }) if prefix == "Xy"
        ));
    }

    #[test]
    fn test_blank_input_falls_back() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize(""), DEFAULT_FALLBACK_IDENTIFIER);
        assert_eq!(normalizer.normalize("   "), DEFAULT_FALLBACK_IDENTIFIER);
        assert!(matches!(normalizer.try_normalize("\t"), Err(IconResolveError::EmptyInput)));
    }

    #[test]
    fn test_resolve_flags_substitution_only() {
        let normalizer = Normalizer::default();
        let requested = normalizer.resolve(DEFAULT_FALLBACK_IDENTIFIER);
        assert_eq!(&*requested.canonical, DEFAULT_FALLBACK_IDENTIFIER);
        assert!(!requested.is_fallback);

        let substituted = normalizer.resolve("XyUnknownIcon");
        assert_eq!(&*substituted.canonical, DEFAULT_FALLBACK_IDENTIFIER);
        assert!(substituted.is_fallback);
    }

    #[test]
    fn test_canonical_input_passes_through() {
        let normalizer = Normalizer::default();
        assert_eq!(normalizer.normalize("tabler:brand-mysql"), "tabler:brand-mysql");
        assert_eq!(normalizer.normalize("builtin:react-logo"), "builtin:react-logo");
        // Namespaces used by the curated lists are accepted too
        assert_eq!(normalizer.normalize("fa-brands:java"), "fa-brands:java");
        // Unknown namespace goes through the mechanical path and fails there
        assert_eq!(normalizer.normalize("xy:thing"), DEFAULT_FALLBACK_IDENTIFIER);
    }

    #[test]
    fn test_custom_tables() {
        let config = ResolverConfig::new()
            .with_prefixes([("Abcd", "long"), ("Ab", "short")].into_iter().collect())
            .with_aliases(AliasTable::empty());
        let normalizer = Normalizer::new(config);
        assert_eq!(normalizer.normalize("AbcdThing"), "long:thing");
        assert_eq!(normalizer.normalize("AbThing"), "short:thing");
        assert_eq!(normalizer.normalize("FaReact"), DEFAULT_FALLBACK_IDENTIFIER);
    }
}
