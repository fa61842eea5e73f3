//! Prefix and alias tables driving name normalization

use ahash::{AHashMap, AHashSet};
use serde::{Serialize, Deserialize};

use crate::types::BUILTIN_NAMESPACE;

/// Library prefixes of the react-icons naming scheme and the Iconify
/// namespace each one maps to.
const DEFAULT_PREFIXES: &[(&str, &str)] = &[
    ("Fa", "fa"),
    ("Fa6", "fa6"),
    ("Io", "ion"),
    ("Si", "simple-icons"),
    ("Di", "devicon"),
    ("Bs", "bi"),
    ("Ri", "ri"),
    ("Md", "mdi"),
    ("Ai", "ant-design"),
    ("Bi", "bx"),
    ("Fi", "feather"),
    ("Gi", "game-icons"),
    ("Go", "octicon"),
    ("Hi", "heroicons-outline"),
    ("Hi2", "heroicons"),
    ("Lu", "lucide"),
    ("Pi", "ph"),
    ("Tb", "tabler"),
    ("Ti", "typcn"),
    ("Vsc", "codicon"),
    ("Cg", "css-gg"),
    ("Fc", "flat-color-icons"),
    ("Gr", "grommet-icons"),
    ("Im", "icomoon-free"),
    ("Rx", "radix-icons"),
    ("Sl", "simple-line-icons"),
    ("Tfi", "tabler"),
    ("Wi", "wi"),
    ("Ci", "ci"),
    ("Lia", "la"),
];

/// Identifiers that render the embedded React logo instead of a library icon
const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("React", "builtin:react-logo"),
    ("react", "builtin:react-logo"),
    ("REACT", "builtin:react-logo"),
    ("FaReact", "builtin:react-logo"),
    ("SiReact", "builtin:react-logo"),
    ("SiReactnative", "builtin:react-logo"),
    ("SiReactNative", "builtin:react-logo"),
    ("react-native", "builtin:react-logo"),
];

/// Short library prefix -> canonical namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefixTable {
    entries: AHashMap<String, String>,
}

impl PrefixTable {
    /// Create an empty table
    pub fn empty() -> Self {
        Self { entries: AHashMap::new() }
    }

    /// Add or replace a prefix mapping
    pub fn insert(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        self.entries.insert(prefix.into(), namespace.into());
    }

    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.entries.get(prefix).map(String::as_str)
    }

    /// Prefixes that must be matched before the two-character split,
    /// longest first. Ties are ordered alphabetically so the order is stable.
    pub fn long_prefixes(&self) -> Vec<&str> {
        let mut long: Vec<&str> = self
            .entries
            .keys()
            .map(String::as_str)
            .filter(|prefix| prefix.chars().count() >= 3)
            .collect();
        long.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then(a.cmp(b)));
        long
    }

    /// Whether `namespace` is the target of some prefix (or the builtin set)
    pub fn knows_namespace(&self, namespace: &str) -> bool {
        namespace == BUILTIN_NAMESPACE || self.entries.values().any(|ns| ns == namespace)
    }

    /// Distinct namespaces reachable through this table
    pub fn namespaces(&self) -> AHashSet<&str> {
        self.entries.values().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PrefixTable {
    fn default() -> Self {
        DEFAULT_PREFIXES.iter().copied().collect()
    }
}

impl<P: Into<String>, N: Into<String>> FromIterator<(P, N)> for PrefixTable {
    fn from_iter<I: IntoIterator<Item = (P, N)>>(iter: I) -> Self {
        let mut table = Self::empty();
        for (prefix, namespace) in iter {
            table.insert(prefix, namespace);
        }
        table
    }
}

/// Exact identifier -> canonical identifier overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    entries: AHashMap<String, String>,
}

impl AliasTable {
    pub fn empty() -> Self {
        Self { entries: AHashMap::new() }
    }

    pub fn insert(&mut self, identifier: impl Into<String>, canonical: impl Into<String>) {
        self.entries.insert(identifier.into(), canonical.into());
    }

    /// Case-sensitive exact lookup
    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        DEFAULT_ALIASES.iter().copied().collect()
    }
}

impl<I: Into<String>, C: Into<String>> FromIterator<(I, C)> for AliasTable {
    fn from_iter<T: IntoIterator<Item = (I, C)>>(iter: T) -> Self {
        let mut table = Self::empty();
        for (identifier, canonical) in iter {
            table.insert(identifier, canonical);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_prefixes_are_sorted_longest_first() {
        let table: PrefixTable = [("Ab", "ab"), ("Abcd", "abcd"), ("Fa6", "fa6"), ("Abc", "abc")]
            .into_iter()
            .collect();
        assert_eq!(table.long_prefixes(), vec!["Abcd", "Abc", "Fa6"]);
    }

    #[test]
    fn test_default_prefixes_include_three_char_set() {
        let table = PrefixTable::default();
        let long = table.long_prefixes();
        for prefix in ["Lia", "Tfi", "Hi2", "Fa6", "Vsc"] {
            assert!(long.contains(&prefix), "missing {prefix}");
        }
        assert_eq!(table.namespace("Tb"), Some("tabler"));
        assert_eq!(table.namespace("tb"), None);
    }

    #[test]
    fn test_knows_namespace() {
        let table = PrefixTable::default();
        assert!(table.knows_namespace("simple-icons"));
        assert!(table.knows_namespace(BUILTIN_NAMESPACE));
        assert!(!table.knows_namespace("xy"));
    }

    #[test]
    fn test_alias_lookup_is_case_sensitive() {
        let aliases = AliasTable::default();
        assert_eq!(aliases.get("FaReact"), Some("builtin:react-logo"));
        assert_eq!(aliases.get("fareact"), None);
    }

    #[test]
    fn test_react_aliases_cover_common_casings() {
        let aliases = AliasTable::default();
        for name in ["React", "react", "REACT", "SiReactnative", "SiReactNative", "react-native"] {
            assert_eq!(aliases.get(name), Some("builtin:react-logo"), "{name}");
        }
    }
}
