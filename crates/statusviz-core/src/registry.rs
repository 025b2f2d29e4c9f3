//! Status-code to color mapping for the particle visualizer.

use std::collections::BTreeMap;

/// Mapping from HTTP-like status codes to CSS color strings.
///
/// Colors are stored trimmed and lowercased. Any string is accepted as a
/// color value; CSS validity is the front-end's concern. Keys follow plain
/// map semantics -- last write wins. Lookups during event generation read
/// whatever value is present at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusColorRegistry {
    colors: BTreeMap<u16, String>,
}

impl StatusColorRegistry {
    /// Create a registry with no configured codes.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    /// The seed palette applied at process start.
    #[must_use]
    pub fn default_seed() -> BTreeMap<u16, String> {
        let mut colors = BTreeMap::new();
        colors.insert(200, String::from("green"));
        colors.insert(404, String::from("red"));
        colors.insert(500, String::from("yellow"));
        colors.insert(303, String::from("blue"));
        colors
    }

    /// Return the configured color for `code`, if any. No side effects.
    #[must_use]
    pub fn lookup(&self, code: u16) -> Option<&str> {
        self.colors.get(&code).map(String::as_str)
    }

    /// Normalize `color` (trim surrounding whitespace, lowercase) and store
    /// it for `code`, overwriting any previous mapping.
    ///
    /// Always succeeds; the color syntax is not validated. Returns the
    /// value actually stored.
    pub fn upsert(&mut self, code: u16, color: &str) -> String {
        let normalized = color.trim().to_lowercase();
        self.colors.insert(code, normalized.clone());
        normalized
    }

    /// An independent copy of the full current mapping.
    ///
    /// Mutating the copy has no effect on the registry.
    #[must_use]
    pub fn snapshot(&self) -> BTreeMap<u16, String> {
        self.colors.clone()
    }

    /// Number of configured codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no codes are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for StatusColorRegistry {
    fn default() -> Self {
        Self {
            colors: Self::default_seed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_is_seeded() {
        let registry = StatusColorRegistry::default();
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.lookup(200), Some("green"));
        assert_eq!(registry.lookup(404), Some("red"));
        assert_eq!(registry.lookup(500), Some("yellow"));
        assert_eq!(registry.lookup(303), Some("blue"));
    }

    #[test]
    fn lookup_absent_code_is_none() {
        let registry = StatusColorRegistry::default();
        assert_eq!(registry.lookup(999), None);
    }

    #[test]
    fn upsert_normalizes_case_and_whitespace() {
        let mut registry = StatusColorRegistry::empty();
        let stored = registry.upsert(418, " HotPink ");
        assert_eq!(stored, "hotpink");
        assert_eq!(registry.lookup(418), Some("hotpink"));
    }

    #[test]
    fn upsert_overwrites_existing_mapping() {
        let mut registry = StatusColorRegistry::default();
        registry.upsert(200, "purple");
        assert_eq!(registry.lookup(200), Some("purple"));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn upsert_accepts_any_string() {
        let mut registry = StatusColorRegistry::empty();
        assert_eq!(registry.upsert(7, "not a css color"), "not a css color");
        assert_eq!(registry.upsert(0, "#FF00AA"), "#ff00aa");
    }

    #[test]
    fn snapshot_is_an_independent_copy() {
        let mut registry = StatusColorRegistry::default();
        let snapshot = registry.snapshot();
        registry.upsert(418, "hotpink");
        assert_eq!(snapshot.len(), 4);
        assert!(!snapshot.contains_key(&418));
    }
}
