//! Case identifiers and the style registry
//!
//! The registry is a consumable mapping: the host supplies the set of
//! styles and their transform functions, this crate only looks them up and
//! iterates them. `CaseId` stays an opaque comparable token throughout;
//! nothing here validates membership against any particular set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque token naming a text-casing convention (e.g. `"camelCase"`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(String);

impl CaseId {
    /// Create an identifier from any string-like value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CaseId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CaseId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Pure text transform supplied by the host for one style
pub type CaseFn = Box<dyn Fn(&str) -> String + Send + Sync>;

/// A registered case style: identifier, display title, and transform
pub struct CaseStyle {
    id: CaseId,
    title: String,
    convert: CaseFn,
}

impl CaseStyle {
    /// Create a style entry
    pub fn new(
        id: impl Into<CaseId>,
        title: impl Into<String>,
        convert: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            convert: Box::new(convert),
        }
    }

    /// The style's identifier
    pub fn id(&self) -> &CaseId {
        &self.id
    }

    /// Human-readable title for display
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Apply the transform to a single segment of text
    pub fn convert(&self, input: &str) -> String {
        (self.convert)(input)
    }
}

impl fmt::Debug for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseStyle")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Ordered mapping from identifier to style
///
/// Registration order is preserved; it is the display order for styles that
/// are neither pinned nor recent.
#[derive(Debug, Default)]
pub struct CaseRegistry {
    styles: Vec<CaseStyle>,
}

impl CaseRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a style, replacing any existing entry with the same identifier
    pub fn register(&mut self, style: CaseStyle) {
        if let Some(existing) = self.styles.iter_mut().find(|s| s.id == style.id) {
            *existing = style;
        } else {
            self.styles.push(style);
        }
    }

    /// Look up a style by identifier
    pub fn get(&self, id: &CaseId) -> Option<&CaseStyle> {
        self.styles.iter().find(|s| &s.id == id)
    }

    /// Whether the registry holds a style for `id`
    pub fn contains(&self, id: &CaseId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate styles in registration order
    pub fn iter(&self) -> impl Iterator<Item = &CaseStyle> {
        self.styles.iter()
    }

    /// Iterate identifiers in registration order
    pub fn ids(&self) -> impl Iterator<Item = &CaseId> {
        self.styles.iter().map(|s| &s.id)
    }

    /// Number of registered styles
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_lookup() {
        let mut registry = CaseRegistry::new();
        registry.register(CaseStyle::new("upper", "Upper", |s| s.to_uppercase()));
        registry.register(CaseStyle::new("lower", "Lower", |s| s.to_lowercase()));

        let style = registry.get(&CaseId::new("upper")).unwrap();
        assert_eq!(style.convert("abc"), "ABC");
        assert_eq!(style.title(), "Upper");
        assert!(!registry.contains(&CaseId::new("missing")));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn register_replaces_same_id() {
        let mut registry = CaseRegistry::new();
        registry.register(CaseStyle::new("x", "First", |s| s.to_string()));
        registry.register(CaseStyle::new("x", "Second", |s| s.to_string()));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&CaseId::new("x")).unwrap().title(), "Second");
    }

    #[test]
    fn registration_order_preserved() {
        let mut registry = CaseRegistry::new();
        for id in ["c", "a", "b"] {
            registry.register(CaseStyle::new(id, id, |s| s.to_string()));
        }

        let ids: Vec<&str> = registry.ids().map(CaseId::as_str).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }
}
