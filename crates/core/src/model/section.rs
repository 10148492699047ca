use lenslight_protocol::SharedStr;
use serde::{Deserialize, Serialize};

/// A named, vertically-stacked region of the single-page layout,
/// addressable by a unique identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SharedStr,
    pub label: SharedStr,
}

/// The fixed, ordered list of navigable page regions.
///
/// Defined once at startup and never mutated afterwards; registry order
/// is the order sections appear in the document and in the nav bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<SharedStr>,
    {
        Self {
            sections: pairs
                .into_iter()
                .map(|(id, label)| Section {
                    id: id.into(),
                    label: label.into(),
                })
                .collect(),
        }
    }

    /// The nav targets of the page. Testimonials renders between
    /// services and contact but is not a nav target, so it is absent.
    pub fn builtin() -> Self {
        Self::from_pairs([
            ("home", "Home"),
            ("portfolio", "Portfolio"),
            ("about", "About"),
            ("services", "Services"),
            ("contact", "Contact"),
        ])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The section deemed active before any visibility signal arrives:
    /// the first registered one.
    pub fn default_section(&self) -> Option<&Section> {
        self.sections.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_registry_order_and_default() {
        let registry = SectionRegistry::builtin();
        assert_eq!(registry.len(), 5);
        let ids: Vec<&str> = registry.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["home", "portfolio", "about", "services", "contact"]);
        assert_eq!(
            registry.default_section().map(|s| s.id.as_str()),
            Some("home")
        );
    }

    #[test]
    fn lookup() {
        let registry = SectionRegistry::builtin();
        assert!(registry.contains("about"));
        assert!(!registry.contains("testimonials"));
        assert_eq!(registry.get("contact").map(|s| s.label.as_str()), Some("Contact"));
        assert!(registry.get("blog").is_none());
    }
}
