//! Record-type registry.
//!
//! The set of record types the service manages is enumerated here explicitly
//! and constructed exactly once at process start (first access). Each
//! descriptor carries the table name, whether records of that type can hold
//! an external asset reference, and the derived-field recompute rules that
//! `create`/`update` apply before persistence.

use std::sync::OnceLock;

/// The record types managed by this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Blog,
    Video,
    Contact,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Blog => "blog",
            ContentKind::Video => "video",
            ContentKind::Contact => "contact",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A derived column recomputed from a source field on every write that
/// touches the source.
pub struct DerivedField {
    pub source: &'static str,
    pub target: &'static str,
    pub apply: fn(&str) -> String,
}

/// Static description of one record type.
pub struct RecordTypeDescriptor {
    pub kind: ContentKind,
    pub table: &'static str,
    pub has_asset: bool,
    pub derived: &'static [DerivedField],
}

impl RecordTypeDescriptor {
    /// Recompute the derived value for `target` from `value`, if this type
    /// defines such a rule.
    pub fn recompute(&self, target: &str, value: &str) -> Option<String> {
        self.derived
            .iter()
            .find(|d| d.target == target)
            .map(|d| (d.apply)(value))
    }
}

/// Registry over all record types.
pub struct RecordTypeRegistry {
    types: [RecordTypeDescriptor; 3],
}

impl RecordTypeRegistry {
    pub fn descriptor(&self, kind: ContentKind) -> &RecordTypeDescriptor {
        self.types
            .iter()
            .find(|d| d.kind == kind)
            .expect("registry covers every ContentKind")
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordTypeDescriptor> {
        self.types.iter()
    }
}

/// Lowercase transform backing the title search key.
pub fn search_key(title: &str) -> String {
    title.to_lowercase()
}

const TITLE_SEARCH_KEY: &[DerivedField] = &[DerivedField {
    source: "title",
    target: "search_title",
    apply: search_key,
}];

/// Global registry, constructed once. Repeated calls return the same
/// instance, so bootstrap is idempotent.
pub fn record_registry() -> &'static RecordTypeRegistry {
    static REGISTRY: OnceLock<RecordTypeRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| RecordTypeRegistry {
        types: [
            RecordTypeDescriptor {
                kind: ContentKind::Blog,
                table: "blogs",
                has_asset: true,
                derived: TITLE_SEARCH_KEY,
            },
            RecordTypeDescriptor {
                kind: ContentKind::Video,
                table: "videos",
                has_asset: true,
                derived: TITLE_SEARCH_KEY,
            },
            RecordTypeDescriptor {
                kind: ContentKind::Contact,
                table: "contacts",
                has_asset: false,
                derived: &[],
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_is_idempotent() {
        let a = record_registry() as *const RecordTypeRegistry;
        let b = record_registry() as *const RecordTypeRegistry;
        assert_eq!(a, b);
    }

    #[test]
    fn search_key_is_lowercase_title() {
        assert_eq!(search_key("Getting Started With Rust"), "getting started with rust");
        assert_eq!(search_key("ÀÉÎ"), "àéî");
    }

    #[test]
    fn blog_and_video_derive_search_title() {
        let registry = record_registry();
        let blog = registry.descriptor(ContentKind::Blog);
        assert_eq!(blog.table, "blogs");
        assert!(blog.has_asset);
        assert_eq!(
            blog.recompute("search_title", "Hello World"),
            Some("hello world".to_string())
        );

        let video = registry.descriptor(ContentKind::Video);
        assert_eq!(
            video.recompute("search_title", "MiXeD"),
            Some("mixed".to_string())
        );
    }

    #[test]
    fn contacts_have_no_asset_and_no_derived_fields() {
        let contact = record_registry().descriptor(ContentKind::Contact);
        assert!(!contact.has_asset);
        assert_eq!(contact.recompute("search_title", "x"), None);
    }
}
