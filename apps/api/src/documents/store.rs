use std::collections::BTreeMap;
use std::sync::{Arc, OnceLock};

/// Extracted brochure text keyed by program name.
pub type DocumentMap = BTreeMap<String, String>;

/// Readiness-aware holder of the loaded brochures.
///
/// Empty until the startup load publishes its result; readers before that
/// point get `None` instead of a partially filled map.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: OnceLock<Arc<DocumentMap>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store already holding `documents`.
    #[cfg(test)]
    pub fn ready(documents: DocumentMap) -> Self {
        let store = Self::new();
        store.publish(documents);
        store
    }

    /// Makes `documents` visible to readers. Only the first call has any effect;
    /// returns false if the store was already published.
    pub fn publish(&self, documents: DocumentMap) -> bool {
        self.documents.set(Arc::new(documents)).is_ok()
    }

    pub fn snapshot(&self) -> Option<Arc<DocumentMap>> {
        self.documents.get().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_is_not_ready_until_published() {
        let store = DocumentStore::new();
        assert!(store.snapshot().is_none());

        let mut docs = DocumentMap::new();
        docs.insert("MBA".to_string(), "texto".to_string());
        assert!(store.publish(docs));

        assert_eq!(store.snapshot().unwrap()["MBA"], "texto");
    }

    #[test]
    fn test_second_publish_is_ignored() {
        let store = DocumentStore::ready(DocumentMap::new());
        let mut docs = DocumentMap::new();
        docs.insert("late".to_string(), "x".to_string());

        assert!(!store.publish(docs));
        assert!(store.snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_empty_publish_still_counts_as_ready() {
        let store = DocumentStore::ready(DocumentMap::new());
        assert!(store.snapshot().is_some());
    }
}
