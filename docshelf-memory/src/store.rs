//! In-memory storage implementation for the document store.
//!
//! Documents live in a `Vec` in insertion order, with a `HashMap` from id to
//! position so upserts and lookups do not scan.

use std::collections::HashMap;

use tracing::{debug, trace};

use docshelf_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::Document,
    query::Criterion,
};

use crate::evaluator::DocumentEvaluator;

/// Ordered in-memory document storage backend.
///
/// # Ordering
///
/// Documents keep the position at which they were first inserted. Replacing a
/// document writes into the existing slot, so search results keep their order
/// across upserts.
///
/// Documents without a non-empty id are kept but never indexed, so they can
/// be searched but not looked up.
///
/// # Performance
///
/// Upserts and lookups by id are O(1). Queries scan every document (no indexing),
/// which is fine for the small collections this store is meant for.
///
/// # Example
///
/// ```ignore
/// use docshelf::prelude::*;
///
/// let mut backend = InMemoryStore::new();
///
/// backend.insert_document(Document::builder().id("d1").build());
/// assert!(backend.get_document("d1").is_some());
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// Documents in insertion order
    documents: Vec<Document>,
    /// document id -> position in `documents`
    positions: HashMap<String, usize>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with room for `capacity` documents.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            documents: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore` with custom options.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use docshelf::prelude::*;
    ///
    /// let backend = InMemoryStore::builder().with_capacity(64).build();
    /// ```
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }

    fn push(&mut self, key: Option<String>, document: Document) -> &Document {
        let position = self.documents.len();

        if let Some(key) = key {
            self.positions.insert(key, position);
        }
        self.documents.push(document);

        &self.documents[position]
    }
}

/// Index key of a document. Documents without a non-empty id are stored but never indexed.
fn key_of(document: &Document) -> Option<String> {
    document
        .id()
        .map(str::to_string)
}

impl StoreBackend for InMemoryStore {
    fn insert_document(&mut self, document: Document) -> &Document {
        let key = key_of(&document);

        if key.as_ref().is_some_and(|key| self.positions.contains_key(key)) {
            debug!(id = ?key, "id already stored, replacing instead of appending");

            return self.upsert_document(document);
        }

        trace!(id = ?key, position = self.documents.len(), "appending document");

        self.push(key, document)
    }

    fn upsert_document(&mut self, document: Document) -> &Document {
        let key = key_of(&document);

        let stored_at = key
            .as_deref()
            .and_then(|key| self.positions.get(key))
            .copied();

        match stored_at {
            Some(position) => {
                debug!(id = ?key, position, "replacing document in place");

                self.documents[position] = document;
                &self.documents[position]
            }
            None => {
                trace!(id = ?key, position = self.documents.len(), "appending document");

                self.push(key, document)
            }
        }
    }

    fn get_document(&self, id: &str) -> Option<&Document> {
        self.positions
            .get(id)
            .map(|position| &self.documents[*position])
    }

    fn query_documents(&self, criteria: &[Criterion]) -> Vec<&Document> {
        if criteria.is_empty() {
            return self.documents.iter().collect();
        }

        DocumentEvaluator::filter_documents(&self.documents, criteria)
    }

    fn documents(&self) -> Box<dyn Iterator<Item = &Document> + '_> {
        Box::new(self.documents.iter())
    }

    fn len(&self) -> usize {
        self.documents.len()
    }
}

/// Builder for constructing [`InMemoryStore`] instances.
///
/// # Example
///
/// ```ignore
/// use docshelf::prelude::*;
///
/// let store = DocumentStore::new(InMemoryStore::builder().with_capacity(16).build());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStoreBuilder {
    capacity: Option<usize>,
}

impl InMemoryStoreBuilder {
    /// Reserves room for `capacity` documents up front.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    fn build(self) -> Self::Backend {
        match self.capacity {
            Some(capacity) => InMemoryStore::with_capacity(capacity),
            None => InMemoryStore::new(),
        }
    }
}
