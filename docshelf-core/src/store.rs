//! Main document store interface.
//!
//! This module provides the two store types:
//!
//! - [`DocumentStore`] - Single-owner store; mutation requires `&mut self`
//! - [`SharedDocumentStore`] - Cloneable handle guarding a store with one async lock per call
//!
//! # Example
//!
//! ```ignore
//! use docshelf::prelude::*;
//!
//! let mut store = DocumentStore::new(InMemoryStore::new());
//!
//! let saved = store.save(Document::builder().title("Report A").build());
//! let id = saved.id().unwrap().to_string();
//!
//! assert!(store.find_by_id(id.as_str()).is_some());
//! assert!(store.search(None).is_empty());
//! ```

use std::sync::Arc;

use mea::rwlock::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{
    backend::StoreBackend,
    document::Document,
    query::SearchRequest,
};

/// An in-memory document store offering upsert, search and lookup by id.
///
/// The store owns its documents; [`save`](Self::save) is the only way to change them.
/// None of the operations fail: absent ids yield "not found" and absent search
/// criteria match everything.
///
/// # Type Parameters
///
/// * `B` - The backend holding the documents
#[derive(Debug, Clone, Default)]
pub struct DocumentStore<B: StoreBackend> {
    backend: B,
}

impl<B: StoreBackend> DocumentStore<B> {
    /// Creates a new document store with the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Upserts a document and returns the stored value.
    ///
    /// A document without an id (or with an empty one) gets a fresh UUID and is
    /// always appended. A document whose id is already stored replaces the
    /// existing one in place. Any other document is appended.
    #[instrument(level = "debug", skip_all)]
    pub fn save(&mut self, mut document: Document) -> &Document {
        if document.id().is_none() {
            let id = Uuid::new_v4().to_string();
            debug!(%id, "assigning generated id");

            document.id = Some(id);
            self.backend.insert_document(document)
        } else {
            debug!(id = ?document.id, "upserting document");
            self.backend.upsert_document(document)
        }
    }

    /// Returns every document matching all criteria of the request, in insertion order.
    ///
    /// An absent request yields no documents.
    #[instrument(level = "debug", skip_all)]
    pub fn search<'r>(&self, request: impl Into<Option<&'r SearchRequest>>) -> Vec<&Document> {
        let Some(request) = request.into() else {
            debug!("no search request given");
            return Vec::new();
        };

        if self.backend.is_empty() {
            return Vec::new();
        }

        let criteria = request.criteria();
        let matched = self.backend.query_documents(&criteria);
        debug!(criteria = criteria.len(), matched = matched.len(), "search completed");

        matched
    }

    /// Looks up a document by id.
    ///
    /// An absent or empty id is never found.
    #[instrument(level = "debug", skip_all)]
    pub fn find_by_id<'i>(&self, id: impl Into<Option<&'i str>>) -> Option<&Document> {
        let id = id
            .into()
            .filter(|id| !id.is_empty())?;

        let found = self.backend.get_document(id);
        debug!(id, found = found.is_some(), "looked up document");

        found
    }

    /// Iterates over all stored documents in insertion order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> + '_ {
        self.backend.documents()
    }

    /// Returns the number of stored documents.
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// Returns `true` when the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// Returns a reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Moves this store behind a lock so it can be shared between tasks.
    pub fn into_shared(self) -> SharedDocumentStore<B> {
        SharedDocumentStore::new(self)
    }
}

/// A cloneable, lock-guarded handle to a [`DocumentStore`].
///
/// Every call takes one coarse lock for its whole duration: `save` takes the
/// write lock, lookups and searches take the read lock. Results are returned as
/// owned clones. Clones of the handle share the same store.
#[derive(Debug)]
pub struct SharedDocumentStore<B: StoreBackend> {
    inner: Arc<RwLock<DocumentStore<B>>>,
}

impl<B: StoreBackend> Clone for SharedDocumentStore<B> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<B: StoreBackend> SharedDocumentStore<B> {
    /// Wraps a store in a shared handle.
    pub fn new(store: DocumentStore<B>) -> Self {
        Self { inner: Arc::new(RwLock::new(store)) }
    }

    /// Upserts a document. See [`DocumentStore::save`].
    pub async fn save(&self, document: Document) -> Document {
        self.inner
            .write()
            .await
            .save(document)
            .clone()
    }

    /// Searches the store. See [`DocumentStore::search`].
    pub async fn search<'r>(&self, request: impl Into<Option<&'r SearchRequest>>) -> Vec<Document> {
        self.inner
            .read()
            .await
            .search(request)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Looks up a document by id. See [`DocumentStore::find_by_id`].
    pub async fn find_by_id<'i>(&self, id: impl Into<Option<&'i str>>) -> Option<Document> {
        self.inner
            .read()
            .await
            .find_by_id(id)
            .cloned()
    }

    /// Returns the number of stored documents.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    /// Returns `true` when the store holds no documents.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

impl<B: StoreBackend> From<DocumentStore<B>> for SharedDocumentStore<B> {
    fn from(store: DocumentStore<B>) -> Self {
        Self::new(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Criterion;

    /// Linear-scan backend that records the criteria it was queried with and
    /// returns every document.
    #[derive(Debug, Default)]
    struct RecordingBackend {
        documents: Vec<Document>,
        queried: std::cell::RefCell<Vec<Vec<Criterion>>>,
    }

    impl StoreBackend for RecordingBackend {
        fn insert_document(&mut self, document: Document) -> &Document {
            self.documents.push(document);
            &self.documents[self.documents.len() - 1]
        }

        fn upsert_document(&mut self, document: Document) -> &Document {
            match self.documents.iter().position(|doc| doc.id == document.id) {
                Some(index) => {
                    self.documents[index] = document;
                    &self.documents[index]
                }
                None => self.insert_document(document),
            }
        }

        fn get_document(&self, id: &str) -> Option<&Document> {
            self.documents.iter().find(|doc| doc.id() == Some(id))
        }

        fn query_documents(&self, criteria: &[Criterion]) -> Vec<&Document> {
            self.queried.borrow_mut().push(criteria.to_vec());
            self.documents.iter().collect()
        }

        fn documents(&self) -> Box<dyn Iterator<Item = &Document> + '_> {
            Box::new(self.documents.iter())
        }

        fn len(&self) -> usize {
            self.documents.len()
        }
    }

    fn store() -> DocumentStore<RecordingBackend> {
        DocumentStore::new(RecordingBackend::default())
    }

    #[test]
    fn save_assigns_an_id_and_keeps_other_fields() {
        let mut store = store();
        let document = Document::builder()
            .title("Report A")
            .content("numbers")
            .build();

        let saved = store.save(document.clone()).clone();

        assert!(saved.id().is_some_and(|id| !id.is_empty()));
        assert_eq!(saved.title, document.title);
        assert_eq!(saved.content, document.content);
        assert_eq!(saved.created, document.created);
    }

    #[test]
    fn save_treats_an_empty_id_as_absent() {
        let mut store = store();

        let saved = store.save(Document::builder().id("").build()).clone();

        assert_ne!(saved.id.as_deref(), Some(""));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn generated_ids_are_distinct() {
        let mut store = store();

        let first = store.save(Document::default()).id.clone();
        let second = store.save(Document::default()).id.clone();

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn save_with_known_id_replaces() {
        let mut store = store();
        store.save(Document::builder().id("d1").title("old").build());
        store.save(Document::builder().id("d1").title("new").build());

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.find_by_id("d1").and_then(|doc| doc.title.as_deref()),
            Some("new")
        );
    }

    #[test]
    fn absent_or_empty_ids_are_never_found() {
        let mut store = store();
        store.save(Document::builder().id("d1").build());

        assert!(store.find_by_id(None).is_none());
        assert!(store.find_by_id("").is_none());
        assert!(store.find_by_id("d2").is_none());
        assert!(store.find_by_id("d1").is_some());
    }

    #[test]
    fn absent_request_skips_the_backend() {
        let mut store = store();
        store.save(Document::builder().title("Report A").build());

        assert!(store.search(None).is_empty());
        assert!(store.backend().queried.borrow().is_empty());
    }

    #[test]
    fn empty_store_returns_no_matches() {
        let store = store();

        assert!(store.search(&SearchRequest::new()).is_empty());
        assert!(store.backend().queried.borrow().is_empty());
    }

    #[test]
    fn search_hands_lowered_criteria_to_the_backend() {
        let mut store = store();
        store.save(Document::builder().title("Report A").build());

        let request = SearchRequest::builder().title_prefix("Report").build();
        let matched = store.search(&request);

        assert_eq!(matched.len(), 1);
        assert_eq!(
            *store.backend().queried.borrow(),
            vec![vec![Criterion::TitlePrefix(vec!["Report".to_string()])]]
        );
    }

    #[tokio::test]
    async fn shared_handles_see_each_others_saves() {
        let shared = store().into_shared();
        let other = shared.clone();

        let saved = shared
            .save(Document::builder().title("Report A").build())
            .await;
        let id = saved.id().unwrap().to_string();

        assert_eq!(other.len().await, 1);
        assert_eq!(other.find_by_id(id.as_str()).await, Some(saved));
        assert!(other.search(None).await.is_empty());
    }
}
