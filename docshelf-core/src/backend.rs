//! Storage backend abstraction for the document store.
//!
//! This module defines the traits that abstract over the container holding the
//! documents, allowing [`DocumentStore`](crate::store::DocumentStore) to stay
//! agnostic of how documents are laid out in memory.
//!
//! # Overview
//!
//! A [`StoreBackend`] owns an ordered collection of documents keyed by identifier.
//! It never generates identifiers itself; the store assigns them before handing
//! documents over. All operations are synchronous and infallible.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances

use std::fmt::Debug;

use crate::{document::Document, query::Criterion};

/// Abstract interface for document storage backends.
///
/// # Ordering
///
/// Backends must preserve insertion order. Replacing a document keeps the
/// position of the document it replaces, and [`query_documents`](Self::query_documents)
/// returns matches in that order.
///
/// # Identifiers
///
/// Documents handed to [`insert_document`](Self::insert_document) and
/// [`upsert_document`](Self::upsert_document) always carry a non-empty id.
pub trait StoreBackend: Debug {
    /// Appends a document whose id is known to be new.
    ///
    /// Ids stay unique: if the id turns out to be stored already, the existing
    /// document is replaced as in [`upsert_document`](Self::upsert_document).
    ///
    /// Returns a reference to the stored document.
    fn insert_document(&mut self, document: Document) -> &Document;

    /// Replaces the document with the same id in place, or appends it if none exists.
    ///
    /// Returns a reference to the stored document.
    fn upsert_document(&mut self, document: Document) -> &Document;

    /// Retrieves the document with the given id.
    fn get_document(&self, id: &str) -> Option<&Document>;

    /// Returns the documents satisfying every criterion, in insertion order.
    ///
    /// An empty criteria slice matches every document.
    fn query_documents(&self, criteria: &[Criterion]) -> Vec<&Document>;

    /// Iterates over all documents in insertion order.
    fn documents(&self) -> Box<dyn Iterator<Item = &Document> + '_>;

    /// Returns the number of stored documents.
    fn len(&self) -> usize;

    /// Returns `true` when no documents are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Factory trait for constructing backend instances.
///
/// Builders carry backend configuration such as capacity hints.
pub trait StoreBackendBuilder {
    /// The type of backend this builder constructs.
    type Backend: StoreBackend;

    /// Builds and returns a new backend instance.
    fn build(self) -> Self::Backend;
}
