//! Main docshelf crate: an in-memory document store.
//!
//! This crate is the primary entry point. It re-exports the core types from the
//! sub-crates and wires the in-memory backend in as the default.
//!
//! # Features
//!
//! - **Upsert** - `save` assigns ids to new documents and replaces existing ones in place
//! - **Attribute search** - Title prefix, content substring, author id and creation-time bounds
//! - **Lookup by id** - Absent or empty ids are simply not found
//! - **Shared access** - An async, lock-guarded handle for concurrent callers
//!
//! # Quick Start
//!
//! ```ignore
//! use docshelf::prelude::*;
//!
//! let mut store = docshelf::in_memory();
//!
//! store.save(
//!     Document::builder()
//!         .title("Report A")
//!         .content("Revenue is up")
//!         .author(Author::new("a1", "Alice"))
//!         .created(Utc::now())
//!         .build(),
//! );
//!
//! let results = store.search(
//!     &SearchRequest::builder()
//!         .title_prefix("Report")
//!         .author_id("a1")
//!         .build(),
//! );
//!
//! println!("Found documents: {:?}", results);
//! ```
//!
//! # Shared Access
//!
//! `DocumentStore` needs `&mut self` to save. When several tasks need the same
//! store, move it behind a [`SharedDocumentStore`](store::SharedDocumentStore):
//!
//! ```ignore
//! use docshelf::prelude::*;
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = docshelf::in_memory().into_shared();
//!
//!     let saved = store.save(Document::builder().title("Report A").build()).await;
//!     let found = store.find_by_id(saved.id()).await;
//!
//!     assert_eq!(found, Some(saved));
//! }
//! ```
//!
//! # Backends
//!
//! - [`memory`] - Ordered in-memory storage

pub mod prelude;

pub use docshelf_core::{backend, document, error, query, store};

// Re-export record field types for convenience
pub use bson;
pub use chrono;
pub use serde_json;

/// In-memory storage backend implementations.
pub mod memory {
    pub use docshelf_memory::{InMemoryStore, InMemoryStoreBuilder};
}

/// A document store backed by [`InMemoryStore`](memory::InMemoryStore).
pub type InMemoryDocumentStore = store::DocumentStore<memory::InMemoryStore>;

/// Creates an empty document store backed by the in-memory backend.
pub fn in_memory() -> InMemoryDocumentStore {
    store::DocumentStore::new(memory::InMemoryStore::new())
}
