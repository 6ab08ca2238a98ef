//! Convenient re-exports of commonly used types from docshelf.
//!
//! Import this prelude module to quickly access the most frequently used types
//! and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use docshelf::prelude::*;
//! ```

pub use chrono::{DateTime, Duration, Utc};

pub use docshelf_core::{
    store::{DocumentStore, SharedDocumentStore},
    document::{Author, Document, DocumentBuilder},
    backend::{StoreBackend, StoreBackendBuilder},
    query::{Criterion, CriterionVisitor, SearchRequest, SearchRequestBuilder},
    error::{DocumentStoreError, DocumentStoreResult},
};

pub use docshelf_memory::{InMemoryStore, InMemoryStoreBuilder};

pub use crate::InMemoryDocumentStore;
