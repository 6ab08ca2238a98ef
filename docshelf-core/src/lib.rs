//! Core of the docshelf project: a small in-memory document store.
//!
//! This crate provides:
//!
//! - **Records** ([`document`]) - The `Document` and `Author` records and their conversions
//! - **Search requests** ([`query`]) - Optional match criteria combined with logical AND
//! - **Store backend abstraction** ([`backend`]) - Traits for the container holding documents
//! - **Document store** ([`store`]) - `save`, `search` and `find_by_id`, plus a shared handle
//! - **Error handling** ([`error`]) - Error and result types for fallible conversions
//!
//! # Example
//!
//! ```ignore
//! use docshelf::prelude::*;
//!
//! let mut store = DocumentStore::new(InMemoryStore::new());
//!
//! store.save(
//!     Document::builder()
//!         .title("Report A")
//!         .author(Author::new("a1", "Alice"))
//!         .build(),
//! );
//!
//! let request = SearchRequest::builder().author_id("a1").build();
//! assert_eq!(store.search(&request).len(), 1);
//! ```

#[allow(unused_extern_crates)]
extern crate self as docshelf_core;

pub mod backend;
pub mod document;
pub mod error;
pub mod query;
pub mod store;
