//! In-memory document storage backend for docshelf.
//!
//! This crate provides an ordered, in-memory implementation of the `StoreBackend` trait.
//! It holds documents for the lifetime of the owning value and nothing more.
//!
//! # Features
//!
//! - **Insertion order** - Search results and iteration follow first-insertion order
//! - **Constant-time upsert** - An id index avoids scanning on save and lookup
//! - **Full criterion support** - Title prefix, content substring, author id and creation bounds
//!
//! # Quick Start
//!
//! ```ignore
//! use docshelf::prelude::*;
//!
//! let mut store = DocumentStore::new(InMemoryStore::builder().build());
//!
//! let saved = store.save(Document::builder().title("Report A").build());
//! println!("saved {:?}", saved.id());
//! ```

#[allow(unused_extern_crates)]
extern crate self as docshelf_memory;

pub mod store;
pub mod evaluator;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
