//! Core record types held by the document store.
//!
//! This module provides the [`Document`] record and its embedded [`Author`], plus
//! utilities for converting documents between different formats (BSON, JSON).
//!
//! Every field is optional. The store only requires an identifier, and it assigns
//! one itself when a document is saved without it.

use bson::{Bson, de::deserialize_from_bson, ser::serialize_to_bson};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, from_value, to_value};

use crate::error::DocumentStoreResult;

/// Identity and display name of a document's author.
///
/// Authors have no lifecycle of their own; they only exist embedded in a [`Document`].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    /// The author's identifier, matched by author-id search criteria.
    pub id: Option<String>,
    /// The author's display name.
    pub name: Option<String>,
}

impl Author {
    /// Creates an author with both identifier and name set.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
        }
    }

    /// Returns the author identifier, treating an empty string as absent.
    pub fn id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
    }
}

/// A stored record with id, title, content, author, and creation time.
///
/// # Example
///
/// ```ignore
/// use docshelf::prelude::*;
///
/// let document = Document::builder()
///     .title("Quarterly report")
///     .content("Revenue is up")
///     .author(Author::new("a1", "Alice"))
///     .created(Utc::now())
///     .build();
///
/// assert!(document.id().is_none());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    /// Unique identifier. Assigned by the store on save when absent or empty.
    pub id: Option<String>,
    /// Title, matched by title-prefix criteria.
    pub title: Option<String>,
    /// Body text, matched by content-substring criteria.
    pub content: Option<String>,
    /// The embedded author, matched by author-id criteria.
    pub author: Option<Author>,
    /// Creation time. Set by the caller and never touched by the store.
    pub created: Option<DateTime<Utc>>,
}

impl Document {
    /// Creates a new builder for fluent construction.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// Returns the document identifier, treating an empty string as absent.
    pub fn id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .filter(|id| !id.is_empty())
    }

    /// Returns the identifier of the embedded author, if any.
    ///
    /// An empty author id reads as absent.
    pub fn author_id(&self) -> Option<&str> {
        self.author
            .as_ref()
            .and_then(Author::id)
    }

    /// Converts this document to a BSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_bson(&self) -> DocumentStoreResult<Bson> {
        Ok(serialize_to_bson(self)?)
    }

    /// Creates a document from a BSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    pub fn from_bson(bson: Bson) -> DocumentStoreResult<Self> {
        Ok(deserialize_from_bson(bson)?)
    }

    /// Converts this document to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> DocumentStoreResult<Value> {
        Ok(to_value(self)?)
    }

    /// Creates a document from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    pub fn from_json(value: Value) -> DocumentStoreResult<Self> {
        Ok(from_value(value)?)
    }
}

/// Builder for constructing [`Document`] instances.
///
/// Unset fields stay `None`.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Creates a new builder with every field unset.
    pub fn new() -> Self {
        Self { document: Document::default() }
    }

    /// Sets the document identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.document.id = Some(id.into());
        self
    }

    /// Sets the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.document.title = Some(title.into());
        self
    }

    /// Sets the body text.
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.document.content = Some(content.into());
        self
    }

    /// Sets the embedded author.
    pub fn author(mut self, author: Author) -> Self {
        self.document.author = Some(author);
        self
    }

    /// Sets the creation time.
    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.document.created = Some(created);
        self
    }

    /// Builds and returns the final document.
    pub fn build(self) -> Document {
        self.document
    }
}
