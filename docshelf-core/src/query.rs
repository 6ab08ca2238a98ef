//! Search request construction and criterion dispatch.
//!
//! A [`SearchRequest`] carries five optional constraints. Before evaluation it is
//! lowered into a list of [`Criterion`] values, one per constraint that actually
//! restricts the result. A document matches a request when it satisfies every
//! criterion, so absent fields and empty lists match everything.
//!
//! # Request Building
//!
//! ```ignore
//! use docshelf::prelude::*;
//!
//! let request = SearchRequest::builder()
//!     .title_prefix("Report")
//!     .author_id("a1")
//!     .created_from(Utc::now() - Duration::days(7))
//!     .build();
//! ```
//!
//! # Evaluation
//!
//! Backends evaluate criteria through the [`CriterionVisitor`] trait, which
//! dispatches each [`Criterion`] to a dedicated method.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, from_value};

use crate::error::DocumentStoreResult;

/// A set of optional match criteria combined with logical AND.
///
/// Every field may be absent; an absent field (or an empty list) places no
/// constraint on the result.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
    /// Titles must start with at least one of these prefixes.
    pub title_prefixes: Option<Vec<String>>,
    /// Content must contain at least one of these substrings.
    pub contains_contents: Option<Vec<String>>,
    /// The author id must be one of these.
    pub author_ids: Option<Vec<String>>,
    /// Earliest allowed creation time (inclusive).
    pub created_from: Option<DateTime<Utc>>,
    /// Latest allowed creation time (inclusive).
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Creates a new empty request that matches every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new request builder for fluent construction.
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::new()
    }

    /// Creates a request from a JSON value with camelCase field names.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not describe a search request.
    pub fn from_json(value: Value) -> DocumentStoreResult<Self> {
        Ok(from_value(value)?)
    }

    /// Lowers this request into the criteria that actually constrain the result.
    ///
    /// Absent fields and empty lists produce no criterion.
    pub fn criteria(&self) -> Vec<Criterion> {
        let mut criteria = Vec::new();

        if let Some(prefixes) = non_empty(&self.title_prefixes) {
            criteria.push(Criterion::TitlePrefix(prefixes.to_vec()));
        }

        if let Some(substrings) = non_empty(&self.contains_contents) {
            criteria.push(Criterion::ContentContains(substrings.to_vec()));
        }

        if let Some(author_ids) = non_empty(&self.author_ids) {
            criteria.push(Criterion::AuthorIn(author_ids.to_vec()));
        }

        if let Some(from) = self.created_from {
            criteria.push(Criterion::CreatedFrom(from));
        }

        if let Some(to) = self.created_to {
            criteria.push(Criterion::CreatedTo(to));
        }

        criteria
    }
}

fn non_empty(values: &Option<Vec<String>>) -> Option<&[String]> {
    values
        .as_deref()
        .filter(|values| !values.is_empty())
}

/// A single lowered constraint of a [`SearchRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// Title is present and starts with any of the prefixes (case-sensitive).
    TitlePrefix(Vec<String>),
    /// Content is present and contains any of the substrings (case-sensitive).
    ContentContains(Vec<String>),
    /// Author id is present, non-empty and one of the given ids.
    AuthorIn(Vec<String>),
    /// Creation time is present and not earlier than the bound.
    CreatedFrom(DateTime<Utc>),
    /// Creation time is present and not later than the bound.
    CreatedTo(DateTime<Utc>),
}

/// Builder for constructing [`SearchRequest`] instances.
///
/// List setters append, so calling `title_prefix` twice accepts either prefix.
#[derive(Debug, Clone, Default)]
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl SearchRequestBuilder {
    /// Creates a new builder with no constraints.
    pub fn new() -> Self {
        Self { request: SearchRequest::default() }
    }

    /// Adds an accepted title prefix.
    pub fn title_prefix(mut self, prefix: impl Into<String>) -> Self {
        push(&mut self.request.title_prefixes, prefix.into());
        self
    }

    /// Adds several accepted title prefixes.
    pub fn title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.request.title_prefixes, prefixes);
        self
    }

    /// Adds an accepted content substring.
    pub fn contains_content(mut self, substring: impl Into<String>) -> Self {
        push(&mut self.request.contains_contents, substring.into());
        self
    }

    /// Adds several accepted content substrings.
    pub fn contains_contents<I, S>(mut self, substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.request.contains_contents, substrings);
        self
    }

    /// Adds an accepted author id.
    pub fn author_id(mut self, author_id: impl Into<String>) -> Self {
        push(&mut self.request.author_ids, author_id.into());
        self
    }

    /// Adds several accepted author ids.
    pub fn author_ids<I, S>(mut self, author_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend(&mut self.request.author_ids, author_ids);
        self
    }

    /// Sets the earliest allowed creation time (inclusive).
    pub fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.request.created_from = Some(from);
        self
    }

    /// Sets the latest allowed creation time (inclusive).
    pub fn created_to(mut self, to: DateTime<Utc>) -> Self {
        self.request.created_to = Some(to);
        self
    }

    /// Builds and returns the final request.
    pub fn build(self) -> SearchRequest {
        self.request
    }
}

fn push(list: &mut Option<Vec<String>>, value: String) {
    list.get_or_insert_with(Vec::new).push(value);
}

fn extend<I, S>(list: &mut Option<Vec<String>>, values: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    list.get_or_insert_with(Vec::new)
        .extend(values.into_iter().map(Into::into));
}

/// Dispatches [`Criterion`] values to per-kind evaluation methods.
pub trait CriterionVisitor {
    type Output;

    fn visit_title_prefix(&mut self, prefixes: &[String]) -> Self::Output;
    fn visit_content_contains(&mut self, substrings: &[String]) -> Self::Output;
    fn visit_author_in(&mut self, author_ids: &[String]) -> Self::Output;
    fn visit_created_from(&mut self, from: &DateTime<Utc>) -> Self::Output;
    fn visit_created_to(&mut self, to: &DateTime<Utc>) -> Self::Output;

    fn visit_criterion(&mut self, criterion: &Criterion) -> Self::Output {
        match criterion {
            Criterion::TitlePrefix(prefixes) => self.visit_title_prefix(prefixes),
            Criterion::ContentContains(substrings) => self.visit_content_contains(substrings),
            Criterion::AuthorIn(author_ids) => self.visit_author_in(author_ids),
            Criterion::CreatedFrom(from) => self.visit_created_from(from),
            Criterion::CreatedTo(to) => self.visit_created_to(to),
        }
    }
}
