//! Criterion evaluation for in-memory document filtering.
//!
//! Each criterion is a predicate over a single document. Absent document fields
//! never satisfy a criterion that constrains them.

use chrono::{DateTime, Utc};

use docshelf_core::{
    document::Document,
    query::{Criterion, CriterionVisitor},
};

pub(crate) struct DocumentEvaluator<'a> {
    document: &'a Document,
}

impl<'a> DocumentEvaluator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Returns `true` when the document satisfies every criterion.
    pub fn evaluate(&mut self, criteria: &[Criterion]) -> bool {
        criteria
            .iter()
            .all(|criterion| self.visit_criterion(criterion))
    }

    pub fn filter_documents(
        documents: impl IntoIterator<Item = &'a Document>,
        criteria: &[Criterion],
    ) -> Vec<&'a Document> {
        documents
            .into_iter()
            .filter(|doc| DocumentEvaluator::new(doc).evaluate(criteria))
            .collect::<Vec<_>>()
    }
}

impl<'a> CriterionVisitor for DocumentEvaluator<'a> {
    type Output = bool;

    fn visit_title_prefix(&mut self, prefixes: &[String]) -> Self::Output {
        if prefixes.is_empty() {
            return true;
        }

        match self.document.title.as_deref() {
            Some(title) => prefixes
                .iter()
                .any(|prefix| title.starts_with(prefix.as_str())),
            None => false,
        }
    }

    fn visit_content_contains(&mut self, substrings: &[String]) -> Self::Output {
        if substrings.is_empty() {
            return true;
        }

        match self.document.content.as_deref() {
            Some(content) => substrings
                .iter()
                .any(|substring| content.contains(substring.as_str())),
            None => false,
        }
    }

    fn visit_author_in(&mut self, author_ids: &[String]) -> Self::Output {
        if author_ids.is_empty() {
            return true;
        }

        match self.document.author_id() {
            Some(author_id) => author_ids
                .iter()
                .any(|id| id == author_id),
            None => false,
        }
    }

    fn visit_created_from(&mut self, from: &DateTime<Utc>) -> Self::Output {
        self.document
            .created
            .is_some_and(|created| created >= *from)
    }

    fn visit_created_to(&mut self, to: &DateTime<Utc>) -> Self::Output {
        self.document
            .created
            .is_some_and(|created| created <= *to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use docshelf_core::document::Author;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn matches(document: &Document, criterion: Criterion) -> bool {
        DocumentEvaluator::new(document).visit_criterion(&criterion)
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn title_prefix_is_case_sensitive() {
        let document = Document::builder().title("Report A").build();

        assert!(matches(&document, Criterion::TitlePrefix(strings(&["Report"]))));
        assert!(matches(&document, Criterion::TitlePrefix(strings(&["Memo", "Report A"]))));
        assert!(!matches(&document, Criterion::TitlePrefix(strings(&["report"]))));
        assert!(!matches(&document, Criterion::TitlePrefix(strings(&["A"]))));
    }

    #[test]
    fn missing_title_or_content_never_matches() {
        let document = Document::default();

        assert!(!matches(&document, Criterion::TitlePrefix(strings(&[""]))));
        assert!(!matches(&document, Criterion::ContentContains(strings(&[""]))));
    }

    #[test]
    fn empty_lists_match_everything() {
        let document = Document::default();

        assert!(matches(&document, Criterion::TitlePrefix(vec![])));
        assert!(matches(&document, Criterion::ContentContains(vec![])));
        assert!(matches(&document, Criterion::AuthorIn(vec![])));
    }

    #[test]
    fn content_matches_any_substring() {
        let document = Document::builder().content("revenue is up").build();

        assert!(matches(&document, Criterion::ContentContains(strings(&["cost", "is up"]))));
        assert!(!matches(&document, Criterion::ContentContains(strings(&["Revenue"]))));
    }

    #[test]
    fn author_filter_requires_a_non_empty_author_id() {
        let with_author = Document::builder().author(Author::new("a1", "Alice")).build();
        let without_author = Document::default();
        let empty_author_id = Document::builder()
            .author(Author { id: Some(String::new()), name: Some("Nobody".into()) })
            .build();

        assert!(matches(&with_author, Criterion::AuthorIn(strings(&["a2", "a1"]))));
        assert!(!matches(&with_author, Criterion::AuthorIn(strings(&["a2"]))));
        assert!(!matches(&without_author, Criterion::AuthorIn(strings(&["a1"]))));
        assert!(!matches(&empty_author_id, Criterion::AuthorIn(strings(&[""]))));
    }

    #[test]
    fn created_bounds_are_inclusive() {
        let document = Document::builder().created(t0()).build();

        assert!(matches(&document, Criterion::CreatedFrom(t0())));
        assert!(matches(&document, Criterion::CreatedTo(t0())));
        assert!(!matches(&document, Criterion::CreatedFrom(t0() + Duration::seconds(1))));
        assert!(!matches(&document, Criterion::CreatedTo(t0() - Duration::seconds(1))));
    }

    #[test]
    fn missing_created_fails_either_bound() {
        let document = Document::default();

        assert!(!matches(&document, Criterion::CreatedFrom(t0())));
        assert!(!matches(&document, Criterion::CreatedTo(t0())));
    }

    #[test]
    fn evaluate_combines_criteria_with_and() {
        let document = Document::builder()
            .title("Report A")
            .created(t0())
            .build();
        let mut evaluator = DocumentEvaluator::new(&document);

        assert!(evaluator.evaluate(&[]));
        assert!(evaluator.evaluate(&[
            Criterion::TitlePrefix(strings(&["Report"])),
            Criterion::CreatedFrom(t0()),
        ]));
        assert!(!evaluator.evaluate(&[
            Criterion::TitlePrefix(strings(&["Report"])),
            Criterion::CreatedFrom(t0() + Duration::days(1)),
        ]));
    }
}
