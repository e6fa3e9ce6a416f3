//! Append-only, ordered collection of completed issues.

use super::types::{Issue, IssueKind};

/// Completed issues in the order their header lines appeared.
///
/// Only the parser appends; everyone else gets read-only views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueCollection {
    issues: Vec<Issue>,
}

impl IssueCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.issues.iter()
    }

    /// Issues of one kind, in creation order.
    pub fn of_kind(&self, kind: IssueKind) -> impl Iterator<Item = &Issue> + '_ {
        self.issues.iter().filter(move |issue| issue.kind() == kind)
    }

    pub fn count(&self, kind: IssueKind) -> usize {
        self.of_kind(kind).count()
    }

    pub fn into_vec(self) -> Vec<Issue> {
        self.issues
    }
}

impl<'a> IntoIterator for &'a IssueCollection {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(kind: IssueKind, header: &str) -> Issue {
        Issue::new(
            kind,
            header.to_string(),
            "src".to_string(),
            "^".to_string(),
            None,
        )
    }

    #[test]
    fn of_kind_preserves_insertion_order() {
        let mut issues = IssueCollection::new();
        issues.push(issue(IssueKind::Error, "e0"));
        issues.push(issue(IssueKind::Warning, "w0"));
        issues.push(issue(IssueKind::Error, "e1"));
        issues.push(issue(IssueKind::Warning, "w1"));

        let errors: Vec<_> = issues
            .of_kind(IssueKind::Error)
            .map(Issue::header_line)
            .collect();
        assert_eq!(errors, vec!["e0", "e1"]);

        let warnings: Vec<_> = issues
            .of_kind(IssueKind::Warning)
            .map(Issue::header_line)
            .collect();
        assert_eq!(warnings, vec!["w0", "w1"]);

        assert_eq!(issues.len(), 4);
        assert_eq!(issues.count(IssueKind::Error), 2);
    }

    #[test]
    fn iterating_by_reference_visits_all_issues_in_order() {
        let mut issues = IssueCollection::new();
        issues.push(issue(IssueKind::Warning, "w0"));
        issues.push(issue(IssueKind::Error, "e0"));

        let mut headers = Vec::new();
        for issue in &issues {
            headers.push(issue.header_line());
        }

        assert_eq!(headers, vec!["w0", "e0"]);
        assert_eq!(issues.iter().count(), 2);
    }

    #[test]
    fn new_collection_is_empty() {
        let issues = IssueCollection::new();
        assert!(issues.is_empty());
        assert_eq!(issues.count(IssueKind::Warning), 0);
        assert!(issues.into_vec().is_empty());
    }
}
