//! Aggregated validation outcome.

use serde::{Deserialize, Serialize};

use crate::error::{TemplateError, TemplateResult};
use crate::finding::{Finding, FindingKind};
use crate::scanner::DetectedPlaceholder;

/// Result of one validation run.
///
/// Findings are grouped errors first, then warnings, then suggestions; each
/// group keeps the order in which the rules produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    is_valid: bool,
    findings: Vec<Finding>,
    placeholders: Vec<DetectedPlaceholder>,
}

impl Verdict {
    pub(crate) fn new(mut findings: Vec<Finding>, placeholders: Vec<DetectedPlaceholder>) -> Self {
        // Stable sort: rule order survives within each kind.
        findings.sort_by_key(Finding::kind);
        let is_valid = !findings.iter().any(Finding::is_error);
        Self {
            is_valid,
            findings,
            placeholders,
        }
    }

    /// Returns true when no finding is an error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// All findings in presentation order.
    #[must_use]
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Placeholders detected in the body, in source order.
    #[must_use]
    pub fn placeholders(&self) -> &[DetectedPlaceholder] {
        &self.placeholders
    }

    /// Findings of a single kind.
    pub fn of_kind(&self, kind: FindingKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |finding| finding.kind() == kind)
    }

    /// Blocking findings.
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.of_kind(FindingKind::Error)
    }

    /// Advisory findings.
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.of_kind(FindingKind::Warning)
    }

    /// Improvement hints.
    pub fn suggestions(&self) -> impl Iterator<Item = &Finding> {
        self.of_kind(FindingKind::Suggestion)
    }

    /// Returns true when there is nothing at all to report.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Gate for saving or activating a template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Rejected`] when the verdict holds errors.
    pub fn ensure_valid(&self) -> TemplateResult<()> {
        let mut errors = self.errors();
        match errors.next() {
            None => Ok(()),
            Some(first) => Err(TemplateError::Rejected {
                errors: 1 + errors.count(),
                first: first.message().to_owned(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::FindingCategory;

    #[test]
    fn groups_by_kind_and_keeps_rule_order() {
        let verdict = Verdict::new(
            vec![
                Finding::suggestion(FindingCategory::Template, "s1"),
                Finding::error(FindingCategory::Length, "e1"),
                Finding::warning(FindingCategory::Length, "w1"),
                Finding::error(FindingCategory::Syntax, "e2"),
            ],
            Vec::new(),
        );
        let messages: Vec<_> = verdict.findings().iter().map(Finding::message).collect();
        assert_eq!(messages, ["e1", "e2", "w1", "s1"]);
        assert!(!verdict.is_valid());
    }

    #[test]
    fn warnings_do_not_block() {
        let verdict = Verdict::new(
            vec![Finding::warning(FindingCategory::Length, "long")],
            Vec::new(),
        );
        assert!(verdict.is_valid());
        assert!(verdict.ensure_valid().is_ok());
        assert!(!verdict.is_clean());
    }

    #[test]
    fn ensure_valid_reports_first_error() {
        let verdict = Verdict::new(
            vec![
                Finding::error(FindingCategory::Required, "title required"),
                Finding::error(FindingCategory::Syntax, "unclosed"),
            ],
            Vec::new(),
        );
        assert_eq!(
            verdict.ensure_valid(),
            Err(TemplateError::Rejected {
                errors: 2,
                first: "title required".into(),
            })
        );
    }
}
