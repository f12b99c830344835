//! Findings emitted by the validation rules.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use template_primitives::Span;

/// Severity of a finding. Ordering is presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    /// Blocks saving the template.
    Error,
    /// Advisory problem.
    Warning,
    /// Optional improvement hint.
    Suggestion,
}

impl FindingKind {
    /// Lowercase label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Suggestion => "suggestion",
        }
    }
}

/// Area of the template a finding concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingCategory {
    /// Delimiter structure.
    Syntax,
    /// Placeholder names.
    Placeholder,
    /// Length bounds.
    Length,
    /// Mandatory fields.
    Required,
    /// Formatting.
    Format,
    /// Writing quality hints.
    Improvement,
    /// Use of template features.
    Template,
}

impl FindingCategory {
    /// Lowercase label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Placeholder => "placeholder",
            Self::Length => "length",
            Self::Required => "required",
            Self::Format => "format",
            Self::Improvement => "improvement",
            Self::Template => "template",
        }
    }
}

/// A single validation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    kind: FindingKind,
    category: FindingCategory,
    message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    span: Option<Span>,
}

impl Finding {
    fn new(kind: FindingKind, category: FindingCategory, message: impl Into<String>) -> Self {
        Self {
            kind,
            category,
            message: message.into(),
            span: None,
        }
    }

    /// Returns a blocking finding.
    #[must_use]
    pub fn error(category: FindingCategory, message: impl Into<String>) -> Self {
        Self::new(FindingKind::Error, category, message)
    }

    /// Returns an advisory finding.
    #[must_use]
    pub fn warning(category: FindingCategory, message: impl Into<String>) -> Self {
        Self::new(FindingKind::Warning, category, message)
    }

    /// Returns an improvement hint.
    #[must_use]
    pub fn suggestion(category: FindingCategory, message: impl Into<String>) -> Self {
        Self::new(FindingKind::Suggestion, category, message)
    }

    /// Attaches the source location.
    #[must_use]
    pub fn at(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Returns the severity.
    #[must_use]
    pub fn kind(&self) -> FindingKind {
        self.kind
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> FindingCategory {
        self.category
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location, when the finding has one.
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Returns true for blocking findings.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == FindingKind::Error
    }
}

impl Display for Finding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {}",
            self.kind.label(),
            self.category.label(),
            self.message
        )?;
        if let Some(span) = self.span {
            write!(f, " (at {span})")?;
        }
        Ok(())
    }
}
