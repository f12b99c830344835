//! Rule pipeline producing a [`Verdict`].
//!
//! Rules run in a fixed order: required fields, length bounds, placeholder
//! names, improvement hints, then delimiter structure. A blank body stops the
//! pipeline right after the required-field rule.

use template_catalog::{Catalog, SimilarityMatcher};
use template_config::ValidatorConfig;
use tracing::debug;

use crate::balance::find_unclosed;
use crate::finding::{Finding, FindingCategory};
use crate::scanner::{DetectedPlaceholder, Scanner};
use crate::template::MessageTemplate;
use crate::verdict::Verdict;

/// Validates `body`, `title`, and `description` with the built-in catalog and
/// default limits.
#[must_use]
pub fn validate(body: &str, title: &str, description: &str) -> Verdict {
    Validator::default().validate(body, title, description)
}

/// Stateless validation engine bound to a catalog and a set of limits.
#[derive(Debug, Clone)]
pub struct Validator<'a> {
    catalog: &'a Catalog,
    config: ValidatorConfig,
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::new(Catalog::builtin(), ValidatorConfig::default())
    }
}

impl<'a> Validator<'a> {
    /// Creates a validator over `catalog` with the supplied limits.
    #[must_use]
    pub fn new(catalog: &'a Catalog, config: ValidatorConfig) -> Self {
        Self { catalog, config }
    }

    /// Catalog used to recognize placeholders.
    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Limits applied by the length and similarity rules.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates a stored template record.
    #[must_use]
    pub fn validate_template(&self, template: &MessageTemplate) -> Verdict {
        self.validate(template.body(), template.title(), template.description())
    }

    /// Runs every rule and aggregates the findings.
    ///
    /// `description` is accepted for parity with the editor form; no rule
    /// inspects it.
    #[must_use]
    pub fn validate(&self, body: &str, title: &str, description: &str) -> Verdict {
        let placeholders = self.scanner().scan(body);
        let mut findings = Vec::new();

        if title.trim().is_empty() {
            findings.push(Finding::error(FindingCategory::Required, "Title is required"));
        }
        if body.trim().is_empty() {
            findings.push(Finding::error(
                FindingCategory::Required,
                "Template body is required",
            ));
            debug!("blank template body; skipping remaining rules");
            return Verdict::new(findings, placeholders);
        }

        self.check_lengths(body, title, &mut findings);
        self.check_placeholders(&placeholders, &mut findings);
        suggest_improvements(body, &placeholders, &mut findings);
        check_structure(body, &mut findings);

        let verdict = Verdict::new(findings, placeholders);
        debug!(
            valid = verdict.is_valid(),
            errors = verdict.errors().count(),
            warnings = verdict.warnings().count(),
            suggestions = verdict.suggestions().count(),
            placeholders = verdict.placeholders().len(),
            has_description = !description.trim().is_empty(),
            "template validated"
        );
        verdict
    }

    fn scanner(&self) -> Scanner<'a> {
        Scanner::new(
            SimilarityMatcher::new(self.catalog).with_threshold(self.config.similarity_threshold),
        )
    }

    fn check_lengths(&self, body: &str, title: &str, findings: &mut Vec<Finding>) {
        let body_units = utf16_len(body);
        if body_units < self.config.min_body_chars {
            findings.push(Finding::error(
                FindingCategory::Length,
                format!(
                    "Template body is too short: it must have at least {} characters",
                    self.config.min_body_chars
                ),
            ));
        }
        if body_units > self.config.max_body_chars {
            findings.push(Finding::warning(
                FindingCategory::Length,
                format!(
                    "Template body is too long (more than {} characters); consider splitting it",
                    self.config.max_body_chars
                ),
            ));
        }
        if utf16_len(title) > self.config.max_title_chars {
            findings.push(Finding::warning(
                FindingCategory::Length,
                format!(
                    "Title is too long (more than {} characters)",
                    self.config.max_title_chars
                ),
            ));
        }
    }

    fn check_placeholders(
        &self,
        placeholders: &[DetectedPlaceholder],
        findings: &mut Vec<Finding>,
    ) {
        for placeholder in placeholders.iter().filter(|p| !p.is_name_valid()) {
            findings.push(
                Finding::error(
                    FindingCategory::Placeholder,
                    format!("Malformed placeholder name: [{}]", placeholder.name()),
                )
                .at(placeholder.span()),
            );
        }

        for placeholder in placeholders
            .iter()
            .filter(|p| p.is_name_valid() && !self.catalog.contains(p.name()))
        {
            let mut message = format!("Unrecognized placeholder: [{}]", placeholder.name());
            if let Some(suggestion) = placeholder.suggestion() {
                message.push_str(&format!(". Did you mean [{suggestion}]?"));
            }
            findings.push(
                Finding::warning(FindingCategory::Placeholder, message).at(placeholder.span()),
            );
        }
    }
}

// Lengths are measured the way browser editors report them: UTF-16 code
// units, so a character outside the BMP counts twice.
fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

fn suggest_improvements(
    body: &str,
    placeholders: &[DetectedPlaceholder],
    findings: &mut Vec<Finding>,
) {
    if placeholders.is_empty() {
        findings.push(Finding::suggestion(
            FindingCategory::Template,
            "Consider adding placeholders such as [NOMBRE] or [EMPRESA] to personalize the message",
        ));
    }
    if !body.contains('?') && !body.contains('¿') {
        findings.push(Finding::suggestion(
            FindingCategory::Improvement,
            "Consider adding a question to invite a reply",
        ));
    }
    if body.split('.').count() < 2 {
        findings.push(Finding::suggestion(
            FindingCategory::Improvement,
            "Consider adding more structure with several sentences",
        ));
    }
}

fn check_structure(body: &str, findings: &mut Vec<Finding>) {
    for defect in find_unclosed(body) {
        findings.push(
            Finding::error(FindingCategory::Syntax, "Unclosed placeholder delimiter")
                .at(defect.span()),
        );
    }
}

#[cfg(test)]
mod tests {
    use template_catalog::PlaceholderCategory;

    use super::*;
    use crate::finding::FindingKind;

    fn categories(verdict: &Verdict, kind: FindingKind) -> Vec<FindingCategory> {
        verdict.of_kind(kind).map(Finding::category).collect()
    }

    #[test]
    fn greeting_template_is_valid_with_one_hint() {
        let verdict = validate("Hola [NOMBRE], bienvenido a [EMPRESA].", "Saludo", "");
        assert!(verdict.is_valid());
        assert_eq!(verdict.findings().len(), 1);
        let hint = &verdict.findings()[0];
        assert_eq!(hint.kind(), FindingKind::Suggestion);
        assert_eq!(hint.category(), FindingCategory::Improvement);
        assert!(hint.message().contains("question"));
    }

    #[test]
    fn blank_body_short_circuits() {
        let verdict = validate("", "Hi", "");
        assert!(!verdict.is_valid());
        assert_eq!(verdict.findings().len(), 1);
        assert_eq!(verdict.findings()[0].category(), FindingCategory::Required);
    }

    #[test]
    fn blank_body_skips_structural_rules_even_with_brackets() {
        let verdict = validate("   [  ", "Hi", "");
        assert_eq!(verdict.findings().len(), 1);
        assert_eq!(verdict.findings()[0].category(), FindingCategory::Required);
    }

    #[test]
    fn blank_title_and_body_report_both_required() {
        let verdict = validate(" ", "", "");
        assert_eq!(
            categories(&verdict, FindingKind::Error),
            [FindingCategory::Required, FindingCategory::Required]
        );
    }

    #[test]
    fn short_body_is_an_error() {
        let verdict = validate("¿Hola?.", "T", "");
        assert!(!verdict.is_valid());
        assert_eq!(categories(&verdict, FindingKind::Error), [FindingCategory::Length]);
    }

    #[test]
    fn long_body_and_title_warn() {
        let body = format!("¿{}?.", "a".repeat(2001));
        let title = "t".repeat(101);
        let verdict = validate(&body, &title, "");
        assert!(verdict.is_valid());
        assert_eq!(
            categories(&verdict, FindingKind::Warning),
            [FindingCategory::Length, FindingCategory::Length]
        );
    }

    #[test]
    fn accented_letters_count_once() {
        // Nine UTF-16 units, more than ten bytes.
        let verdict = validate("¿áéíóúñ?.", "T", "");
        assert_eq!(categories(&verdict, FindingKind::Error), [FindingCategory::Length]);
    }

    #[test]
    fn astral_characters_count_as_two_units() {
        // Five emoji are ten UTF-16 units, enough for the minimum.
        let verdict = validate(&"😀".repeat(5), "T", "");
        assert_eq!(verdict.errors().count(), 0);

        let verdict = validate(&"😀".repeat(4), "T", "");
        assert_eq!(categories(&verdict, FindingKind::Error), [FindingCategory::Length]);

        let title = "😀".repeat(51);
        let verdict = validate("¿[NOMBRE] ok?.", &title, "");
        assert_eq!(categories(&verdict, FindingKind::Warning), [FindingCategory::Length]);
    }

    #[test]
    fn length_limits_are_inclusive() {
        let length_findings = |body: &str, title: &str, kind| {
            validate(body, title, "")
                .of_kind(kind)
                .filter(|finding| finding.category() == FindingCategory::Length)
                .count()
        };

        assert_eq!(length_findings(&"a".repeat(10), "T", FindingKind::Error), 0);
        assert_eq!(length_findings(&"a".repeat(9), "T", FindingKind::Error), 1);
        assert_eq!(length_findings(&"a".repeat(2000), "T", FindingKind::Warning), 0);
        assert_eq!(length_findings(&"a".repeat(2001), "T", FindingKind::Warning), 1);

        let body = "Hola [NOMBRE]. ¿Todo bien?";
        assert_eq!(length_findings(body, &"t".repeat(100), FindingKind::Warning), 0);
        assert_eq!(length_findings(body, &"t".repeat(101), FindingKind::Warning), 1);
    }

    #[test]
    fn malformed_and_unrecognized_placeholders() {
        let verdict = validate("Hola [nombre], tu [NOMRE] llegó. ¿Ok?", "T", "");
        assert!(!verdict.is_valid());

        let errors: Vec<_> = verdict.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].category(), FindingCategory::Placeholder);
        assert_eq!(errors[0].span().map(|span| span.start), Some(5));

        let warnings: Vec<_> = verdict.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message().contains("Did you mean [NOMBRE]?"));
    }

    #[test]
    fn unrecognized_without_close_match_has_no_hint() {
        let verdict = validate("Código [XYZXYZ] listo. ¿Ok?", "T", "");
        let warning = verdict.warnings().next().expect("warning");
        assert_eq!(warning.message(), "Unrecognized placeholder: [XYZXYZ]");
    }

    #[test]
    fn no_placeholders_question_or_period_yields_three_hints() {
        let verdict = validate("Hola buen día amigo", "T", "");
        assert!(verdict.is_valid());
        assert_eq!(
            categories(&verdict, FindingKind::Suggestion),
            [
                FindingCategory::Template,
                FindingCategory::Improvement,
                FindingCategory::Improvement
            ]
        );
    }

    #[test]
    fn inverted_question_mark_counts_as_question() {
        let verdict = validate("¿Hola [NOMBRE]. Todo bien", "T", "");
        assert!(verdict.suggestions().next().is_none());
    }

    #[test]
    fn unclosed_delimiter_is_a_syntax_error() {
        let verdict = validate("Hola [NOMBRE], ¿y [EMPRESA?. Gracias", "T", "");
        let errors: Vec<_> = verdict.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].category(), FindingCategory::Syntax);
        // '¿' is two bytes, so the stray opener sits at byte 19.
        assert_eq!(errors[0].span().map(|span| span.start), Some(19));
    }

    #[test]
    fn errors_precede_warnings_and_suggestions() {
        let verdict = validate("Hola [FOO] sin cierre [", "T", "");
        let kinds: Vec<_> = verdict.findings().iter().map(Finding::kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort();
        assert_eq!(kinds, sorted);
        assert_eq!(kinds.first(), Some(&FindingKind::Error));
    }

    #[test]
    fn custom_catalog_and_limits_apply() {
        let catalog = Catalog::builder("custom")
            .entry("CLIENTE", PlaceholderCategory::Customer, "Customer name")
            .unwrap()
            .build()
            .unwrap();
        let config = ValidatorConfig {
            min_body_chars: 3,
            max_title_chars: 2,
            ..ValidatorConfig::default()
        };
        let validator = Validator::new(&catalog, config);

        let verdict = validator.validate("¿[CLIENTE]?.", "Largo", "");
        assert!(verdict.is_valid());
        assert_eq!(categories(&verdict, FindingKind::Warning), [FindingCategory::Length]);

        let verdict = validator.validate("¿[NOMBRE]?.", "Ok", "");
        assert_eq!(categories(&verdict, FindingKind::Warning), [FindingCategory::Placeholder]);
    }

    #[test]
    fn placeholders_kept_on_short_circuit() {
        let verdict = validate("", "", "");
        assert!(verdict.placeholders().is_empty());
        assert_eq!(verdict.errors().count(), 2);
    }
}
