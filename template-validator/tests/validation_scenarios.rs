//! End-to-end scenarios for the validation engine.

use template_catalog::{Catalog, suggest};
use template_validator::{
    FindingCategory, FindingKind, MessageTemplate, TemplateError, Validator, find_unclosed, scan,
    validate,
};

#[test]
fn bracket_pair_scanner_and_balance_checker_diverge() {
    // The scanner does not nest, so `[[NAME]]` is one malformed token, while
    // stack pairing considers all four delimiters matched.
    let placeholders = scan("[[NAME]]");
    assert_eq!(placeholders.len(), 1);
    assert_eq!(placeholders[0].name(), "[NAME");
    assert!(!placeholders[0].is_name_valid());
    assert!(find_unclosed("[[NAME]]").is_empty());

    let verdict = validate("Texto [[NAME]] con cierre. ¿Bien?", "T", "");
    let errors: Vec<_> = verdict.errors().map(|f| f.category()).collect();
    assert_eq!(errors, [FindingCategory::Placeholder]);
}

#[test]
fn documented_examples() {
    assert_eq!(find_unclosed("[A][B").len(), 1);
    assert_eq!(find_unclosed("[A][B")[0].span().start, 3);
    assert_eq!(suggest("NOMRE").map(String::from), Some("NOMBRE".to_owned()));
    assert_eq!(suggest("XYZXYZ"), None);
}

#[test]
fn every_builtin_name_validates_cleanly() {
    for name in Catalog::builtin().names() {
        let body = format!("Hola {}. ¿Seguimos?", name.token());
        let verdict = validate(&body, "Catálogo", "");
        assert!(verdict.is_clean(), "{name}: {:?}", verdict.findings());
    }
}

#[test]
fn save_gate_blocks_invalid_templates() {
    let validator = Validator::default();

    let draft = MessageTemplate::new("", "Hola [NOMBRE");
    let verdict = validator.validate_template(&draft);
    match verdict.ensure_valid() {
        Err(TemplateError::Rejected { errors, first }) => {
            assert_eq!(errors, 2);
            assert_eq!(first, "Title is required");
        }
        other => panic!("expected rejection, got {other:?}"),
    }

    let fixed = MessageTemplate::new("Saludo", "Hola [NOMBRE]. ¿Cómo va todo?").activated();
    assert!(validator.validate_template(&fixed).ensure_valid().is_ok());
}

#[test]
fn verdict_serializes_for_the_rendering_layer() {
    let verdict = validate("Hola [nombre] y [EMPRESA", "T", "");
    let json = serde_json::to_value(&verdict).expect("serialize");

    assert_eq!(json["is_valid"], false);
    assert_eq!(json["placeholders"][0]["name"], "nombre");
    assert_eq!(json["placeholders"][0]["is_name_valid"], false);
    assert_eq!(json["findings"][0]["kind"], "error");
    assert_eq!(json["findings"][0]["span"]["start"], 5);

    let kinds: Vec<FindingKind> = verdict.findings().iter().map(|f| f.kind()).collect();
    assert_eq!(kinds.first(), Some(&FindingKind::Error));
}
