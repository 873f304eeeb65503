//! End-to-end validation scenarios against the public API.

use cutter_core::prelude::*;

const COMPLETE_TEMPLATE: &str =
    "def foo():\n    pass\n\ndef _foo():\n    pass\n\nif __name__ == \"__main__\":\n    pass\n";

fn methods(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_owned()).collect()
}

#[test]
fn complete_template_is_valid() {
    assert!(TemplateValidator::validate(COMPLETE_TEMPLATE, &methods(&["foo"])).is_ok());
}

#[test]
fn unknown_required_method_fails_with_methods_reason() {
    let err = TemplateValidator::validate(COMPLETE_TEMPLATE, &methods(&["bar"])).unwrap_err();
    assert_eq!(err, ValidationError::MissingMethods);
    assert_eq!(err.to_string(), "required methods are missing");
}

#[test]
fn missing_dual_reported_before_missing_entrypoint() {
    let source = "def foo():\n    pass\n";
    let err = TemplateValidator::validate(source, &methods(&["foo"])).unwrap_err();
    assert_eq!(err, ValidationError::MissingDualEndpoints);
    assert_eq!(err.to_string(), "required associated endpoints are missing");
}

#[test]
fn empty_source_and_empty_methods_is_valid() {
    assert!(TemplateValidator::validate("", &[]).is_ok());
}

#[test]
fn extraction_is_memoized_per_source_value() {
    let source = "def once(a, b):\n    pass\n";
    let first = extract_definitions(source);
    let second = extract_definitions(&source.to_owned());

    assert_eq!(*first, *second);
    assert!(first.contains("once"));
}

#[test]
fn extracted_signature_carries_raw_parameter_text() {
    let index = extract_definitions("async def fetch(url, timeout=30):\n    pass\n");
    let sig = index.get("fetch").expect("fetch should be indexed");

    assert_eq!(sig.name(), "fetch");
    assert_eq!(sig.raw_parameters(), ["url", " timeout=30"]);
}

#[test]
fn individual_checks_allow_full_diagnostics() {
    // validate() stops at the first failure; callers wanting everything
    // re-run the checks themselves.
    let source = "x = 1\n";
    let wanted = methods(&["foo"]);

    assert!(TemplateValidator::check_needed_methods(source, &wanted).is_err());
    assert!(TemplateValidator::check_dual_endpoints(source, &wanted).is_err());
    assert!(TemplateValidator::check_entrypoint(source).is_err());
}
