//! Tests for identifier allocation within one naming scope.
use comfyscript::transpiler::NamingScope;

#[test]
fn test_assign_suffixes_taken_names() {
    let mut scope = NamingScope::new();
    assert_eq!(scope.assign_id("image"), "image");
    assert_eq!(scope.assign_id("image"), "image2");
    assert_eq!(scope.assign_id("image"), "image3");
    assert_eq!(scope.assign_id("image2"), "image22");
}

#[test]
fn test_declare_is_idempotent_and_consumes_no_suffix() {
    let mut scope = NamingScope::new();
    assert_eq!(scope.declare_id("KSampler"), "KSampler");
    assert_eq!(scope.declare_id("KSampler"), "KSampler");
    assert_eq!(scope.assign_id("KSampler"), "KSampler2");
}

#[test]
fn test_discard_placeholder_is_never_assigned() {
    let mut scope = NamingScope::new();
    assert_eq!(scope.assign_id("_"), "_2");
}

#[test]
fn test_names_are_case_sensitive() {
    let mut scope = NamingScope::new();
    scope.assign_id("model");
    assert_eq!(scope.assign_id("Model"), "Model");
}
