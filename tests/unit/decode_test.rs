//! Tests for output sanitization and streaming decode

use lichen::core::models::Module;
use lichen::core::services::{decode_modules, decode_stream, sanitize};
use serde_json::Value;
use test_case::test_case;

// =============================================================================
// Sanitization
// =============================================================================

#[test_case(b"garbage-prefix{\"A\":1}{\"B\":2}garbage-suffix", b"{\"A\":1}{\"B\":2}" ; "noise on both sides")]
#[test_case(b"{\"A\":1}trailer", b"{\"A\":1}" ; "trailer only")]
#[test_case(b"preamble\n{\"A\":1}", b"{\"A\":1}" ; "preamble only")]
#[test_case(b"{\"A\":{\"B\":2}}", b"{\"A\":{\"B\":2}}" ; "nested object untouched")]
#[test_case(b"no braces at all", b"no braces at all" ; "no open brace skips trim")]
fn test_sanitize(input: &[u8], expected: &[u8]) {
    assert_eq!(sanitize(input), expected);
}

#[test]
fn surrounding_noise_decodes_to_two_objects() {
    let values: Vec<Value> =
        decode_stream(sanitize(b"garbage-prefix{\"A\":1}{\"B\":2}garbage-suffix")).unwrap();
    assert_eq!(values, vec![serde_json::json!({"A": 1}), serde_json::json!({"B": 2})]);
}

#[test]
fn surrounding_noise_decodes_as_modules() {
    let modules = decode_modules(b"garbage-prefix{\"A\":1}{\"B\":2}garbage-suffix").unwrap();
    assert!(!modules.is_empty());
    assert!(modules.iter().all(|m| m.reference.path.is_empty() && m.dir.is_none()));
}

#[test]
fn null_version_decodes_as_empty() {
    let modules = decode_modules(br#"{"Path":"a","Version":null}"#).unwrap();
    assert_eq!(modules[0].reference.version, "");
}

// =============================================================================
// Streaming Decode
// =============================================================================

#[test]
fn concatenated_objects_decode_in_order() {
    let input = br#"{"Path":"a","Version":"v1"}{"Path":"b","Version":"v2"}{"Path":"c","Version":"v3"}"#;
    let modules: Vec<Module> = decode_stream(input).unwrap();
    let names: Vec<_> = modules.iter().map(|m| m.reference.to_string()).collect();
    assert_eq!(names, ["a@v1", "b@v2", "c@v3"]);
}

#[test]
fn whitespace_between_objects_is_allowed() {
    let input = b"{\"Path\":\"a\"}\n\n  {\"Path\":\"b\"}\n";
    let modules: Vec<Module> = decode_stream(input).unwrap();
    assert_eq!(modules.len(), 2);
}

#[test]
fn empty_input_is_empty_stream() {
    let modules: Vec<Module> = decode_stream(b"").unwrap();
    assert!(modules.is_empty());
}

#[test]
fn truncated_object_is_an_error() {
    let result: Result<Vec<Module>, _> = decode_stream(b"{\"Path\":\"a\"}{\"Path\":");
    assert!(result.is_err());
}

#[test]
fn decode_modules_trims_go_diagnostics() {
    let output = b"go: downloading github.com/pkg/errors v0.9.1\n\
        {\"Path\":\"github.com/pkg/errors\",\"Version\":\"v0.9.1\",\"Dir\":\"/go/pkg/mod/github.com/pkg/errors@v0.9.1\"}\n";
    let modules = decode_modules(output).unwrap();
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0].reference.path, "github.com/pkg/errors");
}
