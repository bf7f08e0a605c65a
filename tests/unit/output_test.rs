//! Tests for human and JSON rendering of fetch results

use std::path::PathBuf;

use lichen::core::models::{Module, ModuleReference};
use lichen::output::FetchResult;

fn sample() -> Vec<Module> {
    vec![
        Module {
            dir: Some(PathBuf::from("/go/pkg/mod/github.com/pkg/errors@v0.9.1")),
            sum: Some("h1:FEBLx1zS214owpjy7qsBeixbURkuhQAwrK5UwLGTwt4=".to_string()),
            ..Module::unresolved(ModuleReference::new("github.com/pkg/errors", "v0.9.1"))
        },
        Module::unresolved(ModuleReference::local("./tools")),
    ]
}

#[test]
fn human_lists_each_module() {
    let text = FetchResult::from_modules(&sample()).to_human();
    assert!(text.starts_with("Fetched 2 module(s):"));
    assert!(text.contains("github.com/pkg/errors@v0.9.1 -> /go/pkg/mod/github.com/pkg/errors@v0.9.1"));
    assert!(text.contains("./tools -> (local)"));
}

#[test]
fn human_empty() {
    assert_eq!(FetchResult::from_modules(&[]).to_human(), "No modules requested.\n");
}

#[test]
fn json_is_parseable() {
    let json = FetchResult::from_modules(&sample()).to_json();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let modules = value["modules"].as_array().unwrap();
    assert_eq!(modules.len(), 2);
    assert_eq!(modules[0]["version"], "v0.9.1");
    assert_eq!(modules[0]["local"], false);
    assert_eq!(modules[1]["local"], true);
    assert!(modules[1].get("version").is_none());
    assert!(modules[1].get("dir").is_none());
}
