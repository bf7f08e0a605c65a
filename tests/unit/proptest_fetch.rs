//! Property-based tests for the fetcher
//!
//! Uses proptest to verify properties that should hold for any request.

use std::collections::HashSet;

use lichen::core::Context;
use lichen::core::models::ModuleReference;
use lichen::core::services::Fetcher;
use proptest::prelude::*;

use crate::common::mocks::MockModuleTool;

fn reference() -> impl Strategy<Value = ModuleReference> {
    prop_oneof![
        ("[a-z]{1,8}\\.com/[a-z]{1,8}", "v[0-9]\\.[0-9]\\.[0-9]")
            .prop_map(|(path, version)| ModuleReference::new(path, version)),
        "\\./[a-z]{1,8}".prop_map(|path| ModuleReference::local(path)),
    ]
}

proptest! {
    /// Every distinct request comes back exactly once
    #[test]
    fn one_module_per_distinct_reference(refs in prop::collection::vec(reference(), 1..12)) {
        let fetcher = Fetcher::new(MockModuleTool::echo());
        let modules = fetcher.fetch(&Context::background(), &refs).unwrap();

        let requested: HashSet<_> = refs.iter().collect();
        let fetched: Vec<_> = modules.iter().map(|m| &m.reference).collect();
        prop_assert_eq!(fetched.len(), requested.len());
        prop_assert_eq!(fetched.into_iter().collect::<HashSet<_>>(), requested);
    }

    /// Local references never reach the tool
    #[test]
    fn local_references_never_passed(refs in prop::collection::vec(reference(), 1..12)) {
        let fetcher = Fetcher::new(MockModuleTool::echo());
        fetcher.fetch(&Context::background(), &refs).unwrap();

        for call in fetcher.tool().invocations() {
            prop_assert!(call.args.iter().all(|a| !a.starts_with("./")));
        }
    }
}
