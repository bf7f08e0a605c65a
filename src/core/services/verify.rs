//! Completeness verification
//!
//! Every requested reference must be covered by exactly the module records
//! produced for it. Misses are collected, never short-circuited.

use std::collections::{HashMap, HashSet};

use crate::core::error::{MultiError, ResolveError};
use crate::core::models::{Module, ModuleReference};

/// Check that every requested reference was fetched
///
/// A reference is unresolved when no fetched module carries it, or when the
/// module record carries a tool-reported error. Each unresolved reference is
/// reported once, in request order.
pub fn verify_fetched(
    fetched: &[Module],
    requested: &[ModuleReference],
) -> Result<(), MultiError<ResolveError>> {
    let fetched_refs: HashMap<&ModuleReference, &Module> =
        fetched.iter().map(|m| (&m.reference, m)).collect();

    let mut seen = HashSet::new();
    let mut errors = MultiError::new();
    for reference in requested {
        if !seen.insert(reference) {
            continue;
        }
        match fetched_refs.get(reference) {
            None => errors.push(ResolveError::Unresolved(reference.clone())),
            Some(module) => {
                if let Some(message) = module.error() {
                    errors.push(ResolveError::Failed {
                        reference: reference.clone(),
                        message: message.to_string(),
                    });
                }
            },
        }
    }
    errors.into_result()
}
