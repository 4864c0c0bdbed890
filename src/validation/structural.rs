// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::error::PreconditionError;
use crate::shape::Shape;
use crate::validator::StructuralValidator;

/// `true` iff `value` can be both read and written by key.
pub fn supports_indexed_access<S: Shape + ?Sized>(value: &S) -> bool {
    value.capabilities().supports_indexed_access()
}

/// `true` iff `value` can produce a sequence of elements.
pub fn supports_iteration<S: Shape + ?Sized>(value: &S) -> bool {
    value.capabilities().supports_iteration()
}

/// `true` iff `value` is absent or empty, or else supports indexed access.
pub fn is_optional_indexed_access<S: Shape + ?Sized>(value: &S) -> bool {
    value.is_falsy() || supports_indexed_access(value)
}

/// Requires a key/value mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexedAccessRule {
    field: &'static str,
}

impl IndexedAccessRule {
    pub const fn new(field: &'static str) -> Self {
        Self { field }
    }
}

impl StructuralValidator for IndexedAccessRule {
    type Error = PreconditionError;

    fn validate_structure(&self, subject: &dyn Shape) -> Result<(), Self::Error> {
        if supports_indexed_access(subject) {
            Ok(())
        } else {
            Err(PreconditionError::NotMapping { field: self.field })
        }
    }
}

/// Requires something iterable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IterationRule {
    field: &'static str,
}

impl IterationRule {
    pub const fn new(field: &'static str) -> Self {
        Self { field }
    }
}

impl StructuralValidator for IterationRule {
    type Error = PreconditionError;

    fn validate_structure(&self, subject: &dyn Shape) -> Result<(), Self::Error> {
        if supports_iteration(subject) {
            Ok(())
        } else {
            Err(PreconditionError::NotIterable { field: self.field })
        }
    }
}

/// Accepts absence; anything present must be a key/value mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptionalIndexedAccessRule {
    field: &'static str,
}

impl OptionalIndexedAccessRule {
    pub const fn new(field: &'static str) -> Self {
        Self { field }
    }
}

impl StructuralValidator for OptionalIndexedAccessRule {
    type Error = PreconditionError;

    fn validate_structure(&self, subject: &dyn Shape) -> Result<(), Self::Error> {
        if is_optional_indexed_access(subject) {
            Ok(())
        } else {
            Err(PreconditionError::NotOptionalMapping { field: self.field })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::{BTreeSet, HashMap};

    #[test]
    fn predicates_accept_trait_objects() {
        let values: Vec<Box<dyn Shape>> = vec![
            Box::new(3_i32),
            Box::new("text"),
            Box::new(vec![1, 2]),
            Box::new(json!({"a": 1})),
        ];
        let mapped: Vec<bool> = values.iter().map(|v| supports_indexed_access(v)).collect();
        assert_eq!(mapped, [false, false, false, true]);
        let iterable: Vec<bool> = values.iter().map(|v| supports_iteration(v)).collect();
        assert_eq!(iterable, [false, true, true, true]);
    }

    #[test]
    fn optional_mapping_accepts_absence() {
        assert!(is_optional_indexed_access(&None::<HashMap<String, i32>>));
        assert!(is_optional_indexed_access(&json!(null)));
        assert!(is_optional_indexed_access(&json!({})));
        assert!(is_optional_indexed_access(&Vec::<i32>::new()));
        assert!(!is_optional_indexed_access(&vec!["x"]));
        assert!(!is_optional_indexed_access(&BTreeSet::from([1])));
    }

    #[test]
    fn rules_report_the_field() {
        let err = IterationRule::new("categories")
            .validate_structure(&7_u8)
            .unwrap_err();
        assert_eq!(err, PreconditionError::NotIterable { field: "categories" });

        let err = IndexedAccessRule::new("attributes")
            .validate_structure(&"k=v")
            .unwrap_err();
        assert_eq!(err, PreconditionError::NotMapping { field: "attributes" });

        assert!(OptionalIndexedAccessRule::new("attributes")
            .validate_structure(&())
            .is_ok());
    }
}
