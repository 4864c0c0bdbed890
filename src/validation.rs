// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structural predicates and the precondition rules built on them.
mod precondition;
mod structural;

pub use precondition::{check_result, Preconditions, DEFAULT_RESULT_KEYS};
pub use structural::{
    is_optional_indexed_access, supports_indexed_access, supports_iteration, IndexedAccessRule,
    IterationRule, OptionalIndexedAccessRule,
};
