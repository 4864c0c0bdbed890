// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validator interfaces.
use crate::shape::Shape;

/// `Validator` is the entry point that checks a whole input and, on success, hands back the
/// validated form of it.
///
/// - `StructuralValidator`: checks one value against one capability requirement.
/// - `Validator`: combines structural checks into a boundary check for a compound input.
pub trait Validator<T: ?Sized>: Send + Sync {
    type Output;
    type Error;

    fn validate(&self, subject: &T) -> Result<Self::Output, Self::Error>;
}

/// `StructuralValidator` decides whether a single value exposes a required capability set.
///
/// **Key Considerations:**
/// - Judges the value only through [`Shape`]; the concrete type is never inspected.
/// - Must not panic for any input; a missing capability is reported through `Error`.
pub trait StructuralValidator: Send + Sync {
    type Error;

    fn validate_structure(&self, subject: &dyn Shape) -> Result<(), Self::Error>;
}
