// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structural capability checks for values of unknown shape.
//!
//! Values are accepted by the operations they expose ([`Shape`]), not by their type name.
//! The [`user`] module puts these checks in front of an opaque persistence collaborator as
//! a precondition gate.
pub mod access;
pub mod config;
pub mod error;
pub mod shape;
pub mod user;
pub mod validation;
pub mod validator;

pub use access::{IndexedAccess, Lazy, Mapping, Sequence};
pub use config::GateConfig;
pub use error::{ConfigError, PreconditionError, Result};
pub use shape::{Capabilities, MapKey, Shape};
pub use user::{create_user, NewUser, UserGate, UserInput, UserStore};
pub use validation::{
    check_result, is_optional_indexed_access, supports_indexed_access, supports_iteration,
    IndexedAccessRule, IterationRule, OptionalIndexedAccessRule, Preconditions,
};
pub use validator::{StructuralValidator, Validator};
