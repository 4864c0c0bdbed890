// SPDX-License-Identifier: MIT OR Apache-2.0

//! The user-creation gate: structural preconditions in front of an opaque store.
mod gate;
mod input;
mod store;

pub use gate::{create_user, UserGate};
pub use input::{NewUser, UserInput};
pub use store::UserStore;
