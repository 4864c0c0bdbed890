// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::shape::Shape;

use super::NewUser;

/// `UserStore` is the persistence collaborator behind the gate.
///
/// **Key Considerations:**
/// - Only ever called with a [`NewUser`] that passed every precondition.
/// - The outcome is either a plain acknowledgement (`bool`) or a record echo; record echoes
///   are checked when the gate is configured to do so.
pub trait UserStore {
    type Outcome: Shape;

    fn save(&self, user: &NewUser<'_>) -> Self::Outcome;
}

impl<T: UserStore + ?Sized> UserStore for &T {
    type Outcome = T::Outcome;

    fn save(&self, user: &NewUser<'_>) -> Self::Outcome {
        (**self).save(user)
    }
}
