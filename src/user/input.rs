// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

use crate::shape::Shape;

/// Unchecked arguments for creating a user.
#[derive(Clone, Copy)]
pub struct UserInput<'a> {
    pub name: &'a dyn Shape,
    pub categories: &'a dyn Shape,
    pub attributes: Option<&'a dyn Shape>,
}

impl<'a> UserInput<'a> {
    pub fn new<N, C>(name: &'a N, categories: &'a C) -> Self
    where
        N: Shape + 'a,
        C: Shape + 'a,
    {
        Self {
            name,
            categories,
            attributes: None,
        }
    }

    pub fn with_attributes<A: Shape + 'a>(mut self, attributes: &'a A) -> Self {
        self.attributes = Some(attributes);
        self
    }
}

/// A user that passed the preconditions, as handed to a [`UserStore`](super::UserStore).
#[derive(Clone, Copy)]
pub struct NewUser<'a> {
    pub name: &'a str,
    pub categories: &'a dyn Shape,
    pub attributes: Option<&'a dyn Shape>,
}

impl fmt::Debug for NewUser<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("name", &self.name)
            .field("categories", &self.categories.capabilities())
            .field(
                "attributes",
                &self.attributes.map(|attrs| attrs.capabilities()),
            )
            .finish()
    }
}
