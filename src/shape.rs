// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability reports for values of unknown origin.
//!
//! A value is judged by the operations it exposes, never by its type name. Anything that
//! implements [`Shape`] can be handed to the predicates in [`crate::validation`], including
//! trait objects, so heterogeneous inputs are checked uniformly.
mod capabilities;
mod json;
mod std_impls;

pub use capabilities::Capabilities;

/// `Shape` is the explicit capability interface every validation subject implements.
///
/// **Key Considerations:**
/// - Implementations must be pure: probing a value never mutates it and never panics.
/// - `as_text` and `contains_key` default to "not supported", so most implementors only
///   describe their capabilities and falsiness.
pub trait Shape {
    /// Operations this value exposes.
    fn capabilities(&self) -> Capabilities;

    /// `true` when the value is absent, empty, zero or `false`.
    fn is_falsy(&self) -> bool;

    /// Borrowed text when the value is a string.
    fn as_text(&self) -> Option<&str> {
        None
    }

    /// Membership test by string key.
    ///
    /// Implementors that report [`Capabilities::mapping`] must override this; the default
    /// answers `false` for every key, so a result check would see all keys as missing.
    fn contains_key(&self, _key: &str) -> bool {
        false
    }
}

/// Key types a mapping may use.
///
/// Mappings are mapping-shaped whatever their key type; `as_str_key` only decides whether a
/// key can answer a [`Shape::contains_key`] lookup. Non-text keys keep the default `None`.
pub trait MapKey {
    fn as_str_key(&self) -> Option<&str> {
        None
    }
}

impl<T: MapKey + ?Sized> MapKey for &T {
    fn as_str_key(&self) -> Option<&str> {
        (**self).as_str_key()
    }
}

impl<T: Shape + ?Sized> Shape for &T {
    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }

    fn is_falsy(&self) -> bool {
        (**self).is_falsy()
    }

    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }

    fn contains_key(&self, key: &str) -> bool {
        (**self).contains_key(key)
    }
}

impl<T: Shape + ?Sized> Shape for Box<T> {
    fn capabilities(&self) -> Capabilities {
        (**self).capabilities()
    }

    fn is_falsy(&self) -> bool {
        (**self).is_falsy()
    }

    fn as_text(&self) -> Option<&str> {
        (**self).as_text()
    }

    fn contains_key(&self, key: &str) -> bool {
        (**self).contains_key(key)
    }
}

/// `None` is the canonical absent value.
impl<T: Shape> Shape for Option<T> {
    fn capabilities(&self) -> Capabilities {
        self.as_ref()
            .map_or_else(Capabilities::none, |inner| inner.capabilities())
    }

    fn is_falsy(&self) -> bool {
        self.as_ref().map_or(true, |inner| inner.is_falsy())
    }

    fn as_text(&self) -> Option<&str> {
        self.as_ref().and_then(|inner| inner.as_text())
    }

    fn contains_key(&self, key: &str) -> bool {
        self.as_ref().is_some_and(|inner| inner.contains_key(key))
    }
}
