// SPDX-License-Identifier: MIT OR Apache-2.0

//! `Shape` for standard library values.
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ops::Range;
use std::rc::Rc;
use std::sync::Arc;

use super::{Capabilities, MapKey, Shape};

impl Shape for () {
    fn capabilities(&self) -> Capabilities {
        Capabilities::none()
    }

    fn is_falsy(&self) -> bool {
        true
    }
}

impl Shape for bool {
    fn capabilities(&self) -> Capabilities {
        Capabilities::none()
    }

    fn is_falsy(&self) -> bool {
        !*self
    }
}

macro_rules! scalar_shape {
    ($zero:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Shape for $ty {
                fn capabilities(&self) -> Capabilities {
                    Capabilities::none()
                }

                fn is_falsy(&self) -> bool {
                    *self == $zero
                }
            }
        )+
    };
}

scalar_shape!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
scalar_shape!(0.0 => f32, f64);

// Text iterates over its characters but is neither a mapping nor writable.
impl Shape for str {
    fn capabilities(&self) -> Capabilities {
        Capabilities::sequence()
    }

    fn is_falsy(&self) -> bool {
        self.is_empty()
    }

    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Shape for String {
    fn capabilities(&self) -> Capabilities {
        Capabilities::sequence()
    }

    fn is_falsy(&self) -> bool {
        self.is_empty()
    }

    fn as_text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

macro_rules! sequence_shape {
    ($([$($gen:tt)*] $ty:ty),+ $(,)?) => {
        $(
            impl<$($gen)*> Shape for $ty {
                fn capabilities(&self) -> Capabilities {
                    Capabilities::sequence()
                }

                fn is_falsy(&self) -> bool {
                    self.is_empty()
                }
            }
        )+
    };
}

sequence_shape!(
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
    [T, S] HashSet<T, S>,
    [T] BTreeSet<T>,
    [Idx: PartialOrd] Range<Idx>,
);

macro_rules! text_key {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl MapKey for $ty {
                fn as_str_key(&self) -> Option<&str> {
                    Some(self)
                }
            }
        )+
    };
}

text_key!(str, String, Box<str>, Rc<str>, Arc<str>, Cow<'_, str>);

macro_rules! opaque_key {
    ($($ty:ty),+ $(,)?) => {
        $(impl MapKey for $ty {})+
    };
}

opaque_key!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl<A, B> MapKey for (A, B) {}
impl<A, B, C> MapKey for (A, B, C) {}

impl<K: MapKey, V, S> Shape for HashMap<K, V, S> {
    fn capabilities(&self) -> Capabilities {
        Capabilities::mapping()
    }

    fn is_falsy(&self) -> bool {
        self.is_empty()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.keys().any(|k| k.as_str_key() == Some(key))
    }
}

impl<K: MapKey, V> Shape for BTreeMap<K, V> {
    fn capabilities(&self) -> Capabilities {
        Capabilities::mapping()
    }

    fn is_falsy(&self) -> bool {
        self.is_empty()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.keys().any(|k| k.as_str_key() == Some(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_expose_nothing() {
        assert_eq!(42_i64.capabilities(), Capabilities::none());
        assert_eq!(1.5_f64.capabilities(), Capabilities::none());
        assert_eq!(true.capabilities(), Capabilities::none());
        assert_eq!(().capabilities(), Capabilities::none());
    }

    #[test]
    fn zero_and_false_are_falsy() {
        assert!(0_u8.is_falsy());
        assert!(0.0_f32.is_falsy());
        assert!(false.is_falsy());
        assert!(!7_i32.is_falsy());
        assert!(!f64::NAN.is_falsy());
    }

    #[test]
    fn text_iterates_but_is_not_a_mapping() {
        let caps = "alice".capabilities();
        assert!(caps.supports_iteration());
        assert!(!caps.supports_indexed_access());
        assert_eq!("alice".as_text(), Some("alice"));
        assert_eq!(String::from("bob").as_text(), Some("bob"));
        assert!("".is_falsy());
    }

    #[test]
    fn sequences_are_iterable_only() {
        let list = vec!["admin", "user"];
        assert_eq!(list.capabilities(), Capabilities::sequence());
        assert!(!list.is_falsy());
        assert!(Vec::<u8>::new().is_falsy());
        assert!([0u8; 0].is_falsy());
        assert!((3..3).is_falsy());
        assert!(!(0..3).is_falsy());
    }

    #[test]
    fn string_keyed_maps_are_mappings() {
        let mut attrs = HashMap::new();
        attrs.insert("age".to_string(), 30);
        assert_eq!(attrs.capabilities(), Capabilities::mapping());
        assert!(Shape::contains_key(&attrs, "age"));
        assert!(!Shape::contains_key(&attrs, "height"));

        let ordered: BTreeMap<&str, i32> = BTreeMap::new();
        assert!(ordered.is_falsy());
        assert!(ordered.capabilities().supports_indexed_access());
    }

    #[test]
    fn integer_keyed_maps_are_mappings_without_text_lookup() {
        let scores = HashMap::from([(1_u32, 2_u32)]);
        assert_eq!(scores.capabilities(), Capabilities::mapping());
        assert!(!scores.is_falsy());
        assert!(!Shape::contains_key(&scores, "1"));

        let ordered = BTreeMap::from([((1_i8, 'a'), "x")]);
        assert!(ordered.capabilities().supports_indexed_access());
    }

    #[test]
    fn shared_text_keys_answer_lookups() {
        let map: BTreeMap<Arc<str>, u8> = BTreeMap::from([(Arc::from("name"), 1)]);
        assert!(Shape::contains_key(&map, "name"));
        assert!(!Shape::contains_key(&map, "age"));
    }
}
