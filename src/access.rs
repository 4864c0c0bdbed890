// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static capability interfaces.
//!
//! [`IndexedAccess`] declares the read-by-key and write-by-key operations of a mapping.
//! Wrapping any implementor in [`Mapping`], any iterable collection in [`Sequence`], or any
//! iterator in [`Lazy`], turns it into a [`Shape`] so it passes the structural checks
//! without the checks ever learning its concrete type.
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use serde_json::{Map, Value};

use crate::shape::{Capabilities, MapKey, Shape};

/// `IndexedAccess` is the "dict-like" capability: get and set by key.
pub trait IndexedAccess {
    type Key;
    type Value;

    fn get<Q>(&self, key: &Q) -> Option<&Self::Value>
    where
        Self::Key: Borrow<Q>,
        Q: Hash + Ord + ?Sized;

    /// Stores `value` under `key`, returning the value it replaced.
    fn set(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    fn len(&self) -> usize;

    fn keys(&self) -> impl Iterator<Item = &Self::Key>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K, V, S> IndexedAccess for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        HashMap::get(self, key)
    }

    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn keys(&self) -> impl Iterator<Item = &K> {
        HashMap::keys(self)
    }
}

impl<K: Ord, V> IndexedAccess for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        BTreeMap::get(self, key)
    }

    fn set(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn keys(&self) -> impl Iterator<Item = &K> {
        BTreeMap::keys(self)
    }
}

impl IndexedAccess for Map<String, Value> {
    type Key = String;
    type Value = Value;

    fn get<Q>(&self, key: &Q) -> Option<&Value>
    where
        String: Borrow<Q>,
        Q: Hash + Ord + ?Sized,
    {
        Map::get(self, key)
    }

    fn set(&mut self, key: String, value: Value) -> Option<Value> {
        self.insert(key, value)
    }

    fn len(&self) -> usize {
        Map::len(self)
    }

    fn keys(&self) -> impl Iterator<Item = &String> {
        Map::keys(self)
    }
}

/// Any [`IndexedAccess`] implementor, viewed as a mapping-shaped value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Mapping<M>(pub M);

impl<M> Shape for Mapping<M>
where
    M: IndexedAccess,
    M::Key: MapKey,
{
    fn capabilities(&self) -> Capabilities {
        Capabilities::mapping()
    }

    fn is_falsy(&self) -> bool {
        self.0.is_empty()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.0.keys().any(|k| k.as_str_key() == Some(key))
    }
}

/// Any collection that can be iterated by reference, viewed as a sequence-shaped value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence<I>(pub I);

impl<I> Shape for Sequence<I>
where
    for<'a> &'a I: IntoIterator,
{
    fn capabilities(&self) -> Capabilities {
        Capabilities::sequence()
    }

    fn is_falsy(&self) -> bool {
        (&self.0).into_iter().next().is_none()
    }
}

/// Any iterator, viewed as a lazily produced sequence.
///
/// The iterator is never advanced, so emptiness is unknown and a `Lazy` is always truthy.
#[derive(Clone, Debug)]
pub struct Lazy<I>(pub I);

impl<I: Iterator> Shape for Lazy<I> {
    fn capabilities(&self) -> Capabilities {
        Capabilities::sequence()
    }

    fn is_falsy(&self) -> bool {
        false
    }
}
