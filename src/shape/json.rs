// SPDX-License-Identifier: MIT OR Apache-2.0

//! `Shape` for dynamic JSON values, the usual carrier for input of unknown origin.
use serde_json::{Map, Value};

use super::{Capabilities, Shape};

impl Shape for Value {
    fn capabilities(&self) -> Capabilities {
        match self {
            Value::Null | Value::Bool(_) | Value::Number(_) => Capabilities::none(),
            Value::String(_) | Value::Array(_) => Capabilities::sequence(),
            Value::Object(_) => Capabilities::mapping(),
        }
    }

    fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(flag) => !flag,
            Value::Number(number) => number.as_f64() == Some(0.0),
            Value::String(text) => text.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }

    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn contains_key(&self, key: &str) -> bool {
        self.as_object().is_some_and(|map| map.contains_key(key))
    }
}

impl Shape for Map<String, Value> {
    fn capabilities(&self) -> Capabilities {
        Capabilities::mapping()
    }

    fn is_falsy(&self) -> bool {
        self.is_empty()
    }

    fn contains_key(&self, key: &str) -> bool {
        Map::contains_key(self, key)
    }
}
