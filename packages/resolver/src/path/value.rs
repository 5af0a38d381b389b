//! Data values the resolver walks
//!
//! The resolver only needs three questions answered about a node: is it an
//! object, an array or a scalar; which child sits under a key; which child
//! sits at an index. [`PathTarget`] is that seam. It is implemented for the
//! owned [`DataValue`] tree and directly for `serde_json::Value`, so values
//! handed over by a JSON-schema validator can be resolved without copying.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Structural kind of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Keyed members; entered only through object keys
    Object,
    /// Ordered elements; entered only through `Index` tokens
    Array,
    /// Leaf; nothing can be entered
    Scalar,
}

/// A tree the resolver can walk
pub trait PathTarget {
    /// Structural kind of this node
    fn shape(&self) -> Shape;

    /// Child under `key`, if this node is an object holding it
    fn member(&self, key: &str) -> Option<&Self>;

    /// Child at `index`, if this node is an array long enough to hold it
    fn element(&self, index: usize) -> Option<&Self>;
}

/// Opaque leaf value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

/// Owned data tree supplied by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum DataValue {
    Object(HashMap<String, DataValue>),
    Array(Vec<DataValue>),
    Scalar(Scalar),
}

impl DataValue {
    /// Build an object from `(key, value)` pairs; later duplicates win
    #[must_use]
    pub fn object<K, I>(members: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, DataValue)>,
    {
        DataValue::Object(
            members
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Build an array from its elements
    #[must_use]
    pub fn array<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = DataValue>,
    {
        DataValue::Array(elements.into_iter().collect())
    }

    #[inline]
    #[must_use]
    pub fn null() -> Self {
        DataValue::Scalar(Scalar::Null)
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&HashMap<String, DataValue>> {
        match self {
            DataValue::Object(members) => Some(members),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[DataValue]> {
        match self {
            DataValue::Array(elements) => Some(elements),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, DataValue::Scalar(_))
    }
}

impl PathTarget for DataValue {
    #[inline]
    fn shape(&self) -> Shape {
        match self {
            DataValue::Object(_) => Shape::Object,
            DataValue::Array(_) => Shape::Array,
            DataValue::Scalar(_) => Shape::Scalar,
        }
    }

    #[inline]
    fn member(&self, key: &str) -> Option<&Self> {
        self.as_object().and_then(|members| members.get(key))
    }

    #[inline]
    fn element(&self, index: usize) -> Option<&Self> {
        self.as_array().and_then(|elements| elements.get(index))
    }
}

impl PathTarget for Value {
    #[inline]
    fn shape(&self) -> Shape {
        match self {
            Value::Object(_) => Shape::Object,
            Value::Array(_) => Shape::Array,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Shape::Scalar,
        }
    }

    #[inline]
    fn member(&self, key: &str) -> Option<&Self> {
        self.as_object().and_then(|members| members.get(key))
    }

    #[inline]
    fn element(&self, index: usize) -> Option<&Self> {
        self.as_array().and_then(|elements| elements.get(index))
    }
}

impl From<Value> for DataValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(members) => DataValue::Object(
                members
                    .into_iter()
                    .map(|(key, value)| (key, DataValue::from(value)))
                    .collect(),
            ),
            Value::Array(elements) => {
                DataValue::Array(elements.into_iter().map(DataValue::from).collect())
            }
            Value::Null => DataValue::Scalar(Scalar::Null),
            Value::Bool(b) => DataValue::Scalar(Scalar::Bool(b)),
            Value::Number(n) => DataValue::Scalar(Scalar::Number(n)),
            Value::String(s) => DataValue::Scalar(Scalar::String(s)),
        }
    }
}

impl From<DataValue> for Value {
    fn from(value: DataValue) -> Self {
        match value {
            DataValue::Object(members) => Value::Object(
                members
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect::<Map<String, Value>>(),
            ),
            DataValue::Array(elements) => {
                Value::Array(elements.into_iter().map(Value::from).collect())
            }
            DataValue::Scalar(Scalar::Null) => Value::Null,
            DataValue::Scalar(Scalar::Bool(b)) => Value::Bool(b),
            DataValue::Scalar(Scalar::Number(n)) => Value::Number(n),
            DataValue::Scalar(Scalar::String(s)) => Value::String(s),
        }
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::Scalar(Scalar::String(s))
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Scalar(Scalar::Bool(b))
    }
}

impl From<i64> for DataValue {
    fn from(n: i64) -> Self {
        DataValue::Scalar(Scalar::Number(Number::from(n)))
    }
}
