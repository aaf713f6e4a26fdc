//! Dynamic values for type-checking rules
//!
//! Most rules are generic over the value type. The type-check primitives
//! ([`array`](crate::array), [`number`](crate::number), ...) need to inspect
//! values whose shape is only known at runtime, and work over [`Value`].
//!
//! # Example
//!
//! ```rust
//! use okay::{number, string, Value};
//!
//! assert!(number().check(&Value::from(42), &()).unwrap());
//! assert!(!number().check(&Value::from("42"), &()).unwrap());
//! assert!(string().check(&Value::from("42"), &()).unwrap());
//! ```

#[cfg(feature = "serde")]
mod serde_impl;

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::time::SystemTime;

/// A dynamically typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A number. Integers are stored as `f64`.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered list of values.
    Array(Vec<Value>),
    /// A string-keyed map of values.
    Object(BTreeMap<String, Value>),
    /// A point in time.
    Date(SystemTime),
}

impl Value {
    /// Name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Date(_) => "date",
        }
    }

    /// Returns true for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true when the value has nothing in it.
    ///
    /// Strings, arrays and objects are empty when they have no elements.
    /// Scalars (null, booleans, numbers, dates) have no elements and are
    /// always empty.
    ///
    /// ```rust
    /// use okay::Value;
    ///
    /// assert!(Value::Null.is_empty());
    /// assert!(Value::from(1).is_empty());
    /// assert!(Value::from("").is_empty());
    /// assert!(!Value::from(vec![1, 2, 3]).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        match self {
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(fields) => fields.is_empty(),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Date(_) => true,
        }
    }

    /// The string slice, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The number, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Values of the same kind compare naturally; different kinds are unordered.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => a.partial_cmp(b),
            (Value::Date(a), Value::Date(b)) => a.partial_cmp(b),
            (Value::Array(a), Value::Array(b)) => a.partial_cmp(b),
            (Value::Object(a), Value::Object(b)) if a == b => Some(Ordering::Equal),
            _ => None,
        }
    }
}

// Numbers compare with Rust numerics; every other kind is unequal and
// unordered.
macro_rules! number_cmp {
    ($($ty:ty),*) => {
        $(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    self.as_f64() == Some(*other as f64)
                }
            }

            impl PartialOrd<$ty> for Value {
                fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                    self.as_f64().and_then(|n| n.partial_cmp(&(*other as f64)))
                }
            }
        )*
    };
}

number_cmp!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! number_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

number_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<SystemTime> for Value {
    fn from(t: SystemTime) -> Self {
        Value::Date(t)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Value::Object(fields)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<K: Into<String>, T: Into<Value>> FromIterator<(K, T)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let fields = iter.into_iter().map(|(k, v)| (k.into(), v.into()));
        Value::Object(fields.collect())
    }
}
