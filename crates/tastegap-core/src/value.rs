use crate::{Document, Error, Result};

use std::cmp::Ordering;

/// A value stored in, or returned from, the record collection.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value, also used for missing fields
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// Double-precision float
    F64(f64),

    /// String value
    String(String),

    /// Nested document
    Document(Document),

    /// A list of values
    List(Vec<Value>),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::I64(v) => Some(v as f64),
            Self::F64(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_document(&self) -> Option<&Document> {
        match self {
            Self::Document(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn to_string_value(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            other => Err(Error::invalid_result(format!(
                "expected string, got {}",
                other.type_name()
            ))),
        }
    }

    pub fn to_u64(&self) -> Result<u64> {
        match *self {
            Self::I64(v) if v >= 0 => Ok(v as u64),
            Self::F64(v) if v >= 0.0 && v.fract() == 0.0 => Ok(v as u64),
            ref other => Err(Error::invalid_result(format!(
                "expected non-negative integer, got {}",
                other.type_name()
            ))),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::I64(_) => "i64",
            Self::F64(_) => "f64",
            Self::String(_) => "string",
            Self::Document(_) => "document",
            Self::List(_) => "list",
        }
    }

    /// Compares two values the way the document store orders them.
    ///
    /// Types rank `null < numbers < strings < documents < lists < bools`.
    /// Integers and floats compare numerically with each other.
    pub fn cmp_stored(&self, other: &Value) -> Ordering {
        use Value::*;

        if let (Some(a), Some(b)) = (self.as_f64(), other.as_f64()) {
            return match (self, other) {
                (I64(a), I64(b)) => a.cmp(b),
                _ => a.total_cmp(&b),
            };
        }

        match (self, other) {
            (String(a), String(b)) => a.cmp(b),
            (Bool(a), Bool(b)) => a.cmp(b),
            (Document(a), Document(b)) => {
                for ((ka, va), (kb, vb)) in a.iter().zip(b.iter()) {
                    let ord = ka.cmp(kb).then_with(|| va.cmp_stored(vb));
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                a.len().cmp(&b.len())
            }
            (List(a), List(b)) => {
                for (va, vb) in a.iter().zip(b.iter()) {
                    let ord = va.cmp_stored(vb);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
                a.len().cmp(&b.len())
            }
            (a, b) => a.type_rank().cmp(&b.type_rank()),
        }
    }

    /// Equality as used by filters and grouping: `I64(4)` equals `F64(4.0)`.
    pub fn eq_stored(&self, other: &Value) -> bool {
        self.cmp_stored(other) == Ordering::Equal
    }

    fn type_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::I64(_) | Self::F64(_) => 1,
            Self::String(_) => 2,
            Self::Document(_) => 3,
            Self::List(_) => 4,
            Self::Bool(_) => 5,
        }
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<u64> for Value {
    fn from(src: u64) -> Self {
        i64::try_from(src).map(Self::I64).unwrap_or(Self::F64(src as f64))
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<Document> for Value {
    fn from(src: Document) -> Self {
        Self::Document(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        src.map(Into::into).unwrap_or(Self::Null)
    }
}

impl From<Vec<Value>> for Value {
    fn from(src: Vec<Value>) -> Self {
        Self::List(src)
    }
}

impl From<serde_json::Value> for Value {
    fn from(src: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match src {
            Json::Null => Self::Null,
            Json::Bool(v) => Self::Bool(v),
            Json::Number(n) => match n.as_i64() {
                Some(v) => Self::I64(v),
                None => Self::F64(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(v) => Self::String(v),
            Json::Array(items) => Self::List(items.into_iter().map(Value::from).collect()),
            Json::Object(fields) => Self::Document(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Value::String(val) if val == other)
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::I64(val) if val == other)
    }
}
