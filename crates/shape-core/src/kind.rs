//! # Value Kinds
//!
//! The runtime type taxonomy used by type-membership checks. Every JSON value
//! has exactly one concrete kind; `Number` and `Any` are abstract kinds that
//! admit several concrete ones.
//!
//! | Kind | Admits |
//! |------|--------|
//! | `Null` | `null` |
//! | `Boolean` | `true`, `false` |
//! | `Integer` | numbers stored as `i64`/`u64` |
//! | `Float` | numbers stored as `f64` |
//! | `Number` | `Integer`, `Float` |
//! | `String` | strings |
//! | `Array` | arrays |
//! | `Object` | objects |
//! | `Any` | every present value |
//!
//! Booleans are not integers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ShapeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Null,
    Boolean,
    Integer,
    Float,
    Number,
    String,
    Array,
    Object,
    Any,
}

impl Kind {
    /// Returns the concrete kind of a value. Never `Number` or `Any`.
    pub fn of(value: &Value) -> Kind {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => Kind::Integer,
            Value::Number(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }

    /// Returns true if `self` is `ancestor` or inherits from it.
    pub fn is_a(self, ancestor: Kind) -> bool {
        match ancestor {
            Kind::Any => true,
            Kind::Number => matches!(self, Kind::Integer | Kind::Float | Kind::Number),
            other => self == other,
        }
    }

    /// Returns true if `value` is an instance of this kind.
    pub fn admits(self, value: &Value) -> bool {
        Kind::of(value).is_a(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(Self::Null),
            "boolean" => Ok(Self::Boolean),
            "integer" => Ok(Self::Integer),
            "float" => Ok(Self::Float),
            "number" => Ok(Self::Number),
            "string" => Ok(Self::String),
            "array" => Ok(Self::Array),
            "object" => Ok(Self::Object),
            "any" => Ok(Self::Any),
            other => Err(ShapeError::UnknownKind(other.to_string())),
        }
    }
}
