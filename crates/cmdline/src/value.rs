//! Decoded flag values and the scalar types a slot can hold.

use crate::kind::FlagKind;
use std::fmt;

/// A decoded flag value, tagged with its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    Int(isize),
    Int64(i64),
    Float(f64),
    String(String),
    Bool(bool),
}

impl FlagValue {
    #[must_use]
    pub const fn kind(&self) -> FlagKind {
        match self {
            Self::Int(_) => FlagKind::Int,
            Self::Int64(_) => FlagKind::Int64,
            Self::Float(_) => FlagKind::Float,
            Self::String(_) => FlagKind::String,
            Self::Bool(_) => FlagKind::Bool,
        }
    }

    /// The zero value a freshly registered flag of `kind` holds.
    #[must_use]
    pub const fn zero(kind: FlagKind) -> Self {
        match kind {
            FlagKind::Int => Self::Int(0),
            FlagKind::Int64 => Self::Int64(0),
            FlagKind::Float => Self::Float(0.0),
            FlagKind::String => Self::String(String::new()),
            FlagKind::Bool => Self::Bool(false),
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(v) => f.write_str(v),
            Self::Bool(v) => write!(f, "{v}"),
        }
    }
}

/// A payload type a [`Slot`](crate::Slot) can store.
///
/// `decode` returns `None` when the token is not a valid literal of the kind;
/// the slot then stays untouched.
pub trait Scalar: Default + Clone + fmt::Debug + 'static {
    const KIND: FlagKind;

    fn decode(raw: &str) -> Option<Self>;

    fn into_value(self) -> FlagValue;

    fn from_value(value: FlagValue) -> Option<Self>;
}

impl Scalar for isize {
    const KIND: FlagKind = FlagKind::Int;

    fn decode(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn into_value(self) -> FlagValue {
        FlagValue::Int(self)
    }

    fn from_value(value: FlagValue) -> Option<Self> {
        match value {
            FlagValue::Int(v) => Some(v),
            _ => None,
        }
    }
}

impl Scalar for i64 {
    const KIND: FlagKind = FlagKind::Int64;

    fn decode(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn into_value(self) -> FlagValue {
        FlagValue::Int64(self)
    }

    fn from_value(value: FlagValue) -> Option<Self> {
        match value {
            FlagValue::Int64(v) => Some(v),
            _ => None,
        }
    }
}

impl Scalar for f64 {
    const KIND: FlagKind = FlagKind::Float;

    fn decode(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }

    fn into_value(self) -> FlagValue {
        FlagValue::Float(self)
    }

    fn from_value(value: FlagValue) -> Option<Self> {
        match value {
            FlagValue::Float(v) => Some(v),
            _ => None,
        }
    }
}

impl Scalar for String {
    const KIND: FlagKind = FlagKind::String;

    fn decode(raw: &str) -> Option<Self> {
        Some(raw.to_owned())
    }

    fn into_value(self) -> FlagValue {
        FlagValue::String(self)
    }

    fn from_value(value: FlagValue) -> Option<Self> {
        match value {
            FlagValue::String(v) => Some(v),
            _ => None,
        }
    }
}

impl Scalar for bool {
    const KIND: FlagKind = FlagKind::Bool;

    // Only these four spellings are true; every other token, "TRUE" included, is false.
    fn decode(raw: &str) -> Option<Self> {
        Some(matches!(raw, "T" | "t" | "True" | "true"))
    }

    fn into_value(self) -> FlagValue {
        FlagValue::Bool(self)
    }

    fn from_value(value: FlagValue) -> Option<Self> {
        match value {
            FlagValue::Bool(v) => Some(v),
            _ => None,
        }
    }
}
