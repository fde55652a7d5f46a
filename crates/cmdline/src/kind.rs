use crate::error::FlagError;
use std::fmt;
use std::str::FromStr;

/// The scalar kind a flag decodes its token into. Fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKind {
    /// Platform-width signed integer (`isize`).
    Int,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point.
    Float,
    /// Verbatim string.
    String,
    /// Boolean switch.
    Bool,
}

impl FlagKind {
    pub const ALL: [Self; 5] = [Self::Int, Self::Int64, Self::Float, Self::String, Self::Bool];

    /// Canonical name of the kind, as used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "IntFlag",
            Self::Int64 => "Int64Flag",
            Self::Float => "FloatFlag",
            Self::String => "StringFlag",
            Self::Bool => "BoolFlag",
        }
    }
}

impl fmt::Display for FlagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the canonical names (`IntFlag`) and the short lowercase aliases (`int`).
impl FromStr for FlagKind {
    type Err = FlagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IntFlag" | "int" => Ok(Self::Int),
            "Int64Flag" | "int64" => Ok(Self::Int64),
            "FloatFlag" | "float" => Ok(Self::Float),
            "StringFlag" | "string" => Ok(Self::String),
            "BoolFlag" | "bool" => Ok(Self::Bool),
            other => Err(FlagError::UnknownKind { kind: other.to_owned() }),
        }
    }
}
