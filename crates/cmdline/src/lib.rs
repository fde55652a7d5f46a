//! # Command Line Flags
//!
//! A small typed flag parser. Flags are declared up front with a scalar kind
//! and a required marker, then filled from a command line, the process
//! arguments, or a flag file.
//!
//! * Flags are single-dash tokens. A flag followed by another flag (or by
//!   nothing) gets the implicit value `"true"`.
//! * Undeclared flags are reported and ignored.
//! * Values that fail to decode are reported and leave the flag unloaded.
//! * A parse fails on a bare value where a flag was expected, or when a
//!   required flag is still unloaded afterwards.
//! * `-is <file>` as the first argument reads the command line from a file,
//!   where `#` starts a comment and lines are joined.
//!
//! ## Example
//!
//! ```rust
//! use cmdline::{CmdParser, FlagKind, FlagValue};
//!
//! let mut parser = CmdParser::new();
//! parser.add_flag(FlagKind::Int, "n", true);
//! parser.add_flag(FlagKind::Bool, "verbose", false);
//! parser.add_flag(FlagKind::String, "name", false);
//!
//! parser.parse_from_str("-verbose -n 42")?;
//!
//! assert_eq!(parser.get::<isize>("n")?, 42);
//! assert_eq!(parser.get_var("verbose"), FlagValue::Bool(true));
//! assert!(!parser.is_loaded("name"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod entry;
mod error;
mod kind;
mod parser;
mod registry;
mod slot;
mod source;
mod tokenizer;
mod value;

pub use crate::config::{DEFAULT_COMMENT_MARKER, DEFAULT_FILE_SWITCH, ParserConfig};
pub use crate::error::{FlagError, ParseError, ParseErrorExt};
pub use crate::kind::FlagKind;
pub use crate::parser::CmdParser;
pub use crate::registry::FlagRegistry;
pub use crate::slot::{BoolSlot, Flag, FloatSlot, Int64Slot, IntSlot, Slot, StringSlot};
pub use crate::source::strip_comments;
pub use crate::tokenizer::{Assignment, FLAG_PREFIX, IMPLICIT_VALUE, tokenize};
pub use crate::value::{FlagValue, Scalar};
