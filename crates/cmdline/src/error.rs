//! # Parser Errors
//!
//! [`FlagError`] reports failures local to one flag (decoding a token, typed
//! access with the wrong kind). [`ParseError`] reports failures of a whole
//! parse pass and is what the parsing entry points return.

use crate::kind::FlagKind;
use std::borrow::Cow;

/// Failures raised by a single flag slot or a typed registry lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlagError {
    /// The raw token could not be decoded into the flag's kind.
    #[error("Cannot decode `{raw}` as {kind} for flag -{name}")]
    Decode { name: String, kind: FlagKind, raw: String },

    /// A typed accessor asked for a kind other than the declared one.
    #[error("Flag -{name} is declared as {found}, requested as {expected}")]
    KindMismatch { name: String, expected: FlagKind, found: FlagKind },

    /// A kind name did not match any known flag kind.
    #[error("Unknown flag kind: {kind}")]
    UnknownKind { kind: String },
}

/// Failures of a parse pass over a command line or a flag file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The argument list was empty.
    #[error("Call requires command line arguments")]
    NoArguments,

    /// The file switch was the last argument.
    #[error("Flag file switch {switch} given without a file name")]
    MissingInputFile { switch: String },

    /// A bare value appeared where a flag was expected.
    #[error("Formatting problem in command line from `{remainder}`")]
    Malformed { remainder: String },

    /// Required flags were still unloaded after values were applied.
    #[error("Flags required but missing: {}", .flags.join(","))]
    MissingRequired { flags: Vec<String> },

    /// The flag file could not be opened or read.
    #[error("Flag file error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

/// Adds `.context(...)` to I/O results, turning them into [`ParseError::Io`].
pub trait ParseErrorExt<T> {
    /// # Errors
    /// Returns the I/O error wrapped in [`ParseError::Io`] with the context attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ParseError>;
}

impl<T> ParseErrorExt<T> for Result<T, std::io::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, ParseError> {
        self.map_err(|source| ParseError::Io { source, context: Some(context.into()) })
    }
}

#[allow(clippy::ref_option)]
fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_lists_flags_comma_joined() {
        let err = ParseError::MissingRequired { flags: vec!["-n".into(), "-seed".into()] };
        assert_eq!(err.to_string(), "Flags required but missing: -n,-seed");
    }

    #[test]
    fn io_context_is_rendered() {
        let res: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        let err = res.context("Cannot open flag file args.txt").unwrap_err();
        assert_eq!(err.to_string(), "Flag file error (Cannot open flag file args.txt): gone");
    }

    #[test]
    fn io_without_context_has_no_suffix() {
        let err = ParseError::Io { source: std::io::Error::other("boom"), context: None };
        assert_eq!(err.to_string(), "Flag file error: boom");
    }
}
