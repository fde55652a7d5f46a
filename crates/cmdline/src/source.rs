//! Flag files: the command line spread over lines, with `#` comments.

use crate::error::{ParseError, ParseErrorExt};
use crate::parser::CmdParser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, error};

impl CmdParser {
    /// Parses the flags held in the file at `path`.
    ///
    /// Comments and blank lines are dropped, the remaining lines are joined
    /// into one command line and handed to [`CmdParser::parse_from_str`].
    ///
    /// # Errors
    /// Returns [`ParseError::Io`] if the file cannot be opened or read, and
    /// otherwise anything [`CmdParser::parse_from_str`] returns.
    pub fn parse_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), ParseError> {
        let path = path.as_ref();

        let line = File::open(path)
            .and_then(|file| strip_comments(BufReader::new(file), self.config.comment_marker))
            .context(format!("Cannot read flag file {}", path.display()))
            .inspect_err(|e| error!("{e}"))?;

        debug!(path = %path.display(), "Loaded flag file");
        self.parse_from_str(&line)
    }
}

/// Reads `reader` line by line, dropping blank lines and `marker` comments,
/// and joins what is left with single spaces.
///
/// Lines are split on `\n` and decoded lossily, so non-UTF-8 bytes never fail
/// the read.
///
/// # Errors
/// Propagates I/O errors from `reader`.
pub fn strip_comments<R: BufRead>(reader: R, marker: char) -> io::Result<String> {
    let mut joined = String::new();

    for raw in reader.split(b'\n') {
        let raw = raw?;
        let text = String::from_utf8_lossy(&raw);
        let text = text.strip_suffix('\r').unwrap_or(&text);

        if let Some(kept) = strip_line(text, marker) {
            joined.push(' ');
            joined.push_str(kept);
        }
    }

    Ok(joined)
}

/// `None` when nothing but spaces/tabs precede the comment marker.
///
/// A space or tab marker is never counted as leading indentation.
fn strip_line(line: &str, marker: char) -> Option<&str> {
    if line.is_empty() {
        return None;
    }
    let Some(pos) = line.find(marker) else {
        return Some(line);
    };

    let indent = line.trim_start_matches(|c: char| matches!(c, ' ' | '\t') && c != marker);
    let leading = line.len() - indent.len();
    if pos == leading { None } else { line.get(leading..pos) }
}
