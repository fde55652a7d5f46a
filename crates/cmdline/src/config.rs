use serde::Deserialize;

pub const DEFAULT_FILE_SWITCH: &str = "-is";
pub const DEFAULT_COMMENT_MARKER: char = '#';

/// Parser settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// First argument that redirects parsing to a flag file.
    pub file_switch: String,
    /// Starts a line comment in flag files.
    pub comment_marker: char,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { file_switch: DEFAULT_FILE_SWITCH.to_owned(), comment_marker: DEFAULT_COMMENT_MARKER }
    }
}
