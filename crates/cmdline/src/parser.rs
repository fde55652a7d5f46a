use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::registry::FlagRegistry;
use crate::tokenizer::tokenize;
use std::ops::{Deref, DerefMut};
use tracing::{debug, error, warn};

/// A [`FlagRegistry`] together with the settings used to fill it from input.
///
/// Dereferences to the registry, so flags are declared and read directly on
/// the parser.
#[derive(Debug, Default)]
pub struct CmdParser {
    pub(crate) registry: FlagRegistry,
    pub(crate) config: ParserConfig,
}

impl Deref for CmdParser {
    type Target = FlagRegistry;

    fn deref(&self) -> &Self::Target {
        &self.registry
    }
}

impl DerefMut for CmdParser {
    fn deref_mut(&mut self) -> &mut FlagRegistry {
        &mut self.registry
    }
}

impl CmdParser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: ParserConfig) -> Self {
        Self { registry: FlagRegistry::new(), config }
    }

    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    #[must_use]
    pub fn into_registry(self) -> FlagRegistry {
        self.registry
    }

    /// Parses a whitespace-separated command line into the registry.
    ///
    /// Flags that were never declared are reported and skipped. Values that do
    /// not decode for their flag's kind are reported and leave the flag
    /// unloaded. Neither fails the parse.
    ///
    /// # Errors
    /// * [`ParseError::Malformed`] if a bare value appears where a flag was
    ///   expected. Nothing is applied in that case.
    /// * [`ParseError::MissingRequired`] if required flags are still unloaded
    ///   afterwards. Values applied during this pass are kept.
    pub fn parse_from_str(&mut self, line: &str) -> Result<(), ParseError> {
        let assignments = tokenize(line).inspect_err(|e| error!("{e}"))?;

        let undeclared: Vec<String> = assignments
            .iter()
            .filter(|a| !self.registry.is_flag(a.flag))
            .map(|a| format!("-{}", a.flag))
            .collect();
        if !undeclared.is_empty() {
            warn!("Flags not declared in parser: {}, ignored", undeclared.join(","));
        }

        for assignment in &assignments {
            if !self.registry.is_flag(assignment.flag) {
                continue;
            }
            if let Err(e) = self.registry.set_var(assignment.flag, assignment.value) {
                warn!("{e}");
            }
        }

        let missing = self.registry.missing_required();
        if !missing.is_empty() {
            let err = ParseError::MissingRequired { flags: missing };
            error!("{err}");
            return Err(err);
        }

        debug!(assignments = assignments.len(), "Command line parsed");
        Ok(())
    }

    /// Joins `args` with single spaces and parses the result.
    ///
    /// `args` must not include the program name.
    ///
    /// # Errors
    /// Same as [`Self::parse_from_str`].
    pub fn parse_from_args<I, S>(&mut self, args: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let line = args.into_iter().map(|a| a.as_ref().to_owned()).collect::<Vec<_>>().join(" ");
        self.parse_from_str(&line)
    }
}
