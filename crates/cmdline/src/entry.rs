//! Top-level entry points choosing between argument and flag-file input.

use crate::error::ParseError;
use crate::parser::CmdParser;
use tracing::{debug, error};

impl CmdParser {
    /// Parses `args` (program name excluded) into the registry.
    ///
    /// If the first argument is the configured file switch (`-is` by default)
    /// the second argument names a flag file to parse instead.
    ///
    /// # Errors
    /// * [`ParseError::NoArguments`] if `args` is empty.
    /// * [`ParseError::MissingInputFile`] if the file switch has no file name.
    /// * Anything [`CmdParser::parse_from_file`] or
    ///   [`CmdParser::parse_from_args`] returns.
    pub fn try_parse<I, S>(&mut self, args: I) -> Result<(), ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let Some(first) = args.first() else {
            return Err(ParseError::NoArguments);
        };

        if first.as_ref() == self.config.file_switch.as_str() {
            let path: Option<&str> = args.get(1).map(AsRef::as_ref);
            let Some(path) = path else {
                return Err(ParseError::MissingInputFile {
                    switch: self.config.file_switch.clone(),
                });
            };
            debug!(path, "Reading flags from file");
            return self.parse_from_file(path);
        }

        self.parse_from_args(args)
    }

    /// Fail-fast variant of [`Self::try_parse`].
    ///
    /// Exits the process with status 1 when `args` is empty. Destructors do not
    /// run on that path; callers holding a log guard should use
    /// [`Self::try_parse`] and return from `main` instead.
    ///
    /// # Panics
    /// Panics on any other parse failure.
    #[track_caller]
    pub fn parse<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match self.try_parse(args) {
            Ok(()) => {},
            Err(ParseError::NoArguments) => {
                error!("{}", ParseError::NoArguments);
                std::process::exit(1);
            },
            Err(e) => panic!("Command line parsing error: {e}"),
        }
    }

    /// Runs [`Self::parse`] on the arguments this process was started with.
    ///
    /// # Panics
    /// Panics on any parse failure other than an empty argument list.
    #[track_caller]
    pub fn parse_env(&mut self) {
        self.parse(std::env::args().skip(1));
    }
}
