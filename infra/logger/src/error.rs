use std::borrow::Cow;

/// Errors that can occur while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// The log file could not be created in the requested directory.
    #[error("Log file appender error{}: {source}", format_context(.context))]
    Appender { source: tracing_appender::rolling::InitError, context: Option<Cow<'static, str>> },

    /// A global tracing subscriber is already installed in this process.
    #[error("Tracing subscriber error{}: {source}", format_context(.context))]
    Subscriber {
        source: tracing_subscriber::util::TryInitError,
        context: Option<Cow<'static, str>>,
    },

    /// The builder settings cannot produce a working logger.
    #[error("Invalid logger configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal logger error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Adds `.context(...)` to I/O results, turning them into [`LoggerError::Internal`].
pub trait LoggerErrorExt<T> {
    /// # Errors
    /// Returns the original error, converted to [`LoggerError`], with the context attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, LoggerError>;
}

impl<T> LoggerErrorExt<T> for Result<T, std::io::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, LoggerError> {
        self.map_err(|e| LoggerError::Internal {
            message: e.to_string().into(),
            context: Some(context.into()),
        })
    }
}

impl From<tracing_appender::rolling::InitError> for LoggerError {
    fn from(source: tracing_appender::rolling::InitError) -> Self {
        Self::Appender { source, context: None }
    }
}

impl From<tracing_subscriber::util::TryInitError> for LoggerError {
    fn from(source: tracing_subscriber::util::TryInitError) -> Self {
        Self::Subscriber { source, context: None }
    }
}

#[allow(clippy::ref_option)]
fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
