use cmdline::ParserConfig;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub(crate) const CONFIG_PATH_ENV: &str = "FLAGCHECK_CONFIG";

const DEFAULT_CONFIG: &str = "flagcheck";
const ENV_PREFIX: &str = "FLAGCHECK";

/// Settings for the `flagcheck` tool.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) log: LogConfig,
    pub(crate) parser: ParserConfig,
    /// Extra flags declared on top of the built-in set.
    pub(crate) flags: Vec<FlagDecl>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub(crate) struct LogConfig {
    pub(crate) level: String,
    pub(crate) filter: Option<String>,
    pub(crate) path: Option<PathBuf>,
    pub(crate) ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned(), filter: None, path: None, ansi: true }
    }
}

/// A flag declaration read from the config file. `kind` is a kind name such as
/// `IntFlag` or `int`; unknown kinds are skipped.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FlagDecl {
    pub(crate) name: String,
    pub(crate) kind: String,
    #[serde(default)]
    pub(crate) required: bool,
}

/// Loads the tool settings.
///
/// Layers, lowest priority first:
/// 1. `path` if given (must exist), otherwise an optional `flagcheck.{toml,json,...}`
///    in the working directory.
/// 2. `FLAGCHECK__`-prefixed environment variables, `__` separating nested keys
///    (e.g. `FLAGCHECK__LOG__LEVEL=debug`).
///
/// # Errors
/// Returns an error if an explicit file is missing or a source does not
/// deserialize into [`AppConfig`].
pub(crate) fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let (file, required) =
        path.map_or_else(|| (PathBuf::from(DEFAULT_CONFIG), false), |p| (p.to_path_buf(), true));

    let config = Config::builder()
        .add_source(File::from(file.as_path()).required(required))
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build config from {}: {e}", file.display()))?
        .try_deserialize::<AppConfig>()
        .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {e}"))?;

    Ok(config)
}
