//! Client configuration loaded from environment variables.
//!
//! Every setting has a default, so the client runs with zero configuration.

use std::path::PathBuf;

use globus_shared::constants::DEFAULT_API_URL;
use globus_shared::Locale;
use is_terminal::IsTerminal;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint returning the JSON country array.
    /// Env: `GLOBUS_API_URL`
    pub api_url: String,

    /// Directory for persisted data.
    /// Env: `GLOBUS_DATA_DIR`
    /// Default: the platform data directory.
    pub data_dir: Option<PathBuf>,

    /// Display language.
    /// Env: `GLOBUS_LOCALE` (`ru` / `en`)
    /// Default: `ru`
    pub locale: Locale,

    /// Keep favorites in memory only.
    /// Env: `GLOBUS_EPHEMERAL` (true/false)
    /// Default: `false`
    pub ephemeral: bool,

    /// Colour the terminal output.
    /// Default: on when stdout is a terminal and `NO_COLOR` is unset.
    pub color: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: None,
            locale: Locale::default(),
            ephemeral: false,
            color: false,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("GLOBUS_API_URL").filter(|v| !v.trim().is_empty()) {
            config.api_url = url;
        }

        if let Some(dir) = lookup("GLOBUS_DATA_DIR").filter(|v| !v.trim().is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(value) = lookup("GLOBUS_LOCALE") {
            match value.parse::<Locale>() {
                Ok(locale) => config.locale = locale,
                Err(e) => {
                    tracing::warn!(value = %value, error = %e, "Invalid GLOBUS_LOCALE, using default");
                }
            }
        }

        if let Some(value) = lookup("GLOBUS_EPHEMERAL") {
            config.ephemeral = value == "true" || value == "1";
        }

        config.color = lookup("NO_COLOR").is_none() && std::io::stdout().is_terminal();

        config
    }
}
