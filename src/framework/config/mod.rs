use std::path::{Path, PathBuf};

use rand::seq::IteratorRandom;
use serde::Deserialize;
use tracing::{info, warn};

mod bot;
pub use bot::BotConfig;

mod chameleon;
pub use chameleon::ChameleonConfig;

const PATH_VAR: &str = "CHAMELEON_TOML";
const DEFAULT_PATH: &str = "./chameleon.toml";

#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub secrets_dir: Option<PathBuf>,

    pub bot: BotConfig,
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default)]
    pub chameleon: ChameleonConfig,
}

impl AppConfig {
    /// Finds the config file: the given path, then `CHAMELEON_TOML`, then `./chameleon.toml`.
    pub fn path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            info!(path = %path.display(), "using config file from command line");
            path.to_owned()
        } else if let Ok(path) = std::env::var(PATH_VAR) {
            info!(path, "using config file from {PATH_VAR}");
            PathBuf::from(path)
        } else {
            warn!(path = DEFAULT_PATH, "{PATH_VAR} unset, using default path");
            PathBuf::from(DEFAULT_PATH)
        }
    }

    #[tracing::instrument(skip_all, name = "config")]
    pub fn load(path: &Path) -> Result<Self, Error> {
        let path = path
            .to_str()
            .ok_or_else(|| Error::NotUtf8(path.display().to_string()))?;

        ::config::Config::builder()
            .add_source(::config::File::new(path, ::config::FileFormat::Toml))
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)
    }

    pub fn from_toml(text: &str) -> Result<Self, Error> {
        ::config::Config::builder()
            .add_source(::config::File::from_str(text, ::config::FileFormat::Toml))
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)
    }

    pub fn secrets_dir(&self) -> Option<&Path> {
        self.secrets_dir.as_deref()
    }
}

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
pub enum Error {
    #[error("file read error: {0}")]
    #[event(level = ERROR)]
    Read(::config::ConfigError),

    #[error("parsing error: {0}")]
    #[event(level = ERROR)]
    Parse(::config::ConfigError),

    #[error("path to configuration must be valid UTF-8: {0}")]
    #[event(level = ERROR)]
    NotUtf8(String),
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct LogsConfig {
    #[serde(default)]
    flavor_texts: Vec<String>,
}

impl LogsConfig {
    pub fn flavor_text(&self) -> Option<&str> {
        let flavor_text = self
            .flavor_texts
            .iter()
            .choose(&mut rand::thread_rng())
            .map(|s| s.as_str());

        if flavor_text.is_none() {
            warn!("no flavor texts provided in config :(");
        }

        flavor_text
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use super::{AppConfig, LogsConfig};
    use crate::games::chameleon::TieBreak;

    #[test]
    fn minimal_config() {
        let config = AppConfig::from_toml(
            r#"
            [bot]
            prefix = "?"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.bot.prefix(), "?");
        assert_eq!(config.secrets_dir(), None);
        assert_eq!(config.chameleon.min_players(), 3);
        assert_eq!(config.chameleon.tie_break(), TieBreak::LowestId);
        assert_eq!(config.logs.flavor_text(), None);
    }

    #[test]
    fn full_config() {
        let config = AppConfig::from_toml(
            r#"
            secrets_dir = "/etc/chameleon/secrets"

            [bot]
            prefix = "!"
            activity = "playing chameleon"

            [logs]
            flavor_texts = ["hiding in plain sight"]

            [chameleon]
            words_file = "words/custom.toml"
            min_players = 4
            tie_break = "random"
            "#,
        )
        .expect("valid config");

        assert_eq!(
            config.secrets_dir().and_then(|p| p.to_str()),
            Some("/etc/chameleon/secrets")
        );
        assert_eq!(config.logs.flavor_text(), Some("hiding in plain sight"));
        assert_eq!(config.chameleon.min_players(), 4);
        assert_eq!(config.chameleon.tie_break(), TieBreak::Random);
        assert_eq!(
            config.chameleon.words_file().and_then(|p| p.to_str()),
            Some("words/custom.toml")
        );
    }

    #[test]
    fn missing_bot_section() {
        assert!(AppConfig::from_toml("[logs]\nflavor_texts = []").is_err());
    }

    #[test]
    #[traced_test]
    fn warns_without_flavor_text() {
        assert_eq!(LogsConfig::default().flavor_text(), None);
        assert!(logs_contain("no flavor texts provided in config"));
    }
}
