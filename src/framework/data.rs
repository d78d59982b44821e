use chrono::Utc;
use tracing::info;

use crate::{
    commands::chameleon::GamesCache,
    framework::{secrets::Secrets, Config},
    games::chameleon::WordListManager,
};

pub mod error;
pub use error::Error as DataError;

pub type Result<T, E = DataError> = std::result::Result<T, E>;

pub(crate) type UtcDateTime = chrono::DateTime<Utc>;

#[derive(Debug, Clone)]
pub struct PoiseData {
    pub(crate) config: Config,
    pub(crate) started: UtcDateTime,
    pub(crate) secrets: Secrets,
    pub(crate) chameleon: ChameleonData,
}

impl PoiseData {
    pub(crate) async fn new(config: Config) -> Result<Self> {
        let secrets = Secrets::load(config.secrets_dir()).await?;
        let chameleon = ChameleonData::new(config.chameleon.words()?);

        info!(
            categories = chameleon.words().len(),
            "chameleon word list loaded"
        );

        Ok(Self {
            config,
            started: Utc::now(),
            secrets,
            chameleon,
        })
    }

    pub(crate) const fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn token(&self) -> &str {
        self.secrets.bot_token()
    }

    pub(crate) const fn chameleon(&self) -> &ChameleonData {
        &self.chameleon
    }
}

#[derive(Debug, Clone)]
pub struct ChameleonData {
    words: WordListManager,
    games: GamesCache,
}

impl ChameleonData {
    pub fn new(words: WordListManager) -> Self {
        Self {
            words,
            games: GamesCache::new(),
        }
    }

    pub const fn words(&self) -> &WordListManager {
        &self.words
    }

    pub const fn games(&self) -> &GamesCache {
        &self.games
    }
}
