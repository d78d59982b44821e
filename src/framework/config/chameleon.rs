use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

use crate::games::chameleon::{self, TieBreak, WordListManager};

const fn default_min_players() -> usize {
    3
}

#[derive(Deserialize, Debug, Clone)]
pub struct ChameleonConfig {
    words_file: Option<PathBuf>,
    #[serde(default = "default_min_players")]
    min_players: usize,
    #[serde(default)]
    tie_break: TieBreak,
}

impl Default for ChameleonConfig {
    fn default() -> Self {
        Self {
            words_file: None,
            min_players: default_min_players(),
            tie_break: TieBreak::default(),
        }
    }
}

impl ChameleonConfig {
    pub fn words_file(&self) -> Option<&Path> {
        self.words_file.as_deref()
    }

    pub const fn min_players(&self) -> usize {
        self.min_players
    }

    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Loads `words_file`, or the bundled word list if none is configured.
    pub fn words(&self) -> chameleon::Result<WordListManager> {
        match self.words_file() {
            Some(path) => WordListManager::load(path),
            None => {
                info!("no chameleon.words_file in config, using bundled word list");
                WordListManager::builtin()
            }
        }
    }
}
