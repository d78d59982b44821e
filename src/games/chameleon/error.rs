use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("can't pick a chameleon without any players")]
    EmptyPlayerList,
    #[error("no words available in category `{category}`")]
    NoWordsAvailable { category: String },
    #[error("no word categories are loaded")]
    NoCategories,
    #[error("word list could not be read: {0}")]
    ReadWords(#[from] std::io::Error),
    #[error("word list could not be parsed: {0}")]
    ParseWords(#[from] toml::de::Error),
}

/// Why a clue or vote was not recorded.
///
/// Nothing is mutated when a submission is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejected {
    #[error("you're not playing in this game")]
    UnknownPlayer,
    #[error("you can only vote for someone who's playing")]
    UnknownTarget,
}
