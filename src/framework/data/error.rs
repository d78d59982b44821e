use crate::{framework::secrets, games::chameleon};

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
pub enum Error {
    #[error("error loading secrets: {0}")]
    Secrets(#[from] secrets::MissingSecretError),

    #[error("error loading word list: {0}")]
    #[event(level = ERROR)]
    Words(#[from] chameleon::Error),
}
