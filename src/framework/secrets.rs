use std::{fmt::Display, path::Path};

const TOKEN_VAR: &str = "CHAMELEON_TOKEN";

#[derive(Clone)]
pub struct Secrets {
    bot_token: String,
}

impl std::fmt::Debug for Secrets {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Secrets").finish_non_exhaustive()
    }
}

impl Secrets {
    pub async fn from_store(store: impl SecretStore) -> Result<Self, MissingSecretError> {
        let bot_token = store
            .get2(SecretKey::BotToken)
            .await
            .map_err(|key| MissingSecretError { secret: key })?;

        Ok(Self { bot_token })
    }

    pub async fn secret_files(dir: &Path) -> Result<Self, MissingSecretError> {
        Self::from_store(SecretFiles { directory: dir }).await
    }

    /// Reads the token from `CHAMELEON_TOKEN`, falling back to the files in `dir`.
    #[tracing::instrument(skip_all, name = "secrets")]
    pub async fn load(dir: Option<&Path>) -> Result<Self, MissingSecretError> {
        if let Ok(secrets) = Self::from_store(EnvSecrets).await {
            tracing::debug!(var = TOKEN_VAR, "using bot token from environment");
            return Ok(secrets);
        }

        match dir {
            Some(dir) => Self::secret_files(dir).await,
            None => {
                tracing::error!("no {TOKEN_VAR} set and no secrets directory configured");
                Err(MissingSecretError {
                    secret: SecretKey::BotToken,
                })
            }
        }
    }

    pub fn bot_token(&self) -> &str {
        &self.bot_token
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SecretKey {
    BotToken,
}

impl Display for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::BotToken => "bot_token",
        })
    }
}

#[derive(Debug, thiserror::Error, thisslime::TracingError)]
#[error("missing secret `{secret}`")]
#[event(level = ERROR)]
pub struct MissingSecretError {
    #[field(print = Display)]
    secret: SecretKey,
}

pub trait SecretStore {
    async fn get(&self, secret: SecretKey) -> Option<String>;

    async fn get2(&self, secret: SecretKey) -> Result<String, SecretKey> {
        self.get(secret).await.ok_or(secret)
    }
}

pub struct EnvSecrets;

impl SecretStore for EnvSecrets {
    async fn get(&self, secret: SecretKey) -> Option<String> {
        let var = match secret {
            SecretKey::BotToken => TOKEN_VAR,
        };

        std::env::var(var).ok().filter(|value| !value.trim().is_empty())
    }
}

pub struct SecretFiles<'path> {
    directory: &'path Path,
}

impl SecretStore for SecretFiles<'_> {
    async fn get(&self, secret: SecretKey) -> Option<String> {
        tokio::fs::read_to_string(self.directory.join(secret.to_string()))
            .await
            .ok()
            .map(|text| text.trim().to_owned())
            .filter(|token| !token.is_empty())
    }
}
