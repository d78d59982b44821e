use std::path::PathBuf;

/// a discord bot for playing chameleon
#[derive(clap::Parser, Debug)]
#[command(version)]
pub struct Cli {
    /// path to the config file (defaults to $CHAMELEON_TOML, then ./chameleon.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn subcommand(&self) -> Command {
        self.command.unwrap_or_default()
    }
}

#[derive(clap::Subcommand, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Command {
    /// check the config file and word list, then exit
    Config,

    /// run the bot
    #[default]
    Start,
}

impl Command {
    pub fn is_start(&self) -> bool {
        matches!(self, Self::Start)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};

    #[test]
    fn starts_by_default() {
        let cli = Cli::parse_from(["chameleon"]);
        assert!(cli.subcommand().is_start());
        assert!(cli.config.is_none());
    }

    #[test]
    fn config_subcommand() {
        let cli = Cli::parse_from(["chameleon", "--config", "bot.toml", "config"]);
        assert_eq!(cli.subcommand(), Command::Config);
        assert_eq!(cli.config.as_deref().and_then(|p| p.to_str()), Some("bot.toml"));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
