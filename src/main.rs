#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

mod cli;
use cli::Cli;

mod commands;

mod errors;
use errors::Error;

mod framework;
use framework::{data::PoiseData, Config};

use chameleon::games;

mod utils;

use clap::Parser;
use poise::serenity_prelude::{self as serenity, GatewayIntents};
use thisslime::TracingError;

#[allow(unused_imports)]
use tracing::{debug, info, trace};

mod built_info {
    // The file has been placed there by the build script.
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

fn build_description() -> String {
    if built_info::DEBUG {
        let branch = built_info::GIT_HEAD_REF
            .map(|s| s.trim_start_matches("refs/heads/"))
            .unwrap_or("DETACHED");

        format!(
            "development branch {} (`{}`)",
            branch,
            built_info::GIT_COMMIT_HASH_SHORT.unwrap_or("unknown")
        )
    } else {
        format!("release {}", built_info::PKG_VERSION)
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    framework::logging::init_tracing();

    info!("{}", build_description());

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        err.trace();
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let path = Config::path(cli.config.as_deref());
    let config = Config::load(&path)?;
    info!("config loaded");

    if !cli.subcommand().is_start() {
        let words = config.chameleon.words().map_err(framework::DataError::from)?;
        println!(
            "config at {} is valid: prefix `{}`, {} word categories ({}), at least {} players",
            path.display(),
            config.bot.prefix(),
            words.len(),
            words.categories().join(", "),
            config.chameleon.min_players(),
        );
        return Ok(());
    }

    if let Some(flavor_text) = config.logs.flavor_text() {
        info!("{flavor_text}")
    }

    let data = PoiseData::new(config).await?;
    let token = data.token().to_owned();

    let framework = framework::poise::build(data);

    let intents = GatewayIntents::non_privileged() | GatewayIntents::MESSAGE_CONTENT;
    let mut client = serenity::Client::builder(token, intents)
        .framework(framework)
        .await?;

    client.start().await?;
    Ok(())
}
