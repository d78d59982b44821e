use chrono::Utc;
use poise::PrefixFrameworkOptions;
use tracing::{info, trace};

use crate::{
    commands,
    errors::{self, CommandError},
};

use super::data::PoiseData;

pub fn build(data: PoiseData) -> poise::Framework<PoiseData, CommandError> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::list(),
            prefix_options: PrefixFrameworkOptions {
                prefix: Some(data.config.bot.prefix().to_string()),
                ..Default::default()
            },
            on_error: errors::handle_framework_error,
            ..Default::default()
        })
        .setup(|ctx, _ready, framework| {
            Box::pin(async move {
                let http = ctx.http.clone();
                let commands = framework.options().commands.as_ref();

                if let Some(guild_id) = data.config.bot.testing_server() {
                    poise::builtins::register_in_guild(&http, commands, *guild_id).await?;
                }

                poise::builtins::register_globally(&http, commands).await?;

                ctx.set_activity(data.config.bot.activity());

                let startup = Utc::now() - data.started;
                info!(
                    startup_ms = startup.num_milliseconds(),
                    "finished setup, accepting commands"
                );

                if let Some(status_channel) = data.config.bot.status_channel() {
                    status_channel.say(ctx, "ready!").await?;
                }

                trace!("setup done");
                Ok(data)
            })
        })
        .build()
}
