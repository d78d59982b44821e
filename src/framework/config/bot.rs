use poise::serenity_prelude::{ActivityData, ChannelId, GuildId};
use serde::Deserialize;
use tracing::{debug, error, info, warn};

#[derive(Deserialize, Debug, Clone)]
pub struct BotConfig {
    testing_server: Option<GuildId>,
    activity: Option<String>,
    prefix: String,
    status_channel: Option<ChannelId>,
}

impl BotConfig {
    pub fn testing_server(&self) -> Option<&GuildId> {
        if self.testing_server.is_none() {
            warn!("no testing server set in config, slash commands will only be registered globally");
        }

        self.testing_server.as_ref()
    }

    pub fn activity(&self) -> Option<ActivityData> {
        let Some(activity) = &self.activity else {
            warn!("no bot.activity provided in config, defaulting to none");
            return None;
        };

        if activity.is_empty() {
            warn!("bot.activity provided in config as empty string, defaulting to none");
            return None;
        }

        let parsed_activity = parse_activity(activity);

        if let Some(ref parsed) = parsed_activity {
            debug!("bot.activity parsed as {:?}: {}", parsed.kind, parsed.name);
            info!("successfully parsed bot activity from config");
        } else {
            error!("bot.activity in config could not be parsed - must start with `playing`, `listening to`, `watching` or `competing in`");
            warn!("disabling bot activity");
        }

        parsed_activity
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn status_channel(&self) -> Option<ChannelId> {
        self.status_channel
    }
}

fn parse_activity(activity: &str) -> Option<ActivityData> {
    if let Some(name) = activity.strip_prefix("playing ") {
        Some(ActivityData::playing(name))
    } else if let Some(name) = activity.strip_prefix("listening to ") {
        Some(ActivityData::listening(name))
    } else if let Some(name) = activity.strip_prefix("watching ") {
        Some(ActivityData::watching(name))
    } else {
        activity
            .strip_prefix("competing in ")
            .map(ActivityData::competing)
    }
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude::ActivityType;

    use super::parse_activity;

    #[test]
    fn parses_activity_kinds() {
        let playing = parse_activity("playing chameleon").expect("valid activity");
        assert_eq!(playing.kind, ActivityType::Playing);
        assert_eq!(playing.name, "chameleon");

        let listening = parse_activity("listening to clues").expect("valid activity");
        assert_eq!(listening.kind, ActivityType::Listening);
        assert_eq!(listening.name, "clues");

        let watching = parse_activity("watching for lizards").expect("valid activity");
        assert_eq!(watching.kind, ActivityType::Watching);
    }

    #[test]
    fn rejects_unknown_activity() {
        assert!(parse_activity("sleeping").is_none());
    }
}
