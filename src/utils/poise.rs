use poise::{serenity_prelude as serenity, CreateReply};

use crate::framework::data::PoiseData;

pub type Context<'a> = poise::Context<'a, PoiseData, crate::errors::CommandError>;

pub type Error = crate::errors::CommandError;
pub type Command = poise::Command<PoiseData, Error>;
pub type CommandResult = Result<(), Error>;

pub trait ContextExt {
    async fn reply_ephemeral(
        &self,
        text: impl Into<String>,
    ) -> Result<poise::ReplyHandle<'_>, serenity::Error>;

    async fn reply_embed(
        &self,
        embed: serenity::CreateEmbed,
    ) -> Result<poise::ReplyHandle<'_>, serenity::Error>;
}

impl ContextExt for Context<'_> {
    async fn reply_ephemeral(
        &self,
        text: impl Into<String>,
    ) -> Result<poise::ReplyHandle<'_>, serenity::Error> {
        let builder = CreateReply::default()
            .reply(true)
            .ephemeral(true)
            .content(text);
        self.send(builder).await
    }

    async fn reply_embed(
        &self,
        embed: serenity::CreateEmbed,
    ) -> Result<poise::ReplyHandle<'_>, serenity::Error> {
        let builder = CreateReply::default().reply(true).embed(embed);
        self.send(builder).await
    }
}
