use poise::serenity_prelude::{self as serenity, CreateEmbed, Mentionable};
use tracing::{info, instrument};

use crate::{
    commands::LogCommands,
    errors::SendMessageError,
    games::chameleon::GameState,
    utils::{
        poise::{CommandResult, ContextExt},
        Context,
    },
};

mod cache;
pub use cache::{GamesCache, SharedGame};

mod game;
pub use game::ChannelGame;

mod mentions;

const COLOR: u32 = 0xBEBEFE;
const START_COLOR: u32 = 0x00FF00;
const END_COLOR: u32 = 0xFF0000;

const RULES: &str = "**objective:** find the chameleon among the players!\n\n\
**how to play:**\n\
1. everyone gets the secret word except one player, the chameleon\n\
2. each player gives a one-word clue related to the secret word\n\
3. the chameleon has to blend in without knowing the word\n\
4. after the clues, vote on who you think the chameleon is\n\
5. if they're caught, the chameleon can still win by guessing the word!\n\n\
**commands:**\n\
`/chameleon start` - start a game with the players you mention\n\
`/chameleon word` - see the secret word\n\
`/chameleon clue` - give your clue\n\
`/chameleon vote` - vote for the chameleon\n\
`/chameleon reveal` - close the vote early\n\
`/chameleon guess` - the caught chameleon's last chance\n\
`/chameleon end` - end the current game\n\
`/chameleon rules` - show these rules";

fn embed(description: impl Into<String>, color: u32) -> CreateEmbed {
    CreateEmbed::new()
        .title("🦎 chameleon")
        .description(description)
        .color(color)
}

/// the game already running in this channel, telling the user if there isn't one
async fn current_game(ctx: Context<'_>) -> Result<Option<SharedGame>, serenity::Error> {
    let game = ctx.data().chameleon().games().get(ctx.channel_id()).await;

    if game.is_none() {
        ctx.reply_ephemeral(
            "there's no game of chameleon in this channel! start one with `/chameleon start`",
        )
        .await?;
    }

    Ok(game)
}

/// closes the vote and posts the results
async fn finish_vote(
    ctx: Context<'_>,
    shared: &SharedGame,
    game: &mut ChannelGame,
) -> CommandResult {
    let outcome = game.resolve_vote();
    let text = format!("{}\n\n{}", game.vote_tally(), game.outcome_text(outcome));

    let color = if outcome.is_final() {
        ctx.data()
            .chameleon()
            .games()
            .remove_game(ctx.channel_id(), shared)
            .await;
        info!(?outcome, "game over");
        END_COLOR
    } else {
        COLOR
    };

    ctx.reply_embed(embed(text, color)).await?;
    Ok(())
}

/// play chameleon, the word-association deduction game!
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL",
    subcommands("start", "word", "clue", "vote", "reveal", "guess", "end", "rules", "categories")
)]
pub async fn chameleon(ctx: Context<'_>) -> CommandResult {
    poise::builtins::help(
        ctx,
        Some("chameleon"),
        poise::builtins::HelpConfiguration::default(),
    )
    .await
    .map_err(SendMessageError::from)?;

    Ok(())
}

/// start a game in this channel
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
async fn start(
    ctx: Context<'_>,
    #[description = "mention the other players, optionally followed by a category"]
    #[rest]
    players: String,
) -> CommandResult {
    ctx.log_command().await;

    let data = ctx.data().chameleon();
    let config = &ctx.data().config().chameleon;

    if data.games().channel_is_locked(ctx.channel_id()).await {
        ctx.reply_ephemeral("there's already a game of chameleon in this channel!")
            .await?;
        return Ok(());
    }

    let mut game = ChannelGame::new(
        ctx.channel_id(),
        ctx.author().id,
        mentions::parse_users(&players),
        config.tie_break(),
    );

    let count = game.session().players().len();
    if count < config.min_players() {
        ctx.reply_ephemeral(format!(
            "chameleon needs at least {min} players including you, but only {count} would be playing. mention some more!",
            min = config.min_players()
        ))
        .await?;
        return Ok(());
    }

    let category = mentions::requested_category(&players);
    game.setup(data.words(), category.as_deref())?;
    let announcement = game.announcement();

    if data.games().insert(game).await.is_err() {
        ctx.reply_ephemeral("someone else just started a game in this channel!")
            .await?;
        return Ok(());
    }

    let games = data.games().len().await;
    info!(games, "chameleon game started");

    ctx.reply_embed(embed(announcement, START_COLOR)).await?;
    Ok(())
}

/// see the secret word, or find out you're the chameleon
#[instrument(skip_all)]
#[poise::command(slash_command, required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL")]
async fn word(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;

    let Some(game) = current_game(ctx).await? else {
        return Ok(());
    };

    let text = game.lock().await.word_for(ctx.author().id);

    ctx.reply_ephemeral(text.unwrap_or_else(|| "you're not playing in this game!".to_owned()))
        .await?;
    Ok(())
}

/// give your clue about the secret word
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
async fn clue(
    ctx: Context<'_>,
    #[description = "your clue"]
    #[rest]
    clue: String,
) -> CommandResult {
    ctx.log_command().await;

    let Some(game) = current_game(ctx).await? else {
        return Ok(());
    };
    let mut game = game.lock().await;

    if game.state() != GameState::GivingClues {
        ctx.reply_ephemeral("clues are closed for this game!").await?;
        return Ok(());
    }

    let clue = clue.trim();
    if clue.is_empty() {
        ctx.reply_ephemeral("your clue can't be empty!").await?;
        return Ok(());
    }

    if let Err(rejected) = game.session_mut().add_clue(ctx.author().id, clue) {
        ctx.reply_ephemeral(rejected.to_string()).await?;
        return Ok(());
    }

    if game.all_clues_in() {
        let text = format!(
            "{}\n\nvoting is open! vote for who you think the chameleon is with `/chameleon vote`.",
            game.clue_board()
        );
        ctx.reply_embed(embed(text, COLOR)).await?;
    } else {
        let missing = game.session().missing_clues();
        ctx.reply(format!("clue recorded! {}", game.waiting_on(&missing)))
            .await?;
    }

    Ok(())
}

/// vote for who you think the chameleon is
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
async fn vote(
    ctx: Context<'_>,
    #[description = "who you think the chameleon is"] player: serenity::User,
) -> CommandResult {
    ctx.log_command().await;

    let Some(shared) = current_game(ctx).await? else {
        return Ok(());
    };
    let mut game = shared.lock().await;

    if !game.voting_open() {
        ctx.reply_ephemeral("voting isn't open right now!").await?;
        return Ok(());
    }

    if let Err(rejected) = game.session_mut().add_vote(ctx.author().id, player.id) {
        ctx.reply_ephemeral(rejected.to_string()).await?;
        return Ok(());
    }

    if game.all_votes_in() {
        finish_vote(ctx, &shared, &mut game).await?;
    } else {
        let missing = game.session().missing_votes();
        ctx.reply(format!("vote recorded! {}", game.waiting_on(&missing)))
            .await?;
    }

    Ok(())
}

/// close the vote without waiting for everyone
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
async fn reveal(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;

    let Some(shared) = current_game(ctx).await? else {
        return Ok(());
    };
    let mut game = shared.lock().await;

    if game.state().is_ended() {
        ctx.reply_ephemeral("this game is already over!").await?;
        return Ok(());
    }

    if !game.session().is_player(&ctx.author().id) {
        ctx.reply_ephemeral("only players can close the vote!").await?;
        return Ok(());
    }

    if !game.voting_open() {
        ctx.reply_ephemeral("voting isn't open right now!").await?;
        return Ok(());
    }

    finish_vote(ctx, &shared, &mut game).await
}

/// caught? guess the secret word to steal the win
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
async fn guess(
    ctx: Context<'_>,
    #[description = "your guess at the secret word"]
    #[rest]
    word: String,
) -> CommandResult {
    ctx.log_command().await;

    let Some(shared) = current_game(ctx).await? else {
        return Ok(());
    };
    let mut game = shared.lock().await;

    if game.state().is_ended() {
        ctx.reply_ephemeral("this game is already over!").await?;
        return Ok(());
    }

    if !game.awaiting_guess() || game.session().impostor() != Some(ctx.author().id) {
        ctx.reply_ephemeral("only a caught chameleon can guess the word!")
            .await?;
        return Ok(());
    }

    let outcome = game.guess(&word);
    ctx.data()
        .chameleon()
        .games()
        .remove_game(ctx.channel_id(), &shared)
        .await;
    info!(?outcome, "game over");

    ctx.reply_embed(embed(game.outcome_text(outcome), END_COLOR))
        .await?;
    Ok(())
}

/// end the game in this channel
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
async fn end(ctx: Context<'_>) -> CommandResult {
    ctx.log_command().await;

    let Some(shared) = current_game(ctx).await? else {
        return Ok(());
    };
    let mut game = shared.lock().await;

    if game.state().is_ended() {
        ctx.reply_ephemeral("this game is already over!").await?;
        return Ok(());
    }

    if game.host() != ctx.author().id {
        ctx.reply_ephemeral(format!(
            "only the host ({}) can end this game!",
            game.host().mention()
        ))
        .await?;
        return Ok(());
    }

    game.session_mut().end();
    ctx.data()
        .chameleon()
        .games()
        .remove_game(ctx.channel_id(), &shared)
        .await;
    info!("game ended by host");

    let session = game.session();
    let text = format!(
        "game ended by the host. the chameleon was {chameleon} and the word was **{word}**.",
        chameleon = session
            .impostor()
            .map_or_else(|| "nobody".to_owned(), |id| id.mention().to_string()),
        word = session.secret_word().unwrap_or("???"),
    );

    ctx.reply_embed(embed(text, END_COLOR)).await?;
    Ok(())
}

/// show the rules of chameleon
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
async fn rules(ctx: Context<'_>) -> CommandResult {
    ctx.reply_embed(embed(RULES, COLOR)).await?;
    Ok(())
}

/// list the categories secret words come from
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
async fn categories(ctx: Context<'_>) -> CommandResult {
    let words = ctx.data().chameleon().words();
    let text = format!("**categories**\n{}", words.categories().join(", "));

    ctx.reply_embed(embed(text, COLOR)).await?;
    Ok(())
}
