use std::fmt::Write;

use chrono::Utc;
use poise::serenity_prelude::{ChannelId, Mentionable, UserId};
use tracing::{debug, info, instrument};

use crate::{
    framework::data::UtcDateTime,
    games::chameleon::{self, GameSession, GameState, TieBreak, Verdict, WordListManager},
    utils::FormatDuration,
};

/// A chameleon game running in a Discord channel.
#[derive(Debug)]
pub struct ChannelGame {
    session: GameSession<UserId, ChannelId>,
    host: UserId,
    started: UtcDateTime,
    verdict: Option<Verdict<UserId>>,
}

/// What happened when the game finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The vote missed; `most_voted` is who took the fall.
    Escaped { most_voted: Option<UserId> },
    /// The vote found the chameleon, who now gets a guess at the word.
    Caught,
    GuessedWord,
    MissedWord,
}

impl Outcome {
    pub const fn is_final(self) -> bool {
        !matches!(self, Self::Caught)
    }
}

impl ChannelGame {
    /// `host` is always a player, listed first.
    pub fn new(
        channel_id: ChannelId,
        host: UserId,
        players: impl IntoIterator<Item = UserId>,
        tie_break: TieBreak,
    ) -> Self {
        let session = GameSession::new(channel_id, std::iter::once(host).chain(players))
            .with_tie_break(tie_break);

        Self {
            session,
            host,
            started: Utc::now(),
            verdict: None,
        }
    }

    /// Picks the chameleon and the secret word, then opens the clue phase.
    #[instrument(skip_all, fields(channel = %self.session.channel_id()))]
    pub fn setup(
        &mut self,
        words: &WordListManager,
        category: Option<&str>,
    ) -> chameleon::Result<()> {
        self.session.select_impostor()?;

        let (word, category) = words.random_word(category)?;
        debug!(%category, "secret word picked");
        self.session.set_secret_word(word, category);

        self.session.advance();
        info!(players = self.session.players().len(), "game started");
        Ok(())
    }

    pub const fn session(&self) -> &GameSession<UserId, ChannelId> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut GameSession<UserId, ChannelId> {
        &mut self.session
    }

    pub const fn host(&self) -> UserId {
        self.host
    }

    pub fn state(&self) -> GameState {
        self.session.state()
    }

    /// The vote has caught the chameleon and the game waits on their guess.
    pub fn awaiting_guess(&self) -> bool {
        !self.state().is_ended() && self.verdict.is_some_and(|verdict| verdict.caught)
    }

    /// Opens voting once every player has given a clue.
    pub fn all_clues_in(&mut self) -> bool {
        if self.state() == GameState::GivingClues && self.session.missing_clues().is_empty() {
            self.session.advance();
            true
        } else {
            false
        }
    }

    /// Votes are only taken after the clues and before a caught chameleon's guess.
    pub fn voting_open(&self) -> bool {
        self.state() == GameState::Voting && !self.awaiting_guess()
    }

    pub fn all_votes_in(&self) -> bool {
        self.session.missing_votes().is_empty()
    }

    /// Closes the vote. The game ends unless the chameleon was caught.
    pub fn resolve_vote(&mut self) -> Outcome {
        let verdict = self.session.check_impostor_caught();
        self.verdict = Some(verdict);

        if verdict.caught {
            Outcome::Caught
        } else {
            self.session.end();
            Outcome::Escaped {
                most_voted: verdict.most_voted,
            }
        }
    }

    /// The caught chameleon's last chance. Ends the game.
    pub fn guess(&mut self, word: &str) -> Outcome {
        self.session.end();

        if self.session.check_guess(word) {
            Outcome::GuessedWord
        } else {
            Outcome::MissedWord
        }
    }

    pub fn announcement(&self) -> String {
        format!(
            "{players}\na game of chameleon has started! the category is **{category}**.\n\n\
            use `/chameleon word` to see the secret word (unless you're the chameleon), \
            then give a one-word clue with `/chameleon clue`.\nhosted by {host}",
            players = self.mentions(self.session.players()),
            category = self.session.category().unwrap_or("unknown"),
            host = self.host.mention(),
        )
    }

    /// What `user` is allowed to know, or `None` for spectators.
    pub fn word_for(&self, user: UserId) -> Option<String> {
        if !self.session.is_player(&user) {
            return None;
        }

        let category = self.session.category().unwrap_or("unknown");

        let text = if self.session.impostor() == Some(user) {
            format!("🦎 **you're the chameleon!** the category is **{category}**. blend in!")
        } else {
            format!(
                "the secret word is **{word}** (category: {category})",
                word = self.session.secret_word().unwrap_or("???"),
            )
        };

        Some(text)
    }

    pub fn clue_board(&self) -> String {
        let mut board = String::from("**clues**");

        for (player, clue) in self.session.clues() {
            let _ = write!(board, "\n{}: {clue}", player.mention());
        }

        board
    }

    pub fn waiting_on(&self, players: &[UserId]) -> String {
        format!("waiting on {}", self.mentions(players))
    }

    pub fn vote_tally(&self) -> String {
        let mut tally = String::from("**votes**");

        for (player, count) in self.session.vote_results().iter() {
            let votes = if count == 1 { "vote" } else { "votes" };
            let _ = write!(tally, "\n{}: {count} {votes}", player.mention());
        }

        tally
    }

    pub fn outcome_text(&self, outcome: Outcome) -> String {
        let chameleon = self
            .session
            .impostor()
            .map_or_else(|| "nobody".to_owned(), |id| id.mention().to_string());
        let word = self.session.secret_word().unwrap_or("???");

        let text = match outcome {
            Outcome::Escaped {
                most_voted: Some(player),
            } => format!(
                "{} was voted out, but they weren't the chameleon! {chameleon} wins. the word was **{word}**.",
                player.mention()
            ),
            Outcome::Escaped { most_voted: None } => format!(
                "nobody voted, so the chameleon got away! it was {chameleon}. the word was **{word}**."
            ),
            Outcome::Caught => format!(
                "caught! {chameleon} was the chameleon. you get one last chance: guess the word with `/chameleon guess`."
            ),
            Outcome::GuessedWord => format!(
                "{chameleon} guessed the word **{word}** and steals the win!"
            ),
            Outcome::MissedWord => {
                format!("{chameleon} couldn't guess the word **{word}**. everyone else wins!")
            }
        };

        if outcome.is_final() {
            let lasted = (Utc::now() - self.started).format_largest();
            format!("{text}\n-# game lasted {lasted}")
        } else {
            text
        }
    }

    fn mentions(&self, players: &[UserId]) -> String {
        players
            .iter()
            .map(|player| player.mention().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
