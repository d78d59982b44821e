use std::collections::HashMap;

use rand::{seq::SliceRandom, Rng};
use tracing::{debug, instrument, trace};

use super::{Error, GameState, PlayerId, Rejected, Result, TieBreak, Verdict, VoteResults};

/// One game of chameleon, bound to a single channel.
///
/// The session doesn't check the current [`GameState`] when clues or votes
/// are submitted. Callers decide which phase accepts what.
#[derive(Debug, Clone)]
pub struct GameSession<P, C = P> {
    channel_id: C,
    players: Vec<P>,
    impostor: Option<P>,
    secret_word: Option<String>,
    category: Option<String>,
    clues: HashMap<P, String>,
    votes: HashMap<P, P>,
    state: GameState,
    tie_break: TieBreak,
}

impl<P: PlayerId, C: Copy> GameSession<P, C> {
    /// Repeated players are only kept once, at their first position.
    pub fn new(channel_id: C, players: impl IntoIterator<Item = P>) -> Self {
        let mut unique = Vec::new();
        for player in players {
            if !unique.contains(&player) {
                unique.push(player);
            }
        }

        Self {
            channel_id,
            players: unique,
            impostor: None,
            secret_word: None,
            category: None,
            clues: HashMap::new(),
            votes: HashMap::new(),
            state: GameState::Setup,
            tie_break: TieBreak::default(),
        }
    }

    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub const fn channel_id(&self) -> C {
        self.channel_id
    }

    pub fn players(&self) -> &[P] {
        &self.players
    }

    pub fn is_player(&self, player: &P) -> bool {
        self.players.contains(player)
    }

    pub const fn impostor(&self) -> Option<P> {
        self.impostor
    }

    pub fn secret_word(&self) -> Option<&str> {
        self.secret_word.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub const fn state(&self) -> GameState {
        self.state
    }

    pub const fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Moves to the next phase and returns it.
    pub fn advance(&mut self) -> GameState {
        self.state = self.state.next();
        debug!(state = %self.state, "game advanced");
        self.state
    }

    pub fn end(&mut self) {
        self.state = GameState::Ended;
    }

    /// Picks a new chameleon, replacing any earlier pick.
    pub fn select_impostor(&mut self) -> Result<P> {
        self.select_impostor_with(&mut rand::thread_rng())
    }

    #[instrument(skip_all)]
    pub fn select_impostor_with(&mut self, rng: &mut impl Rng) -> Result<P> {
        let impostor = *self.players.choose(rng).ok_or(Error::EmptyPlayerList)?;
        self.impostor = Some(impostor);
        trace!("chameleon selected");
        Ok(impostor)
    }

    pub fn set_secret_word(&mut self, word: impl Into<String>, category: impl Into<String>) {
        self.secret_word = Some(word.into());
        self.category = Some(category.into());
    }

    pub fn add_clue(&mut self, player: P, clue: impl Into<String>) -> Result<(), Rejected> {
        if !self.is_player(&player) {
            return Err(Rejected::UnknownPlayer);
        }

        self.clues.insert(player, clue.into());
        Ok(())
    }

    pub fn clue(&self, player: &P) -> Option<&str> {
        self.clues.get(player).map(String::as_str)
    }

    /// Clues given so far, in player order.
    pub fn clues(&self) -> impl Iterator<Item = (P, &str)> + '_ {
        self.players
            .iter()
            .filter_map(|player| self.clue(player).map(|clue| (*player, clue)))
    }

    /// Players who haven't given a clue yet.
    pub fn missing_clues(&self) -> Vec<P> {
        self.players
            .iter()
            .filter(|player| !self.clues.contains_key(player))
            .copied()
            .collect()
    }

    /// Self-votes are allowed.
    pub fn add_vote(&mut self, voter: P, target: P) -> Result<(), Rejected> {
        if !self.is_player(&voter) {
            return Err(Rejected::UnknownPlayer);
        }

        if !self.is_player(&target) {
            return Err(Rejected::UnknownTarget);
        }

        self.votes.insert(voter, target);
        Ok(())
    }

    pub fn vote(&self, voter: &P) -> Option<P> {
        self.votes.get(voter).copied()
    }

    pub fn votes(&self) -> &HashMap<P, P> {
        &self.votes
    }

    /// Players who haven't voted yet.
    pub fn missing_votes(&self) -> Vec<P> {
        self.players
            .iter()
            .filter(|player| !self.votes.contains_key(player))
            .copied()
            .collect()
    }

    pub fn vote_results(&self) -> VoteResults<P> {
        VoteResults::tally(&self.players, self.votes.values())
    }

    pub fn check_impostor_caught(&self) -> Verdict<P> {
        self.check_impostor_caught_with(&mut rand::thread_rng())
    }

    /// `rng` is only used by [`TieBreak::Random`].
    pub fn check_impostor_caught_with(&self, rng: &mut impl Rng) -> Verdict<P> {
        if self.votes.is_empty() {
            return Verdict::undecided();
        }

        let results = self.vote_results();
        let Some(most_voted) = results.most_voted(self.tie_break, rng) else {
            return Verdict::undecided();
        };

        Verdict {
            caught: Some(most_voted) == self.impostor,
            most_voted: Some(most_voted),
        }
    }

    /// Whether a caught chameleon guessed the secret word.
    pub fn check_guess(&self, guess: &str) -> bool {
        self.secret_word
            .as_deref()
            .is_some_and(|word| word.trim().eq_ignore_ascii_case(guess.trim()))
    }
}
