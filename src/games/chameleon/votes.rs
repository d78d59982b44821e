use rand::{seq::SliceRandom, Rng};
use serde::Deserialize;

use super::PlayerId;

/// How the most-voted player is picked when several share the top count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The smallest identifier among the tied players.
    #[default]
    LowestId,
    /// The tied player who comes first in the game's player list.
    PlayerOrder,
    /// A uniformly random tied player.
    Random,
}

impl TieBreak {
    /// `tied` must be in player order.
    pub fn pick<P: PlayerId>(self, tied: &[P], rng: &mut impl Rng) -> Option<P> {
        match self {
            Self::LowestId => tied.iter().min().copied(),
            Self::PlayerOrder => tied.first().copied(),
            Self::Random => tied.choose(rng).copied(),
        }
    }
}

/// Votes received per player, one entry per player in player order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteResults<P> {
    counts: Vec<(P, usize)>,
}

impl<P: PlayerId> VoteResults<P> {
    pub(super) fn tally<'a>(players: &[P], targets: impl IntoIterator<Item = &'a P>) -> Self
    where
        P: 'a,
    {
        let mut counts: Vec<(P, usize)> = players.iter().map(|player| (*player, 0)).collect();

        for target in targets {
            if let Some((_, count)) = counts.iter_mut().find(|(player, _)| player == target) {
                *count += 1;
            }
        }

        Self { counts }
    }

    pub fn get(&self, player: &P) -> Option<usize> {
        self.counts
            .iter()
            .find(|(id, _)| id == player)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (P, usize)> + '_ {
        self.counts.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of votes cast in total.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, count)| count).sum()
    }

    /// Every player with the highest count, in player order.
    pub fn leaders(&self) -> Vec<P> {
        let Some(max) = self.counts.iter().map(|(_, count)| *count).max() else {
            return Vec::new();
        };

        self.counts
            .iter()
            .filter(|(_, count)| *count == max)
            .map(|(player, _)| *player)
            .collect()
    }

    pub fn most_voted(&self, tie_break: TieBreak, rng: &mut impl Rng) -> Option<P> {
        tie_break.pick(&self.leaders(), rng)
    }
}

/// Outcome of the vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict<P> {
    pub caught: bool,
    pub most_voted: Option<P>,
}

impl<P> Verdict<P> {
    pub const fn undecided() -> Self {
        Self {
            caught: false,
            most_voted: None,
        }
    }
}
