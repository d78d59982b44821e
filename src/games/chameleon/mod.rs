//! Core rules of chameleon, a word-association deduction game.
//!
//! Everyone but the chameleon learns a secret word. Each player gives a clue
//! about it, then everyone votes on who they think the chameleon is.

use std::{fmt::Debug, hash::Hash};

mod error;
pub use error::{Error, Rejected, Result};

mod session;
pub use session::GameSession;

mod state;
pub use state::GameState;

mod votes;
pub use votes::{TieBreak, Verdict, VoteResults};

mod words;
pub use words::WordListManager;

/// Anything that can identify a player.
pub trait PlayerId: Copy + Eq + Hash + Ord + Debug {}

impl<T: Copy + Eq + Hash + Ord + Debug> PlayerId for T {}
