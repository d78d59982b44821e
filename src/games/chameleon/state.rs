use std::fmt;

/// Phase of a chameleon game.
///
/// Games move forward through `Setup -> GivingClues -> Voting -> Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameState {
    #[default]
    Setup,
    GivingClues,
    Voting,
    Ended,
}

impl GameState {
    /// The phase after this one. `Ended` is terminal.
    pub const fn next(self) -> Self {
        match self {
            Self::Setup => Self::GivingClues,
            Self::GivingClues => Self::Voting,
            Self::Voting | Self::Ended => Self::Ended,
        }
    }

    pub const fn is_ended(self) -> bool {
        matches!(self, Self::Ended)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Setup => "setting up",
            Self::GivingClues => "giving clues",
            Self::Voting => "voting",
            Self::Ended => "ended",
        };

        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;

    #[test]
    fn phases_advance_in_order() {
        let mut state = GameState::default();
        let mut seen = vec![state];

        for _ in 0..4 {
            state = state.next();
            seen.push(state);
        }

        assert_eq!(
            seen,
            [
                GameState::Setup,
                GameState::GivingClues,
                GameState::Voting,
                GameState::Ended,
                GameState::Ended
            ]
        );
    }

    #[test]
    fn display() {
        assert_eq!(GameState::GivingClues.to_string(), "giving clues");
        assert_eq!(GameState::Ended.to_string(), "ended");
    }
}
