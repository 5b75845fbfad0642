//! Lifecycle status of a game session

use std::fmt;

/// Status of a game session
///
/// Sessions start `Active`; every other state is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    Active,
    Won,
    Lost,
    /// Stopped by a fatal error or by the caller
    Aborted,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Active => "active",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_is_not_terminal() {
        assert!(!GameStatus::Active.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Lost.is_terminal());
        assert!(GameStatus::Aborted.is_terminal());
    }

    #[test]
    fn default_is_active() {
        assert_eq!(GameStatus::default(), GameStatus::Active);
    }
}
