//! Debug session targets.

use std::fmt;

/// Which kind of entity a debug session observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Server,
    Game,
    Player,
}

impl TargetKind {
    /// All kinds in menu order.
    pub const ALL: [TargetKind; 3] = [TargetKind::Server, TargetKind::Game, TargetKind::Player];

    /// Display name used in menus.
    pub fn name(self) -> &'static str {
        match self {
            TargetKind::Server => "Server",
            TargetKind::Game => "Game",
            TargetKind::Player => "Player",
        }
    }

    /// Returns the kind at `index` in [`TargetKind::ALL`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TargetKind::Server => "server",
            TargetKind::Game => "game",
            TargetKind::Player => "player",
        })
    }
}

/// A fully resolved debug target.
///
/// `Debug` never prints the player secret.
#[derive(Clone, PartialEq, Eq)]
pub enum ConnectionTarget {
    Server,
    Game {
        game_id: String,
    },
    Player {
        game_id: String,
        player_id: String,
        player_secret: String,
    },
}

impl ConnectionTarget {
    pub fn kind(&self) -> TargetKind {
        match self {
            ConnectionTarget::Server => TargetKind::Server,
            ConnectionTarget::Game { .. } => TargetKind::Game,
            ConnectionTarget::Player { .. } => TargetKind::Player,
        }
    }
}

impl fmt::Debug for ConnectionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionTarget::Server => f.write_str("Server"),
            ConnectionTarget::Game { game_id } => {
                f.debug_struct("Game").field("game_id", game_id).finish()
            }
            ConnectionTarget::Player {
                game_id, player_id, ..
            } => f
                .debug_struct("Player")
                .field("game_id", game_id)
                .field("player_id", player_id)
                .field("player_secret", &"<redacted>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(ConnectionTarget::Server.kind(), TargetKind::Server);
        let game = ConnectionTarget::Game {
            game_id: "g1".into(),
        };
        assert_eq!(game.kind(), TargetKind::Game);
    }

    #[test]
    fn kind_display_is_lowercase() {
        assert_eq!(TargetKind::Server.to_string(), "server");
        assert_eq!(TargetKind::Game.to_string(), "game");
        assert_eq!(TargetKind::Player.to_string(), "player");
    }

    #[test]
    fn kind_from_index() {
        assert_eq!(TargetKind::from_index(0), Some(TargetKind::Server));
        assert_eq!(TargetKind::from_index(2), Some(TargetKind::Player));
        assert_eq!(TargetKind::from_index(3), None);
    }

    #[test]
    fn debug_redacts_secret() {
        let target = ConnectionTarget::Player {
            game_id: "g1".into(),
            player_id: "p1".into(),
            player_secret: "hunter2".into(),
        };
        let out = format!("{target:?}");
        assert!(out.contains("p1"));
        assert!(!out.contains("hunter2"));
    }
}
