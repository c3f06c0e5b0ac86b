use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{GamePiece, PlayerId, Position};

/// Rule violations reported by the move engine and the dispatcher. These
/// are values carried in validation results; illegal input never crashes
/// the engine.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("position ({x}, {y}) is outside the board")]
    InvalidPosition { x: i32, y: i32 },

    #[error("piece {piece_id} cannot move with a roll of {dice_value}")]
    PieceNotMovable { piece_id: String, dice_value: u32 },

    #[error("destination is occupied by a piece of the same player")]
    OwnPieceBlocking,

    #[error("destination already holds the maximum number of pieces")]
    PositionFull,

    #[error("destination is not reachable with a roll of {dice_value}")]
    DistanceMismatch { dice_value: u32 },

    #[error("player {player_id} does not hold the current turn")]
    NotPlayersTurn { player_id: PlayerId },

    #[error("no dice roll is pending for this turn")]
    NoRollPending,

    #[error("the game is not in the playing phase")]
    GameNotInProgress,
}

impl RuleViolation {
    pub fn invalid_position(position: Position) -> Self {
        Self::InvalidPosition { x: position.x, y: position.y }
    }

    pub fn piece_not_movable(piece: &GamePiece, dice_value: u32) -> Self {
        Self::PieceNotMovable { piece_id: piece.id.clone(), dice_value }
    }

    pub fn not_players_turn(player_id: PlayerId) -> Self {
        Self::NotPlayersTurn { player_id }
    }
}
