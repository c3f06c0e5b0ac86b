use serde::{Deserialize, Serialize};

use crate::types::{DiceType, GameMode, Move, PlayerId, Position};

/// The discrete action set consumed by the dispatcher. Each variant maps
/// to exactly one state transition; actions that are not permitted in the
/// current state leave it unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Action {
    StartGame {
        game_mode: GameMode,
        dice_type: DiceType,
    },
    /// `dice_opt` bypasses the random source with fixed dice faces, for
    /// tests and replays. Faces are clamped to the die's range.
    RollDice {
        player_id: PlayerId,
        dice_opt: Option<(u8, u8)>,
    },
    SelectPiece {
        piece_id: String,
    },
    /// Fold a previously constructed move into the state. The move is
    /// re-validated against the live state before it is applied.
    MovePiece {
        mv: Move,
    },
    EndTurn,
    ResetGame,
    ClearSelection,
    SetDiceType {
        dice_type: DiceType,
    },
    ValidateMove {
        piece_id: String,
        target: Position,
    },
    ExecuteMoveWithCapture {
        piece_id: String,
        target: Position,
    },
    HighlightValidMoves {
        piece_id: String,
    },
    ClearHighlights,
    CheckGameOver,
    AutoEndTurn,
    ClearTurnSkipped,
}
