use serde::{Deserialize, Serialize};

use crate::errors::RuleViolation;

/// Player identifier, 1..=4.
pub type PlayerId = u8;

/// Board coordinate, 1-indexed, each axis in [1, 32].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One of the three concentric path rings a piece traverses en route to
/// Moksha.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Square {
    Outer = 1,
    Middle = 2,
    Inner = 3,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameMode {
    TwoPlayer,
    ThreePlayer,
    FourPlayer,
}

impl GameMode {
    pub fn player_count(&self) -> usize {
        match self {
            GameMode::TwoPlayer => 2,
            GameMode::ThreePlayer => 3,
            GameMode::FourPlayer => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DiceType {
    /// One 6-sided die.
    Standard,
    /// Two 4-sided dice, summed.
    Indian,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiceRoll {
    pub value: u8,
    pub is_bonus: bool,
    pub dice_type: DiceType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GamePiece {
    /// Stable identifier, `player-{p}-piece-{n}`.
    pub id: String,
    pub player_id: PlayerId,
    pub position: Position,
    /// The designated home slot this piece starts in and returns to when
    /// captured.
    pub home_position: Position,
    pub is_in_home: bool,
    pub is_in_moksha: bool,
    pub current_square: Square,
    /// Which of the two lanes of each ring this piece travels (1 or 2).
    pub track: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: String,
    pub pieces: Vec<GamePiece>,
    pub is_active: bool,
    pub has_won: bool,
    pub current_turn: bool,
    /// True once any piece of this player has ever left home. First entry
    /// is gated on this flag, not on how many pieces currently sit in home.
    pub has_entered: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GamePhase {
    Setup,
    Playing,
    Finished,
}

/// Outcome of checking an attempted move against the rules. Violations are
/// reported here, never raised as panics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoveValidation {
    pub is_valid: bool,
    pub reason: Option<RuleViolation>,
}

impl MoveValidation {
    pub fn ok() -> Self {
        Self { is_valid: true, reason: None }
    }

    pub fn rejected(reason: RuleViolation) -> Self {
        Self { is_valid: false, reason: Some(reason) }
    }
}

/// One completed transition: the moved piece (post-move), where it came
/// from and landed, and every enemy piece evicted by the landing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Move {
    pub piece: GamePiece,
    pub from: Position,
    pub to: Position,
    pub is_capture: bool,
    pub captured_pieces: Vec<GamePiece>,
}
