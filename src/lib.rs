// Moksha Rules Engine - Core Module Organization
//
// This file serves as the central organization point for the Moksha rules
// engine, exporting all the necessary modules and types in a clean,
// structured manner.

// Core game data structures and enums
pub mod actions;
pub mod errors;
pub mod types;

// Board geometry and movement
pub mod board;
pub mod dice;
pub mod moves;
pub mod player;

// Turn state machine
pub mod state;

// Re-export common types for convenient access
pub use crate::actions::Action;
pub use crate::errors::RuleViolation;
pub use crate::state::{reduce, GameState};
pub use crate::types::{
    DiceRoll, DiceType, GameMode, GamePhase, GamePiece, Move, MoveValidation, Player,
    PlayerId, Position, Square,
};
