//! The single owned state root and its read-only queries. Transitions go
//! through [`reduce`], which returns a fresh snapshot and never mutates
//! its input.

mod reducer;

pub use reducer::reduce;

use serde::{Deserialize, Serialize};

use crate::board::zones::{self, PLAYER_COLORS, PLAYER_NAMES};
use crate::dice;
use crate::moves::{self, PieceMoves};
use crate::player;
use crate::types::{
    DiceRoll, DiceType, GameMode, GamePhase, GamePiece, MoveValidation, Player, PlayerId,
    Position, Square,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub players: Vec<Player>,
    pub current_player_index: usize,
    /// Rolls accumulated in the current roll-and-move cycle.
    pub dice_rolls: Vec<DiceRoll>,
    pub game_phase: GamePhase,
    /// Id of the piece the current player has selected, if any.
    pub selected_piece: Option<String>,
    pub game_mode: GameMode,
    pub dice_type: DiceType,
    pub last_roll: Option<DiceRoll>,
    pub game_over: bool,
    pub last_move_validation: Option<MoveValidation>,
    pub highlighted_positions: Vec<Position>,
    pub turn_skipped: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The pristine pre-game state. `ResetGame` returns here from any
    /// snapshot.
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            current_player_index: 0,
            dice_rolls: Vec::new(),
            game_phase: GamePhase::Setup,
            selected_piece: None,
            game_mode: GameMode::FourPlayer,
            dice_type: DiceType::Standard,
            last_roll: None,
            game_over: false,
            last_move_validation: None,
            highlighted_positions: Vec::new(),
            turn_skipped: false,
        }
    }

    pub(crate) fn create_players(game_mode: GameMode) -> Vec<Player> {
        (0..game_mode.player_count())
            .map(|index| {
                let player_id = (index + 1) as PlayerId;
                let pieces = zones::home_slots(player_id)
                    .iter()
                    .enumerate()
                    .map(|(slot, &position)| GamePiece {
                        id: format!("player-{}-piece-{}", player_id, slot + 1),
                        player_id,
                        position,
                        home_position: position,
                        is_in_home: true,
                        is_in_moksha: false,
                        current_square: Square::Outer,
                        track: if slot < 2 { 1 } else { 2 },
                    })
                    .collect();
                Player {
                    id: player_id,
                    name: PLAYER_NAMES[index].to_string(),
                    color: PLAYER_COLORS[index].to_string(),
                    pieces,
                    is_active: true,
                    has_won: false,
                    current_turn: index == 0,
                    has_entered: false,
                }
            })
            .collect()
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.players.get(self.current_player_index)
    }

    pub fn find_piece(&self, piece_id: &str) -> Option<&GamePiece> {
        self.players
            .iter()
            .flat_map(|p| p.pieces.iter())
            .find(|piece| piece.id == piece_id)
    }

    pub fn find_player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Sum of the rolls accumulated this turn.
    pub fn total_dice_value(&self) -> u32 {
        dice::total_dice_value(&self.dice_rolls)
    }

    /// Whether the last roll grants another throw.
    pub fn has_bonus_pending(&self) -> bool {
        dice::can_continue_rolling(&self.dice_rolls)
    }

    /// Rolling is allowed for the current player when no roll is pending
    /// or immediately after a bonus.
    pub fn can_roll_dice(&self) -> bool {
        if self.game_phase != GamePhase::Playing || self.game_over {
            return false;
        }
        let Some(current) = self.current_player() else {
            return false;
        };
        if !current.current_turn || !player::is_player_active(current) {
            return false;
        }
        self.dice_rolls.is_empty() || self.has_bonus_pending()
    }

    /// Ending the turn needs at least one roll and no pending bonus.
    pub fn can_end_turn(&self) -> bool {
        self.game_phase == GamePhase::Playing
            && !self.game_over
            && !self.dice_rolls.is_empty()
            && !self.has_bonus_pending()
    }

    /// The game ends once at most one player is still contending.
    pub fn is_game_over(&self) -> bool {
        if self.players.is_empty() {
            return false;
        }
        let active = self
            .players
            .iter()
            .filter(|p| player::is_player_active(p))
            .count();
        active <= 1
    }

    pub fn winners(&self) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| player::has_player_won(p))
            .collect()
    }

    pub fn player_stats(&self, player_id: PlayerId) -> Option<player::PlayerStats> {
        self.find_player(player_id).map(player::player_stats)
    }

    /// Legal destinations for one piece at the current turn total.
    pub fn valid_moves_for_piece(&self, piece_id: &str) -> Vec<Position> {
        let Some(piece) = self.find_piece(piece_id) else {
            return Vec::new();
        };
        moves::valid_moves(piece, self.total_dice_value(), &self.players)
    }

    /// Legal destinations for every piece of the current player.
    pub fn valid_moves_for_current_player(&self) -> Vec<PieceMoves> {
        let Some(current) = self.current_player() else {
            return Vec::new();
        };
        moves::all_valid_moves(current, self.total_dice_value(), &self.players)
    }
}
