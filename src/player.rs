//! Derived queries over pieces and players: movability, entry gating,
//! per-player stats, win/active status, and capture eligibility.

use serde::{Deserialize, Serialize};

use crate::board;
use crate::board::GAME_RULES;
use crate::types::{GamePiece, Player, PlayerId, Position};

/// Whether the dice value lets one of `player`'s pieces leave home. The
/// very first entry requires exactly the first-entry value; after that any
/// value in the entry set works.
pub fn can_enter_board(player: &Player, dice_value: u32) -> bool {
    if !player.has_entered {
        dice_value == GAME_RULES.first_entry_value
    } else {
        GAME_RULES.entry_values.contains(&dice_value)
    }
}

/// Whether this piece is eligible to move at all with the given dice
/// value. Pieces in Moksha never move again; pieces in home are gated by
/// the entry rule; pieces on the board are always candidates (their actual
/// destination is constrained by the move engine).
pub fn can_move_piece(piece: &GamePiece, dice_value: u32, player: &Player) -> bool {
    if piece.is_in_moksha {
        return false;
    }
    if piece.is_in_home {
        return can_enter_board(player, dice_value);
    }
    true
}

pub fn movable_pieces<'a>(player: &'a Player, dice_value: u32) -> Vec<&'a GamePiece> {
    player
        .pieces
        .iter()
        .filter(|piece| can_move_piece(piece, dice_value, player))
        .collect()
}

pub fn has_movable_pieces(player: &Player, dice_value: u32) -> bool {
    player
        .pieces
        .iter()
        .any(|piece| can_move_piece(piece, dice_value, player))
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerStats {
    pub pieces_in_home: usize,
    pub pieces_on_board: usize,
    pub pieces_in_moksha: usize,
    pub has_won: bool,
    pub is_active: bool,
}

pub fn player_stats(player: &Player) -> PlayerStats {
    let pieces_in_home = player.pieces.iter().filter(|p| p.is_in_home).count();
    let pieces_in_moksha = player.pieces.iter().filter(|p| p.is_in_moksha).count();
    PlayerStats {
        pieces_in_home,
        pieces_on_board: player.pieces.len() - pieces_in_home - pieces_in_moksha,
        pieces_in_moksha,
        has_won: has_player_won(player),
        is_active: is_player_active(player),
    }
}

/// A player has won once all four pieces are in Moksha.
pub fn has_player_won(player: &Player) -> bool {
    !player.pieces.is_empty() && player.pieces.iter().all(|piece| piece.is_in_moksha)
}

pub fn is_player_active(player: &Player) -> bool {
    player.is_active && !has_player_won(player)
}

/// Whether `target` standing on `target_position` can be captured by a
/// piece of `attacker_owner` landing there. Safe zones, the target's own
/// home area, and Moksha all protect; own pieces are never captured.
pub fn can_capture_piece(
    attacker_owner: PlayerId,
    target: &GamePiece,
    target_position: Position,
) -> bool {
    if target.player_id == attacker_owner {
        return false;
    }
    if target.is_in_moksha {
        return false;
    }
    if board::is_safe_zone(target_position) {
        return false;
    }
    if board::is_home_area(target_position, target.player_id) {
        return false;
    }
    true
}
