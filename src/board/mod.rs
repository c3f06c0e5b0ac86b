//! Board model: static zone tables, precomputed movement tracks, and pure
//! membership/classification queries over positions. All predicates are
//! total; off-board positions classify as false / outer.

pub mod paths;
pub mod zones;

pub use paths::{destination, path_index, track_path};
pub use zones::{GameRules, Rect, SquareGates, BOARD_SIZE, GAME_RULES, MOKSHA_POSITION};

use crate::types::{PlayerId, Position, Square};

pub fn is_valid_position(p: Position) -> bool {
    p.x >= 1 && p.x <= zones::BOARD_SIZE && p.y >= 1 && p.y <= zones::BOARD_SIZE
}

pub fn is_safe_zone(p: Position) -> bool {
    zones::SAFE_ZONES.iter().any(|zone| zone.contains(p))
}

pub fn is_regular_spot(p: Position) -> bool {
    zones::REGULAR_SPOTS.iter().any(|spot| spot.contains(p))
}

/// Whether `p` is one of the given player's home slots.
pub fn is_home_area(p: Position, player_id: PlayerId) -> bool {
    if !(1..=4).contains(&player_id) {
        return false;
    }
    zones::home_slots(player_id).iter().any(|&slot| slot == p)
}

pub fn is_middle_square_path(p: Position) -> bool {
    zones::MIDDLE_SQUARE_PATHS.iter().any(|path| path.contains(p))
}

pub fn is_inner_square_path(p: Position) -> bool {
    zones::INNER_SQUARE_PATHS.iter().any(|path| path.contains(p))
}

pub fn is_moksha_area(p: Position) -> bool {
    zones::MOKSHA_AREA.contains(p)
}

/// Which nested square band the position falls in. Positions outside the
/// middle band (including off-board) default to the outer square.
pub fn get_square(p: Position) -> Square {
    if zones::INNER_BAND.contains(p) {
        Square::Inner
    } else if zones::MIDDLE_BAND.contains(p) {
        Square::Middle
    } else {
        Square::Outer
    }
}

/// Occupancy capacity: safe zones hold up to four pieces, everywhere else
/// a single one.
pub fn max_pieces_at(p: Position) -> usize {
    if is_safe_zone(p) {
        4
    } else {
        1
    }
}
