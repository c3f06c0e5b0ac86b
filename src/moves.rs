//! Move engine: legal-destination computation along the precomputed
//! tracks, validation of attempted moves with reason codes, and execution
//! with capture resolution.

use serde::{Deserialize, Serialize};

use crate::board::{self, zones, MOKSHA_POSITION};
use crate::errors::RuleViolation;
use crate::player;
use crate::types::{GamePiece, Move, MoveValidation, Player, Position, Square};

/// All in-play pieces standing on `position`. Pieces in Moksha are out of
/// play and never occupy a cell.
pub fn pieces_at_position<'a>(position: Position, players: &'a [Player]) -> Vec<&'a GamePiece> {
    players
        .iter()
        .flat_map(|p| p.pieces.iter())
        .filter(|piece| !piece.is_in_moksha && piece.position == position)
        .collect()
}

fn entry_cell(piece: &GamePiece) -> Position {
    zones::entry_cells(piece.player_id)[(piece.track.clamp(1, 2) - 1) as usize]
}

/// Occupants of `target` that would still be there after a piece of
/// `attacker_owner` lands (everything not capturable stays put).
fn remaining_occupants(attacker_owner: u8, target: Position, players: &[Player]) -> usize {
    pieces_at_position(target, players)
        .iter()
        .filter(|occupant| !player::can_capture_piece(attacker_owner, occupant, target))
        .count()
}

fn accepts(piece: &GamePiece, target: Position, players: &[Player]) -> bool {
    if !board::is_valid_position(target) {
        return false;
    }
    let occupants = pieces_at_position(target, players);
    let own_blocking = occupants.iter().any(|o| o.player_id == piece.player_id)
        && !board::is_safe_zone(target);
    if own_blocking {
        return false;
    }
    remaining_occupants(piece.player_id, target, players) < board::max_pieces_at(target)
}

/// Every destination the piece can legally reach with this dice value:
/// the per-track entry cell for a home piece, or the single cell exactly
/// `dice_value` steps ahead on its track. Empty when nothing is reachable
/// (including Moksha overshoot).
pub fn valid_moves(piece: &GamePiece, dice_value: u32, players: &[Player]) -> Vec<Position> {
    if piece.is_in_moksha || dice_value == 0 {
        return Vec::new();
    }
    let candidate = if piece.is_in_home {
        let Some(owner) = players.iter().find(|p| p.id == piece.player_id) else {
            return Vec::new();
        };
        if !player::can_enter_board(owner, dice_value) {
            return Vec::new();
        }
        entry_cell(piece)
    } else {
        match board::destination(piece, dice_value) {
            Some(cell) => cell,
            None => return Vec::new(),
        }
    };
    if accepts(piece, candidate, players) {
        vec![candidate]
    } else {
        Vec::new()
    }
}

/// Check an attempted move. Reasons are evaluated in a fixed order:
/// movability, bounds, own-piece blocking, capacity, reachability.
pub fn validate_move(
    piece: &GamePiece,
    target: Position,
    dice_value: u32,
    players: &[Player],
) -> MoveValidation {
    let Some(owner) = players.iter().find(|p| p.id == piece.player_id) else {
        return MoveValidation::rejected(RuleViolation::piece_not_movable(piece, dice_value));
    };
    if !player::can_move_piece(piece, dice_value, owner) {
        return MoveValidation::rejected(RuleViolation::piece_not_movable(piece, dice_value));
    }
    if !board::is_valid_position(target) {
        return MoveValidation::rejected(RuleViolation::invalid_position(target));
    }
    let occupants = pieces_at_position(target, players);
    if occupants.iter().any(|o| o.player_id == piece.player_id) && !board::is_safe_zone(target) {
        return MoveValidation::rejected(RuleViolation::OwnPieceBlocking);
    }
    if remaining_occupants(piece.player_id, target, players) >= board::max_pieces_at(target) {
        return MoveValidation::rejected(RuleViolation::PositionFull);
    }
    let reachable = if piece.is_in_home {
        target == entry_cell(piece)
    } else {
        board::destination(piece, dice_value) == Some(target)
    };
    if !reachable {
        return MoveValidation::rejected(RuleViolation::DistanceMismatch { dice_value });
    }
    MoveValidation::ok()
}

/// Return a captured piece to its home slot.
pub fn capture_piece(piece: &GamePiece) -> GamePiece {
    let mut sent_home = piece.clone();
    sent_home.position = sent_home.home_position;
    sent_home.is_in_home = true;
    sent_home.is_in_moksha = false;
    sent_home.current_square = Square::Outer;
    sent_home.track = 1;
    sent_home
}

/// Carry out a validated move: evict every capturable occupant of the
/// target, land the piece, and flag Moksha entry. Does not touch the
/// players collection; the dispatcher folds the returned record in.
pub fn execute_move(piece: &GamePiece, target: Position, players: &[Player]) -> Move {
    let captured_pieces: Vec<GamePiece> = pieces_at_position(target, players)
        .into_iter()
        .filter(|occupant| player::can_capture_piece(piece.player_id, occupant, target))
        .map(capture_piece)
        .collect();

    let from = piece.position;
    let mut moved = piece.clone();
    moved.position = target;
    moved.is_in_home = false;
    if target == MOKSHA_POSITION {
        moved.is_in_moksha = true;
        moved.current_square = Square::Inner;
    } else {
        moved.current_square = board::get_square(target);
    }

    Move {
        is_capture: !captured_pieces.is_empty(),
        piece: moved,
        from,
        to: target,
        captured_pieces,
    }
}

/// Per-piece legal destinations for one player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PieceMoves {
    pub piece: GamePiece,
    pub moves: Vec<Position>,
}

pub fn all_valid_moves(player: &Player, dice_value: u32, players: &[Player]) -> Vec<PieceMoves> {
    player
        .pieces
        .iter()
        .filter_map(|piece| {
            let moves = valid_moves(piece, dice_value, players);
            if moves.is_empty() {
                None
            } else {
                Some(PieceMoves { piece: piece.clone(), moves })
            }
        })
        .collect()
}

pub fn has_valid_moves(player: &Player, dice_value: u32, players: &[Player]) -> bool {
    player
        .pieces
        .iter()
        .any(|piece| !valid_moves(piece, dice_value, players).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PlayerId;

    fn test_player(id: PlayerId) -> Player {
        let pieces = zones::home_slots(id)
            .iter()
            .enumerate()
            .map(|(index, &slot)| GamePiece {
                id: format!("player-{}-piece-{}", id, index + 1),
                player_id: id,
                position: slot,
                home_position: slot,
                is_in_home: true,
                is_in_moksha: false,
                current_square: Square::Outer,
                track: if index < 2 { 1 } else { 2 },
            })
            .collect();
        Player {
            id,
            name: format!("Player {}", id),
            color: "#FF6B6B".to_string(),
            pieces,
            is_active: true,
            has_won: false,
            current_turn: false,
            has_entered: false,
        }
    }

    fn place(player: &mut Player, index: usize, position: Position) {
        player.pieces[index].is_in_home = false;
        player.pieces[index].position = position;
        player.pieces[index].current_square = board::get_square(position);
    }

    #[test]
    fn home_piece_enters_at_its_track_entry() {
        let players = vec![test_player(1), test_player(2)];
        let piece = &players[0].pieces[0];
        assert_eq!(valid_moves(piece, 1, &players), vec![Position::new(15, 3)]);
        // track 2 pieces use the second entry cell
        let piece = &players[0].pieces[2];
        assert_eq!(valid_moves(piece, 1, &players), vec![Position::new(15, 4)]);
    }

    #[test]
    fn home_piece_without_entry_roll_has_no_moves() {
        let players = vec![test_player(1), test_player(2)];
        let piece = &players[0].pieces[0];
        assert!(valid_moves(piece, 2, &players).is_empty());
        // 5 is only good once the player has entered
        assert!(valid_moves(piece, 5, &players).is_empty());
    }

    #[test]
    fn board_piece_walks_its_track() {
        let mut attacker = test_player(1);
        attacker.has_entered = true;
        place(&mut attacker, 0, Position::new(15, 3));
        let players = vec![attacker, test_player(2)];
        let piece = &players[0].pieces[0];
        assert_eq!(valid_moves(piece, 3, &players), vec![Position::new(12, 3)]);
    }

    #[test]
    fn own_piece_blocks_outside_safe_zones() {
        let mut p1 = test_player(1);
        p1.has_entered = true;
        place(&mut p1, 0, Position::new(15, 3));
        place(&mut p1, 1, Position::new(13, 3));
        let players = vec![p1, test_player(2)];
        let piece = &players[0].pieces[0];
        // (13, 3) is a regular spot occupied by our own piece
        assert!(valid_moves(piece, 2, &players).is_empty());
        let validation = validate_move(piece, Position::new(13, 3), 2, &players);
        assert_eq!(validation.reason, Some(RuleViolation::OwnPieceBlocking));
    }

    #[test]
    fn safe_zone_allows_own_stacking_up_to_capacity() {
        let mut p1 = test_player(1);
        p1.has_entered = true;
        // three own pieces already on the track-1 entry safe cell
        place(&mut p1, 0, Position::new(15, 3));
        place(&mut p1, 2, Position::new(15, 3));
        place(&mut p1, 3, Position::new(15, 3));
        let players = vec![p1, test_player(2)];
        // the last track-1 piece may still enter (4 occupants max)
        let piece = &players[0].pieces[1];
        assert_eq!(valid_moves(piece, 1, &players), vec![Position::new(15, 3)]);
        // but a full safe cell rejects with PositionFull
        let mut p1 = test_player(1);
        p1.has_entered = true;
        for index in 0..4 {
            place(&mut p1, index, Position::new(4, 17));
        }
        let mut p2 = test_player(2);
        p2.has_entered = true;
        // player 2 track 2 entry is (4, 17), already holding four pieces
        let validation = {
            let players = vec![p1, p2];
            let piece = players[1].pieces[2].clone();
            validate_move(&piece, Position::new(4, 17), 1, &players)
        };
        assert_eq!(validation.reason, Some(RuleViolation::PositionFull));
    }

    #[test]
    fn capture_sends_defender_home() {
        let mut attacker = test_player(1);
        attacker.has_entered = true;
        place(&mut attacker, 0, Position::new(15, 3));
        let mut defender = test_player(2);
        defender.has_entered = true;
        place(&mut defender, 0, Position::new(14, 3));
        let players = vec![attacker, defender];

        let piece = players[0].pieces[0].clone();
        let validation = validate_move(&piece, Position::new(14, 3), 1, &players);
        assert!(validation.is_valid);

        let mv = execute_move(&piece, Position::new(14, 3), &players);
        assert!(mv.is_capture);
        assert_eq!(mv.captured_pieces.len(), 1);
        let sent_home = &mv.captured_pieces[0];
        assert_eq!(sent_home.player_id, 2);
        assert!(sent_home.is_in_home);
        assert!(!sent_home.is_in_moksha);
        assert_eq!(sent_home.position, sent_home.home_position);
        assert_eq!(sent_home.current_square, Square::Outer);
        assert_eq!(mv.piece.position, Position::new(14, 3));
    }

    #[test]
    fn no_capture_in_safe_zone() {
        let mut attacker = test_player(1);
        attacker.has_entered = true;
        place(&mut attacker, 0, Position::new(16, 3));
        let mut defender = test_player(2);
        defender.has_entered = true;
        place(&mut defender, 0, Position::new(15, 3));
        let players = vec![attacker, defender];

        // (15, 3) is a safe zone: landing there must not evict the enemy
        let piece = players[0].pieces[0].clone();
        let mv = execute_move(&piece, Position::new(15, 3), &players);
        assert!(!mv.is_capture);
        assert!(mv.captured_pieces.is_empty());
    }

    #[test]
    fn enemy_occupant_of_a_regular_spot_does_not_make_it_full() {
        let mut attacker = test_player(1);
        attacker.has_entered = true;
        place(&mut attacker, 0, Position::new(15, 3));
        let mut defender = test_player(2);
        defender.has_entered = true;
        place(&mut defender, 0, Position::new(14, 3));
        let players = vec![attacker, defender];

        // capacity is 1, but the capturable defender will vacate
        let piece = &players[0].pieces[0];
        assert_eq!(valid_moves(piece, 1, &players), vec![Position::new(14, 3)]);
    }

    #[test]
    fn moksha_entry_is_exact_and_marks_the_piece() {
        let mut p1 = test_player(1);
        p1.has_entered = true;
        place(&mut p1, 0, Position::new(17, 11));
        let players = vec![p1, test_player(2)];

        let piece = players[0].pieces[0].clone();
        assert_eq!(valid_moves(&piece, 1, &players), vec![MOKSHA_POSITION]);
        assert!(valid_moves(&piece, 2, &players).is_empty());
        let validation = validate_move(&piece, MOKSHA_POSITION, 2, &players);
        assert_eq!(validation.reason, Some(RuleViolation::DistanceMismatch { dice_value: 2 }));

        let mv = execute_move(&piece, MOKSHA_POSITION, &players);
        assert!(mv.piece.is_in_moksha);
        assert_eq!(mv.piece.current_square, Square::Inner);
    }

    #[test]
    fn moksha_pieces_do_not_block_the_center() {
        let mut p1 = test_player(1);
        p1.has_entered = true;
        place(&mut p1, 0, Position::new(17, 11));
        let mut p2 = test_player(2);
        p2.has_entered = true;
        place(&mut p2, 0, MOKSHA_POSITION);
        p2.pieces[0].is_in_moksha = true;
        let players = vec![p1, p2];

        let piece = &players[0].pieces[0];
        assert_eq!(valid_moves(piece, 1, &players), vec![MOKSHA_POSITION]);
    }

    #[test]
    fn all_valid_moves_collects_per_piece() {
        let mut p1 = test_player(1);
        p1.has_entered = true;
        place(&mut p1, 0, Position::new(15, 3));
        let players = vec![p1, test_player(2)];

        // with a 5, the board piece moves and home pieces may enter
        let options = all_valid_moves(&players[0], 5, &players);
        let ids: Vec<&str> = options.iter().map(|pm| pm.piece.id.as_str()).collect();
        assert!(ids.contains(&"player-1-piece-1"));
        assert!(ids.contains(&"player-1-piece-2"));
        assert!(has_valid_moves(&players[0], 5, &players));

        // with a 2, only the board piece can move
        let options = all_valid_moves(&players[0], 2, &players);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].piece.id, "player-1-piece-1");
    }
}
