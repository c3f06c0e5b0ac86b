//! Precomputed movement tracks. Each (player, track) pair has one ordered
//! cell sequence: a full lap of its outer-ring lane starting at the entry
//! cell, a full lap of its middle-ring lane from the second-square start
//! waypoint, a full lap of its inner-ring lane from the third-square start
//! waypoint, then the Moksha center as the final cell. A move of `n` walks
//! `n` cells forward; the final cell must be hit exactly.

use once_cell::sync::Lazy;

use super::zones::{self, MOKSHA_POSITION};
use crate::types::{GamePiece, PlayerId, Position};

/// Lane bounds (outermost, innermost) for each ring.
const OUTER_LANES: [(i32, i32); 2] = [(3, 30), (4, 29)];
const MIDDLE_LANES: [(i32, i32); 2] = [(7, 26), (8, 25)];
const INNER_LANES: [(i32, i32); 2] = [(11, 22), (12, 21)];

/// Successor of `p` on the square ring with corners (lo, lo) and (hi, hi).
/// Direction is uniform for all rings and players: top row toward -x, left
/// column toward +y, bottom row toward +x, right column toward -y. This is
/// the one direction consistent with every player's transition waypoints.
fn ring_next(lo: i32, hi: i32, p: Position) -> Position {
    if p.y == lo && p.x > lo {
        Position::new(p.x - 1, p.y)
    } else if p.x == lo && p.y < hi {
        Position::new(p.x, p.y + 1)
    } else if p.y == hi && p.x < hi {
        Position::new(p.x + 1, p.y)
    } else {
        Position::new(p.x, p.y - 1)
    }
}

/// One full lap of the ring, starting at (and including) `start`.
fn ring_lap(lo: i32, hi: i32, start: Position) -> Vec<Position> {
    let mut lap = Vec::with_capacity((4 * (hi - lo)) as usize);
    let mut cell = start;
    loop {
        lap.push(cell);
        cell = ring_next(lo, hi, cell);
        if cell == start {
            break;
        }
    }
    lap
}

/// Bounds of the lane within `lanes` that contains `cell`.
fn lane_of(cell: Position, lanes: [(i32, i32); 2]) -> (i32, i32) {
    let (lo, hi) = lanes[0];
    if cell.x == lo || cell.x == hi || cell.y == lo || cell.y == hi {
        lanes[0]
    } else {
        lanes[1]
    }
}

fn build_track(player_id: PlayerId, track: usize) -> Vec<Position> {
    let entry = zones::entry_cells(player_id)[track - 1];
    let second = zones::second_square_gates(player_id).start[track - 1];
    let third = zones::third_square_gates(player_id).start[track - 1];

    let (lo, hi) = lane_of(entry, OUTER_LANES);
    let mut path = ring_lap(lo, hi, entry);

    let (lo, hi) = lane_of(second, MIDDLE_LANES);
    path.extend(ring_lap(lo, hi, second));

    let (lo, hi) = lane_of(third, INNER_LANES);
    path.extend(ring_lap(lo, hi, third));

    path.push(MOKSHA_POSITION);
    path
}

static TRACKS: Lazy<[[Vec<Position>; 2]; 4]> = Lazy::new(|| {
    std::array::from_fn(|p| std::array::from_fn(|t| build_track(p as PlayerId + 1, t + 1)))
});

/// The full ordered path for one player's track (1 or 2).
pub fn track_path(player_id: PlayerId, track: u8) -> &'static [Position] {
    let p = (player_id.clamp(1, 4) - 1) as usize;
    let t = (track.clamp(1, 2) - 1) as usize;
    &TRACKS[p][t]
}

/// Index of an on-board piece's cell along its track. None for pieces in
/// home (their position is not a path cell).
pub fn path_index(piece: &GamePiece) -> Option<usize> {
    track_path(piece.player_id, piece.track)
        .iter()
        .position(|&cell| cell == piece.position)
}

/// Cell reached by walking `steps` cells forward along the piece's track.
/// Landing exactly on the final cell is Moksha entry; running past it is
/// no move at all.
pub fn destination(piece: &GamePiece, steps: u32) -> Option<Position> {
    let path = track_path(piece.player_id, piece.track);
    let index = path_index(piece)?;
    let target = index.checked_add(steps as usize)?;
    if target >= path.len() {
        None
    } else {
        Some(path[target])
    }
}
