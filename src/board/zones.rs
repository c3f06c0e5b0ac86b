//! Static configuration tables for the board: zone rectangles, per-player
//! home slots and entry cells, square-transition waypoints, and the fixed
//! game rule constants. Never mutated at runtime.

use crate::types::{PlayerId, Position};

pub const BOARD_SIZE: i32 = 32;

pub const PLAYER_COLORS: [&str; 4] = ["#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4"];
pub const PLAYER_NAMES: [&str; 4] = ["Player 1", "Player 2", "Player 3", "Player 4"];

/// Axis-aligned cell rectangle; membership is half-open on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

/// Inclusive coordinate band of one of the three nested squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub min: i32,
    pub max: i32,
}

impl Band {
    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.min && p.x <= self.max && p.y >= self.min && p.y <= self.max
    }
}

pub const OUTER_BAND: Band = Band { min: 3, max: 30 };
pub const MIDDLE_BAND: Band = Band { min: 7, max: 26 };
pub const INNER_BAND: Band = Band { min: 11, max: 22 };

/// Home-area slots per player, indexed by `player_id - 1`. Each piece owns
/// one slot for the whole game.
pub const PLAYER_STARTING_POSITIONS: [[Position; 4]; 4] = [
    [
        Position::new(16, 1),
        Position::new(17, 1),
        Position::new(16, 2),
        Position::new(17, 2),
    ],
    [
        Position::new(1, 16),
        Position::new(1, 17),
        Position::new(2, 16),
        Position::new(2, 17),
    ],
    [
        Position::new(16, 31),
        Position::new(17, 31),
        Position::new(16, 32),
        Position::new(17, 32),
    ],
    [
        Position::new(31, 16),
        Position::new(31, 17),
        Position::new(32, 16),
        Position::new(32, 17),
    ],
];

/// Entry cells per player, one per track.
pub const PLAYER_ENTRY_POSITIONS: [[Position; 2]; 4] = [
    [Position::new(15, 3), Position::new(15, 4)],
    [Position::new(3, 17), Position::new(4, 17)],
    [Position::new(17, 30), Position::new(17, 29)],
    [Position::new(29, 16), Position::new(30, 16)],
];

/// Safe zones in the outer square: four 2x2 corners and four 8-cell
/// mid-edge blocks (which also contain the entry cells).
pub const SAFE_ZONES: [Rect; 8] = [
    Rect::new(3, 3, 2, 2),
    Rect::new(3, 29, 2, 2),
    Rect::new(29, 29, 2, 2),
    Rect::new(29, 3, 2, 2),
    Rect::new(15, 3, 4, 2),
    Rect::new(3, 15, 2, 4),
    Rect::new(15, 29, 4, 2),
    Rect::new(29, 15, 2, 4),
];

/// Regular (unprotected) spots in the outer square.
pub const REGULAR_SPOTS: [Rect; 8] = [
    Rect::new(5, 3, 10, 2),
    Rect::new(3, 5, 2, 10),
    Rect::new(3, 19, 2, 10),
    Rect::new(5, 29, 10, 2),
    Rect::new(19, 29, 10, 2),
    Rect::new(29, 19, 2, 10),
    Rect::new(29, 5, 2, 10),
    Rect::new(19, 3, 10, 2),
];

/// Cells of the middle square path (both lanes).
pub const MIDDLE_SQUARE_PATHS: [Rect; 15] = [
    Rect::new(7, 7, 2, 2),
    Rect::new(9, 7, 8, 2),
    Rect::new(17, 7, 2, 2),
    Rect::new(19, 7, 6, 2),
    Rect::new(25, 7, 2, 2),
    Rect::new(25, 9, 2, 8),
    Rect::new(25, 17, 2, 2),
    Rect::new(25, 19, 2, 8),
    Rect::new(25, 25, 2, 2),
    Rect::new(17, 25, 8, 2),
    Rect::new(7, 25, 2, 2),
    Rect::new(9, 25, 8, 2),
    Rect::new(7, 19, 2, 8),
    Rect::new(7, 17, 2, 2),
    Rect::new(7, 9, 2, 8),
];

/// Cells of the inner square path (both lanes).
pub const INNER_SQUARE_PATHS: [Rect; 14] = [
    Rect::new(11, 11, 2, 2),
    Rect::new(13, 11, 6, 2),
    Rect::new(19, 11, 2, 2),
    Rect::new(21, 11, 2, 2),
    Rect::new(21, 13, 2, 6),
    Rect::new(21, 19, 2, 2),
    Rect::new(21, 21, 2, 2),
    Rect::new(19, 21, 2, 2),
    Rect::new(13, 21, 6, 2),
    Rect::new(11, 21, 2, 2),
    Rect::new(11, 19, 2, 2),
    Rect::new(11, 13, 2, 6),
    Rect::new(11, 17, 2, 2),
    Rect::new(21, 17, 2, 2),
];

/// Where a player's track enters a ring (`start`) and where its lap around
/// that ring ends (`end`), one cell per track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareGates {
    pub start: [Position; 2],
    pub end: [Position; 2],
}

/// Middle-square transition waypoints, indexed by `player_id - 1`.
pub const SECOND_SQUARE_POSITIONS: [SquareGates; 4] = [
    SquareGates {
        start: [Position::new(16, 7), Position::new(16, 8)],
        end: [Position::new(17, 7), Position::new(17, 8)],
    },
    SquareGates {
        start: [Position::new(7, 17), Position::new(8, 17)],
        end: [Position::new(7, 16), Position::new(8, 16)],
    },
    SquareGates {
        start: [Position::new(17, 26), Position::new(17, 25)],
        end: [Position::new(16, 26), Position::new(16, 25)],
    },
    SquareGates {
        start: [Position::new(26, 16), Position::new(25, 16)],
        end: [Position::new(26, 17), Position::new(25, 17)],
    },
];

/// Inner-square transition waypoints, indexed by `player_id - 1`.
pub const THIRD_SQUARE_POSITIONS: [SquareGates; 4] = [
    SquareGates {
        start: [Position::new(16, 11), Position::new(16, 12)],
        end: [Position::new(17, 11), Position::new(17, 12)],
    },
    SquareGates {
        start: [Position::new(11, 17), Position::new(12, 17)],
        end: [Position::new(11, 16), Position::new(12, 16)],
    },
    SquareGates {
        start: [Position::new(17, 21), Position::new(17, 22)],
        end: [Position::new(16, 21), Position::new(16, 22)],
    },
    SquareGates {
        start: [Position::new(21, 16), Position::new(22, 16)],
        end: [Position::new(21, 17), Position::new(22, 17)],
    },
];

/// The shared central goal region.
pub const MOKSHA_AREA: Rect = Rect::new(15, 15, 4, 4);

/// The single cell a piece must land on, exactly, to enter Moksha.
pub const MOKSHA_POSITION: Position = Position::new(16, 16);

#[derive(Debug, Clone, Copy)]
pub struct GameRules {
    pub pieces_per_player: usize,
    /// Dice values that let a piece leave home once the player has entered.
    pub entry_values: &'static [u32],
    /// A player's very first entry requires exactly this value.
    pub first_entry_value: u32,
    pub exact_moksha_entry: bool,
}

pub const GAME_RULES: GameRules = GameRules {
    pieces_per_player: 4,
    entry_values: &[1, 5],
    first_entry_value: 1,
    exact_moksha_entry: true,
};

pub fn home_slots(player_id: PlayerId) -> &'static [Position; 4] {
    &PLAYER_STARTING_POSITIONS[(player_id - 1) as usize]
}

pub fn entry_cells(player_id: PlayerId) -> &'static [Position; 2] {
    &PLAYER_ENTRY_POSITIONS[(player_id - 1) as usize]
}

pub fn second_square_gates(player_id: PlayerId) -> &'static SquareGates {
    &SECOND_SQUARE_POSITIONS[(player_id - 1) as usize]
}

pub fn third_square_gates(player_id: PlayerId) -> &'static SquareGates {
    &THIRD_SQUARE_POSITIONS[(player_id - 1) as usize]
}
