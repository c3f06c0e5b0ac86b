//! Action dispatch and the per-turn state machine. Every action maps to
//! one handler; actions that are not permitted in the current state leave
//! the snapshot unchanged (beyond recording a validation reason for UI
//! feedback where one applies).

use crate::actions::Action;
use crate::dice;
use crate::errors::RuleViolation;
use crate::moves;
use crate::player;
use crate::types::{DiceType, GameMode, GamePhase, Move, MoveValidation, PlayerId, Position};

use super::GameState;

/// Apply one action to a snapshot, producing the next one. Total over the
/// action set; the input snapshot is never mutated.
pub fn reduce(state: &GameState, action: Action) -> GameState {
    let mut next = state.clone();
    match action {
        Action::StartGame { game_mode, dice_type } => next.start_game(game_mode, dice_type),
        Action::RollDice { player_id, dice_opt } => next.roll_dice(player_id, dice_opt),
        Action::SelectPiece { piece_id } => next.select_piece(&piece_id),
        Action::MovePiece { mv } => next.move_piece(mv),
        Action::EndTurn => next.end_turn(),
        Action::ResetGame => next = GameState::new(),
        Action::ClearSelection => next.selected_piece = None,
        Action::SetDiceType { dice_type } => next.set_dice_type(dice_type),
        Action::ValidateMove { piece_id, target } => next.validate_move(&piece_id, target),
        Action::ExecuteMoveWithCapture { piece_id, target } => {
            next.execute_move_with_capture(&piece_id, target)
        }
        Action::HighlightValidMoves { piece_id } => next.highlight_valid_moves(&piece_id),
        Action::ClearHighlights => next.highlighted_positions.clear(),
        Action::CheckGameOver => next.check_game_over(),
        Action::AutoEndTurn => next.auto_end_turn(),
        Action::ClearTurnSkipped => next.turn_skipped = false,
    }
    next
}

impl GameState {
    fn start_game(&mut self, game_mode: GameMode, dice_type: DiceType) {
        *self = GameState::new();
        self.players = GameState::create_players(game_mode);
        self.game_mode = game_mode;
        self.dice_type = dice_type;
        self.game_phase = GamePhase::Playing;
        log::info!(
            "🎮 Starting {:?} game with {:?} dice",
            game_mode,
            dice_type
        );
    }

    fn set_dice_type(&mut self, dice_type: DiceType) {
        // the dice type is fixed once play begins
        if self.game_phase == GamePhase::Setup {
            self.dice_type = dice_type;
        }
    }

    fn roll_dice(&mut self, player_id: PlayerId, dice_opt: Option<(u8, u8)>) {
        if !self.can_roll_dice() {
            return;
        }
        let Some(current) = self.current_player() else {
            return;
        };
        if current.id != player_id {
            return;
        }

        let roll = dice::roll_dice(self.dice_type, dice_opt);
        log::info!(
            "🎲 Player {} rolled {}{}",
            player_id,
            roll.value,
            if roll.is_bonus { " (bonus)" } else { "" }
        );
        self.last_roll = Some(roll);
        self.dice_rolls.push(roll);

        // a fresh bonus always permits rolling again, before any
        // move-availability check
        if roll.is_bonus {
            return;
        }

        let total = self.total_dice_value();
        let current = &self.players[self.current_player_index];
        if !moves::has_valid_moves(current, total, &self.players) {
            log::info!(
                "⏭️  Player {} has no legal move at {} - turn skipped",
                player_id,
                total
            );
            self.skip_turn();
        }
    }

    fn select_piece(&mut self, piece_id: &str) {
        if self.game_phase != GamePhase::Playing || self.game_over {
            self.last_move_validation =
                Some(MoveValidation::rejected(RuleViolation::GameNotInProgress));
            return;
        }
        if self.dice_rolls.is_empty() {
            self.last_move_validation =
                Some(MoveValidation::rejected(RuleViolation::NoRollPending));
            return;
        }
        let total = self.total_dice_value();
        let verdict = {
            let Some(current) = self.current_player() else {
                return;
            };
            let Some(piece) = self.find_piece(piece_id) else {
                return;
            };
            if piece.player_id != current.id {
                Err(RuleViolation::not_players_turn(piece.player_id))
            } else if !player::can_move_piece(piece, total, current) {
                Err(RuleViolation::piece_not_movable(piece, total))
            } else {
                Ok(())
            }
        };
        match verdict {
            Ok(()) => {
                self.selected_piece = Some(piece_id.to_string());
                self.last_move_validation = Some(MoveValidation::ok());
            }
            Err(reason) => {
                self.last_move_validation = Some(MoveValidation::rejected(reason));
            }
        }
    }

    fn validate_move(&mut self, piece_id: &str, target: Position) {
        if self.game_phase != GamePhase::Playing {
            self.last_move_validation =
                Some(MoveValidation::rejected(RuleViolation::GameNotInProgress));
            return;
        }
        if self.dice_rolls.is_empty() {
            self.last_move_validation =
                Some(MoveValidation::rejected(RuleViolation::NoRollPending));
            return;
        }
        let total = self.total_dice_value();
        let Some(piece) = self.find_piece(piece_id) else {
            return;
        };
        let validation = moves::validate_move(piece, target, total, &self.players);
        self.last_move_validation = Some(validation);
    }

    fn execute_move_with_capture(&mut self, piece_id: &str, target: Position) {
        if self.game_phase != GamePhase::Playing || self.game_over {
            self.last_move_validation =
                Some(MoveValidation::rejected(RuleViolation::GameNotInProgress));
            return;
        }
        if self.dice_rolls.is_empty() {
            self.last_move_validation =
                Some(MoveValidation::rejected(RuleViolation::NoRollPending));
            return;
        }
        let total = self.total_dice_value();
        let mv = {
            let Some(current) = self.current_player() else {
                return;
            };
            let Some(piece) = self.find_piece(piece_id) else {
                return;
            };
            if piece.player_id != current.id {
                self.last_move_validation = Some(MoveValidation::rejected(
                    RuleViolation::not_players_turn(piece.player_id),
                ));
                return;
            }
            let validation = moves::validate_move(piece, target, total, &self.players);
            if !validation.is_valid {
                self.last_move_validation = Some(validation);
                return;
            }
            moves::execute_move(piece, target, &self.players)
        };
        self.commit_move(mv);
    }

    /// `MovePiece` carries a previously constructed move. Only the piece
    /// identity and destination are trusted; the move is rebuilt against
    /// the live snapshot.
    fn move_piece(&mut self, mv: Move) {
        self.execute_move_with_capture(&mv.piece.id.clone(), mv.to);
    }

    fn commit_move(&mut self, mv: Move) {
        let mover_id = mv.piece.player_id;
        // whether the mover is leaving home right now, per the live piece
        let entering = self
            .find_piece(&mv.piece.id)
            .map(|piece| piece.is_in_home)
            .unwrap_or(false);

        for captured in &mv.captured_pieces {
            log::info!(
                "⚔️  {} captured at ({}, {}) and sent home",
                captured.id,
                mv.to.x,
                mv.to.y
            );
            if let Some(owner) = self.players.iter_mut().find(|p| p.id == captured.player_id) {
                if let Some(slot) = owner.pieces.iter_mut().find(|pc| pc.id == captured.id) {
                    *slot = captured.clone();
                }
                let won = player::has_player_won(owner);
                owner.has_won = won;
            }
        }

        if let Some(owner) = self.players.iter_mut().find(|p| p.id == mover_id) {
            if let Some(slot) = owner.pieces.iter_mut().find(|pc| pc.id == mv.piece.id) {
                *slot = mv.piece.clone();
            }
            if entering {
                owner.has_entered = true;
            }
            let won = player::has_player_won(owner);
            owner.has_won = won;
            if won {
                log::info!("🏆 Player {} has brought all pieces to Moksha", owner.id);
            }
        }
        if mv.piece.is_in_moksha {
            log::info!("🕉️  {} reached Moksha", mv.piece.id);
        }

        self.last_move_validation = Some(MoveValidation::ok());
        self.selected_piece = None;
        self.highlighted_positions.clear();

        self.check_game_over();
        if self.game_over {
            self.dice_rolls.clear();
            return;
        }

        if self.has_bonus_pending() {
            // bonus chain: same player rolls again on a fresh cycle
            self.dice_rolls.clear();
        } else {
            self.advance_turn();
        }
    }

    fn end_turn(&mut self) {
        if !self.can_end_turn() {
            return;
        }
        log::info!(
            "🔚 Player {} ends the turn",
            self.current_player().map(|p| p.id).unwrap_or_default()
        );
        self.advance_turn();
    }

    fn auto_end_turn(&mut self) {
        if self.game_phase != GamePhase::Playing || self.game_over {
            return;
        }
        self.skip_turn();
    }

    fn skip_turn(&mut self) {
        self.advance_turn();
        self.turn_skipped = true;
    }

    /// Hand the turn to the next active player and reset the per-turn
    /// transients.
    fn advance_turn(&mut self) {
        self.dice_rolls.clear();
        self.selected_piece = None;
        self.highlighted_positions.clear();

        let count = self.players.len();
        if count == 0 {
            return;
        }
        let mut next_index = self.current_player_index;
        for step in 1..=count {
            let candidate = (self.current_player_index + step) % count;
            if player::is_player_active(&self.players[candidate]) {
                next_index = candidate;
                break;
            }
        }
        self.current_player_index = next_index;
        let playing = self.game_phase == GamePhase::Playing;
        for (index, p) in self.players.iter_mut().enumerate() {
            p.current_turn = playing && index == next_index;
        }
    }

    fn check_game_over(&mut self) {
        if self.game_phase != GamePhase::Playing || !self.is_game_over() {
            return;
        }
        self.game_over = true;
        self.game_phase = GamePhase::Finished;
        for p in &mut self.players {
            p.current_turn = false;
        }
        let winners: Vec<PlayerId> = self.winners().iter().map(|p| p.id).collect();
        log::info!("🏁 Game over - winners: {:?}", winners);
    }

    fn highlight_valid_moves(&mut self, piece_id: &str) {
        if self.game_phase != GamePhase::Playing {
            return;
        }
        self.highlighted_positions = self.valid_moves_for_piece(piece_id);
    }
}
