use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use moksha::actions::Action;
use moksha::board::MOKSHA_POSITION;
use moksha::state::{reduce, GameState};
use moksha::types::{DiceType, GameMode, Position};
use moksha::{dice, moves};

/// Random-play simulation harness over the public action surface.
#[derive(Parser, Debug)]
#[command(name = "simulate", about = "Moksha game simulation")]
struct Args {
    /// Number of games to play
    #[arg(short = 'n', long, default_value_t = 1)]
    num_games: u32,

    /// Number of players (2-4)
    #[arg(short, long, default_value_t = 4)]
    players: u8,

    /// Roll two four-sided dice instead of one six-sided die
    #[arg(long)]
    indian: bool,

    /// RNG seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Turn cap per game
    #[arg(long, default_value_t = 2000)]
    max_turns: u32,

    /// Dump each game's final state as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let game_mode = match args.players {
        2 => GameMode::TwoPlayer,
        3 => GameMode::ThreePlayer,
        _ => GameMode::FourPlayer,
    };
    let dice_type = if args.indian {
        DiceType::Indian
    } else {
        DiceType::Standard
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("🎮 Moksha Game Simulation");
    println!("=========================");
    println!("Configuration:");
    println!("  - Players: {}", game_mode.player_count());
    println!("  - Dice: {:?}", dice_type);
    println!("  - Number of games: {}", args.num_games);
    println!("  - Turn cap: {}", args.max_turns);

    let mut wins = vec![0u32; game_mode.player_count()];
    let mut total_turns = 0u64;
    let mut completed_games = 0u32;

    for game_num in 0..args.num_games {
        if args.num_games > 1 {
            println!("\n🎯 Game {} of {}", game_num + 1, args.num_games);
        }
        match simulate_single_game(game_mode, dice_type, args.max_turns, args.json, &mut rng) {
            Some((winner, turns)) => {
                wins[(winner - 1) as usize] += 1;
                total_turns += turns as u64;
                completed_games += 1;
                println!("✅ Player {} won in {} turns", winner, turns);
            }
            None => {
                println!("⏰ Game did not complete within {} turns", args.max_turns);
            }
        }
    }

    if args.num_games > 1 {
        println!("\n📊 Tournament Results:");
        println!("====================");
        for (index, &win_count) in wins.iter().enumerate() {
            let win_rate = if completed_games > 0 {
                (win_count as f64 / completed_games as f64) * 100.0
            } else {
                0.0
            };
            println!(
                "Player {}: {} wins ({:.1}%)",
                index + 1,
                win_count,
                win_rate
            );
        }
        println!("Completed games: {}/{}", completed_games, args.num_games);
        if completed_games > 0 {
            println!(
                "Average turns per game: {:.1}",
                total_turns as f64 / completed_games as f64
            );
        }
    }
}

fn simulate_single_game(
    game_mode: GameMode,
    dice_type: DiceType,
    max_turns: u32,
    json: bool,
    rng: &mut StdRng,
) -> Option<(u8, u32)> {
    let mut state = reduce(
        &GameState::new(),
        Action::StartGame { game_mode, dice_type },
    );

    let mut turn_count = 0;
    while !state.game_over && turn_count < max_turns {
        let Some(player_id) = state.current_player().map(|p| p.id) else {
            break;
        };

        // roll out the full bonus chain before moving
        loop {
            let faces = dice::draw(dice_type, rng);
            state = reduce(
                &state,
                Action::RollDice { player_id, dice_opt: Some(faces) },
            );
            if !state.has_bonus_pending() {
                break;
            }
        }

        if state.turn_skipped {
            state = reduce(&state, Action::ClearTurnSkipped);
        } else if !state.game_over {
            match choose_move(&state) {
                Some((piece_id, target)) => {
                    state = reduce(
                        &state,
                        Action::ExecuteMoveWithCapture { piece_id, target },
                    );
                }
                None => {
                    state = reduce(&state, Action::AutoEndTurn);
                }
            }
        }
        turn_count += 1;
    }

    if json {
        match serde_json::to_string_pretty(&state) {
            Ok(dump) => println!("{}", dump),
            Err(err) => eprintln!("failed to serialize final state: {}", err),
        }
    }

    let winner = state.winners().first().map(|p| p.id)?;
    if state.game_over {
        Some((winner, turn_count))
    } else {
        None
    }
}

/// Pick the most interesting legal move: Moksha entries, then captures,
/// then the first destination on offer.
fn choose_move(state: &GameState) -> Option<(String, Position)> {
    let options = state.valid_moves_for_current_player();

    for piece_moves in &options {
        if piece_moves.moves.contains(&MOKSHA_POSITION) {
            return Some((piece_moves.piece.id.clone(), MOKSHA_POSITION));
        }
    }

    for piece_moves in &options {
        for &target in &piece_moves.moves {
            let mv = moves::execute_move(&piece_moves.piece, target, &state.players);
            if mv.is_capture {
                return Some((piece_moves.piece.id.clone(), target));
            }
        }
    }

    options
        .first()
        .and_then(|pm| pm.moves.first().map(|&target| (pm.piece.id.clone(), target)))
}
