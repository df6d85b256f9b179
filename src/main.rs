use std::env;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{random, SeedableRng};

use chess_game_lib::board::{to_string, Square};
use chess_game_lib::{new_game, Game, Snapshot};

const DEFAULT_PLIES: usize = 12;

struct DemoConfig {
    plies: usize,
    undo: usize,
    seed: u64,
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Err(_) => default,
        Ok(raw) => match raw.parse() {
            Ok(v) => v,
            Err(_) => {
                log::warn!("Ignoring invalid {}={:?}", name, raw);
                default
            }
        }
    }
}

impl DemoConfig {
    fn from_env() -> Self {
        DemoConfig {
            plies: env_or("CHESS_DEMO_PLIES", DEFAULT_PLIES),
            undo: env_or("CHESS_DEMO_UNDO", 0),
            seed: env_or("CHESS_DEMO_SEED", random()),
        }
    }
}

fn draw_board(game: &Game) {
    let s = to_string(game.board());
    for c in s.chars() {
        match c {
            '\n' => println!("|"),
            x => print!("|{}", x)
        }
    }
    println!("|");
}

fn pick_random_move(game: &Game, rng: &mut StdRng) -> Option<(Square, Square)> {
    let movable: Vec<Square> = game.board().occupied()
        .filter(|(sq, p)| p.color == game.side_to_move() && !game.legal_destinations(*sq).is_empty())
        .map(|(sq, _)| sq)
        .collect();
    let from = *movable.choose(rng)?;
    let mut destinations: Vec<Square> = game.legal_destinations(from).into_iter().collect();
    // HashSet order is not stable across runs
    destinations.sort();
    let to = *destinations.choose(rng)?;
    Some((from, to))
}

fn main() {
    let logger_env = env_logger::Env::default().filter_or("LOG_LEVEL", "INFO");
    env_logger::Builder::from_env(logger_env).format_timestamp_millis().init();

    let config = DemoConfig::from_env();
    log::info!("Playing {} random plies, seed {}", config.plies, config.seed);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut game = new_game();

    for _ in 0..config.plies {
        let Some((from, to)) = pick_random_move(&game, &mut rng) else {
            log::info!("{} has no legal move", game.side_to_move());
            break;
        };
        match game.apply_move(from, to) {
            Ok(record) => log::info!("{}", record.notation),
            Err(e) => log::error!("Generated move was refused: {}", e),
        }
    }

    for _ in 0..config.undo {
        match game.undo_last() {
            Some(record) => log::info!("Undo {}", record.notation),
            None => break,
        }
    }

    draw_board(&game);
    match Snapshot::from(&game).to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Cannot serialize snapshot: {}", e),
    }
}
