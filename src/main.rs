//! Star Spinner entry point
//!
//! Scrambles a puzzle from settings (optional JSON path argument) and walks
//! every spinner toward the first one, printing what the core decides.

use star_spinner::sim::{PuzzleEvent, Scrambler};
use star_spinner::{PuzzleSettings, Result};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = match std::env::args().nth(1) {
        Some(path) => PuzzleSettings::load(path)?,
        None => PuzzleSettings::default(),
    };
    log::info!("Star Spinner starting with seed {}", settings.seed);

    let mut scrambler = Scrambler::from_settings(&settings)?;
    let mut puzzle = scrambler.puzzle(settings.spinner_count)?;
    println!("Scrambled: {:?} (spread {:.1})", puzzle.angles(), puzzle.spread()?);

    let target = puzzle.angles()[0];
    for index in 1..puzzle.angles().len() {
        let phase = puzzle.set_angle(index, target)?;
        for event in puzzle.drain_events() {
            match event {
                PuzzleEvent::Nudged { index, from, to } => {
                    println!("  spinner {} nudged {:.1} -> {:.1}", index, from, to)
                }
                PuzzleEvent::Solved { moves } => println!("  solved after {} moves", moves),
            }
        }
        println!("Move {}: {:?} {:?}", puzzle.moves(), puzzle.angles(), phase);
    }

    println!("Final spread {:.1}, solved: {}", puzzle.spread()?, puzzle.is_solved());
    Ok(())
}
