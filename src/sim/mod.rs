//! Puzzle logic module
//!
//! Everything here is pure and deterministic:
//! - Angles in, angles or verdicts out
//! - Seeded RNG only
//! - Resolution follows list order
//! - No rendering, input or storage dependencies

pub mod checker;
pub mod interval;
pub mod puzzle;
pub mod resolver;
pub mod scramble;

pub use checker::SolutionChecker;
pub use interval::{Interval, duplicate_for_wraparound, merge_intervals};
pub use puzzle::{Puzzle, PuzzleEvent, PuzzlePhase};
pub use resolver::OverlapResolver;
pub use scramble::{RngState, Scrambler};
