//! Star Spinner - puzzle core for rotating star spinners
//!
//! Core modules:
//! - `sim`: Pure puzzle logic (overlap resolution, solution checking, scrambling)
//! - `settings`: Tolerances and puzzle configuration
//! - `error`: Error type shared by every fallible operation
//!
//! Angles are `f32` degrees. They are semantically circular but callers are
//! not required to keep them inside [0, 360).

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{Result, SpinnerError};
pub use settings::PuzzleSettings;

/// Puzzle configuration constants
pub mod consts {
    /// One full turn in degrees
    pub const FULL_TURN: f32 = 360.0;

    /// Default minimum gap between two spinners' occupied zones
    pub const DEFAULT_OVERLAP_TOLERANCE: f32 = 10.0;
    /// Default maximum spread of all spinners for a solve
    pub const DEFAULT_SOLUTION_TOLERANCE: f32 = 10.0;

    /// Product bounds on spinners per puzzle (the algorithms don't need them)
    pub const MIN_SPINNERS: usize = 2;
    pub const MAX_SPINNERS: usize = 7;
    pub const DEFAULT_SPINNERS: usize = 4;

    /// Scramble re-rolls before giving up on an unsolved layout
    pub const DEFAULT_SCRAMBLE_ATTEMPTS: u32 = 100;
}

/// Normalize an angle to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(consts::FULL_TURN);
    // rem_euclid can round up to exactly FULL_TURN for tiny negative inputs
    if wrapped >= consts::FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

/// Shortest distance between two angles on the circle, in [0, 180]
#[inline]
pub fn angular_distance(a: f32, b: f32) -> f32 {
    let diff = normalize_degrees(a - b);
    diff.min(consts::FULL_TURN - diff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(-720.0), 0.0);
        let tiny = normalize_degrees(-1e-6);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_angular_distance_across_seam() {
        assert_eq!(angular_distance(358.0, 2.0), 4.0);
        assert_eq!(angular_distance(2.0, 358.0), 4.0);
        assert_eq!(angular_distance(10.0, 20.0), 10.0);
        assert_eq!(angular_distance(0.0, 180.0), 180.0);
        assert_eq!(angular_distance(-90.0, 450.0), 180.0);
    }
}
