//! Solution checking
//!
//! A puzzle is solved when every spinner fits inside one arc no wider than the
//! tolerance. Angles are sorted, all but the last get a full-turn copy, and a
//! window of `n` consecutive values slides across the resulting `2n - 1`
//! sequence.

use crate::consts::FULL_TURN;
use crate::error::{Result, check_angles, check_tolerance};

/// Decides whether spinners are aligned
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolutionChecker {
    tolerance: f32,
}

impl SolutionChecker {
    pub fn new(tolerance: f32) -> Result<Self> {
        Ok(Self {
            tolerance: check_tolerance(tolerance)?,
        })
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// True when all angles fit in an arc of at most `tolerance` degrees
    pub fn is_solved(&self, angles: &[f32]) -> Result<bool> {
        check_angles(angles)?;

        if angles.len() == 1 {
            log::warn!("Checking a puzzle with a single spinner; it is always solved");
            return Ok(true);
        }

        let n = angles.len();
        let sequence = wrapped_sequence(angles);
        Ok((0..n).any(|i| sequence[i + n - 1] - sequence[i] <= self.tolerance))
    }

    /// Narrowest arc that holds every angle
    pub fn best_window_span(&self, angles: &[f32]) -> Result<f32> {
        check_angles(angles)?;

        let n = angles.len();
        let sequence = wrapped_sequence(angles);
        Ok((0..n)
            .map(|i| sequence[i + n - 1] - sequence[i])
            .fold(f32::INFINITY, f32::min))
    }
}

/// Sorted angles followed by full-turn copies of all but the last
fn wrapped_sequence(angles: &[f32]) -> Vec<f32> {
    let mut sorted = angles.to_vec();
    sorted.sort_by(f32::total_cmp);

    let n = sorted.len();
    let mut sequence = Vec::with_capacity(2 * n - 1);
    sequence.extend_from_slice(&sorted);
    sequence.extend(sorted[..n - 1].iter().map(|a| a + FULL_TURN));
    sequence
}
