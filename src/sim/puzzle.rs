//! Puzzle state and moves
//!
//! Holds the spinner angles for one puzzle and applies player moves: rotate,
//! wrap into [0, 360), push the moved spinner clear of the others, then check
//! for a solve.

use serde::{Deserialize, Serialize};

use super::checker::SolutionChecker;
use super::resolver::OverlapResolver;
use crate::error::{Result, SpinnerError, check_angles};
use crate::{angular_distance, normalize_degrees};
use crate::settings::PuzzleSettings;

/// Whether the puzzle still needs solving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzlePhase {
    Scrambled,
    Solved,
}

/// Things the host may want to react to after a move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PuzzleEvent {
    /// Spinner was pushed out of another spinner's zone
    Nudged { index: usize, from: f32, to: f32 },
    /// All spinners just came into alignment
    Solved { moves: u32 },
}

/// A single Star Spinner puzzle
#[derive(Debug, Clone)]
pub struct Puzzle {
    angles: Vec<f32>,
    resolver: OverlapResolver,
    checker: SolutionChecker,
    phase: PuzzlePhase,
    moves: u32,
    events: Vec<PuzzleEvent>,
}

impl Puzzle {
    /// Build a puzzle from starting angles, wrapped into [0, 360)
    pub fn new(
        angles: Vec<f32>,
        resolver: OverlapResolver,
        checker: SolutionChecker,
    ) -> Result<Self> {
        check_angles(&angles)?;
        let angles: Vec<f32> = angles.into_iter().map(normalize_degrees).collect();
        let phase = if checker.is_solved(&angles)? {
            PuzzlePhase::Solved
        } else {
            PuzzlePhase::Scrambled
        };

        Ok(Self {
            angles,
            resolver,
            checker,
            phase,
            moves: 0,
            events: Vec::new(),
        })
    }

    pub fn from_settings(settings: &PuzzleSettings, angles: Vec<f32>) -> Result<Self> {
        Self::new(
            angles,
            OverlapResolver::new(settings.overlap_tolerance)?,
            SolutionChecker::new(settings.solution_tolerance)?,
        )
    }

    pub fn angles(&self) -> &[f32] {
        &self.angles
    }

    pub fn phase(&self) -> PuzzlePhase {
        self.phase
    }

    pub fn is_solved(&self) -> bool {
        self.phase == PuzzlePhase::Solved
    }

    /// Player moves applied so far
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Narrowest arc currently holding every star
    pub fn spread(&self) -> Result<f32> {
        self.checker.best_window_span(&self.angles)
    }

    /// Rotate one spinner by `delta` degrees
    pub fn rotate(&mut self, index: usize, delta: f32) -> Result<PuzzlePhase> {
        let current = *self
            .angles
            .get(index)
            .ok_or(SpinnerError::SubjectOutOfRange {
                index,
                len: self.angles.len(),
            })?;
        self.set_angle(index, current + delta)
    }

    /// Place one spinner at `angle`
    ///
    /// Nudging shares the resolver's seam gap: a spinner near 0° and a
    /// single other spinner near 360° are left touching.
    pub fn set_angle(&mut self, index: usize, angle: f32) -> Result<PuzzlePhase> {
        if index >= self.angles.len() {
            return Err(SpinnerError::SubjectOutOfRange {
                index,
                len: self.angles.len(),
            });
        }
        if !angle.is_finite() {
            return Err(SpinnerError::InvalidAngle(angle));
        }

        let placed = normalize_degrees(angle);
        self.angles[index] = placed;

        let delta = self.resolver.resolve_delta(&self.angles, index)?;
        if delta != 0.0 {
            let resolved = normalize_degrees(placed + delta);
            self.angles[index] = resolved;
            log::debug!(
                "Spinner {} nudged {:.2} degrees clear",
                index,
                angular_distance(placed, resolved)
            );
            self.events.push(PuzzleEvent::Nudged {
                index,
                from: placed,
                to: resolved,
            });
        }

        self.moves += 1;
        self.update_phase()?;
        Ok(self.phase)
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<PuzzleEvent> {
        std::mem::take(&mut self.events)
    }

    fn update_phase(&mut self) -> Result<()> {
        let solved = self.checker.is_solved(&self.angles)?;
        match (self.phase, solved) {
            (PuzzlePhase::Scrambled, true) => {
                log::info!("Puzzle solved in {} moves", self.moves);
                self.phase = PuzzlePhase::Solved;
                self.events.push(PuzzleEvent::Solved { moves: self.moves });
            }
            (PuzzlePhase::Solved, false) => {
                self.phase = PuzzlePhase::Scrambled;
            }
            _ => {}
        }
        Ok(())
    }
}
