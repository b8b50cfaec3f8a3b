//! Seeded puzzle scrambling
//!
//! Draws spinner angles from a seeded PCG stream, resolves every spinner in
//! list order, and re-rolls while the layout happens to be solved already.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::checker::SolutionChecker;
use super::puzzle::Puzzle;
use super::resolver::OverlapResolver;
use crate::consts::FULL_TURN;
use crate::error::{Result, SpinnerError};
use crate::normalize_degrees;
use crate::settings::PuzzleSettings;

/// Seed for the scramble stream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Produces unsolved starting layouts
#[derive(Debug, Clone)]
pub struct Scrambler {
    rng: Pcg32,
    resolver: OverlapResolver,
    checker: SolutionChecker,
    max_attempts: u32,
}

impl Scrambler {
    pub fn new(
        rng_state: RngState,
        resolver: OverlapResolver,
        checker: SolutionChecker,
        max_attempts: u32,
    ) -> Self {
        Self {
            rng: rng_state.to_rng(),
            resolver,
            checker,
            max_attempts,
        }
    }

    pub fn from_settings(settings: &PuzzleSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self::new(
            RngState::new(settings.seed),
            OverlapResolver::new(settings.overlap_tolerance)?,
            SolutionChecker::new(settings.solution_tolerance)?,
            settings.scramble_attempts,
        ))
    }

    /// Random angles for `count` spinners, resolved and not yet solved
    pub fn scramble(&mut self, count: usize) -> Result<Vec<f32>> {
        if count == 0 {
            return Err(SpinnerError::EmptyAngles);
        }

        for attempt in 1..=self.max_attempts {
            let mut angles: Vec<f32> = (0..count)
                .map(|_| self.rng.random_range(0.0..FULL_TURN))
                .collect();
            self.resolver.resolve(&mut angles, None)?;
            for angle in angles.iter_mut() {
                *angle = normalize_degrees(*angle);
            }

            if !self.checker.is_solved(&angles)? {
                log::info!("Scrambled {} spinners on attempt {}", count, attempt);
                return Ok(angles);
            }
            log::debug!("Scramble attempt {} came out solved, re-rolling", attempt);
        }

        Err(SpinnerError::ScrambleExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Fresh puzzle sharing this scrambler's tolerances
    pub fn puzzle(&mut self, count: usize) -> Result<Puzzle> {
        let angles = self.scramble(count)?;
        Puzzle::new(angles, self.resolver, self.checker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::puzzle::PuzzlePhase;
    use proptest::prelude::*;

    fn scrambler(seed: u64, overlap: f32, solution: f32, attempts: u32) -> Scrambler {
        Scrambler::new(
            RngState::new(seed),
            OverlapResolver::new(overlap).unwrap(),
            SolutionChecker::new(solution).unwrap(),
            attempts,
        )
    }

    #[test]
    fn test_scramble_is_unsolved_and_wrapped() {
        let mut s = scrambler(12345, 10.0, 10.0, 100);
        let angles = s.scramble(5).unwrap();
        assert_eq!(angles.len(), 5);
        assert!(angles.iter().all(|a| (0.0..FULL_TURN).contains(a)));
        assert!(!SolutionChecker::new(10.0).unwrap().is_solved(&angles).unwrap());
    }

    #[test]
    fn test_successive_scrambles_differ() {
        let mut s = scrambler(7, 10.0, 10.0, 100);
        let first = s.scramble(4).unwrap();
        let second = s.scramble(4).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_always_solved_exhausts() {
        // A full-turn solution tolerance accepts every layout
        let mut s = scrambler(1, 0.0, FULL_TURN, 3);
        assert!(matches!(
            s.scramble(3),
            Err(SpinnerError::ScrambleExhausted { attempts: 3 })
        ));
    }

    #[test]
    fn test_zero_spinners_rejected() {
        let mut s = scrambler(1, 5.0, 5.0, 10);
        assert!(matches!(s.scramble(0), Err(SpinnerError::EmptyAngles)));
    }

    #[test]
    fn test_puzzle_starts_scrambled() {
        let settings = PuzzleSettings::default();
        let mut s = Scrambler::from_settings(&settings).unwrap();
        let p = s.puzzle(settings.spinner_count).unwrap();
        assert_eq!(p.phase(), PuzzlePhase::Scrambled);
        assert_eq!(p.moves(), 0);
    }

    proptest! {
        #[test]
        fn prop_same_seed_same_layout(seed in any::<u64>(), count in 2usize..8) {
            let a = scrambler(seed, 10.0, 10.0, 100).scramble(count).unwrap();
            let b = scrambler(seed, 10.0, 10.0, 100).scramble(count).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
