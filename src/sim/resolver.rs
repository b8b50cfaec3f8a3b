//! Overlap resolution between spinners
//!
//! Each spinner blocks `[angle - tolerance, angle + tolerance]`. When the
//! subject spinner lands inside the merged zone of the others it is pushed
//! just past the nearer edge of that zone.

use super::interval::{Interval, duplicate_for_wraparound, merge_intervals};
use crate::error::{Result, SpinnerError, check_angles, check_tolerance};

/// Keeps spinners from sitting on top of each other
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapResolver {
    tolerance: f32,
}

impl OverlapResolver {
    pub fn new(tolerance: f32) -> Result<Self> {
        Ok(Self {
            tolerance: check_tolerance(tolerance)?,
        })
    }

    pub fn tolerance(&self) -> f32 {
        self.tolerance
    }

    /// Resolved angle for a subject given the other spinners' angles
    ///
    /// Only the first merged zone the subject collides with is considered.
    /// The push is not re-checked against other zones.
    ///
    /// The last merged zone gets no full-turn copy, so a subject just below
    /// 360° and a lone zone just above 0° (or the reverse) never collide.
    pub fn resolve_angle(&self, subject: f32, others: &[f32]) -> f32 {
        if others.is_empty() {
            return subject;
        }

        let occupied = others
            .iter()
            .map(|&angle| Interval::around(angle, self.tolerance))
            .collect();
        let mut zones = merge_intervals(occupied, self.tolerance);
        duplicate_for_wraparound(&mut zones);

        let own = Interval::around(subject, self.tolerance);
        let Some(zone) = zones.iter().find(|zone| own.overlaps(zone, 0.0)) else {
            return subject;
        };

        // Ties at the center go up
        let target = if subject < zone.center() {
            zone.low - self.tolerance
        } else {
            zone.high + self.tolerance
        };
        log::debug!(
            "Spinner at {:.2} overlaps [{:.2}, {:.2}], pushed to {:.2}",
            subject,
            zone.low,
            zone.high,
            target
        );
        target
    }

    /// Rotation to add to the subject at `index` to clear the other spinners
    pub fn resolve_delta(&self, angles: &[f32], index: usize) -> Result<f32> {
        check_angles(angles)?;
        let subject = *angles.get(index).ok_or(SpinnerError::SubjectOutOfRange {
            index,
            len: angles.len(),
        })?;

        let others: Vec<f32> = angles
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, &angle)| angle)
            .collect();

        Ok(self.resolve_angle(subject, &others) - subject)
    }

    /// Resolve one subject, or every spinner in list order when `subject` is `None`
    ///
    /// Without a subject the pass is sequential: each spinner sees the angles
    /// earlier spinners were just moved to.
    pub fn resolve(&self, angles: &mut [f32], subject: Option<usize>) -> Result<()> {
        check_angles(angles)?;

        match subject {
            Some(index) => {
                let delta = self.resolve_delta(angles, index)?;
                angles[index] += delta;
            }
            None => {
                for index in 0..angles.len() {
                    let delta = self.resolve_delta(angles, index)?;
                    angles[index] += delta;
                }
            }
        }
        Ok(())
    }
}
