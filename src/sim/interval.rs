//! Angular intervals on the spinner circle
//!
//! An interval is a `(low, high)` pair in degrees. Bounds may arrive in either
//! order, so every test normalizes with min/max instead of trusting the order.
//!
//! Wraparound is handled by duplication, not modular arithmetic: after merging,
//! every interval except the last gets a copy shifted by a full turn, and a
//! plain linear scan then sees collisions across the 0°/360° seam.

use crate::consts::FULL_TURN;

/// An angular range in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub low: f32,
    pub high: f32,
}

impl Interval {
    pub fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    /// Zone occupied by a spinner at `angle`: `[angle - tolerance, angle + tolerance]`
    pub fn around(angle: f32, tolerance: f32) -> Self {
        Self::new(angle - tolerance, angle + tolerance)
    }

    /// Smaller bound, whatever order the interval was built in
    #[inline]
    pub fn min(&self) -> f32 {
        self.low.min(self.high)
    }

    /// Larger bound
    #[inline]
    pub fn max(&self) -> f32 {
        self.low.max(self.high)
    }

    /// Midpoint
    #[inline]
    pub fn center(&self) -> f32 {
        (self.low + self.high) / 2.0
    }

    /// Same interval one full turn further round
    pub fn shifted(&self, offset: f32) -> Self {
        Self::new(self.low + offset, self.high + offset)
    }

    /// Overlap test with symmetric slack on both intervals
    ///
    /// Both intervals are normalized and widened by `tolerance`; they overlap
    /// when either widened low bound lies inside the other widened span.
    /// Touching counts as overlapping.
    pub fn overlaps(&self, other: &Interval, tolerance: f32) -> bool {
        let (a_lo, a_hi) = (self.min() - tolerance, self.max() + tolerance);
        let (b_lo, b_hi) = (other.min() - tolerance, other.max() + tolerance);

        (a_lo >= b_lo && a_lo <= b_hi) || (b_lo >= a_lo && b_lo <= a_hi)
    }
}

/// Sort by low bound and merge intervals that overlap within `tolerance`
pub fn merge_intervals(mut intervals: Vec<Interval>, tolerance: f32) -> Vec<Interval> {
    intervals.sort_by(|a, b| a.min().total_cmp(&b.min()));

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        let interval = Interval::new(interval.min(), interval.max());
        match merged.last_mut() {
            Some(last) if last.overlaps(&interval, tolerance) => {
                log::debug!(
                    "Merging [{:.2}, {:.2}] into zone [{:.2}, {:.2}]",
                    interval.low,
                    interval.high,
                    last.low,
                    last.high
                );
                last.high = last.high.max(interval.high);
            }
            _ => merged.push(interval),
        }
    }
    merged
}

/// Append a full-turn copy of every interval except the last
pub fn duplicate_for_wraparound(intervals: &mut Vec<Interval>) {
    let count = intervals.len().saturating_sub(1);
    for i in 0..count {
        let copy = intervals[i].shifted(FULL_TURN);
        intervals.push(copy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlaps_any_bound_order() {
        let a = Interval::new(10.0, 20.0);
        let reversed = Interval::new(25.0, 15.0);
        assert!(a.overlaps(&reversed, 0.0));
        assert!(reversed.overlaps(&a, 0.0));
    }

    #[test]
    fn test_overlaps_touching_is_inclusive() {
        let a = Interval::new(10.0, 20.0);
        let b = Interval::new(20.0, 30.0);
        assert!(a.overlaps(&b, 0.0));
        assert!(!a.overlaps(&Interval::new(20.5, 30.0), 0.0));
    }

    #[test]
    fn test_overlaps_with_slack() {
        let a = Interval::new(20.0, 30.0);
        let b = Interval::new(35.0, 45.0);
        assert!(!a.overlaps(&b, 0.0));
        assert!(a.overlaps(&b, 2.5));
        assert!(!a.overlaps(&b, 2.4));
    }

    #[test]
    fn test_overlaps_containment_and_points() {
        let outer = Interval::new(0.0, 100.0);
        let inner = Interval::new(40.0, 60.0);
        assert!(outer.overlaps(&inner, 0.0));
        assert!(inner.overlaps(&outer, 0.0));

        let point = Interval::new(50.0, 50.0);
        assert!(point.overlaps(&inner, 0.0));
        assert!(point.overlaps(&Interval::new(50.0, 50.0), 0.0));
        assert!(!point.overlaps(&Interval::new(51.0, 51.0), 0.0));
    }

    #[test]
    fn test_merge_chains_overlaps() {
        let merged = merge_intervals(
            vec![
                Interval::around(50.0, 5.0),
                Interval::around(25.0, 5.0),
                Interval::around(40.0, 5.0),
            ],
            5.0,
        );
        assert_eq!(merged, vec![Interval::new(20.0, 55.0)]);
    }

    #[test]
    fn test_merge_keeps_distant_intervals() {
        let merged = merge_intervals(
            vec![Interval::around(16.0, 5.0), Interval::around(38.0, 5.0)],
            5.0,
        );
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merge_does_not_shrink_on_contained_interval() {
        let merged = merge_intervals(
            vec![Interval::new(0.0, 100.0), Interval::new(10.0, 20.0)],
            0.0,
        );
        assert_eq!(merged, vec![Interval::new(0.0, 100.0)]);
    }

    #[test]
    fn test_duplicate_skips_last() {
        let mut intervals = vec![
            Interval::new(10.0, 20.0),
            Interval::new(100.0, 120.0),
            Interval::new(300.0, 310.0),
        ];
        duplicate_for_wraparound(&mut intervals);
        assert_eq!(intervals.len(), 5);
        assert_eq!(intervals[3], Interval::new(370.0, 380.0));
        assert_eq!(intervals[4], Interval::new(460.0, 480.0));

        let mut empty: Vec<Interval> = Vec::new();
        duplicate_for_wraparound(&mut empty);
        assert!(empty.is_empty());
    }
}
