//! Candidate end effector orientations searched by the continuing solver

use std::f64::consts::PI;
use std::ops::Deref;

/// Number of samples in the default full circle sweep.
pub const DEFAULT_SWEEP_SAMPLES: usize = 256;

/// Ordered list of orientations (radians). The order matters: when two candidates are
/// equally close to the previous joints, the one from the earlier orientation wins.
/// Values are used as given and not wrapped, so a sweep over [0, 2PI] contains both ends.
#[derive(Debug, Clone, PartialEq)]
pub struct OrientationSweep {
    orientations: Vec<f64>,
}

impl OrientationSweep {
    /// `count` evenly spaced values from `from` to `to`, both ends included.
    /// A single sample is `from`, zero samples give an empty sweep.
    pub fn linspace(from: f64, to: f64, count: usize) -> Self {
        let orientations = match count {
            0 => Vec::new(),
            1 => vec![from],
            _ => {
                let step = (to - from) / (count - 1) as f64;
                (0..count)
                    .map(|i| if i == count - 1 { to } else { from + step * i as f64 })
                    .collect()
            }
        };
        OrientationSweep { orientations }
    }

    /// `count` samples over the whole circle [0, 2PI].
    pub fn full_circle(count: usize) -> Self {
        Self::linspace(0.0, 2.0 * PI, count)
    }

    /// The end effector orientation is prescribed.
    pub fn fixed(psi: f64) -> Self {
        OrientationSweep { orientations: vec![psi] }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.orientations
    }
}

impl Default for OrientationSweep {
    fn default() -> Self {
        Self::full_circle(DEFAULT_SWEEP_SAMPLES)
    }
}

impl From<Vec<f64>> for OrientationSweep {
    fn from(orientations: Vec<f64>) -> Self {
        OrientationSweep { orientations }
    }
}

impl Deref for OrientationSweep {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.orientations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linspace_includes_both_ends() {
        let sweep = OrientationSweep::linspace(0.0, 1.0, 5);
        assert_eq!(sweep.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(OrientationSweep::linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(OrientationSweep::linspace(0.3, 1.0, 1).as_slice(), &[0.3]);
    }

    #[test]
    fn test_default_full_circle() {
        let sweep = OrientationSweep::default();
        assert_eq!(sweep.len(), DEFAULT_SWEEP_SAMPLES);
        assert_eq!(sweep[0], 0.0);
        assert_eq!(sweep[DEFAULT_SWEEP_SAMPLES - 1], 2.0 * PI);
        assert!(sweep.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_fixed() {
        assert_eq!(OrientationSweep::fixed(-1.5).as_slice(), &[-1.5]);
    }
}
