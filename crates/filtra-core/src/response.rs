//! Frequency-magnitude response evaluation.
//!
//! Samples the magnitude of a designed [`Coefficients`] set across a
//! linear or logarithmic frequency sweep. The magnitude at each angular
//! frequency `w` comes from the closed-form substitution
//! `phi = sin^2(w/2)`:
//!
//! ```text
//! num = (a0+a1+a2)^2 - 4*(a0*a1 + 4*a0*a2 + a1*a2)*phi + 16*a0*a2*phi^2
//! den = (1+b1+b2)^2  - 4*(b1 + 4*b2 + b1*b2)*phi   + 16*b2*phi^2
//! dB  = (10/ln 10) * (ln num - ln den)
//! ```
//!
//! which is the algebraic expansion of `20*log10(|H(e^jw)|)` for a
//! second-order section - no per-sample complex arithmetic. The shape is
//! generic over all filter types; only the coefficient values differ.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::design::Coefficients;
use core::f64::consts::{LN_10, PI};
use libm::{log, sin};

/// Canonical number of sweep points.
pub const DEFAULT_POINTS: usize = 512;

/// Reported floor when the magnitude underflows to silence.
///
/// A zero numerator (a notch landing exactly on a sample) would otherwise
/// report negative infinity; the floor is a display convention, not an
/// error.
pub const DB_FLOOR: f64 = -200.0;

/// Natural log of the logarithmic sweep's span.
///
/// The log sweep covers `0.001 * Nyquist` to `Nyquist`, a ratio of 1000.
pub const LN_SWEEP_RATIO: f64 = 3.0 * LN_10;

/// Frequency-axis sampling law for the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotScale {
    /// Evenly spaced from DC to Nyquist; `x` is the frequency in Hz.
    Linear,
    /// Exponentially spaced from `0.001 * Nyquist` to Nyquist; `x` is a
    /// normalized log-position in `[0, 0.5]` (map back to Hz with
    /// [`crate::log_position_to_hz`]).
    Logarithmic,
}

/// One sample of the magnitude curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponsePoint {
    /// Frequency in Hz (linear scale) or normalized log-position
    /// (logarithmic scale)
    pub x: f64,
    /// Magnitude in dB, floored at [`DB_FLOOR`]
    pub magnitude_db: f64,
}

/// Sampled magnitude curve with the extrema observed over the sweep.
#[derive(Debug, Clone)]
pub struct FrequencyResponse {
    /// Sweep samples in increasing frequency order
    pub points: Vec<ResponsePoint>,
    /// Smallest magnitude observed
    pub min_db: f64,
    /// Largest magnitude observed
    pub max_db: f64,
}

impl FrequencyResponse {
    /// Evaluate the magnitude response of `coeffs` over a `len`-point
    /// sweep.
    ///
    /// Deterministic and side-effect free; samples are produced in
    /// increasing index order and the first sample seeds both extrema.
    ///
    /// # Panics
    ///
    /// Panics if `len < 2` (the sweep laws divide by `len - 1`).
    pub fn evaluate(
        coeffs: &Coefficients,
        scale: PlotScale,
        sample_rate_hz: f64,
        len: usize,
    ) -> Self {
        assert!(len >= 2, "a sweep needs at least two points");

        let mut points = Vec::with_capacity(len);
        let mut min_db = 0.0;
        let mut max_db = 0.0;

        for i in 0..len {
            let t = i as f64 / (len - 1) as f64;
            let (w, x) = match scale {
                PlotScale::Linear => (t * PI, t * sample_rate_hz / 2.0),
                PlotScale::Logarithmic => (libm::exp(LN_SWEEP_RATIO * t) * 0.001 * PI, t / 2.0),
            };

            let magnitude_db = magnitude_db_at(coeffs, w);
            points.push(ResponsePoint { x, magnitude_db });

            if i == 0 {
                min_db = magnitude_db;
                max_db = magnitude_db;
            } else if magnitude_db < min_db {
                min_db = magnitude_db;
            } else if magnitude_db > max_db {
                max_db = magnitude_db;
            }
        }

        Self {
            points,
            min_db,
            max_db,
        }
    }
}

/// Magnitude in dB at angular frequency `w` (radians/sample, `0..=pi`).
///
/// Shared by every filter type; floored at [`DB_FLOOR`] when the ratio
/// underflows to silence.
pub fn magnitude_db_at(coeffs: &Coefficients, w: f64) -> f64 {
    let Coefficients { a0, a1, a2, b1, b2 } = *coeffs;

    let s = sin(w / 2.0);
    let phi = s * s;

    let num_dc = a0 + a1 + a2;
    let den_dc = 1.0 + b1 + b2;
    let num =
        num_dc * num_dc - 4.0 * (a0 * a1 + 4.0 * a0 * a2 + a1 * a2) * phi + 16.0 * a0 * a2 * phi * phi;
    let den = den_dc * den_dc - 4.0 * (b1 + 4.0 * b2 + b1 * b2) * phi + 16.0 * b2 * phi * phi;

    let db = (log(num) - log(den)) * (10.0 / LN_10);
    // The floor also swallows the NaN from a numerator that rounds below
    // zero at a perfect null.
    if db >= DB_FLOOR { db } else { DB_FLOOR }
}
