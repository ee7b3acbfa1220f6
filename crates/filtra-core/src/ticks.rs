//! Axis-label helpers for logarithmic sweeps.
//!
//! On the logarithmic scale the evaluator reports normalized log-positions
//! in `[0, 0.5]` rather than frequencies; this module carries the inverse
//! mapping a display layer needs to label the axis in Hz, plus the
//! precision tiers for the labels themselves.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

use crate::response::LN_SWEEP_RATIO;
use libm::exp;

/// Map a normalized log-position (a [`crate::ResponsePoint::x`] from a
/// logarithmic sweep) back to its frequency in Hz.
///
/// Inverse of the sweep law: `hz = e^(ln(1000) * x * 2) * 0.001 *
/// sample_rate / 2`, so `x = 0` is `0.001 * Nyquist` and `x = 0.5` is
/// Nyquist.
pub fn log_position_to_hz(x: f64, sample_rate_hz: f64) -> f64 {
    exp(LN_SWEEP_RATIO * x * 2.0) * 0.001 * sample_rate_hz * 0.5
}

/// Format a frequency for an axis tick label.
///
/// Sub-hertz values get three decimals, single-digit values two, and
/// everything else one.
pub fn format_tick_hz(hz: f64) -> String {
    if hz < 1.0 {
        format!("{hz:.3}")
    } else if hz < 10.0 {
        format!("{hz:.2}")
    } else {
        format!("{hz:.1}")
    }
}
