//! Mathematical helpers for filter design.
//!
//! Allocation-free, `no_std`-suitable conversions used by the coefficient
//! designer. All transcendental math goes through `libm`.

use libm::exp;

/// Convert decibels to linear gain.
///
/// # Arguments
/// * `db` - Value in decibels
///
/// # Returns
/// Linear gain value (e.g., 0 dB → 1.0, +20 dB → 10.0)
///
/// # Example
/// ```rust
/// use filtra_core::db_to_linear;
///
/// assert!((db_to_linear(0.0) - 1.0).abs() < 1e-12);
/// assert!((db_to_linear(20.0) - 10.0).abs() < 1e-9);
/// ```
#[inline]
pub fn db_to_linear(db: f64) -> f64 {
    // 10^(dB/20) = e^(dB * ln(10)/20)
    const FACTOR: f64 = core::f64::consts::LN_10 / 20.0;
    exp(db * FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unity_at_zero_db() {
        assert!((db_to_linear(0.0) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn doubles_every_six_db() {
        let ratio = db_to_linear(6.0205999132796239) / db_to_linear(0.0);
        assert!((ratio - 2.0).abs() < 1e-12, "6.02 dB should double, got {ratio}");
    }

    #[test]
    fn negative_db_attenuates() {
        assert!(db_to_linear(-20.0) < 0.11);
        assert!(db_to_linear(-20.0) > 0.09);
    }
}
