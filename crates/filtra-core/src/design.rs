//! Biquad coefficient design.
//!
//! Turns a [`FilterParams`] bundle into a normalized second-order
//! coefficient set, one closed-form formula per [`FilterType`]. The
//! formulas use the bilinear-transform prewarp `K = tan(pi * fc / fs)`;
//! the boost/cut types (Peak, shelves) branch on the gain sign so that
//! cutting by X dB is exactly the reciprocal response of boosting by X dB
//! at the same frequency and Q.
//!
//! The design is pure and total over clamped inputs: a fresh
//! [`Coefficients`] value is returned for every call, there is no shared
//! state and no failure path.

use crate::filter::FilterType;
use crate::math::db_to_linear;
use core::f64::consts::{PI, SQRT_2};
use libm::{exp, sqrt, tan};

/// Human-meaningful design parameters.
///
/// The designer assumes these invariants (enforce them with
/// [`FilterParams::clamped`] before designing):
///
/// - `sample_rate_hz > 0`
/// - `0 <= cutoff_hz <= sample_rate_hz / 2`
/// - `q >= 0.01` (the formulas divide by Q)
///
/// `gain_db` is unconstrained; its sign selects the boost or cut branch
/// for Peak and the shelves, and it is ignored by the other types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    /// Cutoff / center frequency in Hz
    pub cutoff_hz: f64,
    /// Sample rate in Hz
    pub sample_rate_hz: f64,
    /// Quality factor (resonance / bandwidth)
    pub q: f64,
    /// Gain in dB for the boost/cut types
    pub gain_db: f64,
}

impl FilterParams {
    /// Smallest Q the formulas are numerically sane for.
    pub const MIN_Q: f64 = 0.01;

    /// Nyquist frequency, half the sample rate.
    pub fn nyquist_hz(&self) -> f64 {
        self.sample_rate_hz / 2.0
    }

    /// Clamp the parameters into the designer's valid range.
    ///
    /// Sample rate is floored at 1 Hz, cutoff is clamped to
    /// `[0, Nyquist]`, and Q is floored at [`Self::MIN_Q`]. Gain passes
    /// through untouched.
    pub fn clamped(mut self) -> Self {
        self.sample_rate_hz = self.sample_rate_hz.max(1.0);
        self.cutoff_hz = self.cutoff_hz.clamp(0.0, self.nyquist_hz());
        self.q = self.q.max(Self::MIN_Q);
        self
    }
}

/// Normalized second-order filter coefficients.
///
/// Transfer function with implicit leading denominator coefficient 1:
///
/// ```text
///          a0 + a1*z^-1 + a2*z^-2
/// H(z) = --------------------------
///          1 + b1*z^-1 + b2*z^-2
/// ```
///
/// `a0, a1, a2` are the feed-forward taps, `b1, b2` the feedback taps.
/// For the one-pole variants `a1 = a2 = b2 = 0`; callers must not assume
/// every value describes a full second-order section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Feed-forward tap, z^0
    pub a0: f64,
    /// Feed-forward tap, z^-1
    pub a1: f64,
    /// Feed-forward tap, z^-2
    pub a2: f64,
    /// Feedback tap, z^-1
    pub b1: f64,
    /// Feedback tap, z^-2
    pub b2: f64,
}

impl Coefficients {
    /// Design coefficients for `filter` from `params`.
    ///
    /// `params` must satisfy the invariants documented on
    /// [`FilterParams`]; out-of-range values produce mathematically
    /// undefined results rather than an error.
    pub fn design(filter: FilterType, params: &FilterParams) -> Self {
        let fc = params.cutoff_hz;
        let fs = params.sample_rate_hz;
        let q = params.q;
        let gain_db = params.gain_db;

        // Linear gain magnitude, always >= 1; the sign picks the branch.
        let v = db_to_linear(gain_db.abs());
        let k = tan(PI * fc / fs);
        let k2 = k * k;

        let (a0, a1, a2, b1, b2);
        match filter {
            FilterType::OnePoleLowPass => {
                let pole = exp(-2.0 * PI * (fc / fs));
                a0 = 1.0 - pole;
                a1 = 0.0;
                a2 = 0.0;
                b1 = -pole;
                b2 = 0.0;
            }
            FilterType::OnePoleHighPass => {
                let pole = -exp(-2.0 * PI * (0.5 - fc / fs));
                a0 = 1.0 + pole;
                a1 = 0.0;
                a2 = 0.0;
                b1 = -pole;
                b2 = 0.0;
            }
            FilterType::LowPass => {
                let norm = 1.0 / (1.0 + k / q + k2);
                a0 = k2 * norm;
                a1 = 2.0 * a0;
                a2 = a0;
                b1 = 2.0 * (k2 - 1.0) * norm;
                b2 = (1.0 - k / q + k2) * norm;
            }
            FilterType::HighPass => {
                let norm = 1.0 / (1.0 + k / q + k2);
                a0 = norm;
                a1 = -2.0 * a0;
                a2 = a0;
                b1 = 2.0 * (k2 - 1.0) * norm;
                b2 = (1.0 - k / q + k2) * norm;
            }
            FilterType::BandPass => {
                let norm = 1.0 / (1.0 + k / q + k2);
                a0 = k / q * norm;
                a1 = 0.0;
                a2 = -a0;
                b1 = 2.0 * (k2 - 1.0) * norm;
                b2 = (1.0 - k / q + k2) * norm;
            }
            FilterType::Notch => {
                let norm = 1.0 / (1.0 + k / q + k2);
                a0 = (1.0 + k2) * norm;
                a1 = 2.0 * (k2 - 1.0) * norm;
                a2 = a0;
                b1 = a1;
                b2 = (1.0 - k / q + k2) * norm;
            }
            FilterType::Peak => {
                // Boost carries V in the numerator, cut moves it to the
                // denominator; this mirroring (not a sign flip) is what
                // makes cut the exact reciprocal of boost.
                if gain_db >= 0.0 {
                    let norm = 1.0 / (1.0 + k / q + k2);
                    a0 = (1.0 + v * k / q + k2) * norm;
                    a1 = 2.0 * (k2 - 1.0) * norm;
                    a2 = (1.0 - v * k / q + k2) * norm;
                    b1 = a1;
                    b2 = (1.0 - k / q + k2) * norm;
                } else {
                    let norm = 1.0 / (1.0 + v * k / q + k2);
                    a0 = (1.0 + k / q + k2) * norm;
                    a1 = 2.0 * (k2 - 1.0) * norm;
                    a2 = (1.0 - k / q + k2) * norm;
                    b1 = a1;
                    b2 = (1.0 - v * k / q + k2) * norm;
                }
            }
            FilterType::LowShelf => {
                let cross = sqrt(2.0 * v);
                if gain_db >= 0.0 {
                    let norm = 1.0 / (1.0 + SQRT_2 * k + k2);
                    a0 = (1.0 + cross * k + v * k2) * norm;
                    a1 = 2.0 * (v * k2 - 1.0) * norm;
                    a2 = (1.0 - cross * k + v * k2) * norm;
                    b1 = 2.0 * (k2 - 1.0) * norm;
                    b2 = (1.0 - SQRT_2 * k + k2) * norm;
                } else {
                    let norm = 1.0 / (1.0 + cross * k + v * k2);
                    a0 = (1.0 + SQRT_2 * k + k2) * norm;
                    a1 = 2.0 * (k2 - 1.0) * norm;
                    a2 = (1.0 - SQRT_2 * k + k2) * norm;
                    b1 = 2.0 * (v * k2 - 1.0) * norm;
                    b2 = (1.0 - cross * k + v * k2) * norm;
                }
            }
            FilterType::HighShelf => {
                let cross = sqrt(2.0 * v);
                if gain_db >= 0.0 {
                    let norm = 1.0 / (1.0 + SQRT_2 * k + k2);
                    a0 = (v + cross * k + k2) * norm;
                    a1 = 2.0 * (k2 - v) * norm;
                    a2 = (v - cross * k + k2) * norm;
                    b1 = 2.0 * (k2 - 1.0) * norm;
                    b2 = (1.0 - SQRT_2 * k + k2) * norm;
                } else {
                    let norm = 1.0 / (v + cross * k + k2);
                    a0 = (1.0 + SQRT_2 * k + k2) * norm;
                    a1 = 2.0 * (k2 - 1.0) * norm;
                    a2 = (1.0 - SQRT_2 * k + k2) * norm;
                    b1 = 2.0 * (k2 - v) * norm;
                    b2 = (v - cross * k + k2) * norm;
                }
            }
        }

        Self { a0, a1, a2, b1, b2 }
    }

    /// Whether every coefficient is finite (no NaN/Inf).
    pub fn is_finite(&self) -> bool {
        self.a0.is_finite()
            && self.a1.is_finite()
            && self.a2.is_finite()
            && self.b1.is_finite()
            && self.b2.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(cutoff_hz: f64, sample_rate_hz: f64, q: f64, gain_db: f64) -> FilterParams {
        FilterParams {
            cutoff_hz,
            sample_rate_hz,
            q,
            gain_db,
        }
    }

    #[test]
    fn butterworth_lowpass_reference() {
        let c = Coefficients::design(FilterType::LowPass, &params(1000.0, 44100.0, 0.707, 0.0));

        assert!((c.a0 - 0.0046039350).abs() < 1e-9, "a0 = {}", c.a0);
        assert!((c.a1 - 2.0 * c.a0).abs() < 1e-15);
        assert!((c.a2 - c.a0).abs() < 1e-15);
        assert!((c.b1 - (-1.7990716166)).abs() < 1e-9, "b1 = {}", c.b1);
        assert!((c.b2 - 0.8174873567).abs() < 1e-9, "b2 = {}", c.b2);
    }

    #[test]
    fn highpass_shares_denominator_with_lowpass() {
        let p = params(2500.0, 48000.0, 1.2, 0.0);
        let lp = Coefficients::design(FilterType::LowPass, &p);
        let hp = Coefficients::design(FilterType::HighPass, &p);

        assert_eq!(lp.b1, hp.b1);
        assert_eq!(lp.b2, hp.b2);
        assert!((hp.a1 + 2.0 * hp.a0).abs() < 1e-15);
    }

    #[test]
    fn bandpass_is_antisymmetric() {
        let c = Coefficients::design(FilterType::BandPass, &params(700.0, 44100.0, 2.0, 0.0));
        assert_eq!(c.a1, 0.0);
        assert_eq!(c.a2, -c.a0);
    }

    #[test]
    fn notch_numerator_matches_feedback_tap() {
        let c = Coefficients::design(FilterType::Notch, &params(60.0, 48000.0, 10.0, 0.0));
        assert_eq!(c.a1, c.b1);
        assert_eq!(c.a2, c.a0);
    }

    #[test]
    fn one_pole_lowpass_is_degenerate() {
        let c = Coefficients::design(FilterType::OnePoleLowPass, &params(500.0, 44100.0, 0.707, 0.0));
        let pole = exp(-2.0 * PI * 500.0 / 44100.0);

        assert_eq!(c.a1, 0.0);
        assert_eq!(c.a2, 0.0);
        assert_eq!(c.b2, 0.0);
        assert!((c.a0 - (1.0 - pole)).abs() < 1e-15);
        assert!((c.b1 - (-pole)).abs() < 1e-15);
    }

    #[test]
    fn one_pole_highpass_is_degenerate() {
        let c = Coefficients::design(FilterType::OnePoleHighPass, &params(500.0, 44100.0, 0.707, 0.0));
        let pole = -exp(-2.0 * PI * (0.5 - 500.0 / 44100.0));

        assert_eq!(c.a1, 0.0);
        assert_eq!(c.a2, 0.0);
        assert_eq!(c.b2, 0.0);
        assert!((c.a0 - (1.0 + pole)).abs() < 1e-15);
        assert!((c.b1 - (-pole)).abs() < 1e-15);
    }

    #[test]
    fn peak_at_zero_gain_is_identity() {
        // V = 1 collapses both branches to an allpass-flat section.
        let c = Coefficients::design(FilterType::Peak, &params(1000.0, 48000.0, 1.0, 0.0));
        assert!((c.a0 - 1.0).abs() < 1e-12);
        assert!((c.a1 - c.b1).abs() < 1e-15);
        assert!((c.a2 - c.b2).abs() < 1e-12);
    }

    #[test]
    fn peak_cut_is_not_a_sign_flip_of_boost() {
        let boost = Coefficients::design(FilterType::Peak, &params(1000.0, 48000.0, 1.0, 6.0));
        let cut = Coefficients::design(FilterType::Peak, &params(1000.0, 48000.0, 1.0, -6.0));

        // The cut numerator equals the boost denominator (scaled): a0 of
        // one is the reciprocal of the other, which a coefficient negation
        // would not produce.
        assert!((boost.a0 * cut.a0 - 1.0).abs() < 1e-12);
        assert!((boost.b2 / boost.a0 - cut.b2 / cut.a0).abs() > 1e-3);
        assert!(boost.is_finite() && cut.is_finite());
    }

    #[test]
    fn all_types_finite_across_parameter_grid() {
        let rates = [8000.0, 44100.0, 96000.0];
        let gains = [-18.0, -0.1, 0.0, 0.1, 18.0];
        for &filter in &FilterType::ALL {
            for &fs in &rates {
                for frac in [0.001, 0.1, 0.25, 0.49] {
                    for &g in &gains {
                        let p = params(fs * frac, fs, 0.707, g);
                        let c = Coefficients::design(filter, &p);
                        assert!(
                            c.is_finite(),
                            "{:?} fs={} fc={} gain={} produced {:?}",
                            filter,
                            fs,
                            p.cutoff_hz,
                            g,
                            c
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn clamping_enforces_invariants() {
        let p = FilterParams {
            cutoff_hz: 90000.0,
            sample_rate_hz: 44100.0,
            q: 0.0,
            gain_db: -6.0,
        }
        .clamped();

        assert_eq!(p.cutoff_hz, 22050.0);
        assert_eq!(p.q, FilterParams::MIN_Q);
        assert_eq!(p.gain_db, -6.0);

        let p = FilterParams {
            cutoff_hz: -5.0,
            sample_rate_hz: 0.0,
            q: 0.707,
            gain_db: 0.0,
        }
        .clamped();

        assert_eq!(p.sample_rate_hz, 1.0);
        assert_eq!(p.cutoff_hz, 0.0);
    }
}
