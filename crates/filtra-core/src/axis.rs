//! Display-bounds policy for magnitude charts.
//!
//! Each filter archetype has a natural dB window: the pass/reject types
//! live in `[-100, 0]`, the boost/cut types around `[-10, 10]`, and the
//! one-pole variants in a fixed `[-40, 0]`. The observed extrema from the
//! sweep extend the window when the curve escapes it.

use crate::filter::FilterType;

/// Selected vertical (dB) bounds for rendering a response curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    /// Lower bound in dB
    pub min_db: f64,
    /// Upper bound in dB
    pub max_db: f64,
}

impl AxisRange {
    /// Select display bounds for `filter` given the sweep's observed
    /// extrema.
    pub fn for_filter(filter: FilterType, min_db: f64, max_db: f64) -> Self {
        match filter {
            FilterType::LowPass | FilterType::HighPass | FilterType::BandPass | FilterType::Notch => {
                Self {
                    min_db: -100.0,
                    max_db: max_db.max(0.0),
                }
            }
            FilterType::Peak | FilterType::LowShelf | FilterType::HighShelf => Self {
                min_db: min_db.min(-10.0),
                max_db: max_db.max(10.0),
            },
            FilterType::OnePoleLowPass | FilterType::OnePoleHighPass => Self {
                min_db: -40.0,
                max_db: 0.0,
            },
        }
    }

    /// Height of the window in dB.
    pub fn span_db(&self) -> f64 {
        self.max_db - self.min_db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_types_extend_only_upward() {
        let r = AxisRange::for_filter(FilterType::LowPass, -180.0, -0.5);
        assert_eq!(r.min_db, -100.0);
        assert_eq!(r.max_db, 0.0);

        // A resonant peak above 0 dB pushes the top up
        let r = AxisRange::for_filter(FilterType::HighPass, -90.0, 12.3);
        assert_eq!(r.min_db, -100.0);
        assert_eq!(r.max_db, 12.3);
    }

    #[test]
    fn boost_cut_types_extend_both_ways() {
        let r = AxisRange::for_filter(FilterType::Peak, -3.0, 4.0);
        assert_eq!(r.min_db, -10.0);
        assert_eq!(r.max_db, 10.0);

        let r = AxisRange::for_filter(FilterType::LowShelf, -24.0, 24.0);
        assert_eq!(r.min_db, -24.0);
        assert_eq!(r.max_db, 24.0);

        let r = AxisRange::for_filter(FilterType::HighShelf, -15.0, 2.0);
        assert_eq!(r.min_db, -15.0);
        assert_eq!(r.max_db, 10.0);
    }

    #[test]
    fn one_pole_window_is_fixed() {
        let r = AxisRange::for_filter(FilterType::OnePoleLowPass, -300.0, 50.0);
        assert_eq!(r.min_db, -40.0);
        assert_eq!(r.max_db, 0.0);
        assert_eq!(r.span_db(), 40.0);
    }
}
