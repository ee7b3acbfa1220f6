//! Filter archetypes and their parameter capabilities.
//!
//! [`FilterType`] is the closed set of filter shapes the designer knows how
//! to build. The type determines three things: which coefficient formula
//! applies ([`crate::Coefficients::design`]), which display bounds policy
//! applies ([`crate::AxisRange::for_filter`]), and which of the Q / gain
//! parameters are meaningful ([`FilterType::uses_q`],
//! [`FilterType::uses_gain`]) - the last one is what a control surface uses
//! to enable or disable its input fields.

/// The supported filter archetypes.
///
/// Seven are true biquads (two poles, two zeros). The two one-pole variants
/// are degenerate: their designed [`crate::Coefficients`] have
/// `a1 = a2 = b2 = 0` by convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterType {
    /// One-pole lowpass, 6 dB/oct rolloff
    OnePoleLowPass,
    /// One-pole highpass, 6 dB/oct rolloff
    OnePoleHighPass,
    /// Second-order lowpass
    LowPass,
    /// Second-order highpass
    HighPass,
    /// Bandpass with peak gain set by Q
    BandPass,
    /// Band-reject (notch)
    Notch,
    /// Peaking EQ (boost or cut around a center frequency)
    Peak,
    /// Low shelf (flat boost/cut below the corner)
    LowShelf,
    /// High shelf (flat boost/cut above the corner)
    HighShelf,
}

impl FilterType {
    /// All filter types, in display order.
    pub const ALL: [FilterType; 9] = [
        FilterType::OnePoleLowPass,
        FilterType::OnePoleHighPass,
        FilterType::LowPass,
        FilterType::HighPass,
        FilterType::BandPass,
        FilterType::Notch,
        FilterType::Peak,
        FilterType::LowShelf,
        FilterType::HighShelf,
    ];

    /// Long human-readable name (e.g., "One-pole lowpass").
    pub fn long_name(self) -> &'static str {
        match self {
            FilterType::OnePoleLowPass => "One-pole lowpass",
            FilterType::OnePoleHighPass => "One-pole highpass",
            FilterType::LowPass => "Lowpass",
            FilterType::HighPass => "Highpass",
            FilterType::BandPass => "Bandpass",
            FilterType::Notch => "Notch",
            FilterType::Peak => "Peak",
            FilterType::LowShelf => "Low shelf",
            FilterType::HighShelf => "High shelf",
        }
    }

    /// Short name for compact display (e.g., "LP1", "PK").
    pub fn short_name(self) -> &'static str {
        match self {
            FilterType::OnePoleLowPass => "LP1",
            FilterType::OnePoleHighPass => "HP1",
            FilterType::LowPass => "LP",
            FilterType::HighPass => "HP",
            FilterType::BandPass => "BP",
            FilterType::Notch => "NO",
            FilterType::Peak => "PK",
            FilterType::LowShelf => "LS",
            FilterType::HighShelf => "HS",
        }
    }

    /// One-line description of the filter's shape.
    pub fn description(self) -> &'static str {
        match self {
            FilterType::OnePoleLowPass => "Gentle 6 dB/oct rolloff above cutoff",
            FilterType::OnePoleHighPass => "Gentle 6 dB/oct rolloff below cutoff",
            FilterType::LowPass => "12 dB/oct rolloff above cutoff, resonance set by Q",
            FilterType::HighPass => "12 dB/oct rolloff below cutoff, resonance set by Q",
            FilterType::BandPass => "Passes a band around the center frequency",
            FilterType::Notch => "Rejects a narrow band around the center frequency",
            FilterType::Peak => "Boosts or cuts around a center frequency",
            FilterType::LowShelf => "Flat boost or cut below the corner frequency",
            FilterType::HighShelf => "Flat boost or cut above the corner frequency",
        }
    }

    /// Whether the Q parameter shapes this filter.
    ///
    /// Shelves use a fixed sqrt(2) cross term instead of Q, and the one-pole
    /// variants have no resonance at all.
    pub fn uses_q(self) -> bool {
        matches!(
            self,
            FilterType::LowPass
                | FilterType::HighPass
                | FilterType::BandPass
                | FilterType::Notch
                | FilterType::Peak
        )
    }

    /// Whether the gain parameter shapes this filter.
    ///
    /// Only the boost/cut types respond to gain; for the rest the passband
    /// sits at 0 dB by construction.
    pub fn uses_gain(self) -> bool {
        matches!(
            self,
            FilterType::Peak | FilterType::LowShelf | FilterType::HighShelf
        )
    }

    /// Whether this is one of the degenerate one-pole variants.
    pub fn is_one_pole(self) -> bool {
        matches!(
            self,
            FilterType::OnePoleLowPass | FilterType::OnePoleHighPass
        )
    }
}
