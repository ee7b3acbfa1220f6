//! String parsing for filter types and plot scales.

use filtra_core::{FilterType, PlotScale};
use thiserror::Error;

/// Errors produced when turning command-line strings into core types.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The filter type string matched none of the known archetypes.
    #[error("unknown filter type '{0}' (run `filtra types` for the list)")]
    UnknownFilterType(String),

    /// The scale string was neither linear nor logarithmic.
    #[error("unknown plot scale '{0}' (expected 'linear' or 'log')")]
    UnknownScale(String),
}

/// Parse a filter type name, accepting long names, short names, and
/// common separators (`one-pole-lowpass`, `onepole_lp`, `LP1`, ...).
pub fn parse_filter_type(s: &str) -> Result<FilterType, ParseError> {
    let normalized: String = s
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .collect::<String>()
        .to_ascii_lowercase();

    match normalized.as_str() {
        "onepolelowpass" | "onepolelp" | "lp1" => Ok(FilterType::OnePoleLowPass),
        "onepolehighpass" | "onepolehp" | "hp1" => Ok(FilterType::OnePoleHighPass),
        "lowpass" | "lp" => Ok(FilterType::LowPass),
        "highpass" | "hp" => Ok(FilterType::HighPass),
        "bandpass" | "bp" => Ok(FilterType::BandPass),
        "notch" | "no" => Ok(FilterType::Notch),
        "peak" | "peaking" | "pk" => Ok(FilterType::Peak),
        "lowshelf" | "ls" => Ok(FilterType::LowShelf),
        "highshelf" | "hs" => Ok(FilterType::HighShelf),
        _ => Err(ParseError::UnknownFilterType(s.to_string())),
    }
}

/// Parse a plot scale name.
pub fn parse_scale(s: &str) -> Result<PlotScale, ParseError> {
    match s.to_ascii_lowercase().as_str() {
        "linear" | "lin" => Ok(PlotScale::Linear),
        "logarithmic" | "log" => Ok(PlotScale::Logarithmic),
        _ => Err(ParseError::UnknownScale(s.to_string())),
    }
}
