//! Shared CLI helpers used across multiple commands.

use crate::parse::parse_filter_type;
use clap::Args;
use filtra_core::{FilterParams, FilterType};
use tracing::debug;

/// Filter design arguments shared by the `design` and `response`
/// commands.
#[derive(Args)]
pub struct FilterArgs {
    /// Filter type (see `filtra types`)
    #[arg(short = 't', long = "filter", default_value = "lowpass")]
    filter: String,

    /// Cutoff / center frequency in Hz
    #[arg(short, long, default_value_t = 1000.0)]
    cutoff: f64,

    /// Sample rate in Hz
    #[arg(short, long, default_value_t = 44100.0)]
    sample_rate: f64,

    /// Quality factor (resonance)
    #[arg(short, long, default_value_t = 0.707)]
    q: f64,

    /// Gain in dB (peak and shelf types)
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    gain: f64,
}

impl FilterArgs {
    /// Resolve the raw arguments into a filter type and clamped
    /// parameters, warning when clamping changed anything.
    pub fn resolve(&self) -> anyhow::Result<(FilterType, FilterParams)> {
        let filter = parse_filter_type(&self.filter)?;

        let raw = FilterParams {
            cutoff_hz: self.cutoff,
            sample_rate_hz: self.sample_rate,
            q: self.q,
            gain_db: self.gain,
        };
        let params = raw.clamped();

        if params != raw {
            eprintln!(
                "note: parameters clamped to cutoff {} Hz, rate {} Hz, Q {}",
                params.cutoff_hz, params.sample_rate_hz, params.q
            );
        }
        if !filter.uses_q() && self.q != 0.707 {
            eprintln!("note: {} ignores Q", filter.long_name());
        }
        if !filter.uses_gain() && self.gain != 0.0 {
            eprintln!("note: {} ignores gain", filter.long_name());
        }

        debug!(
            filter = filter.long_name(),
            cutoff_hz = params.cutoff_hz,
            sample_rate_hz = params.sample_rate_hz,
            q = params.q,
            gain_db = params.gain_db,
            "resolved filter arguments"
        );
        Ok((filter, params))
    }
}

/// One-line summary of a designed filter for command headers.
pub fn describe(filter: FilterType, params: &FilterParams) -> String {
    let mut desc = format!(
        "{} at {} Hz (rate {} Hz",
        filter.long_name(),
        params.cutoff_hz,
        params.sample_rate_hz
    );
    if filter.uses_q() {
        desc.push_str(&format!(", Q {}", params.q));
    }
    if filter.uses_gain() {
        desc.push_str(&format!(", gain {} dB", params.gain_db));
    }
    desc.push(')');
    desc
}
