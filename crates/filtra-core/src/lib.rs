//! Filtra Core - biquad filter design and frequency response evaluation
//!
//! This crate turns human-meaningful filter parameters (cutoff frequency,
//! sample rate, Q, gain) into normalized second-order coefficient sets and
//! evaluates their frequency-magnitude response for inspection. It is the
//! numeric core behind the `filtra` CLI; rendering, input parsing, and
//! display formatting live with the caller.
//!
//! # Components
//!
//! - [`FilterType`] - the nine supported filter archetypes, including the
//!   two degenerate one-pole variants
//! - [`FilterParams`] / [`Coefficients`] - parameter bundle and the
//!   coefficient designer ([`Coefficients::design`])
//! - [`FrequencyResponse`] - sampled magnitude curve with observed extrema,
//!   on a linear or logarithmic frequency sweep ([`PlotScale`])
//! - [`AxisRange`] - per-archetype display bounds policy
//! - [`log_position_to_hz`] / [`format_tick_hz`] - the inverse mapping and
//!   label formatting contract for logarithmic sweep positions
//!
//! Designing and evaluating are pure functions over value types: a fresh
//! [`Coefficients`] is computed for every parameter set, and nothing is
//! cached between calls, so concurrent design/evaluate cycles need no
//! coordination.
//!
//! # Example
//!
//! ```rust
//! use filtra_core::{Coefficients, FilterParams, FilterType, FrequencyResponse, PlotScale};
//!
//! let params = FilterParams {
//!     cutoff_hz: 1000.0,
//!     sample_rate_hz: 44100.0,
//!     q: 0.707,
//!     gain_db: 0.0,
//! }
//! .clamped();
//!
//! let coeffs = Coefficients::design(FilterType::LowPass, &params);
//! let response = FrequencyResponse::evaluate(&coeffs, PlotScale::Logarithmic, 44100.0, 512);
//! assert!(response.max_db <= 0.1);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (the response curve allocates through
//! `alloc`). Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! filtra-core = { version = "0.1", default-features = false }
//! ```
//!
//! All transcendental math goes through `libm`, never `std`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod axis;
pub mod design;
pub mod filter;
pub mod math;
pub mod response;
pub mod ticks;

// Re-export main types at crate root
pub use axis::AxisRange;
pub use design::{Coefficients, FilterParams};
pub use filter::FilterType;
pub use math::db_to_linear;
pub use response::{DB_FLOOR, DEFAULT_POINTS, FrequencyResponse, PlotScale, ResponsePoint};
pub use ticks::{format_tick_hz, log_position_to_hz};
