//! CLI command implementations.

pub mod common;
pub mod design;
pub mod response;
pub mod types;
