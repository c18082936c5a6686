//! Scenario sweep analysis.
//!
//! Evaluates the tax schedule over every (scenario, realisation rate)
//! combination and exposes the results as a row-major grid plus summary
//! statistics and histogram helpers for downstream rendering.

mod grid;
mod metrics;
mod sweep;

pub use grid::*;
pub use metrics::*;
pub use sweep::*;
