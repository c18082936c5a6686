//! Cross-module tests for the gain analysis pipeline
//!
//! Tests are organized by topic:
//! - `gains` - Price history through gain records and yearly summaries
//! - `sweep` - Gain records through scenario sweeps and revenue grids

mod gains;
mod sweep;
