//! Integration tests for the analysis application
//!
//! Tests are organized by topic:
//! - `loaders` - CSV loading end to end over temporary files
//! - `report` - Text, JSON and SVG output over a small analysis run

mod loaders;
