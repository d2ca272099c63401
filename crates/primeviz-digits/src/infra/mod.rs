//! Infrastructure layer - I/O and external dependencies
//!
//! This module handles terminal input, chart rendering and other external dependencies.

#[cfg(feature = "png")]
pub mod png_chart;
pub mod prompt;
pub mod text_chart;
