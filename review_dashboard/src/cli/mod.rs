//! Command-line interface for running dashboard render cycles.

pub mod commands;
pub mod render;
