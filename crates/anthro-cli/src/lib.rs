//! Command-line front end for WHO growth screening.
//!
//! The binary in `main.rs` only parses arguments and sets up logging; the
//! commands and their rendering live here so they can be tested.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
