//! # User Interface
//!
//! Colored terminal output with timestamps.

pub mod log;

pub use log::{debug, error, header, info, print_logo, success, warn, Log};
