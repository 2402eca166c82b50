//! backlightctl: read and set display backlight brightness
//!
//! Layers, innermost first:
//! - `domain`: brightness values and the percent conversion (no I/O)
//! - `application`: backlight service over the `FileSystem` boundary
//! - `infrastructure`: real filesystem and service wiring
//! - `cli`: argument parsing, dispatch, output

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
