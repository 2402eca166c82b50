//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (FileSystem) but are themselves
//! concrete structs, not traits.

mod backlight;

pub use backlight::{find_device, BacklightService, BRIGHTNESS_FILE, MAX_BRIGHTNESS_FILE};
