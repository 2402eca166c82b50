//! Domain layer: brightness values and the percent conversion
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod brightness;
pub mod error;

pub use brightness::{Brightness, PercentPolicy};
pub use error::DomainError;
