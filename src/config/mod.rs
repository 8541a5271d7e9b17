//! Configuration: environment-driven settings plus the constants
//! (pagination bounds, server defaults, HTTP payloads) shared across layers.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
