//! Parameter definitions with physical units and documented semantics.
//!
//! All tunable numbers live here with:
//! - Physical units (meters, seconds, FPS)
//! - Defaults matching the textured waves demo
//! - `validate()` for anything the simulation cannot represent

mod demo;
mod rain;
mod waves;

// Re-export all types
pub use demo::DemoConfig;
pub use rain::RainSchedule;
pub use waves::WaveParams;
