//! Wavesim library - rain-on-water wave height-field simulation

pub mod cli;
pub mod demo;
pub mod logging;
pub mod mesh;
pub mod params;
pub mod rain;
pub mod snapshot;
pub mod waves;
