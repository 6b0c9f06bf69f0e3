//! Wavesim - raindrops on a damped wave grid, run headless
//!
//! Drives the same per-frame loop a renderer would: drop rain, step the
//! simulation, refresh the vertex buffer, and report what the surface is doing.

use clap::Parser;

use wavesim::cli::Args;
use wavesim::demo::WaveDemo;
use wavesim::logging::init_logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let args = Args::parse();

    let params = args.wave_params();
    log::info!(
        "Wave grid {}x{} dx={}m dt={}s c={}m/s damping={}",
        params.rows,
        params.cols,
        params.spatial_step_m,
        params.time_step_s,
        params.wave_speed_m_per_s,
        params.damping
    );

    let mut demo = WaveDemo::new(&params, args.rain_schedule(), args.demo_config())?;
    let stats = demo.run()?;

    log::info!(
        "Done: {} sweeps over {:.2}s of simulated time",
        stats.sweeps,
        stats.time_s
    );
    Ok(())
}
