//! Rendering and export for `life-core` simulations.
//!
//! Takes a starting pattern (a named preset or a plaintext `.cells` file),
//! records a run of dense snapshots, writes them as a multi-image PBM file named
//! after the pattern, and optionally plays them back in the terminal.

mod animation;
mod config;
mod error;
pub mod pbm;
pub mod plaintext;
pub mod presets;
pub mod terminal;

use std::fs;
use std::path::PathBuf;

pub use animation::{Animation, file_stem, fps_for, record};
pub use config::RenderConfig;
pub use error::{RenderError, RenderResult};
use life_core::{Pattern, Simulation};
use tracing::info;

/// Resolve the starting pattern named by `config`.
pub fn load_pattern(config: &RenderConfig) -> RenderResult<Pattern> {
    match &config.pattern_file {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Ok(Pattern::Cells(plaintext::parse(&text)?))
        }
        None => Ok(presets::find(&config.pattern)?.pattern()),
    }
}

/// Record the configured simulation and export it. Returns the written path.
pub fn run(config: &RenderConfig) -> RenderResult<PathBuf> {
    let pattern = load_pattern(config)?;
    info!(
        name = %config.name,
        population = pattern.population(),
        frames = config.frames,
        "starting simulation"
    );

    let mut simulation = Simulation::new(pattern, config.bounds)?;
    let animation = record(&config.name, &mut simulation, config.frames);
    let path = pbm::export(&animation, &config.output_dir)?;

    if config.play {
        terminal::play(&animation)?;
    }

    Ok(path)
}
