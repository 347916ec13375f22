//! Record a Game of Life run and export it as a raw PBM animation.
//!
//! Configuration comes from the environment:
//! - `LIFE_PATTERN` - preset name (default `glider`)
//! - `LIFE_PATTERN_FILE` - plaintext `.cells` file, overrides `LIFE_PATTERN`
//! - `LIFE_NAME` - identifier for the output file
//! - `LIFE_FRAMES` - number of frames (default 10)
//! - `LIFE_HEIGHT` / `LIFE_WIDTH` - viewport (default 100 x 100)
//! - `LIFE_OUTPUT_DIR` - export directory (default `.`)
//! - `LIFE_PLAY` - play frames in the terminal afterwards

use life_render::RenderConfig;
use tracing::info;

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("life_render=info".parse()?)
                .add_directive("life_core=info".parse()?),
        )
        .init();

    let config = RenderConfig::from_env()?;

    let path = life_render::run(&config)?;
    info!("Wrote {}", path.display());

    Ok(())
}
