//! Frame recording.

use life_core::{DenseGrid, Simulation};
use tracing::debug;

/// Frames of a recorded simulation, ready for export or playback.
#[derive(Clone, Debug)]
pub struct Animation {
    pub name: String,
    pub frames: Vec<DenseGrid>,
    pub fps: u32,
}

impl Animation {
    /// Output file name for this animation without extension.
    pub fn file_stem(&self) -> String {
        file_stem(&self.name)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Turn an identifier into a file stem: spaces become underscores, then lowercase.
pub fn file_stem(name: &str) -> String {
    name.replace(' ', "_").to_lowercase()
}

/// Playback rate for `frame_count` frames: one fifth of the count, at least 1.
pub fn fps_for(frame_count: usize) -> u32 {
    u32::try_from(frame_count / 5).unwrap_or(u32::MAX).max(1)
}

/// Record `frames` snapshots of `simulation`.
///
/// The first frame is the current state. Every later frame advances one
/// generation and then snapshots.
pub fn record(name: &str, simulation: &mut Simulation, frames: usize) -> Animation {
    let mut out = Vec::with_capacity(frames);

    if frames > 0 {
        out.push(simulation.to_dense_snapshot());
    }
    while out.len() < frames {
        simulation.advance_generation();
        out.push(simulation.to_dense_snapshot());
    }

    debug!(
        animation = name,
        frames = out.len(),
        generation = simulation.generation(),
        "recorded animation"
    );

    Animation {
        name: name.to_string(),
        fps: fps_for(out.len()),
        frames: out,
    }
}

#[cfg(test)]
mod tests {
    use life_core::Bounds;

    use super::*;

    fn blinker() -> Simulation {
        Simulation::from_cells([(0, 0), (0, 1), (0, 2)], Bounds::new(5, 5)).unwrap()
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("Gosper Glider Gun"), "gosper_glider_gun");
        assert_eq!(file_stem("R Pentomino 2"), "r_pentomino_2");
        assert_eq!(file_stem("block"), "block");
    }

    #[test]
    fn test_fps_for() {
        assert_eq!(fps_for(10), 2);
        assert_eq!(fps_for(50), 10);
        assert_eq!(fps_for(14), 2);
        // Short recordings still play
        assert_eq!(fps_for(3), 1);
        assert_eq!(fps_for(0), 1);
    }

    #[test]
    fn test_record_frame_order() {
        let mut sim = blinker();
        let first = sim.to_dense_snapshot();

        let anim = record("Blinker", &mut sim, 3);

        assert_eq!(anim.len(), 3);
        assert_eq!(anim.frames[0], first);
        assert_ne!(anim.frames[1], first);
        assert_eq!(anim.frames[2], first);
        // Two advances for three frames
        assert_eq!(sim.generation(), 2);
        assert_eq!(anim.file_stem(), "blinker");
    }

    #[test]
    fn test_record_zero_frames() {
        let mut sim = blinker();
        let anim = record("empty", &mut sim, 0);

        assert!(anim.is_empty());
        assert_eq!(sim.generation(), 0);
    }
}
