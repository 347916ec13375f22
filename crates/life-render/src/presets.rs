//! Well-known starting patterns.
//!
//! Coordinates are `(row, col)` relative to the pattern's own top-left corner;
//! the engine re-centers them on construction anyway.

use life_core::Pattern;

use crate::{RenderError, RenderResult};

/// A named pattern.
#[derive(Debug)]
pub struct Preset {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

impl Preset {
    pub fn pattern(&self) -> Pattern {
        Pattern::from(self.cells)
    }
}

#[rustfmt::skip]
pub const PRESETS: &[Preset] = &[
    // XX
    // XX
    Preset {
        name: "block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Preset {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Preset {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Preset {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    //  X
    //   X
    // XXX
    Preset {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    // Lightweight spaceship
    // .X..X
    // X....
    // X...X
    // XXXX.
    Preset {
        name: "lwss",
        cells: &[
            (0, 1),
            (0, 4),
            (1, 0),
            (2, 0),
            (2, 4),
            (3, 0),
            (3, 1),
            (3, 2),
            (3, 3),
        ],
    },
    //  XX
    // XX
    //  X
    Preset {
        name: "r-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    // Small but grows to ~633 cells over 5206 generations
    // .X.....
    // ...X...
    // XX..XXX
    Preset {
        name: "acorn",
        cells: &[(0, 1), (1, 3), (2, 0), (2, 1), (2, 4), (2, 5), (2, 6)],
    },
    Preset {
        name: "pulsar",
        cells: &[
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    // Emits a glider every 30 generations
    Preset {
        name: "gosper-glider-gun",
        cells: &[
            (5, 1), (5, 2), (6, 1), (6, 2),
            (5, 11), (6, 11), (7, 11), (4, 12), (8, 12), (3, 13), (9, 13),
            (3, 14), (9, 14), (6, 15), (4, 16), (8, 16), (5, 17), (6, 17),
            (7, 17), (6, 18), (3, 21), (4, 21), (5, 21), (3, 22), (4, 22),
            (5, 22), (2, 23), (6, 23), (1, 25), (2, 25), (6, 25), (7, 25),
            (3, 35), (4, 35), (3, 36), (4, 36),
        ],
    },
];

/// Names of all presets, in table order.
pub fn names() -> Vec<&'static str> {
    PRESETS.iter().map(|p| p.name).collect()
}

/// Look up a preset, ignoring case and treating spaces and underscores as hyphens.
pub fn find(name: &str) -> RenderResult<&'static Preset> {
    let wanted: String = name
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '_' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect();

    PRESETS
        .iter()
        .find(|p| p.name == wanted)
        .ok_or_else(|| RenderError::UnknownPreset(name.to_string()))
}

#[cfg(test)]
mod tests {
    use life_core::{Bounds, Simulation};

    use super::*;

    #[test]
    fn test_find_normalizes_name() {
        assert_eq!(find("Gosper Glider Gun").unwrap().name, "gosper-glider-gun");
        assert_eq!(find("R_PENTOMINO").unwrap().name, "r-pentomino");
        assert!(matches!(find("spaceship"), Err(RenderError::UnknownPreset(_))));
    }

    #[test]
    fn test_unknown_preset_lists_known_names() {
        let message = find("spaceship").unwrap_err().to_string();
        assert!(message.starts_with("unknown preset: spaceship"));
        assert!(message.contains("glider"));
        assert!(message.contains("gosper-glider-gun"));
    }

    #[test]
    fn test_populations() {
        assert_eq!(find("pulsar").unwrap().cells.len(), 48);
        assert_eq!(find("gosper-glider-gun").unwrap().cells.len(), 36);
    }

    #[test]
    fn test_oscillator_periods() {
        for (name, period) in [("blinker", 2), ("toad", 2), ("beacon", 2), ("pulsar", 3)] {
            let mut sim = Simulation::new(find(name).unwrap().pattern(), Bounds::new(30, 30))
                .unwrap();
            let start = sim.board().clone();
            assert_ne!(*sim.advance_generation(), start, "{name} is not still");
            assert_eq!(*sim.advance_by(period - 1), start, "{name} period");
        }
    }

    #[test]
    fn test_gun_grows() {
        let mut sim =
            Simulation::new(find("gosper-glider-gun").unwrap().pattern(), Bounds::new(40, 60))
                .unwrap();
        let start = sim.population();
        // Two periods emit two gliders that never die off
        assert!(sim.advance_by(60).len() > start);
    }
}
