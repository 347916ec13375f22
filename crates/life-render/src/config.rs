//! Environment configuration.

use std::path::PathBuf;
use std::str::FromStr;

use life_core::Bounds;

use crate::{RenderError, RenderResult};

/// Settings for one `life-render` run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Preset name, used when no pattern file is given.
    pub pattern: String,
    /// Plaintext pattern file, overrides `pattern`.
    pub pattern_file: Option<PathBuf>,
    /// Identifier for the output file, defaults to the pattern name.
    pub name: String,
    pub frames: usize,
    pub bounds: Bounds,
    pub output_dir: PathBuf,
    /// Play frames in the terminal after exporting.
    pub play: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pattern: "glider".to_string(),
            pattern_file: None,
            name: "glider".to_string(),
            frames: 10,
            bounds: Bounds::default(),
            output_dir: PathBuf::from("."),
            play: false,
        }
    }
}

impl RenderConfig {
    /// Read `LIFE_*` variables from the process environment.
    pub fn from_env() -> RenderResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup. Missing keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> RenderResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let pattern_file = lookup("LIFE_PATTERN_FILE").map(PathBuf::from);
        let pattern = lookup("LIFE_PATTERN").unwrap_or(defaults.pattern);
        let name = lookup("LIFE_NAME").unwrap_or_else(|| match &pattern_file {
            Some(path) => path
                .file_stem()
                .map_or_else(|| pattern.clone(), |s| s.to_string_lossy().into_owned()),
            None => pattern.clone(),
        });

        let height = parse_or(&lookup, "LIFE_HEIGHT", defaults.bounds.height)?;
        let width = parse_or(&lookup, "LIFE_WIDTH", defaults.bounds.width)?;

        Ok(Self {
            pattern,
            pattern_file,
            name,
            frames: parse_or(&lookup, "LIFE_FRAMES", defaults.frames)?,
            bounds: (height, width).into(),
            output_dir: lookup("LIFE_OUTPUT_DIR").map_or(defaults.output_dir, PathBuf::from),
            play: parse_bool_or(&lookup, "LIFE_PLAY", defaults.play)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> RenderResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| RenderError::Config { key, value }),
        None => Ok(default),
    }
}

fn parse_bool_or<F>(lookup: &F, key: &'static str, default: bool) -> RenderResult<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" | "" => Ok(false),
            _ => Err(RenderError::Config { key, value }),
        },
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RenderConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = RenderConfig::from_lookup(lookup(&[
            ("LIFE_PATTERN", "acorn"),
            ("LIFE_FRAMES", "50"),
            ("LIFE_HEIGHT", "40"),
            ("LIFE_WIDTH", "80"),
            ("LIFE_OUTPUT_DIR", "out"),
            ("LIFE_PLAY", "yes"),
        ]))
        .unwrap();

        assert_eq!(config.pattern, "acorn");
        assert_eq!(config.name, "acorn");
        assert_eq!(config.frames, 50);
        assert_eq!(config.bounds, Bounds::new(40, 80));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(config.play);
    }

    #[test]
    fn test_name_from_pattern_file() {
        let config =
            RenderConfig::from_lookup(lookup(&[("LIFE_PATTERN_FILE", "pats/Big Gun.cells")]))
                .unwrap();
        assert_eq!(config.name, "Big Gun");

        let config = RenderConfig::from_lookup(lookup(&[
            ("LIFE_PATTERN_FILE", "pats/gun.cells"),
            ("LIFE_NAME", "My Gun"),
        ]))
        .unwrap();
        assert_eq!(config.name, "My Gun");
    }

    #[test]
    fn test_invalid_number() {
        let err = RenderConfig::from_lookup(lookup(&[("LIFE_FRAMES", "ten")])).unwrap_err();
        assert!(matches!(err, RenderError::Config { key: "LIFE_FRAMES", .. }));
    }

    #[test]
    fn test_invalid_bool() {
        let err = RenderConfig::from_lookup(lookup(&[("LIFE_PLAY", "maybe")])).unwrap_err();
        assert!(matches!(err, RenderError::Config { key: "LIFE_PLAY", .. }));
    }
}
