//! Sketch configuration.
//!
//! Values map to a `sketch.toml` file; every section and field is optional and
//! falls back to the `Default` impl. Loading always validates.
//!
//! ```toml
//! threads = 4
//!
//! [life]
//! cell_size_px = 5
//! seed_density = 0.5
//! seed = 42
//!
//! [sand]
//! block_size = 10
//! grain_color = [221, 221, 221]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::automaton::grid::Size;
use crate::automaton::sand::Rgb;
use crate::error::ConfigError;

pub const CELL_SIZE_RANGE: (u32, u32) = (1, 40);
pub const BLOCK_SIZE_RANGE: (u32, u32) = (1, 20);
pub const MAX_THREADS: usize = 256;

/// Game-of-life piece parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LifeConfig {
    /// On-screen edge of one cell, in pixels.
    pub cell_size_px: u32,
    /// Probability a cell starts alive.
    pub seed_density: f64,
    /// Fixed RNG seed for reproducible boards.
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            cell_size_px: 5,
            seed_density: 0.5,
            seed: None,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (lo, hi) = CELL_SIZE_RANGE;
        check_range(
            "life.cell_size_px",
            self.cell_size_px as u64,
            (lo as u64, hi as u64),
        )?;

        // NaN fails `contains` too
        let density = self.seed_density;
        if !(0.0..=1.0).contains(&density) {
            return Err(ConfigError::InvalidDensity(density));
        }
        Ok(())
    }

    /// Grid size covering a canvas; partial cells at the edges count as whole ones.
    ///
    /// Validates first, so a zero cell size is an error rather than a division by zero.
    pub fn grid_size(&self, canvas_width: u32, canvas_height: u32) -> Result<Size, ConfigError> {
        self.validate()?;
        let cell = self.cell_size_px;
        to_size(canvas_width.div_ceil(cell), canvas_height.div_ceil(cell))
    }
}

/// Falling-sand piece parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SandConfig {
    /// On-screen edge of one grain, in pixels.
    pub block_size: u32,
    pub grain_color: Rgb,
}

impl Default for SandConfig {
    fn default() -> Self {
        Self {
            block_size: 10,
            grain_color: Rgb::default(),
        }
    }
}

impl SandConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (lo, hi) = BLOCK_SIZE_RANGE;
        check_range(
            "sand.block_size",
            self.block_size as u64,
            (lo as u64, hi as u64),
        )
    }

    /// Grid size fitting inside a canvas; partial blocks are dropped.
    pub fn grid_size(&self, canvas_width: u32, canvas_height: u32) -> Result<Size, ConfigError> {
        self.validate()?;
        let block = self.block_size;
        to_size(canvas_width / block, canvas_height / block)
    }
}

fn to_size(columns: u32, rows: u32) -> Result<Size, ConfigError> {
    match (i32::try_from(columns), i32::try_from(rows)) {
        (Ok(width), Ok(height)) => Ok(Size { width, height }),
        _ => Err(ConfigError::CanvasTooLarge { columns, rows }),
    }
}

/// Top-level configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SketchConfig {
    pub life: LifeConfig,
    pub sand: SandConfig,
    /// Worker threads for generation steps; 0 means one.
    pub threads: usize,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            life: LifeConfig::default(),
            sand: SandConfig::default(),
            threads: 1,
        }
    }
}

fn check_range(
    field: &'static str,
    value: u64,
    (min, max): (u64, u64),
) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

impl SketchConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SketchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), "loaded sketch config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.life.validate()?;
        self.sand.validate()?;
        check_range("threads", self.threads as u64, (0, MAX_THREADS as u64))
    }

    /// Worker count with the "0 means one" rule applied.
    pub fn worker_threads(&self) -> usize {
        self.threads.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SketchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.life.cell_size_px, 5);
        assert_eq!(config.sand.block_size, 10);
        assert_eq!(config.sand.grain_color, Rgb(0xdd, 0xdd, 0xdd));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SketchConfig::from_toml_str("").unwrap();
        assert_eq!(config, SketchConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = SketchConfig::from_toml_str(
            r#"
            threads = 4

            [life]
            cell_size_px = 12
            seed = 42

            [sand]
            grain_color = [255, 0, 0]
            "#,
        )
        .unwrap();
        assert_eq!(config.threads, 4);
        assert_eq!(config.life.cell_size_px, 12);
        assert_eq!(config.life.seed, Some(42));
        assert_eq!(config.life.seed_density, 0.5);
        assert_eq!(config.sand.block_size, 10);
        assert_eq!(config.sand.grain_color, Rgb(255, 0, 0));
    }

    #[test]
    fn test_out_of_range_values() {
        let err = SketchConfig::from_toml_str("[life]\ncell_size_px = 41\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OutOfRange {
                field: "life.cell_size_px",
                value: 41,
                ..
            }
        ));

        let err = SketchConfig::from_toml_str("[sand]\nblock_size = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "sand.block_size", .. }));

        let err = SketchConfig::from_toml_str("[life]\nseed_density = 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDensity(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = SketchConfig::from_toml_str("[life\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("sketch-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[sand]\nblock_size = 4\n").unwrap();
        let config = SketchConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.sand.block_size, 4);

        assert!(matches!(
            SketchConfig::load(path),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_grid_sizes() {
        let life = LifeConfig::default();
        assert_eq!(
            life.grid_size(101, 50).unwrap(),
            Size {
                width: 21,
                height: 10
            }
        );

        let sand = SandConfig::default();
        assert_eq!(
            sand.grid_size(105, 99).unwrap(),
            Size {
                width: 10,
                height: 9
            }
        );
        assert_eq!(sand.grid_size(5, 5).unwrap().width, 0);
    }

    #[test]
    fn test_grid_size_rejects_huge_canvas() {
        let life = LifeConfig {
            cell_size_px: 1,
            ..LifeConfig::default()
        };
        assert!(matches!(
            life.grid_size(u32::MAX, 10),
            Err(ConfigError::CanvasTooLarge {
                columns: u32::MAX,
                rows: 10
            })
        ));

        let sand = SandConfig {
            block_size: 1,
            ..SandConfig::default()
        };
        assert!(matches!(
            sand.grid_size(10, u32::MAX),
            Err(ConfigError::CanvasTooLarge { .. })
        ));
        // largest addressable side still fits
        assert_eq!(sand.grid_size(i32::MAX as u32, 1).unwrap().width, i32::MAX);
    }

    #[test]
    fn test_section_validation() {
        let life = LifeConfig {
            cell_size_px: 0,
            ..LifeConfig::default()
        };
        assert!(matches!(
            life.validate(),
            Err(ConfigError::OutOfRange {
                field: "life.cell_size_px",
                value: 0,
                ..
            })
        ));
        assert!(matches!(
            life.grid_size(50, 50),
            Err(ConfigError::OutOfRange { .. })
        ));

        let life = LifeConfig {
            seed_density: f64::NAN,
            ..LifeConfig::default()
        };
        assert!(matches!(life.validate(), Err(ConfigError::InvalidDensity(_))));

        let sand = SandConfig {
            block_size: 21,
            ..SandConfig::default()
        };
        assert!(matches!(
            sand.validate(),
            Err(ConfigError::OutOfRange {
                field: "sand.block_size",
                value: 21,
                ..
            })
        ));

        let config = SketchConfig {
            sand,
            ..SketchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_worker_threads() {
        let mut config = SketchConfig::default();
        config.threads = 0;
        assert_eq!(config.worker_threads(), 1);
        config.threads = 8;
        assert_eq!(config.worker_threads(), 8);
    }
}
