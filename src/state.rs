//! Owned simulation drivers.
//!
//! Each driver holds the current generation and replaces it wholesale on
//! every step: the next grid is built from the immutable current one, then
//! swapped in. Readers only ever see a finished generation.

use crate::automaton::grid::Grid;
use crate::automaton::sand::{self, Rgb, SandCell};
use crate::automaton::seeding::{rng_from_seed, seed_random};
use crate::automaton::stepping::next_generation;
use crate::config::{LifeConfig, SandConfig};
use crate::error::{ConfigError, GridError, SimulationError};

fn build_pool(threads: usize) -> Result<rayon::ThreadPool, SimulationError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads.max(1))
        .build()?;
    Ok(pool)
}

/// Game-of-life board with a generation counter and its own worker pool.
pub struct LifeSimulation {
    current: Grid<bool>,
    generation: u64,
    pool: rayon::ThreadPool,
}

impl LifeSimulation {
    /// An all-dead board.
    pub fn new(width: i32, height: i32, threads: usize) -> Result<Self, SimulationError> {
        let current = Grid::new(width, height, false)?;
        let pool = build_pool(threads)?;
        tracing::debug!(
            width,
            height,
            threads = pool.current_num_threads(),
            "created life simulation"
        );
        Ok(LifeSimulation {
            current,
            generation: 0,
            pool,
        })
    }

    /// A randomly seeded board covering a canvas of the given pixel size.
    ///
    /// `config` is validated first; out-of-range values are a `ConfigError`.
    pub fn from_config(
        config: &LifeConfig,
        canvas_width: u32,
        canvas_height: u32,
        threads: usize,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        let size = config.grid_size(canvas_width, canvas_height)?;
        let mut sim = Self::new(size.width, size.height, threads)?;
        sim.reseed(config.seed_density, config.seed)?;
        Ok(sim)
    }

    pub fn grid(&self) -> &Grid<bool> {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get(&self, row: i32, column: i32) -> Result<bool, GridError> {
        self.current.get(row, column).copied()
    }

    pub fn set(&mut self, row: i32, column: i32, alive: bool) -> Result<(), GridError> {
        self.current.set(row, column, alive)
    }

    /// Stamp `pattern` at `(row, column)`, wrapping across edges.
    pub fn insert(&mut self, pattern: &Grid<bool>, row: i32, column: i32) {
        self.current.insert(pattern, row, column);
    }

    /// Advance one generation.
    pub fn step(&mut self) {
        let current = &self.current;
        let next = self.pool.install(|| next_generation(current, |&alive| alive));
        self.current = next;
        self.generation += 1;
        tracing::trace!(generation = self.generation, live = self.live_count(), "life step");
    }

    /// Advance `n` generations.
    pub fn step_n(&mut self, n: u32) {
        for _ in 0..n {
            self.step();
        }
    }

    pub fn live_count(&self) -> usize {
        self.current.count(|&alive| alive)
    }

    /// Replace the board with an all-dead one of a new size and restart the count.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), SimulationError> {
        self.current = Grid::new(width, height, false)?;
        self.generation = 0;
        tracing::debug!(width, height, "resized life simulation");
        Ok(())
    }

    /// Refill the current board at random and restart the count.
    pub fn reseed(&mut self, density: f64, seed: Option<u64>) -> Result<(), SimulationError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(ConfigError::InvalidDensity(density).into());
        }
        let mut rng = rng_from_seed(seed);
        seed_random(&mut self.current, density, &mut rng);
        self.generation = 0;
        Ok(())
    }

    /// Rebuild a freshly seeded board for a resized canvas.
    ///
    /// On error the current board is left as it was.
    pub fn resize_to_canvas(
        &mut self,
        config: &LifeConfig,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Result<(), SimulationError> {
        config.validate()?;
        let size = config.grid_size(canvas_width, canvas_height)?;
        let mut next = Grid::new(size.width, size.height, false)?;
        seed_random(&mut next, config.seed_density, &mut rng_from_seed(config.seed));
        self.current = next;
        self.generation = 0;
        tracing::debug!(
            width = size.width,
            height = size.height,
            "reseeded life simulation for new canvas"
        );
        Ok(())
    }
}

/// Falling-sand box.
pub struct SandSimulation {
    current: Grid<SandCell>,
    generation: u64,
    grain_color: Rgb,
}

impl SandSimulation {
    pub fn new(width: i32, height: i32, grain_color: Rgb) -> Result<Self, SimulationError> {
        let current = sand::empty_sand(width, height)?;
        tracing::debug!(width, height, "created sand simulation");
        Ok(SandSimulation {
            current,
            generation: 0,
            grain_color,
        })
    }

    /// An empty box fitting a canvas of the given pixel size.
    ///
    /// `config` is validated first; out-of-range values are a `ConfigError`.
    pub fn from_config(
        config: &SandConfig,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Result<Self, SimulationError> {
        config.validate()?;
        let size = config.grid_size(canvas_width, canvas_height)?;
        Self::new(size.width, size.height, config.grain_color)
    }

    /// Replace the box with an empty one of a new size and restart the count.
    ///
    /// Grains are not carried over. On error the current box is left as it was.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), SimulationError> {
        self.current = sand::empty_sand(width, height)?;
        self.generation = 0;
        tracing::debug!(width, height, "resized sand simulation");
        Ok(())
    }

    /// Resize for a new canvas using `config`'s block size.
    pub fn resize_to_canvas(
        &mut self,
        config: &SandConfig,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Result<(), SimulationError> {
        config.validate()?;
        let size = config.grid_size(canvas_width, canvas_height)?;
        self.resize(size.width, size.height)
    }

    pub fn grid(&self) -> &Grid<SandCell> {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Drop a grain of the configured color.
    pub fn drop_grain(&mut self, row: i32, column: i32) -> Result<(), GridError> {
        sand::drop_grain(&mut self.current, row, column, self.grain_color)
    }

    pub fn is_occupied(&self, row: i32, column: i32) -> Result<bool, GridError> {
        Ok(self.current.get(row, column)?.is_some())
    }

    pub fn step(&mut self) {
        self.current = sand::step_sand(&self.current);
        self.generation += 1;
        tracing::trace!(generation = self.generation, "sand step");
    }

    pub fn grain_count(&self) -> usize {
        sand::grain_count(&self.current)
    }
}
