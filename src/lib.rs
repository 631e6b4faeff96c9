//! Sketch Automata - toroidal grids and cellular automata for generative sketches
//!
//! Provides a generic 2D [`Grid`] with strict and wrap-around addressing, the
//! Moore-neighborhood life rule, a falling-sand rule, owned simulation
//! drivers, and a C ABI for hosts that render the cells.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod state;
pub mod wrap;


pub use automaton::{next_alive, next_generation, Grid, Size};
pub use config::SketchConfig;
pub use error::{ConfigError, GridError, SimulationError};
pub use state::{LifeSimulation, SandSimulation};
