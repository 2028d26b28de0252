//! Slot grid engine. Keep this crate free of IO and platform concerns.

pub mod combinations;
pub mod config;
pub mod grid;
pub mod reward;
pub mod rng;
pub mod sampler;
pub mod spin;
pub mod symbols;

pub use combinations::*;
pub use config::*;
pub use grid::*;
pub use reward::*;
pub use rng::*;
pub use sampler::*;
pub use spin::*;
pub use symbols::*;
