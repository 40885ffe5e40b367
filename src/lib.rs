pub mod config;
pub mod error;
pub mod grid;
pub mod render;
pub mod rng;

pub use error::GridError;
pub use grid::{Grid, MOORE_OFFSETS};
pub use rng::SplitMix64;
