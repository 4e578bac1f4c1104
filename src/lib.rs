//! World location layout library
//!
//! Re-exports modules for use by the generator binary and tools.

pub mod biomes;
pub mod coords;
pub mod export;
pub mod mines;
pub mod names;
pub mod placement;
pub mod world;
