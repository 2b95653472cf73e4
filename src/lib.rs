//! Treasure Hunt library.
//!
//! Exposes the game's data types, resources and systems for the binary and
//! for integration tests.

pub mod animate;
pub mod components;
pub mod game;
pub mod resources;
pub mod systems;
pub mod tile;
