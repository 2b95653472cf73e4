//! ECS resources made available to systems.
//!
//! The `bevy_ecs::World` holding these is the game's single context object,
//! owned by `main` for the whole run.
//!
//! Overview
//! - `camera2d` – world-space camera and its raylib equivalent
//! - `closerequest` – set to end the main loop
//! - `drawqueue` – per-frame list of world-space draw commands
//! - `entitypool` – fixed-capacity entity storage
//! - `fps` – frame-rate accounting
//! - `gameconfig` – INI-backed startup configuration
//! - `input` – per-frame keyboard and mouse state
//! - `mouse` – cursor world position and hovered tile
//! - `player` – handle of the player entity
//! - `spritestore` – sprite table indexed by sprite id
//! - `texturestore` – loaded textures keyed by name (non-send)
//! - `windowsize` – current window dimensions in pixels
//! - `worldtime` – simulation time and delta
pub mod camera2d;
pub mod closerequest;
pub mod drawqueue;
pub mod entitypool;
pub mod fps;
pub mod gameconfig;
pub mod input;
pub mod mouse;
pub mod player;
pub mod spritestore;
pub mod texturestore;
pub mod windowsize;
pub mod worldtime;
