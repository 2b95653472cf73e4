//! Frame-loop systems.
//!
//! Submodules overview, in the order they run each frame
//! - [`time`] – advance [`crate::resources::worldtime::WorldTime`] (called directly by the loop)
//! - [`frame`] – reset per-frame scratch state
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`]
//! - [`camera`] – ease the camera toward the player
//! - [`mouse`] – map the cursor to a world position and tile
//! - [`tilegrid`] – queue the background checkerboard and hovered tile
//! - [`highlight`] – queue entity bounds, solid under the cursor
//! - [`render`] – queue entity sprites; replay the queue through raylib
//! - [`exit`] – Escape requests shutdown
//! - [`playercontroller`] – move the player from the directional keys
//! - [`fps`] – periodic frame-rate log line

pub mod camera;
pub mod exit;
pub mod fps;
pub mod frame;
pub mod highlight;
pub mod input;
pub mod mouse;
pub mod playercontroller;
pub mod render;
pub mod tilegrid;
pub mod time;
