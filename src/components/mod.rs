//! Entity data types.
//!
//! Plain records stored in the [`EntityPool`](crate::resources::entitypool::EntityPool).
//!
//! Submodules overview:
//! - [`archetype`] – entity kinds and the render/update dispatch tables
//! - [`entity`] – the per-slot entity record
//! - [`spriteid`] – closed set of sprite table indices

pub mod archetype;
pub mod entity;
pub mod spriteid;
