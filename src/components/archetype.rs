//! Entity archetypes and their per-behaviour dispatch tables.
//!
//! Every behaviour that depends on what kind of entity a slot holds is an
//! exhaustive `match` here, so adding an archetype fails to compile until
//! each table has an answer for it.
use crate::components::spriteid::SpriteId;

/// Behavioural and rendering category of an entity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EntityArchetype {
    #[default]
    None,
    Player,
    Rock,
    MineralRock,
    Spike,
}

/// How the entity render pass draws an archetype.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderStyle {
    /// Not drawn.
    Hidden,
    /// Sprite centred horizontally on the position, feet on the ground line.
    FootAligned,
}

/// What the simulation does with an archetype each frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateBehavior {
    /// Never moves.
    Static,
    /// Driven by the directional keys.
    PlayerControlled,
}

impl EntityArchetype {
    /// Sprite assigned to a freshly set up entity of this archetype.
    pub fn default_sprite(self) -> SpriteId {
        match self {
            EntityArchetype::None => SpriteId::None,
            EntityArchetype::Player => SpriteId::Player,
            EntityArchetype::Rock => SpriteId::Rock,
            EntityArchetype::MineralRock => SpriteId::MineralRock,
            EntityArchetype::Spike => SpriteId::Spike,
        }
    }

    pub fn render_style(self) -> RenderStyle {
        match self {
            EntityArchetype::None => RenderStyle::Hidden,
            EntityArchetype::Player
            | EntityArchetype::Rock
            | EntityArchetype::MineralRock
            | EntityArchetype::Spike => RenderStyle::FootAligned,
        }
    }

    pub fn update_behavior(self) -> UpdateBehavior {
        match self {
            EntityArchetype::Player => UpdateBehavior::PlayerControlled,
            EntityArchetype::None
            | EntityArchetype::Rock
            | EntityArchetype::MineralRock
            | EntityArchetype::Spike => UpdateBehavior::Static,
        }
    }
}
