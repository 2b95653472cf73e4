//! World setup.
//!
//! Populates the entity pool once before the frame loop starts and inserts
//! every resource the frame systems read.
use bevy_ecs::prelude::*;
use fastrand::Rng;
use log::info;
use raylib::prelude::Vector2;

use crate::components::archetype::EntityArchetype;
use crate::resources::camera2d::CameraState;
use crate::resources::closerequest::CloseRequested;
use crate::resources::drawqueue::DrawQueue;
use crate::resources::entitypool::{EntityHandle, EntityPool};
use crate::resources::fps::FpsCounter;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::mouse::MouseWorld;
use crate::resources::player::Player;
use crate::resources::spritestore::SpriteStore;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::tile::{TILE_SIZE, snap_to_tile};

/// Uniform sample in the closed interval `[0, 1]`.
fn unit_closed(rng: &mut Rng) -> f64 {
    f64::from(rng.u32(..)) / f64::from(u32::MAX)
}

/// Map `t` in `[0, 1]` onto `[-range, range]`.
fn spread(t: f64, range: f32) -> f32 {
    ((t * 2.0 - 1.0) * f64::from(range)) as f32
}

/// Uniform random position in `[-range, range]` on both axes.
fn random_spawn_pos(rng: &mut Rng, range: f32) -> Vector2 {
    Vector2 {
        x: spread(unit_closed(rng), range),
        y: spread(unit_closed(rng), range),
    }
}

/// Create `count` entities of `arch` at random tile-snapped positions.
pub fn spawn_obstacles(
    pool: &mut EntityPool,
    rng: &mut Rng,
    arch: EntityArchetype,
    count: usize,
    config: &GameConfig,
) {
    for _ in 0..count {
        let handle = pool.create();
        let mut pos = snap_to_tile(random_spawn_pos(rng, config.spawn_range));
        if config.foot_offset {
            pos.y -= TILE_SIZE as f32 * 0.5;
        }
        if let Some(entity) = pool.get_mut(handle) {
            entity.setup(arch);
            entity.pos = pos;
        }
    }
}

/// Fill the pool with the player at the origin followed by the obstacles.
///
/// Returns the player's handle.
pub fn populate_world(pool: &mut EntityPool, rng: &mut Rng, config: &GameConfig) -> EntityHandle {
    let player = pool.create();
    if let Some(entity) = pool.get_mut(player) {
        entity.setup(EntityArchetype::Player);
    }

    spawn_obstacles(pool, rng, EntityArchetype::Rock, config.rocks, config);
    spawn_obstacles(
        pool,
        rng,
        EntityArchetype::MineralRock,
        config.mineral_rocks,
        config,
    );
    spawn_obstacles(pool, rng, EntityArchetype::Spike, config.spikes, config);

    info!(
        "World populated: {} entities ({} rocks, {} mineral rocks, {} spikes)",
        pool.len(),
        config.rocks,
        config.mineral_rocks,
        config.spikes
    );
    player
}

/// Insert the game's resources into `world` and populate the entity pool.
///
/// Raylib handles and textures are not touched here; the caller inserts
/// them as non-send resources when running with a window.
pub fn setup_world(world: &mut World, config: GameConfig) -> EntityHandle {
    let mut rng = match config.seed {
        Some(seed) => {
            info!("Using world seed {}", seed);
            Rng::with_seed(seed)
        }
        None => Rng::new(),
    };

    let mut pool = EntityPool::new();
    let player = populate_world(&mut pool, &mut rng, &config);

    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(WindowSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    });
    world.insert_resource(CameraState {
        zoom: config.zoom,
        follow_rate: config.follow_rate,
        ..CameraState::default()
    });
    world.insert_resource(MouseWorld::default());
    world.insert_resource(DrawQueue::default());
    world.insert_resource(FpsCounter::default());
    world.insert_resource(CloseRequested::default());
    world.insert_resource(SpriteStore::new());
    world.insert_resource(pool);
    world.insert_resource(Player(player));
    world.insert_resource(config);

    player
}
