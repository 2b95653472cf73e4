//! Treasure Hunt main entry point.
//!
//! A small top-down prototype written in Rust using:
//! - **raylib** for windowing, input, textures and drawing
//! - **bevy_ecs** as the resource container and frame scheduler
//!
//! The player walks a tile grid among randomly placed rocks, mineral rocks
//! and spikes. The camera trails the player; the tile and any entity under
//! the mouse are highlighted.
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (optional) and apply command line overrides
//! 2. Open the window and load the sprite images
//! 3. Populate the entity pool and insert the frame resources
//! 4. Each frame: advance time, poll input, follow with the camera, queue
//!    tiles/highlights/sprites, handle Escape, move the player, draw, count FPS
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 42
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use bevy_ecs::schedule::ExecutorKind;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use treasurehunt::game::setup_world;
use treasurehunt::resources::closerequest::CloseRequested;
use treasurehunt::resources::gameconfig::GameConfig;
use treasurehunt::resources::spritestore::SpriteStore;
use treasurehunt::resources::texturestore::TextureStore;
use treasurehunt::resources::windowsize::WindowSize;
use treasurehunt::resources::worldtime::WorldTime;
use treasurehunt::systems::camera::camera_follow;
use treasurehunt::systems::exit::exit_on_escape;
use treasurehunt::systems::fps::fps_counter;
use treasurehunt::systems::frame::begin_frame;
use treasurehunt::systems::highlight::entity_highlight_render;
use treasurehunt::systems::input::update_input_state;
use treasurehunt::systems::mouse::update_mouse_world;
use treasurehunt::systems::playercontroller::player_movement;
use treasurehunt::systems::render::{entity_render, render_system};
use treasurehunt::systems::tilegrid::tilegrid_render;
use treasurehunt::systems::time::update_world_time;

/// Treasure Hunt
#[derive(Parser)]
#[command(version, about = "Walk the tile grid among rocks and spikes.")]
struct Cli {
    /// Configuration file to read (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed for obstacle placement.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Directory holding the sprite images.
    #[arg(long, value_name = "DIR")]
    resources: Option<PathBuf>,

    /// Write the effective configuration to a file and exit.
    /// Optionally provide a path (default: the config path).
    #[arg(long, value_name = "PATH")]
    write_config: Option<Option<PathBuf>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if !config.config_path.exists() {
        info!(
            "No config file at {:?}; using defaults",
            config.config_path
        );
    } else if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(dir) = cli.resources {
        config.assets_dir = dir;
    }

    // Early-exit: dump the config and quit (no window needed)
    if let Some(maybe_path) = cli.write_config {
        if let Some(path) = maybe_path {
            config.config_path = path;
        }
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    info!("Starting {}", config.title);
    // --------------- Raylib window & assets ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .title(&config.title);
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_window_position(config.window_x, config.window_y);
    rl.set_target_fps(config.target_fps);
    // Escape is handled by exit_on_escape
    rl.set_exit_key(None);

    let textures =
        match TextureStore::load_sprites(&mut rl, &thread, &SpriteStore::new(), &config.assets_dir)
        {
            Ok(textures) => textures,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        };

    // --------------- World + resources ---------------
    let mut world = World::new();
    setup_world(&mut world, config);
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = Schedule::default();
    update.set_executor_kind(ExecutorKind::SingleThreaded);
    update.add_systems(
        (
            begin_frame,
            update_input_state,
            camera_follow,
            update_mouse_world,
            tilegrid_render,
            entity_highlight_render,
            entity_render,
            exit_on_escape,
            player_movement,
            render_system,
            fps_counter,
        )
            .chain(),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    let mut last_time = world
        .non_send_resource::<raylib::RaylibHandle>()
        .get_time();
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<CloseRequested>().0
    {
        let now = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_time();
        let dt = (now - last_time) as f32;
        last_time = now;
        update_world_time(&mut world, dt);

        update.run(&mut world);
    }

    // Textures must be released while the GL context is still alive
    world.remove_non_send_resource::<TextureStore>();
    let time = world.resource::<WorldTime>();
    info!(
        "Goodbye after {} frames ({:.1}s)",
        time.frame_count, time.elapsed
    );
}
