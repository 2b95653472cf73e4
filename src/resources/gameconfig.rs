//! Game configuration resource.
//!
//! Settings loaded from an INI configuration file. Every value has a default,
//! so a missing file or key is never an error at startup.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! title = Treasure Hunt
//! width = 1280
//! height = 720
//! x = 200
//! y = 200
//! target_fps = 120
//! vsync = true
//! clear_color = 090a14ff
//!
//! [camera]
//! zoom = 0.5
//! follow_rate = 8.0
//!
//! [world]
//! rocks = 10
//! mineral_rocks = 10
//! spikes = 10
//! spawn_range = 200.0
//! foot_offset = true
//! seed = 42
//!
//! [player]
//! speed = 100.0
//!
//! [assets]
//! dir = resources
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use raylib::prelude::Color;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_TITLE: &str = "Treasure Hunt";
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_WINDOW_X: i32 = 200;
const DEFAULT_WINDOW_Y: i32 = 200;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_CLEAR_COLOR: u32 = 0x090a14ff;
const DEFAULT_ZOOM: f32 = 0.5;
const DEFAULT_FOLLOW_RATE: f32 = 8.0;
const DEFAULT_OBSTACLE_COUNT: usize = 10;
const DEFAULT_SPAWN_RANGE: f32 = 200.0;
const DEFAULT_FOOT_OFFSET: bool = true;
const DEFAULT_PLAYER_SPEED: f32 = 100.0;
const DEFAULT_ASSETS_DIR: &str = "resources";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Convert a packed `0xRRGGBBAA` value to a color.
pub fn hex_to_color(hex: u32) -> Color {
    Color::new(
        (hex >> 24) as u8,
        (hex >> 16) as u8,
        (hex >> 8) as u8,
        hex as u8,
    )
}

/// Parse `RRGGBBAA` or `RRGGBB` hex, optionally prefixed with `#` or `0x`.
pub fn parse_hex_color(text: &str) -> Result<Color, String> {
    let digits = text.trim();
    let digits = digits
        .strip_prefix('#')
        .or_else(|| digits.strip_prefix("0x"))
        .unwrap_or(digits);
    let value = u32::from_str_radix(digits, 16)
        .map_err(|e| format!("Invalid hex color '{}': {}", text, e))?;
    match digits.len() {
        8 => Ok(hex_to_color(value)),
        6 => Ok(hex_to_color(value << 8 | 0xff)),
        _ => Err(format!("Hex color '{}' must have 6 or 8 digits", text)),
    }
}

fn color_to_hex(color: Color) -> String {
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        color.r, color.g, color.b, color.a
    )
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub title: String,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Initial window position on the desktop.
    pub window_x: i32,
    pub window_y: i32,
    /// Target frames per second, 0 for uncapped.
    pub target_fps: u32,
    pub vsync: bool,
    /// Background color each frame is cleared to.
    pub clear_color: Color,
    /// World units per window pixel.
    pub zoom: f32,
    /// Camera smoothing rate; higher catches up faster.
    pub follow_rate: f32,
    pub rocks: usize,
    pub mineral_rocks: usize,
    pub spikes: usize,
    /// Obstacles spawn in `[-spawn_range, spawn_range]` on both axes.
    pub spawn_range: f32,
    /// Lower obstacles half a tile and draw sprites half a tile down so their
    /// feet sit on the tile centre.
    pub foot_offset: bool,
    /// Seed for obstacle placement; random when unset.
    pub seed: Option<u64>,
    /// Player speed in world units per second.
    pub player_speed: f32,
    /// Directory holding the sprite images.
    pub assets_dir: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_x: DEFAULT_WINDOW_X,
            window_y: DEFAULT_WINDOW_Y,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            clear_color: hex_to_color(DEFAULT_CLEAR_COLOR),
            zoom: DEFAULT_ZOOM,
            follow_rate: DEFAULT_FOLLOW_RATE,
            rocks: DEFAULT_OBSTACLE_COUNT,
            mineral_rocks: DEFAULT_OBSTACLE_COUNT,
            spikes: DEFAULT_OBSTACLE_COUNT,
            spawn_range: DEFAULT_SPAWN_RANGE,
            foot_offset: DEFAULT_FOOT_OFFSET,
            seed: None,
            player_speed: DEFAULT_PLAYER_SPEED,
            assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed, in which case
    /// no field is changed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.commit_ini(&config)?;

        info!(
            "Loaded config from {:?}: {}x{} window at ({}, {}), fps={}, zoom={}, seed={:?}",
            self.config_path,
            self.window_width,
            self.window_height,
            self.window_x,
            self.window_y,
            self.target_fps,
            self.zoom,
            self.seed
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    ///
    /// On error no field is changed.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.commit_ini(&config)
    }

    /// Apply `config` to a copy and keep it only if every value parsed.
    fn commit_ini(&mut self, config: &Ini) -> Result<(), String> {
        let mut next = self.clone();
        next.apply_ini(config)?;
        *self = next;
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) -> Result<(), String> {
        // [window] section
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }
        if let Some(width) = config.getuint("window", "width")? {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height")? {
            self.window_height = height as u32;
        }
        if let Some(x) = config.getint("window", "x")? {
            self.window_x = x as i32;
        }
        if let Some(y) = config.getint("window", "y")? {
            self.window_y = y as i32;
        }
        if let Some(fps) = config.getuint("window", "target_fps")? {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync")? {
            self.vsync = vsync;
        }
        if let Some(color) = config.get("window", "clear_color") {
            self.clear_color = parse_hex_color(&color)?;
        }

        // [camera] section
        if let Some(zoom) = config.getfloat("camera", "zoom")? {
            if zoom <= 0.0 {
                return Err(format!("camera.zoom must be positive, got {}", zoom));
            }
            self.zoom = zoom as f32;
        }
        if let Some(rate) = config.getfloat("camera", "follow_rate")? {
            self.follow_rate = rate as f32;
        }

        // [world] section
        if let Some(n) = config.getuint("world", "rocks")? {
            self.rocks = n as usize;
        }
        if let Some(n) = config.getuint("world", "mineral_rocks")? {
            self.mineral_rocks = n as usize;
        }
        if let Some(n) = config.getuint("world", "spikes")? {
            self.spikes = n as usize;
        }
        if let Some(range) = config.getfloat("world", "spawn_range")? {
            self.spawn_range = (range as f32).abs();
        }
        if let Some(foot_offset) = config.getbool("world", "foot_offset")? {
            self.foot_offset = foot_offset;
        }
        if let Some(seed) = config.getuint("world", "seed")? {
            self.seed = Some(seed);
        }

        // [player] section
        if let Some(speed) = config.getfloat("player", "speed")? {
            self.player_speed = speed as f32;
        }

        // [assets] section
        if let Some(dir) = config.get("assets", "dir") {
            self.assets_dir = PathBuf::from(dir);
        }

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "title", Some(self.title.clone()));
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "x", Some(self.window_x.to_string()));
        config.set("window", "y", Some(self.window_y.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "clear_color", Some(color_to_hex(self.clear_color)));

        // [camera] section
        config.set("camera", "zoom", Some(self.zoom.to_string()));
        config.set("camera", "follow_rate", Some(self.follow_rate.to_string()));

        // [world] section
        config.set("world", "rocks", Some(self.rocks.to_string()));
        config.set("world", "mineral_rocks", Some(self.mineral_rocks.to_string()));
        config.set("world", "spikes", Some(self.spikes.to_string()));
        config.set("world", "spawn_range", Some(self.spawn_range.to_string()));
        config.set("world", "foot_offset", Some(self.foot_offset.to_string()));
        if let Some(seed) = self.seed {
            config.set("world", "seed", Some(seed.to_string()));
        }

        // [player] section
        config.set("player", "speed", Some(self.player_speed.to_string()));

        // [assets] section
        config.set(
            "assets",
            "dir",
            Some(self.assets_dir.to_string_lossy().into_owned()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GameConfig::new();
        assert_eq!(c.title, "Treasure Hunt");
        assert_eq!((c.window_width, c.window_height), (1280, 720));
        assert_eq!((c.window_x, c.window_y), (200, 200));
        assert_eq!(c.clear_color.r, 0x09);
        assert_eq!(c.clear_color.g, 0x0a);
        assert_eq!(c.clear_color.b, 0x14);
        assert_eq!(c.clear_color.a, 0xff);
        assert_eq!(c.zoom, 0.5);
        assert_eq!(c.follow_rate, 8.0);
        assert_eq!((c.rocks, c.mineral_rocks, c.spikes), (10, 10, 10));
        assert_eq!(c.spawn_range, 200.0);
        assert!(c.foot_offset);
        assert_eq!(c.seed, None);
        assert_eq!(c.player_speed, 100.0);
    }

    #[test]
    fn test_parse_hex_color_forms() {
        let c = parse_hex_color("#ff800040").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (0xff, 0x80, 0x00, 0x40));
        let c = parse_hex_color("0x102030").unwrap();
        assert_eq!((c.r, c.g, c.b, c.a), (0x10, 0x20, 0x30, 0xff));
        assert!(parse_hex_color("12345").is_err());
        assert!(parse_hex_color("zzzzzzzz").is_err());
    }

    #[test]
    fn test_load_from_str_overrides_only_present_keys() {
        let mut c = GameConfig::new();
        c.load_from_str(
            "[window]\nwidth = 800\nclear_color = 000000ff\n\n[world]\nrocks = 3\nseed = 7\nfoot_offset = false\n",
        )
        .unwrap();
        assert_eq!(c.window_width, 800);
        assert_eq!(c.window_height, 720);
        assert_eq!(c.clear_color.r, 0);
        assert_eq!(c.rocks, 3);
        assert_eq!(c.spikes, 10);
        assert_eq!(c.seed, Some(7));
        assert!(!c.foot_offset);
    }

    #[test]
    fn test_load_rejects_bad_values() {
        let mut c = GameConfig::new();
        assert!(c.load_from_str("[camera]\nzoom = -1\n").is_err());
        let mut c = GameConfig::new();
        assert!(c.load_from_str("[window]\nwidth = wide\n").is_err());
    }

    #[test]
    fn test_failed_load_keeps_previous_values() {
        let mut c = GameConfig::new();
        let result = c.load_from_str("[window]\nwidth = 800\n\n[camera]\nzoom = -1\n");
        assert!(result.is_err());
        assert_eq!(c.window_width, 1280);
        assert_eq!(c.zoom, 0.5);
    }

    #[test]
    fn test_failed_file_load_keeps_previous_values() {
        let path = std::env::temp_dir().join(format!(
            "treasurehunt_bad_config_test_{}.ini",
            std::process::id()
        ));
        std::fs::write(&path, "[window]\nwidth = 800\n\n[world]\nrocks = 3\nseed = lots\n").unwrap();

        let mut c = GameConfig::with_path(&path);
        let result = c.load_from_file();
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
        assert_eq!(c.window_width, 1280);
        assert_eq!(c.rocks, 10);
        assert_eq!(c.seed, None);
    }

    #[test]
    fn test_missing_file_is_error() {
        let mut c = GameConfig::with_path("/nonexistent/treasurehunt/config.ini");
        assert!(c.load_from_file().is_err());
        assert_eq!(c.window_width, 1280);
    }

    #[test]
    fn test_save_then_load_preserves_values() {
        let path = std::env::temp_dir().join(format!(
            "treasurehunt_config_test_{}.ini",
            std::process::id()
        ));
        let mut original = GameConfig::with_path(&path);
        original.rocks = 4;
        original.seed = Some(99);
        original.clear_color = Color::new(1, 2, 3, 4);
        original.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.rocks, 4);
        assert_eq!(loaded.seed, Some(99));
        assert_eq!(loaded.clear_color.a, 4);
        assert_eq!(loaded.title, "Treasure Hunt");
    }
}
