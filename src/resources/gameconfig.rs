//! Game configuration resource.
//!
//! Settings loaded from an INI configuration file. Every key is optional;
//! missing keys keep the defaults below, and a missing file leaves the
//! whole configuration at its defaults.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 60
//!
//! [player]
//! velocity = 5
//! start_x = 50
//! start_y = 50
//!
//! [assets]
//! root = assets
//! character = NinjaFrog
//! frame_width = 32
//! frame_height = 32
//! background = Green.png
//! background_scroll = 1
//! block_size = 96
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_PLAYER_VELOCITY: f32 = 5.0;
const DEFAULT_PLAYER_START: (f32, f32) = (50.0, 50.0);
const DEFAULT_ASSETS_ROOT: &str = "assets";
const DEFAULT_CHARACTER: &str = "NinjaFrog";
const DEFAULT_FRAME_SIZE: u32 = 32;
const DEFAULT_BACKGROUND: &str = "Green.png";
const DEFAULT_BACKGROUND_SCROLL: f32 = 1.0;
const DEFAULT_BLOCK_SIZE: u32 = 96;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Simulation ticks (and frames) per second.
    pub target_fps: u32,
    /// Horizontal player speed in pixels per tick.
    pub player_velocity: f32,
    pub player_start_x: f32,
    pub player_start_y: f32,
    /// Directory holding `MainCharacters/`, `Background/` and `Terrain/`.
    pub assets_root: PathBuf,
    /// Subdirectory of `MainCharacters/` with the player's sheets.
    pub character: String,
    /// Width of one frame in the character sheets, before scaling.
    pub frame_width: u32,
    /// Height of one frame in the character sheets, before scaling.
    pub frame_height: u32,
    /// File name under `Background/`.
    pub background: String,
    /// Background scroll in pixels per tick.
    pub background_scroll: f32,
    /// On-screen edge length of a floor block.
    pub block_size: u32,
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
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            player_velocity: DEFAULT_PLAYER_VELOCITY,
            player_start_x: DEFAULT_PLAYER_START.0,
            player_start_y: DEFAULT_PLAYER_START.1,
            assets_root: PathBuf::from(DEFAULT_ASSETS_ROOT),
            character: DEFAULT_CHARACTER.to_string(),
            frame_width: DEFAULT_FRAME_SIZE,
            frame_height: DEFAULT_FRAME_SIZE,
            background: DEFAULT_BACKGROUND.to_string(),
            background_scroll: DEFAULT_BACKGROUND_SCROLL,
            block_size: DEFAULT_BLOCK_SIZE,
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
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = get_u32(&config, "window", "width") {
            self.window_width = width;
        }
        if let Some(height) = get_u32(&config, "window", "height") {
            self.window_height = height;
        }
        if let Some(fps) = get_u32(&config, "window", "target_fps") {
            self.target_fps = fps.max(1);
        }

        // [player] section
        if let Some(velocity) = config.getfloat("player", "velocity").ok().flatten() {
            self.player_velocity = velocity as f32;
        }
        if let Some(x) = config.getfloat("player", "start_x").ok().flatten() {
            self.player_start_x = x as f32;
        }
        if let Some(y) = config.getfloat("player", "start_y").ok().flatten() {
            self.player_start_y = y as f32;
        }

        // [assets] section
        if let Some(root) = config.get("assets", "root") {
            self.assets_root = PathBuf::from(root);
        }
        if let Some(character) = config.get("assets", "character") {
            self.character = character;
        }
        if let Some(width) = get_u32(&config, "assets", "frame_width") {
            self.frame_width = width;
        }
        if let Some(height) = get_u32(&config, "assets", "frame_height") {
            self.frame_height = height;
        }
        if let Some(background) = config.get("assets", "background") {
            self.background = background;
        }
        if let Some(scroll) = config.getfloat("assets", "background_scroll").ok().flatten() {
            self.background_scroll = scroll as f32;
        }
        if let Some(size) = get_u32(&config, "assets", "block_size") {
            self.block_size = size;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, character={}, frames={}x{}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.character,
            self.frame_width,
            self.frame_height
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [player] section
        config.set("player", "velocity", Some(self.player_velocity.to_string()));
        config.set("player", "start_x", Some(self.player_start_x.to_string()));
        config.set("player", "start_y", Some(self.player_start_y.to_string()));

        // [assets] section
        config.set(
            "assets",
            "root",
            Some(self.assets_root.to_string_lossy().into_owned()),
        );
        config.set("assets", "character", Some(self.character.clone()));
        config.set("assets", "frame_width", Some(self.frame_width.to_string()));
        config.set("assets", "frame_height", Some(self.frame_height.to_string()));
        config.set("assets", "background", Some(self.background.clone()));
        config.set(
            "assets",
            "background_scroll",
            Some(self.background_scroll.to_string()),
        );
        config.set("assets", "block_size", Some(self.block_size.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Seconds per simulation tick.
    pub fn tick_seconds(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

/// Read an unsigned key that must fit in `u32`. Out-of-range values are
/// reported and ignored.
fn get_u32(config: &Ini, section: &str, key: &str) -> Option<u32> {
    let value = config.getuint(section, key).ok().flatten()?;
    match u32::try_from(value) {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("[{section}] {key} = {value} is out of range, keeping the current value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo() {
        let config = GameConfig::new();
        assert_eq!(config.window_size(), (800, 600));
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.player_velocity, 5.0);
        assert_eq!(config.character, "NinjaFrog");
        assert_eq!((config.frame_width, config.frame_height), (32, 32));
        assert_eq!(config.block_size, 96);
    }

    #[test]
    fn missing_file_is_an_error_and_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = GameConfig::with_path(dir.path().join("nope.ini"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.window_size(), (800, 600));
    }

    #[test]
    fn partial_file_overrides_only_present_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(
            &path,
            "[window]\ntarget_fps = 30\n\n[assets]\ncharacter = MaskDude\nbackground_scroll = 2.5\n",
        )
        .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.target_fps, 30);
        assert_eq!(config.character, "MaskDude");
        assert_eq!(config.background_scroll, 2.5);
        assert_eq!(config.window_width, 800);
        assert_eq!(config.frame_width, 32);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");

        let mut original = GameConfig::with_path(&path);
        original.window_width = 1024;
        original.player_velocity = 7.5;
        original.character = "PinkMan".to_string();
        original.block_size = 64;
        original.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn oversized_values_keep_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(
            &path,
            "[window]\nwidth = 4294967296\n\n[assets]\nframe_width = 4294967328\nblock_size = 64\n",
        )
        .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.window_width, 800);
        assert_eq!(config.frame_width, 32);
        assert_eq!(config.block_size, 64);
    }

    #[test]
    fn tick_seconds_follows_fps() {
        let mut config = GameConfig::new();
        config.target_fps = 50;
        assert!((config.tick_seconds() - 0.02).abs() < 1e-6);
    }
}
