//! ECS resources made available to systems.
//!
//! Overview
//! - `background` – tiled, scrolling background layout
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – settings loaded from the INI file
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `screensize` – window dimensions in pixels
//! - `sheetcatalog` – sliced sprite-sheet frames keyed by action and facing
//! - `texturestore` – GPU textures for frames, background and terrain
//! - `worldtime` – tick counter and simulated time
pub mod background;
pub mod debugmode;
pub mod gameconfig;
pub mod input;
pub mod screensize;
pub mod sheetcatalog;
pub mod texturestore;
pub mod worldtime;
