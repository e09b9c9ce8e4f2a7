//! NinjaFrog main entry point.
//!
//! A minimal 2D platformer demo written in Rust using:
//! - **raylib** for windowing, graphics, and keyboard input
//! - **bevy_ecs** for entity-component-system architecture
//! - **image** for decoding and slicing sprite sheets
//!
//! # Main Loop
//!
//! 1. Load the INI config, apply CLI overrides
//! 2. Build the [`SheetCatalog`] from `assets/MainCharacters/<character>/`
//! 3. Open the window, upload textures, spawn the player and the floor
//! 4. Run one schedule per tick at the configured rate:
//!    input → controller → movement → background scroll → animation → render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --assets ./assets
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use ninjafrog::events::switchdebug::switch_debug_observer;
use ninjafrog::game;
use ninjafrog::resources::debugmode::DebugMode;
use ninjafrog::resources::gameconfig::GameConfig;
use ninjafrog::resources::input::InputState;
use ninjafrog::resources::screensize::ScreenSize;
use ninjafrog::resources::sheetcatalog::SheetCatalog;
use ninjafrog::resources::worldtime::WorldTime;
use ninjafrog::systems::animation::animation;
use ninjafrog::systems::background::scroll_background;
use ninjafrog::systems::input::update_input_state;
use ninjafrog::systems::inputsimplecontroller::input_simple_controller;
use ninjafrog::systems::movement::movement;
use ninjafrog::systems::render::render_system;
use ninjafrog::systems::time::update_world_time;

/// NinjaFrog platformer demo
#[derive(Parser)]
#[command(version, about = "Sprite-sheet platformer demo")]
struct Cli {
    /// Asset root containing MainCharacters/, Background/ and Terrain/.
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Character directory under MainCharacters/.
    #[arg(long, value_name = "NAME")]
    character: Option<String>,

    /// Print the sheet catalog as JSON and exit.
    #[arg(long)]
    list_sheets: bool,

    /// Start with the debug overlay enabled (toggle with F11).
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::info!("{e}; using default settings");
    }
    if let Some(assets) = cli.assets {
        config.assets_root = assets;
    }
    if let Some(character) = cli.character {
        config.character = character;
    }

    let catalog = match game::build_catalog(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Failed to build sheet catalog: {e}");
            std::process::exit(1);
        }
    };

    // Early-exit: dump the catalog and quit (no window needed)
    if cli.list_sheets {
        match serde_json::to_string_pretty(&catalog.summary()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error serializing catalog: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    // --------------- Raylib window & assets ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title("NinjaFrog")
        .build();
    rl.set_target_fps(config.target_fps);
    rl.set_exit_key(None);

    let (textures, background) = match game::load_assets(&mut rl, &thread, &config, &catalog) {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("Failed to load assets: {e}");
            std::process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    });
    world.insert_resource(InputState::default());
    world.insert_resource(background);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    if let Err(e) = game::spawn_world(&mut world, &config, &catalog) {
        log::error!("Failed to spawn player: {e}");
        std::process::exit(1);
    }
    world.insert_resource(catalog);

    let tick_seconds = config.tick_seconds();
    world.insert_resource(config);
    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(switch_debug_observer));
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(
        (
            update_input_state,
            input_simple_controller,
            movement,
            scroll_background,
            animation,
            render_system,
        )
            .chain(),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    log::info!(
        "Running {} sprite sets at {} ticks per second",
        world.resource::<SheetCatalog>().len(),
        (1.0 / tick_seconds).round()
    );

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        update_world_time(&mut world, tick_seconds);
        update.run(&mut world);
        world.clear_trackers();
    }
}
