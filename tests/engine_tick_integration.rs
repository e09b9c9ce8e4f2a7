//! Engine tick integration tests for input, movement, and animation.

use bevy_ecs::prelude::*;
use image::{Rgba, RgbaImage};

use ninjafrog::components::animation::{
    Action, AnimationCursor, AnimationKey, CHARACTER_KEYS, Facing,
};
use ninjafrog::components::inputcontrolled::InputControlled;
use ninjafrog::components::mapposition::MapPosition;
use ninjafrog::components::rigidbody::RigidBody;
use ninjafrog::components::sprite::{Sprite, SpriteSource};
use ninjafrog::error::AssetError;
use ninjafrog::resources::background::{BACKGROUND_TEX_KEY, Background};
use ninjafrog::resources::input::InputState;
use ninjafrog::resources::sheetcatalog::SheetCatalog;
use ninjafrog::resources::worldtime::WorldTime;
use ninjafrog::systems::animation::animation;
use ninjafrog::systems::background::scroll_background;
use ninjafrog::systems::inputsimplecontroller::input_simple_controller;
use ninjafrog::systems::movement::movement;
use ninjafrog::systems::time::update_world_time;

const IDLE_FRAMES: u32 = 11;
const RUN_FRAMES: u32 = 12;

fn sheet(frames: u32) -> RgbaImage {
    RgbaImage::from_fn(frames * 32, 32, |x, y| {
        Rgba([(x % 32) as u8, y as u8, (x / 32) as u8, 255])
    })
}

fn catalog_with(run: bool) -> SheetCatalog {
    let mut catalog = SheetCatalog::new();
    catalog
        .insert_sheet(Action::Idle, &sheet(IDLE_FRAMES), 32, 32, true)
        .unwrap();
    if run {
        catalog
            .insert_sheet(Action::Run, &sheet(RUN_FRAMES), 32, 32, true)
            .unwrap();
    }
    catalog
}

fn make_world(catalog: SheetCatalog) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(catalog);
    world
}

fn spawn_player(world: &mut World) -> Entity {
    let cursor = AnimationCursor::default();
    let key = cursor.key();
    world
        .spawn((
            MapPosition::new(50.0, 50.0),
            RigidBody::new(),
            InputControlled::horizontal(5.0),
            cursor,
            Sprite::frame(key, 64.0, 64.0),
        ))
        .id()
}

fn tick(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((input_simple_controller, movement, animation).chain());
    update_world_time(world, 1.0 / 60.0);
    schedule.run(world);
}

fn hold(world: &mut World, left: bool, right: bool) {
    let mut input = world.resource_mut::<InputState>();
    input.move_left.active = left;
    input.move_right.active = right;
}

fn shown_frame(world: &World, entity: Entity) -> (AnimationKey, usize) {
    match &world.get::<Sprite>(entity).unwrap().source {
        SpriteSource::Frame { key, index } => (*key, *index),
        other => panic!("unexpected sprite source {other:?}"),
    }
}

#[test]
fn idle_player_cycles_idle_left_frames() {
    let mut world = make_world(catalog_with(true));
    let player = spawn_player(&mut world);
    let idle_left = AnimationKey::directed(Action::Idle, Facing::Left);

    for t in 0..(4 * IDLE_FRAMES as usize + 1) {
        tick(&mut world);
        assert_eq!(shown_frame(&world, player), (idle_left, (t / 4) % 11));
    }

    let pos = world.get::<MapPosition>(player).unwrap();
    assert_eq!((pos.pos.x, pos.pos.y), (50.0, 50.0));
    assert_eq!(world.resource::<WorldTime>().ticks, 45);
}

#[test]
fn holding_right_runs_right_from_frame_zero() {
    let mut world = make_world(catalog_with(true));
    let player = spawn_player(&mut world);

    for _ in 0..6 {
        tick(&mut world);
    }

    hold(&mut world, false, true);
    tick(&mut world);

    let run_right = AnimationKey::directed(Action::Run, Facing::Right);
    assert_eq!(shown_frame(&world, player), (run_right, 0));
    assert_eq!(world.get::<AnimationCursor>(player).unwrap().elapsed_ticks, 1);
    assert_eq!(world.get::<MapPosition>(player).unwrap().pos.x, 55.0);

    for _ in 0..4 {
        tick(&mut world);
    }
    assert_eq!(shown_frame(&world, player), (run_right, 1));
    assert_eq!(world.get::<MapPosition>(player).unwrap().pos.x, 75.0);
}

#[test]
fn reversing_direction_rewinds_animation() {
    let mut world = make_world(catalog_with(true));
    let player = spawn_player(&mut world);

    hold(&mut world, false, true);
    for _ in 0..10 {
        tick(&mut world);
    }
    assert_eq!(
        shown_frame(&world, player),
        (AnimationKey::directed(Action::Run, Facing::Right), 2)
    );

    hold(&mut world, true, false);
    tick(&mut world);
    assert_eq!(
        shown_frame(&world, player),
        (AnimationKey::directed(Action::Run, Facing::Left), 0)
    );
    assert_eq!(world.get::<MapPosition>(player).unwrap().pos.x, 95.0);
}

#[test]
fn releasing_keys_idles_facing_last_direction() {
    let mut world = make_world(catalog_with(true));
    let player = spawn_player(&mut world);

    hold(&mut world, false, true);
    for _ in 0..7 {
        tick(&mut world);
    }
    hold(&mut world, false, false);
    tick(&mut world);

    assert_eq!(
        shown_frame(&world, player),
        (AnimationKey::directed(Action::Idle, Facing::Right), 0)
    );
    let rb = world.get::<RigidBody>(player).unwrap();
    assert_eq!(rb.velocity.x, 0.0);
}

#[test]
fn both_keys_held_moves_right() {
    let mut world = make_world(catalog_with(true));
    let player = spawn_player(&mut world);

    hold(&mut world, true, true);
    tick(&mut world);

    assert_eq!(world.get::<RigidBody>(player).unwrap().velocity.x, 5.0);
    assert_eq!(
        world.get::<AnimationCursor>(player).unwrap().facing,
        Facing::Right
    );
}

#[test]
fn catalog_without_run_sheet_lacks_character_keys() {
    let catalog = catalog_with(false);
    assert!(matches!(
        catalog.require(&CHARACTER_KEYS),
        Err(AssetError::UnknownAnimationKey(key))
            if key == AnimationKey::directed(Action::Run, Facing::Left)
    ));
    assert!(catalog_with(true).require(&CHARACTER_KEYS).is_ok());
}

#[test]
fn background_scrolls_once_per_tick() {
    let mut world = World::new();
    world.insert_resource(Background::new(BACKGROUND_TEX_KEY, 64, 64, 800, 600, 20.0));

    let mut schedule = Schedule::default();
    schedule.add_systems(scroll_background);
    for _ in 0..4 {
        schedule.run(&mut world);
    }

    assert_eq!(world.resource::<Background>().scroll, 16.0);
}
