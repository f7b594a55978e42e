//! BRAMBLE: a tile-based 2D platformer
//!
//! Deterministic integer-rect physics on a 48px tile grid:
//! - Axis-separated collision (X pass, then Y pass)
//! - Ladders, double jump, shrink, fall damage
//! - Stationary enemies, shooters with diagonal projectiles, spike hazards
//! - Levels loaded from RON character grids, with a built-in fallback

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod game;
mod input;
mod level;
mod render;

use macroquad::prelude::*;

use game::{Camera, GameWorld};
use input::sample_keyboard;
use level::{load_level_map, LevelMap};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("BRAMBLE v{}", VERSION),
        window_width: 960,
        window_height: 540,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Level from the first CLI argument, or the built-in map
fn resolve_level_map() -> LevelMap {
    match std::env::args().nth(1) {
        Some(path) => match load_level_map(&path) {
            Ok(map) => {
                println!("Loaded level: {}", path);
                map
            }
            Err(e) => {
                eprintln!("Failed to load {}: {}", path, e);
                println!("Using the built-in level instead");
                LevelMap::default()
            }
        },
        None => {
            println!("No level file given, using the built-in level");
            LevelMap::default()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let map = resolve_level_map();

    let mut world = GameWorld::new(&map);
    let mut camera = Camera::new(screen_width(), screen_height());

    loop {
        let dt = get_frame_time();
        let input = sample_keyboard();

        if input.quit {
            break;
        }
        if input.reset {
            println!("Manual reset");
            world.reset();
        }

        world.tick(dt, &input);

        for pickup in world.events.pickup.drain() {
            println!("Power-up collected at {:?}", pickup.position);
        }
        let died = world.events.death.iter().next().copied();
        if let Some(death) = died {
            println!("Player died at {:?}", death.position);
            world.reset();
        }
        for respawn in world.events.respawn.drain() {
            println!("Respawned at {:?}", respawn.position);
        }
        world.events.clear_all();

        // Track window resizes
        camera.view_w = screen_width();
        camera.view_h = screen_height();
        camera.update(&world.player.rect, world.level.width_px, world.level.height_px);

        render::clear_frame();
        render::draw_world(&world, &camera);
        render::draw_hud(&world);

        next_frame().await;
    }
}
