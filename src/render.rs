//! Stateless world renderer
//!
//! Draws the world each frame from `GameWorld::render_list`, offset by the
//! camera. Purely a view: no render state survives between frames, and
//! nothing here mutates the simulation.

use macroquad::prelude::*;

use crate::game::camera::Camera;
use crate::game::{GameWorld, RenderKind};

const BG_COLOR: Color = Color::new(0.11, 0.11, 0.16, 1.0);
const FG_COLOR: Color = Color::new(0.90, 0.90, 0.90, 1.0);
const ACCENT: Color = Color::new(0.47, 0.71, 1.00, 1.0);
const PLATFORM_COLOR: Color = Color::new(0.27, 0.47, 0.63, 1.0);
const LADDER_COLOR: Color = Color::new(0.59, 0.29, 0.00, 1.0);
const ENEMY_COLOR: Color = Color::new(1.00, 0.20, 0.20, 1.0);
const SHOOTER_COLOR: Color = Color::new(1.00, 0.59, 0.00, 1.0);
const PROJECTILE_COLOR: Color = Color::new(1.00, 0.39, 0.00, 1.0);
const POWERUP_COLOR: Color = Color::new(0.58, 0.44, 0.86, 1.0);
const HAZARD_COLOR: Color = Color::new(0.78, 0.24, 0.24, 1.0);
const INVULN_COLOR: Color = Color::new(0.78, 0.78, 0.78, 1.0);
const HUD_TEXT: Color = Color::new(0.78, 0.78, 0.82, 1.0);

pub fn clear_frame() {
    clear_background(BG_COLOR);
}

/// Draw the whole world, camera-relative
pub fn draw_world(world: &GameWorld, cam: &Camera) {
    for (rect, kind) in world.render_list() {
        let x = rect.x as f32 - cam.x;
        let y = rect.y as f32 - cam.y;
        let w = rect.w as f32;
        let h = rect.h as f32;

        match kind {
            RenderKind::Solid => draw_rectangle(x, y, w, h, PLATFORM_COLOR),
            RenderKind::Ladder => draw_rectangle(x, y, w, h, LADDER_COLOR),
            RenderKind::Hazard => draw_rectangle(x, y, w, h, HAZARD_COLOR),
            RenderKind::Powerup => {
                draw_circle(x + w / 2.0, y + h / 2.0, w.min(h) / 2.0, POWERUP_COLOR)
            }
            RenderKind::Enemy => draw_rectangle(x, y, w, h, ENEMY_COLOR),
            RenderKind::Shooter => draw_rectangle(x, y, w, h, SHOOTER_COLOR),
            RenderKind::Projectile => {
                draw_circle(x + w / 2.0, y + h / 2.0, w / 2.0, PROJECTILE_COLOR)
            }
            RenderKind::Player => {
                let color = if world.player.invuln_timer > 0.0 {
                    INVULN_COLOR
                } else {
                    FG_COLOR
                };
                draw_rectangle(x, y, w, h, color);
                // Facing eye
                let eye_x = if world.player.facing > 0 {
                    x + w - 10.0
                } else {
                    x + 4.0
                };
                draw_rectangle(eye_x, y + h / 3.0, 6.0, 8.0, ACCENT);
            }
        }
    }
}

/// Screen-space HUD: controls, FPS, and the health bar
pub fn draw_hud(world: &GameWorld) {
    let pad = 10.0;
    let info = [
        format!("FPS: {}", get_fps()),
        "Move: arrows/AD   Climb: arrows/WS   Jump: Space".to_string(),
        "Shrink: LShift   Reset: R   Quit: Esc or Q".to_string(),
    ];
    for (i, line) in info.iter().enumerate() {
        draw_text(line, pad, pad + 14.0 + i as f32 * 18.0, 16.0, HUD_TEXT);
    }

    let bar_w = 200.0;
    let bar_h = 20.0;
    let bx = pad;
    let by = pad + info.len() as f32 * 18.0 + 5.0;
    let ratio = (world.player.health.max(0) as f32) / world.player.max_health as f32;
    draw_rectangle(bx, by, bar_w, bar_h, Color::new(0.39, 0.0, 0.0, 1.0));
    draw_rectangle(bx, by, bar_w * ratio, bar_h, RED);
    draw_rectangle_lines(bx, by, bar_w, bar_h, 2.0, WHITE);
}
