//! Runtime entities: enemies, shooters, projectiles, power-ups, hazards
//!
//! These carry only the mutable per-run state. Static placement comes from
//! the level's spawn lists; a reset rebuilds every entity from those lists
//! in one step. Contact resolution lives in the world, not here.

use macroquad::prelude::*;

use super::constants::{
    ENEMY_KNOCKBACK_X, ENEMY_KNOCKBACK_Y, PROJECTILE_SIZE, PROJECTILE_SPEED, SHOOT_INTERVAL,
};
use super::rect::Rect;

/// Stationary contact-damage enemy
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    pub rect: Rect,
}

impl Enemy {
    pub fn new(rect: Rect) -> Enemy {
        Enemy { rect }
    }
}

/// Stationary enemy that fires projectiles on a fixed cadence
#[derive(Debug, Clone, Copy)]
pub struct Shooter {
    pub rect: Rect,
    /// Firing direction, fixed at level build (+1 right, -1 left)
    pub dir: i32,
    timer: f32,
}

impl Shooter {
    pub fn new(rect: Rect, dir: i32) -> Shooter {
        Shooter { rect, dir, timer: 0.0 }
    }

    /// Advance the shoot timer; returns a projectile when the interval
    /// elapses. The timer resets rather than accumulating remainder, so a
    /// long frame fires at most once.
    pub fn update(&mut self, dt: f32) -> Option<Projectile> {
        self.timer += dt;
        if self.timer >= SHOOT_INTERVAL {
            self.timer = 0.0;
            Some(Projectile::new(
                self.rect.center_x(),
                self.rect.center_y(),
                self.dir,
            ))
        } else {
            None
        }
    }
}

/// Projectile travelling diagonally down-and-across until it hits the
/// player or leaves the bottom of the world
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub rect: Rect,
    pub dir: i32,
}

impl Projectile {
    /// Spawn centered on the given point
    pub fn new(cx: i32, cy: i32, dir: i32) -> Projectile {
        Projectile {
            rect: Rect::new(
                cx - PROJECTILE_SIZE.0 / 2,
                cy - PROJECTILE_SIZE.1 / 2,
                PROJECTILE_SIZE.0,
                PROJECTILE_SIZE.1,
            ),
            dir,
        }
    }

    /// Constant-velocity diagonal motion; projectiles ignore level geometry
    pub fn update(&mut self, dt: f32) {
        self.rect.x += (PROJECTILE_SPEED * self.dir as f32 * dt).round() as i32;
        self.rect.y += (PROJECTILE_SPEED * dt).round() as i32;
    }

    /// Knockback pushes the player opposite to the projectile's travel
    pub fn knockback(&self) -> Vec2 {
        let kx = if self.dir < 0 {
            ENEMY_KNOCKBACK_X
        } else {
            -ENEMY_KNOCKBACK_X
        };
        Vec2::new(kx, ENEMY_KNOCKBACK_Y)
    }
}

/// Double-jump power-up pickup
#[derive(Debug, Clone, Copy)]
pub struct Powerup {
    pub rect: Rect,
}

impl Powerup {
    pub fn new(rect: Rect) -> Powerup {
        Powerup { rect }
    }
}

/// Static damage tile (spikes)
#[derive(Debug, Clone, Copy)]
pub struct Hazard {
    pub rect: Rect,
}

impl Hazard {
    pub fn new(rect: Rect) -> Hazard {
        Hazard { rect }
    }
}
