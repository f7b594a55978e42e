//! Level geometry builder
//!
//! Turns the character grid into typed geometry and spawn lists, once per
//! level (re)build. Every recognized character maps to exactly one emitted
//! object at `grid_coord * TILE_SIZE`; the builder performs no merging or
//! validation beyond placement. The result is immutable for the lifetime of
//! the level - resets re-copy the spawn lists, they never rebuild geometry.

use crate::game::constants::{ENEMY_SIZE, PLAYER_SIZE, TILE_SIZE};
use crate::game::Rect;
use super::grid::*;

/// Tile classification for collision and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// Blocks movement via axis-separated collision
    Solid,
    /// Non-blocking; enables climbing when engaged
    Ladder,
}

/// One grid cell of level geometry
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    pub rect: Rect,
    pub kind: TileKind,
}

/// Static spawn definition for a shooting enemy
#[derive(Debug, Clone, Copy)]
pub struct ShooterSpawn {
    pub rect: Rect,
    /// Fixed firing direction (+1 right, -1 left), decided at build time
    pub dir: i32,
}

/// Immutable per-level geometry and spawn data
#[derive(Debug, Clone)]
pub struct Level {
    pub solids: Vec<Tile>,
    pub ladders: Vec<Tile>,
    pub powerups: Vec<Rect>,
    pub enemies: Vec<Rect>,
    pub shooters: Vec<ShooterSpawn>,
    pub hazards: Vec<Rect>,
    /// Player spawn position (top-left of the player body)
    pub spawn: (i32, i32),
    pub width_px: i32,
    pub height_px: i32,
}

impl Level {
    /// Build level geometry from a character grid.
    ///
    /// Unknown characters are empty space. A shooter's direction is fixed
    /// for its lifetime: tiles past their row's midpoint fire right, the
    /// rest fire left. The `P` marker places the player with feet on the
    /// marker's row. With no `P`, the spawn falls back to two tiles in from
    /// the top-left corner.
    pub fn build(map: &LevelMap) -> Level {
        let mut level = Level {
            solids: Vec::new(),
            ladders: Vec::new(),
            powerups: Vec::new(),
            enemies: Vec::new(),
            shooters: Vec::new(),
            hazards: Vec::new(),
            spawn: (2 * TILE_SIZE, 2 * TILE_SIZE),
            width_px: map.width_px(),
            height_px: map.height_px(),
        };

        for (gy, row) in map.rows.iter().enumerate() {
            let row_len = row.chars().count();
            for (gx, ch) in row.chars().enumerate() {
                let px = gx as i32 * TILE_SIZE;
                let py = gy as i32 * TILE_SIZE;
                let tile_rect = Rect::new(px, py, TILE_SIZE, TILE_SIZE);

                match ch {
                    SYMBOL_SOLID => level.solids.push(Tile {
                        rect: tile_rect,
                        kind: TileKind::Solid,
                    }),
                    SYMBOL_LADDER => level.ladders.push(Tile {
                        rect: tile_rect,
                        kind: TileKind::Ladder,
                    }),
                    SYMBOL_SPAWN => {
                        // Feet aligned to the marker row
                        level.spawn = (px, py - (PLAYER_SIZE.1 - TILE_SIZE));
                    }
                    SYMBOL_POWERUP => level.powerups.push(tile_rect),
                    SYMBOL_ENEMY => {
                        level.enemies.push(Rect::new(px, py, ENEMY_SIZE.0, ENEMY_SIZE.1));
                    }
                    SYMBOL_SHOOTER => {
                        let dir = if gx > row_len / 2 { 1 } else { -1 };
                        level.shooters.push(ShooterSpawn {
                            rect: Rect::new(px, py, ENEMY_SIZE.0, ENEMY_SIZE.1),
                            dir,
                        });
                    }
                    SYMBOL_HAZARD => level.hazards.push(tile_rect),
                    _ => {} // empty space
                }
            }
        }

        level
    }
}
