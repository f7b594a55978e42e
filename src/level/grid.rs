//! Level grid
//!
//! A level is a rectangular-ish grid of single characters, one per tile.
//! Recognized symbols:
//!
//! - `#` solid platform
//! - `L` ladder
//! - `P` player spawn (at most one)
//! - `*` double-jump power-up
//! - `E` melee enemy
//! - `F` shooting enemy
//! - `^` spike hazard
//!
//! Any other character is empty space; unrecognized symbols are silently
//! ignored rather than rejected. Rows may differ in length - the world width
//! is the longest row.

use serde::{Deserialize, Serialize};
use crate::game::constants::TILE_SIZE;

pub const SYMBOL_SOLID: char = '#';
pub const SYMBOL_LADDER: char = 'L';
pub const SYMBOL_SPAWN: char = 'P';
pub const SYMBOL_POWERUP: char = '*';
pub const SYMBOL_ENEMY: char = 'E';
pub const SYMBOL_SHOOTER: char = 'F';
pub const SYMBOL_HAZARD: char = '^';

/// The character grid a level is built from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelMap {
    pub rows: Vec<String>,
}

impl LevelMap {
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }

    /// Grid width in tiles (longest row)
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }

    /// Grid height in tiles
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// World width in pixels
    pub fn width_px(&self) -> i32 {
        self.width() as i32 * TILE_SIZE
    }

    /// World height in pixels
    pub fn height_px(&self) -> i32 {
        self.height() as i32 * TILE_SIZE
    }
}

impl Default for LevelMap {
    /// The built-in level, used when no level file is given
    fn default() -> Self {
        Self::new(
            [
                "----------------------------------------------------------------",
                "----------------------------------------------------------------",
                "---------*------------------------------------------------------",
                "--------###----------------------------------------*------------",
                "--------------L#---------------------------------#####----------",
                "--------------L--------###--------------------------------------",
                "--------------L-------------------------------------------------",
                "--------------L----------F--------------------####--------------",
                "-------------####---###------------####-------------------------",
                "----------------------------------------------------F-----------",
                "------L###--------###-------E-----------------------##----------",
                "------L---------------------####--------------------------------",
                "------L---------------F-----------------------------------------",
                "---P--L-----------------E------------#####------------------^^--",
                "################----##############---###########################",
                "################----##############---###########################",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let map = LevelMap::new(vec!["##".into(), "####".into()]);
        assert_eq!(map.width(), 4);
        assert_eq!(map.height(), 2);
        assert_eq!(map.width_px(), 4 * TILE_SIZE);
        assert_eq!(map.height_px(), 2 * TILE_SIZE);
    }

    #[test]
    fn test_empty_map() {
        let map = LevelMap::new(vec![]);
        assert_eq!(map.width(), 0);
        assert_eq!(map.height_px(), 0);
    }

    #[test]
    fn test_default_map_has_one_spawn() {
        let map = LevelMap::default();
        let spawns: usize = map
            .rows
            .iter()
            .map(|r| r.chars().filter(|&c| c == SYMBOL_SPAWN).count())
            .sum();
        assert_eq!(spawns, 1);
    }
}
