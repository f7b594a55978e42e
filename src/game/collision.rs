//! Axis-separated collision resolution
//!
//! The shared integration primitive for kinematic bodies: displace by
//! `round(velocity * dt)` and resolve penetration against solid tiles one
//! axis at a time, X before Y. Resolving X first lets diagonal corner hits
//! settle consistently; the trade-off is minor tunneling at extreme
//! speed x frame-time, which the tick driver bounds by clamping dt.
//!
//! Ladder tiles never participate here - they are probed separately by the
//! player controller.

use macroquad::math::Vec2;
use crate::level::Tile;
use super::rect::Rect;

/// What happened while resolving one tick of movement
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveResult {
    /// A downward collision occurred this tick (the body is grounded)
    pub landed: bool,
    /// A horizontal collision occurred this tick
    pub hit_wall: bool,
    /// An upward collision occurred this tick
    pub hit_ceiling: bool,
}

/// Move a body and resolve penetration against solid tiles.
///
/// Horizontal pass: after displacement, every overlapping solid clamps the
/// leading edge to the tile and zeroes `vel.x`. Vertical pass: falling clamps
/// the bottom to the tile top (landing), rising clamps the top to the tile
/// bottom. Grounded-ness is recomputed from scratch every tick: it is only
/// reported on ticks where a downward collision actually happened.
///
/// A body with zero velocity is never moved or clamped.
pub fn move_and_collide(rect: &mut Rect, vel: &mut Vec2, solids: &[Tile], dt: f32) -> MoveResult {
    let mut result = MoveResult::default();

    // Horizontal pass
    rect.x += (vel.x * dt).round() as i32;
    for tile in solids {
        if rect.overlaps(&tile.rect) {
            if vel.x > 0.0 {
                rect.set_right(tile.rect.left());
                vel.x = 0.0;
                result.hit_wall = true;
            } else if vel.x < 0.0 {
                rect.set_left(tile.rect.right());
                vel.x = 0.0;
                result.hit_wall = true;
            }
        }
    }

    // Vertical pass
    rect.y += (vel.y * dt).round() as i32;
    for tile in solids {
        if rect.overlaps(&tile.rect) {
            if vel.y > 0.0 {
                rect.set_bottom(tile.rect.top());
                vel.y = 0.0;
                result.landed = true;
            } else if vel.y < 0.0 {
                rect.set_top(tile.rect.bottom());
                vel.y = 0.0;
                result.hit_ceiling = true;
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{Tile, TileKind};

    fn solid(x: i32, y: i32) -> Tile {
        Tile {
            rect: Rect::new(x, y, 48, 48),
            kind: TileKind::Solid,
        }
    }

    #[test]
    fn test_zero_velocity_is_idempotent() {
        // Even a body placed overlapping a solid must not move with vel = 0
        let solids = vec![solid(0, 0), solid(48, 0)];
        let mut rect = Rect::new(20, 10, 40, 56);
        let mut vel = Vec2::ZERO;

        let before = rect;
        let result = move_and_collide(&mut rect, &mut vel, &solids, 1.0 / 60.0);

        assert_eq!(rect, before);
        assert_eq!(vel, Vec2::ZERO);
        assert!(!result.landed && !result.hit_wall && !result.hit_ceiling);
    }

    #[test]
    fn test_falling_lands_on_tile_top() {
        let solids = vec![solid(0, 96)];
        let mut rect = Rect::new(4, 30, 40, 56); // bottom at 86, 10px above tile
        let mut vel = Vec2::new(0.0, 800.0);

        let result = move_and_collide(&mut rect, &mut vel, &solids, 1.0 / 60.0);

        assert!(result.landed);
        assert_eq!(rect.bottom(), 96);
        assert_eq!(vel.y, 0.0);
        assert!(!rect.overlaps(&solids[0].rect));
    }

    #[test]
    fn test_rising_clamps_to_tile_bottom() {
        let solids = vec![solid(0, 0)];
        let mut rect = Rect::new(4, 58, 40, 56); // top 10px below tile bottom
        let mut vel = Vec2::new(0.0, -800.0);

        let result = move_and_collide(&mut rect, &mut vel, &solids, 1.0 / 60.0);

        assert!(result.hit_ceiling);
        assert!(!result.landed);
        assert_eq!(rect.top(), 48);
        assert_eq!(vel.y, 0.0);
    }

    #[test]
    fn test_moving_right_clamps_to_tile_left() {
        let solids = vec![solid(96, 0)];
        let mut rect = Rect::new(40, 0, 40, 56); // right at 80, 16px from tile
        let mut vel = Vec2::new(1800.0, 0.0);

        let result = move_and_collide(&mut rect, &mut vel, &solids, 1.0 / 60.0);

        assert!(result.hit_wall);
        assert_eq!(rect.right(), 96);
        assert_eq!(vel.x, 0.0);
    }

    #[test]
    fn test_moving_left_clamps_to_tile_right() {
        let solids = vec![solid(0, 0)];
        let mut rect = Rect::new(64, 0, 40, 56);
        let mut vel = Vec2::new(-1800.0, 0.0);

        let result = move_and_collide(&mut rect, &mut vel, &solids, 1.0 / 60.0);

        assert!(result.hit_wall);
        assert_eq!(rect.left(), 48);
        assert_eq!(vel.x, 0.0);
    }

    #[test]
    fn test_diagonal_resolves_x_before_y() {
        // Approaching a floor corner diagonally: the X pass pushes the body
        // clear of the tile horizontally, then the Y pass finds no overlap.
        let solids = vec![solid(96, 96)];
        let mut rect = Rect::new(50, 90, 40, 40); // just left of and above tile
        let mut vel = Vec2::new(600.0, 600.0);

        move_and_collide(&mut rect, &mut vel, &solids, 1.0 / 60.0);

        assert!(!rect.overlaps(&solids[0].rect));
    }

    #[test]
    fn test_no_penetration_after_resolution() {
        let solids = vec![solid(0, 96), solid(48, 96), solid(96, 96), solid(96, 48)];
        let mut rect = Rect::new(30, 20, 40, 56);
        let mut vel = Vec2::new(900.0, 900.0);

        for _ in 0..30 {
            move_and_collide(&mut rect, &mut vel, &solids, 1.0 / 60.0);
            for tile in &solids {
                assert!(!rect.overlaps(&tile.rect), "body penetrated {:?}", tile.rect);
            }
            vel = Vec2::new(900.0, 900.0);
        }
    }
}
