//! Margin-follow camera
//!
//! The camera holds still while the player's center stays inside an inner
//! window, then tracks exactly as fast as needed to keep the center on the
//! window's edge. The view never shows space outside the world on the
//! left, right, or bottom; worlds smaller than the view pin to the origin.

use super::rect::Rect;

/// Fraction of the view width kept between the player and either side edge
const MARGIN_X: f32 = 0.35;
/// Fraction of the view height kept between the player and the top or bottom
const MARGIN_Y: f32 = 0.4;

#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// World-space position of the view's top-left corner
    pub x: f32,
    pub y: f32,
    pub view_w: f32,
    pub view_h: f32,
}

impl Camera {
    pub fn new(view_w: f32, view_h: f32) -> Camera {
        Camera {
            x: 0.0,
            y: 0.0,
            view_w,
            view_h,
        }
    }

    /// Track the target's center, then clamp to the world bounds
    pub fn update(&mut self, target: &Rect, world_w: i32, world_h: i32) {
        let cx = target.center_x() as f32;
        let cy = target.center_y() as f32;

        let margin_x = self.view_w * MARGIN_X;
        let margin_y = self.view_h * MARGIN_Y;

        if cx - self.x < margin_x {
            self.x = cx - margin_x;
        } else if cx - self.x > self.view_w - margin_x {
            self.x = cx - (self.view_w - margin_x);
        }

        if cy - self.y < margin_y {
            self.y = cy - margin_y;
        } else if cy - self.y > self.view_h - margin_y {
            self.y = cy - (self.view_h - margin_y);
        }

        self.x = self.x.clamp(0.0, (world_w as f32 - self.view_w).max(0.0));
        self.y = self.y.clamp(0.0, (world_h as f32 - self.view_h).max(0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW_W: f32 = 960.0;
    const VIEW_H: f32 = 540.0;
    const WORLD_W: i32 = 3072;
    const WORLD_H: i32 = 1536;

    fn target_at(cx: i32, cy: i32) -> Rect {
        Rect::new(cx - 20, cy - 28, 40, 56)
    }

    #[test]
    fn test_holds_still_inside_margins() {
        let mut cam = Camera::new(VIEW_W, VIEW_H);
        cam.x = 500.0;
        cam.y = 300.0;

        // Dead center of the view
        cam.update(&target_at(500 + 480, 300 + 270), WORLD_W, WORLD_H);
        assert_eq!((cam.x, cam.y), (500.0, 300.0));
    }

    #[test]
    fn test_tracks_past_right_margin() {
        let mut cam = Camera::new(VIEW_W, VIEW_H);
        cam.x = 0.0;

        // Past the right edge of the inner window
        let cx = (VIEW_W * (1.0 - 0.35)) as i32 + 100;
        cam.update(&target_at(cx, 270), WORLD_W, WORLD_H);
        assert!((cam.x - 100.0).abs() < 1.0);
    }

    #[test]
    fn test_tracks_past_left_margin() {
        let mut cam = Camera::new(VIEW_W, VIEW_H);
        cam.x = 1000.0;

        let cx = 1000 + 50; // well inside the left margin band
        cam.update(&target_at(cx, 270), WORLD_W, WORLD_H);
        assert!((cam.x - (cx as f32 - VIEW_W * 0.35)).abs() < 1.0);
    }

    #[test]
    fn test_clamped_to_world_edges() {
        let mut cam = Camera::new(VIEW_W, VIEW_H);

        cam.update(&target_at(0, 0), WORLD_W, WORLD_H);
        assert_eq!((cam.x, cam.y), (0.0, 0.0));

        cam.update(&target_at(WORLD_W, WORLD_H), WORLD_W, WORLD_H);
        assert_eq!(cam.x, WORLD_W as f32 - VIEW_W);
        assert_eq!(cam.y, WORLD_H as f32 - VIEW_H);
    }

    #[test]
    fn test_small_world_pins_to_origin() {
        let mut cam = Camera::new(VIEW_W, VIEW_H);
        cam.update(&target_at(400, 100), 480, 240);
        assert_eq!((cam.x, cam.y), (0.0, 0.0));
    }
}
