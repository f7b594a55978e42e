//! Integer rectangle for the simulation
//!
//! Every physical entity and tile is an axis-aligned box on the pixel grid.
//! Positions are integers: movement adds `round(velocity * dt)` per axis, so
//! collision clamping lands on exact tile edges with no float drift.
//!
//! Overlap is strict - rectangles that merely share an edge do not overlap.

/// An axis-aligned rectangle with integer pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Width and height must be positive
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Left edge
    pub fn left(&self) -> i32 {
        self.x
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Top edge
    pub fn top(&self) -> i32 {
        self.y
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Center X
    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    /// Center Y
    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    /// Move so the left edge sits at `left`
    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    /// Move so the right edge sits at `right`
    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    /// Move so the top edge sits at `top`
    pub fn set_top(&mut self, top: i32) {
        self.y = top;
    }

    /// Move so the bottom edge sits at `bottom`
    pub fn set_bottom(&mut self, bottom: i32) {
        self.y = bottom - self.h;
    }

    /// Strict overlap test: edge contact is not an overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Grow (or shrink, with negative amounts) around the center
    pub fn inflate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x - dx / 2, self.y - dy / 2, self.w + dx, self.h + dy)
    }

    /// Resize keeping the bottom edge and horizontal center fixed
    /// (used by the shrink power so the feet stay planted)
    pub fn resized_anchored_at_feet(&self, w: i32, h: i32) -> Rect {
        Rect::new(self.center_x() - w / 2, self.bottom() - h, w, h)
    }
}
