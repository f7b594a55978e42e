//! Input sampling
//!
//! The simulation never reads ambient key state: the loop samples the
//! keyboard once per frame into an `InputSample` and passes it down. Edge
//! detection for jump and shrink lives in the player controller, which
//! latches the previous frame's values.
//!
//! Bindings: A/D or arrows to move, W/S or arrows to climb, Space to jump,
//! Left Shift to shrink, R to reset, Escape/Q to quit.

use macroquad::prelude::*;

/// Discrete input signals for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSample {
    /// Horizontal axis: -1 left, 0 idle, +1 right
    pub move_dir: i32,
    /// Climb axis: -1 up, 0 idle, +1 down (sign matches the y axis)
    pub climb_dir: i32,
    /// Jump key held (the controller edge-detects this)
    pub jump: bool,
    /// Shrink key held (the controller edge-detects this)
    pub shrink: bool,
    /// Full level reset requested this frame
    pub reset: bool,
    /// Quit requested this frame
    pub quit: bool,
}

impl InputSample {
    /// No keys held - useful as a simulation input in tests
    pub const NEUTRAL: InputSample = InputSample {
        move_dir: 0,
        climb_dir: 0,
        jump: false,
        shrink: false,
        reset: false,
        quit: false,
    };
}

/// Sample the keyboard into an `InputSample`. Call once per frame.
pub fn sample_keyboard() -> InputSample {
    let mut move_dir = 0;
    if is_key_down(KeyCode::Left) || is_key_down(KeyCode::A) {
        move_dir -= 1;
    }
    if is_key_down(KeyCode::Right) || is_key_down(KeyCode::D) {
        move_dir += 1;
    }

    let mut climb_dir = 0;
    if is_key_down(KeyCode::Up) || is_key_down(KeyCode::W) {
        climb_dir -= 1;
    }
    if is_key_down(KeyCode::Down) || is_key_down(KeyCode::S) {
        climb_dir += 1;
    }

    InputSample {
        move_dir,
        climb_dir,
        jump: is_key_down(KeyCode::Space),
        shrink: is_key_down(KeyCode::LeftShift),
        reset: is_key_pressed(KeyCode::R),
        quit: is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q),
    }
}
