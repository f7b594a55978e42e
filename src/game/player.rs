//! Player controller
//!
//! A layered state machine over one kinematic body: grounded/airborne as the
//! base layer, with on-ladder, shrunk, and invulnerable as orthogonal timed
//! overlays. The controller owns every rule that touches the player body -
//! jump and double-jump gating, ladder engagement and snapping, the shrink
//! power, fall-damage accounting, boundary clamping, and the single
//! `take_damage` path that enemies, hazards, and projectiles go through.
//!
//! The controller reads input only from the `InputSample` handed to
//! `update`; it never polls key state itself.

use macroquad::math::Vec2;
use crate::input::InputSample;
use crate::level::Level;
use super::collision::move_and_collide;
use super::constants::*;
use super::rect::Rect;

/// The player's kinematic and gameplay state.
///
/// Created wholesale at level (re)build and replaced wholesale on reset;
/// no partial state ever survives a reset.
#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub vel: Vec2,
    /// True only on ticks where a downward collision occurred
    pub on_ground: bool,
    /// Last horizontal input direction (+1 right, -1 left)
    pub facing: i32,
    /// Double-jump capability, granted by a power-up for the session
    pub can_double_jump: bool,
    /// Double-jump allowance, consumed per airborne use and replenished
    /// on landing, jumping off a ladder, or picking up the power-up
    pub has_double_jump: bool,
    /// Engaged on a ladder this tick
    pub on_ladder: bool,
    /// Shrink power active
    pub is_small: bool,
    /// Seconds of shrink remaining
    pub shrink_timer: f32,
    pub health: i32,
    pub max_health: i32,
    /// Seconds of invulnerability remaining
    pub invuln_timer: f32,
    /// Where resets and containment recovery place the body
    pub spawn: (i32, i32),
    /// Highest (minimum) y reached while airborne, for fall damage
    last_ground_y: i32,
    /// Previous frame's jump key, for edge detection
    jump_was_pressed: bool,
    /// Previous frame's shrink key, for edge detection
    shrink_was_pressed: bool,
}

impl Player {
    pub fn new(spawn: (i32, i32)) -> Self {
        let rect = Rect::new(spawn.0, spawn.1, PLAYER_SIZE.0, PLAYER_SIZE.1);
        Self {
            rect,
            vel: Vec2::ZERO,
            on_ground: false,
            facing: 1,
            can_double_jump: false,
            has_double_jump: false,
            on_ladder: false,
            is_small: false,
            shrink_timer: 0.0,
            health: MAX_HEALTH,
            max_health: MAX_HEALTH,
            invuln_timer: 0.0,
            spawn,
            last_ground_y: rect.y,
            jump_was_pressed: false,
            shrink_was_pressed: false,
        }
    }

    /// Advance the player by one tick against the level geometry.
    pub fn update(&mut self, dt: f32, level: &Level, input: &InputSample) {
        self.tick_timers(dt, level);
        self.handle_shrink_input(input);
        self.update_ladder_state(level, input);
        self.apply_horizontal_input(dt, input);
        self.handle_jump_input(input);
        self.apply_vertical_motion(dt, level, input);

        let result = move_and_collide(&mut self.rect, &mut self.vel, &level.solids, dt);
        self.on_ground = result.landed;
        if result.landed {
            self.has_double_jump = self.can_double_jump;
        }

        self.account_fall_damage(result.landed);
        self.clamp_to_world(level);

        self.jump_was_pressed = input.jump;
        self.shrink_was_pressed = input.shrink;
    }

    /// The only path by which combat sources affect the player: no-op while
    /// invulnerable or already dead; otherwise subtracts damage (floored at
    /// zero), overwrites velocity with the knockback, and opens the
    /// invulnerability window. Returns whether the damage landed.
    pub fn take_damage(&mut self, amount: i32, knockback: Vec2) -> bool {
        if self.invuln_timer > 0.0 || self.health <= 0 {
            return false;
        }
        self.health = (self.health - amount).max(0);
        self.vel = knockback;
        self.invuln_timer = INVULN_DURATION;
        true
    }

    // =========================================================================
    // Per-tick phases
    // =========================================================================

    fn tick_timers(&mut self, dt: f32, level: &Level) {
        if self.invuln_timer > 0.0 {
            self.invuln_timer -= dt;
        }
        if self.is_small {
            self.shrink_timer -= dt;
            if self.shrink_timer <= 0.0 {
                self.end_shrink(level);
            }
        }
    }

    /// Restore normal size with the feet planted. If the larger body now
    /// overlaps solid geometry, containment has failed: recover by
    /// teleporting to spawn with zero velocity and full health.
    fn end_shrink(&mut self, level: &Level) {
        self.is_small = false;
        self.shrink_timer = 0.0;
        self.rect = self.rect.resized_anchored_at_feet(PLAYER_SIZE.0, PLAYER_SIZE.1);

        let stuck = level.solids.iter().any(|t| self.rect.overlaps(&t.rect));
        if stuck {
            self.rect = Rect::new(self.spawn.0, self.spawn.1, PLAYER_SIZE.0, PLAYER_SIZE.1);
            self.vel = Vec2::ZERO;
            self.health = self.max_health;
            self.on_ladder = false;
            self.last_ground_y = self.rect.y;
        }
    }

    fn handle_shrink_input(&mut self, input: &InputSample) {
        let shrink_edge = input.shrink && !self.shrink_was_pressed;
        if shrink_edge && !self.is_small {
            self.is_small = true;
            self.shrink_timer = SHRINK_DURATION;
            self.rect = self
                .rect
                .resized_anchored_at_feet(PLAYER_SMALL_SIZE.0, PLAYER_SMALL_SIZE.1);
        }
    }

    /// Ladder engagement is input-gated: it takes both overlap (probed with
    /// a horizontally inflated body) and a held climb input to engage. Once
    /// engaged, the state persists while the overlap lasts.
    fn update_ladder_state(&mut self, level: &Level, input: &InputSample) {
        let probe = self.rect.inflate(LADDER_PROBE_INFLATE, 0);
        let touching = level.ladders.iter().any(|t| probe.overlaps(&t.rect));
        if touching {
            if !self.on_ladder && input.climb_dir != 0 {
                self.on_ladder = true;
            }
        } else {
            self.on_ladder = false;
        }
    }

    fn apply_horizontal_input(&mut self, dt: f32, input: &InputSample) {
        let mut target = MOVE_SPEED * input.move_dir as f32;
        if !self.on_ground && !self.on_ladder {
            target *= AIR_CONTROL;
        }

        // Snap exactly to the target when within one tick of acceleration,
        // otherwise low frame rates oscillate around it forever
        let gap = target - self.vel.x;
        if gap.abs() < MOVE_ACCEL * dt {
            self.vel.x = target;
        } else {
            self.vel.x += MOVE_ACCEL * dt * gap.signum();
        }

        if input.move_dir != 0 {
            self.facing = input.move_dir.signum();
        }
    }

    /// Jumps are edge-triggered: the key must transition from released to
    /// pressed within the tick, so holding it never repeat-jumps.
    fn handle_jump_input(&mut self, input: &InputSample) {
        let jump_edge = input.jump && !self.jump_was_pressed;
        if !jump_edge {
            return;
        }

        if self.on_ground || self.on_ladder {
            self.vel.y = JUMP_VELOCITY;
            self.on_ground = false;
            self.on_ladder = false;
            self.has_double_jump = self.can_double_jump;
        } else if self.has_double_jump {
            self.vel.y = JUMP_VELOCITY;
            self.has_double_jump = false;
        }
    }

    fn apply_vertical_motion(&mut self, dt: f32, level: &Level, input: &InputSample) {
        if self.on_ladder {
            // Climbing overrides gravity entirely; zero input holds position
            self.vel.y = CLIMB_SPEED * input.climb_dir as f32;

            // Snapping assist: pull the body toward the ladder's center
            if let Some(ladder) = level.ladders.iter().find(|t| self.rect.overlaps(&t.rect)) {
                let delta = (ladder.rect.center_x() - self.rect.center_x()) as f32;
                self.rect.x += (delta * LADDER_SNAP_FACTOR).round() as i32;
            }
        } else {
            self.vel.y += GRAVITY * dt;
            self.vel.y = self.vel.y.min(MAX_FALL_SPEED);
        }
    }

    /// Track the highest point reached while airborne and convert the net
    /// drop into damage on landing. Fall damage hits health directly: no
    /// knockback, and it ignores the invulnerability window.
    fn account_fall_damage(&mut self, landed: bool) {
        if landed {
            let drop = self.rect.y - self.last_ground_y;
            if drop > FALL_DAMAGE_THRESHOLD {
                let damage = (drop - FALL_DAMAGE_THRESHOLD) / FALL_DAMAGE_PER_PX;
                self.health = (self.health - damage).max(0);
            }
            self.last_ground_y = self.rect.y;
        } else if self.on_ladder {
            // A ladder counts as support: dismounting one is not a fall
            self.last_ground_y = self.rect.y;
        } else {
            self.last_ground_y = self.last_ground_y.min(self.rect.y);
        }
    }

    fn clamp_to_world(&mut self, level: &Level) {
        if self.rect.left() < 0 {
            self.rect.set_left(0);
            self.vel.x = 0.0;
        }
        if self.rect.right() > level.width_px {
            self.rect.set_right(level.width_px);
            self.vel.x = 0.0;
        }
        if self.rect.top() < 0 {
            self.rect.set_top(0);
            self.vel.y = 0.0;
        }

        // Falling out of the world is lethal; the outer loop treats zero
        // health as a death requiring a full reset
        if self.rect.top() > level.height_px {
            self.health = 0;
        }
    }
}
