//! Simulation tuning constants
//!
//! All physics values are in pixels and seconds. The sim targets a 60 Hz
//! tick but integrates whatever delta-time the loop hands it.

/// Edge length of one level tile in pixels
pub const TILE_SIZE: i32 = 48;

/// Downward acceleration (px/s^2)
pub const GRAVITY: f32 = 2000.0;
/// Terminal fall speed (px/s)
pub const MAX_FALL_SPEED: f32 = 2000.0;
/// Horizontal target speed at full input (px/s)
pub const MOVE_SPEED: f32 = 300.0;
/// Horizontal acceleration toward the target speed (px/s^2)
pub const MOVE_ACCEL: f32 = 5000.0;
/// Fraction of MOVE_SPEED available while airborne
pub const AIR_CONTROL: f32 = 0.65;
/// Initial jump velocity (negative = up)
pub const JUMP_VELOCITY: f32 = -800.0;
/// Forced climb speed while engaged on a ladder (px/s)
pub const CLIMB_SPEED: f32 = 150.0;
/// Per-tick interpolation factor pulling the player toward a ladder's center
pub const LADDER_SNAP_FACTOR: f32 = 0.2;
/// Horizontal inflation of the ladder probe rectangle (px)
pub const LADDER_PROBE_INFLATE: i32 = 6;

/// Player body size at normal scale (w, h)
pub const PLAYER_SIZE: (i32, i32) = (40, 56);
/// Player body size while the shrink power is active
pub const PLAYER_SMALL_SIZE: (i32, i32) = (20, 28);
/// How long the shrink power lasts (s)
pub const SHRINK_DURATION: f32 = 5.0;

pub const MAX_HEALTH: i32 = 100;
/// Invulnerability window after taking combat damage (s)
pub const INVULN_DURATION: f32 = 0.5;
/// Net drop beyond which a landing starts hurting (px)
pub const FALL_DAMAGE_THRESHOLD: i32 = 300;
/// One point of fall damage per this many pixels of excess drop
pub const FALL_DAMAGE_PER_PX: i32 = 50;

/// Enemy body size (w, h)
pub const ENEMY_SIZE: (i32, i32) = (36, 36);
/// Contact damage from melee and shooting enemies
pub const ENEMY_DAMAGE: i32 = 10;
/// Horizontal knockback speed from enemy contact (px/s)
pub const ENEMY_KNOCKBACK_X: f32 = 300.0;
/// Vertical knockback speed from enemy contact (negative = up)
pub const ENEMY_KNOCKBACK_Y: f32 = -400.0;

/// Seconds between shots from a shooting enemy
pub const SHOOT_INTERVAL: f32 = 2.0;
/// Projectile speed per axis (moves diagonally: sideways and down)
pub const PROJECTILE_SPEED: f32 = 300.0;
pub const PROJECTILE_SIZE: (i32, i32) = (12, 12);

/// Contact damage from a spike hazard
pub const HAZARD_DAMAGE: i32 = 20;
/// Fixed upward knockback off a spike (px/s)
pub const HAZARD_KNOCKBACK_Y: f32 = -500.0;

/// Power-up pickup suppression window after a level (re)build (s)
pub const SPAWN_GRACE: f32 = 0.15;

/// Upper bound on a single integration step (s); a stalled frame must not
/// let the two-pass resolver tunnel through geometry
pub const MAX_TICK_DT: f32 = 0.05;
