//! Game Runtime Module
//!
//! The full platformer simulation: deterministic integer-rect physics on a
//! tile grid, a single player controller, stationary enemies, and an
//! event-driven frame loop.
//!
//! Key concepts:
//! - Rect: integer pixel rectangle with strict-overlap semantics
//! - Player: input-driven kinematics, health, and timers
//! - GameWorld: owns the level and all live entities, advanced by `tick`
//! - Events: decoupled communication between systems
//!
//! Design philosophy:
//! - Deterministic per-tick state (same inputs, same run)
//! - Axis-separated collision against immutable level geometry
//! - Simple over flexible (we know what game we're making)

pub mod camera;
pub mod collision;
pub mod constants;
pub mod entities;
pub mod event;
pub mod player;
pub mod rect;
pub mod world;

// Re-export main types
pub use camera::Camera;
pub use event::Events;
pub use player::Player;
pub use rect::Rect;
pub use world::{GameWorld, RenderKind};
