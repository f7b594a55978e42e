//! Event System
//!
//! Events allow decoupled communication between game systems.
//! Instead of systems directly calling each other, they send events
//! that other systems can listen to.
//!
//! Example flow:
//! 1. Interaction resolver detects a hit → sends DamageEvent
//! 2. Main loop reads DeathEvent → triggers a reset, which sends a
//!    RespawnEvent the loop then surfaces as a status line
//! 3. The renderer could read the damage queue for hit flashes without
//!    touching the resolver
//!
//! Each system handles its own concern without knowing about the others.

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    /// Check if there are any events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clear all events without processing
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Number of events in queue
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all game events.
/// Add new event types as fields here.
pub struct Events {
    /// Damage dealt to the player
    pub damage: EventQueue<DamageEvent>,

    /// Power-up collected
    pub pickup: EventQueue<PickupEvent>,

    /// Player health reached zero
    pub death: EventQueue<DeathEvent>,

    /// Player respawned at the level spawn
    pub respawn: EventQueue<RespawnEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self {
            damage: EventQueue::new(),
            pickup: EventQueue::new(),
            death: EventQueue::new(),
            respawn: EventQueue::new(),
        }
    }

    /// Clear all event queues. Call at end of frame.
    pub fn clear_all(&mut self) {
        self.damage.clear();
        self.pickup.clear();
        self.death.clear();
        self.respawn.clear();
    }
}

impl Default for Events {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Event Types
// =============================================================================

/// What dealt the damage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSource {
    Enemy,
    Projectile,
    Hazard,
    Fall,
}

/// Damage was dealt to the player
#[derive(Debug, Clone, Copy)]
pub struct DamageEvent {
    /// Amount of damage actually applied
    pub amount: i32,
    /// What dealt it
    pub source: DamageSource,
    /// Player top-left at the moment of the hit
    pub position: (i32, i32),
}

/// A power-up was collected
#[derive(Debug, Clone, Copy)]
pub struct PickupEvent {
    /// Top-left of the collected pickup
    pub position: (i32, i32),
}

/// The player died
#[derive(Debug, Clone, Copy)]
pub struct DeathEvent {
    /// Where they died
    pub position: (i32, i32),
}

/// The player respawned
#[derive(Debug, Clone, Copy)]
pub struct RespawnEvent {
    /// The spawn position used
    pub position: (i32, i32),
}
