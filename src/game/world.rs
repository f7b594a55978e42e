//! Game world: owns the level, the player, and every live entity
//!
//! `tick` advances one frame: clamp dt, run the player controller, then
//! resolve interactions in a fixed order (power-ups, melee enemies,
//! shooters, hazards, projectiles). Resets rebuild all entities from the
//! level's spawn lists in one step, so a reset can never leave a stale
//! entity behind.

use macroquad::prelude::*;

use crate::input::InputSample;
use crate::level::{Level, LevelMap};
use super::constants::{
    ENEMY_DAMAGE, ENEMY_KNOCKBACK_X, ENEMY_KNOCKBACK_Y, HAZARD_DAMAGE, HAZARD_KNOCKBACK_Y,
    MAX_TICK_DT, SPAWN_GRACE,
};
use super::entities::{Enemy, Hazard, Powerup, Projectile, Shooter};
use super::event::{DamageEvent, DamageSource, DeathEvent, Events, PickupEvent, RespawnEvent};
use super::player::Player;
use super::rect::Rect;

/// What a drawable rectangle represents, for the renderer's palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind {
    Solid,
    Ladder,
    Powerup,
    Enemy,
    Shooter,
    Projectile,
    Hazard,
    Player,
}

/// The full simulation state for one level
pub struct GameWorld {
    pub level: Level,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub shooters: Vec<Shooter>,
    pub projectiles: Vec<Projectile>,
    pub powerups: Vec<Powerup>,
    pub hazards: Vec<Hazard>,
    /// Seconds of post-spawn grace left; pickups are inert while positive
    pub spawn_grace: f32,
    pub events: Events,
}

impl GameWorld {
    pub fn new(map: &LevelMap) -> GameWorld {
        let level = Level::build(map);
        let mut world = GameWorld {
            player: Player::new(level.spawn),
            enemies: Vec::new(),
            shooters: Vec::new(),
            projectiles: Vec::new(),
            powerups: Vec::new(),
            hazards: Vec::new(),
            spawn_grace: 0.0,
            events: Events::new(),
            level,
        };
        world.reset();
        world
    }

    /// Restore the level to its initial runtime state: fresh player at the
    /// spawn, all entities rebuilt from the level's spawn lists, no live
    /// projectiles. Double jump is revoked; the power-up must be collected
    /// again each run.
    pub fn reset(&mut self) {
        self.player = Player::new(self.level.spawn);
        self.enemies = self.level.enemies.iter().map(|&r| Enemy::new(r)).collect();
        self.shooters = self
            .level
            .shooters
            .iter()
            .map(|s| Shooter::new(s.rect, s.dir))
            .collect();
        self.projectiles = Vec::new();
        self.powerups = self.level.powerups.iter().map(|&r| Powerup::new(r)).collect();
        self.hazards = self.level.hazards.iter().map(|&r| Hazard::new(r)).collect();
        self.spawn_grace = SPAWN_GRACE;
        self.events.respawn.send(RespawnEvent {
            position: self.level.spawn,
        });
    }

    /// Advance the simulation by one frame
    pub fn tick(&mut self, dt: f32, input: &InputSample) {
        // A stall (window drag, debugger) must not become a physics step
        let dt = dt.min(MAX_TICK_DT);

        if self.spawn_grace > 0.0 {
            self.spawn_grace -= dt;
        }

        let health_before = self.player.health;
        self.player.update(dt, &self.level, input);

        // The controller applies fall and out-of-bounds damage internally;
        // surface it on the same queue as contact damage
        if self.player.health < health_before {
            self.events.damage.send(DamageEvent {
                amount: health_before - self.player.health,
                source: DamageSource::Fall,
                position: (self.player.rect.x, self.player.rect.y),
            });
        }

        self.resolve_interactions(dt);

        if health_before > 0 && self.player.health <= 0 {
            self.events.death.send(DeathEvent {
                position: (self.player.rect.x, self.player.rect.y),
            });
        }
    }

    /// Contact resolution in a fixed order: power-ups, melee enemies,
    /// shooters, hazards, projectiles. Invulnerability makes the order
    /// mostly invisible, but a deterministic order keeps runs reproducible.
    fn resolve_interactions(&mut self, dt: f32) {
        let Self {
            player,
            enemies,
            shooters,
            projectiles,
            powerups,
            hazards,
            spawn_grace,
            events,
            level,
        } = self;

        powerups.retain(|p| {
            if *spawn_grace <= 0.0 && p.rect.overlaps(&player.rect) {
                player.can_double_jump = true;
                player.has_double_jump = true;
                events.pickup.send(PickupEvent {
                    position: (p.rect.x, p.rect.y),
                });
                false
            } else {
                true
            }
        });

        for enemy in enemies.iter() {
            if enemy.rect.overlaps(&player.rect) {
                let kb = contact_knockback(player, &enemy.rect);
                if player.take_damage(ENEMY_DAMAGE, kb) {
                    events.damage.send(DamageEvent {
                        amount: ENEMY_DAMAGE,
                        source: DamageSource::Enemy,
                        position: (player.rect.x, player.rect.y),
                    });
                }
            }
        }

        for shooter in shooters.iter_mut() {
            if let Some(projectile) = shooter.update(dt) {
                projectiles.push(projectile);
            }
            // The shooter's body hurts on contact like a melee enemy
            if shooter.rect.overlaps(&player.rect) {
                let kb = contact_knockback(player, &shooter.rect);
                if player.take_damage(ENEMY_DAMAGE, kb) {
                    events.damage.send(DamageEvent {
                        amount: ENEMY_DAMAGE,
                        source: DamageSource::Enemy,
                        position: (player.rect.x, player.rect.y),
                    });
                }
            }
        }

        for hazard in hazards.iter() {
            if hazard.rect.overlaps(&player.rect) {
                let kb = Vec2::new(0.0, HAZARD_KNOCKBACK_Y);
                if player.take_damage(HAZARD_DAMAGE, kb) {
                    events.damage.send(DamageEvent {
                        amount: HAZARD_DAMAGE,
                        source: DamageSource::Hazard,
                        position: (player.rect.x, player.rect.y),
                    });
                }
            }
        }

        projectiles.retain_mut(|p| {
            p.update(dt);
            if p.rect.overlaps(&player.rect) {
                // Despawn on contact even when invulnerability blocks the hit
                if player.take_damage(ENEMY_DAMAGE, p.knockback()) {
                    events.damage.send(DamageEvent {
                        amount: ENEMY_DAMAGE,
                        source: DamageSource::Projectile,
                        position: (player.rect.x, player.rect.y),
                    });
                }
                return false;
            }
            p.rect.top() <= level.height_px
        });
    }

    /// Flat draw list in painter's order: geometry first, player last
    pub fn render_list(&self) -> Vec<(Rect, RenderKind)> {
        let mut list = Vec::new();
        for tile in &self.level.solids {
            list.push((tile.rect, RenderKind::Solid));
        }
        for tile in &self.level.ladders {
            list.push((tile.rect, RenderKind::Ladder));
        }
        for hazard in &self.hazards {
            list.push((hazard.rect, RenderKind::Hazard));
        }
        for powerup in &self.powerups {
            list.push((powerup.rect, RenderKind::Powerup));
        }
        for enemy in &self.enemies {
            list.push((enemy.rect, RenderKind::Enemy));
        }
        for shooter in &self.shooters {
            list.push((shooter.rect, RenderKind::Shooter));
        }
        for projectile in &self.projectiles {
            list.push((projectile.rect, RenderKind::Projectile));
        }
        list.push((self.player.rect, RenderKind::Player));
        list
    }
}

/// Knockback for body contact: push the player away from the attacker,
/// always with an upward pop
fn contact_knockback(player: &Player, attacker: &Rect) -> Vec2 {
    let kx = if player.rect.center_x() < attacker.center_x() {
        -ENEMY_KNOCKBACK_X
    } else {
        ENEMY_KNOCKBACK_X
    };
    Vec2::new(kx, ENEMY_KNOCKBACK_Y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::constants::{MAX_HEALTH, MOVE_SPEED};

    const DT: f32 = 1.0 / 60.0;

    fn world_from(rows: &[&str]) -> GameWorld {
        GameWorld::new(&LevelMap::new(rows.iter().map(|s| s.to_string()).collect()))
    }

    fn tick_neutral(world: &mut GameWorld, n: usize) {
        for _ in 0..n {
            world.tick(DT, &InputSample::NEUTRAL);
        }
    }

    #[test]
    fn test_reset_rebuilds_all_entities() {
        let mut world = world_from(&[
            "*--E--F-",
            "P-------",
            "####^###",
        ]);

        // Mangle the run state
        world.enemies.clear();
        world.powerups.clear();
        world.projectiles.push(Projectile::new(10, 10, 1));
        world.player.rect.x = 300;
        world.player.health = 5;
        world.player.can_double_jump = true;
        world.spawn_grace = 0.0;
        world.events.clear_all();

        world.reset();

        assert_eq!(world.enemies.len(), 1);
        assert_eq!(world.shooters.len(), 1);
        assert_eq!(world.powerups.len(), 1);
        assert_eq!(world.hazards.len(), 1);
        assert!(world.projectiles.is_empty());
        assert_eq!((world.player.rect.x, world.player.rect.y), world.level.spawn);
        assert_eq!(world.player.health, MAX_HEALTH);
        assert!(!world.player.can_double_jump);
        assert_eq!(world.spawn_grace, SPAWN_GRACE);
        assert_eq!(world.events.respawn.len(), 1);
    }

    #[test]
    fn test_spawn_grace_defers_pickup() {
        // Power-up directly above the spawn, overlapping the player body
        let mut world = world_from(&[
            "*-------",
            "P-------",
            "########",
        ]);

        world.tick(DT, &InputSample::NEUTRAL);
        assert_eq!(world.powerups.len(), 1);
        assert!(!world.player.can_double_jump);

        // Well past the grace window
        tick_neutral(&mut world, 20);
        assert!(world.powerups.is_empty());
        assert!(world.player.can_double_jump);
        assert!(world.player.has_double_jump);
        assert_eq!(world.events.pickup.len(), 1);
    }

    #[test]
    fn test_enemy_contact_damage_and_knockback() {
        let mut world = world_from(&[
            "--------",
            "P-E-----",
            "########",
        ]);
        world.spawn_grace = 0.0;
        // Overlap the enemy from its left side
        world.player.rect.x = world.enemies[0].rect.x - world.player.rect.w + 5;

        world.tick(DT, &InputSample::NEUTRAL);

        assert_eq!(world.player.health, MAX_HEALTH - ENEMY_DAMAGE);
        assert!(world.player.vel.x < 0.0);
        assert!(world.player.vel.y < 0.0);
        assert_eq!(world.events.damage.len(), 1);
        assert_eq!(
            world.events.damage.iter().next().unwrap().source,
            DamageSource::Enemy
        );
    }

    #[test]
    fn test_invulnerability_blocks_repeat_hits() {
        let mut world = world_from(&[
            "--------",
            "P-E-----",
            "########",
        ]);
        world.spawn_grace = 0.0;
        world.player.rect.x = world.enemies[0].rect.x;

        world.tick(DT, &InputSample::NEUTRAL);
        let health_after_first = world.player.health;
        assert_eq!(health_after_first, MAX_HEALTH - ENEMY_DAMAGE);

        // Knockback may carry the player out; pin it back onto the enemy
        for _ in 0..5 {
            world.player.rect.x = world.enemies[0].rect.x;
            world.player.rect.y = world.enemies[0].rect.y;
            world.player.vel = Vec2::ZERO;
            world.tick(DT, &InputSample::NEUTRAL);
        }
        assert_eq!(world.player.health, health_after_first);
    }

    #[test]
    fn test_simultaneous_sources_first_in_order_wins() {
        let mut world = world_from(&[
            "--------",
            "P-E-----",
            "--^-----",
            "########",
        ]);
        world.spawn_grace = 0.0;
        // Pin the player onto the enemy with the hazard directly below,
        // so both sources overlap within the same tick
        world.player.rect.x = world.enemies[0].rect.x;
        world.player.rect.y = world.enemies[0].rect.y;
        assert!(world.player.rect.overlaps(&world.hazards[0].rect));

        world.tick(DT, &InputSample::NEUTRAL);

        // Exactly one hit lands: the melee pass runs before hazards, and
        // the invulnerability it opens blocks the hazard this tick
        assert_eq!(world.player.health, MAX_HEALTH - ENEMY_DAMAGE);
        assert_eq!(world.events.damage.len(), 1);
        assert_eq!(
            world.events.damage.iter().next().unwrap().source,
            DamageSource::Enemy
        );
        // Knockback is the enemy's, not the hazard's stronger pop
        assert_eq!(world.player.vel.y, ENEMY_KNOCKBACK_Y);
    }

    #[test]
    fn test_hazard_damage_and_upward_knockback() {
        let mut world = world_from(&[
            "--------",
            "P-^-----",
            "########",
        ]);
        world.spawn_grace = 0.0;
        world.player.rect.x = world.hazards[0].rect.x;
        world.player.rect.y = world.hazards[0].rect.y;

        world.tick(DT, &InputSample::NEUTRAL);

        assert_eq!(world.player.health, MAX_HEALTH - HAZARD_DAMAGE);
        assert_eq!(world.player.vel.x, 0.0);
        assert!(world.player.vel.y < 0.0);
        assert_eq!(
            world.events.damage.iter().next().unwrap().source,
            DamageSource::Hazard
        );
    }

    #[test]
    fn test_shooter_emits_projectiles_on_cadence() {
        let mut world = world_from(&[
            "F-------",
            "--------",
            "--------",
            "--------",
            "--------",
            "--------",
            "P-------",
            "########",
        ]);
        world.spawn_grace = 0.0;

        // 2.0 seconds of simulation at a fixed step fires exactly once
        tick_neutral(&mut world, 120);
        assert_eq!(world.projectiles.len(), 1);
        assert_eq!(world.projectiles[0].dir, -1);
    }

    #[test]
    fn test_projectile_hit_damages_and_despawns() {
        let mut world = world_from(&[
            "--------",
            "P-------",
            "########",
        ]);
        world.spawn_grace = 0.0;
        world.projectiles.push(Projectile::new(
            world.player.rect.center_x(),
            world.player.rect.center_y(),
            1,
        ));

        world.tick(DT, &InputSample::NEUTRAL);

        assert!(world.projectiles.is_empty());
        assert_eq!(world.player.health, MAX_HEALTH - ENEMY_DAMAGE);
        // Rightward projectile knocks the player left
        assert!(world.player.vel.x < 0.0);
        assert_eq!(
            world.events.damage.iter().next().unwrap().source,
            DamageSource::Projectile
        );
    }

    #[test]
    fn test_projectile_despawns_even_when_hit_is_blocked() {
        let mut world = world_from(&[
            "--------",
            "P-------",
            "########",
        ]);
        world.spawn_grace = 0.0;
        world.player.invuln_timer = 10.0;
        world.projectiles.push(Projectile::new(
            world.player.rect.center_x(),
            world.player.rect.center_y(),
            1,
        ));

        world.tick(DT, &InputSample::NEUTRAL);

        assert!(world.projectiles.is_empty());
        assert_eq!(world.player.health, MAX_HEALTH);
        assert!(world.events.damage.is_empty());
    }

    #[test]
    fn test_projectile_culled_below_world() {
        let mut world = world_from(&[
            "--------",
            "P-------",
            "########",
        ]);
        world.spawn_grace = 0.0;
        world
            .projectiles
            .push(Projectile::new(400, world.level.height_px + 100, 1));

        world.tick(DT, &InputSample::NEUTRAL);
        assert!(world.projectiles.is_empty());
    }

    #[test]
    fn test_pit_death_emits_event_once() {
        let mut world = world_from(&[
            "--------",
            "P-------",
            "--------",
        ]);
        world.spawn_grace = 0.0;

        tick_neutral(&mut world, 300);
        assert_eq!(world.player.health, 0);
        assert_eq!(world.events.death.len(), 1);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut world = world_from(&[
            "--------",
            "P-------",
            "########",
        ]);
        let x0 = world.player.rect.x;
        let input = InputSample {
            move_dir: 1,
            ..InputSample::NEUTRAL
        };

        // A ten second frame must advance at most one clamped step
        world.tick(10.0, &input);
        let moved = world.player.rect.x - x0;
        assert!(moved as f32 <= MOVE_SPEED * MAX_TICK_DT + 1.0);
    }

    #[test]
    fn test_render_list_ends_with_player() {
        let world = world_from(&[
            "*--E--F-",
            "P-------",
            "####^###",
        ]);
        let list = world.render_list();
        assert_eq!(list.last().unwrap().1, RenderKind::Player);
        assert!(list.iter().any(|(_, k)| *k == RenderKind::Solid));
        assert!(list.iter().any(|(_, k)| *k == RenderKind::Enemy));
        assert!(list
            .iter()
            .any(|(r, k)| *k == RenderKind::Player && *r == world.player.rect));
    }
}
