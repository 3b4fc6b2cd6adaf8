use gamekit_common::Rng;
use gamekit_geometry::presets;
use gamekit_input::InputSnapshot;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::blob::Blob;
use crate::config::ArenaConfig;
use crate::gun::{Bullet, Gun};
use crate::thing::Thing;

/// Record of something that happened during a step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArenaEvent {
    /// A fresh wave of blobs was placed.
    WaveSpawned { tick: u64, count: usize },
    BulletFired { tick: u64, position: Vec3, angle: f32 },
    /// The thing landed on a blob from above.
    BlobStomped { tick: u64, blob: usize },
    /// The thing ran into a blob on the ground and was knocked back.
    PlayerBumped { tick: u64, blob: usize, penalty: i64 },
    /// A damaged blob was shot down.
    BlobDestroyed { tick: u64, blob: usize, points: i64 },
    BulletExpired { tick: u64 },
    /// Simulation advanced one step.
    Stepped { tick: u64, score: i64 },
}

/// The arena game state.
///
/// Every mutation happens inside [`Arena::step`], driven only by the input
/// snapshot and the seeded RNG, so equal seeds and inputs give equal runs.
#[derive(Debug, Clone)]
pub struct Arena {
    config: ArenaConfig,
    rng: Rng,
    tick: u64,
    score: i64,
    thing: Thing,
    gun: Gun,
    blobs: Vec<Blob>,
    bullets: Vec<Bullet>,
    /// Everything that happened since the last [`Arena::drain_events`].
    event_log: Vec<ArenaEvent>,
}

impl Arena {
    /// Create an arena with blobs sized by the logo mesh.
    pub fn new(config: ArenaConfig, seed: u64) -> Self {
        let radius = presets::logo_geometry().bounding_sphere().radius;
        Self::with_blob_radius(config, seed, radius)
    }

    pub fn with_blob_radius(config: ArenaConfig, seed: u64, blob_radius: f32) -> Self {
        let mut rng = Rng::new(seed);
        let thing = Thing::new(config.thing.clone(), config.move_friction, config.rot_friction);
        let gun = Gun::new(config.gun.clone());
        let blobs = (0..config.blob.count)
            .map(|_| Blob::new(&mut rng, &config.blob, blob_radius, config.move_friction))
            .collect();

        let mut arena = Self {
            config,
            rng,
            tick: 0,
            score: 0,
            thing,
            gun,
            blobs,
            bullets: Vec::new(),
            event_log: Vec::new(),
        };
        arena.place_blobs();
        tracing::debug!(seed, blobs = arena.blobs.len(), "arena created");
        arena
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn thing(&self) -> &Thing {
        &self.thing
    }

    pub fn thing_mut(&mut self) -> &mut Thing {
        &mut self.thing
    }

    pub fn gun(&self) -> &Gun {
        &self.gun
    }

    pub fn blobs(&self) -> &[Blob] {
        &self.blobs
    }

    pub fn blobs_mut(&mut self) -> &mut [Blob] {
        &mut self.blobs
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn active_blobs(&self) -> usize {
        self.blobs.iter().filter(|b| b.is_active()).count()
    }

    pub fn events(&self) -> &[ArenaEvent] {
        &self.event_log
    }

    /// Take the pending events, leaving the log empty. Long-running owners
    /// call this every step.
    pub fn drain_events(&mut self) -> Vec<ArenaEvent> {
        std::mem::take(&mut self.event_log)
    }

    fn place_blobs(&mut self) {
        let spread = self.config.arena_radius / 2.0;
        for blob in &mut self.blobs {
            blob.place_randomly(&mut self.rng, spread);
        }
        tracing::info!(tick = self.tick, count = self.blobs.len(), "blob wave spawned");
        self.event_log.push(ArenaEvent::WaveSpawned {
            tick: self.tick,
            count: self.blobs.len(),
        });
    }

    /// Advance the game by one step.
    ///
    /// Order: thing, gun, blobs with their thing collisions, respawn when
    /// every blob is gone, bullets with their blob hits, bullet expiry.
    pub fn step(&mut self, input: &InputSnapshot) {
        self.tick += 1;
        let tick = self.tick;
        let radius = self.config.arena_radius;

        self.thing.update(input, Some(radius));
        if let Some(bullet) = self
            .gun
            .update(input, self.thing.position(), self.thing.angle())
        {
            self.event_log.push(ArenaEvent::BulletFired {
                tick,
                position: bullet.position,
                angle: bullet.angle,
            });
            self.bullets.push(bullet);
        }

        let blob_cfg = self.config.blob.clone();
        let mut any_active = false;
        for (i, blob) in self.blobs.iter_mut().enumerate() {
            blob.tick_damage();
            if !blob.is_active() {
                continue;
            }
            any_active = true;
            blob.update(&mut self.rng, radius);

            let thing_pos = self.thing.position();
            if !blob.collides_with(thing_pos) {
                continue;
            }
            if thing_pos.y > blob_cfg.stomp_height {
                blob.damage();
                self.event_log.push(ArenaEvent::BlobStomped { tick, blob: i });
            } else {
                let away = (thing_pos - blob.position()).normalize_or_zero();
                self.thing.body.velocity += away * blob_cfg.bump_impulse;
                let penalty = if blob.is_damaged() {
                    0
                } else {
                    blob_cfg.bump_penalty
                };
                self.score -= penalty;
                self.event_log.push(ArenaEvent::PlayerBumped {
                    tick,
                    blob: i,
                    penalty,
                });
            }
        }
        if !any_active {
            self.place_blobs();
        }

        for bullet in &mut self.bullets {
            bullet.update();
            for (i, blob) in self.blobs.iter_mut().enumerate() {
                if blob.is_active() && blob.is_damaged() && blob.collides_with(bullet.position) {
                    blob.hide();
                    let points = i64::from(self.rng.below(blob_cfg.max_points));
                    self.score += points;
                    tracing::debug!(tick, blob = i, points, "blob destroyed");
                    self.event_log
                        .push(ArenaEvent::BlobDestroyed { tick, blob: i, points });
                }
            }
        }
        let before = self.bullets.len();
        self.bullets.retain(|b| !b.is_expired(radius));
        for _ in self.bullets.len()..before {
            self.event_log.push(ArenaEvent::BulletExpired { tick });
        }

        self.event_log.push(ArenaEvent::Stepped {
            tick,
            score: self.score,
        });
    }

    /// Deterministic hash of the game state for comparing runs.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        let mix_vec = |h: &mut u64, v: Vec3| {
            for c in v.to_array() {
                mix(h, &c.to_le_bytes());
            }
        };
        mix(&mut h, &self.tick.to_le_bytes());
        mix(&mut h, &self.score.to_le_bytes());
        mix(&mut h, &self.rng.state().to_le_bytes());
        mix_vec(&mut h, self.thing.body.position);
        mix_vec(&mut h, self.thing.body.velocity);
        mix(&mut h, &self.thing.spin.angle.to_le_bytes());
        mix(&mut h, &self.gun.overheat().to_le_bytes());
        for blob in &self.blobs {
            mix(&mut h, &[blob.is_active() as u8]);
            mix(&mut h, &blob.damage_timer().to_le_bytes());
            mix_vec(&mut h, blob.body.position);
            mix_vec(&mut h, blob.body.velocity);
        }
        for bullet in &self.bullets {
            mix_vec(&mut h, bullet.position);
        }
        h
    }
}
