//! Headless collision sandbox
//!
//! Drives the narrow2d engine the way a game tick would: actors live in a
//! slotmap arena, shapes are rebuilt from actor state every tick, and the
//! resolve vector is split between bodies at this call site. Stands in
//! for the interactive demo the engine was originally written against,
//! minus rendering and input.

use log::{debug, info, warn};
use narrow2d::prelude::*;
use rand::prelude::*;
use slotmap::{new_key_type, SlotMap};

const ARENA_WIDTH: f32 = 1280.0;
const ARENA_HEIGHT: f32 = 720.0;
const MOVE_SPEED: f32 = 250.0;
const TIMESTEP: f32 = 0.01;
const SIM_SECONDS: f32 = 20.0;
/// New random accelerations are rolled this often (simulated seconds).
const STEER_INTERVAL: f32 = 0.5;

new_key_type! {
    struct ActorKey;
}

/// A moving body; shapes are derived from this each tick, never stored
#[derive(Debug, Clone)]
struct Actor {
    pos: Vec2,
    size: Vec2,
    accn: Vec2,
}

impl Actor {
    fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            accn: Vec2::zeros(),
        }
    }

    /// Bounding rect snapshot, as the original enemy used
    fn rect(&self) -> Shape {
        Shape::rect(self.pos, self.pos + self.size)
    }

    /// Inscribed circle snapshot, as the original player used
    fn circle(&self) -> Shape {
        Shape::circle(self.pos + self.size / 2.0, self.size.y / 2.0)
    }
}

fn random_direction(rng: &mut StdRng) -> Vec2 {
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    Vec2::new(angle.cos(), angle.sin())
}

/// Applies half the correction to each of two dynamic bodies.
///
/// The engine returns the raw minimum separating vector; how it is split
/// is a caller policy, and this sandbox splits evenly.
fn separate_pair(actors: &mut SlotMap<ActorKey, Actor>, a: ActorKey, b: ActorKey, push: Vec2) {
    if let Some(actor) = actors.get_mut(a) {
        actor.pos -= push / 2.0;
    }
    if let Some(actor) = actors.get_mut(b) {
        actor.pos += push / 2.0;
    }
}

fn main() {
    narrow2d::foundation::logging::init();

    let narrow_phase = match NarrowPhaseConfig::load_from_file("narrow_phase.toml") {
        Ok(config) => {
            info!("loaded narrow phase tuning from narrow_phase.toml");
            NarrowPhase::new(config)
        }
        Err(_) => NarrowPhase::default(),
    };

    let mut actors: SlotMap<ActorKey, Actor> = SlotMap::with_key();
    let player = actors.insert(Actor::new(Vec2::new(200.0, 300.0), Vec2::new(96.0, 132.0)));
    let enemy = actors.insert(Actor::new(
        Vec2::new(ARENA_WIDTH / 2.0 - 64.0, ARENA_HEIGHT / 2.0 - 80.0),
        Vec2::new(128.0, 160.0),
    ));

    // Fixed seed keeps runs reproducible for comparing tuning changes.
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut probe_pos = Vec2::new(640.0, 360.0);

    let mut contacts: u32 = 0;
    let mut corrections: u32 = 0;
    let mut failures: u32 = 0;

    let mut t = 0.0_f32;
    let mut next_steer = 0.0_f32;
    while t < SIM_SECONDS {
        if t >= next_steer {
            for actor in actors.values_mut() {
                actor.accn = random_direction(&mut rng);
            }
            probe_pos = Vec2::new(
                rng.gen_range(0.0..ARENA_WIDTH),
                rng.gen_range(0.0..ARENA_HEIGHT),
            );
            next_steer += STEER_INTERVAL;
        }

        for actor in actors.values_mut() {
            actor.pos += actor.accn * MOVE_SPEED * TIMESTEP;
            actor.pos.x = actor.pos.x.clamp(0.0, ARENA_WIDTH - actor.size.x);
            actor.pos.y = actor.pos.y.clamp(0.0, ARENA_HEIGHT - actor.size.y);
        }

        // Fresh world-space snapshots every tick; nothing is cached.
        let player_circle = actors[player].circle();
        let enemy_rect = actors[enemy].rect();
        let probe = Shape::regular_polygon(probe_pos, 5, 50.0, 0.0)
            .expect("5 <= MAX_POLYGON_POINTS");

        match narrow_phase.resolve(&player_circle, &enemy_rect) {
            Ok(Some(push)) => {
                contacts += 1;
                corrections += 1;
                debug!(
                    "t={:.2} player/enemy contact, correcting by ({:.2}, {:.2})",
                    t, push.x, push.y
                );
                separate_pair(&mut actors, player, enemy, push);
            }
            Ok(None) => {}
            Err(err) => {
                // No correction this tick; the pair stays put.
                failures += 1;
                warn!("t={:.2} player/enemy resolve failed: {}", t, err);
            }
        }

        // The probe is a sensor, like the original's mouse polygon: it
        // reports overlap but pushes nothing.
        for (name, shape) in [("enemy", &enemy_rect), ("player", &player_circle)] {
            match narrow_phase.intersects(&probe, shape) {
                Ok(true) => {
                    contacts += 1;
                    debug!("t={:.2} probe overlaps {}", t, name);
                }
                Ok(false) => {}
                Err(err) => {
                    failures += 1;
                    warn!("t={:.2} probe/{} query failed: {}", t, name, err);
                }
            }
        }

        t += TIMESTEP;
    }

    info!(
        "simulated {}s: {} contacts, {} corrections, {} failed queries",
        SIM_SECONDS, contacts, corrections, failures
    );
}
