//! Per-frame simulation engine.
//!
//! `GameCore` owns the hecs ECS world and the particle store,
//! processes shell commands, runs all systems once per rendered frame,
//! and reports score/health/game-over deltas. Headless by design: no
//! drawing backend dependency, so whole sessions are testable and
//! deterministic for a given seed and input script.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use starlance_core::commands::ShellCommand;
use starlance_core::components::{Position, Tint};
use starlance_core::constants::{
    BASE_SCROLL_SPEED, FIRE_INTERVAL_MS, NOMINAL_FRAME_MS, PLAYER_START_HEALTH, RETICLE_LAG,
    THRUSTER_INTERVAL_MS,
};
use starlance_core::enums::SessionPhase;
use starlance_core::events::ShellEvent;
use starlance_core::input::InputState;
use starlance_core::mission::MissionParameters;
use starlance_core::state::SceneView;
use starlance_core::types::FrameClock;

use crate::particles::ParticleStore;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new session.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same session.
    pub seed: u64,
    /// Mission tunables, fixed for the session lifetime.
    pub mission: MissionParameters,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            mission: MissionParameters::fallback(),
        }
    }
}

/// Outcome of one frame: outbound events plus the derived scalars they
/// describe. Score/health events fire at most once per frame and only
/// on change; game-over fires exactly once per session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameReport {
    pub events: Vec<ShellEvent>,
    pub score: u32,
    /// Player health clamped to 0..=100.
    pub health: i32,
    pub phase: SessionPhase,
}

/// One running session: world, particles, rng, clocks, score, health.
pub struct GameCore {
    world: World,
    player: hecs::Entity,
    particles: ParticleStore,
    mission: MissionParameters,
    rng: ChaCha8Rng,
    phase: SessionPhase,
    input: InputState,
    reticle: Vec2,
    score: u32,
    health: f32,
    clock: FrameClock,
    thruster_clock: f32,
    fire_clock: f32,
    spawn_serial: u32,
    command_queue: VecDeque<ShellCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    /// Forces the next frame's dt to zero: set at session start and on
    /// resume, so neither produces a compensating motion jump.
    zero_dt_next: bool,
    last_reported_score: u32,
    last_reported_health: i32,
    game_over_reported: bool,
}

impl GameCore {
    /// Create a new session with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let player = world_setup::spawn_player(&mut world);
        Self {
            world,
            player,
            particles: ParticleStore::new(),
            mission: config.mission.sanitized(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            phase: SessionPhase::Playing,
            input: InputState::default(),
            reticle: Vec2::ZERO,
            score: 0,
            health: PLAYER_START_HEALTH,
            clock: FrameClock::default(),
            thruster_clock: 0.0,
            // Armed so the first active frame can fire immediately.
            fire_clock: FIRE_INTERVAL_MS,
            spawn_serial: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            zero_dt_next: true,
            last_reported_score: 0,
            last_reported_health: PLAYER_START_HEALTH as i32,
            game_over_reported: false,
        }
    }

    /// Queue a shell command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: ShellCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the session by one rendered frame.
    ///
    /// `dt_ms` is the elapsed time since the previous frame; the first
    /// frame (and the first frame after resume) is treated as zero.
    /// Input captured asynchronously between frames is applied
    /// atomically here.
    pub fn frame(&mut self, input: InputState, dt_ms: f32, width: f32, height: f32) -> FrameReport {
        self.input = input;
        self.process_commands();

        let dt = if self.zero_dt_next {
            self.zero_dt_next = false;
            0.0
        } else {
            dt_ms.max(0.0)
        };

        if self.phase != SessionPhase::Ended {
            // 1. Reticle smoothing. Per-frame EMA, deliberately not
            //    dt-normalized; keeps easing while paused so the HUD
            //    stays alive.
            self.reticle += (self.input.pointer - self.reticle) * RETICLE_LAG;
        }

        if self.phase == SessionPhase::Playing {
            self.run_systems(dt, width, height);
        }

        self.build_report()
    }

    /// Build the drawable snapshot for the current frame. Runs even
    /// while paused or ended — a suspended session still redraws.
    pub fn scene(&self) -> SceneView {
        systems::snapshot::build_scene(
            &self.world,
            &self.particles,
            &self.mission,
            self.phase,
            self.clock,
            self.score,
            self.health_display(),
            self.reticle,
            &self.input,
        )
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Player health clamped to the 0..=100 display range.
    pub fn health(&self) -> i32 {
        self.health_display()
    }

    pub fn mission(&self) -> &MissionParameters {
        &self.mission
    }

    pub fn reticle(&self) -> Vec2 {
        self.reticle
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn particles(&self) -> &ParticleStore {
        &self.particles
    }

    /// Run all systems in order for one frame of `dt` milliseconds.
    fn run_systems(&mut self, dt: f32, width: f32, height: f32) {
        let dtf = dt / NOMINAL_FRAME_MS;
        // 4. Scroll speed, dt-normalized (unlike the lag filters).
        let scroll = BASE_SCROLL_SPEED * self.mission.speed_modifier * dtf;
        self.clock.advance(dt, scroll);

        // 2. Ship movement toward the clamped unprojected pointer.
        systems::ship::run(&mut self.world, &self.input, width, height);

        // 3. Thruster particles on a fixed game-time cadence.
        self.thruster_clock += dt;
        if let Some((pos, tint)) = self.player_pose() {
            while self.thruster_clock >= THRUSTER_INTERVAL_MS {
                self.thruster_clock -= THRUSTER_INTERVAL_MS;
                self.particles.emit_thruster_pair(pos, tint, &mut self.rng);
            }
        }

        // 5. Enemy spawning after the grace period.
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &self.mission,
            self.clock.elapsed_ms,
            &mut self.spawn_serial,
        );

        // 6. Player autofire.
        systems::fire_control::run(
            &mut self.world,
            self.player,
            &self.input,
            &mut self.fire_clock,
            dt,
            width,
            height,
        );

        // 7. Per-kind movement, then enemy fire decisions.
        systems::kinematics::run(&mut self.world, scroll, dtf, dt, self.clock.elapsed_ms);
        systems::enemy_ai::run(&mut self.world, self.player, &mut self.rng);

        // 8. Out-of-bounds culling (marks only).
        systems::cleanup::cull_out_of_bounds(&mut self.world, self.player, &mut self.despawn_buffer);

        // 9. Collision resolution against the pre-frame snapshot.
        let outcome = systems::collision::run(
            &mut self.world,
            self.player,
            &mut self.despawn_buffer,
            &mut self.particles,
            &mut self.rng,
        );
        self.score += outcome.score_delta;
        self.health = (self.health - outcome.player_damage).max(0.0);

        // 10. Compaction: everything marked this frame is removed now.
        systems::cleanup::drain(&mut self.world, &mut self.despawn_buffer);

        // 11. Particle integration and compaction.
        self.particles.integrate(dt, dtf);

        if self.health <= 0.0 {
            self.phase = SessionPhase::Ended;
        }
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            match command {
                ShellCommand::Pause => {
                    if self.phase == SessionPhase::Playing {
                        self.phase = SessionPhase::Paused;
                    }
                }
                ShellCommand::Resume => {
                    if self.phase == SessionPhase::Paused {
                        self.phase = SessionPhase::Playing;
                        self.zero_dt_next = true;
                    }
                }
            }
        }
    }

    fn player_pose(&self) -> Option<(glam::Vec3, starlance_core::types::Color)> {
        let pos = self.world.get::<&Position>(self.player).ok()?.0;
        let tint = self.world.get::<&Tint>(self.player).ok()?.0;
        Some((pos, tint))
    }

    fn health_display(&self) -> i32 {
        (self.health.round() as i32).clamp(0, 100)
    }

    fn build_report(&mut self) -> FrameReport {
        let mut events = Vec::new();
        let health = self.health_display();

        if self.score != self.last_reported_score {
            events.push(ShellEvent::ScoreChanged { score: self.score });
            self.last_reported_score = self.score;
        }
        if health != self.last_reported_health {
            events.push(ShellEvent::HealthChanged { health });
            self.last_reported_health = health;
        }
        if self.phase == SessionPhase::Ended && !self.game_over_reported {
            events.push(ShellEvent::GameOver {
                final_score: self.score,
            });
            self.game_over_reported = true;
        }

        FrameReport {
            events,
            score: self.score,
            health,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
impl GameCore {
    /// Spawn a hostile of the given kind at an exact position (for
    /// scripted scenarios).
    pub fn spawn_hostile_at(
        &mut self,
        position: glam::Vec3,
        kind: starlance_core::enums::EntityKind,
    ) -> hecs::Entity {
        use starlance_core::enums::EntityKind;
        self.spawn_serial += 1;
        let entity = match kind {
            EntityKind::EnemyTurret => world_setup::spawn_turret(
                &mut self.world,
                position.x,
                self.mission.theme_color,
            ),
            EntityKind::ObstaclePillar => world_setup::spawn_pillar(
                &mut self.world,
                position.x,
                self.mission.theme_color,
            ),
            _ => world_setup::spawn_interceptor(
                &mut self.world,
                position.x,
                self.spawn_serial,
                self.mission.theme_color,
            ),
        };
        if let Ok(mut pos) = self.world.get::<&mut Position>(entity) {
            pos.0 = position;
        }
        entity
    }

    /// Spawn a stationary player projectile at an exact position.
    pub fn spawn_test_projectile(&mut self, position: glam::Vec3) -> hecs::Entity {
        world_setup::spawn_player_projectile(&mut self.world, position, glam::Vec3::ZERO)
    }

    pub fn player(&self) -> hecs::Entity {
        self.player
    }

    pub fn player_position(&self) -> glam::Vec3 {
        self.world
            .get::<&Position>(self.player)
            .map(|p| p.0)
            .unwrap_or_default()
    }

    pub fn entity_alive(&self, entity: hecs::Entity) -> bool {
        self.world.contains(entity)
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.clock.elapsed_ms
    }

    pub fn scroll_phase(&self) -> f32 {
        self.clock.scroll_phase
    }
}
