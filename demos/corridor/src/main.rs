//! Corridor demo.
//!
//! A patrolling enemy stands at the origin facing +Z.  After a few seconds a
//! distraction pulls it aside, then the player walks down the corridor towards
//! it and stays in view.  The enemy notices, escalates, fetches its gun from
//! behind and starts shooting.
//!
//! ```text
//! cargo run -p corridor -- --seconds 25 --seed 7
//! RUST_LOG=debug cargo run -p corridor -- --catalog voice.csv
//! ```

use std::path::PathBuf;

use clap::Parser;
use glam::Vec3;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use st_behavior::StateId;
use st_core::{load_config_json, EnemyConfig, PatrolRoute, Waypoint, WaypointId};
use st_perception::PlayerView;
use st_spatial::{Collider, ColliderId, ColliderScene, ColliderTag, KinematicNav, NavAgent};
use st_sim::{EnemyBuilder, EnemyObserver, EnemyStatus, SimResult};
use st_voice::{load_catalog_csv, SilentAudio, VoiceCatalog, VoiceClip, VoiceLine};

const PLAYER_LAYER: u8 = 3;
const PLAYER_EYE:   f32 = 1.6;
const PLAYER_SPEED: f32 = 1.2;
/// Silhouette sample heights above the player's feet.
const BODY_POINTS:  [f32; 4] = [0.3, 0.8, 1.3, 1.8];

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enemy config as JSON.  Defaults to a built-in corridor patrol.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Voice catalog as `category,clip` CSV.  Defaults to placeholder clips.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Simulated seconds.
    #[arg(short, long, default_value_t = 20.0)]
    seconds: f32,

    /// Logic tick rate in Hz.
    #[arg(long, default_value_t = 50.0)]
    hz: f32,

    /// Overrides the config's RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Second at which the player starts walking down the corridor.
    #[arg(long, default_value_t = 4.0)]
    enter_at: f32,
}

fn main() -> SimResult<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).with_target(false).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config_json(path)?,
        None => corridor_config(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    let catalog = match &args.catalog {
        Some(path) => load_catalog_csv(path)?,
        None => placeholder_catalog(),
    };

    let mut scene = ColliderScene::new();
    // Side walls and the far end of the corridor.
    scene.add(Collider::aabb(Vec3::new(-6.5, 0.0, -10.0), Vec3::new(-6.0, 3.0, 25.0)))?;
    scene.add(Collider::aabb(Vec3::new(6.0, 0.0, -10.0), Vec3::new(6.5, 3.0, 25.0)))?;
    scene.add(Collider::aabb(Vec3::new(-6.0, 0.0, 24.5), Vec3::new(6.0, 3.0, 25.0)))?;

    let mut player = Walker::new(Vec3::new(0.0, 0.0, 22.0), Vec3::new(0.0, 0.0, 5.0));
    let body = player.spawn(&mut scene)?;

    let nav = KinematicNav::new(Vec3::ZERO, 2.0)
        .with_walkable_area(Vec3::new(-5.5, 0.0, -9.5), Vec3::new(5.5, 0.0, 24.0));

    let Some(mut enemy) = EnemyBuilder::new(config, nav, scene, SilentAudio::new(1.8))
        .catalog(catalog)
        .build()?
    else {
        info!("another enemy already owns this scene");
        return Ok(());
    };

    let dt = 1.0 / args.hz.max(1.0);
    let steps = (args.seconds / dt).round() as u64;
    let distract_frame = (2.0 / dt).round() as u64;
    let mut narrator = Narrator::new(args.hz.round().max(1.0) as u64);

    info!(seconds = args.seconds, hz = args.hz, seed = enemy.config().seed, "corridor run starting");

    for frame in 0..steps {
        let now = frame as f32 * dt;
        if frame == distract_frame {
            info!("a bottle falls off a shelf");
            enemy.distract(Vec3::new(3.0, 0.0, 2.0));
        }
        if now >= args.enter_at {
            let offset = player.walk(dt);
            for &id in &body {
                if let Some(collider) = enemy.probe_mut().get_mut(id) {
                    collider.translate(offset);
                }
            }
        }

        let toward_enemy = enemy.nav().position() - player.position;
        let view = PlayerView::standing(player.position, PLAYER_EYE, toward_enemy, player.sample_points());
        enemy.step(dt, &view, &mut narrator);
    }

    info!(
        shots = narrator.shots,
        lines = narrator.lines,
        state = %enemy.state_id(),
        "corridor run finished"
    );
    Ok(())
}

// ── Scenario ──────────────────────────────────────────────────────────────────

fn corridor_config() -> EnemyConfig {
    let route = PatrolRoute::new(vec![
        Waypoint::new(Vec3::new(4.0, 0.0, 1.0), 2.0),
        Waypoint::new(Vec3::new(-4.0, 0.0, 6.0), 3.0),
    ])
    .with_gun_waypoint(Waypoint::new(Vec3::new(0.0, 0.0, -6.0), 0.5));

    EnemyConfig {
        sit_duration_min: 1.0,
        sit_duration_max: 2.0,
        route,
        ..EnemyConfig::default()
    }
}

fn placeholder_catalog() -> VoiceCatalog {
    VoiceCatalog::new()
        .with_clips(VoiceLine::SpotPlayer, &["who_is_there", "i_see_you", "hey"])
        .with_clips(VoiceLine::GrabbingGun, &["where_is_my_gun", "hold_on"])
        .with_clips(VoiceLine::Chasing, &["come_here", "you_cannot_hide", "stop_running"])
        .with_clips(VoiceLine::Alerted, &["what_was_that", "huh"])
        .with_clips(VoiceLine::WatchingTv, &["this_show_again", "boring"])
}

/// The player, walking in a straight line to a stop point.
struct Walker {
    position: Vec3,
    goal:     Vec3,
}

impl Walker {
    fn new(position: Vec3, goal: Vec3) -> Self {
        Self { position, goal }
    }

    fn sample_points(&self) -> Vec<Vec3> {
        BODY_POINTS.iter().map(|&h| self.position + Vec3::Y * h).collect()
    }

    /// Add one player-tagged sphere per sample point.
    fn spawn(&self, scene: &mut ColliderScene) -> SimResult<Vec<ColliderId>> {
        let mut ids = Vec::with_capacity(BODY_POINTS.len());
        for point in self.sample_points() {
            ids.push(scene.add(
                Collider::sphere(point, 0.2).with_tag(ColliderTag::Player).on_layer(PLAYER_LAYER),
            )?);
        }
        Ok(ids)
    }

    /// Move towards the goal; returns the displacement.
    fn walk(&mut self, dt: f32) -> Vec3 {
        let to_goal = self.goal - self.position;
        let step = PLAYER_SPEED * dt;
        let offset = if to_goal.length() <= step { to_goal } else { to_goal.normalize() * step };
        self.position += offset;
        offset
    }
}

// ── Narrator ──────────────────────────────────────────────────────────────────

/// Logs every enemy event and a status line once per simulated second.
struct Narrator {
    every: u64,
    shots: u32,
    lines: u32,
}

impl Narrator {
    fn new(every: u64) -> Self {
        Self { every, shots: 0, lines: 0 }
    }
}

impl EnemyObserver for Narrator {
    fn on_tick_end(&mut self, status: &EnemyStatus) {
        if status.frame.0 % self.every != 0 {
            return;
        }
        let meter = status.awareness_fraction().map(|f| format!("{:.0}%", f * 100.0));
        info!(
            t = status.elapsed,
            state = %status.state,
            pos = %status.position,
            visible = status.percent_visible,
            sees = status.sees_player,
            awareness = meter.as_deref().unwrap_or("-"),
            aggro = status.aggro_percent,
            "status"
        );
    }

    fn on_state_changed(&mut self, from: StateId, to: StateId) {
        info!(%from, %to, "state change");
    }

    fn on_waypoint_complete(&mut self, waypoint: WaypointId) {
        debug!(%waypoint, "waypoint done");
    }

    fn on_shot(&mut self) {
        self.shots += 1;
        info!(shot = self.shots, "BANG");
    }

    fn on_gun_grabbed(&mut self) {
        info!("enemy is armed");
    }

    fn on_voice_line(&mut self, clip: &VoiceClip) {
        self.lines += 1;
        info!(%clip, "voice");
    }
}
