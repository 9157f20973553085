//! `st-sim`: the enemy agent and its per-frame update.
//!
//! # Two callbacks per frame
//!
//! ```text
//! physics tick  Enemy::physics_tick(player)
//!                 └ PerceptionSampler::sample → Sighting (raycasts)
//!
//! logic tick    Enemy::tick(dt, player, observer)
//!   ① Perceive   threshold + close-range override, moving flag,
//!                sight range easing towards the alert range.
//!   ② Stun       while stunned: hold the navigator, skip ③ and ④.
//!   ③ World      drain queued distractions and hiding-spot entries into
//!                the active state's hooks.
//!   ④ Behavior   active state's update; apply a requested transition
//!                (init the new state immediately).
//!   ⑤ Effects    dispatch BehaviorEvents: voice requests, waypoint,
//!                gun and shot notifications.
//!   ⑥ Voice      drain the voice queue; report started clips.
//!   ⑦ Navigate   NavAgent::advance(dt).
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use st_sim::{EnemyBuilder, NoopObserver};
//!
//! let mut enemy = EnemyBuilder::new(config, nav, scene, SilentAudio::new(1.0))
//!     .catalog(catalog)
//!     .build()?
//!     .expect("no other enemy in this scene");
//! loop {
//!     enemy.physics_tick(&player);
//!     enemy.tick(dt, &player, &mut NoopObserver);
//! }
//! ```

pub mod builder;
pub mod enemy;
pub mod error;
pub mod instance;
pub mod observer;
pub mod status;
pub mod world;


pub use builder::EnemyBuilder;
pub use enemy::Enemy;
pub use error::{SimError, SimResult};
pub use instance::{InstanceClaim, InstanceSlot};
pub use observer::{EnemyObserver, NoopObserver};
pub use status::EnemyStatus;
pub use world::WorldEvent;
