//! # snake-arena
//!
//! Frame-stepped simulation of autonomous snakes competing for food on a wraparound plane.
//!
//! Each tick every snake may re-pick its target (flee nearby bodies, attack a nearby head,
//! or go for the nearest food), moves one step, eats, and dies if its head touches another
//! body. Dead snakes become food and come back after a fixed countdown; eaten food is
//! queued and trickles back into the arena at a bounded rate.
//!
//! ```rust,no_run
//! use snake_arena::{SimulationConfig, World};
//!
//! let mut world = World::new_with_seed(SimulationConfig::default(), 42)?;
//! world.run(600);
//! let snapshot = world.snapshot();
//! println!("food: {} queued: {}", snapshot.food_count(), snapshot.respawn_queue_len);
//! # Ok::<(), snake_arena::WorldError>(())
//! ```

pub mod agent;
pub mod arena;
pub mod collision;
pub mod config;
pub mod constants;
pub mod decision;
pub mod error;
pub mod lifecycle;
pub mod movement;
pub mod respawn;
pub mod simulation;
pub mod snapshot;
pub mod utils;

pub use agent::{ActionMode, Agent, AgentId, Controller};
pub use arena::Arena;
pub use config::SimulationConfig;
pub use decision::Intent;
pub use error::{ConfigError, WorldError};
pub use respawn::RespawnQueue;
pub use simulation::{TickEvents, World};
pub use snapshot::{AgentView, ScoreEntry, WorldSnapshot};
