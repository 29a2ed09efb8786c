//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module draws, reads files
//! or talks to a platform:
//! - Seeded RNG only, so a seed replays the same run
//! - Stable iteration order (by pool slot)
//! - No allocation after `GameState::new`

pub mod background;
pub mod collision;
pub mod entity;
pub mod movement;
pub mod pool;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use background::{Background, BackgroundLayer, BaseLayer};
pub use collision::{check_collisions, circles_overlap, overlaps_any};
pub use entity::{Entity, EntityKind, Role};
pub use pool::{EntityPool, SHIP_SLOT};
pub use rng::SimRng;
pub use spawn::{SpawnController, SpawnOutcome, scatter_rocks, try_place};
pub use state::{GameState, WorldSnapshot};
pub use tick::{FireOutcome, FrameReport, TickInput, tick};
