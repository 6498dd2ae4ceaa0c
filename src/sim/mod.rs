//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed-size step per tick
//! - Randomness only through an injected `DirectionSource`
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod maze;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod wander;

pub use collision::Rect;
pub use entity::{Direction, DirectionError, Entity};
pub use maze::{AdversaryKind, LAYOUT, MazeError, MazeState, Tile};
pub use snapshot::{AdversaryView, EntityView, FrameSnapshot};
pub use state::{Adversary, GameEvent, GamePhase, SimulationEngine};
pub use wander::{DirectionSource, ScriptedSource, SeededSource};
