//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (entity creation order)
//! - No rendering, audio or platform side effects (events are returned)

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{BounceAxis, OverlapDepths, Rect, bounce_axis};
pub use state::{
    Ball, Brick, Color, Entity, EntityKind, GameEvent, GamePhase, GameState, Paddle,
};
pub use tick::{TickInput, WallContact, tick};
