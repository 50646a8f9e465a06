//! Platform abstraction layer
//!
//! Handles the edges between the simulation and the host:
//! - Input events (key codes to control flags)
//! - Idle/demo autopilot

pub mod autopilot;
pub mod input;

pub use input::Controls;
