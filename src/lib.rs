//! Breakout - A single-screen brick breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game phases)
//! - `game`: Top-level driver tying the simulation to its collaborators
//! - `render`: Display list and vertex generation for a host renderer
//! - `audio`: Sound effects keyed by simulation events
//! - `platform`: Input mapping and demo autopilot
//! - `persistence`: High score storage

pub mod audio;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod render;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use game::Game;
pub use settings::Settings;

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Fixed simulation tick (50 Hz)
    pub const TICK_PERIOD: Duration = Duration::from_millis(20);

    /// Playing field dimensions
    pub const FIELD_WIDTH: f64 = 800.0;
    pub const FIELD_HEIGHT: f64 = 600.0;

    /// Brick grid
    pub const BRICK_WIDTH: f64 = 40.0;
    pub const BRICK_HEIGHT: f64 = 20.0;
    pub const BRICK_COLUMNS: usize = 10;
    pub const BRICK_ROWS: usize = 5;
    /// Horizontal gap between bricks (column pitch = width + gap)
    pub const BRICK_GAP_X: f64 = 30.0;
    /// Vertical gap between rows (row pitch = height + gap)
    pub const BRICK_GAP_Y: f64 = 15.0;
    /// Top edge of the first row
    pub const BRICK_TOP: f64 = 50.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f64 = 140.0;
    pub const PADDLE_HEIGHT: f64 = 30.0;
    pub const PADDLE_SPEED: f64 = 10.0;

    /// Ball defaults
    pub const BALL_SIZE: f64 = 30.0;
    pub const BALL_START_SPEED: f64 = 10.0;
    /// Speed gained per brick destroyed
    pub const BALL_ACCELERATION: f64 = 0.15;
    /// The two launch headings (degrees), picked at random
    pub const LAUNCH_ANGLES: [f64; 2] = [45.0, 135.0];

    /// Score that ends the round as a win (every brick cleared)
    pub const WIN_SCORE: u32 = 50;
}

/// Degrees to a unit heading in screen space (y grows downward)
#[inline]
pub fn heading(direction_deg: f64) -> DVec2 {
    let rad = direction_deg.to_radians();
    DVec2::new(rad.cos(), -rad.sin())
}

/// Angle from `from` to `to` in degrees, lifted into [0, 360)
#[inline]
pub fn angle_between(from: DVec2, to: DVec2) -> f64 {
    let d = to - from;
    let mut angle = d.y.atan2(d.x).to_degrees();
    if angle < 0.0 {
        angle += 360.0;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_screen_space() {
        // 90° points up the screen, so y shrinks
        let h = heading(90.0);
        assert!(h.x.abs() < 1e-12);
        assert!((h.y + 1.0).abs() < 1e-12);

        let h = heading(0.0);
        assert!((h.x - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_angle_between_is_non_negative() {
        let a = angle_between(DVec2::new(0.0, 0.0), DVec2::new(1.0, -1.0));
        assert!((a - 315.0).abs() < 1e-9);

        let a = angle_between(DVec2::new(0.0, 0.0), DVec2::new(-1.0, 1.0));
        assert!((a - 135.0).abs() < 1e-9);
    }
}
