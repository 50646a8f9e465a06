//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`]; there is no
//! global state.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for start input
    Unstarted,
    /// Active gameplay
    Playing,
    /// Round ended (terminal)
    Over,
}

/// Something that happened during a tick, for presentation collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Process booted (title music)
    Intro,
    /// Start input accepted, entities spawned
    RoundStarted,
    /// Ball bounced off a side or the top wall
    WallBounce,
    /// Ball bounced off the paddle
    PaddleBounce,
    /// Ball destroyed a brick
    BrickHit,
    /// Ball reached the bottom of the field
    BallLost,
    /// Score reached the win threshold
    Won,
    /// Round ended above the stored high score
    NewHighScore { score: u32 },
}

/// An sRGB color packed as 0xRRGGBB
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);
    pub const GREY: Color = Color(0x808080);
    pub const YELLOW: Color = Color(0xffff00);

    /// Brick row colors, top row first
    pub const BRICK_ROWS: [Color; BRICK_ROWS] = [
        Color(0x993300),
        Color(0xff0000),
        Color(0xff99cc),
        Color(0x00ff00),
        Color(0xffff99),
    ];

    /// Shadow shade: every hex digit lowered by 5, floored at 0
    pub fn darker(self) -> Color {
        let mut out = 0u32;
        for nibble in 0..6 {
            let shift = nibble * 4;
            let digit = (self.0 >> shift) & 0xf;
            out |= digit.saturating_sub(5) << shift;
        }
        Color(out)
    }

    /// Linear RGBA in 0..=1 (alpha 1)
    pub fn to_rgba(self) -> [f32; 4] {
        let r = ((self.0 >> 16) & 0xff) as f32 / 255.0;
        let g = ((self.0 >> 8) & 0xff) as f32 / 255.0;
        let b = (self.0 & 0xff) as f32 / 255.0;
        [r, g, b, 1.0]
    }

    /// CSS hex string, e.g. `#ff99cc`
    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.0)
    }
}

/// Entity type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Brick,
    Paddle,
    Ball,
}

/// A static brick in the grid
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    pub rect: Rect,
    pub color: Color,
    /// Set when struck; the brick is dropped at the end of the tick
    pub marked_for_removal: bool,
}

impl Brick {
    pub fn new(x: f64, y: f64, color: Color) -> Self {
        Self {
            rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
            color,
            marked_for_removal: false,
        }
    }
}

/// The player's paddle (horizontal movement only)
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            rect: Rect::new(x, y, PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }
}

impl Default for Paddle {
    fn default() -> Self {
        Self::new(FIELD_WIDTH / 2.0 - 60.0, FIELD_HEIGHT - 50.0)
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    /// Heading in degrees (0 = right, 90 = up the screen)
    pub direction: f64,
    /// Distance travelled per tick
    pub speed: f64,
}

impl Ball {
    pub fn new(x: f64, y: f64, direction: f64, speed: f64) -> Self {
        Self {
            rect: Rect::new(x, y, BALL_SIZE, BALL_SIZE),
            direction,
            speed,
        }
    }

    /// Ball at its launch spot with the given heading
    pub fn launch(direction: f64) -> Self {
        Self::new(
            FIELD_WIDTH / 2.0 - BALL_SIZE / 2.0,
            FIELD_HEIGHT - 100.0,
            direction,
            BALL_START_SPEED,
        )
    }

    #[inline]
    pub fn pos(&self) -> DVec2 {
        self.rect.pos
    }
}

/// Any simulated object in the field
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    Brick(Brick),
    Paddle(Paddle),
    Ball(Ball),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Brick(_) => EntityKind::Brick,
            Entity::Paddle(_) => EntityKind::Paddle,
            Entity::Ball(_) => EntityKind::Ball,
        }
    }

    pub fn rect(&self) -> &Rect {
        match self {
            Entity::Brick(b) => &b.rect,
            Entity::Paddle(p) => &p.rect,
            Entity::Ball(b) => &b.rect,
        }
    }

    /// True for bricks that were struck this tick
    pub fn is_marked_for_removal(&self) -> bool {
        matches!(self, Entity::Brick(b) if b.marked_for_removal)
    }
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Bricks destroyed this round
    pub score: u32,
    /// Best score known when the process started
    pub high_score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// All entities in update order: bricks row-major, paddle, ball
    pub entities: Vec<Entity>,
}

impl GameState {
    /// Create a title-screen state with the given seed and stored high score
    pub fn new(seed: u64, high_score: u32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Unstarted,
            score: 0,
            high_score,
            time_ticks: 0,
            entities: Vec::new(),
        }
    }

    /// Spawn the brick grid, paddle and ball for a new round
    pub fn spawn_entities(&mut self) {
        self.entities.clear();
        for (row, color) in Color::BRICK_ROWS.iter().enumerate() {
            let y = BRICK_TOP + row as f64 * (BRICK_HEIGHT + BRICK_GAP_Y);
            for col in 1..=BRICK_COLUMNS {
                let x = col as f64 * (BRICK_WIDTH + BRICK_GAP_X);
                self.entities.push(Entity::Brick(Brick::new(x, y, *color)));
            }
        }

        self.entities.push(Entity::Paddle(Paddle::default()));

        let direction = if self.rng.random_bool(0.5) {
            LAUNCH_ANGLES[0]
        } else {
            LAUNCH_ANGLES[1]
        };
        self.entities.push(Entity::Ball(Ball::launch(direction)));
    }

    /// Index of the ball in the entity list
    pub fn ball_index(&self) -> Option<usize> {
        self.entities
            .iter()
            .position(|e| e.kind() == EntityKind::Ball)
    }

    pub fn ball(&self) -> Option<&Ball> {
        self.entities.iter().find_map(|e| match e {
            Entity::Ball(b) => Some(b),
            _ => None,
        })
    }

    pub fn ball_mut(&mut self) -> Option<&mut Ball> {
        self.entities.iter_mut().find_map(|e| match e {
            Entity::Ball(b) => Some(b),
            _ => None,
        })
    }

    pub fn paddle(&self) -> Option<&Paddle> {
        self.entities.iter().find_map(|e| match e {
            Entity::Paddle(p) => Some(p),
            _ => None,
        })
    }

    pub fn paddle_mut(&mut self) -> Option<&mut Paddle> {
        self.entities.iter_mut().find_map(|e| match e {
            Entity::Paddle(p) => Some(p),
            _ => None,
        })
    }

    pub fn bricks(&self) -> impl Iterator<Item = &Brick> {
        self.entities.iter().filter_map(|e| match e {
            Entity::Brick(b) => Some(b),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_darker_color() {
        assert_eq!(Color(0x993300).darker(), Color(0x440000));
        assert_eq!(Color(0xff99cc).darker(), Color(0xaa4477));
        assert_eq!(Color(0x00ff00).darker(), Color(0x00aa00));
        assert_eq!(Color(0x123456).darker(), Color(0x000001));
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color(0x00ff00).to_hex(), "#00ff00");
        assert_eq!(Color::WHITE.to_rgba(), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_spawn_layout() {
        let mut state = GameState::new(7, 0);
        state.spawn_entities();

        assert_eq!(state.entities.len(), BRICK_ROWS * BRICK_COLUMNS + 2);
        assert_eq!(state.bricks().count(), 50);

        // Creation order: bricks, paddle, ball
        assert_eq!(state.entities[50].kind(), EntityKind::Paddle);
        assert_eq!(state.entities[51].kind(), EntityKind::Ball);
        assert_eq!(state.ball_index(), Some(51));

        let first = state.bricks().next().unwrap();
        assert_eq!(first.rect, Rect::new(70.0, 50.0, 40.0, 20.0));
        assert_eq!(first.color, Color(0x993300));

        let last = state.bricks().last().unwrap();
        assert_eq!(last.rect, Rect::new(700.0, 190.0, 40.0, 20.0));
        assert_eq!(last.color, Color(0xffff99));

        assert_eq!(
            state.paddle().unwrap().rect,
            Rect::new(340.0, 550.0, 140.0, 30.0)
        );

        let ball = state.ball().unwrap();
        assert_eq!(ball.rect, Rect::new(385.0, 500.0, 30.0, 30.0));
        assert_eq!(ball.speed, 10.0);
        assert!(ball.direction == 45.0 || ball.direction == 135.0);
    }

    #[test]
    fn test_launch_angle_is_seeded() {
        let mut a = GameState::new(1234, 0);
        let mut b = GameState::new(1234, 0);
        a.spawn_entities();
        b.spawn_entities();
        assert_eq!(a.ball().unwrap().direction, b.ball().unwrap().direction);
    }

    #[test]
    fn test_launch_angle_uses_both_headings() {
        let seen: std::collections::HashSet<u64> = (0..64)
            .map(|seed| {
                let mut s = GameState::new(seed, 0);
                s.spawn_entities();
                s.ball().unwrap().direction as u64
            })
            .collect();
        assert!(seen.contains(&45));
        assert!(seen.contains(&135));
    }
}
