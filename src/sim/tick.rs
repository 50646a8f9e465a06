//! Fixed timestep simulation tick
//!
//! One call to [`tick`] is one 20 ms frame of the arcade loop.
//! Side effects are returned as [`GameEvent`]s instead of being performed.

use super::collision::{BounceAxis, bounce_axis};
use super::state::{Ball, Brick, Entity, GameEvent, GamePhase, GameState, Paddle};
use crate::angle_between;
use crate::consts::*;

/// Input flags for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move paddle left
    pub left: bool,
    /// Move paddle right
    pub right: bool,
    /// Start the round from the title screen
    pub start: bool,
    /// Idle/demo mode - the autopilot plays the game
    pub idle_mode: bool,
}

/// What the ball found at the field edges during its update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub side: bool,
    pub top: bool,
    /// Bottom edge reached: the round is lost
    pub bottom: bool,
}

impl Ball {
    /// Wall bounces, loss detection, then movement along the heading.
    ///
    /// Reflected headings are left as the remainder produced them, so a
    /// negative direction can reach the trig below.
    pub fn update(&mut self) -> WallContact {
        let mut contact = WallContact::default();

        if self.rect.left() <= 0.0 || self.rect.right() >= FIELD_WIDTH {
            self.direction = BounceAxis::Horizontal.reflect(self.direction);
            contact.side = true;
        }
        if self.rect.top() <= 0.0 {
            self.direction = BounceAxis::Vertical.reflect(self.direction);
            contact.top = true;
        }
        if self.rect.bottom() >= FIELD_HEIGHT {
            contact.bottom = true;
        }

        self.rect.pos += crate::heading(self.direction) * self.speed;
        contact
    }

    /// Respond to an overlap with another entity.
    ///
    /// Returns true when the other entity was touched at all.
    pub fn check_collision(&mut self, other: &mut Entity, events: &mut Vec<GameEvent>) -> bool {
        if !self.rect.overlaps(other.rect()) {
            return false;
        }

        match other {
            Entity::Brick(brick) => self.hit_brick(brick, events),
            Entity::Paddle(paddle) => self.hit_paddle(paddle, events),
            // Never collides with itself
            Entity::Ball(_) => return false,
        }

        // Single correction pass, not a full normalization
        if self.direction < 0.0 {
            self.direction += 360.0;
        }
        true
    }

    fn hit_brick(&mut self, brick: &mut Brick, events: &mut Vec<GameEvent>) {
        brick.marked_for_removal = true;
        self.speed += BALL_ACCELERATION;
        events.push(GameEvent::BrickHit);

        let axis = bounce_axis(&self.rect, &brick.rect);
        self.direction = axis.reflect(self.direction);
        log::debug!(
            "Brick hit at ({}, {}), {:?} bounce, speed {:.2}",
            brick.rect.pos.x,
            brick.rect.pos.y,
            axis,
            self.speed
        );
    }

    /// The rebound heading depends only on where the ball sits relative to
    /// the paddle center, not on the incoming heading.
    fn hit_paddle(&mut self, paddle: &Paddle, events: &mut Vec<GameEvent>) {
        events.push(GameEvent::PaddleBounce);
        let angle = angle_between(self.rect.center(), paddle.rect.center());
        self.direction = (180.0 - angle) % 360.0;
    }
}

impl Paddle {
    pub fn update(&mut self, input: &TickInput) {
        if input.right && self.rect.right() < FIELD_WIDTH {
            self.rect.pos.x += PADDLE_SPEED;
        } else if input.left && self.rect.left() > 0.0 {
            self.rect.pos.x -= PADDLE_SPEED;
        }
    }
}

impl Brick {
    /// Bricks are static
    pub fn update(&mut self) {}
}

impl Entity {
    /// Per-tick update. Only the ball reports wall contact.
    pub fn update(&mut self, input: &TickInput) -> Option<WallContact> {
        match self {
            Entity::Brick(brick) => {
                brick.update();
                None
            }
            Entity::Paddle(paddle) => {
                paddle.update(input);
                None
            }
            Entity::Ball(ball) => Some(ball.update()),
        }
    }
}

/// Advance the game by one tick, returning the events it produced
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    let mut input = input.clone();
    if input.idle_mode {
        crate::platform::autopilot::steer(state, &mut input);
    }
    let input = &input;

    state.time_ticks += 1;

    match state.phase {
        GamePhase::Unstarted => {
            if input.start {
                state.phase = GamePhase::Playing;
                state.spawn_entities();
                events.push(GameEvent::RoundStarted);
                log::info!("Round started (seed {})", state.seed);
            }
        }

        GamePhase::Playing => {
            play_tick(state, input, &mut events);

            if state.phase == GamePhase::Over {
                finish_round(state, &mut events);
            }
        }

        GamePhase::Over => {}
    }

    events
}

/// Update each entity in order, checking it against the ball right after
fn play_tick(state: &mut GameState, input: &TickInput, events: &mut Vec<GameEvent>) {
    let Some(ball_idx) = state.ball_index() else {
        log::warn!("Playing without a ball");
        return;
    };

    for i in 0..state.entities.len() {
        if let Some(contact) = state.entities[i].update(input) {
            if contact.side {
                events.push(GameEvent::WallBounce);
            }
            if contact.top {
                events.push(GameEvent::WallBounce);
            }
            if contact.bottom {
                state.phase = GamePhase::Over;
                events.push(GameEvent::BallLost);
                log::info!("Ball lost with score {}", state.score);
            }
        }

        if i == ball_idx {
            continue;
        }
        let Some((ball, other)) = ball_and_other(&mut state.entities, ball_idx, i) else {
            continue;
        };
        let was_brick = other.kind() == super::state::EntityKind::Brick;
        if ball.check_collision(other, events) && was_brick {
            state.score += 1;
        }
    }

    state.entities.retain(|e| !e.is_marked_for_removal());

    if state.score >= WIN_SCORE {
        state.phase = GamePhase::Over;
        events.push(GameEvent::Won);
        log::info!("All bricks cleared, score {}", state.score);
    }
}

/// Mutable access to the ball and one other entity at the same time
fn ball_and_other(
    entities: &mut [Entity],
    ball_idx: usize,
    other_idx: usize,
) -> Option<(&mut Ball, &mut Entity)> {
    let (ball, other) = if ball_idx < other_idx {
        let (head, tail) = entities.split_at_mut(other_idx);
        (&mut head[ball_idx], &mut tail[0])
    } else {
        let (head, tail) = entities.split_at_mut(ball_idx);
        (&mut tail[0], &mut head[other_idx])
    };
    match ball {
        Entity::Ball(ball) => Some((ball, other)),
        _ => None,
    }
}

/// Entering Over: report a new best score so the driver can persist it
fn finish_round(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.score > state.high_score {
        log::info!("New high score: {} (was {})", state.score, state.high_score);
        state.high_score = state.score;
        events.push(GameEvent::NewHighScore { score: state.score });
    }
}
