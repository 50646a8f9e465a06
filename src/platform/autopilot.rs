//! Idle/demo mode: the game plays itself
//!
//! Presses start on the title screen, then keeps the paddle under the ball.

use crate::consts::PADDLE_SPEED;
use crate::sim::{GamePhase, GameState, TickInput};

/// Overwrite the steering flags in `input` with the autopilot's choice
pub fn steer(state: &GameState, input: &mut TickInput) {
    match state.phase {
        GamePhase::Unstarted => input.start = true,
        GamePhase::Playing => {
            let (Some(ball), Some(paddle)) = (state.ball(), state.paddle()) else {
                return;
            };
            let offset = ball.rect.center().x - paddle.rect.center().x;
            // Dead zone of one paddle step avoids jitter around the target
            input.right = offset > PADDLE_SPEED;
            input.left = offset < -PADDLE_SPEED;
        }
        GamePhase::Over => {}
    }
}
