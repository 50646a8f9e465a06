//! Display list: what to draw for the current state
//!
//! Coordinates are in field space (800×600, origin top-left). Commands are
//! in painter's order.

use serde::{Deserialize, Serialize};

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::{Color, Entity, GamePhase, GameState, Rect};

/// Horizontal anchor for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// A single draw primitive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        font_px: f32,
        align: TextAlign,
        color: Color,
    },
}

impl DrawCommand {
    pub fn text(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_px: f32,
        align: TextAlign,
        color: Color,
    ) -> Self {
        DrawCommand::Text {
            text: text.into(),
            x,
            y,
            font_px,
            align,
            color,
        }
    }
}

/// Offset of the lit face from its shadow
const FACE_OFFSET: f64 = -2.0;

/// Shadow at the entity position, face nudged up-left on top of it
fn shaded_rect(out: &mut Vec<DrawCommand>, rect: &Rect, face: Color, shadow: Color) {
    out.push(DrawCommand::Rect {
        rect: *rect,
        color: shadow,
    });
    let mut lit = *rect;
    lit.pos.x += FACE_OFFSET;
    lit.pos.y += FACE_OFFSET;
    out.push(DrawCommand::Rect {
        rect: lit,
        color: face,
    });
}

/// Build the draw commands for the current frame
pub fn display_list(state: &GameState) -> Vec<DrawCommand> {
    let mut out = Vec::new();
    let cx = FIELD_WIDTH / 2.0;
    let cy = FIELD_HEIGHT / 2.0;

    match state.phase {
        GamePhase::Unstarted => {
            out.push(DrawCommand::text("BREAKOUT", cx, cy, 36.0, TextAlign::Center, Color::WHITE));
            out.push(DrawCommand::text(
                "Press SPACE to begin",
                cx,
                cy + 30.0,
                18.0,
                TextAlign::Center,
                Color::WHITE,
            ));
        }

        GamePhase::Playing => {
            out.push(DrawCommand::text(
                format!("Current score: {}", state.score),
                20.0,
                20.0,
                18.0,
                TextAlign::Left,
                Color::WHITE,
            ));
            out.push(DrawCommand::text(
                format!("High score: {}", state.high_score),
                FIELD_WIDTH - 100.0,
                20.0,
                18.0,
                TextAlign::Right,
                Color::WHITE,
            ));

            for entity in &state.entities {
                match entity {
                    Entity::Brick(brick) => {
                        shaded_rect(&mut out, &brick.rect, brick.color, brick.color.darker())
                    }
                    Entity::Paddle(paddle) => {
                        shaded_rect(&mut out, &paddle.rect, Color::WHITE, Color::GREY)
                    }
                    Entity::Ball(ball) => shaded_rect(&mut out, &ball.rect, Color::WHITE, Color::GREY),
                }
            }
        }

        GamePhase::Over => {
            out.push(DrawCommand::text(
                "GAME OVER",
                cx,
                cy - 40.0,
                40.0,
                TextAlign::Center,
                Color::YELLOW,
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{TickInput, tick};

    fn texts(commands: &[DrawCommand]) -> Vec<&str> {
        commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_title_screen() {
        let state = GameState::new(1, 0);
        let list = display_list(&state);
        assert_eq!(texts(&list), vec!["BREAKOUT", "Press SPACE to begin"]);
    }

    #[test]
    fn test_play_screen_draws_hud_and_entities() {
        let mut state = GameState::new(1, 14);
        tick(
            &mut state,
            &TickInput {
                start: true,
                ..Default::default()
            },
        );
        let list = display_list(&state);

        assert_eq!(texts(&list), vec!["Current score: 0", "High score: 14"]);
        // Two rects per entity: 50 bricks, paddle, ball
        assert_eq!(list.len(), 2 + 52 * 2);

        // First brick: darker shadow at its position, face offset up-left
        assert_eq!(
            list[2],
            DrawCommand::Rect {
                rect: Rect::new(70.0, 50.0, 40.0, 20.0),
                color: Color(0x440000),
            }
        );
        assert_eq!(
            list[3],
            DrawCommand::Rect {
                rect: Rect::new(68.0, 48.0, 40.0, 20.0),
                color: Color(0x993300),
            }
        );
    }

    #[test]
    fn test_game_over_banner_only() {
        let mut state = GameState::new(1, 0);
        state.spawn_entities();
        state.phase = GamePhase::Over;
        let list = display_list(&state);
        assert_eq!(list.len(), 1);
        assert!(matches!(
            &list[0],
            DrawCommand::Text { text, color, .. } if text == "GAME OVER" && *color == Color::YELLOW
        ));
    }

    #[test]
    fn test_json_shape() {
        let cmd = DrawCommand::text("x", 1.0, 2.0, 18.0, TextAlign::Right, Color::WHITE);
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["align"], "right");
    }
}
