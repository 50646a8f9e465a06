//! Shape generation for 2D primitives

use glam::{DVec2, Vec2};

use super::display::DrawCommand;
use super::vertex::Vertex;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::Rect;

/// Field coordinates (origin top-left, y down) to normalized device coordinates
#[inline]
pub fn to_ndc(p: DVec2) -> Vec2 {
    Vec2::new(
        (p.x / FIELD_WIDTH * 2.0 - 1.0) as f32,
        (1.0 - p.y / FIELD_HEIGHT * 2.0) as f32,
    )
}

/// Two triangles covering a rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let tl = to_ndc(r.pos);
    let br = to_ndc(r.pos + r.size);

    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(br.x, tl.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(tl.x, br.y, color),
        Vertex::new(br.x, tl.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

/// Vertices for every rectangle in a display list, in draw order.
///
/// Text is left to the host.
pub fn vertices(commands: &[DrawCommand]) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(commands.len() * 6);
    for command in commands {
        if let DrawCommand::Rect { rect: r, color } = command {
            out.extend_from_slice(&rect(r, color.to_rgba()));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::TextAlign;
    use crate::sim::Color;

    #[test]
    fn test_ndc_corners() {
        assert_eq!(to_ndc(DVec2::ZERO), Vec2::new(-1.0, 1.0));
        assert_eq!(to_ndc(DVec2::new(FIELD_WIDTH, FIELD_HEIGHT)), Vec2::new(1.0, -1.0));
        assert_eq!(to_ndc(DVec2::new(400.0, 300.0)), Vec2::ZERO);
    }

    #[test]
    fn test_rect_triangles() {
        let verts = rect(&Rect::new(0.0, 0.0, 400.0, 300.0), [1.0; 4]);
        assert_eq!(verts[0].position, [-1.0, 1.0]);
        assert_eq!(verts[5].position, [0.0, 0.0]);
    }

    #[test]
    fn test_text_is_skipped() {
        let commands = vec![
            DrawCommand::Rect {
                rect: Rect::new(10.0, 10.0, 5.0, 5.0),
                color: Color::WHITE,
            },
            DrawCommand::text("hi", 0.0, 0.0, 18.0, TextAlign::Left, Color::WHITE),
        ];
        assert_eq!(vertices(&commands).len(), 6);
    }
}
