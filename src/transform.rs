//! Affine transforms for placing image XObjects.

use crate::rect::Rect;
use crate::units::Pt;
use pdf_writer::Content;

/// A PDF current transformation matrix `[a b c d e f]`, mapping `(x, y)` to
/// `(a·x + c·y + e, b·x + d·y + f)`.
///
/// Image XObjects are always drawn into the unit square, so placing one means
/// concatenating the matrix that stretches that square over the target box:
///
/// ```
/// use qr_card::{Pt, Rect, Transform};
///
/// let target = Rect::from_xywh(Pt(219.0), Pt(56.0), Pt(184.0), Pt(184.0));
/// let t = Transform::unit_square_to(&target);
/// assert_eq!(t.apply(0.0, 0.0), (219.0, 56.0));
/// assert_eq!(t.apply(1.0, 1.0), (403.0, 240.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform(pub [f32; 6]);

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    /// The transform that maps the unit square onto `rect`
    pub fn unit_square_to(rect: &Rect) -> Transform {
        Transform([
            *rect.width(),
            0.0,
            0.0,
            *rect.height(),
            *rect.x1,
            *rect.y1,
        ])
    }

    /// Shift by `(dx, dy)` after applying `self`
    pub fn translated(self, dx: Pt, dy: Pt) -> Transform {
        let [a, b, c, d, e, f] = self.0;
        Transform([a, b, c, d, e + *dx, f + *dy])
    }

    /// Map a point through the matrix
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        let [a, b, c, d, e, f] = self.0;
        (a * x + c * y + e, b * x + d * y + f)
    }

    /// Append a `cm` operator to a content stream
    pub fn write_to_content(&self, content: &mut Content) {
        content.transform(self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_square_corners_land_on_the_rect() {
        let rect = Rect::from_xywh(Pt(10.0), Pt(20.0), Pt(65.0), Pt(40.0));
        let t = Transform::unit_square_to(&rect);
        assert_eq!(t, Transform([65.0, 0.0, 0.0, 40.0, 10.0, 20.0]));
        assert_eq!(t.apply(1.0, 0.0), (75.0, 20.0));
        assert_eq!(t.apply(0.0, 1.0), (10.0, 60.0));
    }

    #[test]
    fn translation_moves_without_scaling() {
        let t = Transform::IDENTITY.translated(Pt(3.0), Pt(-4.0));
        assert_eq!(t.apply(1.0, 1.0), (4.0, -3.0));
        assert_eq!(Transform::default(), Transform::IDENTITY);
    }

    #[test]
    fn writes_a_cm_operator() {
        let mut content = Content::new();
        Transform::unit_square_to(&Rect::from_xywh(Pt(1.0), Pt(2.0), Pt(3.0), Pt(4.0)))
            .write_to_content(&mut content);
        let written = String::from_utf8(content.finish()).unwrap();
        assert_eq!(written.trim_end(), "3 0 0 4 1 2 cm");
    }
}
