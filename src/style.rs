//! Drawing state passed explicitly to every [Canvas](crate::Canvas) call.
//!
//! PDF content streams carry an implicit graphics state (current colours, alpha,
//! font, line width). Rather than mirroring that as mutable state on the canvas,
//! every draw call takes the [Style] or [TextStyle] it should be drawn with, and
//! the canvas wraps each shape in its own save/restore pair.

use crate::colour::Colour;
use crate::font::BuiltinFont;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use id_arena::Id;
use pdf_writer::Pdf;

/// How a shape is painted. A shape with neither a fill nor a stroke is not drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub fill: Option<Colour>,
    pub stroke: Option<Colour>,
    /// Opacity of the fill, from 0.0 (invisible) to 1.0 (opaque)
    pub fill_alpha: Option<f32>,
    /// Opacity of the stroke, from 0.0 (invisible) to 1.0 (opaque)
    pub stroke_alpha: Option<f32>,
    pub line_width: Option<Pt>,
}

impl Style {
    pub fn filled(colour: Colour) -> Style {
        Style {
            fill: Some(colour),
            ..Style::default()
        }
    }

    pub fn stroked(colour: Colour) -> Style {
        Style {
            stroke: Some(colour),
            ..Style::default()
        }
    }

    pub fn with_fill_alpha(self, alpha: f32) -> Style {
        Style {
            fill_alpha: Some(alpha),
            ..self
        }
    }

    pub fn with_stroke_alpha(self, alpha: f32) -> Style {
        Style {
            stroke_alpha: Some(alpha),
            ..self
        }
    }

    pub fn with_line_width(self, width: Pt) -> Style {
        Style {
            line_width: Some(width),
            ..self
        }
    }

    /// The transparency parameters this style needs, if any
    pub fn graphics_state(&self) -> Option<GraphicsState> {
        if self.fill_alpha.is_none() && self.stroke_alpha.is_none() {
            return None;
        }
        Some(GraphicsState {
            fill_alpha: self.fill_alpha,
            stroke_alpha: self.stroke_alpha,
        })
    }
}

/// How a run of text is drawn
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font: Id<BuiltinFont>,
    pub size: Pt,
    pub colour: Colour,
}

impl TextStyle {
    pub fn new(font: Id<BuiltinFont>, size: Pt, colour: Colour) -> TextStyle {
        TextStyle { font, size, colour }
    }
}

/// An `ExtGState` dictionary holding transparency parameters. Graphics states
/// are shared across the document: identical states are only written once.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GraphicsState {
    pub fill_alpha: Option<f32>,
    pub stroke_alpha: Option<f32>,
}

impl GraphicsState {
    pub(crate) fn write(&self, refs: &mut ObjectReferences, index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::GraphicsState(index));
        let mut state = writer.ext_graphics(id);
        if let Some(alpha) = self.fill_alpha {
            state.non_stroking_alpha(alpha);
        }
        if let Some(alpha) = self.stroke_alpha {
            state.stroking_alpha(alpha);
        }
    }
}
