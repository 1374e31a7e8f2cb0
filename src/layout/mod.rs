//! Text layout utilities for positioning content on pages.
//!
//! Wrapping is split into two steps: [`WrapRequest::wrap`] greedily packs words
//! into lines under a width limit, and [`LineSequence::positioned`] assigns each
//! line its baseline. Neither step touches a page, so drawing the result is left
//! to [`Canvas::draw_wrapped`](crate::Canvas::draw_wrapped) (or anything else
//! that can place text at a coordinate).
//!
//! Every layout call returns the cursor just below its last line, so that
//! several independently wrapped blocks can be stacked without overlapping.
//!
//! # Example
//!
//! ```
//! use qr_card::{BuiltinFont, Pt};
//! use qr_card::layout::WrapRequest;
//!
//! let text = "So funktioniert es: scannen, spielen und den Gutschein einlösen.";
//! let request = WrapRequest::new(text, Pt(120.0), &BuiltinFont::Helvetica, Pt(10.5))
//!     .with_line_spacing(Pt(13.0));
//!
//! let block = request.layout(Pt(200.0));
//! assert!(block.lines.len() > 1);
//! assert_eq!(block.cursor, Pt(200.0) - Pt(13.0) * block.lines.len() as f32);
//! ```

mod margins;
mod text;

pub use margins::*;
pub use text::*;
