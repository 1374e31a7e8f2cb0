//! A drawing surface for a single page.
//!
//! The canvas borrows the [Document] it draws into so that shared resources
//! (fonts, images, transparency states) can be registered while drawing, and
//! hands the finished [Page] back to the document with [Canvas::finish].

use crate::colour::Colour;
use crate::document::Document;
use crate::font::BuiltinFont;
use crate::image::Image;
use crate::layout::{width_of_text, Margins, WrapRequest};
use crate::page::{ImageLayout, Page, SpanFont, SpanLayout};
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::style::{Style, TextStyle};
use crate::units::Pt;
use id_arena::Id;
use log::debug;
use pdf_writer::{Content, Name};

/// Distance of the Bézier control points from the corner of a quarter circle,
/// as a fraction of the radius
const KAPPA: f32 = 0.552_284_8;

pub struct Canvas<'d> {
    document: &'d mut Document,
    page: Page,
}

impl<'d> Canvas<'d> {
    /// Start a new, empty page of the given size
    pub fn new(document: &'d mut Document, size: PageSize) -> Canvas<'d> {
        Canvas {
            document,
            page: Page::new(size, None),
        }
    }

    /// Start a new page whose content box is inset by `margins`
    pub fn with_margins(document: &'d mut Document, size: PageSize, margins: Margins) -> Canvas<'d> {
        Canvas {
            document,
            page: Page::new(size, Some(margins)),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn width(&self) -> Pt {
        self.page.width()
    }

    pub fn height(&self) -> Pt {
        self.page.height()
    }

    /// The font a document-registered id refers to
    pub fn font(&self, id: Id<BuiltinFont>) -> BuiltinFont {
        self.document.fonts[id]
    }

    /// Width of `text` exactly as [Canvas::draw_text] would set it
    pub fn measure_text_width(&self, text: &str, font: Id<BuiltinFont>, size: Pt) -> Pt {
        width_of_text(text, &self.font(font), size)
    }

    /// Draw an axis-aligned rectangle
    pub fn rect(&mut self, rect: Rect, style: &Style) {
        self.paint(style, |content| {
            content.rect(*rect.x1, *rect.y1, *rect.width(), *rect.height());
        });
    }

    /// Fill an axis-aligned rectangle with a solid, opaque colour
    pub fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        self.rect(rect, &Style::filled(colour));
    }

    /// Draw a circle centred on `(cx, cy)`
    pub fn circle(&mut self, cx: Pt, cy: Pt, radius: Pt, style: &Style) {
        self.paint(style, |content| circle_path(content, *cx, *cy, *radius));
    }

    /// Draw a straight line. Only the style's stroke is used.
    pub fn line(&mut self, from: (Pt, Pt), to: (Pt, Pt), style: &Style) {
        let style = Style {
            fill: None,
            fill_alpha: None,
            ..*style
        };
        self.paint(&style, |content| {
            content.move_to(*from.0, *from.1);
            content.line_to(*to.0, *to.1);
        });
    }

    /// Draw a rectangle with rounded corners. The radius is clamped to half
    /// of the shorter side.
    pub fn round_rect(&mut self, rect: Rect, radius: Pt, style: &Style) {
        self.paint(style, |content| round_rect_path(content, &rect, *radius));
    }

    /// Draw a single line of text with its baseline starting at `(x, y)`
    pub fn draw_text(&mut self, x: Pt, y: Pt, text: &str, style: &TextStyle) {
        self.page.add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                id: style.font,
                size: style.size,
            },
            colour: style.colour,
            coords: (x, y),
        });
    }

    /// Draw a single line of text horizontally centred on `cx`
    pub fn draw_centred_text(&mut self, cx: Pt, y: Pt, text: &str, style: &TextStyle) {
        let width = self.measure_text_width(text, style.font, style.size);
        self.draw_text(cx - width / 2.0, y, text, style);
    }

    /// Wrap `text` to `max_width` and draw it line by line, the first baseline
    /// at `start_y`. Returns the cursor just below the last line drawn.
    pub fn draw_wrapped(
        &mut self,
        x: Pt,
        start_y: Pt,
        text: &str,
        max_width: Pt,
        style: &TextStyle,
        line_spacing: Option<Pt>,
    ) -> Pt {
        let font = self.font(style.font);
        let request = WrapRequest {
            line_spacing,
            ..WrapRequest::new(text, max_width, &font, style.size)
        };
        let block = request.layout(start_y);
        debug!(lines = block.lines.len(), max_width:% = max_width; "Wrapped text block");

        for line in block.lines.iter() {
            self.draw_text(x, line.y, &line.text, style);
        }
        block.cursor
    }

    /// Draw a document image stretched to fill `position`
    pub fn draw_image(&mut self, image_id: Id<Image>, position: Rect) {
        self.page.add_image(ImageLayout { image_id, position });
    }

    /// Hand the page over to the document
    pub fn finish(self) -> Id<Page> {
        self.document.add_page(self.page)
    }

    fn paint<P: FnOnce(&mut Content)>(&mut self, style: &Style, path: P) {
        let paint_op: fn(&mut Content) -> &mut Content = match (style.fill, style.stroke) {
            (Some(_), Some(_)) => Content::fill_nonzero_and_stroke,
            (Some(_), None) => Content::fill_nonzero,
            (None, Some(_)) => Content::stroke,
            (None, None) => return,
        };

        let mut content = Content::new();
        if let Some(state) = style.graphics_state() {
            let id = self.document.add_graphics_state(state);
            content.set_parameters(Name(format!("GS{}", id.index()).as_bytes()));
        }
        if let Some(fill) = style.fill {
            fill.apply_fill(&mut content);
        }
        if let Some(stroke) = style.stroke {
            stroke.apply_stroke(&mut content);
        }
        if let Some(width) = style.line_width {
            content.set_line_width(*width);
        }

        path(&mut content);
        paint_op(&mut content);
        self.page.add_content(content);
    }
}

fn circle_path(content: &mut Content, cx: f32, cy: f32, r: f32) {
    let k = KAPPA * r;
    content.move_to(cx + r, cy);
    content.cubic_to(cx + r, cy + k, cx + k, cy + r, cx, cy + r);
    content.cubic_to(cx - k, cy + r, cx - r, cy + k, cx - r, cy);
    content.cubic_to(cx - r, cy - k, cx - k, cy - r, cx, cy - r);
    content.cubic_to(cx + k, cy - r, cx + r, cy - k, cx + r, cy);
    content.close_path();
}

fn round_rect_path(content: &mut Content, rect: &Rect, radius: f32) {
    let (x1, y1, x2, y2) = (*rect.x1, *rect.y1, *rect.x2, *rect.y2);
    let r = radius
        .min((x2 - x1).abs() / 2.0)
        .min((y2 - y1).abs() / 2.0)
        .max(0.0);
    let k = KAPPA * r;

    content.move_to(x1 + r, y1);
    content.line_to(x2 - r, y1);
    content.cubic_to(x2 - r + k, y1, x2, y1 + r - k, x2, y1 + r);
    content.line_to(x2, y2 - r);
    content.cubic_to(x2, y2 - r + k, x2 - r + k, y2, x2 - r, y2);
    content.line_to(x1 + r, y2);
    content.cubic_to(x1 + r - k, y2, x1, y2 - r + k, x1, y2 - r);
    content.line_to(x1, y1 + r);
    content.cubic_to(x1, y1 + r - k, x1 + r - k, y1, x1 + r, y1);
    content.close_path();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::page::PageContents;
    use crate::pagesize::{PageOrientation, A6};
    use pretty_assertions::assert_eq;

    fn raw_operators(page: &Page) -> Vec<String> {
        page.contents
            .iter()
            .filter_map(|c| match c {
                PageContents::RawContent(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn wrapped_text_draws_one_span_per_line() {
        let mut doc = Document::default();
        let font = doc.add_font(BuiltinFont::Helvetica);
        let style = TextStyle::new(font, Pt(10.5), colours::BLACK);

        let mut canvas = Canvas::new(&mut doc, A6.landscape());
        let text = "2) 15 Punkte in 30 Sekunden → Gutschein erscheint.";
        let cursor = canvas.draw_wrapped(Pt(16.0), Pt(200.0), text, Pt(120.0), &style, Some(Pt(13.0)));

        let spans: Vec<&SpanLayout> = canvas
            .page()
            .contents
            .iter()
            .filter_map(|c| match c {
                PageContents::Text(spans) => spans.first(),
                _ => None,
            })
            .collect();
        assert!(spans.len() > 1);
        assert_eq!(cursor, Pt(200.0) - Pt(13.0) * spans.len() as f32);
        for (i, span) in spans.iter().enumerate() {
            assert_eq!(span.coords, (Pt(16.0), Pt(200.0) - Pt(13.0) * i as f32));
            assert!(canvas.measure_text_width(&span.text, font, Pt(10.5)) <= Pt(120.0));
        }
    }

    #[test]
    fn centred_text_straddles_the_centre() {
        let mut doc = Document::default();
        let font = doc.add_font(BuiltinFont::HelveticaBold);
        let style = TextStyle::new(font, Pt(11.0), colours::BLACK);

        let mut canvas = Canvas::new(&mut doc, A6.landscape());
        let width = canvas.measure_text_width("Zum Spiel", font, Pt(11.0));
        canvas.draw_centred_text(Pt(300.0), Pt(100.0), "Zum Spiel", &style);

        match &canvas.page().contents[0] {
            PageContents::Text(spans) => {
                assert!((*spans[0].coords.0 - (300.0 - *width / 2.0)).abs() < 1e-4);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn translucent_shapes_share_graphics_states() {
        let mut doc = Document::default();
        let sage = Colour::new_rgb(0.53, 0.69, 0.58);
        {
            let mut canvas = Canvas::new(&mut doc, A6.landscape());
            let style = Style::filled(sage).with_fill_alpha(0.18);
            canvas.circle(Pt(42.0), Pt(270.0), Pt(58.0), &style);
            canvas.circle(Pt(80.0), Pt(270.0), Pt(20.0), &style);

            let ops = raw_operators(canvas.page());
            assert_eq!(ops.len(), 2);
            for op in ops.iter() {
                assert!(op.starts_with("/GS0 gs"), "{op}");
                assert_eq!(op.matches(" c\n").count(), 4);
                assert!(op.trim_end().ends_with('f'));
            }
            canvas.finish();
        }
        assert_eq!(doc.graphics_states.len(), 1);
        assert_eq!(doc.pages.len(), 1);
    }

    #[test]
    fn shapes_without_paint_are_skipped() {
        let mut doc = Document::default();
        let mut canvas = Canvas::new(&mut doc, A6.landscape());
        canvas.rect(Rect::from_xywh(Pt(0.0), Pt(0.0), Pt(10.0), Pt(10.0)), &Style::default());
        canvas.line(
            (Pt(0.0), Pt(0.0)),
            (Pt(10.0), Pt(0.0)),
            &Style::filled(colours::BLACK),
        );
        assert!(canvas.page().contents.is_empty());
    }

    #[test]
    fn round_rects_fill_and_stroke() {
        let mut doc = Document::default();
        let mut canvas = Canvas::new(&mut doc, A6.landscape());
        let style = Style {
            fill: Some(colours::WHITE),
            stroke: Some(colours::BLACK),
            ..Style::default()
        }
        .with_line_width(Pt(0.8));
        canvas.round_rect(Rect::from_xywh(Pt(10.0), Pt(10.0), Pt(100.0), Pt(40.0)), Pt(14.0), &style);

        let ops = raw_operators(canvas.page());
        assert_eq!(ops.len(), 1);
        assert!(!ops[0].contains("gs"));
        assert_eq!(ops[0].matches(" c\n").count(), 4);
        assert!(ops[0].trim_end().ends_with('B'));
    }
}
