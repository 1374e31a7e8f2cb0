//! Rendering of page contents into a PDF content stream.

use crate::colour::Colour;
use crate::font::BuiltinFont;
use crate::page::{PageContents, SpanLayout};
use crate::transform::Transform;
use id_arena::{Arena, Id};
use log::warn;
use pdf_writer::{Content, Name};
use std::io::Write;

/// Renders page contents to a PDF content stream, converting high-level
/// content items into low-level PDF operators.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<BuiltinFont>,
) -> Result<Vec<u8>, std::io::Error> {
    if contents.is_empty() {
        return Ok(Vec::default());
    }

    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => {
                render_text_spans(&mut content, spans, fonts)?;
            }
            PageContents::Image(image) => {
                let mut placed = Content::new();
                placed.save_state();
                Transform::unit_square_to(&image.position).write_to_content(&mut placed);
                placed.x_object(Name(format!("I{}", image.image_id.index()).as_bytes()));
                placed.restore_state();
                content.write_all(&placed.finish())?;
                write!(&mut content, "\n")?;
            }
            PageContents::RawContent(c) => {
                write!(&mut content, "q\n")?;
                content.write_all(c.as_slice())?;
                write!(&mut content, "\nQ\n")?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    fonts: &Arena<BuiltinFont>,
) -> Result<(), std::io::Error> {
    if spans.is_empty() {
        return Ok(());
    }

    write!(content, "q\n")?;

    let mut current_colour: Option<Colour> = None;
    for span in spans.iter() {
        if current_colour != Some(span.colour) {
            span.colour.write_fill(content)?;
            current_colour = Some(span.colour);
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        for run in glyph_runs(&span.text, span.font.id, fonts) {
            write!(content, "/F{} {} Tf\n", run.font.index(), span.font.size)?;
            write!(content, "<")?;
            for code in run.codes.iter() {
                write!(content, "{code:02x}")?;
            }
            write!(content, "> Tj\n")?;
        }
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

/// A run of consecutive characters that are all drawn with the same font
#[derive(Debug, PartialEq)]
struct GlyphRun {
    font: Id<BuiltinFont>,
    codes: Vec<u8>,
}

/// Split `text` into runs of the span's own font and of the Symbol fallback
fn glyph_runs(text: &str, font_id: Id<BuiltinFont>, fonts: &Arena<BuiltinFont>) -> Vec<GlyphRun> {
    let primary = fonts[font_id];
    let symbol_id = fonts
        .iter()
        .find(|(_, font)| **font == BuiltinFont::Symbol)
        .map(|(id, _)| id);

    let mut runs: Vec<GlyphRun> = Vec::new();
    for ch in text.chars() {
        let mut glyph = primary.resolve(ch);
        let mut id = font_id;
        if glyph.font != primary {
            match symbol_id {
                Some(symbol_id) => id = symbol_id,
                None => glyph = primary.replacement_glyph(),
            }
        }

        if glyph.code == b'?' && ch != '?' {
            warn!(character:? = ch, font = primary.base_font(); "No standard font can draw character, substituting '?'");
        }

        match runs.last_mut() {
            Some(run) if run.font == id => run.codes.push(glyph.code),
            _ => runs.push(GlyphRun {
                font: id,
                codes: vec![glyph.code],
            }),
        }
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colours;
    use crate::page::SpanFont;
    use crate::units::Pt;

    fn span(text: &str, id: Id<BuiltinFont>) -> SpanLayout {
        SpanLayout {
            text: text.to_string(),
            font: SpanFont { id, size: Pt(11.0) },
            colour: colours::BLACK,
            coords: (Pt(16.0), Pt(237.5)),
        }
    }

    #[test]
    fn ascii_text_is_a_single_hex_run() {
        let mut fonts = Arena::new();
        let helvetica = fonts.alloc(BuiltinFont::Helvetica);

        let rendered =
            render_contents(&[PageContents::Text(vec![span("Hi", helvetica)])], &fonts).unwrap();
        assert_eq!(
            String::from_utf8(rendered).unwrap(),
            "q\n0 g\nBT\n16 237.5 Td\n/F0 11 Tf\n<4869> Tj\nET\nQ\n"
        );
    }

    #[test]
    fn arrows_switch_to_the_symbol_font_and_back() {
        let mut fonts = Arena::new();
        let helvetica = fonts.alloc(BuiltinFont::Helvetica);
        let symbol = fonts.alloc(BuiltinFont::Symbol);

        let runs = glyph_runs("a → ü", helvetica, &fonts);
        assert_eq!(
            runs,
            vec![
                GlyphRun {
                    font: helvetica,
                    codes: vec![b'a', b' ']
                },
                GlyphRun {
                    font: symbol,
                    codes: vec![0xAE]
                },
                GlyphRun {
                    font: helvetica,
                    codes: vec![b' ', 0xFC]
                },
            ]
        );
    }

    #[test]
    fn missing_symbol_font_substitutes_question_marks() {
        let mut fonts = Arena::new();
        let helvetica = fonts.alloc(BuiltinFont::Helvetica);

        let runs = glyph_runs("→", helvetica, &fonts);
        assert_eq!(
            runs,
            vec![GlyphRun {
                font: helvetica,
                codes: vec![b'?']
            }]
        );
    }

    #[test]
    fn raw_content_is_isolated_in_its_own_graphics_state() {
        let fonts = Arena::new();
        let rendered =
            render_contents(&[PageContents::RawContent(b"0 0 m".to_vec())], &fonts).unwrap();
        assert_eq!(rendered, b"q\n0 0 m\nQ\n".to_vec());
    }
}
