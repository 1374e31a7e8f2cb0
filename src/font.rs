use crate::refs::{ObjectReferences, RefType};
use id_arena::Id;
use pdf_writer::{Name, Pdf};

mod encoding;
mod widths;

/// Anything that can report horizontal advances for characters. Advances are
/// expressed in font units; divide by [`FontMetrics::units_per_em`] and multiply
/// by the font size to get points.
///
/// The standard fonts implement this from their AFM tables, but layout code only
/// ever talks to this trait so that it can be exercised with synthetic metrics.
pub trait FontMetrics {
    /// Number of font units in one em
    fn units_per_em(&self) -> u16 {
        1000
    }

    /// The horizontal advance of `ch`, in font units
    fn advance(&self, ch: char) -> u16;
}

/// One of the PDF "standard 14" fonts. These are never embedded; every conforming
/// viewer ships them, so the document only needs to refer to them by name.
///
/// Text in the Helvetica family is encoded with `WinAnsiEncoding`, which covers
/// ASCII, Latin-1 and the common typographic punctuation (’ “ ” – — …). Characters
/// outside of that set fall back to the [`BuiltinFont::Symbol`] font if it has a
/// glyph for them (arrows, bullets, card suits, some maths), and are otherwise
/// replaced with `?`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinFont {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    Symbol,
}

/// A character resolved to a concrete font and single-byte code within that font
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub font: BuiltinFont,
    pub code: u8,
    /// Advance width, in 1/1000 em
    pub width: u16,
}

impl BuiltinFont {
    /// The PostScript name the PDF refers to this font by
    pub fn base_font(&self) -> &'static str {
        match self {
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::HelveticaOblique => "Helvetica-Oblique",
            BuiltinFont::Symbol => "Symbol",
        }
    }

    /// Symbol uses its own built-in encoding, everything else is WinAnsi
    pub fn encoding(&self) -> Option<&'static str> {
        match self {
            BuiltinFont::Symbol => None,
            _ => Some("WinAnsiEncoding"),
        }
    }

    /// Look up `ch` in this font alone, without any fallback
    pub fn glyph(&self, ch: char) -> Option<Glyph> {
        let font = *self;
        let (code, width) = match self {
            BuiltinFont::Symbol => encoding::symbol(ch)?,
            _ => {
                let code = encoding::win_ansi(ch)?;
                (code, self.win_ansi_width(code)?)
            }
        };
        Some(Glyph { font, code, width })
    }

    fn win_ansi_width(&self, code: u8) -> Option<u16> {
        match self {
            BuiltinFont::Helvetica | BuiltinFont::HelveticaOblique => {
                widths::width(&widths::HELVETICA, code)
            }
            BuiltinFont::HelveticaBold => widths::width(&widths::HELVETICA_BOLD, code),
            BuiltinFont::Symbol => None,
        }
    }

    /// Resolve `ch` to the glyph that will actually be drawn: this font if it
    /// can, the Symbol font if it can't, and a question mark otherwise.
    /// Measuring and rendering both go through here so that they always agree.
    pub fn resolve(&self, ch: char) -> Glyph {
        self.glyph(ch)
            .or_else(|| match self {
                BuiltinFont::Symbol => None,
                _ => BuiltinFont::Symbol.glyph(ch),
            })
            .unwrap_or_else(|| self.replacement_glyph())
    }

    /// `?` exists in every standard font's encoding
    pub fn replacement_glyph(&self) -> Glyph {
        self.glyph('?').unwrap_or(Glyph {
            font: *self,
            code: b'?',
            width: 500,
        })
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<BuiltinFont>, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font(id.index()));
        let mut font = writer.type1_font(font_id);
        font.base_font(Name(self.base_font().as_bytes()));
        if let Some(encoding) = self.encoding() {
            font.encoding_predefined(Name(encoding.as_bytes()));
        }
    }
}

impl FontMetrics for BuiltinFont {
    fn advance(&self, ch: char) -> u16 {
        self.resolve(ch).width
    }
}
