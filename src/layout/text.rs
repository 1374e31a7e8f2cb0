use crate::font::FontMetrics;
use crate::units::Pt;
use derive_more::Deref;

/// Line spacing used when a [WrapRequest] doesn't specify one, as a multiple of
/// the font size
pub const DEFAULT_LINE_SPACING: f32 = 1.25;

/// Calculate the width of a given string of text given the font and font size
pub fn width_of_text<F: FontMetrics + ?Sized>(text: &str, font: &F, size: Pt) -> Pt {
    let scaling = size / font.units_per_em() as f32;
    text.chars()
        .map(|ch| scaling * font.advance(ch) as f32)
        .sum()
}

/// Greedily packs the whitespace-separated words of `text` into lines no wider
/// than `max_width`, as reported by `measure`.
///
/// Words are never split or hyphenated: a word that is wider than `max_width`
/// on its own gets a line to itself and overflows it. Runs of whitespace
/// (including newlines) collapse to a single space between words.
pub fn wrap_words<M>(text: &str, max_width: Pt, mut measure: M) -> LineSequence
where
    M: FnMut(&str) -> Pt,
{
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            // deliberately not re-measured: a lone over-wide word overflows
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    LineSequence(lines)
}

/// Where the layout cursor ends up after stepping down `line_count` lines
pub fn advance_cursor(start_y: Pt, line_spacing: Pt, line_count: usize) -> Pt {
    start_y - line_spacing * line_count as f32
}

/// The lines produced by [wrap_words], in reading order
#[derive(Debug, Clone, Default, PartialEq, Deref)]
pub struct LineSequence(Vec<String>);

impl LineSequence {
    pub fn into_lines(self) -> Vec<String> {
        self.0
    }

    /// All words of all lines, in order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.iter().flat_map(|line| line.split_whitespace())
    }

    /// Assign each line a baseline, the first at `start_y` and every following
    /// one `line_spacing` further down the page
    pub fn positioned(self, start_y: Pt, line_spacing: Pt) -> WrappedBlock {
        let cursor = advance_cursor(start_y, line_spacing, self.0.len());
        let lines = self
            .0
            .into_iter()
            .enumerate()
            .map(|(i, text)| PositionedLine {
                text,
                y: advance_cursor(start_y, line_spacing, i),
            })
            .collect();
        WrappedBlock { lines, cursor }
    }
}

/// A wrapped line along with the baseline it should be drawn at
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedLine {
    pub text: String,
    pub y: Pt,
}

/// The result of laying out a block of wrapped text: the lines to draw, and the
/// cursor position just below the last of them, where the next block can start
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedBlock {
    pub lines: Vec<PositionedLine>,
    pub cursor: Pt,
}

/// A block of text to wrap to a maximum width in a given font and size
pub struct WrapRequest<'a, F: FontMetrics + ?Sized> {
    pub text: &'a str,
    pub max_width: Pt,
    pub font: &'a F,
    pub size: Pt,
    /// Distance between consecutive baselines; defaults to
    /// [DEFAULT_LINE_SPACING] times the font size
    pub line_spacing: Option<Pt>,
}

impl<'a, F: FontMetrics + ?Sized> WrapRequest<'a, F> {
    pub fn new(text: &'a str, max_width: Pt, font: &'a F, size: Pt) -> Self {
        WrapRequest {
            text,
            max_width,
            font,
            size,
            line_spacing: None,
        }
    }

    pub fn with_line_spacing(self, line_spacing: Pt) -> Self {
        WrapRequest {
            line_spacing: Some(line_spacing),
            ..self
        }
    }

    pub fn line_spacing(&self) -> Pt {
        self.line_spacing
            .unwrap_or(self.size * DEFAULT_LINE_SPACING)
    }

    /// Break the text into lines without positioning them
    pub fn wrap(&self) -> LineSequence {
        wrap_words(self.text, self.max_width, |line| {
            width_of_text(line, self.font, self.size)
        })
    }

    /// Break the text into lines and position them starting at `start_y`
    pub fn layout(&self, start_y: Pt) -> WrappedBlock {
        self.wrap().positioned(start_y, self.line_spacing())
    }
}
