//! The greeting card itself: its text, its geometry, and the sequence of
//! drawing calls that puts them on the page.

use crate::canvas::Canvas;
use crate::colour::{colours, Colour};
use crate::document::Document;
use crate::font::BuiltinFont;
use crate::image::Image;
use crate::info::Info;
use crate::layout::Margins;
use crate::pagesize::{PageOrientation, PageSize, A6};
use crate::qr::qr_image;
use crate::rect::Rect;
use crate::style::{Style, TextStyle};
use crate::units::{Mm, Pt};
use crate::CardError;
use image::DynamicImage;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

const CREAM: Colour = Colour::new_rgb(0.97, 0.96, 0.93);
const SAGE: Colour = Colour::new_rgb(0.53, 0.69, 0.58);
const DEEP_SAGE: Colour = Colour::new_rgb(0.33, 0.45, 0.36);
const FOOTER_INK: Colour = Colour::new_grey(0.16);
const CAPTION_INK: Colour = Colour::new_grey(0.25);

/// How many characters of the URL the caption under the code shows
pub const CAPTION_URL_CHARS: usize = 38;

/// What to put on the card and where to save it
#[derive(Debug, Clone)]
pub struct CardOptions {
    /// Encoded in the QR code, and previewed in its caption
    pub url: String,
    pub recipient: String,
    pub output: PathBuf,
}

/// The fixed wording of the card
#[derive(Debug, Clone)]
pub struct CardText {
    pub title: String,
    pub intro: String,
    pub recipient_label: String,
    pub sender_label: String,
    pub steps_heading: String,
    pub steps: Vec<String>,
    pub footer: String,
    pub qr_heading: String,
    pub caption_prefix: String,
}

impl Default for CardText {
    fn default() -> Self {
        CardText {
            title: "Frohe Weihnachten!".into(),
            intro: "Scanne den QR-Code: Mini-Spiel → Gutschein wird freigeschaltet.".into(),
            recipient_label: "Für:".into(),
            sender_label: "Von:".into(),
            steps_heading: "So funktioniert’s:".into(),
            steps: vec![
                "1) QR-Code scannen und Matcha-Whisk-Dash spielen.".into(),
                "2) 15 Punkte in 30 Sekunden → Gutschein erscheint.".into(),
                "3) Nach 3 Versuchen wird automatisch freigeschaltet.".into(),
            ],
            footer: "PS: Ton an den Händen ist okay. Matcha im Pulli weniger.".into(),
            qr_heading: "Zum Spiel".into(),
            caption_prefix: "QR-Link: ".into(),
        }
    }
}

/// Where things go on the card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardGeometry {
    pub page: PageSize,
    pub margin: Pt,
    pub qr_side: Pt,
    pub qr_x: Pt,
    pub qr_y: Pt,
    /// Width of the text column left of the code
    pub left_max: Pt,
}

impl CardGeometry {
    /// An A6 landscape card with the code right-aligned and vertically centred
    pub fn a6_landscape() -> CardGeometry {
        let page = A6.landscape();
        let (page_w, page_h) = page;
        let margin = Pt(16.0);
        let qr_side: Pt = Mm(65.0).into();
        let qr_x = page_w - margin - qr_side;
        let qr_y = (page_h - qr_side) / 2.0;

        CardGeometry {
            page,
            margin,
            qr_side,
            qr_x,
            qr_y,
            left_max: qr_x - margin - Pt(18.0),
        }
    }

    pub fn width(&self) -> Pt {
        self.page.0
    }

    pub fn height(&self) -> Pt {
        self.page.1
    }
}

/// Keep the first `max_chars` characters of `text`, marking any cut with `…`
pub fn truncate_payload(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        head + "…"
    } else {
        head
    }
}

/// Lay out the card with the default wording
pub fn build(options: &CardOptions) -> Result<Document, CardError> {
    build_with_text(options, &CardText::default())
}

/// Lay out the card into a new single page document
pub fn build_with_text(options: &CardOptions, text: &CardText) -> Result<Document, CardError> {
    info!(recipient = options.recipient.as_str(); "Generating card");

    let qr = qr_image(&options.url)?;
    let geo = CardGeometry::a6_landscape();
    let (w, h) = geo.page;
    let margin = geo.margin;

    let mut doc = Document::default();
    doc.set_info(
        Info::new()
            .with_title(text.title.as_str())
            .with_subject(format!("Weihnachtsgutschein für {}", options.recipient)),
    );
    let regular = doc.add_font(BuiltinFont::Helvetica);
    let bold = doc.add_font(BuiltinFont::HelveticaBold);
    let oblique = doc.add_font(BuiltinFont::HelveticaOblique);
    let qr_id = doc.add_image(Image::new_pixel_art(DynamicImage::ImageLuma8(qr)));

    let mut canvas = Canvas::with_margins(&mut doc, geo.page, Margins::uniform(margin));

    canvas.fill_rect(Rect::from_xywh(Pt(0.0), Pt(0.0), w, h), CREAM);
    for (x, y, r, alpha) in [
        (Pt(42.0), h - Pt(28.0), Pt(58.0), 0.18),
        (w - Pt(34.0), h - Pt(46.0), Pt(76.0), 0.14),
        (w - Pt(52.0), Pt(44.0), Pt(86.0), 0.12),
        (Pt(62.0), Pt(34.0), Pt(64.0), 0.10),
    ] {
        canvas.circle(x, y, r, &Style::filled(SAGE).with_fill_alpha(alpha));
    }

    canvas.draw_text(
        margin,
        h - Pt(40.0),
        &text.title,
        &TextStyle::new(bold, Pt(24.0), DEEP_SAGE),
    );

    canvas.draw_wrapped(
        margin,
        h - Pt(60.0),
        &text.intro,
        geo.left_max,
        &TextStyle::new(regular, Pt(11.0), colours::BLACK),
        Some(Pt(14.0)),
    );

    let label = TextStyle::new(bold, Pt(12.0), colours::BLACK);
    let field_x = margin + Pt(34.0);
    canvas.draw_text(margin, h - Pt(92.0), &text.recipient_label, &label);
    canvas.draw_text(
        field_x,
        h - Pt(92.0),
        &options.recipient,
        &TextStyle::new(regular, Pt(12.0), colours::BLACK),
    );

    canvas.draw_text(margin, h - Pt(114.0), &text.sender_label, &label);
    canvas.line(
        (field_x, h - Pt(116.0)),
        (geo.qr_x - Pt(18.0), h - Pt(116.0)),
        &Style::stroked(colours::BLACK).with_line_width(Pt(1.0)),
    );

    canvas.draw_text(margin, h - Pt(150.0), &text.steps_heading, &label);

    let step_style = TextStyle::new(regular, Pt(10.5), colours::BLACK);
    let mut y = h - Pt(166.0);
    for step in text.steps.iter() {
        y = canvas.draw_wrapped(margin, y, step, geo.left_max, &step_style, Some(Pt(13.0)));
        y -= Pt(1.0);
    }

    canvas.draw_text(
        margin,
        Pt(20.0),
        &text.footer,
        &TextStyle::new(oblique, Pt(9.3), FOOTER_INK),
    );

    let backing = Rect::from_xywh(
        geo.qr_x - Pt(8.0),
        geo.qr_y - Pt(8.0),
        geo.qr_side + Pt(16.0),
        geo.qr_side + Pt(34.0),
    );
    canvas.round_rect(
        backing,
        Pt(14.0),
        &Style::filled(colours::WHITE).with_fill_alpha(0.92),
    );
    canvas.round_rect(
        backing,
        Pt(14.0),
        &Style::stroked(colours::BLACK).with_stroke_alpha(0.12),
    );

    let qr_centre = geo.qr_x + geo.qr_side / 2.0;
    canvas.draw_centred_text(
        qr_centre,
        geo.qr_y + geo.qr_side + Pt(16.0),
        &text.qr_heading,
        &TextStyle::new(bold, Pt(11.0), DEEP_SAGE),
    );

    canvas.draw_image(
        qr_id,
        Rect::from_xywh(geo.qr_x, geo.qr_y, geo.qr_side, geo.qr_side),
    );

    let caption = format!(
        "{}{}",
        text.caption_prefix,
        truncate_payload(&options.url, CAPTION_URL_CHARS)
    );
    canvas.draw_centred_text(
        qr_centre,
        geo.qr_y - Pt(6.0),
        &caption,
        &TextStyle::new(regular, Pt(7.5), CAPTION_INK),
    );

    canvas.finish();
    Ok(doc)
}

/// Build the card and write it to `options.output`, returning the absolute
/// path of the written file
pub fn write_card(options: &CardOptions) -> Result<PathBuf, CardError> {
    let doc = build(options)?;

    info!(path:% = options.output.display(); "Writing card");
    let mut out = BufWriter::new(File::create(&options.output)?);
    doc.write(&mut out)?;
    out.flush()?;

    Ok(std::fs::canonicalize(&options.output)?)
}
