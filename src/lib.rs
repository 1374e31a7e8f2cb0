//! Generates a single page greeting card PDF with wrapped text and a QR code.
//!
//! The crate is layered bottom-up: typed units and geometry, the PDF base-14
//! fonts with their metrics, a greedy word wrapper in [layout], a [Canvas]
//! drawing onto a [Document], and finally the [card] itself, which lays out
//! the fixed design and writes it to disk.

mod args;
pub use args::Args;

mod canvas;
pub use canvas::*;

pub mod card;

mod colour;
pub use colour::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

mod info;
pub use info::*;

/// Utility functions and structures to layout objects (most text) on pages
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

pub mod qr;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod style;
pub use style::*;

mod transform;
pub use transform::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;

use card::CardOptions;
use log::info;
use std::path::PathBuf;

/// Generate the card described by the command line, returning where it was saved
///
/// # Errors
///
/// Returns [CardError] when the URL doesn't fit in a QR code or the output
/// file can't be written.
pub fn run(args: &Args) -> Result<PathBuf, CardError> {
    let options = CardOptions::from(args);
    let path = card::write_card(&options)?;
    info!(path:% = path.display(); "Card saved");
    Ok(path)
}
