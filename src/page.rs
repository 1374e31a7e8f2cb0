use crate::colour::Colour;
use crate::content::render_contents;
use crate::font::BuiltinFont;
use crate::image::Image;
use crate::layout::Margins;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::style::GraphicsState;
use crate::units::*;
use crate::CardError;
use id_arena::{Arena, Id};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Content, Filter, Finish, Name, Pdf};

/// A font, at a size, that a span of text is set in
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<BuiltinFont>,
    pub size: Pt,
}

/// A single run of text positioned on a page. `coords` is the start of the
/// baseline, in page coordinates.
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// An image placed on a page, stretched to fill `position`
#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image_id: Id<Image>,
    pub position: Rect,
}

/// Items drawn on a page, in painting order
#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Image(ImageLayout),
    RawContent(Vec<u8>),
}

/// A page is a container for content, with a fixed size
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content should live, i.e. within the margins
    pub content_box: Rect,
    /// The laid out content, in painting order
    pub contents: Vec<PageContents>,
}

impl Page {
    /// Create a new page of the given size. If no margins are given, the
    /// content box covers the whole page.
    pub fn new(size: PageSize, margins: Option<Margins>) -> Page {
        let (width, height) = size;
        let margins = margins.unwrap_or_default();
        Page {
            media_box: Rect {
                x1: Pt(0.0),
                y1: Pt(0.0),
                x2: width,
                y2: height,
            },
            content_box: Rect {
                x1: margins.left,
                y1: margins.bottom,
                x2: width - margins.right,
                y2: height - margins.top,
            },
            contents: Vec::default(),
        }
    }

    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    /// Add a span of text to the page
    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(vec![span]));
    }

    /// Add an image to the page
    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(PageContents::Image(image));
    }

    /// Add arbitrary pdf_writer::Content to the page
    pub fn add_content(&mut self, content: Content) {
        self.contents
            .push(PageContents::RawContent(content.finish()));
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        fonts: &Arena<BuiltinFont>,
        images: &Arena<Image>,
        graphics_states: &Arena<GraphicsState>,
        writer: &mut Pdf,
    ) -> Result<(), CardError> {
        let rendered = render_contents(&self.contents, fonts)?;
        let compressed = compress_to_vec_zlib(&rendered, CompressionLevel::DefaultLevel as u8);

        let id = refs.require(RefType::Page(page_index))?;
        let parent = refs.require(RefType::PageTree)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.art_box(self.content_box.into());
        page.parent(parent);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in fonts.iter() {
            let i = font_id.index();
            resource_fonts.pair(Name(format!("F{i}").as_bytes()), refs.require(RefType::Font(i))?);
        }
        resource_fonts.finish();

        let mut resource_xobjects = resources.x_objects();
        for (image_id, _) in images.iter() {
            let i = image_id.index();
            resource_xobjects.pair(
                Name(format!("I{i}").as_bytes()),
                refs.require(RefType::Image(i))?,
            );
        }
        resource_xobjects.finish();

        let mut resource_states = resources.ext_g_states();
        for (state_id, _) in graphics_states.iter() {
            let i = state_id.index();
            resource_states.pair(
                Name(format!("GS{i}").as_bytes()),
                refs.require(RefType::GraphicsState(i))?,
            );
        }
        resource_states.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize::{PageOrientation, A6};

    #[test]
    fn margins_shrink_the_content_box() {
        let page = Page::new(A6.landscape(), Some(Margins::uniform(Pt(16.0))));
        assert_eq!(page.width(), A6.1);
        assert_eq!(page.height(), A6.0);
        assert_eq!(page.content_box.x1, Pt(16.0));
        assert_eq!(page.content_box.y2, A6.0 - Pt(16.0));
    }

    #[test]
    fn pages_without_margins_use_the_whole_sheet() {
        let page = Page::new(A6, None);
        assert_eq!(page.content_box, page.media_box);
    }
}
