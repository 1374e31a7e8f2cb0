use crate::{
    font::BuiltinFont,
    image::Image,
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    style::GraphicsState,
    CardError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::io::Write;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub fonts: Arena<BuiltinFont>,
    pub images: Arena<Image>,
    pub graphics_states: Arena<GraphicsState>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        self.pages.alloc(page)
    }

    /// Register a standard font with the document, returning the id pages use to
    /// refer to it. Registering the same font twice returns the same id.
    ///
    /// The Symbol font is registered alongside any text font, since text is
    /// drawn with it whenever the text font has no glyph for a character.
    pub fn add_font(&mut self, font: BuiltinFont) -> Id<BuiltinFont> {
        if font != BuiltinFont::Symbol {
            self.add_font(BuiltinFont::Symbol);
        }

        match self.font_id(font) {
            Some(id) => id,
            None => self.fonts.alloc(font),
        }
    }

    /// Find the id of an already registered font
    pub fn font_id(&self, font: BuiltinFont) -> Option<Id<BuiltinFont>> {
        self.fonts
            .iter()
            .find(|(_, f)| **f == font)
            .map(|(id, _)| id)
    }

    /// Add an image to the document structure. Images are stored "globally" within
    /// the document, such that any page can access and re-use images by referring
    /// to it by its id.
    pub fn add_image(&mut self, image: Image) -> Id<Image> {
        self.images.alloc(image)
    }

    /// Register a set of transparency parameters, re-using an identical one if it
    /// has already been registered
    pub fn add_graphics_state(&mut self, state: GraphicsState) -> Id<GraphicsState> {
        match self
            .graphics_states
            .iter()
            .find(|(_, s)| **s == state)
            .map(|(id, _)| id)
        {
            Some(id) => id,
            None => self.graphics_states.alloc(state),
        }
    }

    /// Write the entire document to the writer. Note: although this can write to arbitrary
    /// streams, the entire document is "rendered" in memory first.
    ///
    /// Until `write` is called, all references are un-resolved; calling `write` generates
    /// the PDF objects and the references between them.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), CardError> {
        let Document {
            info,
            pages,
            fonts,
            images,
            graphics_states,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = pages
            .iter()
            .map(|(id, _)| refs.gen(RefType::Page(id.index())))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (id, font) in fonts.iter() {
            font.write(&mut refs, id, &mut writer);
        }

        for (id, image) in images.iter() {
            image.write(&mut refs, id.index(), &mut writer);
        }

        for (id, state) in graphics_states.iter() {
            state.write(&mut refs, id.index(), &mut writer);
        }

        for (id, page) in pages.iter() {
            page.write(
                &mut refs,
                id.index(),
                &fonts,
                &images,
                &graphics_states,
                &mut writer,
            )?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }
}
