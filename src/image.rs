use crate::refs::{ObjectReferences, RefType};
use image::{DynamicImage, GenericImageView};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};

/// A raster image that can be placed on pages. Images are stored "globally" in
/// the [Document](crate::Document) and referred to by their id, so the same image
/// can be drawn any number of times while only being embedded once.
pub struct Image {
    pub image: DynamicImage,
    pub width: u32,
    pub height: u32,
    /// Whether viewers may smooth the image when scaling it. Must be off for
    /// anything that has to stay crisp when enlarged, such as QR codes.
    pub interpolate: bool,
}

enum ColourSpace {
    Grey,
    Rgb,
}

struct EncodeOutput {
    colour_space: ColourSpace,
    bytes: Vec<u8>,
    mask: Option<Vec<u8>>,
}

impl Image {
    pub fn new_raster(image: DynamicImage) -> Image {
        let (width, height) = image.dimensions();
        Image {
            image,
            width,
            height,
            interpolate: true,
        }
    }

    /// A raster image that is never smoothed when it's scaled up
    pub fn new_pixel_art(image: DynamicImage) -> Image {
        Image {
            interpolate: false,
            ..Image::new_raster(image)
        }
    }

    fn encode(&self) -> EncodeOutput {
        let level = CompressionLevel::DefaultLevel as u8;
        let image = &self.image;

        let mask = image.color().has_alpha().then(|| {
            let alphas: Vec<_> = image.pixels().map(|p| (p.2).0[3]).collect();
            compress_to_vec_zlib(&alphas, level)
        });

        let has_colour = image.color().has_color();
        let (colour_space, raw) = if has_colour {
            (ColourSpace::Rgb, image.to_rgb8().into_raw())
        } else {
            (ColourSpace::Grey, image.to_luma8().into_raw())
        };

        EncodeOutput {
            colour_space,
            bytes: compress_to_vec_zlib(&raw, level),
            mask,
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, image_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Image(image_index));
        let encoded = self.encode();

        let mut image = writer.image_xobject(id, encoded.bytes.as_slice());
        image.filter(Filter::FlateDecode);
        image.width(self.width as i32);
        image.height(self.height as i32);
        match encoded.colour_space {
            ColourSpace::Grey => image.color_space().device_gray(),
            ColourSpace::Rgb => image.color_space().device_rgb(),
        };
        image.bits_per_component(8);
        image.interpolate(self.interpolate);

        let mask_id = encoded
            .mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));
        if let Some(mask_id) = mask_id {
            image.s_mask(mask_id);
        }

        image.finish();

        // add a transparency mask if we have one
        if let (Some(mask_id), Some(mask)) = (mask_id, encoded.mask) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};

    #[test]
    fn grey_images_stay_single_channel() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 2, Luma([0u8])));
        let image = Image::new_pixel_art(img);
        assert_eq!((image.width, image.height), (4, 2));
        assert!(!image.interpolate);

        let encoded = image.encode();
        assert!(matches!(encoded.colour_space, ColourSpace::Grey));
        assert!(encoded.mask.is_none());
        let raw = miniz_oxide::inflate::decompress_to_vec_zlib(&encoded.bytes).unwrap();
        assert_eq!(raw.len(), 8);
    }

    #[test]
    fn alpha_channel_becomes_a_soft_mask() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 3, Rgba([255, 0, 0, 128])));
        let encoded = Image::new_raster(img).encode();
        assert!(matches!(encoded.colour_space, ColourSpace::Rgb));
        let mask = miniz_oxide::inflate::decompress_to_vec_zlib(&encoded.mask.unwrap()).unwrap();
        assert_eq!(mask, vec![128u8; 9]);
    }
}
