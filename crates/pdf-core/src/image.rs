//! Raster images embedded as PDF image XObjects
//!
//! JPEG files are stored untouched behind `DCTDecode`; only their header is
//! read. PNG files are decoded, flattened onto white and stored as
//! zlib-compressed 8-bit samples behind `FlateDecode`.

use crate::{PdfError, Result};
use flate2::{write::ZlibEncoder, Compression};
use image::codecs::jpeg::JpegDecoder;
use image::{DynamicImage, ImageDecoder};
use lopdf::{dictionary, Object, Stream};
use std::io::{Cursor, Write};

impl From<image::ImageError> for PdfError {
    fn from(err: image::ImageError) -> Self {
        PdfError::ImageError(err.to_string())
    }
}

/// Colour space of the stored samples
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    DeviceGray,
    DeviceRgb,
}

impl ColorSpace {
    fn pdf_name(self) -> &'static str {
        match self {
            ColorSpace::DeviceGray => "DeviceGray",
            ColorSpace::DeviceRgb => "DeviceRGB",
        }
    }

    fn of(color: image::ColorType) -> Self {
        if color.has_color() {
            ColorSpace::DeviceRgb
        } else {
            ColorSpace::DeviceGray
        }
    }
}

/// Stream filter the stored samples are encoded with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFilter {
    Dct,
    Flate,
}

impl ImageFilter {
    fn pdf_name(self) -> &'static str {
        match self {
            ImageFilter::Dct => "DCTDecode",
            ImageFilter::Flate => "FlateDecode",
        }
    }
}

/// An image ready to be written as an XObject stream
#[derive(Debug, Clone)]
pub struct ImageXObject {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    pub color_space: ColorSpace,
    pub filter: ImageFilter,
    /// Stream data, already encoded with `filter`
    pub data: Vec<u8>,
}

impl ImageXObject {
    /// Build an XObject from the bytes of an image file
    ///
    /// The format is sniffed from the content; anything other than JPEG or
    /// PNG is rejected.
    pub fn decode(data: &[u8]) -> Result<Self> {
        match image::guess_format(data)? {
            image::ImageFormat::Jpeg => Self::from_jpeg(data),
            image::ImageFormat::Png => Self::from_png(data),
            other => Err(PdfError::ImageError(format!(
                "unsupported image format: {other:?}"
            ))),
        }
    }

    fn from_jpeg(data: &[u8]) -> Result<Self> {
        let decoder = JpegDecoder::new(Cursor::new(data))?;
        let (width, height) = decoder.dimensions();

        Ok(Self {
            width,
            height,
            color_space: ColorSpace::of(decoder.color_type()),
            filter: ImageFilter::Dct,
            data: data.to_vec(),
        })
    }

    fn from_png(data: &[u8]) -> Result<Self> {
        let image = image::load_from_memory_with_format(data, image::ImageFormat::Png)?;
        let color_space = ColorSpace::of(image.color());
        let samples = flatten_on_white(&image, color_space);

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&samples)?;

        Ok(Self {
            width: image.width(),
            height: image.height(),
            color_space,
            filter: ImageFilter::Flate,
            data: encoder.finish()?,
        })
    }

    /// Convert into an image XObject stream
    pub fn into_stream(self) -> Stream {
        let dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => self.width as i64,
            "Height" => self.height as i64,
            "ColorSpace" => Object::Name(self.color_space.pdf_name().as_bytes().to_vec()),
            "BitsPerComponent" => 8_i64,
            "Filter" => Object::Name(self.filter.pdf_name().as_bytes().to_vec()),
        };

        // data is already encoded; lopdf must not compress it again
        Stream::new(dict, self.data).with_compression(false)
    }
}

/// 8-bit samples with any alpha channel composited onto white
fn flatten_on_white(image: &DynamicImage, color_space: ColorSpace) -> Vec<u8> {
    let has_alpha = image.color().has_alpha();
    match (color_space, has_alpha) {
        (ColorSpace::DeviceGray, false) => image.to_luma8().into_raw(),
        (ColorSpace::DeviceRgb, false) => image.to_rgb8().into_raw(),
        (ColorSpace::DeviceGray, true) => image
            .to_luma_alpha8()
            .pixels()
            .map(|p| over_white(p[0], p[1]))
            .collect(),
        (ColorSpace::DeviceRgb, true) => image
            .to_rgba8()
            .pixels()
            .flat_map(|p| {
                let alpha = p[3];
                [
                    over_white(p[0], alpha),
                    over_white(p[1], alpha),
                    over_white(p[2], alpha),
                ]
            })
            .collect(),
    }
}

fn over_white(value: u8, alpha: u8) -> u8 {
    let (value, alpha) = (value as u16, alpha as u16);
    ((value * alpha + 255 * (255 - alpha)) / 255) as u8
}

/// Content stream operators painting the named XObject into a box
///
/// The box has its lower-left corner at (`x`, `y`) and is `width` by
/// `height` points; the image is stretched to fill it.
pub fn draw_image_operators(name: &str, x: f64, y: f64, width: f64, height: f64) -> Vec<u8> {
    format!("q\n{width} 0 0 {height} {x} {y} cm\n/{name} Do\nQ\n").into_bytes()
}
