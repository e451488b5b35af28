use std::path::Path;

use eframe::egui::ColorImage;
use image::{DynamicImage, GrayImage};

use crate::error::ImagingError;

/// File extensions offered by the upload picker.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load an uploaded image, accepting only jpg / jpeg / png (case insensitive).
pub fn load_image_file(path: &Path) -> Result<DynamicImage, ImagingError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        return Err(ImagingError::UnsupportedFormat(ext));
    }

    let bytes = std::fs::read(path)?;
    decode_image(&bytes)
}

/// Decode an encoded image held in memory; the format is sniffed from the bytes.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, ImagingError> {
    Ok(image::load_from_memory(bytes)?)
}

// ---------------------------------------------------------------------------
// Grayscale
// ---------------------------------------------------------------------------

/// Single-channel 8-bit luma version of `image`, same width and height.
pub fn to_grayscale(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}

/// An original image and its grayscale conversion, ready to be shown together.
#[derive(Debug, Clone)]
pub struct ImagePair {
    pub original: DynamicImage,
    pub grayscale: GrayImage,
    /// Where the image came from (file name or camera label), for the UI.
    pub source: String,
}

impl ImagePair {
    pub fn new(original: DynamicImage, source: impl Into<String>) -> Self {
        let grayscale = to_grayscale(&original);
        Self {
            original,
            grayscale,
            source: source.into(),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.original.width(), self.original.height())
    }
}

// ---------------------------------------------------------------------------
// egui conversion
// ---------------------------------------------------------------------------

/// Scale `image` down (keeping its aspect ratio) so neither side exceeds `max_side`.
pub fn fit_within(image: &DynamicImage, max_side: u32) -> Option<DynamicImage> {
    if image.width() <= max_side && image.height() <= max_side {
        return None;
    }
    Some(image.thumbnail(max_side, max_side))
}

/// RGBA texture data for `image`, downscaled to at most `max_side` per side.
pub fn to_color_image(image: &DynamicImage, max_side: u32) -> ColorImage {
    let fitted = fit_within(image, max_side);
    let rgba = fitted.as_ref().unwrap_or(image).to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, rgba.as_raw())
}

/// Gray texture data for `gray`, downscaled to at most `max_side` per side.
pub fn gray_to_color_image(gray: &GrayImage, max_side: u32) -> ColorImage {
    let gray = if gray.width() <= max_side && gray.height() <= max_side {
        std::borrow::Cow::Borrowed(gray)
    } else {
        std::borrow::Cow::Owned(
            DynamicImage::ImageLuma8(gray.clone())
                .thumbnail(max_side, max_side)
                .into_luma8(),
        )
    };
    let size = [gray.width() as usize, gray.height() as usize];
    ColorImage::from_gray(size, gray.as_raw())
}
