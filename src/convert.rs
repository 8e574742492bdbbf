//! Preprocessing that turns a color image into the flat-region input a
//! quadtree decomposes well.

use image::{GrayImage, Luma, RgbImage};

/// Luminance of an RGB pixel, weighted 0.3 / 0.59 / 0.11.
pub fn luminance(rgb: [u8; 3]) -> u8 {
	((30 * rgb[0] as u32 + 59 * rgb[1] as u32 + 11 * rgb[2] as u32) / 100) as u8
}

pub fn grayscale(img: &RgbImage) -> GrayImage {
	GrayImage::from_fn(img.width(), img.height(), |x, y| Luma([luminance(img.get_pixel(x, y).0)]))
}

/// Grayscales `img`, then maps pixels brighter than `threshold` to 255 and
/// everything else to 0.
pub fn binarize(img: &RgbImage, threshold: u8) -> GrayImage {
	let mut gray = grayscale(img);
	for pixel in gray.pixels_mut() {
		pixel.0[0] = if pixel.0[0] > threshold { 255 } else { 0 };
	}
	gray
}
