use super::error::BoundsError;
use super::Raster;
use crate::region::Region;

use image::Pixel;

/// Rule deciding whether two pixels count as the same color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Homogeneity {
	/// Every channel must match exactly.
	Exact,
	/// Every channel may differ by at most this much.
	Tolerance(u8),
}

impl Default for Homogeneity {
	fn default() -> Self {
		Homogeneity::Exact
	}
}

impl Homogeneity {
	pub fn matches<P: Pixel<Subpixel = u8>>(&self, a: &P, b: &P) -> bool {
		let limit = match *self {
			Homogeneity::Exact => 0,
			Homogeneity::Tolerance(t) => t,
		};
		a.channels().iter()
			.zip(b.channels())
			.all(|(x, y)| (*x as i16 - *y as i16).abs() <= limit as i16)
	}

	/// Whether every pixel of `region` matches the pixel at its origin.
	///
	/// The region must be non-empty and lie inside the raster.
	pub fn is_homogeneous<P: Pixel<Subpixel = u8> + 'static>(
		&self,
		raster: &Raster<P>,
		region: Region
	) -> Result<bool, BoundsError> {
		if !region.fits_within(raster.width(), raster.height()) {
			return Err(BoundsError {
				region,
				width: raster.width(),
				height: raster.height(),
			});
		}
		let reference = raster.get_pixel(region.x, region.y);
		Ok(region.coords().all(|(x, y)| self.matches(raster.get_pixel(x, y), reference)))
	}
}

/// Exact-equality homogeneity check.
pub fn is_homogeneous<P: Pixel<Subpixel = u8> + 'static>(
	raster: &Raster<P>,
	region: Region
) -> Result<bool, BoundsError> {
	Homogeneity::Exact.is_homogeneous(raster, region)
}

#[cfg(test)]
mod tests {
	use super::*;
	use image::{GrayImage, Luma, Rgb, RgbImage};

	#[test]
	fn uniform_region_is_homogeneous() {
		let img = RgbImage::from_pixel(4, 3, Rgb([7, 8, 9]));
		assert_eq!(is_homogeneous(&img, Region::full(4, 3)), Ok(true));
	}

	#[test]
	fn single_differing_channel_breaks_exact() {
		let mut img = RgbImage::from_pixel(4, 4, Rgb([7, 8, 9]));
		img.put_pixel(3, 3, Rgb([7, 8, 10]));
		assert_eq!(is_homogeneous(&img, Region::full(4, 4)), Ok(false));
		assert_eq!(is_homogeneous(&img, Region::new(0, 0, 3, 4)), Ok(true));
	}

	#[test]
	fn tolerance_accepts_small_differences() {
		let mut img = GrayImage::from_pixel(2, 2, Luma([100]));
		img.put_pixel(1, 0, Luma([104]));
		img.put_pixel(0, 1, Luma([96]));
		let region = Region::full(2, 2);
		assert_eq!(Homogeneity::Tolerance(4).is_homogeneous(&img, region), Ok(true));
		assert_eq!(Homogeneity::Tolerance(3).is_homogeneous(&img, region), Ok(false));
	}

	#[test]
	fn region_outside_raster_is_rejected() {
		let img = GrayImage::new(4, 4);
		let region = Region::new(2, 2, 3, 1);
		assert_eq!(
			is_homogeneous(&img, region),
			Err(BoundsError { region, width: 4, height: 4 })
		);
		assert!(is_homogeneous(&img, Region::new(4, 0, 0, 1)).is_err());
	}
}
