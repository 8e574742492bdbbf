use super::error::DrawError;
use super::{QuadtreeNode, Raster};

use image::Pixel;

impl<P: Pixel<Subpixel = u8> + 'static> QuadtreeNode<P> {
	/// Paints this tree into the supplied buffer, which must have the
	/// dimensions of the root region.
	///
	/// `max_depth` cuts descent off early: a branch at that level is painted
	/// with its own color, giving a blockier preview. `None` paints down to
	/// the leaves. Every pixel of the buffer is written exactly once.
	pub fn to_image(&self, img: &mut Raster<P>, max_depth: Option<u32>) -> Result<(), DrawError> {
		let expected = (self.region.width, self.region.height);
		if img.dimensions() != expected {
			return Err(DrawError::SizeMismatch {
				expected,
				actual: img.dimensions(),
			});
		}
		self.paint(img, max_depth);
		Ok(())
	}

	/// Renders this tree into a freshly allocated buffer.
	pub fn render(&self, max_depth: Option<u32>) -> Raster<P> {
		// Sized from the root region, so the check in `to_image` is moot.
		let mut img = Raster::new(self.region.width, self.region.height);
		self.paint(&mut img, max_depth);
		img
	}

	/// Fills each cutoff node's region with its color. `img` must match the
	/// root region's dimensions.
	fn paint(&self, img: &mut Raster<P>, max_depth: Option<u32>) {
		let origin = (self.region.x, self.region.y);
		self.walk(max_depth, &mut |node| {
			for (x, y) in node.region.coords() {
				img.put_pixel(x - origin.0, y - origin.1, node.color);
			}
		});
	}
}
