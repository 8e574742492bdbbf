use std::fmt;

/// An axis-aligned rectangle of pixels.
///
/// `x` is the column and `y` the row of the top-left pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
	pub x: u32,
	pub y: u32,
	pub width: u32,
	pub height: u32,
}

impl Region {
	pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
		Region { x, y, width, height }
	}

	/// Region covering a whole `width` by `height` raster.
	pub fn full(width: u32, height: u32) -> Self {
		Region::new(0, 0, width, height)
	}

	pub fn area(&self) -> u64 {
		self.width as u64 * self.height as u64
	}

	pub fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}

	/// Whether the region is non-empty and lies inside a raster of the
	/// given dimensions.
	pub fn fits_within(&self, width: u32, height: u32) -> bool {
		!self.is_empty() &&
			self.x.checked_add(self.width).map_or(false, |r| r <= width) &&
			self.y.checked_add(self.height).map_or(false, |b| b <= height)
	}

	/// Whether the region can be cut into four non-empty quadrants.
	pub fn can_split(&self) -> bool {
		self.width >= 2 && self.height >= 2
	}

	/// Cuts the region into four quadrants, in the order top-left,
	/// top-right, bottom-left, bottom-right.
	///
	/// The near (left/top) quadrants get the floored half and the far ones
	/// the remainder, so odd sizes still tile exactly.
	pub fn quadrants(&self) -> [Region; 4] {
		let (near_w, near_h) = (self.width / 2, self.height / 2);
		let (far_w, far_h) = (self.width - near_w, self.height - near_h);
		let (mid_x, mid_y) = (self.x + near_w, self.y + near_h);
		[
			Region::new(self.x, self.y, near_w, near_h),
			Region::new(mid_x, self.y, far_w, near_h),
			Region::new(self.x, mid_y, near_w, far_h),
			Region::new(mid_x, mid_y, far_w, far_h),
		]
	}

	/// Row-major iterator over every `(x, y)` coordinate in the region.
	pub fn coords(&self) -> impl Iterator<Item = (u32, u32)> {
		let Region { x, y, width, height } = *self;
		(y..y + height).flat_map(move |row| (x..x + width).map(move |col| (col, row)))
	}
}

impl fmt::Display for Region {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
	}
}
