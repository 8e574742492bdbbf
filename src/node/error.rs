use crate::region::Region;

use thiserror::Error;

/// A region was empty or reached outside the raster it was checked against.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("region {region} does not fit in {width}x{height} raster")]
pub struct BoundsError {
	pub region: Region,
	pub width: u32,
	pub height: u32,
}

/// Reason why a raster couldn't be turned into a quadtree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
	/// The raster has no rows or no columns.
	#[error("raster is {width}x{height}; it needs at least one row and column")]
	InvalidInput { width: u32, height: u32 },
	/// A node's region escaped the raster. Indicates a bug in the
	/// quadrant arithmetic.
	#[error(transparent)]
	OutOfBounds(#[from] BoundsError),
}

/// Reason why a quadtree couldn't be rendered to an image buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
	/// The image buffer's dimensions differ from the tree's root region.
	#[error("output is {actual:?} but the tree covers {expected:?}")]
	SizeMismatch {
		expected: (u32, u32),
		actual: (u32, u32),
	},
}
