use super::error::BuildError;
use super::homogeneity::Homogeneity;
use super::{QuadtreeNode, Raster};
use crate::region::Region;

use image::Pixel;

use std::collections::HashMap;
use std::hash::Hash;

/// Settings for decomposing a raster into a quadtree.
#[derive(Clone, Copy, Debug)]
pub struct Builder {
	/// Nodes at this level are never split further.
	pub max_depth: u32,
	pub homogeneity: Homogeneity,
}

impl Builder {
	pub fn new(max_depth: u32) -> Self {
		Builder { max_depth, homogeneity: Homogeneity::Exact }
	}

	pub fn with_homogeneity(mut self, homogeneity: Homogeneity) -> Self {
		self.homogeneity = homogeneity;
		self
	}

	/// Decomposes `raster` into a quadtree rooted at its full extent.
	///
	/// A node is split while its region is non-uniform, at least 2x2 and
	/// shallower than `max_depth`; otherwise it becomes a leaf holding the
	/// color at its region's origin.
	///
	/// A one pixel wide or tall strip is never split, so an unbounded render
	/// reproduces the source only if every strip the split reaches is uniform.
	/// Power-of-two rasters never reach a strip.
	pub fn build<P>(&self, raster: &Raster<P>) -> Result<QuadtreeNode<P>, BuildError>
	where
		P: Pixel<Subpixel = u8> + Eq + Hash + 'static
	{
		if raster.width() == 0 || raster.height() == 0 {
			return Err(BuildError::InvalidInput {
				width: raster.width(),
				height: raster.height(),
			});
		}
		let (root, _) = self.split(raster, Region::full(raster.width(), raster.height()), 0)?;
		log::debug!(
			"built quadtree over {}x{}: {} nodes, {} leaves, depth {}",
			raster.width(),
			raster.height(),
			root.node_count(),
			root.leaf_count(),
			root.depth()
		);
		Ok(root)
	}

	/// Builds the node for `region` along with the color census of that
	/// region, which the parent merges to pick its own color.
	fn split<P>(
		&self,
		raster: &Raster<P>,
		region: Region,
		level: u32
	) -> Result<(QuadtreeNode<P>, Census<P>), BuildError>
	where
		P: Pixel<Subpixel = u8> + Eq + Hash + 'static
	{
		if level >= self.max_depth || !region.can_split() {
			let origin = *raster.get_pixel(region.x, region.y);
			return Ok((QuadtreeNode::leaf(region, level, origin), tally(raster, region)));
		}
		if self.homogeneity.is_homogeneous(raster, region)? {
			let origin = *raster.get_pixel(region.x, region.y);
			let census = match self.homogeneity {
				Homogeneity::Exact => std::iter::once((origin, (region.area(), (region.y, region.x)))).collect(),
				Homogeneity::Tolerance(_) => tally(raster, region),
			};
			return Ok((QuadtreeNode::leaf(region, level, origin), census));
		}
		log::trace!("splitting {} at level {}", region, level);
		let [tl, tr, bl, br] = region.quadrants();
		let (tl, mut census) = self.split(raster, tl, level + 1)?;
		let (tr, tr_census) = self.split(raster, tr, level + 1)?;
		let (bl, bl_census) = self.split(raster, bl, level + 1)?;
		let (br, br_census) = self.split(raster, br, level + 1)?;
		merge(&mut census, tr_census);
		merge(&mut census, bl_census);
		merge(&mut census, br_census);
		let color = most_frequent(&census).unwrap_or(tl.color);
		Ok((
			QuadtreeNode {
				region,
				level,
				color,
				sections: Some(Box::new([tl, tr, bl, br])),
			},
			census,
		))
	}
}

/// Pixel counts of a region, each with the `(row, col)` where the pixel
/// first appears in row-major order.
type Census<P> = HashMap<P, (u64, (u32, u32))>;

fn tally<P>(raster: &Raster<P>, region: Region) -> Census<P>
where
	P: Pixel<Subpixel = u8> + Eq + Hash + 'static
{
	region.coords().fold(HashMap::new(), |mut h, (x, y)| {
		h.entry(*raster.get_pixel(x, y)).or_insert((0, (y, x))).0 += 1;
		h
	})
}

fn merge<P: Eq + Hash>(into: &mut Census<P>, from: Census<P>) {
	for (color, (count, first)) in from {
		let entry = into.entry(color).or_insert((0, first));
		entry.0 += count;
		entry.1 = entry.1.min(first);
	}
}

/// Most frequent pixel; ties go to whichever appears first in row-major
/// order.
fn most_frequent<P: Copy>(census: &Census<P>) -> Option<P> {
	census.iter()
		.min_by_key(|&(_, &(count, first))| (std::cmp::Reverse(count), first))
		.map(|(color, _)| *color)
}

impl<P: Pixel<Subpixel = u8> + Eq + Hash + 'static> QuadtreeNode<P> {
	/// Builds a quadtree over `raster` using exact color equality.
	pub fn build(raster: &Raster<P>, max_depth: u32) -> Result<Self, BuildError> {
		Builder::new(max_depth).build(raster)
	}
}
