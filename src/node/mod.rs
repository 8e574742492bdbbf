pub mod build;
pub mod error;
pub mod homogeneity;
pub mod image;

use crate::region::Region;

/// Pixel grid the tree is built from and rendered into.
pub type Raster<P> = ::image::ImageBuffer<P, Vec<u8>>;

/// Node in a quadtree decomposition of a raster.
///
/// May contain subnodes (branch node) or no subnodes and just a color
/// (leaf node). Subnodes are stored top-left, top-right, bottom-left,
/// bottom-right, and their regions tile this node's region exactly.
///
/// It must always contain a color, such that tree descent
/// can stop at any level and give a meaningful preview. Leaves hold the
/// color of their region; branches hold the most frequent color of theirs.
#[derive(Clone, Debug, PartialEq)]
pub struct QuadtreeNode<P> {
	pub region: Region,
	pub level: u32,
	pub color: P,
	pub sections: Option<Box<[QuadtreeNode<P>; 4]>>,
}

impl<P> QuadtreeNode<P> {
	pub fn leaf(region: Region, level: u32, color: P) -> Self {
		QuadtreeNode { region, level, color, sections: None }
	}

	pub fn is_leaf(&self) -> bool {
		self.sections.is_none()
	}

	/// Subnodes in quadrant order, if this is a branch.
	pub fn sections(&self) -> Option<&[QuadtreeNode<P>; 4]> {
		self.sections.as_deref()
	}

	/// Total number of nodes in this subtree, including itself.
	pub fn node_count(&self) -> usize {
		1 + self.sections.iter()
			.flat_map(|s| s.iter())
			.map(QuadtreeNode::node_count)
			.sum::<usize>()
	}

	pub fn leaf_count(&self) -> usize {
		match self.sections {
			Some(ref sects) => sects.iter().map(QuadtreeNode::leaf_count).sum(),
			None => 1,
		}
	}

	/// Deepest level of any node in this subtree.
	pub fn depth(&self) -> u32 {
		match self.sections {
			Some(ref sects) => sects.iter().map(QuadtreeNode::depth).max().unwrap_or(self.level),
			None => self.level,
		}
	}

	/// Visits, in quadrant order, every node that ends descent when the tree
	/// is cut off at `max_depth`: leaves, plus branches at level `max_depth`.
	///
	/// `None` means no cutoff. The visited regions partition the root region.
	pub fn walk<F: FnMut(&QuadtreeNode<P>)>(&self, max_depth: Option<u32>, visit: &mut F) {
		match self.sections {
			Some(ref sects) if max_depth.map_or(true, |d| self.level < d) => {
				for section in sects.iter() {
					section.walk(max_depth, visit);
				}
			},
			_ => visit(self),
		}
	}
}
