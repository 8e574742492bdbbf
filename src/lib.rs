pub mod convert;
pub mod node;
pub mod region;

pub use node::{QuadtreeNode, Raster};
pub use node::build::Builder;
pub use node::error::{BoundsError, BuildError, DrawError};
pub use node::homogeneity::{is_homogeneous, Homogeneity};
pub use region::Region;
