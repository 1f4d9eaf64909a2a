pub mod hole;
pub mod region;
pub mod ring;
pub mod segment;

pub use hole::Hole;
pub use region::{MergedRegion, Region, RegionKind};
pub use ring::Ring;
pub use segment::{LineSegment, SegmentOrientation};
