pub mod frame;
pub mod geometry;
pub mod params;

pub use frame::{Circle, Frame, Label, LineSegment, Size};
pub use geometry::build_frame;
pub use params::{Colors, Params};
