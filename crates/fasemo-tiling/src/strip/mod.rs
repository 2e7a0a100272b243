//! The layout model: an ordered sequence of (pane, separator) units plus
//! a derived trailing filler.

mod geometry;
mod operations;
mod resize;
mod types;

pub use geometry::HitRegion;
pub use types::*;
