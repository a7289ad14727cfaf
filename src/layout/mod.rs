//! Layout module: Geometry exchanged with the host's layout pass.
//!
//! The host offers a [`LayoutExtent`], the component answers with a
//! [`ResolvedSize`], and draws in [`Point`] coordinates relative to its own
//! top-left corner.

mod extent;
mod point;

pub use extent::{LayoutExtent, ResolvedSize};
pub use point::Point;
