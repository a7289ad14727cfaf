//! # Dashline
//!
//! Dashed line tiling and measurement for 2D drawing surfaces.
//!
//! Dashline answers two questions a layout host asks of a dashed rule: how big
//! is it, and where do its dashes go. It never rasterizes anything itself; it
//! hands straight segments to a [`DrawingSurface`] of your choosing.
//!
//! ## Core Concepts
//!
//! - **Validated configuration**: a [`DashConfig`] cannot exist with a
//!   non-positive period, so tiling always terminates
//! - **Measure, then draw**: [`DashRenderer::resolve_size`] fills the offered
//!   extent along the tiling axis and takes `thickness` across it
//! - **At least one dash**: drawing always emits one dash, even into a zero or
//!   negative extent; the last dash may overshoot and is left for the surface to clip
//!
//! ## Example
//!
//! ```rust
//! use dashline::{DashConfig, DashRenderer, Grid, LayoutExtent, Orientation};
//!
//! let config = DashConfig::builder()
//!     .dash_length(3.0)
//!     .gap_length(1.0)
//!     .thickness(1.0)
//!     .orientation(Orientation::Horizontal)
//!     .build()?;
//!
//! let mut renderer = DashRenderer::new(config);
//! renderer.resolve_size(LayoutExtent::new(8.0, 1.0));
//!
//! let mut grid = Grid::new(8, 1);
//! renderer.render(&mut grid);
//! assert_eq!(grid.to_ascii(), "###.###.\n");
//! # Ok::<(), dashline::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod color;
pub mod dash;
pub mod error;
pub mod layout;
pub mod surface;
pub mod terminal;

// Re-exports for convenience
pub use color::Rgba;
pub use dash::{
    tiling, DashConfig, DashConfigBuilder, DashDefaults, DashRenderer, Orientation, Segments,
};
pub use error::{ConfigError, Result};
pub use layout::{LayoutExtent, Point, ResolvedSize};
pub use surface::{DrawingSurface, Grid, Segment};
pub use terminal::OutputBuffer;
