//! Dash module: Configuration, tiling and the renderer component.
//!
//! - [`DashConfig`]: validated dash length, gap, thickness, color and axis
//! - [`tiling`]: pure functions computing sizes and segment positions
//! - [`DashRenderer`]: keeps the last layout extent between measure and draw
//!
//! # Example
//!
//! ```rust
//! use dashline::{DashConfig, DashRenderer, LayoutExtent, Segment};
//!
//! let mut renderer = DashRenderer::new(DashConfig::default());
//! let size = renderer.resolve_size(LayoutExtent::new(20.0, 10.0));
//! assert_eq!((size.width, size.height), (20.0, 2.0));
//!
//! let mut calls: Vec<Segment> = Vec::new();
//! assert_eq!(renderer.render(&mut calls), 3);
//! ```

mod config;
mod renderer;
pub mod tiling;

pub use config::{DashConfig, DashConfigBuilder, DashDefaults, Orientation};
pub use renderer::DashRenderer;
pub use tiling::Segments;
