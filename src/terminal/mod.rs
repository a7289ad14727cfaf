//! Terminal module: Showing a [`Grid`](crate::surface::Grid) in a terminal.
//!
//! Each grid cell becomes one character cell painted with a true-color
//! background. Output is built up front and flushed in a single write.

mod output;

pub use output::OutputBuffer;
