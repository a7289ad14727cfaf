//! Terminal demo: Draw a horizontal and a vertical dashed line sized to the
//! terminal.
//!
//! Run with `RUST_LOG=trace` to see layout and tiling decisions.

use std::io;

use crossterm::terminal;
use dashline::{DashConfig, DashRenderer, Grid, LayoutExtent, Orientation, OutputBuffer, Rgba};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (width, height) = terminal::size()?;
    let height = height.saturating_sub(2).max(1);
    let width = width.max(1);
    log::info!("Terminal area {width}x{height}");

    let mut grid = Grid::new(width, height);

    let mut across = DashRenderer::new(
        DashConfig::builder()
            .dash_length(6.0)
            .gap_length(3.0)
            .thickness(1.0)
            .color(Rgba::from_rgb(0x00C864))
            .build()?,
    );
    across.resolve_size(LayoutExtent::new(f32::from(width), f32::from(height)));

    let mut down = DashRenderer::new(
        DashConfig::builder()
            .dash_length(2.0)
            .gap_length(1.0)
            .thickness(2.0)
            .orientation(Orientation::Vertical)
            .build()?,
    );
    down.resolve_size(LayoutExtent::new(f32::from(width), f32::from(height)));

    let drawn = across.render(&mut grid) + down.render(&mut grid);
    log::info!("Drew {drawn} segments, {} cells painted", grid.painted());

    let mut out = OutputBuffer::new();
    out.clear_screen()?;
    out.draw_grid(&grid, 0, 0)?;
    out.flush_to(&mut io::stdout())?;
    println!();

    Ok(())
}
