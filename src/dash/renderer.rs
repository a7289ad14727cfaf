//! `DashRenderer`: The measure-then-draw component.
//!
//! Hosts run layout and drawing as two separate calls. The renderer keeps the
//! extent from the last [`DashRenderer::resolve_size`] so the following
//! [`DashRenderer::render`] tiles exactly the space that was measured.

use super::config::{DashConfig, DashConfigBuilder};
use super::tiling::{self, Segments};
use crate::error::Result;
use crate::layout::{LayoutExtent, ResolvedSize};
use crate::surface::DrawingSurface;

/// A dashed line that sizes itself and draws onto a [`DrawingSurface`].
#[derive(Debug, Clone)]
pub struct DashRenderer {
    /// Current configuration (always valid).
    config: DashConfig,
    /// Extent offered by the last layout pass.
    extent: LayoutExtent,
    /// Size chosen in the last layout pass.
    size: ResolvedSize,
    /// Needs redraw flag.
    dirty: bool,
}

impl DashRenderer {
    /// Create a renderer. Until the first layout pass the extent is zero, so a
    /// draw emits a single dash.
    pub fn new(config: DashConfig) -> Self {
        Self {
            config,
            extent: LayoutExtent::ZERO,
            size: tiling::resolve_size(LayoutExtent::ZERO, &config),
            dirty: true,
        }
    }

    /// Current configuration.
    pub const fn config(&self) -> &DashConfig {
        &self.config
    }

    /// Extent from the last layout pass.
    pub const fn extent(&self) -> LayoutExtent {
        self.extent
    }

    /// Size from the last layout pass.
    pub const fn size(&self) -> ResolvedSize {
        self.size
    }

    /// Replace the configuration.
    ///
    /// The stored size is recomputed against the last extent, since thickness or
    /// orientation may have changed.
    pub fn reconfigure(&mut self, config: DashConfig) {
        log::debug!("Reconfiguring dash renderer: {config:?}");
        self.config = config;
        self.size = tiling::resolve_size(self.extent, &self.config);
        self.dirty = true;
    }

    /// Edit the configuration through a builder seeded with the current values.
    ///
    /// If the edited values fail validation the error is returned and the
    /// current configuration stays in effect.
    pub fn update<F>(&mut self, edit: F) -> Result<()>
    where
        F: FnOnce(DashConfigBuilder) -> DashConfigBuilder,
    {
        let config = edit(self.config.to_builder()).build()?;
        self.reconfigure(config);
        Ok(())
    }

    /// Layout pass: remember `extent` and answer with the chosen size.
    pub fn resolve_size(&mut self, extent: LayoutExtent) -> ResolvedSize {
        let size = tiling::resolve_size(extent, &self.config);
        if extent != self.extent || size != self.size {
            log::debug!("Dash layout {extent:?} -> {size:?}");
            self.dirty = true;
        }
        self.extent = extent;
        self.size = size;
        size
    }

    /// Draw pass: stroke the dashes for the last extent onto `surface`.
    ///
    /// Returns the number of segments drawn.
    pub fn render<S>(&self, surface: &mut S) -> usize
    where
        S: DrawingSurface + ?Sized,
    {
        tiling::render(surface, &self.config, self.extent)
    }

    /// Dashes the next [`render`](Self::render) would draw.
    pub fn segments(&self) -> Segments {
        tiling::segments(&self.config, self.extent)
    }

    /// Check if this renderer needs to be redrawn.
    pub const fn needs_redraw(&self) -> bool {
        self.dirty
    }

    /// Clear the redraw flag after rendering.
    pub const fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}

impl Default for DashRenderer {
    fn default() -> Self {
        Self::new(DashConfig::default())
    }
}
