//! Extents offered by layout and sizes chosen in response.

/// Space offered to a component by one layout pass.
///
/// Both dimensions are already net of any padding the host applies. Zero and
/// negative values are accepted; they describe a degenerate layout rather than
/// an error.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct LayoutExtent {
    /// Width available along X.
    pub available_width: f32,
    /// Height available along Y.
    pub available_height: f32,
}

impl LayoutExtent {
    /// Create a new extent.
    #[inline]
    pub const fn new(available_width: f32, available_height: f32) -> Self {
        Self {
            available_width,
            available_height,
        }
    }

    /// Zero-sized extent.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Swap width and height.
    #[inline]
    #[must_use]
    pub const fn transpose(self) -> Self {
        Self::new(self.available_height, self.available_width)
    }
}

/// The size a component settles on for a given [`LayoutExtent`].
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct ResolvedSize {
    /// Chosen width.
    pub width: f32,
    /// Chosen height.
    pub height: f32,
}

impl ResolvedSize {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Get the area.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Check if the size covers no area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
