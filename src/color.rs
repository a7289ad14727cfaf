//! Rgba: Stroke color.

/// 8-bit-per-channel RGBA color.
///
/// Colors are stored straight (not premultiplied). How alpha is composited is
/// up to the drawing surface.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgba {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0 = transparent, 255 = opaque)
    pub a: u8,
}

impl Rgba {
    /// Create a new color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    /// Opaque black.
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque mid gray (`#888888`).
    pub const MID_GRAY: Self = Self::opaque(0x88, 0x88, 0x88);
    /// Opaque light gray (`#9e9e9e`).
    pub const LIGHT_GRAY: Self = Self::opaque(0x9E, 0x9E, 0x9E);

    /// Create from a packed `0xAARRGGBB` integer.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self::new(
            ((argb >> 16) & 0xFF) as u8,
            ((argb >> 8) & 0xFF) as u8,
            (argb & 0xFF) as u8,
            ((argb >> 24) & 0xFF) as u8,
        )
    }

    /// Create an opaque color from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_rgb(hex: u32) -> Self {
        Self::opaque(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }

    /// Pack into a `0xAARRGGBB` integer.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Same color with a different alpha.
    #[inline]
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Whether the color draws nothing.
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

impl std::fmt::Debug for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_argb() {
        assert_eq!(Rgba::from_argb(0xFF88_8888), Rgba::MID_GRAY);
        assert_eq!(Rgba::from_argb(0x80FF_0000), Rgba::new(255, 0, 0, 128));
        assert_eq!(Rgba::MID_GRAY.to_argb(), 0xFF88_8888);
    }

    #[test]
    fn test_from_rgb_is_opaque() {
        let c = Rgba::from_rgb(0x009E_9E9E);
        assert_eq!(c, Rgba::LIGHT_GRAY);
        assert!(!c.is_transparent());
        assert!(c.with_alpha(0).is_transparent());
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Rgba::new(1, 2, 255, 16)), "#0102ff10");
    }
}
