//! Tiling: Where dashes go and how big the line is.
//!
//! Dash `i` starts at `i * period` along the tiling axis, where
//! `period = dash_length + gap_length`. A dash is emitted while its start (the
//! cumulative advance so far) is within the available extent, and the first dash
//! is emitted unconditionally. The last dash may run past the extent; clipping is
//! left to the surface.
//!
//! ```text
//!  extent = 20, dash = 4, gap = 4
//!  0   4   8  12  16  20  24
//!  ████    ████    ████
//! ```

use super::config::{DashConfig, Orientation};
use crate::layout::{LayoutExtent, Point, ResolvedSize};
use crate::surface::{DrawingSurface, Segment};

/// Size the line settles on for an offered extent.
///
/// The tiling axis takes the whole offered extent; the cross axis is exactly
/// `thickness`. Degenerate extents pass through unchanged.
pub fn resolve_size(extent: LayoutExtent, config: &DashConfig) -> ResolvedSize {
    match config.orientation() {
        Orientation::Horizontal => ResolvedSize::new(extent.available_width, config.thickness()),
        Orientation::Vertical => ResolvedSize::new(config.thickness(), extent.available_height),
    }
}

/// Stroke every dash for `extent` onto `surface`, in order.
///
/// Returns the number of segments drawn, which is always at least one.
pub fn render<S>(surface: &mut S, config: &DashConfig, extent: LayoutExtent) -> usize
where
    S: DrawingSurface + ?Sized,
{
    let segments = segments(config, extent);
    let count = segments.len();
    log::trace!(
        "Drawing {count} {:?} dashes (period {})",
        config.orientation(),
        config.period()
    );
    for segment in segments {
        segment.draw_on(surface);
    }
    count
}

/// Dashes for `extent`, tiled along the configured orientation.
pub fn segments(config: &DashConfig, extent: LayoutExtent) -> Segments {
    match config.orientation() {
        Orientation::Horizontal => horizontal(config, extent.available_width),
        Orientation::Vertical => vertical(config, extent.available_height),
    }
}

/// How many dashes [`render`] would draw for `extent`.
pub fn segment_count(config: &DashConfig, extent: LayoutExtent) -> usize {
    let available = match config.orientation() {
        Orientation::Horizontal => extent.available_width,
        Orientation::Vertical => extent.available_height,
    };
    dash_count(available, config.period())
}

/// Dashes along X, vertically centered at `thickness / 2`.
#[allow(clippy::cast_possible_truncation)]
pub fn horizontal(config: &DashConfig, available_width: f32) -> Segments {
    Segments::new(config, available_width, |config, offset| {
        let y = config.thickness() / 2.0;
        let end = offset + f64::from(config.dash_length());
        (Point::new(offset as f32, y), Point::new(end as f32, y))
    })
}

/// Dashes along Y, horizontally centered at `thickness / 2`.
#[allow(clippy::cast_possible_truncation)]
pub fn vertical(config: &DashConfig, available_height: f32) -> Segments {
    Segments::new(config, available_height, |config, offset| {
        let x = config.thickness() / 2.0;
        let end = offset + f64::from(config.dash_length());
        (Point::new(x, offset as f32), Point::new(x, end as f32))
    })
}

/// Highest dash index [`dash_count`] settles on, so the settle loops cannot overflow.
const MAX_LAST_INDEX: usize = usize::MAX / 2;

/// Number of dash starts `i * period` with `i == 0` or `i * period <= available`.
///
/// Works in `f64` so counts past 2^24 stay exact.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::cast_precision_loss)]
fn dash_count(available: f32, period: f32) -> usize {
    debug_assert!(period > 0.0);
    let available = if available.is_finite() {
        f64::from(available)
    } else {
        log::warn!("Non-finite extent {available}, tiling as zero");
        0.0
    };
    let period = f64::from(period);
    if available < period {
        return 1;
    }

    // Settle the float estimate against the exact loop condition.
    let estimate = (available / period).floor().min(MAX_LAST_INDEX as f64);
    let mut last = (estimate as usize).min(MAX_LAST_INDEX);
    while last > 0 && last as f64 * period > available {
        last -= 1;
    }
    while last < MAX_LAST_INDEX && (last + 1) as f64 * period <= available {
        last += 1;
    }
    last + 1
}

/// Maps a dash's start offset to its endpoints.
type Place = fn(&DashConfig, f64) -> (Point, Point);

/// Iterator over the dashes of one line.
///
/// Produced by [`horizontal`], [`vertical`] and [`segments`].
#[derive(Clone)]
pub struct Segments {
    config: DashConfig,
    place: Place,
    index: usize,
    count: usize,
}

impl Segments {
    fn new(config: &DashConfig, available: f32, place: Place) -> Self {
        Self {
            config: *config,
            place,
            index: 0,
            count: dash_count(available, config.period()),
        }
    }
}

impl Iterator for Segments {
    type Item = Segment;

    #[allow(clippy::cast_precision_loss)]
    fn next(&mut self) -> Option<Segment> {
        if self.index >= self.count {
            return None;
        }
        let offset = self.index as f64 * f64::from(self.config.period());
        self.index += 1;

        let (start, end) = (self.place)(&self.config, offset);
        Some(Segment::new(
            start,
            end,
            self.config.thickness(),
            self.config.color(),
        ))
    }

    fn nth(&mut self, n: usize) -> Option<Segment> {
        self.index = self.index.saturating_add(n).min(self.count);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Segments {}

impl std::fmt::Debug for Segments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segments")
            .field("config", &self.config)
            .field("index", &self.index)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

impl std::iter::FusedIterator for Segments {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    fn config(dash: f32, gap: f32, orientation: Orientation) -> DashConfig {
        DashConfig::builder()
            .dash_length(dash)
            .gap_length(gap)
            .orientation(orientation)
            .build()
            .unwrap()
    }

    fn record(config: &DashConfig, extent: LayoutExtent) -> Vec<Segment> {
        let mut calls = Vec::new();
        let drawn = render(&mut calls, config, extent);
        assert_eq!(drawn, calls.len());
        calls
    }

    #[test]
    fn test_three_dashes_in_twenty() {
        let config = config(4.0, 4.0, Orientation::Horizontal);
        let calls = record(&config, LayoutExtent::new(20.0, 10.0));

        assert_eq!(calls.len(), 3);
        let starts: Vec<f32> = calls.iter().map(|s| s.start.x).collect();
        assert_eq!(starts, vec![0.0, 8.0, 16.0]);
        for s in &calls {
            assert_eq!(s.start.y, 1.0);
            assert_eq!(s.end.y, 1.0);
            assert_eq!(s.end.x - s.start.x, 4.0);
            assert_eq!(s.thickness, 2.0);
            assert_eq!(s.color, Rgba::MID_GRAY);
        }
        // Last dash ends exactly on the extent.
        assert_eq!(calls[2].end.x, 20.0);
    }

    #[test]
    fn test_overshoot_is_not_clipped() {
        let config = config(4.0, 4.0, Orientation::Horizontal);
        let calls = record(&config, LayoutExtent::new(18.0, 0.0));
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[2].end.x, 20.0);
    }

    #[test]
    fn test_exact_multiple_includes_boundary_dash() {
        let config = config(4.0, 4.0, Orientation::Horizontal);
        // Cumulative advances 0, 8, 16, 24 are all <= 24.
        assert_eq!(segment_count(&config, LayoutExtent::new(24.0, 0.0)), 4);
        assert_eq!(segment_count(&config, LayoutExtent::new(23.9, 0.0)), 3);
    }

    #[test]
    fn test_at_least_one_dash() {
        let h = config(4.0, 4.0, Orientation::Horizontal);
        let v = config(4.0, 4.0, Orientation::Vertical);

        for extent in [0.0, -1.0, -1000.0, 7.9] {
            assert_eq!(record(&h, LayoutExtent::new(extent, 0.0)).len(), 1);
            assert_eq!(record(&v, LayoutExtent::new(0.0, extent)).len(), 1);
        }

        let only = record(&h, LayoutExtent::ZERO);
        assert_eq!(only[0].start, Point::new(0.0, 1.0));
        assert_eq!(only[0].end, Point::new(4.0, 1.0));
    }

    #[test]
    fn test_non_finite_extent_draws_one() {
        let config = config(4.0, 4.0, Orientation::Horizontal);
        for extent in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert_eq!(record(&config, LayoutExtent::new(extent, 0.0)).len(), 1);
        }
    }

    #[test]
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    #[allow(clippy::cast_precision_loss)]
    fn test_count_within_bound() {
        for (dash, gap) in [(4.0, 4.0), (3.0, 0.0), (0.5, 0.25), (100.0, 100.0), (1.0, 2.5)] {
            let config = config(dash, gap, Orientation::Horizontal);
            let period = config.period();
            for extent in [-10.0, 0.0, 0.1, 1.0, 7.0, 8.0, 99.0, 1000.0, 1234.5] {
                let count = segment_count(&config, LayoutExtent::new(extent, 0.0));
                let bound = if extent > 0.0 {
                    (extent / period).ceil() as usize + 1
                } else {
                    1
                };
                assert!(count >= 1);
                assert!(count <= bound, "{count} > {bound} for {dash}/{gap} in {extent}");

                // Every emitted start lies within the extent, the next would not.
                let calls = record(&config, LayoutExtent::new(extent, 0.0));
                assert_eq!(calls.len(), count);
                let last = calls[count - 1].start.x;
                assert!(count == 1 || last <= extent);
                assert!(count as f32 * period > extent);
            }
        }
    }

    #[test]
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    fn test_count_exact_past_f32_integers() {
        let config = config(1.0, 0.0, Orientation::Horizontal);
        for extent in [16_777_216.0_f32, 16_777_218.0, 33_554_432.0, 67_108_864.0] {
            let count = segment_count(&config, LayoutExtent::new(extent, 0.0));
            assert_eq!(count, extent as usize + 1, "extent {extent}");
        }
    }

    #[test]
    fn test_long_line_offsets_keep_advancing() {
        // Period 2: every start up to 2^25 is representable in f32.
        let config = config(1.0, 1.0, Orientation::Horizontal);
        let mut iter = segments(&config, LayoutExtent::new(33_554_432.0, 0.0));
        assert_eq!(iter.len(), 16_777_217);

        let tail: Vec<f32> = iter.by_ref().skip(16_777_214).map(|s| s.start.x).collect();
        assert_eq!(tail, vec![33_554_428.0, 33_554_430.0, 33_554_432.0]);
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_nth_skips_without_walking() {
        let config = config(4.0, 4.0, Orientation::Vertical);
        let mut iter = segments(&config, LayoutExtent::new(0.0, 80.0));
        assert_eq!(iter.nth(10).map(|s| s.start.y), Some(80.0));
        assert!(iter.next().is_none());
        assert!(segments(&config, LayoutExtent::ZERO).nth(5).is_none());
    }

    #[test]
    fn test_huge_extent_completes() {
        let standard = DashConfig::default();
        let extent = LayoutExtent::new(f32::MAX, f32::MAX);
        let expected = usize::MAX / 2 + 1;

        assert_eq!(segment_count(&standard, extent), expected);
        assert_eq!(segments(&standard, extent).len(), expected);

        let mut renderer =
            crate::DashRenderer::new(standard.with_orientation(Orientation::Vertical));
        renderer.resolve_size(extent);
        assert_eq!(renderer.segments().len(), expected);

        let tiny = config(f32::MIN_POSITIVE, 0.0, Orientation::Horizontal);
        assert_eq!(segment_count(&tiny, extent), expected);
    }

    #[test]
    fn test_zero_gap_is_solid() {
        let config = config(5.0, 0.0, Orientation::Horizontal);
        let calls = record(&config, LayoutExtent::new(10.0, 0.0));
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].end, calls[1].start);
        assert_eq!(calls[1].end, calls[2].start);
    }

    #[test]
    fn test_vertical_layout() {
        let config = config(4.0, 4.0, Orientation::Vertical);
        let calls = record(&config, LayoutExtent::new(0.0, 20.0));
        assert_eq!(calls.len(), 3);
        for (s, y) in calls.iter().zip([0.0, 8.0, 16.0]) {
            assert_eq!(s.start, Point::new(1.0, y));
            assert_eq!(s.end, Point::new(1.0, y + 4.0));
        }
    }

    #[test]
    fn test_orientation_mirror() {
        let h = config(3.0, 2.0, Orientation::Horizontal);
        let v = h.with_orientation(Orientation::Vertical);
        let extent = LayoutExtent::new(37.0, 11.0);

        let across = record(&h, extent);
        let down = record(&v, extent.transpose());
        assert_eq!(across.len(), down.len());
        for (a, d) in across.iter().zip(&down) {
            assert_eq!(a.start, d.start.transpose());
            assert_eq!(a.end, d.end.transpose());
        }
    }

    #[test]
    fn test_axis_functions_ignore_orientation() {
        let config = config(4.0, 4.0, Orientation::Vertical);
        let across: Vec<Segment> = horizontal(&config, 20.0).collect();
        assert_eq!(across.len(), 3);
        assert_eq!(across[1].start, Point::new(8.0, 1.0));
    }

    #[test]
    fn test_segments_exact_size() {
        let config = config(4.0, 4.0, Orientation::Horizontal);
        let mut iter = segments(&config, LayoutExtent::new(20.0, 0.0));
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.by_ref().count(), 2);
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_resolve_size() {
        let h = DashConfig::default();
        let v = h.with_orientation(Orientation::Vertical);
        let extent = LayoutExtent::new(50.0, 10.0);

        assert_eq!(resolve_size(extent, &h), ResolvedSize::new(50.0, 2.0));
        assert_eq!(resolve_size(extent, &v), ResolvedSize::new(2.0, 10.0));
    }

    #[test]
    fn test_resolve_size_passes_degenerate_extent() {
        let h = DashConfig::default();
        let extent = LayoutExtent::new(-5.0, 0.0);
        assert_eq!(resolve_size(extent, &h), ResolvedSize::new(-5.0, 2.0));
    }
}
