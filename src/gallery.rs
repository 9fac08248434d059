//! Justified gallery packing.
//!
//! Splits a list of aspect ratios into rows of equal-height tiles that fill
//! the container width, aiming for a fixed average tile area.
//!
//! ## How It Works
//!
//! Rows are built greedily, one item at a time. For `n` items in a row of
//! width `W` with gap `g`:
//!
//! ```text
//! avg_width = (W - g·(n-1)) / n
//! height    = avg_width / avg_ratio
//! stretch   = ln(height · avg_width / target_area)
//! ```
//!
//! `stretch` is zero for a perfect fit, positive when tiles come out too big
//! and negative when too small. Adding items only shrinks tiles, so `|stretch|`
//! falls and then rises again; the row closes just before it rises:
//!
//! ```text
//! W = 900, target = 210², ratios = [1.5, 0.67, 1.0, 1.33, 1.5, ...]
//!
//! n=1  |stretch| = 2.51
//! n=2  |stretch| = 1.43
//! n=3  |stretch| = 0.62
//! n=4  |stretch| = 0.03   <- best
//! n=5  |stretch| = 0.56   worse: close the row at 4 items
//! ```
//!
//! If even the best count leaves tiles more than `max_stretch` too large (a
//! lone panorama, or the last row), the row is not stretched to full width;
//! it gets the native height `sqrt(target_area / avg_ratio)` instead.
//!
//! ## Trade-offs
//!
//! One pass, no backtracking: O(n) per call, cheap enough to rerun on every
//! resize. It is not globally optimal (Knuth-Plass style line breaking
//! would be), but rows are never revisited.

use log::{debug, trace};

use crate::geometry::round_px;
use crate::{Error, GalleryConfig, Result, Tile};

/// One row of a justified gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Row {
    /// Tile sizes, in input order. All share one height.
    pub items: Vec<Tile>,
    /// The row was scaled to fill the container width.
    ///
    /// `false` means the tiles have their native target size and the row
    /// may end short of the right edge.
    pub stretched: bool,
}

impl Row {
    /// Create a row.
    #[must_use]
    pub fn new(items: Vec<Tile>, stretched: bool) -> Self {
        Self { items, stretched }
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the row has no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The shared tile height, or `0` for an empty row.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.items.first().map_or(0, |tile| tile.height)
    }

    /// Total width of the tiles plus the gaps between them.
    #[must_use]
    pub fn width(&self, gap: u32) -> u64 {
        let tiles: u64 = self.items.iter().map(|tile| u64::from(tile.width)).sum();
        let gaps = self.items.len().saturating_sub(1) as u64 * u64::from(gap);
        tiles + gaps
    }
}

/// The best item count found so far for a row.
#[derive(Debug, Clone, Copy)]
struct Fit {
    count: usize,
    avg_ratio: f64,
    height: u32,
    stretch: f64,
}

impl Fit {
    const NONE: Self = Self {
        count: 0,
        avg_ratio: 0.0,
        height: 0,
        stretch: f64::INFINITY,
    };

    fn finish(self, ratios: &[f64], config: &GalleryConfig) -> Row {
        let ratios = &ratios[..self.count];
        if self.stretch > config.max_stretch() {
            let height = round_px((config.target_area() / self.avg_ratio).sqrt());
            trace!(
                "row of {} closed at native height {height} (stretch {:.3} > {})",
                self.count,
                self.stretch,
                config.max_stretch()
            );
            Row::new(tiles(ratios, height), false)
        } else {
            trace!(
                "row of {} stretched to height {} (stretch {:.3})",
                self.count,
                self.height,
                self.stretch
            );
            Row::new(tiles(ratios, self.height), true)
        }
    }
}

fn tiles(ratios: &[f64], height: u32) -> Vec<Tile> {
    let height = height.max(1);
    ratios
        .iter()
        .map(|ratio| {
            let width = (ratio * f64::from(height))
                .floor()
                .clamp(1.0, f64::from(u32::MAX)) as u32;
            Tile::new(width, height)
        })
        .collect()
}

/// Pack a prefix of `ratios` into one row.
///
/// Consumes as many leading items as give the closest fit to the target
/// area, and at least one unless `ratios` is empty.
///
/// A container narrower than one target-sized tile (including a zero width,
/// as on a first render before layout) gets a single tile spanning the whole
/// container, from `ratios[0]` alone.
///
/// ```rust
/// use mosaic::{pack_row, GalleryConfig};
///
/// let config = GalleryConfig::default();
/// let row = pack_row(&[1.5, 0.67, 1.0, 1.33, 1.5, 0.75], 900, &config);
/// assert_eq!(row.len(), 4);
/// assert!(row.stretched);
/// assert!(row.width(config.gap()) <= 900);
/// ```
pub fn pack_row(ratios: &[f64], container_width: u32, config: &GalleryConfig) -> Row {
    let Some(&first) = ratios.first() else {
        return Row::default();
    };

    if f64::from(container_width) < config.target_side() {
        let width = container_width.max(1);
        let height = round_px(f64::from(width) / first).max(1);
        trace!("container {container_width}px is narrower than one tile, single-item row");
        return Row::new(vec![Tile::new(width, height)], true);
    }

    let container = f64::from(container_width);
    let gap = f64::from(config.gap());
    let target = config.target_area();

    let mut avg_ratio = 0.0;
    let mut best = Fit::NONE;
    for (i, &ratio) in ratios.iter().enumerate() {
        let n = (i + 1) as f64;
        avg_ratio = (avg_ratio * (n - 1.0) + ratio) / n;
        let avg_width = (container - gap * (n - 1.0)) / n;
        if avg_width <= 0.0 {
            break;
        }
        let height = avg_width / avg_ratio;
        let stretch = (height * avg_width / target).ln();
        if stretch.abs() >= best.stretch.abs() {
            break;
        }
        best = Fit {
            count: i + 1,
            avg_ratio,
            height: round_px(height),
            stretch,
        };
    }

    best.finish(ratios, config)
}

/// Pack every ratio into justified rows.
///
/// Ratios should already be clamped into a sane range, e.g. with
/// [`crate::clamp_ratio`]. Extreme but finite ratios are accepted; their
/// tiles collapse to a height of 1 px and widths saturate at `u32::MAX`.
///
/// # Errors
///
/// - [`Error::EmptyGallery`] if `ratios` is empty.
/// - [`Error::InvalidAspectRatio`] if a ratio is not finite and positive.
/// - [`Error::EmptyRow`] if a row consumed no items. This indicates a bug in
///   the packer; the loop stops instead of spinning.
///
/// # Examples
///
/// ```rust
/// use mosaic::{pack_gallery, GalleryConfig};
///
/// let config = GalleryConfig::default();
/// let rows = pack_gallery(&[1.5, 0.67, 1.0, 1.33, 1.5, 0.75], 900, &config).unwrap();
///
/// let items: usize = rows.iter().map(|row| row.len()).sum();
/// assert_eq!(items, 6);
/// for row in &rows {
///     assert!(row.items.iter().all(|tile| tile.height == row.height()));
/// }
/// ```
pub fn pack_gallery(ratios: &[f64], container_width: u32, config: &GalleryConfig) -> Result<Vec<Row>> {
    if ratios.is_empty() {
        return Err(Error::EmptyGallery);
    }
    if let Some((index, &ratio)) = ratios
        .iter()
        .enumerate()
        .find(|(_, r)| !(r.is_finite() && **r > 0.0))
    {
        return Err(Error::InvalidAspectRatio { index, ratio });
    }

    let mut rows = Vec::new();
    let mut start = 0;
    while start < ratios.len() {
        let row = pack_row(&ratios[start..], container_width, config);
        if row.is_empty() {
            return Err(Error::EmptyRow { offset: start });
        }
        start += row.len();
        rows.push(row);
    }

    debug!(
        "packed {} items into {} rows at {container_width}px",
        ratios.len(),
        rows.len()
    );
    Ok(rows)
}
