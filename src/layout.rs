//! Attachment layouts built on the packer.
//!
//! A post shows its visual attachments in one of two ways:
//!
//! - **Justified** (reading): rows from [`crate::pack_gallery`]. A single
//!   item skips packing and is fitted into a box instead, so one photo is
//!   not blown up to the full container width.
//! - **Editing** (reordering): every tile is fitted into the same small box
//!   independently, so tiles keep their size while being dragged around.
//!
//! Both implement [`GalleryLayout`].

use log::debug;

use crate::geometry::{
    clamp_ratio, fit_into_box, MediaSize, Tile, MAX_EDITING_PREVIEW_HEIGHT,
    MAX_EDITING_PREVIEW_WIDTH, MAX_PREVIEW_ASPECT_RATIO, MIN_EDITING_PREVIEW_HEIGHT,
    MIN_EDITING_PREVIEW_WIDTH, SINGLE_IMAGE_MAX_HEIGHT,
};
use crate::{pack_gallery, Error, GalleryConfig, Result, Row};

/// Sizes assigned to a gallery's items.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arrangement {
    /// Justified rows of equal-height tiles.
    Rows(Vec<Row>),
    /// Independently sized tiles in a wrapping flow.
    Flow(Vec<Tile>),
}

impl Arrangement {
    /// Total number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.iter().map(Row::len).sum(),
            Self::Flow(tiles) => tiles.len(),
        }
    }

    /// Whether there are no tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All tiles in item order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        let (rows, flow): (&[Row], &[Tile]) = match self {
            Self::Rows(rows) => (rows.as_slice(), &[]),
            Self::Flow(tiles) => (&[], tiles.as_slice()),
        };
        rows.iter().flat_map(|row| row.items.iter()).chain(flow)
    }

    /// The rows, if this is a justified arrangement.
    #[must_use]
    pub fn rows(&self) -> Option<&[Row]> {
        match self {
            Self::Rows(rows) => Some(rows.as_slice()),
            Self::Flow(_) => None,
        }
    }
}

/// A strategy for sizing a gallery's attachments.
///
/// ```rust
/// use mosaic::{EditingLayout, GalleryLayout, JustifiedLayout, MediaSize};
///
/// fn arrange(layout: &dyn GalleryLayout, media: &[MediaSize]) -> usize {
///     layout.arrange(media, 600).map(|a| a.len()).unwrap_or(0)
/// }
///
/// let media = [MediaSize::new(1200, 800), MediaSize::new(800, 1200)];
/// assert_eq!(arrange(&JustifiedLayout::default(), &media), 2);
/// assert_eq!(arrange(&EditingLayout::default(), &media), 2);
/// ```
pub trait GalleryLayout: Send + Sync {
    /// Size every item of `media` for a container `container_width` px wide.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty gallery or media with a zero dimension.
    fn arrange(&self, media: &[MediaSize], container_width: u32) -> Result<Arrangement>;
}

fn validate(media: &[MediaSize]) -> Result<()> {
    if media.is_empty() {
        return Err(Error::EmptyGallery);
    }
    match media.iter().position(|m| !m.is_valid()) {
        Some(index) => Err(Error::InvalidMediaSize {
            index,
            width: media[index].width,
            height: media[index].height,
        }),
        None => Ok(()),
    }
}

/// Justified rows for reading a post.
#[derive(Debug, Clone, PartialEq)]
pub struct JustifiedLayout {
    config: GalleryConfig,
    max_ratio: f64,
    single_max_height: u32,
    upscale_single: bool,
}

impl JustifiedLayout {
    /// Create a layout with the given packing parameters.
    #[must_use]
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            max_ratio: MAX_PREVIEW_ASPECT_RATIO,
            single_max_height: SINGLE_IMAGE_MAX_HEIGHT,
            upscale_single: false,
        }
    }

    /// Clamp aspect ratios into `[1/max_ratio, max_ratio]` before packing.
    ///
    /// # Panics
    ///
    /// Panics if `max_ratio < 1.0` or is not finite.
    #[must_use]
    pub fn with_max_ratio(self, max_ratio: f64) -> Self {
        assert!(
            max_ratio.is_finite() && max_ratio >= 1.0,
            "max_ratio must be finite and >= 1"
        );
        Self { max_ratio, ..self }
    }

    /// Height cap for a lone item.
    #[must_use]
    pub fn with_single_max_height(self, single_max_height: u32) -> Self {
        Self {
            single_max_height,
            ..self
        }
    }

    /// Allow a lone item smaller than its box to be scaled up.
    #[must_use]
    pub fn with_upscale_single(self, upscale_single: bool) -> Self {
        Self {
            upscale_single,
            ..self
        }
    }

    /// The packing parameters.
    #[must_use]
    pub const fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Aspect ratios as the packer sees them.
    #[must_use]
    pub fn ratios(&self, media: &[MediaSize]) -> Vec<f64> {
        media
            .iter()
            .map(|m| clamp_ratio(m.aspect_ratio(), self.max_ratio))
            .collect()
    }
}

impl Default for JustifiedLayout {
    fn default() -> Self {
        Self::new(GalleryConfig::default())
    }
}

impl GalleryLayout for JustifiedLayout {
    fn arrange(&self, media: &[MediaSize], container_width: u32) -> Result<Arrangement> {
        validate(media)?;

        if let [single] = media {
            let tile = fit_into_box(
                single,
                container_width.max(1),
                self.single_max_height,
                self.upscale_single,
            );
            debug!("single item fitted to {}x{}", tile.width, tile.height);
            return Ok(Arrangement::Rows(vec![Row::new(vec![tile], false)]));
        }

        let rows = pack_gallery(&self.ratios(media), container_width, &self.config)?;
        Ok(Arrangement::Rows(rows))
    }
}

/// Fixed-box tiles for reordering attachments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditingLayout {
    max: Tile,
    min: Tile,
}

impl EditingLayout {
    /// Fit tiles into `max`, then grow each side to at least `min`.
    #[must_use]
    pub const fn new(max: Tile, min: Tile) -> Self {
        Self { max, min }
    }

    /// Size of one item, independent of its neighbours.
    #[must_use]
    pub fn tile(&self, media: &MediaSize) -> Tile {
        let fitted = fit_into_box(media, self.max.width, self.max.height, true);
        Tile::new(
            fitted.width.max(self.min.width),
            fitted.height.max(self.min.height),
        )
    }
}

impl Default for EditingLayout {
    fn default() -> Self {
        Self::new(
            Tile::new(MAX_EDITING_PREVIEW_WIDTH, MAX_EDITING_PREVIEW_HEIGHT),
            Tile::new(MIN_EDITING_PREVIEW_WIDTH, MIN_EDITING_PREVIEW_HEIGHT),
        )
    }
}

impl GalleryLayout for EditingLayout {
    fn arrange(&self, media: &[MediaSize], _container_width: u32) -> Result<Arrangement> {
        validate(media)?;
        Ok(Arrangement::Flow(media.iter().map(|m| self.tile(m)).collect()))
    }
}

/// Which rows of a gallery are on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowFold<'a> {
    /// Rows to render.
    pub visible: &'a [Row],
    /// Items in the rows that are not rendered.
    pub hidden_items: usize,
    /// A show-all/show-less toggle is rendered next to the last visible row.
    pub toggle: bool,
}

/// Fold a multi-row gallery down to its first row.
///
/// `post_expanded` is the post-level state (a post opened on its own page):
/// such a gallery is never folded and has no toggle. `folded` is the
/// reader's toggle and only matters when a toggle is shown.
///
/// ```rust
/// use mosaic::{fold_rows, Row, Tile};
///
/// let rows = vec![
///     Row::new(vec![Tile::new(100, 100); 3], true),
///     Row::new(vec![Tile::new(100, 100); 2], true),
/// ];
/// let fold = fold_rows(&rows, false, true);
/// assert_eq!(fold.visible.len(), 1);
/// assert_eq!(fold.hidden_items, 2);
/// assert!(fold.toggle);
///
/// let fold = fold_rows(&rows, true, true);
/// assert_eq!(fold.visible.len(), 2);
/// assert!(!fold.toggle);
/// ```
#[must_use]
pub fn fold_rows(rows: &[Row], post_expanded: bool, folded: bool) -> RowFold<'_> {
    let toggle = rows.len() > 1 && !post_expanded;
    if !toggle || !folded {
        return RowFold {
            visible: rows,
            hidden_items: 0,
            toggle,
        };
    }
    let (visible, hidden) = rows.split_at(1);
    RowFold {
        visible,
        hidden_items: hidden.iter().map(Row::len).sum(),
        toggle,
    }
}
