//! Media sizes, aspect-ratio clamping and box fitting.
//!
//! The packer only ever sees aspect ratios. Everything that turns server
//! media metadata into those ratios, or sizes a single item on its own,
//! lives here.

/// Widest (and, inverted, tallest) aspect ratio a preview is laid out with.
pub const MAX_PREVIEW_ASPECT_RATIO: f64 = 2.5;

/// Gap between gallery tiles, in pixels.
pub const GALLERY_GAP: u32 = 8;

/// Average tile area of a multi-item gallery, in px².
pub const THUMB_AREA: f64 = 210.0 * 210.0;

/// Tallest a lone image may be rendered.
pub const SINGLE_IMAGE_MAX_HEIGHT: u32 = 400;

/// Box every tile is fitted into while attachments are being reordered.
pub const MAX_EDITING_PREVIEW_WIDTH: u32 = 400;
/// See [`MAX_EDITING_PREVIEW_WIDTH`].
pub const MAX_EDITING_PREVIEW_HEIGHT: u32 = 175;
/// Smallest tile width while reordering, so drag targets stay usable.
pub const MIN_EDITING_PREVIEW_WIDTH: u32 = 60;
/// Smallest tile height while reordering.
pub const MIN_EDITING_PREVIEW_HEIGHT: u32 = 60;

/// A rendered size in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    /// Width in px.
    pub width: u32,
    /// Height in px.
    pub height: u32,
}

impl Tile {
    /// Create a tile.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Area in px².
    #[must_use]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Pixel dimensions reported for an image or video attachment.
///
/// The server may also report a smaller preview rendition; when present it
/// is what actually gets displayed, so it takes precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaSize {
    /// Original width.
    pub width: u32,
    /// Original height.
    pub height: u32,
    /// Preview width, if the server made one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preview_width: Option<u32>,
    /// Preview height, if the server made one.
    #[cfg_attr(feature = "serde", serde(default))]
    pub preview_height: Option<u32>,
}

impl MediaSize {
    /// Media without a separate preview.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            preview_width: None,
            preview_height: None,
        }
    }

    /// Attach preview dimensions.
    #[must_use]
    pub const fn with_preview(self, width: u32, height: u32) -> Self {
        Self {
            preview_width: Some(width),
            preview_height: Some(height),
            ..self
        }
    }

    /// The size that is displayed: the preview if any, else the original.
    #[must_use]
    pub fn display_size(&self) -> (u32, u32) {
        (
            self.preview_width.unwrap_or(self.width),
            self.preview_height.unwrap_or(self.height),
        )
    }

    /// Width over height of the original.
    ///
    /// Zero dimensions give `0.0` or infinity; callers validate first.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// Whether both the original and the displayed size are non-zero.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let (w, h) = self.display_size();
        self.width > 0 && self.height > 0 && w > 0 && h > 0
    }
}

/// Clamp an aspect ratio into `[1/max, max]`.
///
/// # Panics
///
/// Panics if `max < 1.0` or is NaN.
///
/// ```rust
/// use mosaic::clamp_ratio;
///
/// assert_eq!(clamp_ratio(10.0, 2.5), 2.5);
/// assert_eq!(clamp_ratio(0.1, 2.5), 0.4);
/// assert_eq!(clamp_ratio(1.5, 2.5), 1.5);
/// ```
#[must_use]
pub fn clamp_ratio(ratio: f64, max: f64) -> f64 {
    ratio.clamp(1.0 / max, max)
}

/// Fit media into a box, preserving its aspect ratio.
///
/// Without `upscale` the box is first shrunk to the media's own display size,
/// so small media is never blown up. The side that overflows the box more is
/// pinned to the box edge; the other side is rounded.
///
/// ```rust
/// use mosaic::{fit_into_box, MediaSize, Tile};
///
/// let photo = MediaSize::new(1600, 900);
/// assert_eq!(fit_into_box(&photo, 400, 400, false), Tile::new(400, 225));
///
/// let icon = MediaSize::new(32, 32);
/// assert_eq!(fit_into_box(&icon, 400, 175, false), Tile::new(32, 32));
/// assert_eq!(fit_into_box(&icon, 400, 175, true), Tile::new(175, 175));
/// ```
#[must_use]
pub fn fit_into_box(media: &MediaSize, box_width: u32, box_height: u32, upscale: bool) -> Tile {
    let (width, height) = media.display_size();
    let (box_width, box_height) = if upscale {
        (box_width, box_height)
    } else {
        (box_width.min(width), box_height.min(height))
    };
    if box_width == 0 || box_height == 0 {
        return Tile::new(box_width, box_height);
    }

    let w_ratio = f64::from(width) / f64::from(box_width);
    let h_ratio = f64::from(height) / f64::from(box_height);

    if w_ratio > h_ratio {
        Tile::new(box_width, round_px(f64::from(height) / w_ratio))
    } else {
        Tile::new(round_px(f64::from(width) / h_ratio), box_height)
    }
}

/// Round a non-negative pixel length to the nearest integer.
pub(crate) fn round_px(value: f64) -> u32 {
    value.round().max(0.0) as u32
}
