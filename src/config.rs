//! Gallery packing configuration.
//!
//! ## The Problem
//!
//! A justified gallery has to trade two goals against each other:
//!
//! - Rows should span the container exactly (no ragged right edge)
//! - Tiles should be about the same size everywhere (no giant lone tiles)
//!
//! For a given container, adding one more item to a row shrinks every tile in
//! it. So each row settles at the item count whose average tile area is
//! closest to a target. Sometimes even the best count is far off:
//!
//! ```text
//! target area: 210² px², container: 900 px, ratios: [2.5, 2.5]
//!
//! 1 item:  900×360  area ≈ 7.3× target   stretch = ln(7.3) ≈ 2.0
//! 2 items: 446×178  area ≈ 1.8× target   stretch ≈ 0.59
//! ```
//!
//! ## The Solution: Target Area + Max Stretch
//!
//! `GalleryConfig` names the target area and the largest log-ratio
//! (`max_stretch`) a row may be scaled up by. Rows beyond it keep the native
//! target size and leave the rest of the line empty.

/// Default average tile area: a 210×210 px square.
pub const DEFAULT_TARGET_AREA: f64 = 210.0 * 210.0;

/// Default gap between tiles, in pixels.
pub const DEFAULT_GAP: u32 = 8;

/// Default maximum upscale of a row, as a natural log of the area ratio.
pub const DEFAULT_MAX_STRETCH: f64 = 0.4;

/// Parameters for [`crate::pack_gallery`].
///
/// # Examples
///
/// ```rust
/// use mosaic::GalleryConfig;
///
/// let config = GalleryConfig::default();
/// assert_eq!(config.gap(), 8);
///
/// let config = GalleryConfig::new(300.0 * 300.0)
///     .unwrap()
///     .with_gap(4)
///     .with_max_stretch(0.25)
///     .unwrap();
/// assert_eq!(config.max_stretch(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGalleryConfig"))]
pub struct GalleryConfig {
    target_area: f64,
    gap: u32,
    max_stretch: f64,
}

impl GalleryConfig {
    /// Create a config with the given target tile area (px²) and default
    /// gap and stretch limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `target_area` is not finite and positive.
    pub fn new(target_area: f64) -> Result<Self, GalleryConfigError> {
        if !(target_area.is_finite() && target_area > 0.0) {
            return Err(GalleryConfigError::InvalidTargetArea(target_area));
        }
        Ok(Self {
            target_area,
            gap: DEFAULT_GAP,
            max_stretch: DEFAULT_MAX_STRETCH,
        })
    }

    /// Target average tile area in px².
    #[must_use]
    pub const fn target_area(&self) -> f64 {
        self.target_area
    }

    /// Side of a square tile with the target area.
    #[must_use]
    pub fn target_side(&self) -> f64 {
        self.target_area.sqrt()
    }

    /// Gap between adjacent tiles in px.
    #[must_use]
    pub const fn gap(&self) -> u32 {
        self.gap
    }

    /// Largest accepted upscale of a row, as `ln(avg_area / target_area)`.
    #[must_use]
    pub const fn max_stretch(&self) -> f64 {
        self.max_stretch
    }

    /// Set the gap between tiles.
    #[must_use]
    pub const fn with_gap(self, gap: u32) -> Self {
        Self { gap, ..self }
    }

    /// Set the stretch limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_stretch` is negative or not finite.
    pub fn with_max_stretch(self, max_stretch: f64) -> Result<Self, GalleryConfigError> {
        if !(max_stretch.is_finite() && max_stretch >= 0.0) {
            return Err(GalleryConfigError::InvalidMaxStretch(max_stretch));
        }
        Ok(Self {
            max_stretch,
            ..self
        })
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            target_area: DEFAULT_TARGET_AREA,
            gap: DEFAULT_GAP,
            max_stretch: DEFAULT_MAX_STRETCH,
        }
    }
}

/// Unvalidated form used for deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGalleryConfig {
    target_area: f64,
    #[serde(default = "default_gap")]
    gap: u32,
    #[serde(default = "default_max_stretch")]
    max_stretch: f64,
}

#[cfg(feature = "serde")]
const fn default_gap() -> u32 {
    DEFAULT_GAP
}

#[cfg(feature = "serde")]
const fn default_max_stretch() -> f64 {
    DEFAULT_MAX_STRETCH
}

#[cfg(feature = "serde")]
impl TryFrom<RawGalleryConfig> for GalleryConfig {
    type Error = GalleryConfigError;

    fn try_from(raw: RawGalleryConfig) -> Result<Self, Self::Error> {
        Self::new(raw.target_area)?
            .with_gap(raw.gap)
            .with_max_stretch(raw.max_stretch)
    }
}

/// Error when configuring a gallery.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GalleryConfigError {
    /// Target area must be finite and > 0.
    #[error("target area {0} must be finite and > 0")]
    InvalidTargetArea(f64),

    /// Stretch limit must be finite and >= 0.
    #[error("max stretch {0} must be finite and >= 0")]
    InvalidMaxStretch(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.target_area(), 44_100.0);
        assert_eq!(config.target_side(), 210.0);
        assert_eq!(config.gap(), 8);
        assert_eq!(config.max_stretch(), 0.4);
    }

    #[test]
    fn test_invalid_target_area() {
        assert!(GalleryConfig::new(0.0).is_err());
        assert!(GalleryConfig::new(-1.0).is_err());
        assert!(GalleryConfig::new(f64::NAN).is_err());
        assert!(GalleryConfig::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_invalid_max_stretch() {
        let config = GalleryConfig::default();
        assert!(config.with_max_stretch(-0.1).is_err());
        assert!(config.with_max_stretch(f64::NAN).is_err());
        assert!(config.with_max_stretch(0.0).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let config: GalleryConfig =
            serde_json::from_str(r#"{"target_area": 40000.0, "gap": 4}"#).unwrap();
        assert_eq!(config.gap(), 4);
        assert_eq!(config.max_stretch(), DEFAULT_MAX_STRETCH);

        let bad = serde_json::from_str::<GalleryConfig>(r#"{"target_area": -5.0}"#);
        assert!(bad.is_err());
    }
}
