//! Error types for mosaic.

/// Errors that can occur while matching or laying out.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A trigger pattern failed to compile.
    #[error("invalid trigger pattern: {0}")]
    InvalidTrigger(#[from] regex::Error),

    /// A gallery must contain at least one item.
    #[error("cannot lay out an empty gallery")]
    EmptyGallery,

    /// Aspect ratios must be finite and positive.
    #[error("invalid aspect ratio {ratio} at index {index} (must be finite and > 0)")]
    InvalidAspectRatio {
        /// Position of the offending item.
        index: usize,
        /// The rejected ratio.
        ratio: f64,
    },

    /// Media dimensions must be non-zero.
    #[error("invalid media size {width}x{height} at index {index}")]
    InvalidMediaSize {
        /// Position of the offending item.
        index: usize,
        /// Reported width.
        width: u32,
        /// Reported height.
        height: u32,
    },

    /// The row packer consumed no items. This is a bug, not a bad input.
    #[error("row packer produced an empty row at item {offset}")]
    EmptyRow {
        /// Index of the first item that was left unconsumed.
        offset: usize,
    },
}

/// Result type for mosaic operations.
pub type Result<T> = std::result::Result<T, Error>;
