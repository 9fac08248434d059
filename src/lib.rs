//! # mosaic
//!
//! Layout and text helpers for a social feed client: mention autocomplete,
//! justified attachment galleries, and comment thread folding.
//!
//! Everything here is a pure function over plain data. The UI layer owns the
//! events (keystrokes, caret moves, resizes) and simply calls again; there is
//! no state to invalidate and nothing to cancel.
//!
//! ## Mention Autocomplete
//!
//! Given an input's text and caret, find the token being typed after a
//! trigger such as `@` or `from:`:
//!
//! ```text
//! "cc @al|"        -> token "al" at 4..6
//! "cc @al |"       -> none (the token ended at the space)
//! "mail@host|"     -> none (an @ after a letter is an e-mail, not a mention)
//! ```
//!
//! On selection, the token is spliced out and the caret moved past the
//! completion.
//!
//! ## Justified Galleries
//!
//! Pack attachments into rows of equal height that span the container,
//! keeping the average tile close to a target area:
//!
//! ```text
//! container: 600px, target: 210²
//!
//! ┌──────────┐ ┌─────┐ ┌────────┐
//! │   1.5    │ │ 0.8 │ │  1.2   │   row 1: height 167, stretched
//! └──────────┘ └─────┘ └────────┘
//! ┌────────────────┐ ┌──────────┐
//! │      2.5       │ │   1.0    │   row 2: height 169, stretched
//! └────────────────┘ └──────────┘
//! ```
//!
//! Rows are chosen greedily by a log-ratio "stretch" metric; see
//! [`pack_gallery`] for the details.
//!
//! ## Quick Start
//!
//! ```rust
//! use mosaic::{find_token_at_caret, pack_gallery, replace_token, GalleryConfig, Span, Trigger};
//!
//! let mention = Trigger::mention();
//! assert_eq!(find_token_at_caret("@foo bar", 2, &mention), Some(Span::new(1, 4)));
//!
//! let done = replace_token("hey @fo", 7, "foobar", &mention).unwrap();
//! assert_eq!(done.text, "hey @foobar ");
//!
//! let rows = pack_gallery(&[1.5, 0.8, 1.2, 2.5, 1.0], 600, &GalleryConfig::default()).unwrap();
//! assert_eq!(rows.iter().map(|r| r.len()).sum::<usize>(), 5);
//! ```
//!
//! ## Attachment Layouts
//!
//! [`JustifiedLayout`] and [`EditingLayout`] take raw media sizes, clamp
//! aspect ratios and handle the single-image and reordering cases:
//!
//! ```rust
//! use mosaic::{fold_rows, GalleryLayout, JustifiedLayout, MediaSize};
//!
//! let media = vec![MediaSize::new(1200, 800); 9];
//! let arrangement = JustifiedLayout::default().arrange(&media, 700).unwrap();
//!
//! let rows = arrangement.rows().unwrap();
//! let fold = fold_rows(rows, false, true);
//! assert_eq!(fold.visible.len(), 1);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for spans, tiles, rows and
//!   configuration, so thresholds can come from deployment config.

pub mod caret;
mod comments;
mod config;
mod error;
mod gallery;
mod geometry;
mod layout;
mod matcher;
mod span;
mod trigger;

pub use comments::{
    can_collapse, CommentInfo, FirstComment, FoldConfig, FoldControl, Omitted, Thread, ThreadView,
};
pub use config::{
    GalleryConfig, GalleryConfigError, DEFAULT_GAP, DEFAULT_MAX_STRETCH, DEFAULT_TARGET_AREA,
};
pub use error::{Error, Result};
pub use gallery::{pack_gallery, pack_row, Row};
pub use geometry::{
    clamp_ratio, fit_into_box, MediaSize, Tile, GALLERY_GAP, MAX_EDITING_PREVIEW_HEIGHT,
    MAX_EDITING_PREVIEW_WIDTH, MAX_PREVIEW_ASPECT_RATIO, MIN_EDITING_PREVIEW_HEIGHT,
    MIN_EDITING_PREVIEW_WIDTH, SINGLE_IMAGE_MAX_HEIGHT, THUMB_AREA,
};
pub use layout::{fold_rows, Arrangement, EditingLayout, GalleryLayout, JustifiedLayout, RowFold};
pub use matcher::{
    find_match_at_caret, find_token_at_caret, query_at_caret, replace_token,
    replace_token_and_trigger, Query, Replacement, TokenMatch,
};
pub use span::Span;
pub use trigger::{Trigger, TRIGGER_GROUP};
