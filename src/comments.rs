//! Comment thread folding.
//!
//! Long threads in a feed are shown as three blocks:
//!
//! ```text
//! [first comment]
//! [fold control]     "N more comments with M likes" / "collapse"
//! [tail comments]    the last few
//! ```
//!
//! Any block may be empty. This module decides which comments go where; the
//! rendering is someone else's job.
//!
//! ## Rules
//!
//! With every comment loaded, a thread folds only when it is long enough
//! that at least `min_folded_comments` would disappear behind the fold.
//! A comment being edited is never hidden: the tail is pulled back to start
//! at it.
//!
//! When the server omitted part of the thread, the fold is unconditional,
//! since the hidden comments are not available to show.

use std::ops::Range;

/// Thresholds for folding comment threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FoldConfig {
    /// Comments kept visible after the fold.
    pub comments_after_fold: usize,
    /// Fewest comments worth hiding. Smaller folds show everything.
    pub min_folded_comments: usize,
    /// Shortest thread that offers a "collapse" control once expanded.
    pub min_to_collapse: usize,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            comments_after_fold: 3,
            min_folded_comments: 3,
            min_to_collapse: 8,
        }
    }
}

/// What the fold logic needs to know about one comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommentInfo {
    /// Like count.
    pub likes: u64,
    /// An edit form is open for this comment.
    pub is_editing: bool,
}

impl CommentInfo {
    /// A comment that is not being edited.
    #[must_use]
    pub const fn new(likes: u64) -> Self {
        Self {
            likes,
            is_editing: false,
        }
    }

    /// The same comment with an open edit form.
    #[must_use]
    pub const fn editing(self) -> Self {
        Self {
            is_editing: true,
            ..self
        }
    }
}

/// Comments the server left out of a partially loaded thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Omitted {
    /// Number of comments not sent.
    pub count: usize,
    /// Their total likes.
    pub likes: u64,
    /// Index in the loaded list where the gap sits. `0` means the first
    /// comment itself was not sent.
    pub offset: usize,
}

/// The first comment slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstComment {
    /// The thread is empty.
    Absent,
    /// Render `comments[0]`.
    Shown,
    /// The first comment was not sent; render a placeholder.
    Loading,
}

/// The control between the first comment and the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldControl {
    /// Nothing to fold.
    None,
    /// Everything is shown; offer to fold it.
    Collapse,
    /// Comments are hidden; offer to show them.
    Expand {
        /// How many comments are hidden.
        hidden: usize,
        /// Their total likes.
        hidden_likes: u64,
    },
}

/// How a thread is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadView {
    /// The first comment slot.
    pub first: FirstComment,
    /// The fold control.
    pub control: FoldControl,
    /// Indices of the tail comments.
    pub tail: Range<usize>,
    /// The tail is empty because it was not sent; render a placeholder.
    pub tail_loading: bool,
}

impl ThreadView {
    /// Indices of every comment that is rendered, in order.
    pub fn visible(&self) -> impl Iterator<Item = usize> + '_ {
        let first = (self.first == FirstComment::Shown).then_some(0);
        first.into_iter().chain(self.tail.clone())
    }
}

/// A post's comment thread, as far as folding is concerned.
#[derive(Debug, Clone, Copy)]
pub struct Thread<'a> {
    /// The loaded comments, oldest first.
    pub comments: &'a [CommentInfo],
    /// Comments the server did not send, if any.
    pub omitted: Option<Omitted>,
    /// The post is open on its own page, where threads never fold.
    pub single_post: bool,
}

impl<'a> Thread<'a> {
    /// A fully loaded thread in a feed.
    #[must_use]
    pub const fn new(comments: &'a [CommentInfo]) -> Self {
        Self {
            comments,
            omitted: None,
            single_post: false,
        }
    }

    /// Mark part of the thread as not sent.
    #[must_use]
    pub const fn with_omitted(self, omitted: Omitted) -> Self {
        Self {
            omitted: Some(omitted),
            ..self
        }
    }

    /// Mark the thread as shown on the post's own page.
    #[must_use]
    pub const fn on_single_post(self) -> Self {
        Self {
            single_post: true,
            ..self
        }
    }

    /// Decide how to render the thread.
    ///
    /// `folded` is the reader's toggle state: threads start folded and the
    /// reader may expand them.
    ///
    /// ```rust
    /// use mosaic::{CommentInfo, FoldConfig, FoldControl, Thread};
    ///
    /// let comments = vec![CommentInfo::new(1); 10];
    /// let view = Thread::new(&comments).fold(true, &FoldConfig::default());
    ///
    /// assert_eq!(view.control, FoldControl::Expand { hidden: 6, hidden_likes: 6 });
    /// assert_eq!(view.visible().collect::<Vec<_>>(), vec![0, 7, 8, 9]);
    /// ```
    #[must_use]
    pub fn fold(&self, folded: bool, config: &FoldConfig) -> ThreadView {
        match self.omitted {
            Some(omitted) if omitted.count > 0 => self.fold_partial(omitted, config),
            _ => self.fold_complete(folded, config),
        }
    }

    fn likes(&self, range: Range<usize>) -> u64 {
        self.comments[range].iter().map(|c| c.likes).sum()
    }

    fn show_all(&self, config: &FoldConfig) -> ThreadView {
        let len = self.comments.len();
        let control = if !self.single_post && len >= config.min_to_collapse {
            FoldControl::Collapse
        } else {
            FoldControl::None
        };
        ThreadView {
            first: if len > 0 {
                FirstComment::Shown
            } else {
                FirstComment::Absent
            },
            control,
            tail: len.min(1)..len,
            tail_loading: false,
        }
    }

    fn fold_complete(&self, folded: bool, config: &FoldConfig) -> ThreadView {
        let len = self.comments.len();
        if self.single_post
            || !folded
            || len < 1 + config.min_folded_comments + config.comments_after_fold
        {
            return self.show_all(config);
        }

        let mut tail_start = len - config.comments_after_fold;
        if let Some(editing) = self.comments[1..].iter().position(|c| c.is_editing) {
            tail_start = tail_start.min(editing + 1);
        }

        let hidden = tail_start - 1;
        if hidden < config.min_folded_comments {
            return self.show_all(config);
        }

        ThreadView {
            first: FirstComment::Shown,
            control: FoldControl::Expand {
                hidden,
                hidden_likes: self.likes(1..tail_start),
            },
            tail: tail_start..len,
            tail_loading: false,
        }
    }

    fn fold_partial(&self, omitted: Omitted, config: &FoldConfig) -> ThreadView {
        let len = self.comments.len();
        let offset = omitted.offset.min(len);

        let mut tail_start = offset.max(len.saturating_sub(config.comments_after_fold));
        if let Some(editing) = self.comments[offset..].iter().position(|c| c.is_editing) {
            tail_start = tail_start.min(offset + editing);
        }

        ThreadView {
            first: if offset > 0 {
                FirstComment::Shown
            } else {
                FirstComment::Loading
            },
            control: FoldControl::Expand {
                hidden: omitted.count + tail_start - offset,
                hidden_likes: omitted.likes + self.likes(offset..tail_start),
            },
            tail: tail_start..len,
            tail_loading: tail_start == len,
        }
    }
}

/// Whether a reader may fold an expanded thread.
///
/// Folding would hide an open edit form if one of the comments right after
/// the first is being edited.
#[must_use]
pub fn can_collapse(comments: &[CommentInfo], config: &FoldConfig) -> bool {
    let end = (config.min_folded_comments + 1).min(comments.len());
    let start = end.min(1);
    !comments[start..end].iter().any(|c| c.is_editing)
}
