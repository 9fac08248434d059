//! Trigger patterns for caret-anchored autocomplete.
//!
//! A trigger marks where a completable token begins: `@` for mentions,
//! `from:` and friends for search operators. The token itself is the run of
//! identifier characters right after the trigger.
//!
//! ## Why a Wrapper?
//!
//! The scan needs two positions from each match:
//!
//! ```text
//! "ping @bob"
//!      ^^         whole match: " @" (the space is context, not trigger)
//!       ^         trigger start: the "@" itself
//!        ^        token start: match end
//! ```
//!
//! The regex crate has no look-behind, so context characters become part of
//! the match. A pattern may wrap the real trigger in a group named
//! `trigger`; when that group participates, its start is the trigger start.
//! Otherwise the whole match is the trigger.

use std::sync::LazyLock;

use regex::Regex;

use crate::Result;

/// Name of the capture group that marks the trigger inside a wider match.
pub const TRIGGER_GROUP: &str = "trigger";

/// `@` not preceded by an ASCII alphanumeric, so `mail@example.com` is not a
/// mention.
const MENTION_PATTERN: &str = r"(?:^|[^a-zA-Z0-9])(?P<trigger>@)";

/// Mentions, plus the search operators that take a username.
const SEARCH_PATTERN: &str = r"(?:^|[^a-zA-Z0-9])(?P<trigger>@)|(?i:from|to|author|by|in|commented-?by|liked-?by):";

static MENTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MENTION_PATTERN).expect("Failed to compile mention trigger"));

static SEARCH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SEARCH_PATTERN).expect("Failed to compile search trigger"));

/// A compiled trigger pattern.
///
/// Cloning is cheap; the compiled program is shared.
///
/// ```rust
/// use mosaic::Trigger;
///
/// let mention = Trigger::mention();
/// assert!(mention.is_match("hi @bob"));
/// assert!(!mention.is_match("mail@example.com"));
///
/// let custom = Trigger::new(r"#").unwrap();
/// assert!(custom.is_match("#rust"));
/// ```
#[derive(Debug, Clone)]
pub struct Trigger {
    regex: Regex,
}

/// One occurrence of a trigger in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TriggerHit {
    /// Where the trigger itself begins.
    pub start: usize,
    /// Offset right after the trigger, where the token begins.
    pub end: usize,
}

impl Trigger {
    /// Compile a custom trigger pattern.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTrigger`] if the pattern does not
    /// compile.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// The `@mention` trigger used in posts and comments.
    #[must_use]
    pub fn mention() -> Self {
        Self {
            regex: MENTION.clone(),
        }
    }

    /// The search box trigger: `@mention` or a user-valued operator such as
    /// `from:`, `in:` or `liked-by:`.
    #[must_use]
    pub fn search() -> Self {
        Self {
            regex: SEARCH.clone(),
        }
    }

    /// The source pattern.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Whether this is the built-in search box trigger.
    #[must_use]
    pub fn is_search(&self) -> bool {
        self.regex.as_str() == SEARCH_PATTERN
    }

    /// Whether the trigger occurs anywhere in `text`.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Find the first trigger at or after byte offset `cursor`.
    ///
    /// Anchors such as `^` keep their meaning relative to the whole text.
    pub(crate) fn find_at(&self, text: &str, cursor: usize) -> Option<TriggerHit> {
        let caps = self.regex.captures_at(text, cursor)?;
        let whole = caps.get(0)?;
        let start = caps
            .name(TRIGGER_GROUP)
            .map_or(whole.start(), |group| group.start());
        Some(TriggerHit {
            start,
            end: whole.end(),
        })
    }
}

impl Default for Trigger {
    fn default() -> Self {
        Self::mention()
    }
}

impl std::str::FromStr for Trigger {
    type Err = crate::Error;

    fn from_str(pattern: &str) -> Result<Self> {
        Self::new(pattern)
    }
}
