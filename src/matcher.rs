//! Caret-anchored token matching.
//!
//! Decides whether the caret of a text input sits inside a completable token
//! such as `@alice` or `from:bob`, and splices a chosen completion in.
//!
//! ## The Rule
//!
//! Find the triggers before the caret, left to right. After each trigger,
//! take the run of identifier characters (`[A-Za-z0-9-]`). The first run
//! that the caret touches (inside, or exactly at its right edge) wins:
//!
//! ```text
//! "|@foo bar"  -> none        caret before the trigger
//! "@|foo bar"  -> "foo" 1..4
//! "@f|oo bar"  -> "foo" 1..4
//! "@foo| bar"  -> "foo" 1..4  right edge is inclusive
//! "@foo |bar"  -> none        the run ended at the space
//! ```
//!
//! A trigger with an empty run (`"@ foo"`) never qualifies, so a bare `@`
//! does not open suggestions.
//!
//! ## Offsets
//!
//! Carets and spans are byte offsets. Out-of-range or mid-character carets
//! are clamped with [`crate::caret::snap_to_char_boundary`]; a returned span
//! always lies inside the text.

use crate::caret::snap_to_char_boundary;
use crate::{Span, Trigger};

/// A trigger and the token that follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenMatch {
    /// The trigger itself, e.g. `@` or `from:`.
    pub trigger: Span,
    /// The identifier run after the trigger. Never empty.
    pub token: Span,
}

impl TokenMatch {
    /// Trigger and token together.
    #[must_use]
    pub const fn full(&self) -> Span {
        Span {
            start: self.trigger.start,
            end: self.token.end,
        }
    }
}

/// The result of splicing a completion into the text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Replacement {
    /// The new text content.
    pub text: String,
    /// Where the caret goes: right after the completion and one separator
    /// character. Always a char boundary of `text`.
    pub caret: usize,
}

/// The token under the caret, ready to drive a suggestion popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query<'a> {
    /// The token text, without its trigger.
    pub text: &'a str,
    /// Where the token lies.
    pub span: Span,
    /// The token is an `@username` typed at the very start of the input.
    /// Only set for [`Trigger::search`].
    ///
    /// Search boxes use this to offer jumping straight to the user's page.
    pub at_start: bool,
}

fn is_identifier(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-'
}

/// Length of the identifier run starting at `pos`.
fn identifier_run(text: &str, pos: usize) -> usize {
    text.as_bytes()[pos..]
        .iter()
        .take_while(|&&b| is_identifier(b))
        .count()
}

/// Offset of the character after the one at `pos`.
fn next_char(text: &str, pos: usize) -> usize {
    text[pos..]
        .chars()
        .next()
        .map_or(text.len() + 1, |ch| pos + ch.len_utf8())
}

/// Find the trigger and token that the caret is editing.
///
/// The scan cursor is a local value; nothing is stored on `trigger` between
/// calls.
///
/// ```rust
/// use mosaic::{find_match_at_caret, Trigger};
///
/// let text = "cc @bob";
/// let found = find_match_at_caret(text, 6, &Trigger::mention()).unwrap();
/// assert_eq!(found.trigger.slice(text), "@");
/// assert_eq!(found.token.slice(text), "bob");
/// ```
pub fn find_match_at_caret(text: &str, caret: usize, trigger: &Trigger) -> Option<TokenMatch> {
    let caret = snap_to_char_boundary(text, caret);
    let mut cursor = 0;

    while cursor <= text.len() {
        let hit = trigger.find_at(text, cursor)?;
        let pos = hit.end;
        if pos > caret {
            return None;
        }

        let len = identifier_run(text, pos);
        if len > 0 && caret <= pos + len {
            return Some(TokenMatch {
                trigger: Span::new(hit.start, pos),
                token: Span::new(pos, pos + len),
            });
        }

        cursor = next_char(text, pos);
    }

    None
}

/// Find the span of the token the caret is editing.
///
/// Returns `None` when the caret is not inside or right after a token.
///
/// ```rust
/// use mosaic::{find_token_at_caret, Span, Trigger};
///
/// let mention = Trigger::mention();
/// assert_eq!(find_token_at_caret("@foo bar", 3, &mention), Some(Span::new(1, 4)));
/// assert_eq!(find_token_at_caret("@foo bar", 5, &mention), None);
/// ```
pub fn find_token_at_caret(text: &str, caret: usize, trigger: &Trigger) -> Option<Span> {
    find_match_at_caret(text, caret, trigger).map(|found| found.token)
}

/// The token under the caret as a suggestion query.
pub fn query_at_caret<'a>(text: &'a str, caret: usize, trigger: &Trigger) -> Option<Query<'a>> {
    let found = find_match_at_caret(text, caret, trigger)?;
    Some(Query {
        text: found.token.slice(text),
        span: found.token,
        at_start: trigger.is_search() && found.token.start == 1 && text.starts_with('@'),
    })
}

/// Replace the token under the caret, keeping its trigger.
///
/// A trailing space is appended when the token ends the text. The caret
/// lands one character past the completion, i.e. after that separator.
///
/// Returns `None`, and changes nothing, if there is no token at the caret.
///
/// ```rust
/// use mosaic::{replace_token, Trigger};
///
/// let done = replace_token("hi @al", 6, "alice", &Trigger::mention()).unwrap();
/// assert_eq!(done.text, "hi @alice ");
/// assert_eq!(done.caret, 10);
/// ```
pub fn replace_token(
    text: &str,
    caret: usize,
    replacement: &str,
    trigger: &Trigger,
) -> Option<Replacement> {
    let found = find_match_at_caret(text, caret, trigger)?;
    Some(splice(text, found.token, replacement))
}

/// Replace the token under the caret together with its trigger.
///
/// Used when the completion is a whole entity rather than a name, so the
/// `@` itself must go.
///
/// ```rust
/// use mosaic::{replace_token_and_trigger, Trigger};
///
/// let done = replace_token_and_trigger("Hi @fo there", 5, "foobar", &Trigger::mention()).unwrap();
/// assert_eq!(done.text, "Hi foobar there");
/// assert_eq!(done.caret, 10);
/// ```
pub fn replace_token_and_trigger(
    text: &str,
    caret: usize,
    replacement: &str,
    trigger: &Trigger,
) -> Option<Replacement> {
    let found = find_match_at_caret(text, caret, trigger)?;
    Some(splice(text, found.full(), replacement))
}

fn splice(text: &str, span: Span, replacement: &str) -> Replacement {
    let before = &text[..span.start];
    let after = &text[span.end..];
    let after = if after.is_empty() { " " } else { after };

    let mut out = String::with_capacity(before.len() + replacement.len() + after.len());
    out.push_str(before);
    out.push_str(replacement);
    out.push_str(after);

    let separator = after.chars().next().map_or(1, char::len_utf8);
    Replacement {
        text: out,
        caret: span.start + replacement.len() + separator,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mention() -> Trigger {
        Trigger::mention()
    }

    #[test]
    fn test_caret_positions_around_token() {
        let text = "@foo bar";
        let t = mention();
        assert_eq!(find_token_at_caret(text, 0, &t), None);
        for caret in 1..=4 {
            assert_eq!(find_token_at_caret(text, caret, &t), Some(Span::new(1, 4)));
        }
        assert_eq!(find_token_at_caret(text, 5, &t), None);
        assert_eq!(find_token_at_caret(text, 8, &t), None);
    }

    #[test]
    fn test_bare_trigger_does_not_qualify() {
        assert_eq!(find_token_at_caret("@ foo", 1, &mention()), None);
        assert_eq!(find_token_at_caret("@", 1, &mention()), None);
    }

    #[test]
    fn test_later_trigger_wins_when_caret_is_there() {
        let text = "@ann and @bo";
        assert_eq!(find_token_at_caret(text, 12, &mention()), Some(Span::new(10, 12)));
        assert_eq!(find_token_at_caret(text, 2, &mention()), Some(Span::new(1, 4)));
        assert_eq!(find_token_at_caret(text, 7, &mention()), None);
    }

    #[test]
    fn test_hyphenated_and_numeric_tokens() {
        let text = "@team-42!";
        assert_eq!(find_token_at_caret(text, 8, &mention()), Some(Span::new(1, 8)));
        assert_eq!(find_token_at_caret(text, 9, &mention()), None);
    }

    #[test]
    fn test_email_is_not_a_mention() {
        assert_eq!(find_token_at_caret("me@host", 5, &mention()), None);
    }

    #[test]
    fn test_caret_out_of_range_is_clamped() {
        assert_eq!(find_token_at_caret("@foo", 100, &mention()), Some(Span::new(1, 4)));
    }

    #[test]
    fn test_non_ascii_text_around_trigger() {
        let text = "日本 @bob";
        let span = find_token_at_caret(text, text.len(), &mention()).unwrap();
        assert_eq!(span.slice(text), "bob");
        // Caret inside a multibyte char snaps back to a boundary before "@"
        assert_eq!(find_token_at_caret(text, 1, &mention()), None);
    }

    #[test]
    fn test_non_ascii_after_trigger_does_not_panic() {
        assert_eq!(find_token_at_caret("@é @x", 6, &mention()), Some(Span::new(5, 6)));
        assert_eq!(find_token_at_caret("@é", 3, &mention()), None);
    }

    #[test]
    fn test_never_matching_trigger() {
        let t = Trigger::new("zzz").unwrap();
        assert_eq!(find_token_at_caret("@foo", 2, &t), None);
    }

    #[test]
    fn test_empty_matching_trigger_terminates() {
        let t = Trigger::new("x*").unwrap();
        // Every position matches with an empty trigger; the first run wins.
        assert_eq!(find_token_at_caret("ab cd", 4, &t), Some(Span::new(3, 5)));
        assert_eq!(find_token_at_caret("   ", 2, &t), None);
    }

    #[test]
    fn test_search_operator_token() {
        let text = "cats from:ali";
        let found = find_match_at_caret(text, text.len(), &Trigger::search()).unwrap();
        assert_eq!(found.trigger.slice(text), "from:");
        assert_eq!(found.token.slice(text), "ali");
    }

    #[test]
    fn test_query_at_start_flag() {
        let q = query_at_caret("@ali", 4, &Trigger::search()).unwrap();
        assert_eq!(q.text, "ali");
        assert!(q.at_start);

        let q = query_at_caret("x @ali", 6, &Trigger::search()).unwrap();
        assert!(!q.at_start);
    }

    #[test]
    fn test_at_start_only_in_search_box() {
        let q = query_at_caret("@ali", 4, &mention()).unwrap();
        assert_eq!(q.text, "ali");
        assert!(!q.at_start);

        let custom = Trigger::new("@").unwrap();
        assert!(!query_at_caret("@ali", 4, &custom).unwrap().at_start);
    }

    #[test]
    fn test_caret_after_multibyte_follower() {
        let done = replace_token("@fo日", 3, "foobar", &mention()).unwrap();
        assert_eq!(done.text, "@foobar日");
        assert_eq!(done.caret, done.text.len());
        assert!(done.text.is_char_boundary(done.caret));

        let done = replace_token("@fo é", 3, "foobar", &mention()).unwrap();
        assert_eq!(&done.text[..done.caret], "@foobar ");

        let done = replace_token_and_trigger("x @fé", 4, "fred", &mention()).unwrap();
        assert_eq!(done.text, "x fredé");
        assert_eq!(&done.text[..done.caret], "x fredé");
    }

    #[test]
    fn test_replace_keeps_trailing_text() {
        let done = replace_token("Hi @fo there", 5, "foobar", &mention()).unwrap();
        assert_eq!(done.text, "Hi @foobar there");
        assert_eq!(done.caret, 11);
    }

    #[test]
    fn test_replace_with_trigger() {
        let done = replace_token_and_trigger("Hi @fo there", 5, "foobar", &mention()).unwrap();
        assert_eq!(done.text, "Hi foobar there");
        assert_eq!(done.caret, 10);
    }

    #[test]
    fn test_replace_appends_space_at_end() {
        let done = replace_token("@fo", 3, "foobar", &mention()).unwrap();
        assert_eq!(done.text, "@foobar ");
        assert_eq!(done.caret, done.text.len());
    }

    #[test]
    fn test_replace_without_match_is_noop() {
        assert_eq!(replace_token("@foo bar", 6, "baz", &mention()), None);
        assert_eq!(replace_token_and_trigger("plain", 3, "baz", &mention()), None);
    }
}
