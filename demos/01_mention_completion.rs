//! Mention Completion
//!
//! The minimal example: find the `@name` under the caret and splice in the
//! chosen suggestion.
//!
//! ```bash
//! cargo run --example 01_mention_completion
//! ```

use mosaic::caret::{byte_offset_from_utf16, utf16_offset_from_byte};
use mosaic::{query_at_caret, replace_token, Trigger};

fn main() {
    let mention = Trigger::mention();
    let users = ["alice", "alfred", "bob", "josé"];

    // The browser reports the caret in UTF-16 units.
    let text = "Grüße an @al und bis bald";
    let caret = byte_offset_from_utf16(text, 12);

    let Some(query) = query_at_caret(text, caret, &mention) else {
        println!("No mention under the caret");
        return;
    };
    println!("Typing \"{}\" at {}", query.text, query.span);

    let suggestions: Vec<_> = users
        .iter()
        .copied()
        .filter(|user| user.starts_with(query.text))
        .collect();
    println!("Suggestions: {suggestions:?}");

    // The reader picks the first suggestion.
    if let Some(done) = replace_token(text, caret, suggestions[0], &mention) {
        println!("Text:  {}", done.text);
        println!("Caret: {} (UTF-16)", utf16_offset_from_byte(&done.text, done.caret));
    }

    // Search boxes also complete operators like `from:`.
    let search = Trigger::search();
    let text = "cats from:bo";
    if let Some(done) = replace_token(text, text.len(), "bob", &search) {
        println!("Search: {}", done.text);
    }
}
