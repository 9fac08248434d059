//! End-to-end checks of the documented behaviour.
//!
//! These tests pin the worked examples: caret positions around a mention,
//! completion splicing, and the narrow-container gallery.

use mosaic::{
    find_token_at_caret, pack_gallery, query_at_caret, replace_token, replace_token_and_trigger,
    Arrangement, GalleryConfig, GalleryLayout, JustifiedLayout, MediaSize, Row, Span, Tile,
    Trigger,
};

// =============================================================================
// Matcher
// =============================================================================

#[test]
fn mention_boundaries() {
    let mention = Trigger::mention();
    let text = "@foo bar";

    assert_eq!(find_token_at_caret(text, 0, &mention), None);
    for caret in 1..=4 {
        assert_eq!(
            find_token_at_caret(text, caret, &mention),
            Some(Span::new(1, 4)),
            "caret {caret}"
        );
    }
    assert_eq!(find_token_at_caret(text, 5, &mention), None);
}

#[test]
fn replacement_without_match_changes_nothing() {
    let mention = Trigger::mention();
    for (text, caret) in [("@foo bar", 6), ("plain text", 3), ("a@b", 3), ("", 0)] {
        assert_eq!(find_token_at_caret(text, caret, &mention), None);
        assert_eq!(replace_token(text, caret, "bar", &mention), None);
    }
}

#[test]
fn replacement_consuming_the_trigger() {
    let done =
        replace_token_and_trigger("Hi @fo there", 5, "foobar", &Trigger::new("@").unwrap())
            .unwrap();
    assert_eq!(done.text, "Hi foobar there");
    assert_eq!(done.caret, "Hi ".len() + "foobar".len() + 1);
}

#[test]
fn replacement_keeping_the_trigger() {
    let done = replace_token("Hi @fo there", 5, "foobar", &Trigger::mention()).unwrap();
    assert_eq!(done.text, "Hi @foobar there");
    assert_eq!(&done.text[..done.caret], "Hi @foobar ");

    let bare = Trigger::new("@").unwrap();
    let done = replace_token("Hi @fo there", 5, "foobar", &bare).unwrap();
    assert_eq!(done.text, "Hi @foobar there");
    assert_eq!(done.caret, 11);
}

#[test]
fn caret_stays_on_char_boundary_before_multibyte_text() {
    for text in ["@fo日", "@fo日本", "@foé", "@fo😀!"] {
        let done = replace_token(text, 3, "foobar", &Trigger::mention()).unwrap();
        assert!(done.text.starts_with("@foobar"), "{text}");
        assert!(done.text.is_char_boundary(done.caret), "{text}");
        // The caret sits right after the character following the completion.
        let next = done.text[8..].chars().next().unwrap();
        assert_eq!(done.caret, 8 + next.len_utf8(), "{text}");
    }
}

#[test]
fn search_box_operators() {
    let search = Trigger::search();
    let text = "cats liked-by:jo";
    let query = query_at_caret(text, text.len(), &search).unwrap();
    assert_eq!(query.text, "jo");

    let done = replace_token(text, text.len(), "joanna", &search).unwrap();
    assert_eq!(done.text, "cats liked-by:joanna ");
    assert_eq!(done.caret, done.text.len());
}

#[test]
fn browser_caret_offsets() {
    use mosaic::caret::{byte_offset_from_utf16, utf16_offset_from_byte};

    // The browser counts "ü" as one unit; in UTF-8 it is two bytes.
    let text = "Grüße @ma";
    let caret = byte_offset_from_utf16(text, 9);
    assert_eq!(caret, text.len());

    let done = replace_token(text, caret, "max", &Trigger::mention()).unwrap();
    assert_eq!(utf16_offset_from_byte(&done.text, done.caret), 11);
}

// =============================================================================
// Gallery
// =============================================================================

#[test]
fn narrow_container_single_item_rows() {
    let config = GalleryConfig::new(40_000.0).unwrap().with_gap(8);
    let rows = pack_gallery(&[1.5, 0.8], 50, &config).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].len(), 1);
    assert!(rows[0].stretched);
    assert_eq!(rows[0].items[0].width, 50);
    assert_eq!(rows[1].len(), 1);
}

#[test]
fn every_item_placed_once() {
    let ratios: Vec<f64> = (0..50).map(|i| 0.4 + f64::from(i % 9) * 0.25).collect();
    for width in [0, 100, 320, 600, 1024, 1920] {
        let rows = pack_gallery(&ratios, width, &GalleryConfig::default()).unwrap();
        let placed: usize = rows.iter().map(Row::len).sum();
        assert_eq!(placed, ratios.len(), "width {width}");
    }
}

#[test]
fn too_few_items_for_a_wide_row_keep_native_size() {
    // Five squares can not fill 1920px near the target size, so the row is
    // sized natively instead of stretched.
    let rows = pack_gallery(&[1.0; 5], 1920, &GalleryConfig::default()).unwrap();
    let last = rows.last().unwrap();
    assert!(!last.stretched);
    assert_eq!(last.height(), 210);
    assert!(last.width(8) < 1920);
}

#[test]
fn attachments_to_rows() {
    let media: Vec<MediaSize> = [(1200, 800), (800, 1200), (1920, 1080), (1000, 1000)]
        .into_iter()
        .map(|(w, h)| MediaSize::new(w, h).with_preview(w / 2, h / 2))
        .collect();

    let arrangement = JustifiedLayout::default().arrange(&media, 700).unwrap();
    let Arrangement::Rows(rows) = &arrangement else {
        panic!("justified layout must produce rows");
    };
    assert_eq!(arrangement.len(), 4);
    assert!(rows.iter().all(|row| row.items.iter().all(|t| t.height == row.height())));
    assert!(arrangement.tiles().all(|t| *t != Tile::default()));
}
