//! Gallery Layouts
//!
//! Pack a post's images into justified rows, fold the gallery, and compare
//! with the editing view.
//!
//! ```bash
//! cargo run --example gallery_layout
//! ```

use std::error::Error;

use mosaic::{
    fold_rows, pack_gallery, EditingLayout, GalleryConfig, GalleryLayout, JustifiedLayout,
    MediaSize,
};

fn main() -> Result<(), Box<dyn Error>> {
    let media = [
        MediaSize::new(1200, 800),
        MediaSize::new(800, 1200),
        MediaSize::new(1920, 1080),
        MediaSize::new(1000, 1000),
        MediaSize::new(3000, 1000),
        MediaSize::new(900, 1600),
        MediaSize::new(1600, 1200),
    ];

    // Read-only view: justified rows.
    let arrangement = JustifiedLayout::default().arrange(&media, 700)?;
    let rows = arrangement.rows().unwrap_or_default();
    println!("=== Justified, 700px ===");
    for (i, row) in rows.iter().enumerate() {
        let widths: Vec<_> = row.items.iter().map(|tile| tile.width).collect();
        println!(
            "row {i}: height {:3}  widths {widths:?}{}",
            row.height(),
            if row.stretched { "" } else { "  (native)" }
        );
    }

    let fold = fold_rows(rows, false, true);
    println!(
        "folded: {} row(s) shown, {} item(s) behind the toggle",
        fold.visible.len(),
        fold.hidden_items
    );

    // The packer works on plain ratios too, with custom thresholds.
    println!("\n=== Raw ratios, tighter target ===");
    let config = GalleryConfig::new(150.0 * 150.0)?.with_gap(4);
    for width in [320, 700, 1200] {
        let rows = pack_gallery(&[1.5, 0.67, 1.78, 1.0, 3.0, 0.56, 1.33], width, &config)?;
        let counts: Vec<_> = rows.iter().map(|row| row.len()).collect();
        println!("{width:4}px: items per row {counts:?}");
    }

    // Editing view: every thumbnail fitted on its own.
    println!("\n=== Editing ===");
    for tile in EditingLayout::default().arrange(&media, 700)?.tiles() {
        println!("{}x{}", tile.width, tile.height);
    }

    Ok(())
}
