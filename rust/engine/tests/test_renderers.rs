use arcanum_engine::art;
use arcanum_engine::deck::Deck;
use arcanum_engine::reader::SpreadReader;
use arcanum_engine::render::{render_svg, render_text, TEXT_CELL_WIDTH};

fn reading(spread: &str, seed: u64) -> arcanum_engine::reader::SpreadReading {
    let mut reader = SpreadReader::with_deck(Deck::new_with_seed(seed));
    reader.perform_reading(spread, None).unwrap()
}

#[test]
fn three_card_text_grid_is_one_row_of_three_cells() {
    let reading = reading("three-card", 42);
    let grid = render_text(&reading);
    let rows: Vec<&str> = grid.lines().collect();
    assert_eq!(rows.len(), 1);
    // Three cells of fixed width joined by single spaces.
    assert_eq!(rows[0].len(), 3 * TEXT_CELL_WIDTH + 2);

    for cp in &reading.cards {
        let glyph = art::glyph(&cp.card, cp.is_reversed);
        assert!(grid.contains(&glyph), "grid missing glyph {glyph}");
    }
}

#[test]
fn text_grid_places_cards_at_their_layout_columns() {
    let reading = reading("three-card", 7);
    let row = render_text(&reading);
    for cp in &reading.cards {
        let slot = reading
            .spread
            .layout
            .iter()
            .find(|s| s.position == cp.position)
            .unwrap();
        let cell_start = slot.x as usize * (TEXT_CELL_WIDTH + 1);
        let cell = &row[cell_start..cell_start + TEXT_CELL_WIDTH];
        assert_eq!(
            cell.trim(),
            art::glyph(&cp.card, cp.is_reversed),
            "position {} rendered in the wrong cell",
            cp.position
        );
    }
}

#[test]
fn horseshoe_text_grid_spans_the_arch() {
    let grid = render_text(&reading("horseshoe", 5));
    assert_eq!(grid.lines().count(), 3, "horseshoe layout uses three rows");
    for line in grid.lines() {
        assert_eq!(line.len(), 7 * TEXT_CELL_WIDTH + 6);
    }
}

#[test]
fn static_svg_embeds_cards_as_data_uris() {
    let reading = reading("celtic-cross", 42);
    let svg = render_svg(&reading, false);
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(
        svg.matches("data:image/svg+xml;base64,").count(),
        10,
        "every card embeds exactly one image"
    );
    assert!(!svg.contains("<animate"), "static mode must not animate");
    // The crossing card carries its layout rotation.
    assert!(svg.contains("rotate(90"));
}

#[test]
fn animated_svg_composes_bodies_instead_of_images() {
    let reading = reading("three-card", 42);
    let svg = render_svg(&reading, true);
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert_eq!(svg.matches("<animate").count(), 3);
    assert!(
        !svg.contains("data:image"),
        "animated mode must not embed raster-style images"
    );
}

#[test]
fn svg_canvas_scales_with_mode() {
    let reading = reading("single", 3);
    let small = render_svg(&reading, false);
    let large = render_svg(&reading, true);
    // One card plus padding: 120x186 static, 320x520 animated.
    assert!(small.contains("width=\"120\" height=\"186\""));
    assert!(large.contains("width=\"320\" height=\"520\""));
}

#[test]
fn reversed_cards_render_their_reversed_glyph() {
    // Hunt a seed deterministically: some reading of the full celtic
    // cross will contain at least one reversal among ten cards.
    for seed in 0..20 {
        let reading = reading("celtic-cross", seed);
        if let Some(cp) = reading.cards.iter().find(|cp| cp.is_reversed) {
            let grid = render_text(&reading);
            assert!(grid.contains(&art::glyph(&cp.card, true)));
            return;
        }
    }
    panic!("no reversal in 20 seeded celtic-cross readings");
}
