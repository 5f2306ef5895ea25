//! Card presentation: compact text glyphs and SVG markup.
//!
//! Glyphs are fixed-shape short codes (Major Arcana as roman numerals,
//! Minor Arcana as rank + suit letter) with a trailing `r` marking a
//! reversed card. SVG comes in two shapes: an inner body fragment for
//! composed, animated renders, and a standalone document for embedding
//! a single card.

use crate::cards::{Arcana, Card, Rank};

/// Local coordinate space the card face is drawn in.
pub const FACE_WIDTH: u32 = 300;
pub const FACE_HEIGHT: u32 = 500;

/// Seconds of reveal delay added per deal-order step in animated renders.
const DEAL_DELAY_SECS: f32 = 0.4;

/// Compact text glyph for a card, e.g. `XVII`, `0`, `AW`, `10C`, `NSr`.
pub fn glyph(card: &Card, reversed: bool) -> String {
    let base = match (card.arcana, card.suit) {
        (Arcana::Major, _) => roman_numeral(card.number),
        (Arcana::Minor, Some(suit)) => {
            format!("{}{}", Rank::from_u8(card.number).short(), suit.letter())
        }
        // A minor card with no suit cannot come from the catalog.
        (Arcana::Minor, None) => format!("#{}", card.id),
    };
    if reversed {
        format!("{base}r")
    } else {
        base
    }
}

/// Roman numeral for Major Arcana numbers; The Fool keeps its "0".
fn roman_numeral(n: u8) -> String {
    if n == 0 {
        return "0".to_string();
    }
    const PAIRS: [(u8, &str); 5] = [(10, "X"), (9, "IX"), (5, "V"), (4, "IV"), (1, "I")];
    let mut rest = n;
    let mut out = String::new();
    for (value, digits) in PAIRS {
        while rest >= value {
            out.push_str(digits);
            rest -= value;
        }
    }
    out
}

/// Inner SVG fragment for one card face, drawn in the
/// [`FACE_WIDTH`]x[`FACE_HEIGHT`] space, wrapped in a fade-in that starts
/// after `deal_order` reveal delays. No `<svg>` wrapper; callers position
/// and rotate the fragment themselves.
pub fn card_svg_body(card: &Card, reversed: bool, deal_order: u8) -> String {
    let delay = deal_order as f32 * DEAL_DELAY_SECS;
    format!(
        "<g opacity=\"0\">{}<animate attributeName=\"opacity\" from=\"0\" to=\"1\" \
         dur=\"0.6s\" begin=\"{delay}s\" fill=\"freeze\"/></g>",
        card_face(card, reversed)
    )
}

/// Standalone SVG document for one card.
pub fn card_svg_document(card: &Card, reversed: bool) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {FACE_WIDTH} {FACE_HEIGHT}\">{}</svg>",
        card_face(card, reversed)
    )
}

fn card_face(card: &Card, reversed: bool) -> String {
    let emblem = glyph(card, false);
    let face = format!(
        "<rect x=\"4\" y=\"4\" width=\"{w}\" height=\"{h}\" rx=\"18\" \
         fill=\"#fdf6e3\" stroke=\"#4b3a6b\" stroke-width=\"6\"/>\
         <text x=\"{cx}\" y=\"{cy}\" text-anchor=\"middle\" \
         font-family=\"serif\" font-size=\"72\" fill=\"#4b3a6b\">{emblem}</text>\
         <text x=\"{cx}\" y=\"{ny}\" text-anchor=\"middle\" \
         font-family=\"serif\" font-size=\"26\" fill=\"#4b3a6b\">{name}</text>",
        w = FACE_WIDTH - 8,
        h = FACE_HEIGHT - 8,
        cx = FACE_WIDTH / 2,
        cy = FACE_HEIGHT / 2,
        ny = FACE_HEIGHT - 40,
        name = card.name,
    );
    if reversed {
        // Reversal is a half-turn about the face center.
        format!(
            "<g transform=\"rotate(180 {} {})\">{face}</g>",
            FACE_WIDTH / 2,
            FACE_HEIGHT / 2
        )
    } else {
        face
    }
}

#[cfg(test)]
mod tests {
    use crate::cards::{full_catalog, major_arcana};

    use super::*;

    #[test]
    fn roman_numerals_for_all_major_numbers() {
        assert_eq!(roman_numeral(0), "0");
        assert_eq!(roman_numeral(1), "I");
        assert_eq!(roman_numeral(4), "IV");
        assert_eq!(roman_numeral(9), "IX");
        assert_eq!(roman_numeral(14), "XIV");
        assert_eq!(roman_numeral(19), "XIX");
        assert_eq!(roman_numeral(21), "XXI");
    }

    #[test]
    fn glyphs_are_unique_across_the_catalog() {
        let glyphs: Vec<String> = full_catalog().iter().map(|c| glyph(c, false)).collect();
        let mut deduped = glyphs.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), glyphs.len());
    }

    #[test]
    fn reversed_glyph_carries_marker() {
        let fool = &major_arcana()[0];
        assert_eq!(glyph(fool, false), "0");
        assert_eq!(glyph(fool, true), "0r");
    }

    #[test]
    fn glyphs_fit_the_text_cell() {
        for card in full_catalog() {
            assert!(glyph(&card, true).len() <= 6, "{}", card.name);
        }
    }

    #[test]
    fn svg_document_is_wrapped_and_body_is_not() {
        let card = &full_catalog()[30];
        let doc = card_svg_document(card, false);
        assert!(doc.starts_with("<svg"));
        assert!(doc.ends_with("</svg>"));

        let body = card_svg_body(card, false, 2);
        assert!(!body.contains("<svg"));
        assert!(body.contains("begin=\"0.8s\""));
    }

    #[test]
    fn reversed_face_rotates_about_center() {
        let card = &full_catalog()[5];
        let upright = card_svg_document(card, false);
        let reversed = card_svg_document(card, true);
        assert!(!upright.contains("rotate(180"));
        assert!(reversed.contains("rotate(180 150 250)"));
    }
}
