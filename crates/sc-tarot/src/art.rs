//! ASCII-art rendering of cards and readings.

use crate::reading::{DrawnCard, Reading};

/// Outer width of a card, borders included.
pub const CARD_WIDTH: usize = 40;

/// Width of banners and separators around a reading.
pub const RULE_WIDTH: usize = 50;

/// Pad `text` with spaces on both sides to exactly `width` columns.
///
/// Extra padding goes to the right. Text wider than `width` is returned as is.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let left = width.saturating_sub(len) / 2;
    let right = width.saturating_sub(len + left);
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Draw a single card as a bordered box.
pub fn render_card(drawn: &DrawnCard) -> String {
    let inner = CARD_WIDTH - 2;
    let top = format!("╔{}╗", "═".repeat(inner));
    let bottom = format!("╚{}╝", "═".repeat(inner));
    let empty = format!("║{}║", " ".repeat(inner));
    let title = format!("║{}║", center(&drawn.title(), inner));
    let symbol = format!("║{}║", center(drawn.orientation.glyph(), inner));

    [top, empty.clone(), title, empty.clone(), symbol, empty, bottom].join("\n")
}

/// Format a full reading: spread heading, banner, and each card with its meaning.
pub fn render_reading(reading: &Reading) -> String {
    let mut out = String::new();
    let rule = "=".repeat(RULE_WIDTH);

    if let Some(heading) = reading.spread.heading() {
        out.push_str(&format!("\n{heading}\n\n"));
    }

    out.push_str(&format!("\n{rule}\n"));
    out.push_str(&center("✨ YOUR TAROT READING ✨", RULE_WIDTH));
    out.push_str(&format!("\n{rule}\n\n"));

    let total = reading.cards.len();
    for (i, drawn) in reading.cards.iter().enumerate() {
        let number = i + 1;
        if total > 1 {
            match reading.spread.position(i) {
                Some(position) => out.push_str(&format!("\n--- Card {number}: {position} ---\n\n")),
                None => out.push_str(&format!("\n--- Card {number} ---\n\n")),
            }
        }

        out.push_str(&render_card(drawn));
        out.push_str(&format!("\n\nMeaning: {}\n\n", drawn.meaning()));

        if number < total {
            out.push_str(&"-".repeat(RULE_WIDTH));
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{MAJOR_ARCANA, Orientation, find_card};
    use crate::reading::Spread;

    fn drawn(name: &str, orientation: Orientation) -> DrawnCard {
        DrawnCard {
            card: find_card(name).unwrap(),
            orientation,
        }
    }

    #[test]
    fn every_line_is_card_width() {
        for card in &MAJOR_ARCANA {
            for orientation in [Orientation::Upright, Orientation::Reversed] {
                let art = render_card(&DrawnCard { card, orientation });
                for line in art.lines() {
                    assert_eq!(line.chars().count(), CARD_WIDTH, "{line:?}");
                }
                assert_eq!(art.lines().count(), 7);
            }
        }
    }

    #[test]
    fn upright_card_face() {
        let art = render_card(&drawn("The Sun", Orientation::Upright));
        assert!(art.contains("The Sun"));
        assert!(!art.contains("(Reversed)"));
        assert!(art.contains('⌃'));
        assert!(art.starts_with('╔'));
        assert!(art.ends_with('╝'));
    }

    #[test]
    fn reversed_card_face() {
        let art = render_card(&drawn("The High Priestess", Orientation::Reversed));
        assert!(art.contains("The High Priestess (Reversed)"));
        assert!(art.contains('⌄'));
        assert!(!art.contains('⌃'));
    }

    #[test]
    fn title_is_centered() {
        let art = render_card(&drawn("Death", Orientation::Upright));
        let title_line = art.lines().nth(2).unwrap();
        assert_eq!(title_line, format!("║{}Death{}║", " ".repeat(16), " ".repeat(17)));
    }

    #[test]
    fn single_reading_has_no_card_headers() {
        let reading = Reading {
            spread: Spread::Single,
            cards: vec![drawn("The Star", Orientation::Upright)],
        };
        let out = render_reading(&reading);
        assert!(!out.contains("--- Card"));
        assert!(out.contains("YOUR TAROT READING"));
        assert!(out.contains("Meaning: Hope, faith, purpose, renewal, spirituality"));
    }

    #[test]
    fn three_card_reading_labels_positions() {
        let reading = Reading {
            spread: Spread::ThreeCard,
            cards: vec![
                drawn("The Fool", Orientation::Upright),
                drawn("The Moon", Orientation::Reversed),
                drawn("The World", Orientation::Upright),
            ],
        };
        let out = render_reading(&reading);
        assert!(out.contains("Past - Present - Future Spread"));
        assert!(out.contains("--- Card 1: Past ---"));
        assert!(out.contains("--- Card 2: Present ---"));
        assert!(out.contains("--- Card 3: Future ---"));
        assert_eq!(out.matches('╔').count(), 3);
        assert_eq!(out.matches("Meaning:").count(), 3);
        // separators only between cards
        assert_eq!(out.matches(&"-".repeat(RULE_WIDTH)).count(), 2);
    }

    #[test]
    fn center_pads_right_on_odd_width() {
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("toolong", 3), "toolong");
    }
}
