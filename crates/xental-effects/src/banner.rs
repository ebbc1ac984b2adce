//! Block-letter wordmark for the splash and hero.

/// Glyph height in rows.
pub const BANNER_HEIGHT: usize = 5;

/// Letter X
const LETTER_X: [&str; BANNER_HEIGHT] = [
    "██   ██",
    " ██ ██ ",
    "  ███  ",
    " ██ ██ ",
    "██   ██",
];

/// Letter E
const LETTER_E: [&str; BANNER_HEIGHT] = [
    "██████",
    "██    ",
    "█████ ",
    "██    ",
    "██████",
];

/// Letter N
const LETTER_N: [&str; BANNER_HEIGHT] = [
    "██   ██",
    "███  ██",
    "██ █ ██",
    "██  ███",
    "██   ██",
];

/// Letter T
const LETTER_T: [&str; BANNER_HEIGHT] = [
    "██████",
    "  ██  ",
    "  ██  ",
    "  ██  ",
    "  ██  ",
];

/// Letter A
const LETTER_A: [&str; BANNER_HEIGHT] = [
    " ████ ",
    "██  ██",
    "██████",
    "██  ██",
    "██  ██",
];

/// Letter L
const LETTER_L: [&str; BANNER_HEIGHT] = [
    "██    ",
    "██    ",
    "██    ",
    "██    ",
    "██████",
];

const SPACE: [&str; BANNER_HEIGHT] = ["   ", "   ", "   ", "   ", "   "];

fn glyph(ch: char) -> Option<&'static [&'static str; BANNER_HEIGHT]> {
    match ch.to_ascii_uppercase() {
        'X' => Some(&LETTER_X),
        'E' => Some(&LETTER_E),
        'N' => Some(&LETTER_N),
        'T' => Some(&LETTER_T),
        'A' => Some(&LETTER_A),
        'L' => Some(&LETTER_L),
        ' ' => Some(&SPACE),
        _ => None,
    }
}

/// Build the block-letter rendering of `text`.
///
/// Characters without a glyph are skipped. Returns [`BANNER_HEIGHT`] lines of
/// equal width.
pub fn build_banner(text: &str) -> Vec<String> {
    let glyphs: Vec<_> = text.chars().filter_map(glyph).collect();
    (0..BANNER_HEIGHT)
        .map(|row| {
            glyphs
                .iter()
                .map(|g| g[row])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_rows_align() {
        let lines = build_banner("Xental");
        assert_eq!(lines.len(), BANNER_HEIGHT);
        let width = lines[0].chars().count();
        assert!(lines.iter().all(|l| l.chars().count() == width));
        assert_eq!(width, 7 + 6 + 7 + 6 + 6 + 6 + 5);
    }

    #[test]
    fn test_unknown_chars_skipped() {
        assert_eq!(build_banner("x?"), build_banner("X"));
        assert!(build_banner("").iter().all(String::is_empty));
    }
}
