//! Property tests for layout and serialization.

use proptest::prelude::*;
use rust_pdf::api::SimpleDocument;
use rust_pdf::layout::TextLayout;

/// Printable ASCII plus line breaks.
fn ascii_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[ -~\n]{0,400}").unwrap()
}

fn find_offsets(bytes: &[u8]) -> Vec<usize> {
    let at = bytes
        .windows(10)
        .rposition(|w| w == b"startxref\n")
        .unwrap();
    let tail = std::str::from_utf8(&bytes[at + 10..]).unwrap();
    let xref_start: usize = tail.lines().next().unwrap().parse().unwrap();
    let section = std::str::from_utf8(&bytes[xref_start..]).unwrap();
    section
        .lines()
        .skip(3)
        .take_while(|line| line.ends_with(" n "))
        .map(|line| line[..10].parse().unwrap())
        .collect()
}

proptest! {
    #[test]
    fn output_is_deterministic(text in ascii_text(), size in 4.0f64..72.0) {
        let a = SimpleDocument::build(&text, size).unwrap();
        let b = SimpleDocument::build(&text, size).unwrap();
        prop_assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn xref_offsets_are_exact(text in ascii_text(), size in 4.0f64..72.0) {
        let doc = SimpleDocument::build(&text, size).unwrap();
        let bytes = doc.as_bytes();
        let offsets = find_offsets(bytes);
        prop_assert_eq!(offsets.len(), 5);
        for (i, offset) in offsets.into_iter().enumerate() {
            let header = format!("{} 0 obj", i + 1);
            prop_assert!(bytes[offset..].starts_with(header.as_bytes()));
        }
    }

    #[test]
    fn short_single_line_is_kept_verbatim(text in "[a-z ]{1,40}", size in 4.0f64..12.0) {
        let layout = TextLayout::default();
        let config = layout.config();
        prop_assume!(config.font.text_width(&text, size) <= config.usable_width());

        let result = layout.layout(&text, size).unwrap();
        prop_assert_eq!(result.lines.len(), 1);
        prop_assert_eq!(&result.lines[0].text, &text);
    }

    #[test]
    fn placed_lines_stay_inside_margins(text in ascii_text(), size in 4.0f64..72.0) {
        let layout = TextLayout::default();
        let result = layout.layout(&text, size).unwrap();
        let config = layout.config();
        let max_width = config.usable_width();

        prop_assert!(result.lines.len() <= layout.capacity(size));
        for line in &result.lines {
            prop_assert!(line.y >= config.margin_bottom);
            let width = config.font.text_width(&line.text, size);
            let single_word = !line.text.trim().contains(' ');
            prop_assert!(width <= max_width || single_word);
        }
        for pair in result.lines.windows(2) {
            prop_assert!(pair[1].y < pair[0].y);
        }
    }

    #[test]
    fn out_of_range_text_is_rejected(prefix in "[a-z]{0,20}", c in proptest::char::range('\u{0400}', '\u{04FF}')) {
        let text = format!("{}{}", prefix, c);
        let err = SimpleDocument::build(&text, 12.0).unwrap_err();
        let is_encoding = matches!(err, rust_pdf::Error::Encoding { .. });
        prop_assert!(is_encoding);
    }
}
