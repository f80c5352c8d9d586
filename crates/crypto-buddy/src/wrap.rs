//! Word wrapping for terminal display.
//!
//! Unlike a classic paragraph fill, existing line breaks survive so
//! multi-line replies keep their shape.

/// Wrap every line of `text` to at most `width` characters.
///
/// Whitespace runs collapse to a single space. Words longer than `width`
/// are split across lines. A `width` of zero is treated as one.
pub fn fill(text: &str, width: usize) -> String {
    let width = width.max(1);

    text.lines()
        .map(|line| wrap_line(line, width).join("\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in line.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        // Oversized words fill whole lines first
        while word.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        if word.is_empty() {
            continue;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(fill("Hello there", 80), "Hello there");
    }

    #[test]
    fn test_wraps_on_word_boundary() {
        assert_eq!(fill("aaa bbb ccc", 7), "aaa bbb\nccc");
    }

    #[test]
    fn test_no_line_exceeds_width() {
        let text = "I didn't quite catch that. Try asking: 'Which crypto is trending up?', \
                    'What's the most sustainable coin?', or 'Which should I buy for long-term growth?'";
        let wrapped = fill(text, 30);
        assert!(wrapped.lines().count() > 1);
        for line in wrapped.lines() {
            assert!(line.chars().count() <= 30, "{line:?}");
        }
        assert_eq!(
            wrapped.split_whitespace().collect::<Vec<_>>(),
            text.split_whitespace().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_keeps_line_breaks() {
        assert_eq!(fill("first line\nsecond line", 80), "first line\nsecond line");
    }

    #[test]
    fn test_splits_long_words() {
        assert_eq!(fill("ab abcdefgh", 4), "ab\nabcd\nefgh");
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        assert_eq!(fill("energy use — notes", 12), "energy use —\nnotes");
    }
}
