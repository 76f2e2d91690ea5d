//! NEIS byte estimation
//!
//! The school-records system charges text fields per UTF-16 code unit:
//! line feed costs 2 bytes, any unit above 127 costs 3, everything else 1.

const LINE_FEED: u16 = 10;
const ASCII_MAX: u16 = 127;

/// Estimate the NEIS byte cost of `text`.
///
/// Absent and empty input both cost 0. Counting walks UTF-16 code units, so a
/// character outside the BMP (an emoji, for example) is charged as two
/// independent surrogate units of 3 bytes each.
pub fn estimate_bytes(text: Option<&str>) -> usize {
    match text {
        Some(text) if !text.is_empty() => text.encode_utf16().map(unit_cost).sum(),
        _ => 0,
    }
}

/// Same as [`estimate_bytes`] for a string that is always present.
pub fn estimate_str_bytes(text: &str) -> usize {
    estimate_bytes(Some(text))
}

/// Cost of a single character, summed over its UTF-16 units.
pub fn char_cost(ch: char) -> usize {
    let mut buf = [0u16; 2];
    ch.encode_utf16(&mut buf).iter().copied().map(unit_cost).sum()
}

#[inline]
fn unit_cost(unit: u16) -> usize {
    if unit == LINE_FEED {
        2
    } else if unit > ASCII_MAX {
        3
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_are_zero() {
        assert_eq!(estimate_bytes(None), 0);
        assert_eq!(estimate_bytes(Some("")), 0);
    }

    #[test]
    fn printable_ascii_costs_one_per_char() {
        let s = "Hello World 123 !?";
        assert_eq!(estimate_bytes(Some(s)), s.len());

        let all: String = (32u8..=126).map(char::from).collect();
        assert_eq!(estimate_str_bytes(&all), all.len());
    }

    #[test]
    fn newlines_cost_two() {
        assert_eq!(estimate_str_bytes("\n"), 2);
        assert_eq!(estimate_str_bytes("\n\n\n\n\n"), 10);
    }

    #[test]
    fn carriage_return_and_tab_cost_one() {
        assert_eq!(estimate_str_bytes("\r"), 1);
        assert_eq!(estimate_str_bytes("\t"), 1);
        // CRLF is CR (1) + LF (2)
        assert_eq!(estimate_str_bytes("\r\n"), 3);
    }

    #[test]
    fn hangul_costs_three() {
        let s = "가나다라마바사";
        assert_eq!(estimate_str_bytes(s), 3 * s.chars().count());
    }

    #[test]
    fn mixed_text() {
        assert_eq!(estimate_bytes(Some("AB한글\n")), 10);
    }

    #[test]
    fn non_bmp_counts_each_surrogate() {
        // U+1F600 is a surrogate pair in UTF-16
        assert_eq!(estimate_str_bytes("😀"), 6);
        assert_eq!(estimate_str_bytes("a😀b"), 8);
        assert_eq!(char_cost('😀'), 6);
    }

    #[test]
    fn latin1_above_127_costs_three() {
        // é is U+00E9: a single unit above 127
        assert_eq!(estimate_str_bytes("é"), 3);
        assert_eq!(estimate_str_bytes("\u{80}"), 3);
        assert_eq!(estimate_str_bytes("\u{7f}"), 1);
    }

    #[test]
    fn zero_like_strings_are_not_absent() {
        assert_eq!(estimate_str_bytes("0"), 1);
        assert_eq!(estimate_str_bytes("   "), 3);
    }

    #[test]
    fn no_normalization_is_applied() {
        // Precomposed vs. decomposed Hangul syllable differ in unit count
        let precomposed = "\u{D55C}";
        let decomposed = "\u{1112}\u{1161}\u{11AB}";
        assert_eq!(estimate_str_bytes(precomposed), 3);
        assert_eq!(estimate_str_bytes(decomposed), 9);
    }

    #[test]
    fn repeated_calls_agree() {
        let s = "결석 사유:\n감기 몸살 (fever 38.5)";
        let first = estimate_str_bytes(s);
        for _ in 0..5 {
            assert_eq!(estimate_str_bytes(s), first);
        }
    }

    #[test]
    fn appending_never_decreases() {
        let samples = ['a', ' ', '\n', '\r', '한', 'é', '😀', '\0', '~'];
        let mut text = String::new();
        let mut previous = 0;
        for ch in samples.iter().cycle().take(40) {
            text.push(*ch);
            let current = estimate_str_bytes(&text);
            assert!(current > previous, "appending {ch:?} must add at least 1");
            assert_eq!(current - previous, char_cost(*ch));
            previous = current;
        }
    }
}
