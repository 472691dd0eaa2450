//! Small byte-offset helpers shared by caret movement and serialization.

pub fn next_char_boundary(s: &str, i: usize) -> usize {
    s[i..].chars().next().map(|c| i + c.len_utf8()).unwrap_or(s.len())
}

pub fn prev_char_boundary(s: &str, i: usize) -> usize {
    s[..i].char_indices().last().map(|(b, _)| b).unwrap_or(0)
}

/// Byte offset of the first non-space character, or the string length if
/// it is all spaces.
pub fn skip_leading_space(s: &str) -> usize {
    s.char_indices()
        .find(|&(_, c)| c != ' ' && c != '\t')
        .map(|(b, _)| b)
        .unwrap_or(s.len())
}

/// Byte length of `s` with trailing spaces dropped.
pub fn trim_trailing_space_len(s: &str) -> usize {
    s.trim_end_matches([' ', '\t']).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_step_over_multibyte_chars() {
        let s = "a\u{00e9}b";
        let after_a = next_char_boundary(s, 0);
        assert_eq!(after_a, 1);
        let after_e = next_char_boundary(s, after_a);
        assert_eq!(&s[after_a..after_e], "\u{00e9}");
        assert_eq!(prev_char_boundary(s, after_e), after_a);
    }

    #[test]
    fn trims_only_trailing_space() {
        assert_eq!(trim_trailing_space_len("hi  "), 2);
        assert_eq!(skip_leading_space("  hi"), 2);
    }
}
