//! Break-unit tokenization for inline text.
//!
//! Whitespace is already collapsed to single spaces by the DOM layer, so
//! splitting on ASCII whitespace boundaries yields one `Word` per
//! whitespace-delimited run. Within a run, `-` is a break point that stays
//! attached to the token before it (`well-known` can wrap after `well-`).
//! Trailing punctuation (`,.;:!?`) is never split off on its own since it
//! is never preceded by whitespace within a run — it naturally stays with
//! the prior run without special-casing.

#[derive(Debug, Clone, PartialEq)]
pub enum BreakUnit {
    /// A non-breakable run of characters; `start`/`end` are byte offsets
    /// into the owning text node's string.
    Word { start: usize, end: usize },
    /// One collapsed whitespace run; never two consecutive `Space` tokens.
    Space { start: usize, end: usize },
}

pub fn tokenize(text: &str) -> Vec<BreakUnit> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some(&(start, ch)) = chars.peek() {
        if ch.is_ascii_whitespace() {
            chars.next();
            let end = chars
                .peek()
                .map(|&(i, _)| i)
                .unwrap_or(text.len());
            tokens.push(BreakUnit::Space { start, end });
            continue;
        }

        // Accumulate a non-space run, yielding a separate Word token each
        // time we cross a '-' (the dash stays with the token before it).
        let mut word_start = start;
        loop {
            match chars.peek().copied() {
                Some((i, '-')) => {
                    chars.next();
                    let end = chars.peek().map(|&(j, _)| j).unwrap_or(text.len());
                    tokens.push(BreakUnit::Word {
                        start: word_start,
                        end,
                    });
                    word_start = end;
                    let _ = i;
                }
                Some((_, c)) if !c.is_ascii_whitespace() => {
                    chars.next();
                }
                _ => break,
            }
        }
        let end = chars.peek().map(|&(i, _)| i).unwrap_or(text.len());
        if word_start < end {
            tokens.push(BreakUnit::Word {
                start: word_start,
                end,
            });
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        let toks = tokenize("hello world");
        assert_eq!(
            toks,
            vec![
                BreakUnit::Word { start: 0, end: 5 },
                BreakUnit::Space { start: 5, end: 6 },
                BreakUnit::Word { start: 6, end: 11 },
            ]
        );
    }

    #[test]
    fn punctuation_stays_with_prior_word() {
        let toks = tokenize("hello, world.");
        assert_eq!(
            toks[0],
            BreakUnit::Word { start: 0, end: 6 } // "hello,"
        );
    }

    #[test]
    fn hyphen_is_a_break_point_but_stays_attached() {
        let toks = tokenize("well-known");
        assert_eq!(
            toks,
            vec![
                BreakUnit::Word { start: 0, end: 5 }, // "well-"
                BreakUnit::Word { start: 5, end: 10 }, // "known"
            ]
        );
    }

    #[test]
    fn apostrophe_does_not_split_word() {
        let toks = tokenize("don't stop");
        assert_eq!(toks[0], BreakUnit::Word { start: 0, end: 5 });
    }
}
