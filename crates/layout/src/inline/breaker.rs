//! Binary search for the longest prefix of a single word that fits a
//! given width, used when a word alone overflows the available width.

use css::computed::ComputedStyle;

use crate::text::TextMeasurer;

pub fn break_word_prefix_end(
    measurer: &dyn TextMeasurer,
    style: &ComputedStyle,
    text: &str,
    max_width: f32,
) -> usize {
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .skip(1)
        .chain(std::iter::once(text.len()))
        .collect();

    if boundaries.is_empty() {
        return text.len();
    }

    let mut lo = 0usize;
    let mut hi = boundaries.len() - 1;
    let width_at = |end: usize| -> f32 {
        let w = measurer.measure(&text[..end], style);
        if w.is_finite() {
            w
        } else {
            f32::INFINITY
        }
    };

    if width_at(boundaries[0]) > max_width {
        return boundaries[0];
    }

    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if width_at(boundaries[mid]) <= max_width {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }

    boundaries[lo]
}
