//! Text measurement and truncation for axis labels.

const ELLIPSIS: char = '…';

/// Approximate advance of one glyph in a sans-serif face, as a fraction of the font size.
fn glyph_em(ch: char) -> f32 {
    match ch {
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' | ' ' => 0.30,
        'f' | 't' | 'r' | 'I' | '(' | ')' | '[' | ']' | '-' => 0.38,
        'm' | 'w' | 'M' | 'W' | '%' | '@' | ELLIPSIS => 0.85,
        c if c.is_ascii_uppercase() => 0.68,
        c if c.is_ascii() => 0.56,
        // CJK and other wide scripts
        _ => 1.0,
    }
}

/// Estimated pixel width of `text`; the SVG path has no font metrics.
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    let em: f32 = text.chars().map(glyph_em).sum();
    (em * font_px as f32).ceil() as u32
}

/// Truncate to fit `max_px`, ending with a single ellipsis when shortened.
pub fn truncate_to_width(text: &str, font_px: u32, max_px: u32) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    // one pixel of slack absorbs float error in the final ceil
    let budget = max_px.saturating_sub(1) as f32 / font_px.max(1) as f32 - glyph_em(ELLIPSIS);
    let mut used = 0.0;
    let kept: String = text
        .chars()
        .take_while(|&ch| {
            used += glyph_em(ch);
            used <= budget
        })
        .collect();
    if kept.is_empty() {
        return String::new();
    }
    format!("{kept}{ELLIPSIS}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Jan", 12, 95), "Jan");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        let t = truncate_to_width("A very long category name", 12, 95);
        assert!(t.ends_with('…'));
        assert!(estimate_text_width_px(&t, 12) <= 95);
    }

    #[test]
    fn narrow_glyphs_measure_smaller() {
        assert!(estimate_text_width_px("iiii", 12) < estimate_text_width_px("MMMM", 12));
    }

    #[test]
    fn nothing_fits() {
        assert_eq!(truncate_to_width("abc", 12, 3), "");
    }
}
