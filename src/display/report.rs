//! Text helpers shared by the terminal renderers

const FILLED: char = '█';
const EMPTY: char = '░';

/// One-decimal percentage, matching how the savings rate is shown
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Horizontal bar of `width` cells filled in proportion to `value / max_value`
///
/// Out-of-range ratios are clamped, so an over-budget category draws a full bar.
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    let ratio = if max_value > 0.0 && value > 0.0 {
        (value / max_value).min(1.0)
    } else {
        0.0
    };
    let filled = (ratio * width as f64).round() as usize;

    std::iter::repeat(FILLED)
        .take(filled)
        .chain(std::iter::repeat(EMPTY).take(width - filled))
        .collect()
}

/// Shorten a label to `max_len` characters, ending in `...` when cut
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }

    let keep = max_len.saturating_sub(3);
    let mut short: String = s.chars().take(keep).collect();
    short.extend("...".chars().take(max_len - keep));
    short
}
