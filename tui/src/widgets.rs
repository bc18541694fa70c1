//! Small span-building helpers shared by the screens.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{Glyphs, Palette};

/// Truncate a label to `width` columns, appending an ellipsis when it had
/// to be cut (display-width aware, so wide glyphs don't overflow cells).
#[must_use]
pub fn truncate_label(label: &str, width: usize) -> String {
    if label.width() <= width {
        return label.to_owned();
    }
    let mut out = String::new();
    let limit = width.saturating_sub(1);
    let mut used = 0;
    for ch in label.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Pad a label to exactly `width` columns (truncating when longer).
#[must_use]
pub fn fixed_width(label: &str, width: usize) -> String {
    let mut out = truncate_label(label, width);
    let pad = width.saturating_sub(out.width());
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

/// A 1-10 slider track. `marker` optionally overlays a reference value
/// (the current score, on the target screen) inside the track.
#[must_use]
pub fn slider_spans(
    value: u8,
    max: u8,
    marker: Option<u8>,
    palette: &Palette,
    glyphs: &Glyphs,
    fill: Style,
) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(usize::from(max));
    for cell in 1..=max {
        let glyph = if marker == Some(cell) && cell > value {
            Span::styled(glyphs.slider_marker, Style::default().fg(palette.text_muted))
        } else if cell <= value {
            Span::styled(glyphs.slider_filled, fill)
        } else {
            Span::styled(glyphs.slider_empty, Style::default().fg(palette.bg_border))
        };
        spans.push(glyph);
    }
    spans
}

/// A 1-5 importance star row.
#[must_use]
pub fn star_spans(importance: u8, palette: &Palette, glyphs: &Glyphs) -> Vec<Span<'static>> {
    (1..=5)
        .map(|star| {
            if star <= importance {
                Span::styled(glyphs.star_filled, Style::default().fg(palette.warning))
            } else {
                Span::styled(glyphs.star_empty, Style::default().fg(palette.text_muted))
            }
        })
        .collect()
}

/// Center a `width` x `height` box inside `area`, clamped to fit.
#[must_use]
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
