/// Layout helpers shared by the renderer and the mouse hit-testing

use ratatui::layout::Rect;

/// Rectangle of at most `width` x `height`, centered in `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = area.width.min(width);
    let height = area.height.min(height);

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Whether a terminal cell lies inside `rect`
pub fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Rows `text` needs when word-wrapped to `width` columns.
///
/// Errs on the high side: a word that does not fit on the current row starts
/// a new one, and words wider than a row are split.
pub fn wrapped_rows(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = width as usize;

    let mut rows = 0usize;
    for line in text.split('\n') {
        rows += 1;
        let mut used = 0usize;
        for word in line.split_inclusive(' ') {
            let bare = word.trim_end_matches(' ').chars().count();
            if used > 0 && used + bare > width {
                rows += 1;
                used = 0;
            }
            used += word.chars().count();
            while used > width {
                rows += 1;
                used -= width;
            }
        }
    }

    rows.min(u16::MAX as usize) as u16
}
