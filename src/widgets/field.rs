/// A profile field that is either plain text or an input control

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::utils::{ACCENT, CURSOR, INPUT_BG, INPUT_FG};

pub struct FieldView<'a> {
    value: &'a str,
    editing: bool,
    focused: bool,
    text_style: Style,
    display_alignment: Alignment,
}

impl<'a> FieldView<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            editing: false,
            focused: false,
            text_style: Style::default(),
            display_alignment: Alignment::Left,
        }
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    /// Only meaningful while editing: draws the cursor
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Style of the display text
    pub fn style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    /// Alignment of the display text. Inputs are always centered.
    pub fn display_alignment(mut self, alignment: Alignment) -> Self {
        self.display_alignment = alignment;
        self
    }
}

/// Longest suffix of `value` that fits in `width` columns
fn visible_tail(value: &str, width: usize) -> &str {
    value
        .char_indices()
        .map(|(i, _)| &value[i..])
        .find(|tail| Span::raw(*tail).width() <= width)
        .unwrap_or("")
}

impl Widget for FieldView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.editing {
            // Untrimmed: the committed value is shown exactly as typed
            Paragraph::new(self.value)
                .style(self.text_style)
                .alignment(self.display_alignment)
                .wrap(Wrap { trim: false })
                .render(area, buf);
            return;
        }

        let input_style = Style::default().fg(INPUT_FG).bg(INPUT_BG);
        buf.set_style(area, input_style);

        let cursor = if self.focused { CURSOR } else { "" };
        let budget = (area.width as usize).saturating_sub(Span::raw(cursor).width());

        // Single-line input that scrolls so the end of the value stays in view
        let mut spans = vec![Span::styled(visible_tail(self.value, budget), input_style)];
        if self.focused {
            spans.push(Span::styled(cursor, Style::default().fg(ACCENT).bg(INPUT_BG)));
        }

        Paragraph::new(Line::from(spans))
            .style(input_style)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
