/// Company profile screen

use std::cell::Cell;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget, Wrap},
    Frame,
};

use crate::core::{service_names, Profile, ProfileField, ServiceSource};
use crate::utils::{
    centered_rect, rect_contains, wrapped_rows, ACCENT, EDIT_LABEL, HIGHLIGHT, MUTED, REMINDERS,
    REMINDERS_LINK, REMINDERS_TITLE, SAVE_LABEL,
};
use crate::widgets::FieldView;

/// Clickable regions recorded during the last render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    EditAffordance,
    Save,
    Field(ProfileField),
}

/// One list item per service, in collection order
pub fn service_items(services: &dyn ServiceSource) -> Vec<ListItem<'_>> {
    service_names(services)
        .into_iter()
        .map(|name| ListItem::new(Line::from(vec![Span::raw("• "), Span::raw(name)])))
        .collect()
}

/// Section positions on the scrollable body, in body coordinates
struct BodyLayout {
    header: Rect,
    reminders: Rect,
    about: Rect,
    services: Rect,
    hours: Rect,
    location: Rect,
    height: u16,
}

impl BodyLayout {
    fn section(&self, field: ProfileField) -> Rect {
        match field {
            ProfileField::Name => self.header,
            ProfileField::About => self.about,
            ProfileField::Hours => self.hours,
            ProfileField::Address => self.location,
        }
    }
}

pub struct ProfileScreen {
    title: String,
    affordance: Cell<Option<(Rect, HitTarget)>>,
    field_areas: Cell<[Option<Rect>; 4]>,
    // Body scroll position in rows; clamped on every render
    scroll: Cell<u16>,
    max_scroll: Cell<u16>,
    page_height: Cell<u16>,
}

impl Default for ProfileScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self {
            title: "Company Profile".to_string(),
            affordance: Cell::new(None),
            field_areas: Cell::new([None; 4]),
            scroll: Cell::new(0),
            max_scroll: Cell::new(0),
            page_height: Cell::new(0),
        }
    }

    /// Map a mouse position to whatever was drawn there last frame
    pub fn hit_test(&self, column: u16, row: u16) -> Option<HitTarget> {
        if let Some((area, target)) = self.affordance.get() {
            if rect_contains(area, column, row) {
                return Some(target);
            }
        }

        ProfileField::ALL
            .iter()
            .zip(self.field_areas.get())
            .find_map(|(field, area)| match area {
                Some(area) if rect_contains(area, column, row) => Some(HitTarget::Field(*field)),
                _ => None,
            })
    }

    /// On-screen input area of a field; set only while editing and scrolled into view
    pub fn field_area(&self, field: ProfileField) -> Option<Rect> {
        let index = ProfileField::ALL.iter().position(|f| *f == field)?;
        self.field_areas.get()[index]
    }

    pub fn affordance_area(&self) -> Option<Rect> {
        self.affordance.get().map(|(area, _)| area)
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll.get()
    }

    /// Largest offset the last rendered frame allowed; 0 when everything fits
    pub fn max_scroll(&self) -> u16 {
        self.max_scroll.get()
    }

    /// Visible body rows in the last rendered frame
    pub fn page_height(&self) -> u16 {
        self.page_height.get()
    }

    pub fn scroll_by(&self, delta: i32) {
        let next = (self.scroll.get() as i32 + delta).clamp(0, self.max_scroll.get() as i32);
        self.scroll.set(next as u16);
    }

    pub fn scroll_to_top(&self) {
        self.scroll.set(0);
    }

    pub fn scroll_to_bottom(&self) {
        self.scroll.set(self.max_scroll.get());
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        profile: &Profile,
        services: &dyn ServiceSource,
        focused: ProfileField,
        status_message: Option<&str>,
        show_help: bool,
    ) {
        self.field_areas.set([None; 4]);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Logo + edit affordance
                Constraint::Min(0),    // Scrollable profile body
                Constraint::Length(3), // Footer
            ])
            .split(frame.size());

        self.render_top_bar(frame, chunks[0], profile.is_editing());
        self.render_body(frame, chunks[1], profile, services, focused);

        // Footer with status message or key hints
        let footer_text = if let Some(status) = status_message {
            status.to_string()
        } else if profile.is_editing() {
            "Editing - type to edit | [Tab/↑↓] Next field | [Enter]/[Ctrl+S] Save".to_string()
        } else if self.max_scroll() > 0 {
            "[e]dit | [↑↓/PgUp/PgDn] Scroll | [r]eload | [?] Help | [q]uit".to_string()
        } else {
            "[e]dit | [r]eload | [?] Help | [q]uit".to_string()
        };

        let footer = Paragraph::new(footer_text)
            .alignment(Alignment::Center)
            .style(if status_message.is_some() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            })
            .block(Block::default().borders(Borders::ALL));

        frame.render_widget(footer, chunks[2]);

        if show_help {
            self.render_help(frame, profile.is_editing());
        }
    }

    fn render_top_bar(&self, frame: &mut Frame, area: Rect, editing: bool) {
        let block = Block::default().borders(Borders::ALL);
        let content = block.inner(area);
        frame.render_widget(block, area);

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(10)])
            .split(content);

        let logo = Paragraph::new(Line::from(vec![
            Span::styled("🐾 ", Style::default().fg(HIGHLIGHT)),
            Span::styled(&self.title, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        ]));
        frame.render_widget(logo, cols[0]);

        // Pencil while viewing, Save button while editing
        let (label, style, target) = if editing {
            (
                SAVE_LABEL,
                Style::default().fg(Color::White).bg(Color::Green).add_modifier(Modifier::BOLD),
                HitTarget::Save,
            )
        } else {
            (EDIT_LABEL, Style::default().fg(HIGHLIGHT), HitTarget::EditAffordance)
        };

        let button_area = Rect {
            width: cols[1].width.min(label.chars().count() as u16),
            ..cols[1]
        };
        frame.render_widget(Paragraph::new(Span::styled(label, style)), button_area);
        self.affordance.set(Some((button_area, target)));
    }

    /// Lay out every section at its full height; the services list takes any spare rows
    fn body_layout(
        &self,
        width: u16,
        viewport: u16,
        profile: &Profile,
        service_count: usize,
    ) -> BodyLayout {
        let inner_width = width.saturating_sub(2);

        let field_height = |field: ProfileField| {
            let rows = if profile.is_editing() {
                1
            } else {
                wrapped_rows(profile.value(field), inner_width).max(1)
            };
            rows + 2
        };

        let reminders = REMINDERS
            .iter()
            .map(|reminder| 1 + wrapped_rows(reminder.text, inner_width))
            .sum::<u16>()
            + 3;

        let heights = [
            field_height(ProfileField::Name),
            reminders,
            field_height(ProfileField::About),
            (service_count.min(u16::MAX as usize) as u16).max(1) + 2,
            field_height(ProfileField::Hours),
            field_height(ProfileField::Address),
        ];
        let natural: u16 = heights.iter().fold(0u16, |sum, h| sum.saturating_add(*h));
        let spare = viewport.saturating_sub(natural);
        let height = natural + spare;

        let rects = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(heights[0]),
                Constraint::Length(heights[1]),
                Constraint::Length(heights[2]),
                Constraint::Length(heights[3] + spare),
                Constraint::Length(heights[4]),
                Constraint::Length(heights[5]),
            ])
            .split(Rect::new(0, 0, width, height));

        BodyLayout {
            header: rects[0],
            reminders: rects[1],
            about: rects[2],
            services: rects[3],
            hours: rects[4],
            location: rects[5],
            height,
        }
    }

    /// Draw the body off-screen at full height, then copy the visible window
    fn render_body(
        &self,
        frame: &mut Frame,
        area: Rect,
        profile: &Profile,
        services: &dyn ServiceSource,
        focused: ProfileField,
    ) {
        let items = service_items(services);
        let layout = self.body_layout(area.width, area.height, profile, items.len());

        let max_scroll = layout.height.saturating_sub(area.height);
        let mut offset = self.scroll.get().min(max_scroll);
        if profile.is_editing() {
            // Keep the focused input on screen
            let section = layout.section(focused);
            if section.y < offset {
                offset = section.y;
            } else if section.bottom() > offset + area.height {
                offset = (section.bottom() - area.height).min(max_scroll);
            }
        }
        self.scroll.set(offset);
        self.max_scroll.set(max_scroll);
        self.page_height.set(area.height);

        let mut canvas = Buffer::empty(Rect::new(0, 0, area.width, layout.height));

        let name_area = self.draw_header(&mut canvas, layout.header, profile, focused);
        draw_reminders(&mut canvas, layout.reminders);
        let about_area =
            draw_field_section(&mut canvas, layout.about, profile, ProfileField::About, "✚", focused);
        List::new(items)
            .block(section_block("Our Services", "🐾"))
            .render(layout.services, &mut canvas);
        let hours_area =
            draw_field_section(&mut canvas, layout.hours, profile, ProfileField::Hours, "◷", focused);
        let address_area = draw_field_section(
            &mut canvas,
            layout.location,
            profile,
            ProfileField::Address,
            "⌖",
            focused,
        );

        let buf = frame.buffer_mut();
        for row in 0..area.height.min(layout.height - offset) {
            for col in 0..area.width {
                *buf.get_mut(area.x + col, area.y + row) = canvas.get(col, offset + row).clone();
            }
        }

        if profile.is_editing() {
            let window = |body: Rect| to_screen(body, area, offset);
            self.field_areas.set([
                window(name_area),
                window(about_area),
                window(hours_area),
                window(address_area),
            ]);
        }
    }

    fn draw_header(
        &self,
        buf: &mut Buffer,
        area: Rect,
        profile: &Profile,
        focused: ProfileField,
    ) -> Rect {
        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(ACCENT).fg(Color::White));
        let content = block.inner(area);
        block.render(area, buf);

        FieldView::new(profile.value(ProfileField::Name))
            .editing(profile.is_editing())
            .focused(focused == ProfileField::Name)
            .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
            .display_alignment(Alignment::Center)
            .render(content, buf);

        content
    }

    fn render_help(&self, frame: &mut Frame, editing: bool) {
        let popup_area = centered_rect(frame.size(), 64, 18);

        let mut help_text = vec![
            Line::from(Span::styled(
                "Company Profile - Keyboard Shortcuts",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled("Viewing:", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))),
            Line::from("  [e] / click ✎   Edit every field"),
            Line::from("  [↑↓] [PgUp/Dn]  Scroll ([Home]/[End] jump)"),
            Line::from("  [r]            Reload (discards edits)"),
            Line::from("  [?] / [F1]     Toggle this help screen"),
            Line::from("  [q] / [Esc]    Quit"),
            Line::from(""),
            Line::from(Span::styled("Editing:", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))),
            Line::from("  [Tab] / [↓]    Next field"),
            Line::from("  [S-Tab] / [↑]  Previous field"),
            Line::from("  [Enter]        Save and stop editing"),
            Line::from("  [Ctrl+S]       Save button"),
            Line::from("  click a field  Focus it"),
        ];

        if editing {
            help_text.push(Line::from(""));
            help_text.push(Line::from(Span::styled(
                "Edits live in memory only and are lost on reload.",
                Style::default().fg(HIGHLIGHT),
            )));
        }

        help_text.push(Line::from(""));
        help_text.push(Line::from(Span::styled(
            "Press [?] or [Esc] to close this help",
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )));

        frame.render_widget(Clear, popup_area);

        let help_widget = Paragraph::new(help_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(Span::styled(" Help ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))),
            )
            .wrap(Wrap { trim: true });

        frame.render_widget(help_widget, popup_area);
    }
}

fn draw_reminders(buf: &mut Buffer, area: Rect) {
    let mut lines = Vec::new();
    for reminder in REMINDERS {
        lines.push(Line::from(vec![
            Span::styled("🐾 ", Style::default().fg(HIGHLIGHT)),
            Span::styled(reminder.author, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(reminder.text, Style::default().fg(MUTED))));
    }
    lines.push(
        Line::from(Span::styled(
            REMINDERS_LINK,
            Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        ))
        .alignment(Alignment::Right),
    );

    Paragraph::new(lines)
        .block(section_block(REMINDERS_TITLE, "▦"))
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

/// Returns the content area the field was drawn into
fn draw_field_section(
    buf: &mut Buffer,
    area: Rect,
    profile: &Profile,
    field: ProfileField,
    icon: &str,
    focused: ProfileField,
) -> Rect {
    let block = section_block(field.label(), icon);
    let content = block.inner(area);
    block.render(area, buf);

    FieldView::new(profile.value(field))
        .editing(profile.is_editing())
        .focused(focused == field)
        .style(Style::default().fg(MUTED))
        .render(content, buf);

    content
}

/// Translate a body rectangle to the screen, clipped to the visible window
fn to_screen(body: Rect, viewport: Rect, offset: u16) -> Option<Rect> {
    let top = body.y.max(offset);
    let bottom = body.bottom().min(offset.saturating_add(viewport.height));
    if top >= bottom || body.width == 0 {
        return None;
    }

    Some(Rect {
        x: viewport.x + body.x,
        y: viewport.y + (top - offset),
        width: body.width,
        height: bottom - top,
    })
}

fn section_block<'a>(title: &'a str, icon: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .title(Line::from(vec![
            Span::styled(format!(" {} ", icon), Style::default().fg(ACCENT)),
            Span::styled(format!("{} ", title), Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        ]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ServiceList, Store};
    use crate::utils::{CURSOR, DEFAULT_SERVICES, INPUT_BG, PLACEHOLDER_ABOUT, PLACEHOLDER_NAME};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw_sized(
        screen: &ProfileScreen,
        profile: &Profile,
        store: &Store,
        focused: ProfileField,
        width: u16,
        height: u16,
    ) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| screen.render(frame, profile, store, focused, None, false))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn draw(screen: &ProfileScreen, profile: &Profile, store: &Store, focused: ProfileField) -> Buffer {
        draw_sized(screen, profile, store, focused, 120, 48)
    }

    fn lines(buffer: &Buffer) -> Vec<String> {
        (0..buffer.area.height)
            .map(|y| (0..buffer.area.width).map(|x| buffer.get(x, y).symbol()).collect())
            .collect()
    }

    fn row_of(lines: &[String], needle: &str) -> Option<usize> {
        lines.iter().position(|line| line.contains(needle))
    }

    fn bullets(lines: &[String]) -> usize {
        lines.iter().filter(|line| line.contains("• ")).count()
    }

    #[test]
    fn test_viewing_renders_plain_text() {
        let screen = ProfileScreen::new();
        let buffer = draw(&screen, &Profile::new(), &Store::with_defaults(), ProfileField::Name);
        let lines = lines(&buffer);

        assert!(row_of(&lines, PLACEHOLDER_NAME).is_some());
        assert!(row_of(&lines, PLACEHOLDER_ABOUT).is_some());
        assert!(row_of(&lines, "✎ Edit").is_some());
        assert!(row_of(&lines, "[ Save ]").is_none());
        assert!(row_of(&lines, CURSOR).is_none());
        for field in ProfileField::ALL {
            assert!(screen.field_area(field).is_none());
        }
        assert_eq!(screen.max_scroll(), 0);
    }

    #[test]
    fn test_editing_exposes_every_field_as_input() {
        let screen = ProfileScreen::new();
        let mut profile = Profile::new();
        profile.enter_edit_mode();
        let buffer = draw(&screen, &profile, &Store::with_defaults(), ProfileField::Hours);
        let lines = lines(&buffer);

        assert!(row_of(&lines, "[ Save ]").is_some());
        for field in ProfileField::ALL {
            let area = screen.field_area(field).expect("field should be an input");
            assert_eq!(buffer.get(area.x, area.y).bg, INPUT_BG, "{} is not an input", field);
        }

        // Exactly one cursor, on the focused field
        assert_eq!(lines.iter().filter(|line| line.contains(CURSOR)).count(), 1);
        let hours_row = screen.field_area(ProfileField::Hours).unwrap().y as usize;
        assert!(lines[hours_row].contains(CURSOR));
    }

    #[test]
    fn test_services_render_in_order() {
        let screen = ProfileScreen::new();
        let store = Store::new(Some(ServiceList::from_iter(["Zeta care", "Alpha scan", "Mid check"])));
        let lines = lines(&draw(&screen, &Profile::new(), &store, ProfileField::Name));

        let zeta = row_of(&lines, "• Zeta care").unwrap();
        let alpha = row_of(&lines, "• Alpha scan").unwrap();
        let mid = row_of(&lines, "• Mid check").unwrap();
        assert!(zeta < alpha && alpha < mid);
        assert_eq!(bullets(&lines), 3);
    }

    #[test]
    fn test_absent_services_render_empty_list() {
        let screen = ProfileScreen::new();
        let lines = lines(&draw(&screen, &Profile::new(), &Store::absent(), ProfileField::Name));

        assert!(row_of(&lines, "Our Services").is_some());
        assert_eq!(bullets(&lines), 0);
    }

    #[test]
    fn test_service_items_count() {
        assert!(service_items(&Store::absent()).is_empty());
        assert!(service_items(&Store::new(Some(ServiceList::default()))).is_empty());
        assert_eq!(service_items(&Store::with_defaults()).len(), DEFAULT_SERVICES.len());
    }

    #[test]
    fn test_small_terminal_scrolls_to_every_section() {
        let screen = ProfileScreen::new();
        let store = Store::with_defaults();
        let profile = Profile::new();

        let top = lines(&draw_sized(&screen, &profile, &store, ProfileField::Name, 80, 24));
        let title_row = row_of(&top, REMINDERS_TITLE).expect("reminders block on first page");
        assert!(top[title_row + 1].contains("@username"));
        assert!(screen.max_scroll() > 0);

        screen.scroll_to_bottom();
        let bottom = lines(&draw_sized(&screen, &profile, &store, ProfileField::Name, 80, 24));
        assert_eq!(bullets(&bottom), DEFAULT_SERVICES.len());
        let rows: Vec<usize> = DEFAULT_SERVICES
            .iter()
            .map(|name| row_of(&bottom, &format!("• {}", name)).unwrap())
            .collect();
        assert!(rows.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(row_of(&bottom, ProfileField::Address.label()).is_some());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let screen = ProfileScreen::new();
        let store = Store::with_defaults();
        draw_sized(&screen, &Profile::new(), &store, ProfileField::Name, 80, 24);

        screen.scroll_by(-5);
        assert_eq!(screen.scroll_offset(), 0);
        screen.scroll_by(1000);
        assert_eq!(screen.scroll_offset(), screen.max_scroll());
        assert_eq!(screen.page_height(), 18);
    }

    #[test]
    fn test_editing_scrolls_focused_input_into_view() {
        let screen = ProfileScreen::new();
        let store = Store::with_defaults();
        let mut profile = Profile::new();
        profile.enter_edit_mode();

        draw_sized(&screen, &profile, &store, ProfileField::Address, 80, 24);
        let address = screen.field_area(ProfileField::Address).expect("focused input on screen");
        assert!(address.y >= 3 && address.bottom() <= 21);
        assert!(screen.field_area(ProfileField::Name).is_none());

        draw_sized(&screen, &profile, &store, ProfileField::Name, 80, 24);
        assert_eq!(screen.scroll_offset(), 0);
        assert!(screen.field_area(ProfileField::Name).is_some());
    }

    #[test]
    fn test_hit_test_follows_mode() {
        let screen = ProfileScreen::new();
        let store = Store::with_defaults();
        let mut profile = Profile::new();

        draw(&screen, &profile, &store, ProfileField::Name);
        let button = screen.affordance_area().unwrap();
        assert_eq!(screen.hit_test(button.x, button.y), Some(HitTarget::EditAffordance));

        profile.enter_edit_mode();
        draw(&screen, &profile, &store, ProfileField::Name);
        let button = screen.affordance_area().unwrap();
        assert_eq!(screen.hit_test(button.x, button.y), Some(HitTarget::Save));

        let address = screen.field_area(ProfileField::Address).unwrap();
        assert_eq!(
            screen.hit_test(address.x + 1, address.y),
            Some(HitTarget::Field(ProfileField::Address))
        );
        assert_eq!(screen.hit_test(0, 0), None);
    }

    #[test]
    fn test_to_screen_clips_to_window() {
        let viewport = Rect::new(0, 3, 80, 10);
        assert_eq!(to_screen(Rect::new(1, 12, 78, 1), viewport, 5), Some(Rect::new(1, 10, 78, 1)));
        assert_eq!(to_screen(Rect::new(1, 2, 78, 1), viewport, 5), None);
        assert_eq!(to_screen(Rect::new(1, 30, 78, 1), viewport, 5), None);
    }
}
