/// Main TUI application

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use crate::core::{service_names, Profile, ProfileField, ServiceSource};
use crate::screens::{HitTarget, ProfileScreen};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
// Rows per mouse wheel notch
const SCROLL_STEP: i32 = 3;

pub struct App {
    screen: ProfileScreen,
    profile: Profile,
    services: Box<dyn ServiceSource>,
    // Input that receives keystrokes while editing
    focused: ProfileField,
    should_quit: bool,
    show_help: bool,
    status_message: Option<String>,
}

impl App {
    pub fn new(services: Box<dyn ServiceSource>) -> Self {
        Self {
            screen: ProfileScreen::new(),
            profile: Profile::new(),
            services,
            focused: ProfileField::Name,
            should_quit: false,
            show_help: false,
            status_message: None,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn focused_field(&self) -> ProfileField {
        self.focused
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn screen(&self) -> &ProfileScreen {
        &self.screen
    }

    fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        info!(services = service_names(self.services.as_ref()).len(), "profile view started");

        let result = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn run_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(POLL_INTERVAL)? {
                let event = event::read()?;
                self.handle_event(event);
            }

            if self.should_quit {
                break;
            }
        }

        info!("profile view closed");
        Ok(())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Ignore release/repeat reports so each keystroke counts once
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => self.handle_key(key_event),
            Event::Mouse(mouse_event) => self.handle_mouse(mouse_event),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key_event: KeyEvent) {
        // Handle edit mode separately
        if self.profile.is_editing() {
            self.handle_edit_key(key_event);
            return;
        }

        // Clear status message on any key
        self.clear_status();

        match key_event.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Char('?') | KeyCode::F(1) => {
                self.show_help = !self.show_help;
            }
            KeyCode::Char('e') => {
                self.enter_edit_mode();
            }
            KeyCode::Char('r') => {
                self.reload();
            }
            KeyCode::Up => {
                self.screen.scroll_by(-1);
            }
            KeyCode::Down => {
                self.screen.scroll_by(1);
            }
            KeyCode::PageUp => {
                self.screen.scroll_by(-(self.screen.page_height() as i32));
            }
            KeyCode::PageDown => {
                self.screen.scroll_by(self.screen.page_height() as i32);
            }
            KeyCode::Home => {
                self.screen.scroll_to_top();
            }
            KeyCode::End => {
                self.screen.scroll_to_bottom();
            }
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key_event: KeyEvent) {
        // The help overlay covers the inputs; it only accepts being closed
        if self.show_help {
            if matches!(key_event.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

        match key_event.code {
            KeyCode::Char('s') if ctrl => {
                self.commit_edit("save");
            }
            KeyCode::Char(c) if !ctrl => {
                let mut value = self.profile.value(self.focused).to_string();
                value.push(c);
                self.profile.update_field(self.focused, value);
            }
            KeyCode::Backspace => {
                let mut value = self.profile.value(self.focused).to_string();
                value.pop();
                self.profile.update_field(self.focused, value);
            }
            KeyCode::Enter => {
                self.commit_edit("enter");
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focused = self.focused.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focused = self.focused.prev();
            }
            KeyCode::F(1) => {
                self.show_help = true;
            }
            // No cancel transition exists, so Esc does nothing here
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse_event: MouseEvent) {
        if self.show_help {
            return;
        }

        match mouse_event.kind {
            MouseEventKind::ScrollUp => {
                self.screen.scroll_by(-SCROLL_STEP);
                return;
            }
            MouseEventKind::ScrollDown => {
                self.screen.scroll_by(SCROLL_STEP);
                return;
            }
            MouseEventKind::Down(MouseButton::Left) => {}
            _ => return,
        }

        let editing = self.profile.is_editing();
        match self.screen.hit_test(mouse_event.column, mouse_event.row) {
            Some(HitTarget::EditAffordance) if !editing => {
                self.clear_status();
                self.enter_edit_mode();
            }
            Some(HitTarget::Save) if editing => {
                self.commit_edit("save");
            }
            Some(HitTarget::Field(field)) if editing => {
                self.focused = field;
            }
            _ => {}
        }
    }

    fn enter_edit_mode(&mut self) {
        self.profile.enter_edit_mode();
        // The company name input takes focus first
        self.focused = ProfileField::Name;
        debug!("entered edit mode");
    }

    fn commit_edit(&mut self, trigger: &str) {
        self.profile.commit_and_exit();
        self.set_status("✓ Profile updated (kept in memory only)".to_string());
        debug!(trigger, "left edit mode");
    }

    /// Re-initialise the view the way a page reload would
    fn reload(&mut self) {
        self.profile = Profile::new();
        self.focused = ProfileField::Name;
        self.show_help = false;
        self.screen.scroll_to_top();
        self.set_status("Reloaded - in-memory edits discarded".to_string());
        info!("profile reloaded from placeholders");
    }

    pub fn render(&self, frame: &mut Frame) {
        self.screen.render(
            frame,
            &self.profile,
            self.services.as_ref(),
            self.focused,
            self.status_message.as_deref(),
            self.show_help,
        );
    }
}
