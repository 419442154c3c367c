//! # TitleBar Component
//!
//! Top status bar: screen name, status message, and a spinner while a fetch
//! is outstanding.
//!
//! ## Conditional Formatting
//!
//! 1. **Loading**: `"Pokedex | Home | ⠋ Loading page 2..."`
//! 2. **Status message**: `"Pokedex | Home | 40 Pokémon loaded (+40)"`
//! 3. **Default**: `"Pokedex | Home"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Top status bar component. All fields are props from the parent.
pub struct TitleBar {
    pub screen_label: String,
    pub status_message: String,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(screen_label: &str, status_message: &str, is_loading: bool, spinner_frame: usize) -> Self {
        Self {
            screen_label: screen_label.to_string(),
            status_message: status_message.to_string(),
            is_loading,
            spinner_frame,
        }
    }

    fn format_title(&self) -> String {
        if self.is_loading {
            let spinner = SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()];
            format!("Pokedex | {} | {} {}", self.screen_label, spinner, self.status_message)
        } else if self.status_message.is_empty() {
            format!("Pokedex | {}", self.screen_label)
        } else {
            format!("Pokedex | {} | {}", self.screen_label, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = Span::styled(self.format_title(), Style::default().fg(Color::Yellow));
        frame.render_widget(title, area);
    }
}
