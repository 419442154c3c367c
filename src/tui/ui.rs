use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{DetailView, PokemonGrid, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

const HOME_HELP: &str = " ←↑↓→ Move  Enter Open  q Quit ";
const DETAIL_HELP: &str = " ←→/Tab Switch tab  ↑↓ Scroll moves  Esc Back  q Quit ";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    let (label, help) = match app.screen {
        Screen::Home => ("Home", HOME_HELP),
        Screen::Detail => ("Detail", DETAIL_HELP),
    };
    TitleBar::new(label, &app.status_message, app.is_loading(), spinner_frame)
        .render(frame, title_area);

    match (app.screen, app.detail.as_ref()) {
        (Screen::Detail, Some(detail)) => {
            DetailView::new(&mut tui.detail_view, detail, &app.artwork_base_url)
                .render(frame, main_area);
        }
        _ => {
            PokemonGrid::new(&mut tui.grid, app.home.items(), app.home.is_loading())
                .render(frame, main_area);
        }
    }

    frame.render_widget(
        Span::styled(help, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}
