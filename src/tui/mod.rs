//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Fetch Effects
//!
//! `update()` returns an `Effect`; this module runs it. Each fetch is a
//! `tokio::spawn`ed task that sends its outcome back over an mpsc channel as
//! an `Action`, which the loop drains between frames. Detail fetches are two
//! independent tasks so each section fills in as soon as its own request
//! completes.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events, resize, or
//!   arrived results.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::cursor::Hide;
use crossterm::execute;
use crossterm::terminal::{DisableLineWrap, EnableLineWrap};

use crate::api::{DexApi, HttpDexApi};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::detail::{load_pokemon, load_species};
use crate::core::list::load_page;
use crate::core::state::{App, Screen};
use crate::core::types::NavigationParams;
use crate::tui::component::EventHandler;
use crate::tui::components::{DetailViewState, GridEvent, PokemonGridState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    pub grid: PokemonGridState,
    pub detail_view: DetailViewState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide, DisableLineWrap)?;
        info!("Terminal modes enabled (hidden cursor, no line wrap)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), EnableLineWrap);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let api: Arc<dyn DexApi> = Arc::new(HttpDexApi::new(config.base_url.clone()));
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let effect = update(&mut app, Action::Mount);
    execute_effect(effect, &app, &mut tui, &api, &tx);

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'outer: loop {
        tui.grid.item_count = app.home.items().len();
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = route_event(event, &app, &mut tui) else {
                continue;
            };
            let effect = update(&mut app, action);
            if effect == Effect::Quit {
                break 'outer;
            }
            execute_effect(effect, &app, &mut tui, &api, &tx);
        }

        // Fetch results from background tasks
        for action in rx.try_iter() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if effect == Effect::Quit {
                break 'outer;
            }
            execute_effect(effect, &app, &mut tui, &api, &tx);
        }
    }

    ratatui::restore();
    Ok(())
}

/// Turns a key event into a core action for the current screen, letting the
/// focused component consume whatever is purely presentational.
fn route_event(event: TuiEvent, app: &App, tui: &mut TuiState) -> Option<Action> {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::Resize => None,
        _ => match app.screen {
            Screen::Home => match tui.grid.handle_event(&event)? {
                GridEvent::EndReached => Some(Action::EndReached),
                GridEvent::Open(index) => {
                    let summary = app.home.items().get(index)?;
                    match NavigationParams::from_summary(summary) {
                        Some(params) => Some(Action::OpenDetail(params)),
                        None => {
                            warn!("Summary {:?} has no numeric id; not opening", summary.id);
                            None
                        }
                    }
                }
            },
            Screen::Detail => {
                if event == TuiEvent::Back {
                    Some(Action::Back)
                } else {
                    tui.detail_view.handle_event(&event);
                    None
                }
            }
        },
    }
}

fn execute_effect(
    effect: Effect,
    app: &App,
    tui: &mut TuiState,
    api: &Arc<dyn DexApi>,
    tx: &mpsc::Sender<Action>,
) {
    match effect {
        Effect::None | Effect::Quit => {}
        Effect::FetchPage(page) => {
            spawn_page_fetch(page, app.home.options().page_size, api.clone(), tx.clone())
        }
        Effect::FetchDetail(id) => {
            tui.detail_view = DetailViewState::new();
            spawn_detail_fetch(id, api.clone(), tx.clone());
        }
    }
}

fn spawn_page_fetch(page: u32, page_size: u32, api: Arc<dyn DexApi>, tx: mpsc::Sender<Action>) {
    info!("Spawning page fetch: page={} size={}", page, page_size);
    tokio::spawn(async move {
        let result = load_page(api.as_ref(), page, page_size).await;
        if tx.send(Action::PageLoaded { page, result }).is_err() {
            warn!("Failed to send page {}: receiver dropped", page);
        }
    });
}

fn spawn_detail_fetch(id: u32, api: Arc<dyn DexApi>, tx: mpsc::Sender<Action>) {
    info!("Spawning detail fetches for #{}", id);

    let pokemon_api = api.clone();
    let pokemon_tx = tx.clone();
    tokio::spawn(async move {
        let result = load_pokemon(pokemon_api.as_ref(), id).await;
        if pokemon_tx.send(Action::PokemonLoaded { id, result }).is_err() {
            warn!("Failed to send pokemon #{}: receiver dropped", id);
        }
    });

    tokio::spawn(async move {
        let result = load_species(api.as_ref(), id).await;
        if tx.send(Action::SpeciesLoaded { id, result }).is_err() {
            warn!("Failed to send species #{}: receiver dropped", id);
        }
    });
}
