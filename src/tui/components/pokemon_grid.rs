//! # Pokémon Grid Component
//!
//! The Home screen: a two-column grid of `#001 Bulbasaur` cards.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PokemonGridState` lives in `TuiState` (selection, scroll)
//! - `PokemonGrid` is created each frame with borrowed state and items
//!
//! Moving the selection into the trailing 30% of loaded rows emits
//! `GridEvent::EndReached`, which the loop turns into `Action::EndReached`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, TableState};

use crate::core::format::{capitalize, format_dex_id};
use crate::core::types::PokemonSummary;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const GRID_COLUMNS: usize = 2;

/// Fraction of loaded rows, counted from the bottom, that triggers the next page.
pub const END_REACHED_THRESHOLD: f32 = 0.3;

/// Rows skipped by PageUp/PageDown.
const PAGE_JUMP_ROWS: usize = 5;

/// True once `selected` sits within the trailing `threshold` share of `len` items.
pub fn is_near_end(selected: usize, len: usize, threshold: f32) -> bool {
    if len == 0 {
        return false;
    }
    let rows = len.div_ceil(GRID_COLUMNS);
    let row = selected / GRID_COLUMNS;
    let rows_below = rows.saturating_sub(row + 1);
    (rows_below as f32) < (rows as f32) * threshold
}

/// Events emitted by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    Open(usize),
    EndReached,
}

/// Persistent state for the grid.
#[derive(Default)]
pub struct PokemonGridState {
    pub selected: usize,
    /// Number of items currently loaded; synced from the core each frame.
    pub item_count: usize,
    pub table_state: TableState,
}

impl PokemonGridState {
    pub fn new() -> Self {
        Self::default()
    }

    fn move_to(&mut self, index: usize) -> Option<GridEvent> {
        if self.item_count == 0 {
            return None;
        }
        let index = index.min(self.item_count - 1);
        let moved = index != self.selected;
        self.selected = index;
        if moved && is_near_end(self.selected, self.item_count, END_REACHED_THRESHOLD) {
            Some(GridEvent::EndReached)
        } else {
            None
        }
    }
}

impl EventHandler for PokemonGridState {
    type Event = GridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<GridEvent> {
        match event {
            TuiEvent::CursorDown => self.move_to(self.selected + GRID_COLUMNS),
            TuiEvent::CursorUp => self.move_to(self.selected.saturating_sub(GRID_COLUMNS)),
            TuiEvent::CursorRight => self.move_to(self.selected + 1),
            TuiEvent::CursorLeft => self.move_to(self.selected.saturating_sub(1)),
            TuiEvent::PageDown => self.move_to(self.selected + GRID_COLUMNS * PAGE_JUMP_ROWS),
            TuiEvent::PageUp => {
                self.move_to(self.selected.saturating_sub(GRID_COLUMNS * PAGE_JUMP_ROWS))
            }
            TuiEvent::Submit if self.selected < self.item_count => {
                Some(GridEvent::Open(self.selected))
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the grid.
pub struct PokemonGrid<'a> {
    state: &'a mut PokemonGridState,
    items: &'a [PokemonSummary],
    loading: bool,
}

impl<'a> PokemonGrid<'a> {
    pub fn new(state: &'a mut PokemonGridState, items: &'a [PokemonSummary], loading: bool) -> Self {
        Self {
            state,
            items,
            loading,
        }
    }

    fn card(summary: &PokemonSummary, selected: bool) -> Cell<'static> {
        let number = summary
            .id
            .parse::<u32>()
            .map(format_dex_id)
            .unwrap_or_else(|_| format!("#{}", summary.id));
        let style = if selected {
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Cell::from(Line::from(vec![
            Span::styled(format!("{number:>5} "), Style::default().fg(Color::DarkGray)),
            Span::raw(capitalize(&summary.name)),
        ]))
        .style(style)
    }
}

impl Component for PokemonGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(" Pokedex ");

        if self.items.is_empty() {
            let text = if self.loading { "Loading..." } else { "No Pokémon loaded" };
            frame.render_widget(Paragraph::new(text).block(block), area);
            return;
        }

        let selected = self.state.selected;
        let mut rows: Vec<Row> = self
            .items
            .chunks(GRID_COLUMNS)
            .enumerate()
            .map(|(row_index, chunk)| {
                let cells = chunk.iter().enumerate().map(|(col, summary)| {
                    Self::card(summary, row_index * GRID_COLUMNS + col == selected)
                });
                Row::new(cells)
            })
            .collect();
        if self.loading {
            rows.push(Row::new(vec![Cell::from(Span::styled(
                "Loading more...",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            ))]));
        }

        let widths = [Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)];
        let table = Table::new(rows, widths).block(block).column_spacing(2);

        self.state.table_state.select(Some(selected / GRID_COLUMNS));
        frame.render_stateful_widget(table, area, &mut self.state.table_state);
    }
}
