//! # Detail View Component
//!
//! Header (name, types, Pokédex number) on the Pokémon's type colour, then a
//! tab strip: About, Stats, Evolution, Moves.
//!
//! Everything shown comes from `DetailController`; a flow that failed shows
//! its error in place of the section rather than a made-up default.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Gauge, Paragraph, Row, Table, TableState, Tabs, Wrap};

use crate::core::detail::DetailController;
use crate::core::format::{
    artwork_url, capitalize, format_dex_id, id_from_url, parse_hex_color,
};
use crate::core::types::FetchError;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Highest base stat in the games; gauges are scaled against it.
const MAX_BASE_STAT: u32 = 255;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailTab {
    #[default]
    About,
    Stats,
    Evolution,
    Moves,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::About,
        DetailTab::Stats,
        DetailTab::Evolution,
        DetailTab::Moves,
    ];

    /// Cycles to the next tab (wraps around)
    pub fn next(self) -> DetailTab {
        match self {
            DetailTab::About => DetailTab::Stats,
            DetailTab::Stats => DetailTab::Evolution,
            DetailTab::Evolution => DetailTab::Moves,
            DetailTab::Moves => DetailTab::About,
        }
    }

    pub fn prev(self) -> DetailTab {
        match self {
            DetailTab::About => DetailTab::Moves,
            DetailTab::Stats => DetailTab::About,
            DetailTab::Evolution => DetailTab::Stats,
            DetailTab::Moves => DetailTab::Evolution,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DetailTab::About => "About",
            DetailTab::Stats => "Base Stats",
            DetailTab::Evolution => "Evolution",
            DetailTab::Moves => "Moves",
        }
    }

    fn index(self) -> usize {
        DetailTab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }
}

/// Persistent state for the Detail screen.
#[derive(Default)]
pub struct DetailViewState {
    pub tab: DetailTab,
    pub moves_table: TableState,
}

impl DetailViewState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for DetailViewState {
    type Event = ();

    /// Tab switching and move-list scrolling. Never emits anything upward.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::CursorRight | TuiEvent::NextTab => self.tab = self.tab.next(),
            TuiEvent::CursorLeft | TuiEvent::PrevTab => self.tab = self.tab.prev(),
            TuiEvent::CursorDown if self.tab == DetailTab::Moves => self.moves_table.select_next(),
            TuiEvent::CursorUp if self.tab == DetailTab::Moves => {
                self.moves_table.select_previous()
            }
            _ => {}
        }
        None
    }
}

/// Decimetres → metres, hectograms → kilograms.
fn format_measure(value: u32, unit: &str) -> String {
    format!("{:.1} {}", value as f32 / 10.0, unit)
}

fn header_color(hex: &str) -> Color {
    parse_hex_color(hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::Gray)
}

fn error_line(e: &FetchError) -> Line<'static> {
    Line::from(Span::styled(e.to_string(), Style::default().fg(Color::Red)))
}

fn loading_line() -> Line<'static> {
    Line::from(Span::styled(
        "Loading...",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    ))
}

fn label(text: &str) -> Span<'static> {
    Span::styled(format!("{text:<12}"), Style::default().fg(Color::DarkGray))
}

/// Transient render wrapper for the Detail screen.
pub struct DetailView<'a> {
    state: &'a mut DetailViewState,
    detail: &'a DetailController,
    artwork_base_url: &'a str,
}

impl<'a> DetailView<'a> {
    pub fn new(
        state: &'a mut DetailViewState,
        detail: &'a DetailController,
        artwork_base_url: &'a str,
    ) -> Self {
        Self {
            state,
            detail,
            artwork_base_url,
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let params = self.detail.params();
        let bg = header_color(self.detail.header_color());
        let style = Style::default().bg(bg).fg(Color::White);

        let types: Vec<Span> = self
            .detail
            .type_names()
            .into_iter()
            .flat_map(|t| {
                [
                    Span::styled(format!(" {t} "), style.add_modifier(Modifier::REVERSED)),
                    Span::raw(" "),
                ]
            })
            .collect();

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    capitalize(&params.data.name),
                    style.add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(format_dex_id(params.data.id), style),
            ]),
            Line::from(types),
        ];

        let header = Paragraph::new(lines)
            .style(style)
            .block(Block::bordered().title(" ← Esc ").border_style(style));
        frame.render_widget(header, area);
    }

    fn about_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let species = self.detail.species();

        match (species, self.detail.species_error()) {
            (Some(s), _) => lines.extend(
                textwrap::wrap(&s.description, width)
                    .into_iter()
                    .map(|l| Line::from(l.into_owned())),
            ),
            (None, Some(e)) => lines.push(error_line(e)),
            (None, None) => lines.push(loading_line()),
        }
        lines.push(Line::from(""));

        match (self.detail.pokemon(), self.detail.pokemon_error()) {
            (Some(p), _) => {
                lines.push(Line::from(vec![
                    label("Height"),
                    Span::raw(format_measure(p.measure.height, "m")),
                ]));
                lines.push(Line::from(vec![
                    label("Weight"),
                    Span::raw(format_measure(p.measure.weight, "kg")),
                ]));
            }
            (None, Some(e)) => lines.push(error_line(e)),
            (None, None) => lines.push(loading_line()),
        }

        if let Some(s) = species {
            let not_available = || "Not available".to_string();
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Breeding",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(vec![
                label("Egg Groups"),
                Span::raw(s.egg_group.group.clone().unwrap_or_else(not_available)),
            ]));
            lines.push(Line::from(vec![
                label("Egg Cycle"),
                Span::raw(s.egg_group.cycle.clone().unwrap_or_else(not_available)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            label("Artwork"),
            Span::styled(
                artwork_url(self.artwork_base_url, self.detail.subject()),
                Style::default().fg(Color::Blue),
            ),
        ]));
        lines
    }

    fn render_about(&self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(2).max(1) as usize;
        let paragraph = Paragraph::new(self.about_lines(width))
            .block(Block::bordered())
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered();
        let Some(pokemon) = self.detail.pokemon() else {
            let line = self.detail.pokemon_error().map(error_line).unwrap_or_else(loading_line);
            frame.render_widget(Paragraph::new(line).block(block), area);
            return;
        };

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical(
            pokemon.stats.iter().map(|_| Constraint::Length(1)).chain([Constraint::Min(0)]),
        )
        .split(inner);

        for (stat, row) in pokemon.stats.iter().zip(rows.iter()) {
            let [name_area, gauge_area] =
                Layout::horizontal([Constraint::Length(18), Constraint::Min(0)]).areas(*row);
            frame.render_widget(Span::raw(capitalize(&stat.name.replace('-', " "))), name_area);
            let ratio = (stat.base_stat.min(MAX_BASE_STAT) as f64) / MAX_BASE_STAT as f64;
            let color = if stat.base_stat >= 50 { Color::Green } else { Color::Red };
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(color))
                .ratio(ratio)
                .label(stat.base_stat.to_string());
            frame.render_widget(gauge, gauge_area);
        }
    }

    fn render_evolution(&self, frame: &mut Frame, area: Rect) {
        let line = match (self.detail.species(), self.detail.species_error()) {
            (Some(s), _) => {
                let chain = id_from_url(&s.evolution_chain_ref).unwrap_or("?");
                Line::from(vec![
                    label("Chain"),
                    Span::raw(format!("#{chain}  ")),
                    Span::styled(s.evolution_chain_ref.clone(), Style::default().fg(Color::Blue)),
                ])
            }
            (None, Some(e)) => error_line(e),
            (None, None) => loading_line(),
        };
        frame.render_widget(Paragraph::new(line).block(Block::bordered()), area);
    }

    fn render_moves(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered();
        let Some(pokemon) = self.detail.pokemon() else {
            let line = self.detail.pokemon_error().map(error_line).unwrap_or_else(loading_line);
            frame.render_widget(Paragraph::new(line).block(block), area);
            return;
        };

        let rows = pokemon.moves.iter().map(|m| {
            Row::new(vec![
                Cell::from(m.name.clone()),
                Cell::from(m.learned_at.to_string()),
                Cell::from(m.learn_method.clone()),
            ])
        });
        let header = Row::new(vec!["Move", "Level", "Method"])
            .style(Style::default().add_modifier(Modifier::BOLD));
        let table = Table::new(
            rows,
            [Constraint::Min(16), Constraint::Length(6), Constraint::Length(12)],
        )
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(table, area, &mut self.state.moves_table);
    }
}

impl Component for DetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, tabs_area, body_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_header(frame, header_area);

        let tabs = Tabs::new(DetailTab::ALL.iter().map(|t| t.label()))
            .select(self.state.tab.index())
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, tabs_area);

        match self.state.tab {
            DetailTab::About => self.render_about(frame, body_area),
            DetailTab::Stats => self.render_stats(frame, body_area),
            DetailTab::Evolution => self.render_evolution(frame, body_area),
            DetailTab::Moves => self.render_moves(frame, body_area),
        }
    }
}
