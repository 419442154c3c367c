//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top status bar with screen name and status
//!
//! ### Stateful Components (Event-Driven)
//!
//! Persistent state lives in `TuiState`; a transient wrapper borrowing that
//! state and the core data is created each frame:
//! - `PokemonGrid` / `PokemonGridState`: Home list, emits `GridEvent`
//! - `DetailView` / `DetailViewState`: tabbed Detail screen
//!
//! Components receive external data as props, never by reaching into `App`,
//! so each can be rendered against a `TestBackend` in isolation.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (top status bar)
//! ├── pokemon_grid.rs   (Home grid + end-reached signal)
//! └── detail_view.rs    (header + About/Stats/Evolution/Moves tabs)
//! ```

pub mod detail_view;
pub mod pokemon_grid;
mod title_bar;

pub use detail_view::{DetailView, DetailViewState};
pub use pokemon_grid::{GridEvent, PokemonGrid, PokemonGridState};
pub use title_bar::TitleBar;
