//! # Core Application Logic
//!
//! This module contains the Pokédex's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • List / Detail flows  │
//!                    │  • State + Action       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  I/O only via DexApi    │
//!                    └───────────┬─────────────┘
//!                                │
//!                   ┌────────────┴────────────┐
//!                   ▼                         ▼
//!            ┌────────────┐            ┌────────────┐
//!            │    TUI     │            │  PokéAPI   │
//!            │  Adapter   │            │  (reqwest) │
//!            │ (ratatui)  │            │            │
//!            └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`list`]: Home list accumulation and paging
//! - [`detail`]: the two Detail flows and stale-result filtering
//! - [`format`]: string shaping shared by both screens
//! - [`types`]: display-ready records and `FetchError`
//! - [`state`]: the `App` struct
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: layered settings

pub mod action;
pub mod config;
pub mod detail;
pub mod format;
pub mod list;
pub mod state;
pub mod types;
