//! # Application State
//!
//! Core business state for the Pokédex. Domain logic only, no TUI types.
//! Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── screen: Screen                      // which screen is on top
//! ├── home: ListController                // Home list + page cursor
//! ├── detail: Option<DetailController>    // Some while Detail is open
//! ├── status_message: String              // status bar text
//! └── artwork_base_url: String            // image URL template base
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::detail::DetailController;
use crate::core::list::{ListController, ListOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Detail,
}

pub struct App {
    pub screen: Screen,
    pub home: ListController,
    pub detail: Option<DetailController>,
    pub status_message: String,
    pub artwork_base_url: String,
}

impl App {
    pub fn new(list_options: ListOptions, artwork_base_url: impl Into<String>) -> Self {
        Self {
            screen: Screen::Home,
            home: ListController::new(list_options),
            detail: None,
            status_message: String::from("Loading Pokédex..."),
            artwork_base_url: artwork_base_url.into(),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.list, config.artwork_base_url.clone())
    }

    pub fn is_loading(&self) -> bool {
        match self.screen {
            Screen::Home => self.home.is_loading(),
            Screen::Detail => self.detail.as_ref().is_some_and(|d| d.is_loading()),
        }
    }
}
