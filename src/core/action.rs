//! # Actions
//!
//! Everything that can happen in the Pokédex becomes an `Action`.
//! Viewer scrolls to the end of the list? That's `Action::EndReached`.
//! A page comes back? That's `Action::PageLoaded { page, result }`.
//!
//! The `update()` function applies an action to the state and returns the
//! `Effect` the adapter should run. No I/O happens here; fetches are
//! described by effects and executed elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::detail::DetailController;
use crate::core::format::capitalize;
use crate::core::state::{App, Screen};
use crate::core::types::{
    FetchError, NavigationParams, PokemonDetail, PokemonSummary, SpeciesInfo,
};

#[derive(Debug)]
pub enum Action {
    /// Home screen opened.
    Mount,
    /// The viewer is close to the end of the loaded list.
    EndReached,
    PageLoaded {
        page: u32,
        result: Result<Vec<PokemonSummary>, FetchError>,
    },
    OpenDetail(NavigationParams),
    PokemonLoaded {
        id: u32,
        result: Result<PokemonDetail, FetchError>,
    },
    SpeciesLoaded {
        id: u32,
        result: Result<SpeciesInfo, FetchError>,
    },
    /// Leave the Detail screen.
    Back,
    Quit,
}

/// Side effects the adapter must perform after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    FetchPage(u32),
    /// Issue both detail flows for this id.
    FetchDetail(u32),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Mount => match app.home.mount() {
            Some(page) => Effect::FetchPage(page),
            None => Effect::None,
        },
        Action::EndReached => match app.home.end_reached() {
            Some(page) => {
                app.status_message = format!("Loading page {}...", page + 1);
                Effect::FetchPage(page)
            }
            None => Effect::None,
        },
        Action::PageLoaded { page, result } => {
            if let Err(e) = &result {
                app.status_message = format!("Page {} failed: {}", page + 1, e);
            }
            let appended = app.home.apply_page(page, result);
            if app.home.last_error().is_none() {
                app.status_message = format!(
                    "{} Pokémon loaded (+{})",
                    app.home.items().len(),
                    appended
                );
            }
            Effect::None
        }
        Action::OpenDetail(params) => {
            let id = match app.detail.as_mut() {
                Some(detail) if detail.subject() == params.data.id => {
                    debug!("Detail #{} already open", params.data.id);
                    app.screen = Screen::Detail;
                    return Effect::None;
                }
                Some(detail) => detail.set_subject(params),
                None => {
                    let detail = DetailController::open(params);
                    let id = detail.subject();
                    app.detail = Some(detail);
                    id
                }
            };
            app.screen = Screen::Detail;
            if let Some(detail) = &app.detail {
                app.status_message = format!("Loading {}...", capitalize(&detail.params().data.name));
            }
            Effect::FetchDetail(id)
        }
        Action::PokemonLoaded { id, result } => {
            match app.detail.as_mut() {
                Some(detail) => {
                    detail.apply_pokemon(id, result);
                    refresh_detail_status(app);
                }
                None => debug!("Pokemon #{} arrived after Detail closed; dropped", id),
            }
            Effect::None
        }
        Action::SpeciesLoaded { id, result } => {
            match app.detail.as_mut() {
                Some(detail) => {
                    detail.apply_species(id, result);
                    refresh_detail_status(app);
                }
                None => debug!("Species #{} arrived after Detail closed; dropped", id),
            }
            Effect::None
        }
        Action::Back => {
            if app.screen == Screen::Detail {
                app.screen = Screen::Home;
                app.detail = None;
                app.status_message = format!("{} Pokémon loaded", app.home.items().len());
            }
            Effect::None
        }
        Action::Quit => {
            info!("Quit requested");
            Effect::Quit
        }
    }
}

fn refresh_detail_status(app: &mut App) {
    let Some(detail) = &app.detail else {
        return;
    };
    let name = capitalize(&detail.params().data.name);
    app.status_message = if let Some(e) = detail.pokemon_error().or(detail.species_error()) {
        format!("{name}: {e}")
    } else if detail.is_loading() {
        format!("Loading {name}...")
    } else {
        name
    };
}
