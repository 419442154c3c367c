//! # Detail Controller
//!
//! Two independent fetch-and-shape flows keyed on the same Pokédex id:
//!
//! - **Flow A** `pokemon/{id}`: stats, measurements, moves, types.
//! - **Flow B** `pokemon-species/{id}`: description, evolution chain
//!   reference, egg groups.
//!
//! Neither flow waits on the other. Results are tagged with the id they were
//! issued for, and the controller drops any result whose id no longer matches
//! its current subject.

use log::{debug, info, warn};

use crate::api::{
    DexApi, NamedResource, RawFlavorText, RawMove, RawPokemon, RawSpecies, fetch_as,
};
use crate::core::format::{capitalize, move_display_name, normalize_flavor_text, type_color};
use crate::core::types::{
    EggGroups, FetchError, Measure, MoveEntry, NavigationParams, PokemonDetail, SpeciesInfo,
    StatEntry,
};

/// Language tag of the flavor text we display.
pub const DESCRIPTION_LANGUAGE: &str = "en";

pub fn pokemon_path(id: u32) -> String {
    format!("pokemon/{id}")
}

pub fn species_path(id: u32) -> String {
    format!("pokemon-species/{id}")
}

/// Projects raw moves, keeping only the first version-group detail of each.
///
/// Later details (the same move under other game versions) are discarded.
/// A move with no details at all has nothing to show and is left out.
pub fn project_moves(raw: Vec<RawMove>) -> Vec<MoveEntry> {
    raw.into_iter()
        .filter_map(|m| {
            let Some(first) = m.version_group_details.into_iter().next() else {
                debug!("Move {} has no version group details, skipping", m.move_ref.name);
                return None;
            };
            Some(MoveEntry {
                name: move_display_name(&m.move_ref.name),
                learned_at: first.level_learned_at,
                learn_method: capitalize(&first.move_learn_method.name),
            })
        })
        .collect()
}

/// First flavor text in `language`, normalized for display.
pub fn select_description(
    entries: &[RawFlavorText],
    language: &str,
) -> Result<String, FetchError> {
    entries
        .iter()
        .find(|entry| entry.language.name == language)
        .map(|entry| normalize_flavor_text(&entry.flavor_text))
        .ok_or_else(|| FetchError::Lookup(format!("no flavor text in language {language:?}")))
}

/// Egg groups from slots 0 and 1, capitalized. Missing slots stay `None`.
pub fn select_egg_groups(groups: &[NamedResource]) -> EggGroups {
    EggGroups {
        group: groups.first().map(|g| capitalize(&g.name)),
        cycle: groups.get(1).map(|g| capitalize(&g.name)),
    }
}

fn shape_pokemon(raw: RawPokemon) -> PokemonDetail {
    let stats = raw
        .stats
        .into_iter()
        .map(|s| StatEntry {
            name: s.stat.name,
            base_stat: s.base_stat,
            effort: s.effort,
        })
        .collect();

    let mut types = raw.types;
    types.sort_by_key(|t| t.slot);

    PokemonDetail {
        id: raw.id,
        name: raw.name,
        stats,
        measure: Measure {
            height: raw.height,
            weight: raw.weight,
        },
        moves: project_moves(raw.moves),
        types: types.into_iter().map(|t| t.type_ref.name).collect(),
    }
}

fn shape_species(raw: RawSpecies) -> Result<SpeciesInfo, FetchError> {
    let description = select_description(&raw.flavor_text_entries, DESCRIPTION_LANGUAGE)?;
    Ok(SpeciesInfo {
        description,
        evolution_chain_ref: raw.evolution_chain.url,
        egg_group: select_egg_groups(&raw.egg_groups),
    })
}

/// Flow A.
pub async fn load_pokemon(api: &dyn DexApi, id: u32) -> Result<PokemonDetail, FetchError> {
    let raw: RawPokemon = fetch_as(api, &pokemon_path(id)).await?;
    Ok(shape_pokemon(raw))
}

/// Flow B.
pub async fn load_species(api: &dyn DexApi, id: u32) -> Result<SpeciesInfo, FetchError> {
    let raw: RawSpecies = fetch_as(api, &species_path(id)).await?;
    shape_species(raw)
}

/// Runs both flows concurrently and hands back both outcomes.
pub async fn load_detail(
    api: &dyn DexApi,
    id: u32,
) -> (
    Result<PokemonDetail, FetchError>,
    Result<SpeciesInfo, FetchError>,
) {
    futures::join!(load_pokemon(api, id), load_species(api, id))
}

/// Per-screen state for the Detail view.
pub struct DetailController {
    params: NavigationParams,
    pokemon: Option<PokemonDetail>,
    species: Option<SpeciesInfo>,
    pokemon_error: Option<FetchError>,
    species_error: Option<FetchError>,
}

impl DetailController {
    pub fn open(params: NavigationParams) -> Self {
        info!("Opening detail for {} (#{})", params.data.name, params.data.id);
        Self {
            params,
            pokemon: None,
            species: None,
            pokemon_error: None,
            species_error: None,
        }
    }

    /// Id both flows should be issued for.
    pub fn subject(&self) -> u32 {
        self.params.data.id
    }

    pub fn params(&self) -> &NavigationParams {
        &self.params
    }

    pub fn pokemon(&self) -> Option<&PokemonDetail> {
        self.pokemon.as_ref()
    }

    pub fn species(&self) -> Option<&SpeciesInfo> {
        self.species.as_ref()
    }

    pub fn pokemon_error(&self) -> Option<&FetchError> {
        self.pokemon_error.as_ref()
    }

    pub fn species_error(&self) -> Option<&FetchError> {
        self.species_error.as_ref()
    }

    /// Type names to show: Flow A's once it lands, the navigation params' before.
    pub fn type_names(&self) -> Vec<&str> {
        match &self.pokemon {
            Some(p) if !p.types.is_empty() => p.types.iter().map(String::as_str).collect(),
            _ => self.params.types.iter().map(|t| t.name.as_str()).collect(),
        }
    }

    /// Header colour: the primary type's once known, else the colour we were opened with.
    pub fn header_color(&self) -> &str {
        match self.pokemon.as_ref().and_then(|p| p.types.first()) {
            Some(primary) => type_color(primary),
            None => &self.params.color,
        }
    }

    pub fn is_loading(&self) -> bool {
        (self.pokemon.is_none() && self.pokemon_error.is_none())
            || (self.species.is_none() && self.species_error.is_none())
    }

    /// Switches to a new subject, clearing everything shaped for the old one.
    /// Returns the id to fetch.
    pub fn set_subject(&mut self, params: NavigationParams) -> u32 {
        *self = Self::open(params);
        self.subject()
    }

    /// Applies a Flow A result issued for `id`. Returns false if it was stale.
    pub fn apply_pokemon(&mut self, id: u32, result: Result<PokemonDetail, FetchError>) -> bool {
        if id != self.subject() {
            warn!("Discarding stale pokemon result for #{} (showing #{})", id, self.subject());
            return false;
        }
        match result {
            Ok(detail) => {
                debug!("Pokemon #{}: {} stats, {} moves", id, detail.stats.len(), detail.moves.len());
                self.pokemon = Some(detail);
                self.pokemon_error = None;
            }
            Err(e) => {
                warn!("Pokemon #{} failed: {}", id, e);
                self.pokemon_error = Some(e);
            }
        }
        true
    }

    /// Applies a Flow B result issued for `id`. Returns false if it was stale.
    pub fn apply_species(&mut self, id: u32, result: Result<SpeciesInfo, FetchError>) -> bool {
        if id != self.subject() {
            warn!("Discarding stale species result for #{} (showing #{})", id, self.subject());
            return false;
        }
        match result {
            Ok(species) => {
                self.species = Some(species);
                self.species_error = None;
            }
            Err(e) => {
                warn!("Species #{} failed: {}", id, e);
                self.species_error = Some(e);
            }
        }
        true
    }
}
