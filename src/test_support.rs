//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::api::{ApiError, DexApi};
use crate::core::state::App;

/// In-memory API: answers from a path → response table and records every path asked for.
#[derive(Default)]
pub struct StubApi {
    responses: HashMap<String, Result<Value, ApiError>>,
    calls: Mutex<Vec<String>>,
}

impl StubApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, body: Value) -> Self {
        self.responses.insert(path.to_string(), Ok(body));
        self
    }

    pub fn with_error(mut self, path: &str, err: ApiError) -> Self {
        self.responses.insert(path.to_string(), Err(err));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl DexApi for StubApi {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(path.to_string());
        }
        self.responses.get(path).cloned().unwrap_or_else(|| {
            Err(ApiError::Status {
                status: 404,
                message: format!("no stub for {path}"),
            })
        })
    }
}

/// A `pokemon?offset=&limit=` body with one result per `(name, id)`.
pub fn page_body(entries: &[(&str, u32)]) -> Value {
    let results: Vec<Value> = entries
        .iter()
        .map(|(name, id)| {
            json!({ "name": name, "url": format!("https://pokeapi.co/api/v2/pokemon/{id}/") })
        })
        .collect();
    json!({ "count": 1302, "next": null, "previous": null, "results": results })
}

/// A trimmed-down `pokemon/1` body.
pub fn bulbasaur_body() -> Value {
    json!({
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
            { "base_stat": 49, "effort": 0, "stat": { "name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/" } },
            { "base_stat": 65, "effort": 1, "stat": { "name": "special-attack", "url": "https://pokeapi.co/api/v2/stat/4/" } }
        ],
        "moves": [
            {
                "move": { "name": "razor-wind", "url": "https://pokeapi.co/api/v2/move/13/" },
                "version_group_details": [
                    { "level_learned_at": 0, "move_learn_method": { "name": "egg", "url": "" } },
                    { "level_learned_at": 12, "move_learn_method": { "name": "level-up", "url": "" } }
                ]
            },
            {
                "move": { "name": "vine-whip", "url": "https://pokeapi.co/api/v2/move/22/" },
                "version_group_details": [
                    { "level_learned_at": 3, "move_learn_method": { "name": "level-up", "url": "" } }
                ]
            }
        ],
        "types": [
            { "slot": 1, "type": { "name": "grass", "url": "https://pokeapi.co/api/v2/type/12/" } },
            { "slot": 2, "type": { "name": "poison", "url": "https://pokeapi.co/api/v2/type/4/" } }
        ]
    })
}

/// A trimmed-down `pokemon-species/1` body.
pub fn bulbasaur_species_body() -> Value {
    json!({
        "evolution_chain": { "url": "https://pokeapi.co/api/v2/evolution-chain/1/" },
        "flavor_text_entries": [
            { "flavor_text": "たねポケモン", "language": { "name": "ja", "url": "" } },
            { "flavor_text": "A strange seed\nwas planted...", "language": { "name": "en", "url": "" } },
            { "flavor_text": "Second english entry", "language": { "name": "en", "url": "" } }
        ],
        "egg_groups": [
            { "name": "monster", "url": "https://pokeapi.co/api/v2/egg-group/1/" },
            { "name": "grass", "url": "https://pokeapi.co/api/v2/egg-group/7/" }
        ]
    })
}

/// Creates a test App with default settings.
pub fn test_app() -> App {
    App::new(crate::core::list::ListOptions::default(), "https://img.example/pokemon")
}
