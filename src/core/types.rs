//! Display-ready domain types produced by the controllers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::core::format::DEFAULT_TYPE_COLOR;

/// One entry of the Home list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PokemonSummary {
    /// Derived from `url`, never provided by the service directly.
    pub id: String,
    pub name: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatEntry {
    pub name: String,
    pub base_stat: u32,
    pub effort: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measure {
    /// Decimetres.
    pub height: u32,
    /// Hectograms.
    pub weight: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MoveEntry {
    pub name: String,
    pub learned_at: u32,
    pub learn_method: String,
}

/// Result of the `pokemon/{id}` flow.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    pub stats: Vec<StatEntry>,
    pub measure: Measure,
    pub moves: Vec<MoveEntry>,
    pub types: Vec<String>,
}

/// Egg groups picked from the first two slots of the species list.
/// `None` means the species lists fewer groups than that slot.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EggGroups {
    pub group: Option<String>,
    pub cycle: Option<String>,
}

/// Result of the `pokemon-species/{id}` flow.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpeciesInfo {
    pub description: String,
    /// Identifier only; nothing here dereferences it.
    pub evolution_chain_ref: String,
    pub egg_group: EggGroups,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NavData {
    pub id: u32,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TypeTag {
    pub name: String,
}

/// What the Home screen hands to the Detail screen. Read-only for Detail.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NavigationParams {
    pub data: NavData,
    pub color: String,
    pub types: Vec<TypeTag>,
}

impl NavigationParams {
    /// Params for opening a list entry.
    ///
    /// The list endpoint carries only name and URL, so `color` is always
    /// [`DEFAULT_TYPE_COLOR`] and `types` is always empty here. The Detail
    /// header switches to the real type colour once Flow A reports types.
    pub fn from_summary(summary: &PokemonSummary) -> Option<Self> {
        let id = summary.id.parse().ok()?;
        Some(Self {
            data: NavData {
                id,
                name: summary.name.clone(),
            },
            color: DEFAULT_TYPE_COLOR.to_string(),
            types: Vec::new(),
        })
    }
}

/// Why a fetch-and-shape flow failed.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Network failure, non-2xx status, or an undecodable body.
    Transport(ApiError),
    /// The payload lacked something we select by key (e.g. English flavor text).
    Lookup(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(e) => write!(f, "transport failure: {e}"),
            FetchError::Lookup(msg) => write!(f, "lookup failure: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(e) => Some(e),
            FetchError::Lookup(_) => None,
        }
    }
}

impl From<ApiError> for FetchError {
    fn from(e: ApiError) -> Self {
        FetchError::Transport(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_wraps_api_error() {
        let err: FetchError = ApiError::Network("connection refused".to_string()).into();
        assert_eq!(
            err.to_string(),
            "transport failure: network error: connection refused"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_params_from_summary() {
        let summary = PokemonSummary {
            id: "25".to_string(),
            name: "pikachu".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon/25/".to_string(),
        };
        let params = NavigationParams::from_summary(&summary).unwrap();
        assert_eq!(params.data.id, 25);
        assert_eq!(params.color, DEFAULT_TYPE_COLOR);
        assert!(params.types.is_empty());

        let odd = PokemonSummary {
            id: "pokemon".to_string(),
            ..summary
        };
        assert!(NavigationParams::from_summary(&odd).is_none());
    }

    #[test]
    fn test_navigation_params_json_shape() {
        let params = NavigationParams {
            data: NavData {
                id: 1,
                name: "bulbasaur".to_string(),
            },
            color: "#48D0B0".to_string(),
            types: vec![TypeTag {
                name: "grass".to_string(),
            }],
        };
        let serialized = serde_json::to_string(&params).unwrap();
        assert_eq!(
            serialized,
            r##"{"data":{"id":1,"name":"bulbasaur"},"color":"#48D0B0","types":[{"name":"grass"}]}"##
        );
    }
}
