//! Wire types for the three endpoints we read. Only the fields the
//! controllers use are modelled; everything else in the payload is ignored.

use serde::{Deserialize, Serialize};

/// `{ name, url }` pair used all over PokéAPI.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// `{ url }` reference without a name (e.g. `evolution_chain`).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ApiResource {
    pub url: String,
}

/// `GET pokemon?offset=&limit=`
#[derive(Deserialize, Debug, Clone)]
pub struct PageResponse {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// `GET pokemon/{id}`
#[derive(Deserialize, Debug, Clone)]
pub struct RawPokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<RawStat>,
    #[serde(default)]
    pub moves: Vec<RawMove>,
    #[serde(default)]
    pub types: Vec<RawType>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawMove {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<RawVersionGroupDetail>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawVersionGroupDetail {
    pub level_learned_at: u32,
    pub move_learn_method: NamedResource,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawType {
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

/// `GET pokemon-species/{id}`
#[derive(Deserialize, Debug, Clone)]
pub struct RawSpecies {
    pub evolution_chain: ApiResource,
    #[serde(default)]
    pub flavor_text_entries: Vec<RawFlavorText>,
    #[serde(default)]
    pub egg_groups: Vec<NamedResource>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RawFlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
}
