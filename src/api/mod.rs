//! # PokéAPI Boundary
//!
//! Thin HTTP-GET glue against the public Pokémon data service.
//! Everything here is I/O and wire types; shaping lives in `core`.

pub mod client;
pub mod types;

pub use client::{ApiError, DexApi, HttpDexApi, fetch_as};
pub use types::{
    ApiResource, NamedResource, PageResponse, RawFlavorText, RawMove, RawPokemon, RawSpecies,
    RawStat, RawType, RawVersionGroupDetail,
};
