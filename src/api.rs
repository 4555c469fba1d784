//! PokeAPI client

use std::sync::OnceLock;

use futures::future;
use serde::Deserialize;

use crate::state::{CatalogEntry, StatValue, PAGE_SIZE};

const API_BASE: &str = "https://pokeapi.co/api/v2";

#[derive(Clone, Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Clone, Debug, Deserialize)]
struct ListingResource {
    name: String,
    url: String,
}

#[derive(Clone, Debug, Deserialize)]
struct ListingResponse {
    results: Vec<ListingResource>,
}

#[derive(Clone, Debug, Deserialize)]
struct TypeListResponse {
    results: Vec<NamedResource>,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonResponse {
    name: String,
    height: u16,
    weight: u16,
    types: Vec<PokemonTypeSlot>,
    stats: Vec<PokemonStatSlot>,
    sprites: serde_json::Value,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonTypeSlot {
    #[serde(rename = "type")]
    type_info: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonStatSlot {
    base_stat: u16,
    stat: NamedResource,
}

/// Fetch one listing page and resolve every referenced entry concurrently.
/// The join is all-or-nothing: if any single resolution fails the whole page
/// fails and no partial batch is produced.
pub async fn fetch_page(offset: u32) -> Result<Vec<CatalogEntry>, String> {
    let url = format!("{API_BASE}/pokemon?limit={PAGE_SIZE}&offset={offset}");
    let listing: ListingResponse = fetch_json(&url).await?;
    future::try_join_all(listing.results.iter().map(|reference| async move {
        fetch_entry(&reference.url)
            .await
            .map_err(|err| format!("{}: {err}", reference.name))
    }))
    .await
}

/// Resolve the full record behind one listing reference.
pub async fn fetch_entry(url: &str) -> Result<CatalogEntry, String> {
    let response: PokemonResponse = fetch_json(url).await?;

    let types = response
        .types
        .into_iter()
        .map(|slot| slot.type_info.name)
        .collect();
    let stats = response
        .stats
        .into_iter()
        .map(|slot| StatValue {
            name: slot.stat.name,
            base: slot.base_stat,
        })
        .collect();
    let artwork = pointer_string(&response.sprites, "/other/official-artwork/front_default");

    Ok(CatalogEntry {
        name: response.name,
        artwork,
        types,
        height: response.height,
        weight: response.weight,
        stats,
    })
}

/// Fetch the full set of type labels, order as returned by the API.
pub async fn fetch_type_list() -> Result<Vec<String>, String> {
    let url = format!("{API_BASE}/type");
    let response: TypeListResponse = fetch_json(&url).await?;
    Ok(response
        .results
        .into_iter()
        .map(|entry| entry.name)
        .collect())
}

fn pointer_string(value: &serde_json::Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(|val| val.as_str())
        .map(|s| s.to_string())
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = http_client()
        .get(url)
        .send()
        .await
        .map_err(|err| err.to_string())?;
    let response = response.error_for_status().map_err(|err| err.to_string())?;
    response.json().await.map_err(|err| err.to_string())
}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}
