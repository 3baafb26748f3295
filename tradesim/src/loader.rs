use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;
use tradesim_core::store::RouteMap;
use tradesim_core::{CargoItem, WorldStore};

/// Load one JSON collection file, treating a missing file as empty.
fn load_collection<T: DeserializeOwned + Default>(dir: &Path, file: &str) -> Result<T> {
    let path = dir.join(file);
    if !path.exists() {
        log::debug!("{} absent, starting empty", path.display());
        return Ok(T::default());
    }
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Assemble a world store from the per-collection JSON files in `dir`.
pub fn load_world(dir: &Path) -> Result<WorldStore> {
    let store = WorldStore {
        factors: load_collection(dir, "factors.json")?,
        routes: load_collection(dir, "routes.json")?,
        countries: load_collection(dir, "countries.json")?,
        commodities: load_collection(dir, "commodities.json")?,
        alliances: load_collection(dir, "alliances.json")?,
        treaties: load_collection(dir, "treaties.json")?,
    };
    log::info!(
        "loaded world: {} countries, {} route origins, {} factors, {} alliances, {} treaties",
        store.countries.len(),
        store.routes.len(),
        store.factors.len(),
        store.alliances.len(),
        store.treaties.len()
    );
    Ok(store)
}

/// Pristine route snapshot used to restore severed edges (peace treaties).
pub fn load_default_routes(dir: &Path) -> Result<RouteMap> {
    load_collection(&dir.join("defaults"), "routes.json")
}

/// Load a cargo manifest from a JSON array file.
pub fn load_manifest(path: &Path) -> Result<Vec<CargoItem>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
}
