//! Golden datasets shared by the skillweave test suites.
//!
//! Fixtures live next to this crate, so paths are resolved against its own
//! manifest directory no matter which crate's tests are running.

mod scenario;

pub use scenario::{load_scenario, ExpectedFinding, Scenario, SCENARIOS_DIR};

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

/// Reference nine-domain taxonomy.
pub const REFERENCE_TAXONOMY: &str = "golden/taxonomy/reference_taxonomy.json";
/// Three-domain chain `D1 → D2 → D3`.
pub const CHAIN_TAXONOMY: &str = "golden/taxonomy/chain_taxonomy.json";

fn fixtures_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Absolute path of a fixture.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Read a fixture file as a string.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_fixture_str(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    serde_json::from_str(&load_fixture_str(relative_path))
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", relative_path, e))
}

/// Names (relative to the fixture root) of every JSON file in `subdir`,
/// sorted.
pub fn list_fixtures(subdir: &str) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(fixture_path(subdir)) else {
        return Vec::new();
    };
    let mut names: Vec<String> = entries
        .filter_map(|entry| {
            let name = entry.ok()?.file_name().into_string().ok()?;
            name.ends_with(".json").then(|| format!("{subdir}/{name}"))
        })
        .collect();
    names.sort();
    names
}
