//! Testing utilities for OpenScale client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use openscale_client::testing::load_fixture;
//!
//! let fixture = load_fixture("data_marts/get_data_mart.json");
//! assert_eq!(fixture["metadata"]["id"], "dm-123");
//! ```

use std::path::{Path, PathBuf};

fn fixture_path(fixture_path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path)
}

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "data_marts/get_data_mart.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let content = load_fixture_string(fixture_path);
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Load a fixture file verbatim, for non-JSON bodies such as CSV uploads.
///
/// # Panics
/// If the fixture file cannot be read.
pub fn load_fixture_string(fixture_path: &str) -> String {
    let full_path = self::fixture_path(fixture_path);
    std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()))
}
