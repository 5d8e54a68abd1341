//! Shared fixtures for the integration tests.

use std::path::PathBuf;

use metronav_lib::{build_network, load_listing, Network, NetworkConfig};

/// Path to the fixtures directory shared by the workspace.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Path to the sample metro listing.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    fixtures_dir().join("stations.csv")
}

/// Load the sample listing into a network with the default configuration.
#[allow(dead_code)]
pub fn fixture_network() -> Network {
    fixture_network_with(&NetworkConfig::default())
}

/// Load the sample listing into a network with a custom configuration.
#[allow(dead_code)]
pub fn fixture_network_with(config: &NetworkConfig) -> Network {
    let sections = load_listing(&fixture_path()).expect("fixture listing loads");
    build_network(&sections, config).expect("fixture network builds")
}

/// Assert two distances agree to within floating point noise.
#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
