#[test]
fn version_matches_cargo_pkg_version() {
    assert_eq!(mangrove::VERSION, env!("CARGO_PKG_VERSION"));
    assert!(!mangrove::VERSION.is_empty());
}
