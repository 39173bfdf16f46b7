use super::*;

#[test]
fn default_base_url_is_same_origin() {
    let config = FrontendConfig::default();
    assert!(config.api_base_url().starts_with('/') || config.api_base_url().starts_with("http"));
    assert!(!config.api_base_url().ends_with('/'));
}

#[test]
fn new_matches_default() {
    assert_eq!(
        FrontendConfig::new().api_base_url(),
        FrontendConfig::default().api_base_url()
    );
}
