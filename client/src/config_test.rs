use super::*;

#[test]
fn normalize_base_url_defaults_when_missing() {
    assert_eq!(normalize_base_url(None), DEFAULT_API_BASE_URL);
}

#[test]
fn normalize_base_url_defaults_when_blank() {
    assert_eq!(normalize_base_url(Some("   ")), DEFAULT_API_BASE_URL);
}

#[test]
fn normalize_base_url_trims_trailing_slashes() {
    assert_eq!(normalize_base_url(Some("http://localhost:5000//")), "http://localhost:5000");
}

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}
