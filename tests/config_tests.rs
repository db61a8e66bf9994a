use std::env;
use vitrine::config;

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://loja.example.com/api/"),
        "https://loja.example.com/api"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://loja.example.com/api///"),
        "https://loja.example.com/api"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://loja.example.com/api/  "),
        "https://loja.example.com/api"
    );
}

#[test]
fn test_sanitize_base_url_empty_uses_default() {
    assert_eq!(config::sanitize_base_url("   "), config::DEFAULT_API_BASE_URL);
}

#[test]
fn test_parse_rows_per_page() {
    assert_eq!(config::parse_rows_per_page(None), 10);
    assert_eq!(config::parse_rows_per_page(Some("25")), 25);
    assert_eq!(config::parse_rows_per_page(Some(" 5 ")), 5);
    assert_eq!(config::parse_rows_per_page(Some("0")), 10);
    assert_eq!(config::parse_rows_per_page(Some("ten")), 10);
}

#[test]
fn test_get_api_base_url_from_env() {
    // Only this test touches API_BASE_URL
    env::set_var("API_BASE_URL", "https://loja.example.com/api/");
    assert_eq!(config::get_api_base_url(), "https://loja.example.com/api");

    env::remove_var("API_BASE_URL");
    assert_eq!(config::get_api_base_url(), config::DEFAULT_API_BASE_URL);
}
