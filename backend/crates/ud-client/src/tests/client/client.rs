use crate::Client;

use ud_config::ClientConfig;

use std::time::Duration;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:8000", Duration::from_secs(5)).unwrap();
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_from_config_uses_api_base_url() {
    let config = ClientConfig {
        api_base_url: "http://10.0.0.2:9000/".to_string(),
        ..ClientConfig::default()
    };

    let client = Client::from_config(&config).unwrap();

    assert_eq!(client.base_url, "http://10.0.0.2:9000");
}
