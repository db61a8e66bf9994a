use httpmock::prelude::*;
use serde_json::json;

use vitrine::api::{self, ApiClient};
use vitrine::commands;
use vitrine::session::SelectionSession;

fn session_for(server: &MockServer) -> SelectionSession {
    api::set_silent(true);
    let api = ApiClient::new(server.base_url(), "").expect("valid base URL");
    SelectionSession::new(api, 10)
}

#[tokio::test]
async fn config_set_saves_even_when_sectors_are_down() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/config");
        then.status(200).json_body(json!({"tempoScan": 15}));
    });
    let sectors = server.mock(|when, then| {
        when.method(GET).path("/setores");
        then.status(500);
    });
    let save = server.mock(|when, then| {
        when.method(POST).path("/config").json_body(json!({"tempoScan": 30}));
        then.status(200).json_body(json!({"tempoScan": 30}));
    });

    let mut s = session_for(&server);
    let ok = commands::config_set(&mut s, &[("tempoScan".to_string(), "30".to_string())]).await;

    assert!(ok);
    save.assert();
    sectors.assert_hits(0);
}

#[tokio::test]
async fn config_show_only_reads_config() {
    let server = MockServer::start_async().await;
    let config = server.mock(|when, then| {
        when.method(GET).path("/config");
        then.status(200).json_body(json!({"tempoScan": 15}));
    });
    let sectors = server.mock(|when, then| {
        when.method(GET).path("/setores");
        then.status(200).json_body(json!([]));
    });

    let mut s = session_for(&server);
    assert!(commands::config_show(&mut s).await);

    config.assert();
    sectors.assert_hits(0);
}

#[tokio::test]
async fn config_set_does_not_save_when_config_cannot_be_read() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/config");
        then.status(503);
    });
    let save = server.mock(|when, then| {
        when.method(POST).path("/config");
        then.status(200).json_body(json!({}));
    });

    let mut s = session_for(&server);
    let ok = commands::config_set(&mut s, &[("tempoScan".to_string(), "30".to_string())]).await;

    assert!(!ok);
    save.assert_hits(0);
}
