use std::sync::Arc;

use cb_core::config::AppConfig;
use cb_shell::bootstrap::create_runtime;
use cb_shell::{AppRuntime, StorageMode};
use serde_json::json;

pub const ANON_KEY: &str = "anon-test-key";

pub fn config_for(server: &mockito::ServerGuard) -> AppConfig {
    let mut config = AppConfig::with_system_defaults("/tmp/cryptobill-shell-test".into());
    config.backend_url = server.url();
    config.backend_anon_key = ANON_KEY.to_string();
    config.request_timeout_secs = 5;
    config
}

pub async fn started_runtime(server: &mockito::ServerGuard) -> Arc<AppRuntime> {
    let runtime = Arc::new(create_runtime(config_for(server), StorageMode::Ephemeral).unwrap());
    runtime.start().await.unwrap();
    runtime
}

pub fn token_body() -> String {
    json!({
        "access_token": "at-1",
        "refresh_token": "rt-1",
        "user": {
            "id": "u-ada",
            "email": "ada@example.com",
            "user_metadata": { "full_name": "Ada Obi" }
        }
    })
    .to_string()
}

pub async fn mock_sign_in(server: &mut mockito::ServerGuard) -> mockito::Mock {
    server
        .mock("POST", "/auth/v1/token")
        .match_query(mockito::Matcher::UrlEncoded(
            "grant_type".into(),
            "password".into(),
        ))
        .with_status(200)
        .with_body(token_body())
        .create_async()
        .await
}

pub async fn mock_wallet(server: &mut mockito::ServerGuard, body: serde_json::Value) -> mockito::Mock {
    server
        .mock("GET", "/rest/v1/wallets")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await
}
