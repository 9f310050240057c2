use serde::{Deserialize, Serialize};
use std::env;

/// Gateway configuration: bind address plus the base URLs of the four
/// downstream services. Read once at startup and passed into router
/// construction; nothing else is shared across requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub server_host: String,
    pub server_port: String,
    pub auth_url: String,
    pub mood_url: String,
    pub advice_url: String,
    pub quote_url: String,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self {
            server_host: get_env("SERVER_HOST", "localhost"),
            server_port: get_env("SERVER_PORT", "3000"),
            auth_url: get_env("AUTH_URL", "http://localhost:3001"),
            mood_url: get_env("MOOD_URL", "http://localhost:3002"),
            advice_url: get_env("ADVICE_URL", "http://localhost:3003"),
            quote_url: get_env("QUOTE_URL", "http://localhost:3004"),
        }
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
