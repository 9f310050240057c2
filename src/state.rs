use reqwest::Client;

use crate::config::GatewayConfig;
use crate::services::advice::AdviceService;
use crate::services::auth::AuthService;
use crate::services::mood::MoodService;
use crate::services::quote::QuoteService;

/// Per-process application state: one service client per downstream, all
/// sharing a single reqwest connection pool. Read-only after construction,
/// so request-handling tasks need no synchronization.
#[derive(Clone)]
pub struct AppState {
    pub auth: AuthService,
    pub mood: MoodService,
    pub advice: AdviceService,
    pub quote: QuoteService,
}

impl AppState {
    pub fn new(config: &GatewayConfig) -> Self {
        let http = Client::new();
        Self {
            auth: AuthService::new(&config.auth_url, http.clone()),
            mood: MoodService::new(&config.mood_url, http.clone()),
            advice: AdviceService::new(&config.advice_url, http.clone()),
            quote: QuoteService::new(&config.quote_url, http),
        }
    }
}
