// src/state.rs
use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;
use crate::services::backend::BackendClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub backend: BackendClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let backend = BackendClient::new(
            Client::new(),
            config.backend_base_url.clone(),
            config.backend_timeout,
        );
        Self { config, backend }
    }
}
