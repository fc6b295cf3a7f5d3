use std::sync::Arc;

use catalog::Catalog;
use reqwest::Client;
use tracing::info;

use super::config::Config;

pub struct State {
    pub config: Config,
    pub catalog: Catalog,
    pub client: Client,
}

impl State {
    /// Builds the state and runs the first load. A failed first load leaves the catalog empty.
    pub async fn new(config: Config) -> Arc<Self> {
        let state = Self::with_config(config);

        if let Ok(count) = state.reload().await {
            info!("Initial catalog holds {count} games");
        }

        state
    }

    pub fn with_config(config: Config) -> Arc<Self> {
        Arc::new(Self {
            config,
            catalog: Catalog::new(),
            client: Client::new(),
        })
    }

    pub async fn reload(&self) -> Result<usize, catalog::LoadError> {
        self.catalog
            .refresh(&self.client, &self.config.catalog_url)
            .await
    }
}
