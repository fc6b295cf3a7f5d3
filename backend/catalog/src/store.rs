use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::Client;
use tokio::sync::{broadcast, watch};
use tracing::warn;

use crate::{error::LoadError, models::GameRecord, remote::load_with};

const EVENT_CAPACITY: usize = 16;

/// One complete, published catalog.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub records: Arc<Vec<GameRecord>>,
    pub loaded_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogEvent {
    Loaded { count: usize },
    Failed,
}

pub struct Catalog {
    snapshot: watch::Sender<Snapshot>,
    events: broadcast::Sender<CatalogEvent>,
}

impl Catalog {
    pub fn new() -> Self {
        let (snapshot, _) = watch::channel(Snapshot::default());
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self { snapshot, events }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshot.subscribe()
    }

    pub fn events(&self) -> broadcast::Receiver<CatalogEvent> {
        self.events.subscribe()
    }

    /// Publishes `records` as the whole catalog.
    pub fn replace(&self, records: Vec<GameRecord>) -> usize {
        let count = records.len();

        self.snapshot.send_replace(Snapshot {
            records: Arc::new(records),
            loaded_at: Some(Utc::now()),
        });

        // no listeners is fine
        let _ = self.events.send(CatalogEvent::Loaded { count });

        count
    }

    /// Runs one load cycle. On failure the current snapshot stays as is.
    pub async fn refresh(&self, client: &Client, url: &str) -> Result<usize, LoadError> {
        match load_with(client, url).await {
            Ok(records) => Ok(self.replace(records)),
            Err(e) => {
                warn!("Failed to load games from {url}: {e}");
                let _ = self.events.send(CatalogEvent::Failed);

                Err(e)
            }
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
