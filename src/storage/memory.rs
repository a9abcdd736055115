use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Storage, StorageError};
use crate::label::Label;
use crate::site_config::SiteConfig;
use crate::ticket::Ticket;

/// Keeps the collections in process memory. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStorage {
    tickets: Mutex<Option<Vec<Ticket>>>,
    labels: Mutex<Option<Vec<Label>>>,
    site_config: Mutex<Option<SiteConfig>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load_tickets(&self) -> Option<Vec<Ticket>> {
        self.tickets.lock().await.clone()
    }

    async fn save_tickets(&self, tickets: &[Ticket]) -> Result<(), StorageError> {
        *self.tickets.lock().await = Some(tickets.to_vec());
        Ok(())
    }

    async fn load_labels(&self) -> Option<Vec<Label>> {
        self.labels.lock().await.clone()
    }

    async fn save_labels(&self, labels: &[Label]) -> Result<(), StorageError> {
        *self.labels.lock().await = Some(labels.to_vec());
        Ok(())
    }

    async fn load_site_config(&self) -> Option<SiteConfig> {
        self.site_config.lock().await.clone()
    }

    async fn save_site_config(&self, config: &SiteConfig) -> Result<(), StorageError> {
        *self.site_config.lock().await = Some(config.clone());
        Ok(())
    }
}
