//! Persistence for the three collections the desk works with.
//!
//! Every operation loads the whole collection, changes it and saves it back.
//! Loads never fail: a missing, empty or unreadable source reports `None` and
//! the caller substitutes its default.

pub mod json_file;
pub mod memory;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::label::Label;
use crate::site_config::SiteConfig;
use crate::ticket::Ticket;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[async_trait]
pub trait Storage: Send + Sync {
    async fn load_tickets(&self) -> Option<Vec<Ticket>>;
    async fn save_tickets(&self, tickets: &[Ticket]) -> Result<(), StorageError>;

    async fn load_labels(&self) -> Option<Vec<Label>>;
    async fn save_labels(&self, labels: &[Label]) -> Result<(), StorageError>;

    async fn load_site_config(&self) -> Option<SiteConfig>;
    async fn save_site_config(&self, config: &SiteConfig) -> Result<(), StorageError>;
}
