use std::sync::Arc;

use crate::auth::{AuthProvider, StaticCredentials};
use crate::config::{Config, StorageKind};
use crate::label_registry::LabelRegistry;
use crate::site_config::ConfigStore;
use crate::storage::json_file::JsonFileStorage;
use crate::storage::memory::MemoryStorage;
use crate::storage::Storage;
use crate::ticket::TicketStore;

#[derive(Clone)]
pub struct AppState {
    pub tickets: TicketStore,
    pub labels: LabelRegistry,
    pub site_config: ConfigStore,
    pub auth: Arc<dyn AuthProvider>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let storage: Arc<dyn Storage> = match config.storage {
            StorageKind::JsonFile => Arc::new(JsonFileStorage::new(config.data_dir.clone())),
            StorageKind::Memory => Arc::new(MemoryStorage::new()),
        };
        let auth = Arc::new(StaticCredentials::new(
            config.admin_user.clone(),
            config.admin_password.clone(),
        ));
        Self::with_parts(storage, auth)
    }

    pub fn with_parts(storage: Arc<dyn Storage>, auth: Arc<dyn AuthProvider>) -> Self {
        Self {
            tickets: TicketStore::new(storage.clone()),
            labels: LabelRegistry::new(storage.clone()),
            site_config: ConfigStore::new(storage),
            auth,
        }
    }
}
