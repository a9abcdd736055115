pub mod admin;
pub mod client;
pub mod health;
pub mod pages;

use serde::Deserialize;

#[derive(Deserialize)]
pub struct LinkRequest {
    pub image_link: Option<String>,
}

impl LinkRequest {
    pub fn link(&self) -> &str {
        self.image_link.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use crate::auth::StaticCredentials;
    use crate::state::AppState;
    use crate::storage::memory::MemoryStorage;

    pub fn state() -> AppState {
        AppState::with_parts(
            Arc::new(MemoryStorage::new()),
            Arc::new(StaticCredentials::new("admin", "studio123")),
        )
    }
}
