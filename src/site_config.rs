use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::error::Result;
use crate::storage::Storage;

pub const DEFAULT_BG_IMAGE: &str =
    "https://images.unsplash.com/photo-1557683316-973673baf926?q=80&w=2029";
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";
pub const DEFAULT_GLASS_COLOR: &str = "rgba(255, 255, 255, 0.25)";

/// Presentation settings for the customer page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub bg_image: String,
    pub text_color: String,
    pub glass_color: String,
    /// Keys this service does not know about, kept so a save does not drop them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bg_image: DEFAULT_BG_IMAGE.into(),
            text_color: DEFAULT_TEXT_COLOR.into(),
            glass_color: DEFAULT_GLASS_COLOR.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ConfigUpdate {
    pub bg_image: Option<String>,
    pub text_color: Option<String>,
    pub glass_color: Option<String>,
}

impl SiteConfig {
    pub fn apply(&mut self, update: ConfigUpdate) {
        if let Some(v) = update.bg_image {
            self.bg_image = v;
        }
        if let Some(v) = update.text_color {
            self.text_color = v;
        }
        if let Some(v) = update.glass_color {
            self.glass_color = v;
        }
    }
}

#[derive(Clone)]
pub struct ConfigStore {
    storage: Arc<dyn Storage>,
}

impl ConfigStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn get(&self) -> SiteConfig {
        self.storage.load_site_config().await.unwrap_or_default()
    }

    pub async fn update(&self, update: ConfigUpdate) -> Result<SiteConfig> {
        let mut config = self.get().await;
        config.apply(update);
        self.storage.save_site_config(&config).await?;
        info!(bg_image = %config.bg_image, text_color = %config.text_color, "site config updated");
        Ok(config)
    }
}
