use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::{Storage, StorageError};
use crate::label::Label;
use crate::site_config::SiteConfig;
use crate::ticket::Ticket;

pub const TICKETS_FILE: &str = "database.txt";
pub const LABELS_FILE: &str = "labels.json";
pub const CONFIG_FILE: &str = "config.json";

/// One pretty-printed UTF-8 JSON file per collection, rewritten whole on save.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }
}

async fn load<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return None,
        Err(e) => {
            warn!(path = %path.display(), "unreadable data file, using default: {e}");
            return None;
        }
    };
    if content.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = %path.display(), "corrupt data file, using default: {e}");
            None
        }
    }
}

async fn save<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StorageError> {
    let serialized = serde_json::to_string_pretty(value)?;
    let io_err = |source: std::io::Error| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }
    tokio::fs::write(path, serialized).await.map_err(io_err)
}

#[async_trait]
impl Storage for JsonFileStorage {
    async fn load_tickets(&self) -> Option<Vec<Ticket>> {
        load(&self.path(TICKETS_FILE)).await
    }

    async fn save_tickets(&self, tickets: &[Ticket]) -> Result<(), StorageError> {
        save(&self.path(TICKETS_FILE), tickets).await
    }

    async fn load_labels(&self) -> Option<Vec<Label>> {
        load(&self.path(LABELS_FILE)).await
    }

    async fn save_labels(&self, labels: &[Label]) -> Result<(), StorageError> {
        save(&self.path(LABELS_FILE), labels).await
    }

    async fn load_site_config(&self) -> Option<SiteConfig> {
        load(&self.path(CONFIG_FILE)).await
    }

    async fn save_site_config(&self, config: &SiteConfig) -> Result<(), StorageError> {
        save(&self.path(CONFIG_FILE), config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::PublicLabel;

    fn sample_ticket() -> Ticket {
        Ticket {
            id: 1,
            customer_name: "Anna".into(),
            shoot_date: "2024-01-01".into(),
            image_link: "http://x/1.jpg".into(),
            note: "ảnh cưới".into(),
            status: "new".into(),
            label: Label::new("Chờ in"),
            avatar: "/static/avatars/3.png".into(),
            result_link: String::new(),
            result_content: String::new(),
            created_at: "2024-01-01 10:00:00".into(),
        }
    }

    #[tokio::test]
    async fn missing_files_load_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        assert!(storage.load_tickets().await.is_none());
        assert!(storage.load_labels().await.is_none());
        assert!(storage.load_site_config().await.is_none());
    }

    #[tokio::test]
    async fn tickets_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        let tickets = vec![sample_ticket()];
        storage.save_tickets(&tickets).await.unwrap();
        assert_eq!(storage.load_tickets().await, Some(tickets));
    }

    #[tokio::test]
    async fn labels_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        let labels = vec![Label::Public(PublicLabel::Completed), Label::new("VIP")];
        storage.save_labels(&labels).await.unwrap();
        assert_eq!(storage.load_labels().await, Some(labels));
    }

    #[tokio::test]
    async fn site_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        let mut config = SiteConfig::default();
        config.text_color = "#111".into();
        storage.save_site_config(&config).await.unwrap();
        assert_eq!(storage.load_site_config().await, Some(config));
    }

    #[tokio::test]
    async fn writes_readable_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        storage.save_labels(&Label::defaults()).await.unwrap();
        let raw = std::fs::read_to_string(dir.path().join(LABELS_FILE)).unwrap();
        assert!(raw.contains("Hoàn thành"));
        assert!(raw.contains('\n'));
    }

    #[tokio::test]
    async fn corrupt_or_empty_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(TICKETS_FILE), "[{\"id\": 1,").unwrap();
        std::fs::write(dir.path().join(LABELS_FILE), "").unwrap();
        let storage = JsonFileStorage::new(dir.path());
        assert!(storage.load_tickets().await.is_none());
        assert!(storage.load_labels().await.is_none());
    }

    #[tokio::test]
    async fn records_with_null_fields_survive_a_submit() {
        use crate::ticket::{NewTicket, TicketStore};
        use std::sync::Arc;

        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(TICKETS_FILE),
            r#"[
  {"id": 1, "customer_name": "Anna", "shoot_date": "2024-01-01",
   "image_link": "http://x/1.jpg", "note": "", "status": "new", "label": "Mới",
   "avatar": "/static/avatars/1.png", "result_link": "", "result_content": "",
   "created_at": "2024-01-01 09:00:00"},
  {"id": 2, "customer_name": "Bình", "shoot_date": "2024-01-02",
   "image_link": "http://x/2.jpg", "note": null, "status": "new", "label": "Mới",
   "avatar": "/static/avatars/2.png", "result_link": "", "result_content": "",
   "created_at": "2024-01-02 09:00:00"}
]"#,
        )
        .unwrap();
        let storage = Arc::new(JsonFileStorage::new(dir.path()));

        let loaded = storage.load_tickets().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].note, "");

        let store = TicketStore::new(storage.clone());
        let new = NewTicket {
            customer_name: Some("Chi".into()),
            shoot_date: Some("2024-01-03".into()),
            image_link: Some("http://x/3.jpg".into()),
            note: None,
        };
        let ticket = store.submit(new).await.unwrap();
        assert_eq!(ticket.id, 3);
        assert_eq!(storage.load_tickets().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn save_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested/data"));
        storage.save_labels(&Label::defaults()).await.unwrap();
        assert!(dir.path().join("nested/data").join(LABELS_FILE).exists());
    }
}
