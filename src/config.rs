use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    JsonFile,
    /// Nothing is written to disk; data is lost on restart.
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Directory holding the ticket, label and presentation files.
    pub data_dir: PathBuf,
    pub storage: StorageKind,
    pub admin_user: String,
    pub admin_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let port = var("STUDIO_DESK_PORT")
            .unwrap_or_else(|| "5000".into())
            .parse::<u16>()
            .map_err(|e| format!("invalid STUDIO_DESK_PORT: {e}"))?;

        let data_dir = var("STUDIO_DESK_DATA_DIR").unwrap_or_else(|| ".".into());
        if data_dir.trim().is_empty() {
            return Err("STUDIO_DESK_DATA_DIR must not be empty".into());
        }

        let storage = match var("STUDIO_DESK_STORAGE").as_deref() {
            None | Some("json") => StorageKind::JsonFile,
            Some("memory") => StorageKind::Memory,
            Some(other) => return Err(format!("invalid STUDIO_DESK_STORAGE: {other}")),
        };

        Ok(Self {
            host: var("STUDIO_DESK_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            data_dir: PathBuf::from(data_dir),
            storage,
            admin_user: var("STUDIO_DESK_ADMIN_USER").unwrap_or_else(|| "admin".into()),
            admin_password: var("STUDIO_DESK_ADMIN_PASSWORD")
                .unwrap_or_else(|| "studio123".into()),
        })
    }
}
