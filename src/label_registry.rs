use std::sync::Arc;

use tracing::info;

use crate::error::{Error, Result};
use crate::label::Label;
use crate::storage::Storage;

/// Ordered list of labels staff can put on tickets. The public labels are
/// always present; staff may add and remove their own.
#[derive(Clone)]
pub struct LabelRegistry {
    storage: Arc<dyn Storage>,
}

fn label_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::MissingField("label"));
    }
    Ok(name)
}

impl LabelRegistry {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn get(&self) -> Vec<Label> {
        self.storage
            .load_labels()
            .await
            .unwrap_or_else(Label::defaults)
    }

    /// Appends `name` unless it is already registered.
    pub async fn add(&self, name: &str) -> Result<Vec<Label>> {
        let label = Label::new(label_name(name)?);
        let mut labels = self.get().await;
        if !labels.contains(&label) {
            labels.push(label.clone());
        }
        self.storage.save_labels(&labels).await?;
        info!(%label, "label added");
        Ok(labels)
    }

    pub async fn delete(&self, name: &str) -> Result<Vec<Label>> {
        let label = Label::new(label_name(name)?);
        if label.is_public() {
            return Err(Error::ProtectedLabel);
        }
        let mut labels = self.get().await;
        let pos = labels
            .iter()
            .position(|l| *l == label)
            .ok_or(Error::UnknownLabel)?;
        labels.remove(pos);

        self.storage.save_labels(&labels).await?;
        info!(%label, "label deleted");
        Ok(labels)
    }
}
