use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::label::Label;
use crate::label_registry::LabelRegistry;
use crate::storage::Storage;

const AVATAR_POOL: u32 = 5;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One customer submission. The image link is the key for every lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticket {
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub customer_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub shoot_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image_link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub note: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label: Label,
    #[serde(deserialize_with = "null_as_default")]
    pub avatar: String,
    #[serde(deserialize_with = "null_as_default")]
    pub result_link: String,
    #[serde(deserialize_with = "null_as_default")]
    pub result_content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
}

/// Older files store `null` where a field was never filled in.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Debug, Default, Deserialize)]
pub struct NewTicket {
    pub customer_name: Option<String>,
    pub shoot_date: Option<String>,
    pub image_link: Option<String>,
    pub note: Option<String>,
}

/// Staff edit. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct TicketUpdate {
    pub customer_name: Option<String>,
    pub note: Option<String>,
    pub label: Option<Label>,
    pub result_link: Option<String>,
    pub result_content: Option<String>,
}

impl TicketUpdate {
    fn apply(self, ticket: &mut Ticket) {
        if let Some(v) = self.customer_name {
            ticket.customer_name = v;
        }
        if let Some(v) = self.note {
            ticket.note = v;
        }
        if let Some(v) = self.label {
            ticket.label = v;
        }
        if let Some(v) = self.result_link {
            ticket.result_link = v;
        }
        if let Some(v) = self.result_content {
            ticket.result_content = v;
        }
    }
}

/// Customer edit: only the name and the note.
#[derive(Debug, Default, Deserialize)]
pub struct OwnUpdate {
    pub customer_name: Option<String>,
    pub note: Option<String>,
}

impl From<OwnUpdate> for TicketUpdate {
    fn from(own: OwnUpdate) -> Self {
        TicketUpdate {
            customer_name: own.customer_name,
            note: own.note,
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AdminSnapshot {
    pub messages: Vec<Ticket>,
    pub labels: Vec<Label>,
}

pub fn pick_avatar<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("/static/avatars/{}.png", rng.gen_range(1..=AVATAR_POOL))
}

fn present(value: Option<String>, field: &'static str) -> Result<String> {
    value
        .map(|v| v.trim().to_string())
        .ok_or(Error::MissingField(field))
}

fn link_key(link: &str) -> Result<&str> {
    let link = link.trim();
    if link.is_empty() {
        return Err(Error::MissingField("image_link"));
    }
    Ok(link)
}

#[derive(Clone)]
pub struct TicketStore {
    storage: Arc<dyn Storage>,
}

impl TicketStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    async fn load(&self) -> Vec<Ticket> {
        self.storage.load_tickets().await.unwrap_or_default()
    }

    pub async fn submit(&self, new: NewTicket) -> Result<Ticket> {
        let image_link = link_key(new.image_link.as_deref().unwrap_or_default())?.to_string();
        let customer_name = present(new.customer_name, "customer_name")?;
        let shoot_date = present(new.shoot_date, "shoot_date")?;
        let note = new.note.as_deref().map(str::trim).unwrap_or_default().to_string();

        let mut tickets = self.load().await;
        if tickets.iter().any(|t| t.image_link == image_link) {
            return Err(Error::DuplicateLink);
        }

        let id = tickets
            .iter()
            .map(|t| t.id)
            .max()
            .unwrap_or(0)
            .saturating_add(1);
        let avatar = pick_avatar(&mut rand::thread_rng());
        let ticket = Ticket {
            id,
            customer_name,
            shoot_date,
            image_link,
            note,
            status: "new".into(),
            label: Label::default(),
            avatar,
            result_link: String::new(),
            result_content: String::new(),
            created_at: chrono::Local::now().format(TIMESTAMP_FORMAT).to_string(),
        };

        tickets.push(ticket.clone());
        self.storage.save_tickets(&tickets).await?;
        info!(id, image_link = %ticket.image_link, "ticket submitted");
        Ok(ticket)
    }

    /// Customer lookup. Internal labels are masked in the returned copy.
    pub async fn check(&self, image_link: &str) -> Result<Ticket> {
        let link = link_key(image_link)?;
        let tickets = self.load().await;
        let mut ticket = tickets
            .into_iter()
            .find(|t| t.image_link == link)
            .ok_or(Error::NotFound("Không tìm thấy thông tin."))?;
        ticket.label = ticket.label.customer_view();
        Ok(ticket)
    }

    pub async fn update(&self, image_link: &str, update: TicketUpdate) -> Result<()> {
        if update
            .label
            .as_ref()
            .is_some_and(|l| l.as_str().trim().is_empty())
        {
            return Err(Error::MissingField("label"));
        }
        self.apply_update(image_link, update, "").await
    }

    pub async fn update_own(&self, image_link: &str, update: OwnUpdate) -> Result<()> {
        self.apply_update(
            image_link,
            update.into(),
            "Không tìm thấy dữ liệu để cập nhật",
        )
        .await
    }

    async fn apply_update(
        &self,
        image_link: &str,
        update: TicketUpdate,
        not_found: &'static str,
    ) -> Result<()> {
        let link = link_key(image_link)?;
        let mut tickets = self.load().await;
        let ticket = tickets
            .iter_mut()
            .find(|t| t.image_link == link)
            .ok_or(Error::NotFound(not_found))?;
        update.apply(ticket);
        let label = ticket.label.clone();

        self.storage.save_tickets(&tickets).await?;
        info!(image_link = %link, %label, "ticket updated");
        Ok(())
    }

    pub async fn delete(&self, image_link: &str) -> Result<()> {
        let link = link_key(image_link)?;
        let mut tickets = self.load().await;
        let pos = tickets
            .iter()
            .position(|t| t.image_link == link)
            .ok_or(Error::NotFound("Không tìm thấy dữ liệu để xóa"))?;
        tickets.remove(pos);

        self.storage.save_tickets(&tickets).await?;
        info!(image_link = %link, "ticket deleted");
        Ok(())
    }

    /// Staff view: every ticket with its real label, plus the registry.
    pub async fn list_all(&self, labels: &LabelRegistry) -> AdminSnapshot {
        AdminSnapshot {
            messages: self.load().await,
            labels: labels.get().await,
        }
    }
}
