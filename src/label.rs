use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Shown to customers in place of any label outside the public set.
pub const PLACEHOLDER: &str = "Đang xử lý";

/// Labels customers are allowed to see verbatim. They can never be removed
/// from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicLabel {
    New,
    Processed,
    AwaitingReply,
    Completed,
}

impl PublicLabel {
    pub const ALL: [PublicLabel; 4] = [
        PublicLabel::New,
        PublicLabel::Processed,
        PublicLabel::AwaitingReply,
        PublicLabel::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PublicLabel::New => "Mới",
            PublicLabel::Processed => "Đã xử lý",
            PublicLabel::AwaitingReply => "Chờ phản hồi",
            PublicLabel::Completed => "Hoàn thành",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Public(PublicLabel),
    /// Staff-only label, masked when shown to a customer.
    Internal(String),
}

impl Label {
    pub fn new(name: &str) -> Self {
        match PublicLabel::from_name(name) {
            Some(public) => Label::Public(public),
            None => Label::Internal(name.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Label::Public(public) => public.as_str(),
            Label::Internal(name) => name,
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Label::Public(_))
    }

    pub fn customer_view(&self) -> Label {
        match self {
            Label::Public(public) => Label::Public(*public),
            Label::Internal(_) => Label::Internal(PLACEHOLDER.to_string()),
        }
    }

    /// The registry used before any label has been added.
    pub fn defaults() -> Vec<Label> {
        PublicLabel::ALL.into_iter().map(Label::Public).collect()
    }
}

impl Default for Label {
    fn default() -> Self {
        Label::Public(PublicLabel::New)
    }
}

impl From<PublicLabel> for Label {
    fn from(public: PublicLabel) -> Self {
        Label::Public(public)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Label::new(&name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_names_parse_to_public() {
        for public in PublicLabel::ALL {
            assert_eq!(Label::new(public.as_str()), Label::Public(public));
        }
    }

    #[test]
    fn other_names_are_internal() {
        assert_eq!(Label::new("Chờ in"), Label::Internal("Chờ in".into()));
        assert_eq!(Label::new("mới"), Label::Internal("mới".into()));
        assert_eq!(Label::new(""), Label::Internal(String::new()));
    }

    #[test]
    fn customer_view_keeps_public() {
        let label = Label::Public(PublicLabel::Completed);
        assert_eq!(label.customer_view().as_str(), "Hoàn thành");
    }

    #[test]
    fn customer_view_masks_internal() {
        let label = Label::new("Khách khó tính");
        assert_eq!(label.customer_view().as_str(), PLACEHOLDER);
        assert_eq!(label.as_str(), "Khách khó tính");
    }

    #[test]
    fn default_is_new() {
        assert_eq!(Label::default().as_str(), "Mới");
    }

    #[test]
    fn serializes_as_plain_string() {
        let labels = vec![Label::default(), Label::new("Gấp")];
        let json = serde_json::to_string(&labels).unwrap();
        assert_eq!(json, r#"["Mới","Gấp"]"#);
        let back: Vec<Label> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, labels);
    }

    #[test]
    fn defaults_are_the_public_set_in_order() {
        let names: Vec<_> = Label::defaults().iter().map(|l| l.to_string()).collect();
        assert_eq!(names, ["Mới", "Đã xử lý", "Chờ phản hồi", "Hoàn thành"]);
    }
}
