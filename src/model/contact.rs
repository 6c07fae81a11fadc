use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lead captured from the contact form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub prefix: Option<String>,
    /// What the lead is interested in, e.g. "comprar", "vender", "alquilar"
    #[serde(default)]
    pub interests: Vec<String>,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Active,
    Pending,
}

impl Default for ContactStatus {
    fn default() -> Self {
        ContactStatus::Pending
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactStatus::Active => write!(f, "active"),
            ContactStatus::Pending => write!(f, "pending"),
        }
    }
}

impl FromStr for ContactStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(ContactStatus::Active),
            "pending" => Ok(ContactStatus::Pending),
            other => Err(format!("Invalid contact status: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in ["active", "pending"] {
            let status: ContactStatus = s.parse().unwrap();
            assert_eq!(status.to_string(), s);
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!("archived".parse::<ContactStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&ContactStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
        assert!(serde_json::from_str::<ContactStatus>("\"deleted\"").is_err());
    }
}
