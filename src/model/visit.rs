use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scheduled viewing request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyVisit {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub property_id: String,
    pub property_address: String,
    /// Requested date, ISO 8601 calendar date
    pub date: String,
    /// Requested time of day, e.g. "17:30"
    pub time: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub status: VisitStatus,
    /// One entry per confirmation-email delivery attempt
    #[serde(default)]
    pub email_attempts: Vec<EmailAttempt>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Record of a single confirmation-email delivery attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailAttempt {
    /// RFC3339 timestamp of the attempt
    pub at: String,
    pub success: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisitStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl Default for VisitStatus {
    fn default() -> Self {
        VisitStatus::Pending
    }
}

impl fmt::Display for VisitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VisitStatus::Pending => "pending",
            VisitStatus::Confirmed => "confirmed",
            VisitStatus::Cancelled => "cancelled",
            VisitStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for VisitStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(VisitStatus::Pending),
            "confirmed" => Ok(VisitStatus::Confirmed),
            "cancelled" => Ok(VisitStatus::Cancelled),
            "completed" => Ok(VisitStatus::Completed),
            other => Err(format!("Invalid visit status: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in ["pending", "confirmed", "cancelled", "completed"] {
            let status: VisitStatus = s.parse().unwrap();
            assert_eq!(status.to_string(), s);
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!("rescheduled".parse::<VisitStatus>().is_err());
    }

    #[test]
    fn test_visit_deserialization_defaults_attempts() {
        let json = serde_json::json!({
            "_id": null,
            "property_id": "123",
            "property_address": "Calle Alcalá 1",
            "date": "2026-09-15",
            "time": "17:30",
            "name": "Ana",
            "email": "ana@example.com",
            "phone": null,
            "message": null,
            "status": "pending",
            "created_at": null,
            "updated_at": null
        });
        let visit: PropertyVisit = serde_json::from_value(json).unwrap();
        assert!(visit.email_attempts.is_empty());
        assert_eq!(visit.status, VisitStatus::Pending);
    }
}
