use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::visit::{PropertyVisit, VisitStatus};

/// Visit booking form submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVisitRequest {
    #[validate(length(min = 1, max = 64))]
    pub property_id: String,

    #[validate(length(min = 2, max = 200))]
    pub property_address: String,

    #[validate(length(min = 8, max = 10))]
    pub date: String,

    #[validate(length(min = 4, max = 5))]
    pub time: String,

    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 20))]
    pub phone: Option<String>,

    #[validate(length(max = 2000))]
    pub message: Option<String>,
}

impl From<CreateVisitRequest> for PropertyVisit {
    fn from(req: CreateVisitRequest) -> Self {
        PropertyVisit {
            id: None,
            property_id: req.property_id,
            property_address: req.property_address,
            date: req.date,
            time: req.time,
            name: req.name,
            email: req.email,
            phone: req.phone,
            message: req.message,
            status: VisitStatus::default(),
            email_attempts: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// Admin status change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateVisitStatusRequest {
    pub status: VisitStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateVisitRequest {
        CreateVisitRequest {
            property_id: "prop-42".to_string(),
            property_address: "Paseo de la Castellana 89, Madrid".to_string(),
            date: "2026-09-15".to_string(),
            time: "17:30".to_string(),
            name: "Ana López".to_string(),
            email: "ana@example.com".to_string(),
            phone: Some("698765432".to_string()),
            message: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_bad_email_fails() {
        let mut req = valid_request();
        req.email = "ana-at-example".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_out_of_enum_status_rejected() {
        let json = serde_json::json!({ "status": "rescheduled" });
        assert!(serde_json::from_value::<UpdateVisitStatusRequest>(json).is_err());
    }
}
