use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::contact::{Contact, ContactStatus};

/// Contact form submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 20))]
    pub phone: Option<String>,

    #[validate(length(min = 2, max = 6))]
    pub prefix: Option<String>,

    #[serde(default)]
    pub interests: Vec<String>,

    #[validate(length(min = 1, max = 2000))]
    pub message: String,
}

impl From<CreateContactRequest> for Contact {
    fn from(req: CreateContactRequest) -> Self {
        Contact {
            id: None,
            name: req.name,
            email: req.email,
            phone: req.phone,
            prefix: req.prefix,
            interests: req.interests,
            message: req.message,
            status: ContactStatus::default(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// Admin status change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateContactStatusRequest {
    pub status: ContactStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateContactRequest {
        CreateContactRequest {
            name: "Laura García".to_string(),
            email: "laura@example.com".to_string(),
            phone: Some("612345678".to_string()),
            prefix: Some("+34".to_string()),
            interests: vec!["comprar".to_string()],
            message: "Me interesa el piso de Chamberí".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_bad_email_fails() {
        let mut req = valid_request();
        req.email = "not-an-email".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_empty_message_fails() {
        let mut req = valid_request();
        req.message = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_missing_email_fails_deserialization() {
        let json = serde_json::json!({
            "name": "Laura García",
            "message": "Hola"
        });
        assert!(serde_json::from_value::<CreateContactRequest>(json).is_err());
    }
}
