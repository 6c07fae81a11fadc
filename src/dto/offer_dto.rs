use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::offer::{OfferStatus, PropertyOffer};

/// Offer form submission
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateOfferRequest {
    #[validate(length(min = 1, max = 64))]
    pub property_id: String,

    #[validate(length(min = 2, max = 200))]
    pub property_address: String,

    #[validate(range(min = 1.0))]
    pub offer_price: f64,

    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6, max = 20))]
    pub phone: Option<String>,
}

impl From<CreateOfferRequest> for PropertyOffer {
    fn from(req: CreateOfferRequest) -> Self {
        PropertyOffer {
            id: None,
            property_id: req.property_id,
            property_address: req.property_address,
            offer_price: req.offer_price,
            name: req.name,
            email: req.email,
            phone: req.phone,
            status: OfferStatus::default(),
            created_at: None,
            updated_at: None,
        }
    }
}

/// Admin status change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOfferStatusRequest {
    pub status: OfferStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateOfferRequest {
        CreateOfferRequest {
            property_id: "prop-17".to_string(),
            property_address: "Calle de Serrano 21, Madrid".to_string(),
            offer_price: 350000.0,
            name: "Carlos Ruiz".to_string(),
            email: "carlos@example.com".to_string(),
            phone: None,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_zero_price_fails() {
        let mut req = valid_request();
        req.offer_price = 0.0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_unknown_status_rejected() {
        let json = serde_json::json!({ "status": "withdrawn" });
        assert!(serde_json::from_value::<UpdateOfferStatusRequest>(json).is_err());
    }

    #[test]
    fn test_known_status_accepted() {
        let json = serde_json::json!({ "status": "negotiating" });
        let req: UpdateOfferStatusRequest = serde_json::from_value(json).unwrap();
        assert_eq!(req.status, OfferStatus::Negotiating);
    }
}
