use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::country_prefix::CountryPrefix;

/// Dialing-code entry creation (admin only)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePrefixRequest {
    #[validate(length(min = 2, max = 6))]
    pub prefix: String,

    #[validate(length(min = 2, max = 100))]
    pub country: String,
}

impl From<CreatePrefixRequest> for CountryPrefix {
    fn from(req: CreatePrefixRequest) -> Self {
        CountryPrefix {
            id: None,
            prefix: req.prefix,
            country: req.country,
            created_at: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_prefix_passes() {
        let req = CreatePrefixRequest {
            prefix: "+34".to_string(),
            country: "España".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_short_prefix_fails() {
        let req = CreatePrefixRequest {
            prefix: "+".to_string(),
            country: "España".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
