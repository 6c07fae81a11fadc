use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Buyer's offer on a listed property
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyOffer {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub property_id: String,
    pub property_address: String,
    pub offer_price: f64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: OfferStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    Pending,
    Accepted,
    Rejected,
    Negotiating,
}

impl Default for OfferStatus {
    fn default() -> Self {
        OfferStatus::Pending
    }
}

impl fmt::Display for OfferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OfferStatus::Pending => "pending",
            OfferStatus::Accepted => "accepted",
            OfferStatus::Rejected => "rejected",
            OfferStatus::Negotiating => "negotiating",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for OfferStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OfferStatus::Pending),
            "accepted" => Ok(OfferStatus::Accepted),
            "rejected" => Ok(OfferStatus::Rejected),
            "negotiating" => Ok(OfferStatus::Negotiating),
            other => Err(format!("Invalid offer status: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for s in ["pending", "accepted", "rejected", "negotiating"] {
            let status: OfferStatus = s.parse().unwrap();
            assert_eq!(status.to_string(), s);
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!("withdrawn".parse::<OfferStatus>().is_err());
    }
}
