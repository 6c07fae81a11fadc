use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Phone dialing-code lookup entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryPrefix {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    /// Dialing code including the leading plus, e.g. "+34"
    pub prefix: String,
    pub country: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}
