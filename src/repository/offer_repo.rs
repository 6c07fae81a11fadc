use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::{options::FindOptions, Collection, Database};

use crate::model::offer::{OfferStatus, PropertyOffer};
use crate::repository::now_rfc3339;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait OfferRepository: Send + Sync {
    async fn insert(&self, offer: PropertyOffer) -> RepositoryResult<PropertyOffer>;
    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<PropertyOffer>>;
    async fn list(&self, page: u64, limit: i64) -> RepositoryResult<Vec<PropertyOffer>>;
    async fn update_status(
        &self,
        id: ObjectId,
        status: OfferStatus,
    ) -> RepositoryResult<PropertyOffer>;
}

pub struct MongoOfferRepository {
    collection: Collection<PropertyOffer>,
}

impl MongoOfferRepository {
    pub fn new(db: &Database) -> Self {
        MongoOfferRepository {
            collection: db.collection::<PropertyOffer>("property_offers"),
        }
    }
}

#[async_trait]
impl OfferRepository for MongoOfferRepository {
    async fn insert(&self, mut offer: PropertyOffer) -> RepositoryResult<PropertyOffer> {
        offer.id = Some(ObjectId::new());
        let now = now_rfc3339();
        offer.created_at = Some(now.clone());
        offer.updated_at = Some(now);
        self.collection
            .insert_one(offer.clone(), None)
            .await
            .map_err(RepositoryError::from)?;
        Ok(offer)
    }

    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<PropertyOffer>> {
        let filter = doc! { "_id": id };
        let offer = self
            .collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to find offer: {}", e)))?;
        Ok(offer)
    }

    async fn list(&self, page: u64, limit: i64) -> RepositoryResult<Vec<PropertyOffer>> {
        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .skip(page.saturating_sub(1) * limit.max(0) as u64)
            .limit(limit)
            .build();
        let cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list offers: {}", e)))?;
        let offers = cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to read offers: {}", e)))?;
        Ok(offers)
    }

    async fn update_status(
        &self,
        id: ObjectId,
        status: OfferStatus,
    ) -> RepositoryResult<PropertyOffer> {
        let filter = doc! { "_id": id };
        let update = doc! { "$set": {
            "status": status.to_string(),
            "updated_at": now_rfc3339(),
        }};
        let result = self
            .collection
            .update_one(filter, update, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to update offer: {}", e)))?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!(
                "No offer found for ID: {}",
                id
            )));
        }
        self.find_by_id(&id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(format!("No offer found for ID: {}", id)))
    }
}
