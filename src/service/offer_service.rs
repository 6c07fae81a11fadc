use async_trait::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::model::offer::{OfferStatus, PropertyOffer};
use crate::repository::offer_repo::OfferRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait OfferService: Send + Sync {
    async fn submit(&self, offer: PropertyOffer) -> Result<PropertyOffer, ServiceError>;
    async fn get(&self, id: ObjectId) -> Result<PropertyOffer, ServiceError>;
    async fn list(&self, page: u64, limit: i64) -> Result<Vec<PropertyOffer>, ServiceError>;
    async fn update_status(
        &self,
        id: ObjectId,
        status: OfferStatus,
    ) -> Result<PropertyOffer, ServiceError>;
}

pub struct OfferServiceImpl {
    pub offer_repo: Arc<dyn OfferRepository>,
}

impl OfferServiceImpl {
    pub fn new(offer_repo: Arc<dyn OfferRepository>) -> Self {
        Self { offer_repo }
    }
}

#[async_trait]
impl OfferService for OfferServiceImpl {
    #[instrument(skip(self, offer), fields(property_id = %offer.property_id, email = %offer.email))]
    async fn submit(&self, offer: PropertyOffer) -> Result<PropertyOffer, ServiceError> {
        info!("Registering offer of {} EUR", offer.offer_price);
        let inserted = self.offer_repo.insert(offer).await?;
        info!("Offer stored successfully");
        Ok(inserted)
    }

    async fn get(&self, id: ObjectId) -> Result<PropertyOffer, ServiceError> {
        self.offer_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No offer with id {}", id)))
    }

    async fn list(&self, page: u64, limit: i64) -> Result<Vec<PropertyOffer>, ServiceError> {
        Ok(self.offer_repo.list(page, limit).await?)
    }

    #[instrument(skip(self))]
    async fn update_status(
        &self,
        id: ObjectId,
        status: OfferStatus,
    ) -> Result<PropertyOffer, ServiceError> {
        info!("Updating offer status to {}", status);
        Ok(self.offer_repo.update_status(id, status).await?)
    }
}
