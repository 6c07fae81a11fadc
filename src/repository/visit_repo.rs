use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::{options::FindOptions, Collection, Database};

use crate::model::visit::{EmailAttempt, PropertyVisit, VisitStatus};
use crate::repository::now_rfc3339;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait VisitRepository: Send + Sync {
    async fn insert(&self, visit: PropertyVisit) -> RepositoryResult<PropertyVisit>;
    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<PropertyVisit>>;
    async fn list(&self, page: u64, limit: i64) -> RepositoryResult<Vec<PropertyVisit>>;
    async fn update_status(
        &self,
        id: ObjectId,
        status: VisitStatus,
    ) -> RepositoryResult<PropertyVisit>;
    /// Append one delivery attempt to the visit's email log
    async fn record_email_attempt(
        &self,
        id: ObjectId,
        attempt: EmailAttempt,
    ) -> RepositoryResult<()>;
}

pub struct MongoVisitRepository {
    collection: Collection<PropertyVisit>,
}

impl MongoVisitRepository {
    pub fn new(db: &Database) -> Self {
        MongoVisitRepository {
            collection: db.collection::<PropertyVisit>("property_visits"),
        }
    }
}

#[async_trait]
impl VisitRepository for MongoVisitRepository {
    async fn insert(&self, mut visit: PropertyVisit) -> RepositoryResult<PropertyVisit> {
        visit.id = Some(ObjectId::new());
        let now = now_rfc3339();
        visit.created_at = Some(now.clone());
        visit.updated_at = Some(now);
        self.collection
            .insert_one(visit.clone(), None)
            .await
            .map_err(RepositoryError::from)?;
        Ok(visit)
    }

    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<PropertyVisit>> {
        let filter = doc! { "_id": id };
        let visit = self
            .collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to find visit: {}", e)))?;
        Ok(visit)
    }

    async fn list(&self, page: u64, limit: i64) -> RepositoryResult<Vec<PropertyVisit>> {
        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .skip(page.saturating_sub(1) * limit.max(0) as u64)
            .limit(limit)
            .build();
        let cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list visits: {}", e)))?;
        let visits = cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to read visits: {}", e)))?;
        Ok(visits)
    }

    async fn update_status(
        &self,
        id: ObjectId,
        status: VisitStatus,
    ) -> RepositoryResult<PropertyVisit> {
        let filter = doc! { "_id": id };
        let update = doc! { "$set": {
            "status": status.to_string(),
            "updated_at": now_rfc3339(),
        }};
        let result = self
            .collection
            .update_one(filter, update, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to update visit: {}", e)))?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!(
                "No visit found for ID: {}",
                id
            )));
        }
        self.find_by_id(&id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(format!("No visit found for ID: {}", id)))
    }

    async fn record_email_attempt(
        &self,
        id: ObjectId,
        attempt: EmailAttempt,
    ) -> RepositoryResult<()> {
        let attempt_doc = bson::to_document(&attempt)
            .map_err(|e| RepositoryError::serialization(format!("Failed to serialize attempt: {}", e)))?;
        let filter = doc! { "_id": id };
        let update = doc! {
            "$push": { "email_attempts": attempt_doc },
            "$set": { "updated_at": now_rfc3339() },
        };
        let result = self
            .collection
            .update_one(filter, update, None)
            .await
            .map_err(|e| {
                RepositoryError::database(format!("Failed to record email attempt: {}", e))
            })?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!(
                "No visit found for ID: {}",
                id
            )));
        }
        Ok(())
    }
}
