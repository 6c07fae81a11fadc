use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::{options::FindOptions, Collection, Database};

use crate::model::contact::{Contact, ContactStatus};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::repository::now_rfc3339;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn insert(&self, contact: Contact) -> RepositoryResult<Contact>;
    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<Contact>>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Contact>>;
    async fn list(&self, page: u64, limit: i64) -> RepositoryResult<Vec<Contact>>;
    async fn update_status(&self, id: ObjectId, status: ContactStatus) -> RepositoryResult<Contact>;
}

pub struct MongoContactRepository {
    collection: Collection<Contact>,
}

impl MongoContactRepository {
    pub fn new(db: &Database) -> Self {
        MongoContactRepository {
            collection: db.collection::<Contact>("contacts"),
        }
    }
}

#[async_trait]
impl ContactRepository for MongoContactRepository {
    async fn insert(&self, mut contact: Contact) -> RepositoryResult<Contact> {
        contact.id = Some(ObjectId::new());
        let now = now_rfc3339();
        contact.created_at = Some(now.clone());
        contact.updated_at = Some(now);
        self.collection
            .insert_one(contact.clone(), None)
            .await
            .map_err(RepositoryError::from)?;
        Ok(contact)
    }

    async fn find_by_id(&self, id: &ObjectId) -> RepositoryResult<Option<Contact>> {
        let filter = doc! { "_id": id };
        let contact = self
            .collection
            .find_one(filter, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to find contact: {}", e)))?;
        Ok(contact)
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Contact>> {
        let filter = doc! { "email": email };
        let contact = self.collection.find_one(filter, None).await.map_err(|e| {
            RepositoryError::database(format!("Failed to find contact by email: {}", e))
        })?;
        Ok(contact)
    }

    async fn list(&self, page: u64, limit: i64) -> RepositoryResult<Vec<Contact>> {
        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .skip(page.saturating_sub(1) * limit.max(0) as u64)
            .limit(limit)
            .build();
        let cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list contacts: {}", e)))?;
        let contacts = cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to read contacts: {}", e)))?;
        Ok(contacts)
    }

    async fn update_status(
        &self,
        id: ObjectId,
        status: ContactStatus,
    ) -> RepositoryResult<Contact> {
        let filter = doc! { "_id": id };
        let update = doc! { "$set": {
            "status": status.to_string(),
            "updated_at": now_rfc3339(),
        }};
        let result = self
            .collection
            .update_one(filter, update, None)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to update contact: {}", e)))?;
        if result.matched_count == 0 {
            return Err(RepositoryError::not_found(format!(
                "No contact found for ID: {}",
                id
            )));
        }
        self.find_by_id(&id)
            .await?
            .ok_or_else(|| RepositoryError::not_found(format!("No contact found for ID: {}", id)))
    }
}
