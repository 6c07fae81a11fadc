use async_trait::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::model::contact::{Contact, ContactStatus};
use crate::repository::contact_repo::ContactRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait ContactService: Send + Sync {
    async fn submit(&self, contact: Contact) -> Result<Contact, ServiceError>;
    async fn get(&self, id: ObjectId) -> Result<Contact, ServiceError>;
    async fn list(&self, page: u64, limit: i64) -> Result<Vec<Contact>, ServiceError>;
    async fn update_status(
        &self,
        id: ObjectId,
        status: ContactStatus,
    ) -> Result<Contact, ServiceError>;
}

pub struct ContactServiceImpl {
    pub contact_repo: Arc<dyn ContactRepository>,
}

impl ContactServiceImpl {
    pub fn new(contact_repo: Arc<dyn ContactRepository>) -> Self {
        Self { contact_repo }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    #[instrument(skip(self, contact), fields(email = %contact.email))]
    async fn submit(&self, contact: Contact) -> Result<Contact, ServiceError> {
        info!("Registering new contact");
        if let Some(existing) = self.contact_repo.find_by_email(&contact.email).await? {
            return Err(ServiceError::Conflict(format!(
                "A contact with email {} already exists",
                existing.email
            )));
        }
        let inserted = self.contact_repo.insert(contact).await?;
        info!("Contact stored successfully");
        Ok(inserted)
    }

    async fn get(&self, id: ObjectId) -> Result<Contact, ServiceError> {
        self.contact_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No contact with id {}", id)))
    }

    async fn list(&self, page: u64, limit: i64) -> Result<Vec<Contact>, ServiceError> {
        Ok(self.contact_repo.list(page, limit).await?)
    }

    #[instrument(skip(self))]
    async fn update_status(
        &self,
        id: ObjectId,
        status: ContactStatus,
    ) -> Result<Contact, ServiceError> {
        info!("Updating contact status to {}", status);
        Ok(self.contact_repo.update_status(id, status).await?)
    }
}
