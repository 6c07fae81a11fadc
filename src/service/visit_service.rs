use async_trait::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::model::visit::{EmailAttempt, PropertyVisit, VisitStatus};
use crate::repository::visit_repo::VisitRepository;
use crate::util::email::{EmailMessage, EmailSender};
use crate::util::error::ServiceError;

#[async_trait]
pub trait VisitService: Send + Sync {
    async fn schedule(&self, visit: PropertyVisit) -> Result<PropertyVisit, ServiceError>;
    async fn get(&self, id: ObjectId) -> Result<PropertyVisit, ServiceError>;
    async fn list(&self, page: u64, limit: i64) -> Result<Vec<PropertyVisit>, ServiceError>;
    async fn update_status(
        &self,
        id: ObjectId,
        status: VisitStatus,
    ) -> Result<PropertyVisit, ServiceError>;
}

pub struct VisitServiceImpl {
    pub visit_repo: Arc<dyn VisitRepository>,
    /// Absent when no SMTP credentials are configured; visits are then stored
    /// without a confirmation attempt.
    pub email_sender: Option<Arc<dyn EmailSender>>,
}

impl VisitServiceImpl {
    pub fn new(
        visit_repo: Arc<dyn VisitRepository>,
        email_sender: Option<Arc<dyn EmailSender>>,
    ) -> Self {
        Self {
            visit_repo,
            email_sender,
        }
    }

    /// One best-effort confirmation email; the attempt outcome lands in the
    /// visit's delivery log either way.
    async fn send_confirmation(&self, visit: &mut PropertyVisit) {
        let Some(sender) = &self.email_sender else {
            return;
        };
        let Some(id) = visit.id else {
            return;
        };

        let message = EmailMessage::visit_confirmation(visit);
        let attempt = match sender.send(message).await {
            Ok(()) => {
                info!("Visit confirmation email sent to {}", visit.email);
                EmailAttempt {
                    at: chrono::Utc::now().to_rfc3339(),
                    success: true,
                    error: None,
                }
            }
            Err(e) => {
                warn!("Visit confirmation email failed: {}", e);
                EmailAttempt {
                    at: chrono::Utc::now().to_rfc3339(),
                    success: false,
                    error: Some(e.to_string()),
                }
            }
        };

        visit.email_attempts.push(attempt.clone());
        if let Err(e) = self.visit_repo.record_email_attempt(id, attempt).await {
            error!("Failed to record email attempt for visit {}: {}", id, e);
        }
    }
}

#[async_trait]
impl VisitService for VisitServiceImpl {
    #[instrument(skip(self, visit), fields(property_id = %visit.property_id, email = %visit.email))]
    async fn schedule(&self, visit: PropertyVisit) -> Result<PropertyVisit, ServiceError> {
        info!("Scheduling visit for {} at {}", visit.date, visit.time);
        let mut inserted = self.visit_repo.insert(visit).await?;
        self.send_confirmation(&mut inserted).await;
        Ok(inserted)
    }

    async fn get(&self, id: ObjectId) -> Result<PropertyVisit, ServiceError> {
        self.visit_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No visit with id {}", id)))
    }

    async fn list(&self, page: u64, limit: i64) -> Result<Vec<PropertyVisit>, ServiceError> {
        Ok(self.visit_repo.list(page, limit).await?)
    }

    #[instrument(skip(self))]
    async fn update_status(
        &self,
        id: ObjectId,
        status: VisitStatus,
    ) -> Result<PropertyVisit, ServiceError> {
        info!("Updating visit status to {}", status);
        Ok(self.visit_repo.update_status(id, status).await?)
    }
}
