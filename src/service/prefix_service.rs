use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::model::country_prefix::CountryPrefix;
use crate::repository::country_prefix_repo::CountryPrefixRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait PrefixService: Send + Sync {
    async fn create(&self, prefix: CountryPrefix) -> Result<CountryPrefix, ServiceError>;
    async fn list_all(&self) -> Result<Vec<CountryPrefix>, ServiceError>;
}

pub struct PrefixServiceImpl {
    pub prefix_repo: Arc<dyn CountryPrefixRepository>,
}

impl PrefixServiceImpl {
    pub fn new(prefix_repo: Arc<dyn CountryPrefixRepository>) -> Self {
        Self { prefix_repo }
    }
}

#[async_trait]
impl PrefixService for PrefixServiceImpl {
    #[instrument(skip(self, prefix), fields(country = %prefix.country))]
    async fn create(&self, prefix: CountryPrefix) -> Result<CountryPrefix, ServiceError> {
        info!("Adding dialing code {}", prefix.prefix);
        Ok(self.prefix_repo.insert(prefix).await?)
    }

    async fn list_all(&self) -> Result<Vec<CountryPrefix>, ServiceError> {
        Ok(self.prefix_repo.list_all().await?)
    }
}
