use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::stream::TryStreamExt;
use mongodb::{options::FindOptions, Collection, Database};

use crate::model::country_prefix::CountryPrefix;
use crate::repository::now_rfc3339;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

#[async_trait]
pub trait CountryPrefixRepository: Send + Sync {
    async fn insert(&self, prefix: CountryPrefix) -> RepositoryResult<CountryPrefix>;
    async fn list_all(&self) -> RepositoryResult<Vec<CountryPrefix>>;
}

pub struct MongoCountryPrefixRepository {
    collection: Collection<CountryPrefix>,
}

impl MongoCountryPrefixRepository {
    pub fn new(db: &Database) -> Self {
        MongoCountryPrefixRepository {
            collection: db.collection::<CountryPrefix>("country_prefixes"),
        }
    }
}

#[async_trait]
impl CountryPrefixRepository for MongoCountryPrefixRepository {
    async fn insert(&self, mut prefix: CountryPrefix) -> RepositoryResult<CountryPrefix> {
        prefix.id = Some(ObjectId::new());
        let now = now_rfc3339();
        prefix.created_at = Some(now.clone());
        prefix.updated_at = Some(now);
        self.collection
            .insert_one(prefix.clone(), None)
            .await
            .map_err(RepositoryError::from)?;
        Ok(prefix)
    }

    async fn list_all(&self) -> RepositoryResult<Vec<CountryPrefix>> {
        let options = FindOptions::builder().sort(doc! { "country": 1 }).build();
        let cursor = self
            .collection
            .find(None, options)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to list prefixes: {}", e)))?;
        let prefixes = cursor
            .try_collect()
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to read prefixes: {}", e)))?;
        Ok(prefixes)
    }
}
