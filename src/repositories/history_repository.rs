use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson},
    Collection, IndexModel,
};

use crate::{db::Database, errors::AppResult, models::domain::HistoryEntry};

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn insert(&self, entry: HistoryEntry) -> AppResult<HistoryEntry>;
    /// Count the user's entries created at or after `since`. The quota gate
    /// recomputes this on every check; nothing is cached.
    async fn count_since(&self, user_id: &str, since: DateTime<Utc>) -> AppResult<i64>;
    async fn list_by_user(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<HistoryEntry>, i64)>;
}

pub struct MongoHistoryRepository {
    collection: Collection<HistoryEntry>,
}

impl MongoHistoryRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("user_trivia_history");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for user_trivia_history collection");

        let user_created_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "created_at": -1 })
            .build();

        self.collection.create_index(user_created_index).await?;

        Ok(())
    }
}

#[async_trait]
impl HistoryRepository for MongoHistoryRepository {
    async fn insert(&self, entry: HistoryEntry) -> AppResult<HistoryEntry> {
        self.collection.insert_one(&entry).await?;
        Ok(entry)
    }

    async fn count_since(&self, user_id: &str, since: DateTime<Utc>) -> AppResult<i64> {
        let count = self
            .collection
            .count_documents(doc! {
                "user_id": user_id,
                "created_at": { "$gte": to_bson(&since)? }
            })
            .await?;
        Ok(count as i64)
    }

    async fn list_by_user(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<HistoryEntry>, i64)> {
        let filter = doc! { "user_id": user_id };

        let total = self.collection.count_documents(filter.clone()).await? as i64;

        let entries = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .skip(offset.max(0) as u64)
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        Ok((entries, total))
    }
}
