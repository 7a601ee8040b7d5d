use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::AnswerRecord};

#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Write-or-overwrite the record keyed by (user_id, trivia_id).
    async fn upsert(&self, record: AnswerRecord) -> AppResult<AnswerRecord>;
    async fn find_by_user_and_question(
        &self,
        user_id: &str,
        trivia_id: &str,
    ) -> AppResult<Option<AnswerRecord>>;
    async fn find_by_user_and_questions(
        &self,
        user_id: &str,
        trivia_ids: &[String],
    ) -> AppResult<Vec<AnswerRecord>>;
}

pub struct MongoAnswerRepository {
    collection: Collection<AnswerRecord>,
}

impl MongoAnswerRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("users_answers");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for users_answers collection");

        let user_question_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "trivia_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("user_question_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(user_question_index).await?;

        Ok(())
    }
}

#[async_trait]
impl AnswerRepository for MongoAnswerRepository {
    async fn upsert(&self, record: AnswerRecord) -> AppResult<AnswerRecord> {
        self.collection
            .replace_one(
                doc! { "user_id": &record.user_id, "trivia_id": &record.trivia_id },
                &record,
            )
            .upsert(true)
            .await?;
        Ok(record)
    }

    async fn find_by_user_and_question(
        &self,
        user_id: &str,
        trivia_id: &str,
    ) -> AppResult<Option<AnswerRecord>> {
        let record = self
            .collection
            .find_one(doc! { "user_id": user_id, "trivia_id": trivia_id })
            .await?;
        Ok(record)
    }

    async fn find_by_user_and_questions(
        &self,
        user_id: &str,
        trivia_ids: &[String],
    ) -> AppResult<Vec<AnswerRecord>> {
        if trivia_ids.is_empty() {
            return Ok(vec![]);
        }

        let cursor = self
            .collection
            .find(doc! { "user_id": user_id, "trivia_id": { "$in": trivia_ids.to_vec() } })
            .await?;
        let records: Vec<AnswerRecord> = cursor.try_collect().await?;
        Ok(records)
    }
}
