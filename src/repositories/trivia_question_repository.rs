use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::TriviaQuestion};

#[async_trait]
pub trait TriviaQuestionRepository: Send + Sync {
    async fn insert(&self, question: TriviaQuestion) -> AppResult<TriviaQuestion>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<TriviaQuestion>>;
    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<TriviaQuestion>>;
}

pub struct MongoTriviaQuestionRepository {
    collection: Collection<TriviaQuestion>,
}

impl MongoTriviaQuestionRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("trivia_questions");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for trivia_questions collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        Ok(())
    }
}

#[async_trait]
impl TriviaQuestionRepository for MongoTriviaQuestionRepository {
    async fn insert(&self, question: TriviaQuestion) -> AppResult<TriviaQuestion> {
        self.collection.insert_one(&question).await?;
        Ok(question)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<TriviaQuestion>> {
        let question = self.collection.find_one(doc! { "id": id }).await?;
        Ok(question)
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<TriviaQuestion>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let cursor = self
            .collection
            .find(doc! { "id": { "$in": ids.to_vec() } })
            .await?;
        let questions: Vec<TriviaQuestion> = cursor.try_collect().await?;
        Ok(questions)
    }
}
