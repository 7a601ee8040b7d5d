use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{db::Database, errors::AppResult, models::domain::Favorite};

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn insert(&self, favorite: Favorite) -> AppResult<Favorite>;
    async fn delete(&self, id: &str) -> AppResult<()>;
    async fn find_by_user_and_question(
        &self,
        user_id: &str,
        trivia_id: &str,
    ) -> AppResult<Option<Favorite>>;
    async fn find_by_user_and_questions(
        &self,
        user_id: &str,
        trivia_ids: &[String],
    ) -> AppResult<Vec<Favorite>>;
    async fn list_by_user(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Favorite>, i64)>;
}

pub struct MongoFavoriteRepository {
    collection: Collection<Favorite>,
}

impl MongoFavoriteRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("favorites");
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for favorites collection");

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
impl FavoriteRepository for MongoFavoriteRepository {
    async fn insert(&self, favorite: Favorite) -> AppResult<Favorite> {
        self.collection.insert_one(&favorite).await?;
        Ok(favorite)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.collection.delete_one(doc! { "id": id }).await?;
        Ok(())
    }

    async fn find_by_user_and_question(
        &self,
        user_id: &str,
        trivia_id: &str,
    ) -> AppResult<Option<Favorite>> {
        let favorite = self
            .collection
            .find_one(doc! { "user_id": user_id, "trivia_id": trivia_id })
            .await?;
        Ok(favorite)
    }

    async fn find_by_user_and_questions(
        &self,
        user_id: &str,
        trivia_ids: &[String],
    ) -> AppResult<Vec<Favorite>> {
        if trivia_ids.is_empty() {
            return Ok(vec![]);
        }

        let cursor = self
            .collection
            .find(doc! { "user_id": user_id, "trivia_id": { "$in": trivia_ids.to_vec() } })
            .await?;
        let favorites: Vec<Favorite> = cursor.try_collect().await?;
        Ok(favorites)
    }

    async fn list_by_user(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Favorite>, i64)> {
        let filter = doc! { "user_id": user_id };

        let total = self.collection.count_documents(filter.clone()).await? as i64;

        let favorites = self
            .collection
            .find(filter)
            .sort(doc! { "created_at": -1 })
            .skip(offset.max(0) as u64)
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        Ok((favorites, total))
    }
}
