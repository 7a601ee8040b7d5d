#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde_json::json;
use tokio::sync::RwLock;

use trivia_server::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{AnswerRecord, Favorite, HistoryEntry, TriviaQuestion},
    repositories::{
        AnswerRepository, FavoriteRepository, HistoryRepository, TriviaQuestionRepository,
    },
    services::{
        AnswerService, FavoriteService, QuestionGenerator, QuotaService, ReviewService,
        TriviaService,
    },
};

pub struct InMemoryTriviaQuestionRepository {
    questions: Arc<RwLock<HashMap<String, TriviaQuestion>>>,
}

impl InMemoryTriviaQuestionRepository {
    pub fn new() -> Self {
        Self {
            questions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn count(&self) -> usize {
        self.questions.read().await.len()
    }
}

#[async_trait]
impl TriviaQuestionRepository for InMemoryTriviaQuestionRepository {
    async fn insert(&self, question: TriviaQuestion) -> AppResult<TriviaQuestion> {
        let mut questions = self.questions.write().await;
        if questions.contains_key(&question.id) {
            return Err(AppError::DatabaseError(format!(
                "Duplicate question id '{}'",
                question.id
            )));
        }

        questions.insert(question.id.clone(), question.clone());
        Ok(question)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<TriviaQuestion>> {
        let questions = self.questions.read().await;
        Ok(questions.get(id).cloned())
    }

    async fn find_by_ids(&self, ids: &[String]) -> AppResult<Vec<TriviaQuestion>> {
        let questions = self.questions.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| questions.get(id).cloned())
            .collect())
    }
}

pub struct InMemoryAnswerRepository {
    records: Arc<RwLock<HashMap<(String, String), AnswerRecord>>>,
}

impl InMemoryAnswerRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl AnswerRepository for InMemoryAnswerRepository {
    async fn upsert(&self, record: AnswerRecord) -> AppResult<AnswerRecord> {
        let mut records = self.records.write().await;
        records.insert(
            (record.user_id.clone(), record.trivia_id.clone()),
            record.clone(),
        );
        Ok(record)
    }

    async fn find_by_user_and_question(
        &self,
        user_id: &str,
        trivia_id: &str,
    ) -> AppResult<Option<AnswerRecord>> {
        let records = self.records.read().await;
        Ok(records
            .get(&(user_id.to_string(), trivia_id.to_string()))
            .cloned())
    }

    async fn find_by_user_and_questions(
        &self,
        user_id: &str,
        trivia_ids: &[String],
    ) -> AppResult<Vec<AnswerRecord>> {
        let records = self.records.read().await;
        Ok(records
            .values()
            .filter(|r| r.user_id == user_id && trivia_ids.contains(&r.trivia_id))
            .cloned()
            .collect())
    }
}

pub struct InMemoryFavoriteRepository {
    favorites: Arc<RwLock<HashMap<String, Favorite>>>,
}

impl InMemoryFavoriteRepository {
    pub fn new() -> Self {
        Self {
            favorites: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn count(&self) -> usize {
        self.favorites.read().await.len()
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryFavoriteRepository {
    async fn insert(&self, favorite: Favorite) -> AppResult<Favorite> {
        let mut favorites = self.favorites.write().await;

        let duplicate = favorites
            .values()
            .any(|f| f.user_id == favorite.user_id && f.trivia_id == favorite.trivia_id);
        if duplicate {
            return Err(AppError::DatabaseError(format!(
                "Duplicate favorite for ({}, {})",
                favorite.user_id, favorite.trivia_id
            )));
        }

        favorites.insert(favorite.id.clone(), favorite.clone());
        Ok(favorite)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut favorites = self.favorites.write().await;
        favorites.remove(id);
        Ok(())
    }

    async fn find_by_user_and_question(
        &self,
        user_id: &str,
        trivia_id: &str,
    ) -> AppResult<Option<Favorite>> {
        let favorites = self.favorites.read().await;
        Ok(favorites
            .values()
            .find(|f| f.user_id == user_id && f.trivia_id == trivia_id)
            .cloned())
    }

    async fn find_by_user_and_questions(
        &self,
        user_id: &str,
        trivia_ids: &[String],
    ) -> AppResult<Vec<Favorite>> {
        let favorites = self.favorites.read().await;
        Ok(favorites
            .values()
            .filter(|f| f.user_id == user_id && trivia_ids.contains(&f.trivia_id))
            .cloned()
            .collect())
    }

    async fn list_by_user(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Favorite>, i64)> {
        let favorites = self.favorites.read().await;
        let mut items: Vec<_> = favorites
            .values()
            .filter(|f| f.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = items.len() as i64;
        let start = offset.max(0) as usize;
        let end = (start + limit.max(0) as usize).min(items.len());

        let page = if start >= items.len() {
            vec![]
        } else {
            items[start..end].to_vec()
        };

        Ok((page, total))
    }
}

pub struct InMemoryHistoryRepository {
    entries: Arc<RwLock<Vec<HistoryEntry>>>,
}

impl InMemoryHistoryRepository {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn count(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Seed an entry whose created_at lies `age` in the past.
    pub async fn seed(&self, user_id: &str, trivia_id: &str, age: chrono::Duration) {
        let mut entry = HistoryEntry::new(user_id, trivia_id);
        entry.created_at = Utc::now() - age;
        self.entries.write().await.push(entry);
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn insert(&self, entry: HistoryEntry) -> AppResult<HistoryEntry> {
        self.entries.write().await.push(entry.clone());
        Ok(entry)
    }

    async fn count_since(&self, user_id: &str, since: DateTime<Utc>) -> AppResult<i64> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|e| e.user_id == user_id && e.created_at >= since)
            .count() as i64)
    }

    async fn list_by_user(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<HistoryEntry>, i64)> {
        let entries = self.entries.read().await;
        let mut items: Vec<_> = entries
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = items.len() as i64;
        let start = offset.max(0) as usize;
        let end = (start + limit.max(0) as usize).min(items.len());

        let page = if start >= items.len() {
            vec![]
        } else {
            items[start..end].to_vec()
        };

        Ok((page, total))
    }
}

/// Canned generator: serves the configured result on every call and counts
/// invocations.
pub struct StubGenerator {
    response: Mutex<AppResult<String>>,
    calls: AtomicUsize,
}

impl StubGenerator {
    pub fn returning(content: impl Into<String>) -> Self {
        Self {
            response: Mutex::new(Ok(content.into())),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Mutex::new(Err(AppError::GenerationFailed(message.to_string()))),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuestionGenerator for StubGenerator {
    async fn generate(&self, _system_prompt: &str, _user_prompt: &str) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.lock().unwrap().clone()
    }
}

fn valid_items() -> Vec<serde_json::Value> {
    vec![
        json!({
            "question": "What was the first video ever uploaded to YouTube?",
            "choices": [
                "A: Me at the zoo",
                "B: Charlie bit my finger",
                "C: The Evolution of Dance",
                "D: Gangnam Style"
            ],
            "answer": "A",
            "difficulty": 4,
            "category": "Internet History"
        }),
        json!({
            "question": "Which mythical creature is said to live beneath Loch Ness in Scotland?",
            "choices": ["A: Kraken", "B: Nessie", "C: Basilisk", "D: Hydra"],
            "answer": "B",
            "difficulty": 7,
            "category": "Legendary Creatures"
        }),
        json!({
            "question": "Which planet in our solar system has the most moons?",
            "choices": ["A: Saturn", "B: Jupiter", "C: Uranus", "D: Neptune"],
            "answer": "A",
            "difficulty": 3,
            "category": "Space Oddities"
        }),
    ]
}

pub fn sample_batch_content() -> String {
    json!({ "triviaQuestions": valid_items() }).to_string()
}

pub fn batch_with_invalid_item() -> String {
    let mut items = valid_items();
    items[2].as_object_mut().unwrap().remove("answer");
    json!({ "triviaQuestions": items }).to_string()
}

pub fn test_config() -> Config {
    Config {
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "trivia-test".to_string(),
        openai_api_key: SecretString::from("test_api_key".to_string()),
        openai_model: "gpt-4o-mini".to_string(),
        daily_generation_limit: 3,
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 8080,
        jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
        jwt_expiration_hours: 1,
    }
}

/// Full service wiring over the in-memory repositories, for workflow and
/// HTTP-level tests.
pub struct TestBackend {
    pub questions: Arc<InMemoryTriviaQuestionRepository>,
    pub answers: Arc<InMemoryAnswerRepository>,
    pub favorites: Arc<InMemoryFavoriteRepository>,
    pub history: Arc<InMemoryHistoryRepository>,
    pub generator: Arc<StubGenerator>,
    pub state: AppState,
}

pub fn test_backend(generator: StubGenerator) -> TestBackend {
    let config = test_config();

    let questions = Arc::new(InMemoryTriviaQuestionRepository::new());
    let answers = Arc::new(InMemoryAnswerRepository::new());
    let favorites = Arc::new(InMemoryFavoriteRepository::new());
    let history = Arc::new(InMemoryHistoryRepository::new());
    let generator = Arc::new(generator);

    let quota_service = Arc::new(QuotaService::new(
        history.clone(),
        config.daily_generation_limit,
    ));
    let trivia_service = Arc::new(TriviaService::new(
        questions.clone(),
        history.clone(),
        quota_service.clone(),
        generator.clone(),
    ));
    let answer_service = Arc::new(AnswerService::new(questions.clone(), answers.clone()));
    let favorite_service = Arc::new(FavoriteService::new(favorites.clone()));
    let review_service = Arc::new(ReviewService::new(
        history.clone(),
        favorites.clone(),
        questions.clone(),
        answers.clone(),
    ));

    let state = AppState {
        trivia_service,
        quota_service,
        answer_service,
        favorite_service,
        review_service,
        config: Arc::new(config),
    };

    TestBackend {
        questions,
        answers,
        favorites,
        history,
        generator,
        state,
    }
}
