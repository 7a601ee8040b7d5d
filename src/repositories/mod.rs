pub mod answer_repository;
pub mod favorite_repository;
pub mod history_repository;
pub mod trivia_question_repository;

pub use answer_repository::{AnswerRepository, MongoAnswerRepository};
pub use favorite_repository::{FavoriteRepository, MongoFavoriteRepository};
pub use history_repository::{HistoryRepository, MongoHistoryRepository};
pub use trivia_question_repository::{MongoTriviaQuestionRepository, TriviaQuestionRepository};
