pub mod answer_service;
pub mod favorite_service;
pub mod model_service;
pub mod quota_service;
pub mod review_service;
pub mod trivia_service;

pub use answer_service::{AnswerOutcome, AnswerService};
pub use favorite_service::FavoriteService;
pub use model_service::{OpenAiGenerator, QuestionGenerator};
pub use quota_service::{QuotaService, QuotaStatus};
pub use review_service::ReviewService;
pub use trivia_service::TriviaService;
