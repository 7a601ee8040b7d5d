pub mod answer_handler;
pub mod favorite_handler;
pub mod health_handler;
pub mod history_handler;
pub mod trivia_handler;

pub use answer_handler::submit_answer;
pub use favorite_handler::{favorite_status, list_favorites, toggle_favorite};
pub use health_handler::health_check;
pub use history_handler::list_history;
pub use trivia_handler::{generate_trivia, get_quota};
