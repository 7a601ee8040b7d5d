use serde::Deserialize;
use validator::Validate;

/// Query parameters for the generation endpoint. Categories arrive as one
/// comma-separated parameter; an absent or empty value means the full
/// default category list is eligible.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuestionsQuery {
    pub categories: Option<String>,

    #[validate(range(min = 1, max = 10))]
    pub min_difficulty: Option<i32>,

    #[validate(range(min = 1, max = 10))]
    pub max_difficulty: Option<i32>,
}

impl GenerateQuestionsQuery {
    pub fn category_list(&self) -> Vec<String> {
        self.categories
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn difficulty_range(&self) -> (i32, i32) {
        (
            self.min_difficulty.unwrap_or(1),
            self.max_difficulty.unwrap_or(10),
        )
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    #[validate(length(min = 1))]
    pub trivia_id: String,

    #[validate(length(min = 1, max = 16))]
    pub selected_answer: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavoriteRequest {
    #[validate(length(min = 1))]
    pub trivia_id: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatusQuery {
    #[validate(length(min = 1))]
    pub trivia_id: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaginationParams {
    #[validate(range(min = 0))]
    pub offset: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: Some(0),
            limit: Some(20),
        }
    }
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).min(100)
    }
}
