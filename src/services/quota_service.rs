use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::{errors::AppResult, repositories::HistoryRepository};

pub const QUOTA_WINDOW_HOURS: i64 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaStatus {
    pub used: i64,
    pub limit: i64,
}

impl QuotaStatus {
    pub fn remaining(&self) -> i64 {
        (self.limit - self.used).max(0)
    }

    pub fn may_generate(&self) -> bool {
        self.used < self.limit
    }
}

pub struct QuotaService {
    history_repository: Arc<dyn HistoryRepository>,
    daily_limit: i64,
}

impl QuotaService {
    pub fn new(history_repository: Arc<dyn HistoryRepository>, daily_limit: i64) -> Self {
        Self {
            history_repository,
            daily_limit,
        }
    }

    /// Count the caller's history entries in the sliding 24h window ending
    /// now. A user who generates at 23:00 stays blocked until 23:00 the next
    /// day, not until midnight. The count is recomputed from the store on
    /// every call.
    ///
    /// The check and any writes that follow it are not transactional;
    /// concurrent requests from the same user can both pass the gate.
    pub async fn check(&self, user_id: &str) -> AppResult<QuotaStatus> {
        let window_start = Utc::now() - Duration::hours(QUOTA_WINDOW_HOURS);
        let used = self
            .history_repository
            .count_since(user_id, window_start)
            .await?;

        Ok(QuotaStatus {
            used,
            limit: self.daily_limit,
        })
    }
}
