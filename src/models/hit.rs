use serde::{Deserialize, Serialize};

/// Per-page visit counter. Exactly one record exists per page key; `count`
/// only ever grows, by 1 per visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageHit {
    pub page: String,
    pub count: i64,
}
