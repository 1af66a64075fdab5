use serde::{Deserialize, Serialize};

/// Wire shape of the echo endpoint: the stored record minus its `_id`. Also
/// the deserialization target for the projected read-back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
