use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub status: String,
    pub message: String,
    pub user_id: String,
    pub receipt_stored_at: String,
}

impl TransactionReceipt {
    pub fn success(user_id: &str, receipt_stored_at: &str) -> TransactionReceipt {
        TransactionReceipt {
            status: "success".to_string(),
            message: "Transaction verified and logged".to_string(),
            user_id: user_id.to_string(),
            receipt_stored_at: receipt_stored_at.to_string(),
        }
    }
}
