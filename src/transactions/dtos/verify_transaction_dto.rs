use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyTransactionDto {
    pub loan_id: String,
    pub amount: f64,
    pub vendor: String,
    pub image_url: String,
}
