use crate::auth::models::verified_identity::VerifiedIdentity;

use super::{
    dtos::verify_transaction_dto::VerifyTransactionDto,
    models::transaction_receipt::TransactionReceipt,
};

pub fn verify_transaction(
    dto: &VerifyTransactionDto,
    identity: &VerifiedIdentity,
) -> TransactionReceipt {
    tracing::info!(
        user_id = %identity.uid,
        loan_id = %dto.loan_id,
        amount = dto.amount,
        vendor = %dto.vendor,
        image_url = %dto.image_url,
        "transaction verified"
    );

    // No durable write yet: the storage contract for transactions is undecided.

    TransactionReceipt::success(&identity.uid, &dto.image_url)
}
