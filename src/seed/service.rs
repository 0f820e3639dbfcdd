use chrono::{DateTime, Utc};

use super::{
    data::{
        self, LOANS_COLLECTION, LOAN_ID_FIELD, TRANSACTIONS_COLLECTION, TRANSACTION_ID_FIELD,
        USERS_COLLECTION, USER_ID_FIELD,
    },
    errors::SeedError,
    models::field_value::{FieldValue, Fields},
    store::DocumentStore,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub loans: usize,
    pub transactions: usize,
}

pub async fn upload_collection<S>(
    store: &S,
    collection: &str,
    records: Vec<Fields>,
    id_field: &str,
) -> Result<usize, SeedError>
where
    S: DocumentStore + ?Sized,
{
    let mut count = 0;

    for mut record in records {
        let Some(FieldValue::String(doc_id)) = record.remove(id_field) else {
            return Err(SeedError::MissingId {
                collection: collection.to_string(),
                id_field: id_field.to_string(),
            });
        };

        store.set_document(collection, &doc_id, &record).await?;
        tracing::info!("added {}: {}", collection, doc_id);

        count += 1;
    }

    Ok(count)
}

pub async fn seed_database<S>(store: &S, now: DateTime<Utc>) -> Result<SeedSummary, SeedError>
where
    S: DocumentStore + ?Sized,
{
    tracing::info!("starting data seed");

    let users =
        upload_collection(store, USERS_COLLECTION, data::users(now), USER_ID_FIELD).await?;
    let loans =
        upload_collection(store, LOANS_COLLECTION, data::loans(now), LOAN_ID_FIELD).await?;
    let transactions = upload_collection(
        store,
        TRANSACTIONS_COLLECTION,
        data::transactions(now),
        TRANSACTION_ID_FIELD,
    )
    .await?;

    Ok(SeedSummary {
        users,
        loans,
        transactions,
    })
}
