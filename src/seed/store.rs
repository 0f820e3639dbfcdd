use async_trait::async_trait;

use super::{errors::StoreError, models::field_value::Fields};

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Creates the document or replaces every field of an existing one.
    async fn set_document(
        &self,
        collection: &str,
        id: &str,
        fields: &Fields,
    ) -> Result<(), StoreError>;
}
