use async_trait::async_trait;
use billed_types::{BillRecord, CreatedBill, NewBill};

use crate::error::StoreError;

/// Receipt picked in the form, with its bytes already read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }
}

/// Persistence collaborator for bills.
///
/// Futures are `!Send`: everything runs on the browser event loop.
#[async_trait(?Send)]
pub trait BillStore {
    async fn list(&self) -> Result<Vec<BillRecord>, StoreError>;

    /// Upload the receipt and persist the bill in one call
    async fn create(&self, bill: &NewBill, file: &UploadFile) -> Result<CreatedBill, StoreError>;
}
