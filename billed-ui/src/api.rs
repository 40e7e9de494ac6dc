use async_trait::async_trait;
use billed_types::{BillRecord, CreatedBill, NewBill};
use gloo_net::http::{Request, Response};
use web_sys::{Blob, BlobPropertyBag, FormData};

use crate::error::StoreError;
use crate::store::{BillStore, UploadFile};

/// [`BillStore`] backed by the REST API
#[derive(Debug, Clone)]
pub struct HttpBillStore {
    api_base: String,
}

impl HttpBillStore {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
        }
    }

    fn bills_url(&self) -> String {
        format!("{}/bills", self.api_base)
    }
}

#[async_trait(?Send)]
impl BillStore for HttpBillStore {
    async fn list(&self) -> Result<Vec<BillRecord>, StoreError> {
        let response = Request::get(&self.bills_url())
            .send()
            .await
            .map_err(|e| StoreError::Transport(format!("Request failed: {e}")))?;

        check_status(&response)?;

        response
            .json()
            .await
            .map_err(|e| StoreError::Transport(format!("Failed to parse JSON: {e}")))
    }

    async fn create(&self, bill: &NewBill, file: &UploadFile) -> Result<CreatedBill, StoreError> {
        let form = multipart_body(bill, file).map_err(StoreError::Transport)?;

        let response = Request::post(&self.bills_url())
            .body(form)
            .map_err(|e| StoreError::Transport(format!("Failed to build request: {e}")))?
            .send()
            .await
            .map_err(|e| StoreError::Transport(format!("Request failed: {e}")))?;

        check_status(&response)?;

        response
            .json()
            .await
            .map_err(|e| StoreError::Transport(format!("Failed to parse JSON: {e}")))
    }
}

fn check_status(response: &Response) -> Result<(), StoreError> {
    if response.ok() {
        Ok(())
    } else {
        Err(StoreError::from_status(response.status()))
    }
}

/// `bill` carries the JSON metadata, `file` the receipt bytes
fn multipart_body(bill: &NewBill, file: &UploadFile) -> Result<FormData, String> {
    let metadata =
        serde_json::to_string(bill).map_err(|e| format!("Failed to serialize bill: {e}"))?;

    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&file.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("Failed to create blob: {e:?}"))?;

    let form = FormData::new().map_err(|e| format!("Failed to create form data: {e:?}"))?;
    form.append_with_str("bill", &metadata)
        .map_err(|e| format!("Failed to append bill: {e:?}"))?;
    form.append_with_blob_and_filename("file", &blob, &file.name)
        .map_err(|e| format!("Failed to append file: {e:?}"))?;
    Ok(form)
}
