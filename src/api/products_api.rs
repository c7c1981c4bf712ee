use super::Error;
use crate::dto::{input, output};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductsApi: Send + Sync {
    ///
    /// Upload a validated product batch as one multipart request,
    /// csv file plus per row images.
    ///
    /// ### Returns
    /// Per row success and failure lists as reported by the server
    ///
    async fn bulk_upload_with_images(
        &self,
        request: output::BulkUploadRequest,
    ) -> Result<input::BulkUploadReport, Error>;
}
