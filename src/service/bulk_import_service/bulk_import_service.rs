use super::{BulkImportBatch, Error};
use crate::dto::input;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BulkImportService: Send + Sync {
    ///
    /// Parse csv text into a batch of validated rows. Rows failing
    /// validation are kept in the batch with a reason, only structural
    /// failures abort parsing.
    ///
    /// ### Errors
    /// - [Error::MissingColumns] when the header lacks name or price
    /// - [Error::NoDataRows] when only a header is present
    ///
    fn parse(&self, csv_file_name: &str, csv_content: &str) -> Result<BulkImportBatch, Error>;

    ///
    /// Submit the whole batch as a single multipart upload.
    ///
    /// ### Returns
    /// Per row success and failure lists as reported by the server,
    /// successfully created rows are not rolled back
    ///
    /// ### Errors
    /// - [Error::InvalidRows] when any row is invalid, nothing is sent
    /// - [Error::Api] when the upload request fails
    ///
    async fn submit(&self, batch: &BulkImportBatch) -> Result<input::BulkUploadReport, Error>;
}
