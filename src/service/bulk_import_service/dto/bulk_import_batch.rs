use super::BulkImportRow;
use crate::dto::output::{BulkUploadRequest, ImageAttachment, RowImages};

///
/// Parsed bulk upload batch. The original csv text is kept because
/// the server receives the file itself on submit.
///
#[derive(Debug)]
pub struct BulkImportBatch {
    csv_file_name: String,
    csv_content: String,
    rows: Vec<BulkImportRow>,
}

impl BulkImportBatch {
    pub(in crate::service::bulk_import_service) fn new(
        csv_file_name: String,
        csv_content: String,
        rows: Vec<BulkImportRow>,
    ) -> Self {
        Self {
            csv_file_name,
            csv_content,
            rows,
        }
    }

    pub fn rows(&self) -> &[BulkImportRow] {
        &self.rows
    }

    ///
    /// Attach an image to a row. Attachment order is preserved, the
    /// first image of a row becomes the cover image.
    ///
    /// ### Returns
    /// false when no row with the given index exists
    ///
    pub fn attach_image(&mut self, row_index: usize, image: ImageAttachment) -> bool {
        let Some(row) = self.rows.iter_mut().find(|r| r.row_index == row_index) else {
            return false;
        };

        row.images.push(image);

        true
    }

    ///
    /// Row indexes and reasons of all invalid rows
    ///
    pub fn invalid_rows(&self) -> Vec<(usize, String)> {
        self.rows
            .iter()
            .filter_map(|row| {
                row.invalid_reason
                    .as_ref()
                    .map(|reason| (row.row_index, reason.clone()))
            })
            .collect()
    }

    pub fn is_submittable(&self) -> bool {
        !self.rows.is_empty() && self.rows.iter().all(BulkImportRow::is_valid)
    }

    pub(in crate::service::bulk_import_service) fn to_request(&self) -> BulkUploadRequest {
        let images = self
            .rows
            .iter()
            .filter(|row| !row.images.is_empty())
            .map(|row| RowImages {
                row_index: row.row_index,
                images: row.images.clone(),
            })
            .collect();

        BulkUploadRequest {
            csv_file_name: self.csv_file_name.clone(),
            csv_content: self.csv_content.clone(),
            images,
        }
    }
}
