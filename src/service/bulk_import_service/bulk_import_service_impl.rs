use super::{csv_line, BulkImportBatch, BulkImportRow, BulkImportService, Error};
use crate::{api::ProductsApi, dto::input};
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};

const REQUIRED_COLUMNS: [&str; 2] = ["name", "price"];

pub struct BulkImportServiceImpl {
    products_api: Arc<dyn ProductsApi>,
}

impl BulkImportServiceImpl {
    pub fn new(products_api: Arc<dyn ProductsApi>) -> Self {
        Self { products_api }
    }

    fn parse_row(row_index: usize, columns: &[String], line: &str) -> BulkImportRow {
        let values = csv_line::parse_line(line);

        let fields = columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let value = values.get(i).cloned().unwrap_or_default();
                (column.clone(), value)
            })
            .collect::<HashMap<_, _>>();

        let name = fields
            .get("name")
            .map(|name| name.trim().to_string())
            .unwrap_or_default();
        let price = fields.get("price").and_then(|price| price.trim().parse::<f64>().ok());

        let invalid_reason = if name.is_empty() {
            Some("name must not be empty".to_string())
        } else if !price.is_some_and(|price| price.is_finite() && price > 0.0) {
            Some("price must be a positive number".to_string())
        } else {
            None
        };

        BulkImportRow {
            row_index,
            name,
            price,
            fields,
            invalid_reason,
            images: Vec::new(),
        }
    }
}

#[async_trait]
impl BulkImportService for BulkImportServiceImpl {
    fn parse(&self, csv_file_name: &str, csv_content: &str) -> Result<BulkImportBatch, Error> {
        let mut lines = csv_content
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty());

        let header = lines.next().unwrap_or_default();
        let columns = header
            .split(',')
            .map(|column| column.trim().to_string())
            .collect::<Vec<_>>();

        let missing_columns = REQUIRED_COLUMNS
            .iter()
            .filter(|required| !columns.iter().any(|column| column == *required))
            .map(|required| required.to_string())
            .collect::<Vec<_>>();
        if !missing_columns.is_empty() {
            return Err(Error::MissingColumns(missing_columns));
        }

        let rows = lines
            .enumerate()
            .map(|(row_index, line)| Self::parse_row(row_index, &columns, line))
            .collect::<Vec<_>>();
        if rows.is_empty() {
            return Err(Error::NoDataRows);
        }

        tracing::info!(
            file_name = csv_file_name,
            rows = rows.len(),
            invalid = rows.iter().filter(|row| !row.is_valid()).count(),
            "csv parsed"
        );

        Ok(BulkImportBatch::new(
            csv_file_name.to_string(),
            csv_content.to_string(),
            rows,
        ))
    }

    async fn submit(&self, batch: &BulkImportBatch) -> Result<input::BulkUploadReport, Error> {
        let invalid_rows = batch.invalid_rows();
        if !invalid_rows.is_empty() {
            return Err(Error::InvalidRows(invalid_rows));
        }
        if batch.rows().is_empty() {
            return Err(Error::NoDataRows);
        }

        let report = self
            .products_api
            .bulk_upload_with_images(batch.to_request())
            .await?;

        tracing::info!(
            success = report.success.len(),
            failed = report.failed.len(),
            "bulk upload submitted"
        );

        Ok(report)
    }
}
