#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("csv is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("csv has no data rows")]
    NoDataRows,

    #[error("batch contains invalid rows: {}", format_rows(.0))]
    InvalidRows(Vec<(usize, String)>),

    #[error("api error: {0}")]
    Api(#[from] crate::api::Error),
}

fn format_rows(rows: &[(usize, String)]) -> String {
    rows.iter()
        .map(|(row, reason)| format!("row {row}: {reason}"))
        .collect::<Vec<_>>()
        .join("; ")
}
