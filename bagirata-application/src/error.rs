use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReceiptIngestError {
    #[error("no fenced JSON block in the extraction output")]
    MissingJsonBlock,
    #[error("malformed receipt JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}
