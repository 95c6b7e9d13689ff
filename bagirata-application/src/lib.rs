#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod receipt;

pub use error::ReceiptIngestError;
pub use model::{parse_extra_costs_split, parse_split_method, ParsedItem, ParsedReceipt, ParsedTax};
pub use receipt::{
    extract_json_block, normalize_receipt, receipt_from_json, receipt_from_model_output,
    tax_percentage_for, NormalizedReceipt,
};
