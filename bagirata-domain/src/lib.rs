#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    AllocatedItem, AllocationError, BillSummary, BillTotals, ExtraCostsSplit, Item, Money, Person,
    PersonAllocation, PersonId, SplitMethod,
};
pub use services::{
    calculate_bill_summary, compute_bill_totals, split_by_items, split_by_percentage,
    split_equally_by_total, validate_percentage_split,
};
