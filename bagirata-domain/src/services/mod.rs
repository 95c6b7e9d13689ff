pub mod bill_totals;
pub mod percentage_validator;
pub mod split_by_items;
pub mod split_equal;
pub mod split_percentage;
pub mod summary_calculator;

pub use bill_totals::compute_bill_totals;
pub use percentage_validator::validate_percentage_split;
pub use split_by_items::split_by_items;
pub use split_equal::split_equally_by_total;
pub use split_percentage::split_by_percentage;
pub use summary_calculator::calculate_bill_summary;
