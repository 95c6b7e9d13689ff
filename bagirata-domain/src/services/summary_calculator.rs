use rust_decimal::Decimal;

use crate::{
    model::{AllocationError, BillSummary, ExtraCostsSplit, Item, Person, SplitMethod},
    services::{compute_bill_totals, split_by_items, split_by_percentage, split_equally_by_total},
};

/// Runs one full allocation: totals, strategy dispatch, descending sort.
///
/// Inputs are never mutated; every call builds a fresh summary, so repeated
/// recomputation over the same draft bill is safe. Ties in the amount owed
/// keep the order the strategy produced them in.
pub fn calculate_bill_summary(
    items: &[Item],
    people: &[Person],
    split_method: SplitMethod,
    tax_percentage: Decimal,
    service_fee_percentage: Decimal,
    extra_costs_split: ExtraCostsSplit,
) -> Result<BillSummary, AllocationError> {
    let bill_totals = compute_bill_totals(items, tax_percentage, service_fee_percentage);

    let mut people_with_amounts = match split_method {
        SplitMethod::Equal => split_equally_by_total(bill_totals.total, people)?,
        SplitMethod::Percentage => split_by_percentage(bill_totals.total, people),
        SplitMethod::ByItem => split_by_items(items, people, &bill_totals, extra_costs_split)?,
    };

    people_with_amounts.sort_by(|a, b| b.amount_owed.cmp(&a.amount_owed));

    Ok(BillSummary {
        bill_totals,
        people: people_with_amounts,
    })
}
