use rust_decimal::Decimal;

use crate::model::{BillTotals, Item, Money};

/// Derives subtotal, tax, service fee and grand total from the receipt lines.
///
/// The subtotal sums each item's `price` as-is: `price` is the printed line
/// total, so quantity is not multiplied in here. Percentages are absolute
/// pass-throughs; negative values are the caller's responsibility.
pub fn compute_bill_totals(
    items: &[Item],
    tax_percentage: Decimal,
    service_fee_percentage: Decimal,
) -> BillTotals {
    let subtotal: Money = items.iter().map(|item| item.price).sum();
    let tax = subtotal * (tax_percentage / Decimal::ONE_HUNDRED);
    let service_fee = subtotal * (service_fee_percentage / Decimal::ONE_HUNDRED);
    let total = subtotal + tax + service_fee;

    BillTotals {
        subtotal: subtotal.round_to_cents(),
        tax: tax.round_to_cents(),
        service_fee: service_fee.round_to_cents(),
        total: total.round_to_cents(),
    }
}
