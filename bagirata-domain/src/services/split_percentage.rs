use rust_decimal::Decimal;

use crate::model::{Money, Person, PersonAllocation, SplitMethod};

/// Splits the bill total by each participant's declared percentage share.
///
/// Every participant except the last owes their rounded percentage of the
/// total; the last participant in list order absorbs whatever remains. The
/// running remainder is reduced by the rounded assignments, so the sum of all
/// shares equals the (2dp) total exactly, with zero drift.
///
/// Precondition: shares should sum to 100 (`validate_percentage_split`).
/// The strategy itself does not validate; with a bad distribution the last
/// participant simply absorbs the imbalance.
pub fn split_by_percentage(total: Money, people: &[Person]) -> Vec<PersonAllocation> {
    let mut remaining_amount = total;
    let mut remaining_percentage = Decimal::ONE_HUNDRED;
    let last_index = people.len().checked_sub(1);

    people
        .iter()
        .enumerate()
        .map(|(index, person)| {
            if Some(index) == last_index {
                return PersonAllocation {
                    id: person.id.clone(),
                    name: person.name.clone(),
                    amount_owed: remaining_amount.round_to_cents(),
                    split_method: SplitMethod::Percentage,
                    percentage_share: Some(remaining_percentage),
                    items_subtotal: Money::ZERO,
                    items: Vec::new(),
                };
            }

            let share = person.percentage_share.unwrap_or_default();
            let amount = (total * (share / Decimal::ONE_HUNDRED)).round_to_cents();
            remaining_amount -= amount;
            remaining_percentage -= share;

            PersonAllocation {
                id: person.id.clone(),
                name: person.name.clone(),
                amount_owed: amount,
                split_method: SplitMethod::Percentage,
                percentage_share: person.percentage_share,
                items_subtotal: Money::ZERO,
                items: Vec::new(),
            }
        })
        .collect()
}
