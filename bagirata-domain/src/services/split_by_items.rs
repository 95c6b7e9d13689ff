use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::model::{
    AllocatedItem, AllocationError, BillTotals, ExtraCostsSplit, Item, Money, Person,
    PersonAllocation, PersonId, SplitMethod,
};

struct ItemAccumulator<'a> {
    person: &'a Person,
    items_subtotal: Money,
    items: Vec<AllocatedItem>,
}

/// Splits the bill by item assignment: each participant owes the items
/// attributed to them plus a share of the extra costs (tax + service fee).
///
/// A shared item's price is divided evenly across its assignees without
/// intermediate rounding; only the final per-person amount is rounded. No
/// remainder-correction pass runs afterwards, so the sum of amounts can
/// drift a few cents from the bill total. The drift is reported through a
/// diagnostic event instead of being repaired.
pub fn split_by_items(
    items: &[Item],
    people: &[Person],
    totals: &BillTotals,
    extra_costs_split: ExtraCostsSplit,
) -> Result<Vec<PersonAllocation>, AllocationError> {
    let mut accumulators: IndexMap<&PersonId, ItemAccumulator<'_>> = people
        .iter()
        .map(|person| {
            (
                &person.id,
                ItemAccumulator {
                    person,
                    items_subtotal: Money::ZERO,
                    items: Vec::new(),
                },
            )
        })
        .collect();

    for item in items {
        match item.assigned_to.as_slice() {
            [] => {
                tracing::debug!(
                    item = %item.name,
                    price = %item.price,
                    "item has no assignees and is excluded from the allocation"
                );
            }
            [person_id] => {
                if let Some(accumulator) = accumulators.get_mut(person_id) {
                    accumulator.items_subtotal += item.price;
                    accumulator.items.push(AllocatedItem::whole(item));
                }
            }
            assignees => {
                let split_price = item.price / Decimal::from(assignees.len() as u64);
                for person_id in assignees {
                    if let Some(accumulator) = accumulators.get_mut(person_id) {
                        accumulator.items_subtotal += split_price;
                        accumulator.items.push(AllocatedItem::shared(item, split_price));
                    }
                }
            }
        }
    }

    if people.is_empty() {
        return Ok(Vec::new());
    }

    let extra_costs = totals.extra_costs();
    let allocations: Vec<PersonAllocation> = match extra_costs_split {
        ExtraCostsSplit::Equal => {
            let extra_per_person = extra_costs / Decimal::from(people.len() as u64);
            accumulators
                .into_values()
                .map(|accumulator| finish(accumulator, extra_per_person))
                .collect()
        }
        ExtraCostsSplit::Proportional => {
            if totals.subtotal.is_zero() {
                return Err(AllocationError::ZeroSubtotal);
            }
            accumulators
                .into_values()
                .map(|accumulator| {
                    let proportion =
                        accumulator.items_subtotal.as_decimal() / totals.subtotal.as_decimal();
                    finish(accumulator, extra_costs * proportion)
                })
                .collect()
        }
    };

    let owed_sum: Money = allocations.iter().map(|a| a.amount_owed).sum();
    let drift = owed_sum - totals.total;
    if !drift.is_zero() {
        tracing::debug!(
            drift = %drift,
            owed_sum = %owed_sum,
            total = %totals.total,
            participant_count = people.len(),
            "by-item allocation drifted from the bill total"
        );
    }

    Ok(allocations)
}

fn finish(accumulator: ItemAccumulator<'_>, extra_share: Money) -> PersonAllocation {
    PersonAllocation {
        id: accumulator.person.id.clone(),
        name: accumulator.person.name.clone(),
        amount_owed: (accumulator.items_subtotal + extra_share).round_to_cents(),
        split_method: SplitMethod::ByItem,
        percentage_share: accumulator.person.percentage_share,
        items_subtotal: accumulator.items_subtotal,
        items: accumulator.items,
    }
}
