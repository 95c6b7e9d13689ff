use rust_decimal::Decimal;

use crate::model::{AllocationError, Money, Person, PersonAllocation, SplitMethod};

/// Divides the bill total evenly: every participant owes the same rounded
/// share.
///
/// The single rounding step means the sum of shares can drift from the total
/// by up to half a cent per participant (100.00 across 3 people yields
/// 33.33 each, 99.99 in sum). That drift is accepted here, unlike the
/// percentage strategy which repairs it.
pub fn split_equally_by_total(
    total: Money,
    people: &[Person],
) -> Result<Vec<PersonAllocation>, AllocationError> {
    if people.is_empty() {
        return Err(AllocationError::NoParticipants);
    }

    let share = (total / Decimal::from(people.len() as u64)).round_to_cents();

    Ok(people
        .iter()
        .map(|person| PersonAllocation {
            id: person.id.clone(),
            name: person.name.clone(),
            amount_owed: share,
            split_method: SplitMethod::Equal,
            percentage_share: person.percentage_share,
            items_subtotal: Money::ZERO,
            items: Vec::new(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn roster(count: usize) -> Vec<Person> {
        (0..count)
            .map(|idx| Person::new(format!("p{idx}"), format!("Person {idx}")))
            .collect()
    }

    #[rstest]
    #[case::even_division(Money::new(5750, 2), 2, Money::new(2875, 2))]
    #[case::uneven_division(Money::from_i64(100), 3, Money::new(3333, 2))]
    #[case::single_person(Money::new(1999, 2), 1, Money::new(1999, 2))]
    #[case::zero_total(Money::ZERO, 4, Money::ZERO.round_to_cents())]
    fn everyone_owes_the_same_share(
        #[case] total: Money,
        #[case] count: usize,
        #[case] expected_share: Money,
    ) {
        let allocations =
            split_equally_by_total(total, &roster(count)).expect("non-empty roster splits");

        assert_eq!(allocations.len(), count);
        for allocation in &allocations {
            assert_eq!(allocation.amount_owed, expected_share);
            assert_eq!(allocation.split_method, SplitMethod::Equal);
            assert!(allocation.items.is_empty());
            assert_eq!(allocation.items_subtotal, Money::ZERO);
        }
    }

    #[test]
    fn empty_roster_is_rejected() {
        let err = split_equally_by_total(Money::from_i64(100), &[]).expect_err("expected error");
        assert_eq!(err, AllocationError::NoParticipants);
    }

    #[test]
    fn uneven_split_drift_is_one_cent_short() {
        let allocations =
            split_equally_by_total(Money::from_i64(100), &roster(3)).expect("valid split");
        let sum: Money = allocations.iter().map(|a| a.amount_owed).sum();
        assert_eq!(sum, Money::new(9999, 2));
    }

    proptest! {
        #[test]
        fn drift_stays_within_half_cent_per_person(
            total_cents in 0i64..=10_000_000,
            count in 1usize..=40,
        ) {
            let total = Money::new(total_cents, 2);
            let allocations = split_equally_by_total(total, &roster(count))
                .expect("non-empty roster splits");

            let sum: Money = allocations.iter().map(|a| a.amount_owed).sum();
            let drift = (sum - total).abs().as_decimal();
            let bound = rust_decimal::Decimal::new(5, 3) * rust_decimal::Decimal::from(count as u64);
            prop_assert!(drift <= bound, "drift {drift} exceeds bound {bound}");
        }
    }
}
