use rust_decimal::Decimal;

use crate::model::Person;

/// True iff the participants' percentage shares sum to 100 within a 0.01
/// tolerance. Missing shares count as zero.
///
/// This is the caller-facing precondition check for the percentage strategy;
/// a `false` result is not an error, and the strategy itself never validates.
pub fn validate_percentage_split(people: &[Person]) -> bool {
    let total: Decimal = people
        .iter()
        .map(|person| person.percentage_share.unwrap_or_default())
        .sum();

    (total - Decimal::ONE_HUNDRED).abs() < Decimal::new(1, 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn person(share: Option<Decimal>) -> Person {
        let base = Person::new("p", "P");
        match share {
            Some(share) => base.with_percentage_share(share),
            None => base,
        }
    }

    #[rstest]
    #[case::sixty_forty(vec![Some(Decimal::from(60)), Some(Decimal::from(40))], true)]
    #[case::one_percent_short(vec![Some(Decimal::from(60)), Some(Decimal::from(39))], false)]
    #[case::fractional_within_tolerance(
        vec![Some(Decimal::new(33335, 3)), Some(Decimal::new(33335, 3)), Some(Decimal::new(33335, 3))],
        true
    )]
    #[case::exactly_at_tolerance(vec![Some(Decimal::new(10001, 2))], false)]
    #[case::missing_shares_count_as_zero(vec![Some(Decimal::ONE_HUNDRED), None], true)]
    #[case::empty_roster(vec![], false)]
    fn validates_percentage_distributions(
        #[case] shares: Vec<Option<Decimal>>,
        #[case] expected: bool,
    ) {
        let people: Vec<Person> = shares.into_iter().map(person).collect();
        assert_eq!(validate_percentage_split(&people), expected);
    }
}
