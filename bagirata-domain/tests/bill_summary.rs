use bagirata_domain::{
    calculate_bill_summary, AllocationError, ExtraCostsSplit, Item, Money, Person, SplitMethod,
};
use rstest::rstest;
use rust_decimal::Decimal;

fn item(name: &str, price: i64) -> Item {
    Item::new(name, Money::from_i64(price))
}

fn assert_amounts(summary: &bagirata_domain::BillSummary, expected: &[(&str, i64)]) {
    let actual: Vec<(&str, Money)> = summary
        .people
        .iter()
        .map(|p| (p.id.0.as_str(), p.amount_owed))
        .collect();
    let expected: Vec<(&str, Money)> = expected
        .iter()
        .map(|&(id, cents)| (id, Money::new(cents, 2)))
        .collect();
    assert_eq!(actual, expected);
}

#[rstest]
#[case::equal_two_people(
    vec![item("Sate", 30), item("Es Teh", 20)],
    vec![Person::new("a", "Andi"), Person::new("b", "Budi")],
    SplitMethod::Equal,
    10,
    5,
    &[("a", 2875), ("b", 2875)],
)]
#[case::percentage_sixty_forty(
    vec![item("Sate", 30), item("Es Teh", 20)],
    vec![
        Person::new("a", "Andi").with_percentage_share(Decimal::from(60)),
        Person::new("b", "Budi").with_percentage_share(Decimal::from(40)),
    ],
    SplitMethod::Percentage,
    0,
    0,
    &[("a", 3000), ("b", 2000)],
)]
#[case::by_item_with_shared_item(
    vec![
        item("Pizza", 40).assigned_to(["a", "b"]),
        item("Soda", 10).assigned_to(["a"]),
    ],
    vec![Person::new("a", "Andi"), Person::new("b", "Budi")],
    SplitMethod::ByItem,
    0,
    0,
    &[("a", 3000), ("b", 2000)],
)]
fn end_to_end_allocations(
    #[case] items: Vec<Item>,
    #[case] people: Vec<Person>,
    #[case] method: SplitMethod,
    #[case] tax: i64,
    #[case] fee: i64,
    #[case] expected: &[(&str, i64)],
) {
    let summary = calculate_bill_summary(
        &items,
        &people,
        method,
        Decimal::from(tax),
        Decimal::from(fee),
        ExtraCostsSplit::Equal,
    )
    .expect("summary calculation failed");

    assert_amounts(&summary, expected);
}

#[test]
fn percentage_split_sum_is_exact_even_with_awkward_shares() {
    let items = vec![item("Platter", 100)];
    let people = vec![
        Person::new("a", "Andi").with_percentage_share(Decimal::new(3333, 2)),
        Person::new("b", "Budi").with_percentage_share(Decimal::new(3333, 2)),
        Person::new("c", "Citra").with_percentage_share(Decimal::new(3334, 2)),
    ];

    let summary = calculate_bill_summary(
        &items,
        &people,
        SplitMethod::Percentage,
        Decimal::ZERO,
        Decimal::ZERO,
        ExtraCostsSplit::Equal,
    )
    .expect("summary calculation failed");

    let sum: Money = summary.people.iter().map(|p| p.amount_owed).sum();
    assert_eq!(sum, summary.bill_totals.total);
}

#[test]
fn inputs_are_left_untouched() {
    let items = vec![item("Pizza", 40).assigned_to(["a", "b"])];
    let people = vec![Person::new("a", "Andi"), Person::new("b", "Budi")];
    let items_before = items.clone();
    let people_before = people.clone();

    calculate_bill_summary(
        &items,
        &people,
        SplitMethod::ByItem,
        Decimal::from(10),
        Decimal::ZERO,
        ExtraCostsSplit::Proportional,
    )
    .expect("summary calculation failed");

    assert_eq!(items, items_before);
    assert_eq!(people, people_before);
}

#[test]
fn empty_roster_under_equal_split_is_an_error() {
    let err = calculate_bill_summary(
        &[item("Sate", 30)],
        &[],
        SplitMethod::Equal,
        Decimal::ZERO,
        Decimal::ZERO,
        ExtraCostsSplit::Equal,
    )
    .expect_err("expected error");

    assert_eq!(err, AllocationError::NoParticipants);
}
