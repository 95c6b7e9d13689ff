use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

use rust_decimal::{prelude::FromPrimitive, Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Monetary amount backed by `Decimal`.
///
/// All engine arithmetic happens on the exact decimal value; rounding to the
/// 2-digit cent grid is an explicit step (`round_to_cents`) applied when a
/// value becomes part of an output, never implicitly.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    /// Converts a float into money. Non-finite or unrepresentable values
    /// become zero; upstream receipt data is repaired, not rejected.
    pub fn from_f64(value: f64) -> Self {
        Decimal::from_f64(value).map(Self).unwrap_or(Self::ZERO)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    /// Rounds half away from zero at the 2nd decimal. This is the
    /// authoritative monetary rounding for every stage of the engine.
    pub fn round_to_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div<Decimal> for Money {
    type Output = Self;

    fn div(self, rhs: Decimal) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Normalized participant identifier. Storage-layer representations
/// (JSON-encoded lists, positional indices) are resolved before the engine
/// sees them.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for PersonId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One purchased receipt line.
///
/// `price` is the printed line total, not a unit price; `quantity` is carried
/// for the receipt view (`display_total`), while the canonical totals path
/// sums `price` alone. The two paths intentionally diverge, matching the
/// upstream data-entry semantics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    pub price: Money,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub assigned_to: Vec<PersonId>,
}

fn default_quantity() -> u32 {
    1
}

impl Item {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
            quantity: 1,
            assigned_to: Vec::new(),
        }
    }

    pub fn assigned_to<I, P>(mut self, people: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PersonId>,
    {
        self.assigned_to = people.into_iter().map(Into::into).collect();
        self
    }

    /// Display-path total: price times quantity. Not used by the totals
    /// calculator.
    pub fn display_total(&self) -> Money {
        self.price * Decimal::from(self.quantity)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Share of the total under the percentage policy, 0-100. Ignored by the
    /// other strategies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_share: Option<Decimal>,
}

impl Person {
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            percentage_share: None,
        }
    }

    pub fn with_percentage_share(mut self, share: Decimal) -> Self {
        self.percentage_share = Some(share);
        self
    }
}

/// Derived bill totals, all rounded to cents at construction. Later stages
/// must not re-derive these from unrounded sources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillTotals {
    pub subtotal: Money,
    pub tax: Money,
    pub service_fee: Money,
    pub total: Money,
}

impl BillTotals {
    /// Tax plus service fee: the portion of the bill not tied to any item.
    pub fn extra_costs(&self) -> Money {
        self.tax + self.service_fee
    }
}

/// Policy governing how the bill total is divided among participants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SplitMethod {
    #[default]
    Equal,
    Percentage,
    ByItem,
}

/// How tax and service fee are distributed under the by-item policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExtraCostsSplit {
    #[default]
    Equal,
    /// Each person's share of the extra costs is proportional to their share
    /// of the items subtotal.
    Proportional,
}

/// An item (or fraction of a shared item) attributed to one participant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocatedItem {
    pub name: String,
    pub price: Money,
    pub quantity: u32,
    /// Present when the item was shared by more than one person: the
    /// per-person fraction of the price, left unrounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub split_price: Option<Money>,
}

impl AllocatedItem {
    pub(crate) fn whole(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            split_price: None,
        }
    }

    pub(crate) fn shared(item: &Item, split_price: Money) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
            split_price: Some(split_price),
        }
    }
}

/// Per-participant outcome of an allocation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonAllocation {
    pub id: PersonId,
    pub name: String,
    pub amount_owed: Money,
    pub split_method: SplitMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_share: Option<Decimal>,
    /// Item spend attributed to this person under the by-item policy; zero
    /// for the other strategies.
    pub items_subtotal: Money,
    pub items: Vec<AllocatedItem>,
}

/// Terminal output of the engine: totals plus per-person statements sorted
/// descending by amount owed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillSummary {
    pub bill_totals: BillTotals,
    pub people: Vec<PersonAllocation>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AllocationError {
    #[error("cannot split a bill across zero participants")]
    NoParticipants,
    #[error("items subtotal is zero, proportional extra-cost distribution is undefined")]
    ZeroSubtotal,
}
