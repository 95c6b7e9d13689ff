use std::fmt;

use bagirata_domain::{ExtraCostsSplit, SplitMethod};
use serde::{
    de::{self, Deserializer, Visitor},
    Deserialize,
};

/// Receipt JSON as emitted by the upstream extraction model.
///
/// Every field is optional in practice; the extractor omits, nulls, or
/// misformats fields freely, so this layer accepts everything and defers
/// repair to [`crate::normalize_receipt`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedReceipt {
    pub restaurant: Option<String>,
    pub date: Option<String>,
    pub currency: Option<String>,
    pub total_amount: LenientNumber,
    pub items: Vec<ParsedItem>,
    pub tax: ParsedTax,
    pub subtotal: LenientNumber,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedItem {
    pub name: Option<String>,
    pub price: LenientNumber,
    pub quantity: LenientNumber,
}

#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedTax {
    pub percentage: LenientNumber,
    pub amount: LenientNumber,
}

/// A number field that tolerates the extractor's output: JSON numbers,
/// numeric strings, nulls, and garbage all deserialize without error.
/// Anything unusable becomes NaN, which [`LenientNumber::finite`] filters.
#[derive(Clone, Copy, Debug)]
pub struct LenientNumber(pub f64);

impl LenientNumber {
    pub fn finite(self) -> Option<f64> {
        self.0.is_finite().then_some(self.0)
    }
}

impl Default for LenientNumber {
    fn default() -> Self {
        Self(f64::NAN)
    }
}

impl<'de> Deserialize<'de> for LenientNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LenientVisitor;

        impl<'de> Visitor<'de> for LenientVisitor {
            type Value = LenientNumber;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number, a numeric string, or null")
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
                Ok(LenientNumber(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(LenientNumber(value as f64))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(LenientNumber(value as f64))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(LenientNumber(value.trim().parse().unwrap_or(f64::NAN)))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(LenientNumber::default())
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(LenientNumber::default())
            }

            fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
            where
                D2: Deserializer<'de>,
            {
                deserializer.deserialize_any(LenientVisitor)
            }
        }

        deserializer.deserialize_any(LenientVisitor)
    }
}

/// Maps a user-facing split tag to a policy. Unknown tags fall back to the
/// equal split rather than failing the request.
pub fn parse_split_method(tag: &str) -> SplitMethod {
    match tag.trim().to_ascii_lowercase().as_str() {
        "equal" => SplitMethod::Equal,
        "percentage" => SplitMethod::Percentage,
        "byitem" | "by_item" | "by-item" => SplitMethod::ByItem,
        other => {
            tracing::debug!(tag = other, "unknown split method tag, using equal");
            SplitMethod::Equal
        }
    }
}

pub fn parse_extra_costs_split(tag: &str) -> ExtraCostsSplit {
    match tag.trim().to_ascii_lowercase().as_str() {
        "proportional" => ExtraCostsSplit::Proportional,
        "equal" => ExtraCostsSplit::Equal,
        other => {
            tracing::debug!(tag = other, "unknown extra-costs tag, using equal");
            ExtraCostsSplit::Equal
        }
    }
}
