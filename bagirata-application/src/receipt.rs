use bagirata_domain::{Item, Money};
use rust_decimal::{prelude::FromPrimitive, Decimal};

use crate::{
    error::ReceiptIngestError,
    model::{ParsedItem, ParsedReceipt},
};

/// A receipt with every hole in the extractor output patched, ready to feed
/// the allocation engine.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedReceipt {
    pub restaurant: String,
    pub date: Option<String>,
    pub currency: String,
    pub items: Vec<Item>,
    pub subtotal: Money,
    pub tax_amount: Money,
    pub tax_percentage: Decimal,
    pub total: Money,
}

/// Extracts the receipt JSON from a fenced json code block and deserializes it.
pub fn receipt_from_model_output(output: &str) -> Result<ParsedReceipt, ReceiptIngestError> {
    let json = extract_json_block(output).ok_or(ReceiptIngestError::MissingJsonBlock)?;
    receipt_from_json(json)
}

pub fn receipt_from_json(json: &str) -> Result<ParsedReceipt, ReceiptIngestError> {
    Ok(serde_json::from_str(json)?)
}

pub fn extract_json_block(output: &str) -> Option<&str> {
    let start = output.find("```json")? + "```json".len();
    let rest = &output[start..];
    let end = rest.find("```")?;
    Some(rest[..end].trim())
}

/// Repairs a parsed receipt field by field.
///
/// Missing or garbled fields get defaults; the three amount fields back-fill
/// each other where possible (subtotal from total minus tax, total from
/// subtotal plus tax, subtotal from the item sum as a last resort).
pub fn normalize_receipt(parsed: &ParsedReceipt) -> NormalizedReceipt {
    let restaurant = nonempty_or(parsed.restaurant.as_deref(), "Unknown Restaurant");
    let currency = nonempty_or(parsed.currency.as_deref(), "IDR");
    let date = parsed
        .date
        .as_deref()
        .map(str::trim)
        .filter(|date| !date.is_empty())
        .map(str::to_owned);

    let items: Vec<Item> = parsed.items.iter().map(normalize_item).collect();

    let tax_amount = Money::from_f64(parsed.tax.amount.finite().unwrap_or(0.0)).round_to_cents();

    let parsed_subtotal = parsed.subtotal.finite();
    let parsed_total = parsed.total_amount.finite();

    let subtotal = match (parsed_subtotal, parsed_total) {
        (Some(subtotal), _) => Money::from_f64(subtotal),
        (None, Some(total)) => Money::from_f64(total) - tax_amount,
        (None, None) => items.iter().map(|item| item.price).sum(),
    }
    .round_to_cents();

    let total = match parsed_total {
        Some(total) => Money::from_f64(total),
        None => subtotal + tax_amount,
    }
    .round_to_cents();

    let tax_percentage = match parsed.tax.percentage.finite() {
        Some(percentage) => Decimal::from_f64(percentage).unwrap_or_default(),
        None => tax_percentage_for(tax_amount, subtotal),
    };

    NormalizedReceipt {
        restaurant,
        date,
        currency,
        items,
        subtotal,
        tax_amount,
        tax_percentage,
        total,
    }
}

/// Derives a tax rate from an absolute tax amount. Zero when the subtotal is
/// zero, since no meaningful rate exists.
pub fn tax_percentage_for(tax_amount: Money, subtotal: Money) -> Decimal {
    if subtotal == Money::ZERO {
        return Decimal::ZERO;
    }
    tax_amount.as_decimal() / subtotal.as_decimal() * Decimal::ONE_HUNDRED
}

fn normalize_item(parsed: &ParsedItem) -> Item {
    let name = nonempty_or(parsed.name.as_deref(), "Unknown Item");

    let raw_price = parsed.price.finite().unwrap_or(0.0);
    let price = if raw_price < 0.0 {
        tracing::debug!(item = %name, price = raw_price, "negative price clamped to zero");
        Money::ZERO
    } else {
        Money::from_f64(raw_price).round_to_cents()
    };

    let quantity = parsed
        .quantity
        .finite()
        .map(f64::trunc)
        .filter(|quantity| *quantity >= 1.0)
        .map(|quantity| quantity as u32)
        .unwrap_or(1);

    let mut item = Item::new(name, price);
    item.quantity = quantity;
    item
}

fn nonempty_or(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_owned(),
        _ => fallback.to_owned(),
    }
}
