use std::borrow::Cow;

use bagirata_domain::Money;
use rust_decimal::{prelude::ToPrimitive, Decimal, RoundingStrategy};

/// Locale-specific rendering rules for one currency.
///
/// The engine's home locale is Indonesian Rupiah (no fraction digits, dot
/// grouping), but every field is parameterizable so callers can render other
/// currencies without touching the formatter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyStyle {
    pub code: Cow<'static, str>,
    pub symbol: Cow<'static, str>,
    pub fraction_digits: u32,
    pub grouping_separator: char,
    pub decimal_separator: char,
}

impl CurrencyStyle {
    /// Indonesian Rupiah: `Rp 17.500`.
    pub fn idr() -> Self {
        Self {
            code: Cow::Borrowed("IDR"),
            symbol: Cow::Borrowed("Rp"),
            fraction_digits: 0,
            grouping_separator: '.',
            decimal_separator: ',',
        }
    }

    /// US Dollar: `$1,234.50`.
    pub fn usd() -> Self {
        Self {
            code: Cow::Borrowed("USD"),
            symbol: Cow::Borrowed("$"),
            fraction_digits: 2,
            grouping_separator: ',',
            decimal_separator: '.',
        }
    }
}

impl Default for CurrencyStyle {
    fn default() -> Self {
        Self::idr()
    }
}

/// Formats an amount under the given style: rounded half away from zero to
/// the style's fraction digits, integer part grouped in thousands.
pub fn format_currency(amount: Money, style: &CurrencyStyle) -> String {
    let rounded = amount.as_decimal().round_dp_with_strategy(
        style.fraction_digits,
        RoundingStrategy::MidpointAwayFromZero,
    );
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let absolute = rounded.abs();

    let sign = if negative { "-" } else { "" };
    // An alphabetic symbol reads as a word and gets a space before the number.
    let spacer = if style.symbol.chars().last().is_some_and(char::is_alphabetic) {
        " "
    } else {
        ""
    };

    let Some(digits) = scaled_units(absolute, style.fraction_digits) else {
        // Out of integer range; fall back to the plain decimal rendering.
        return format!("{sign}{}{spacer}{absolute}", style.symbol);
    };

    let scale = 10_i128.pow(style.fraction_digits);
    let integer_part = group_thousands(digits / scale, style.grouping_separator);

    if style.fraction_digits == 0 {
        return format!("{sign}{}{spacer}{integer_part}", style.symbol);
    }

    let fraction = digits % scale;
    format!(
        "{sign}{}{spacer}{integer_part}{}{fraction:0width$}",
        style.symbol,
        style.decimal_separator,
        width = style.fraction_digits as usize
    )
}

fn scaled_units(absolute: Decimal, fraction_digits: u32) -> Option<i128> {
    let factor = Decimal::from_i128_with_scale(10_i128.checked_pow(fraction_digits)?, 0);
    absolute.checked_mul(factor)?.to_i128()
}

fn group_thousands(value: i128, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (idx, c) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    grouped
}
