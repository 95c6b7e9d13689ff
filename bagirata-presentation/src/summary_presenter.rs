use bagirata_domain::{BillSummary, Money};
use bagirata_i18n as i18n;

use crate::currency::{format_currency, CurrencyStyle};

pub struct SummaryPresenter;

impl SummaryPresenter {
    /// Renders a summary as copy-pasteable chat text.
    ///
    /// Tax and service fee lines are omitted when the amount is zero. People
    /// appear in the summary's own order, so the caller gets the engine's
    /// largest-debtor-first sorting for free.
    pub fn sharable_summary(summary: &BillSummary, bill_name: &str, style: &CurrencyStyle) -> String {
        let mut text = String::new();

        text.push_str(&i18n::recap_header(bill_name));
        text.push_str("\n\n");

        push_amount_line(
            &mut text,
            i18n::SUBTOTAL,
            summary.bill_totals.subtotal,
            style,
        );
        if summary.bill_totals.tax != Money::ZERO {
            push_amount_line(&mut text, i18n::TAX, summary.bill_totals.tax, style);
        }
        if summary.bill_totals.service_fee != Money::ZERO {
            push_amount_line(
                &mut text,
                i18n::SERVICE_FEE,
                summary.bill_totals.service_fee,
                style,
            );
        }
        push_amount_line(&mut text, i18n::TOTAL, summary.bill_totals.total, style);

        text.push('\n');
        text.push_str(i18n::WHO_PAYS);
        text.push('\n');

        for person in &summary.people {
            push_amount_line(&mut text, &person.name, person.amount_owed, style);
        }

        text.push('\n');
        text.push_str(i18n::TAGLINE);

        text
    }
}

fn push_amount_line(text: &mut String, label: &str, amount: Money, style: &CurrencyStyle) {
    text.push_str(label);
    text.push_str(": ");
    text.push_str(&format_currency(amount, style));
    text.push('\n');
}
