#![warn(clippy::uninlined_format_args)]

pub mod currency;
pub mod summary_presenter;

pub use currency::{format_currency, CurrencyStyle};
pub use summary_presenter::SummaryPresenter;
