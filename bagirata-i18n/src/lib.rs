#![warn(clippy::uninlined_format_args)]

#[cfg(all(feature = "id", feature = "en"))]
compile_error!("Cannot enable both 'id' and 'en' features at the same time");

#[cfg(feature = "en")]
pub mod strings {
    pub const SUBTOTAL: &str = "Subtotal";
    pub const TAX: &str = "Tax";
    pub const SERVICE_FEE: &str = "Service Fee";
    pub const TOTAL: &str = "Total";
    pub const WHO_PAYS: &str = "💰 Who Pays What 💰";
    pub const TAGLINE: &str = "Split with Bagirata, so everyone knows who pays what!";
    pub const DEFAULT_BILL_NAME: &str = "Split Bill";
}

#[cfg(not(feature = "en"))]
pub mod strings {
    pub const SUBTOTAL: &str = "Subtotal";
    pub const TAX: &str = "Tax";
    pub const SERVICE_FEE: &str = "Service Fee";
    pub const TOTAL: &str = "Total";
    pub const WHO_PAYS: &str = "💰 Yang Harus Dibayar 💰";
    pub const TAGLINE: &str = "Pakai Bagirata, Biar Siapa Bayar Berapa, Makin Jelas!";
    pub const DEFAULT_BILL_NAME: &str = "Split Bill";
}

pub use strings::*;

#[cfg(feature = "en")]
pub fn recap_header(bill_name: impl std::fmt::Display) -> String {
    format!("📝 Bill Recap {bill_name} 📝")
}

#[cfg(not(feature = "en"))]
pub fn recap_header(bill_name: impl std::fmt::Display) -> String {
    format!("📝 Rekapitulasi Tagihan {bill_name} 📝")
}
