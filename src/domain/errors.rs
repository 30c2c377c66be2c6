use derive_more::Display;

use crate::domain::shares::PackageId;

/// Failures of the share package ledger.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum LedgerError {
    /// Locked, or not in the ledger at all.
    #[display(fmt = "package {} is not redeemable", _0)]
    NotRedeemable(PackageId),
}

impl std::error::Error for LedgerError {}

/// Failures of the purchase/redemption calculators and the buy form.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum TradeError {
    #[display(fmt = "Invalid amount: {}", _0)]
    InvalidAmount(String),
}

impl std::error::Error for TradeError {}

/// Failures while producing the shareable dashboard PNG.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum DashboardImageError {
    #[display(fmt = "Invalid payload: {}", _0)]
    InvalidPayload(String),
    #[display(fmt = "Template error: {}", _0)]
    Template(String),
    #[display(fmt = "Render error: {}", _0)]
    Render(String),
    #[display(fmt = "Network error: {}", _0)]
    Network(String),
    #[display(fmt = "Browser API error: {}", _0)]
    Browser(String),
}

impl std::error::Error for DashboardImageError {}

impl From<serde_json::Error> for DashboardImageError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidPayload(err.to_string())
    }
}

pub type LedgerResult<T> = Result<T, LedgerError>;
pub type TradeResult<T> = Result<T, TradeError>;
pub type ImageResult<T> = Result<T, DashboardImageError>;
