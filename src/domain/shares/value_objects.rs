use derive_more::{Constructor, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Lock period every package has to sit out before it can be redeemed.
pub const LOCK_PERIOD_SECS: u64 = 7 * SECONDS_PER_DAY;

/// Value Object - package identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "#{}", _0)]
pub struct PackageId(String);

impl PackageId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PackageId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PackageId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Value Object - amount in US dollars, kept at full precision
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Usd(f64);

impl Usd {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - fractional number of sRADB shares
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct ShareAmount(f64);

impl ShareAmount {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Value Object - milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, From, Into, Deref, Constructor, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn from_millis(value: u64) -> Self {
        Self(value)
    }

    /// Point in time `days` before `self`, saturating at the epoch.
    pub fn days_before(&self, days: u64) -> Self {
        Self(self.0.saturating_sub(days * SECONDS_PER_DAY * 1000))
    }
}

/// Mocked market quotes used by the trade view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketPrices {
    /// Price of one sRADB share when buying.
    pub share_price: Usd,
    pub srdbt_price: Usd,
    pub usdc_price: Usd,
}

impl MarketPrices {
    pub const fn mock() -> Self {
        Self {
            share_price: Usd(1.25),
            srdbt_price: Usd(1.30),
            usdc_price: Usd(1.00),
        }
    }
}

impl Default for MarketPrices {
    fn default() -> Self {
        Self::mock()
    }
}
