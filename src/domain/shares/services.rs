//! Pure purchase/redemption math. Every figure stays at full `f64` precision;
//! rounding happens only when a value is formatted for display.

use crate::domain::errors::{TradeError, TradeResult};
use crate::domain::shares::entities::SharePackage;
use crate::domain::shares::value_objects::{MarketPrices, ShareAmount, Usd};

/// Flat network fee, added on purchase and subtracted on redemption.
pub const NETWORK_FEE_USD: f64 = 0.50;

/// Shares bought by `usd_amount` at `price_per_share`.
pub fn shares_for_amount(usd_amount: f64, price_per_share: f64) -> TradeResult<f64> {
    if !price_per_share.is_finite() || price_per_share <= 0.0 {
        return Err(TradeError::InvalidAmount(format!(
            "price per share must be positive, got {}",
            price_per_share
        )));
    }
    Ok(usd_amount / price_per_share)
}

/// Part of `balance` that `usd_amount` represents, clamped to `0..=100`.
pub fn percentage_for_amount(usd_amount: f64, balance: f64) -> f64 {
    if balance <= 0.0 || !usd_amount.is_finite() {
        return 0.0;
    }
    (usd_amount / balance * 100.0).clamp(0.0, 100.0)
}

pub fn amount_for_percentage(percentage: f64, balance: f64) -> f64 {
    balance * percentage / 100.0
}

pub fn redemption_value(shares: f64, price: f64) -> f64 {
    shares * price
}

pub fn purchase_total(amount: f64) -> f64 {
    amount + NETWORK_FEE_USD
}

pub fn redemption_proceeds(value: f64) -> f64 {
    value - NETWORK_FEE_USD
}

/// Parse user input into a positive dollar amount.
pub fn parse_amount(input: &str) -> TradeResult<f64> {
    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| TradeError::InvalidAmount(format!("'{}' is not a number", input)))?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(TradeError::InvalidAmount(format!("{} must be greater than zero", amount)));
    }
    Ok(amount)
}

/// Everything the purchase confirmation shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PurchaseQuote {
    pub amount: Usd,
    pub shares: ShareAmount,
    pub price_per_share: Usd,
    pub fee: Usd,
    pub total_cost: Usd,
}

impl PurchaseQuote {
    pub fn new(amount: f64, price_per_share: f64) -> TradeResult<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(TradeError::InvalidAmount(format!("{} must be greater than zero", amount)));
        }
        let shares = shares_for_amount(amount, price_per_share)?;
        Ok(Self {
            amount: Usd::from(amount),
            shares: ShareAmount::from(shares),
            price_per_share: Usd::from(price_per_share),
            fee: Usd::from(NETWORK_FEE_USD),
            total_cost: Usd::from(purchase_total(amount)),
        })
    }
}

/// Everything the redemption confirmation shows for one package.
#[derive(Debug, Clone, PartialEq)]
pub struct RedemptionQuote {
    pub shares: ShareAmount,
    pub purchase_price: Usd,
    pub srdbt_price: Usd,
    pub srdbt_value: Usd,
    pub usdc_value: Usd,
    pub fee: Usd,
    pub usdc_to_receive: Usd,
}

impl RedemptionQuote {
    pub fn for_package(package: &SharePackage, prices: &MarketPrices) -> Self {
        let shares = package.shares.value();
        let usdc_value = redemption_value(shares, prices.usdc_price.value());
        Self {
            shares: package.shares,
            purchase_price: package.purchase_price,
            srdbt_price: prices.srdbt_price,
            srdbt_value: Usd::from(redemption_value(shares, prices.srdbt_price.value())),
            usdc_value: Usd::from(usdc_value),
            fee: Usd::from(NETWORK_FEE_USD),
            usdc_to_receive: Usd::from(redemption_proceeds(usdc_value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_price_is_rejected() {
        assert!(shares_for_amount(100.0, 0.0).is_err());
        assert!(shares_for_amount(100.0, -1.0).is_err());
    }

    #[test]
    fn percentage_clamps_to_full_balance() {
        assert_eq!(percentage_for_amount(9000.0, 5000.0), 100.0);
        assert_eq!(percentage_for_amount(-5.0, 5000.0), 0.0);
        assert_eq!(percentage_for_amount(10.0, 0.0), 0.0);
    }

    #[test]
    fn purchase_quote_adds_fee() {
        let quote = PurchaseQuote::new(1250.0, 1.25).unwrap();
        assert_eq!(quote.shares.value(), 1000.0);
        assert_eq!(quote.total_cost.value(), 1250.5);
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert!(parse_amount("").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-3").is_err());
        assert!(parse_amount("NaN").is_err());
        assert_eq!(parse_amount(" 12.5 ").unwrap(), 12.5);
    }
}
