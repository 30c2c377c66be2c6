use crate::domain::errors::TradeResult;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::shares::{
    PurchaseQuote, amount_for_percentage, parse_amount, percentage_for_amount, shares_for_amount,
};

/// Mocked spendable balance of the connected wallet.
pub const USER_BALANCE_USD: f64 = 5000.0;
/// Shares still offered for sale.
pub const AVAILABLE_SHARES: f64 = 1_000_000.0;
/// Quick-select slider granularity, in percent.
pub const SLIDER_STEP: f64 = 25.0;

/// State of the buy form: the typed amount and the quick-select slider
/// drive each other.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseForm {
    amount_text: String,
    /// Exact amount behind `amount_text`; the text is only a rendering.
    amount: f64,
    percentage: f64,
    balance: f64,
    price_per_share: f64,
}

impl PurchaseForm {
    pub fn new(balance: f64, price_per_share: f64) -> Self {
        Self {
            amount_text: String::new(),
            amount: 0.0,
            percentage: 0.0,
            balance,
            price_per_share,
        }
    }

    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn price_per_share(&self) -> f64 {
        self.price_per_share
    }

    /// Typed input. Unparsable text counts as zero for the slider.
    pub fn set_amount_text(&mut self, text: &str) {
        self.amount_text = text.to_string();
        self.amount = text.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0);
        self.percentage = percentage_for_amount(self.amount, self.balance);
    }

    /// Slider input, snapped to `SLIDER_STEP`.
    pub fn set_percentage(&mut self, percentage: f64) {
        let snapped = ((percentage / SLIDER_STEP).round() * SLIDER_STEP).clamp(0.0, 100.0);
        self.percentage = snapped;
        self.amount = amount_for_percentage(snapped, self.balance);
        self.amount_text = format!("{:.2}", self.amount);
    }

    /// Shares the current amount buys, if the amount is positive.
    pub fn shares_to_buy(&self) -> Option<f64> {
        if self.amount <= 0.0 {
            return None;
        }
        shares_for_amount(self.amount, self.price_per_share).ok()
    }

    pub fn can_buy(&self) -> bool {
        parse_amount(&self.amount_text).is_ok()
    }

    pub fn quote(&self) -> TradeResult<PurchaseQuote> {
        parse_amount(&self.amount_text)?;
        PurchaseQuote::new(self.amount, self.price_per_share)
    }

    /// Purchase settlement is not wired to a wallet; confirmation only logs.
    pub fn confirm(&self) -> TradeResult<PurchaseQuote> {
        let quote = self.quote()?;
        get_logger().info(
            LogComponent::Application("PurchaseForm"),
            &format!(
                "🛒 Purchase confirmed: ${:.2} for {:.2} sRADB (total ${:.2})",
                quote.amount.value(),
                quote.shares.value(),
                quote.total_cost.value()
            ),
        );
        Ok(quote)
    }

    pub fn reset(&mut self) {
        self.amount_text.clear();
        self.amount = 0.0;
        self.percentage = 0.0;
    }
}
