use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumString};

use crate::domain::errors::{DashboardImageError, ImageResult};

/// One bar of the monthly performance chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub month: String,
    pub value: f64,
}

impl PerformancePoint {
    pub fn new(month: &str, value: f64) -> Self {
        Self { month: month.to_string(), value }
    }
}

/// Payload of the dashboard image endpoint. Built once per render request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub name: String,
    pub current_value: f64,
    pub profit_percentage: f64,
    #[serde(rename = "profitLoss")]
    pub profit_amount: f64,
    pub referral_earnings: f64,
    #[serde(rename = "totalReferrals")]
    pub referral_count: u32,
    #[serde(rename = "totalShares")]
    pub share_count: f64,
    pub performance_data: Vec<PerformancePoint>,
}

impl PortfolioSnapshot {
    /// Parse and validate a request body.
    pub fn from_json(body: &[u8]) -> ImageResult<Self> {
        let snapshot: Self = serde_json::from_slice(body)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn validate(&self) -> ImageResult<()> {
        if self.name.trim().is_empty() {
            return Err(DashboardImageError::InvalidPayload("name must not be empty".to_string()));
        }

        let figures = [
            ("currentValue", self.current_value),
            ("profitPercentage", self.profit_percentage),
            ("profitLoss", self.profit_amount),
            ("referralEarnings", self.referral_earnings),
            ("totalShares", self.share_count),
        ];
        if let Some((field, _)) = figures.iter().find(|(_, value)| !value.is_finite()) {
            return Err(DashboardImageError::InvalidPayload(format!("{} is not a finite number", field)));
        }

        if let Some(point) = self.performance_data.iter().find(|p| !p.value.is_finite()) {
            return Err(DashboardImageError::InvalidPayload(format!(
                "performance value for {} is not a finite number",
                point.month
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Buy,
    Sell,
    Referral,
}

impl TransactionKind {
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Buy => "📈",
            Self::Sell => "📉",
            Self::Referral => "🎁",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay, EnumString, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    /// Badge color class used by the transaction list.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Completed => "success",
            Self::Pending => "warning",
            Self::Failed => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub amount: f64,
    pub shares: f64,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub status: TransactionStatus,
}

/// Everything the dashboard view shows about the signed-in user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPortfolio {
    pub name: String,
    pub wallet_address: String,
    pub total_shares: f64,
    pub current_value: f64,
    pub total_invested: f64,
    pub profit_loss: f64,
    pub profit_percentage: f64,
    pub total_referrals: u32,
    pub referral_earnings: f64,
    pub referral_code: String,
    pub recent_transactions: Vec<Transaction>,
    pub performance_data: Vec<PerformancePoint>,
}

impl UserPortfolio {
    pub fn mock() -> Self {
        Self {
            name: "John Doe".to_string(),
            wallet_address: "0x1234...5678".to_string(),
            total_shares: 15420.5,
            current_value: 19275.63,
            total_invested: 15000.0,
            profit_loss: 4275.63,
            profit_percentage: 28.5,
            total_referrals: 12,
            referral_earnings: 1250.0,
            referral_code: "RADB123".to_string(),
            recent_transactions: vec![
                Transaction {
                    kind: TransactionKind::Buy,
                    amount: 1000.0,
                    shares: 800.0,
                    date: "2024-01-15".to_string(),
                    status: TransactionStatus::Completed,
                },
                Transaction {
                    kind: TransactionKind::Sell,
                    amount: 500.0,
                    shares: 400.0,
                    date: "2024-01-10".to_string(),
                    status: TransactionStatus::Completed,
                },
                Transaction {
                    kind: TransactionKind::Referral,
                    amount: 100.0,
                    shares: 0.0,
                    date: "2024-01-08".to_string(),
                    status: TransactionStatus::Completed,
                },
            ],
            performance_data: vec![
                PerformancePoint::new("Jan", 12000.0),
                PerformancePoint::new("Feb", 13500.0),
                PerformancePoint::new("Mar", 14200.0),
                PerformancePoint::new("Apr", 15800.0),
                PerformancePoint::new("May", 17200.0),
                PerformancePoint::new("Jun", 19275.0),
            ],
        }
    }

    pub fn is_profitable(&self) -> bool {
        self.profit_loss >= 0.0
    }

    pub fn snapshot(&self) -> PortfolioSnapshot {
        PortfolioSnapshot {
            name: self.name.clone(),
            current_value: self.current_value,
            profit_percentage: self.profit_percentage,
            profit_amount: self.profit_loss,
            referral_earnings: self.referral_earnings,
            referral_count: self.total_referrals,
            share_count: self.total_shares,
            performance_data: self.performance_data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_carries_the_headline_figures() {
        let user = UserPortfolio::mock();
        let snapshot = user.snapshot();
        assert_eq!(snapshot.name, "John Doe");
        assert_eq!(snapshot.referral_count, 12);
        assert_eq!(snapshot.performance_data.len(), 6);
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut snapshot = UserPortfolio::mock().snapshot();
        snapshot.name = "   ".to_string();
        assert!(matches!(snapshot.validate(), Err(DashboardImageError::InvalidPayload(_))));
    }

    #[test]
    fn unknown_fields_in_body_are_ignored() {
        let body = br#"{
            "name": "Ann",
            "walletAddress": "0xabc",
            "currentValue": 1.0,
            "profitPercentage": 2.0,
            "profitLoss": 3.0,
            "referralEarnings": 4.0,
            "totalReferrals": 5,
            "totalShares": 6.0,
            "performanceData": [{"month": "Jan", "value": 7.0}]
        }"#;
        let snapshot = PortfolioSnapshot::from_json(body).unwrap();
        assert_eq!(snapshot.profit_amount, 3.0);
        assert_eq!(snapshot.performance_data[0], PerformancePoint::new("Jan", 7.0));
    }

    #[test]
    fn status_colors_follow_badge_palette() {
        assert_eq!(TransactionStatus::Completed.color(), "success");
        assert_eq!(TransactionStatus::Failed.color(), "danger");
    }
}
