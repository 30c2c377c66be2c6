use crate::domain::errors::{LedgerError, LedgerResult};
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::shares::value_objects::{
    LOCK_PERIOD_SECS, PackageId, SECONDS_PER_DAY, ShareAmount, Timestamp, Usd,
};

/// Entity - one purchase lot with its own maturation countdown
#[derive(Debug, Clone, PartialEq)]
pub struct SharePackage {
    pub id: PackageId,
    pub shares: ShareAmount,
    pub purchase_date: Timestamp,
    pub purchase_price: Usd,
    /// Fixed at purchase time, never re-derived.
    pub total_paid: Usd,
    time_remaining: u64,
}

impl SharePackage {
    /// Fresh purchase: pays `shares * price` and starts the full lock period.
    pub fn purchase(id: PackageId, shares: ShareAmount, price: Usd, purchase_date: Timestamp) -> Self {
        Self {
            id,
            shares,
            purchase_date,
            purchase_price: price,
            total_paid: Usd::from(shares.value() * price.value()),
            time_remaining: LOCK_PERIOD_SECS,
        }
    }

    /// Rebuild a package from stored figures.
    pub fn restore(
        id: PackageId,
        shares: ShareAmount,
        purchase_date: Timestamp,
        purchase_price: Usd,
        total_paid: Usd,
        time_remaining: u64,
    ) -> Self {
        Self { id, shares, purchase_date, purchase_price, total_paid, time_remaining }
    }

    /// Whole seconds until maturation.
    pub fn time_remaining(&self) -> u64 {
        self.time_remaining
    }

    pub fn is_redeemable(&self) -> bool {
        self.time_remaining == 0
    }

    /// Advance one second. Returns `true` when this call matured the package.
    pub fn tick(&mut self) -> bool {
        if self.time_remaining == 0 {
            return false;
        }
        self.time_remaining -= 1;
        self.time_remaining == 0
    }

    /// Share of the lock period already served, in percent.
    pub fn maturity_progress(&self) -> f64 {
        if self.is_redeemable() {
            return 100.0;
        }
        let served = LOCK_PERIOD_SECS.saturating_sub(self.time_remaining) as f64;
        (served / LOCK_PERIOD_SECS as f64 * 100.0).clamp(0.0, 100.0)
    }
}

/// Confirmation that a package may be redeemed. Settlement happens elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct RedemptionIntent {
    pub package_id: PackageId,
    pub shares: ShareAmount,
}

/// Aggregate - every package the user holds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SharePackageLedger {
    packages: Vec<SharePackage>,
}

impl SharePackageLedger {
    pub fn new() -> Self {
        Self { packages: Vec::new() }
    }

    pub fn from_packages(packages: Vec<SharePackage>) -> Self {
        Self { packages }
    }

    /// Demo holdings relative to `now`: one matured lot and two locked ones.
    pub fn sample(now: Timestamp) -> Self {
        Self::from_packages(vec![
            SharePackage::restore(
                PackageId::from("1"),
                ShareAmount::from(100.0),
                now.days_before(3),
                Usd::from(1.2),
                Usd::from(120.0),
                4 * SECONDS_PER_DAY,
            ),
            SharePackage::restore(
                PackageId::from("2"),
                ShareAmount::from(250.0),
                now.days_before(8),
                Usd::from(1.15),
                Usd::from(287.5),
                0,
            ),
            SharePackage::restore(
                PackageId::from("3"),
                ShareAmount::from(75.0),
                now.days_before(5),
                Usd::from(1.18),
                Usd::from(88.5),
                2 * SECONDS_PER_DAY,
            ),
        ])
    }

    pub fn packages(&self) -> &[SharePackage] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn get(&self, id: &PackageId) -> Option<&SharePackage> {
        self.packages.iter().find(|pkg| &pkg.id == id)
    }

    pub fn add(&mut self, package: SharePackage) {
        self.packages.push(package);
    }

    /// One-second step for every locked package. Returns the ids that matured.
    pub fn tick(&mut self) -> Vec<PackageId> {
        let matured: Vec<PackageId> = self
            .packages
            .iter_mut()
            .filter_map(|pkg| pkg.tick().then(|| pkg.id.clone()))
            .collect();

        for id in &matured {
            crate::log_info!(LogComponent::Domain("Ledger"), "🔓 Package {} is now redeemable", id);
        }
        matured
    }

    pub fn total_shares(&self) -> f64 {
        self.packages.iter().map(|pkg| pkg.shares.value()).sum()
    }

    pub fn redeemable_shares(&self) -> f64 {
        self.packages
            .iter()
            .filter(|pkg| pkg.is_redeemable())
            .map(|pkg| pkg.shares.value())
            .sum()
    }

    /// Redeemable share of the holdings in percent, 0 for an empty ledger.
    pub fn redeemable_ratio(&self) -> f64 {
        let total = self.total_shares();
        if total <= 0.0 {
            return 0.0;
        }
        self.redeemable_shares() / total * 100.0
    }

    /// Checks that `id` may be redeemed. The package stays in the ledger and
    /// stays redeemable, so the same lot can be redeemed again.
    pub fn redeem(&self, id: &PackageId) -> LedgerResult<RedemptionIntent> {
        let Some(pkg) = self.get(id) else {
            get_logger().warn(
                LogComponent::Domain("Ledger"),
                &format!("Redeem rejected for {}: unknown package id", id),
            );
            return Err(LedgerError::NotRedeemable(id.clone()));
        };

        if !pkg.is_redeemable() {
            get_logger().warn(
                LogComponent::Domain("Ledger"),
                &format!("Redeem rejected for {}: {}s remaining", id, pkg.time_remaining()),
            );
            return Err(LedgerError::NotRedeemable(id.clone()));
        }

        get_logger().info(
            LogComponent::Domain("Ledger"),
            &format!("Redemption requested for {} ({} shares)", id, pkg.shares.value()),
        );
        Ok(RedemptionIntent { package_id: pkg.id.clone(), shares: pkg.shares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locked(id: &str, remaining: u64) -> SharePackage {
        SharePackage::restore(
            PackageId::from(id),
            ShareAmount::from(10.0),
            Timestamp::from_millis(0),
            Usd::from(1.0),
            Usd::from(10.0),
            remaining,
        )
    }

    #[test]
    fn tick_reports_the_package_that_matures() {
        let mut ledger = SharePackageLedger::from_packages(vec![locked("a", 1), locked("b", 3)]);
        assert_eq!(ledger.tick(), vec![PackageId::from("a")]);
        assert!(ledger.tick().is_empty());
        assert_eq!(ledger.tick(), vec![PackageId::from("b")]);
    }

    #[test]
    fn purchase_starts_full_lock() {
        let pkg = SharePackage::purchase(
            PackageId::from("p"),
            ShareAmount::from(4.0),
            Usd::from(1.25),
            Timestamp::from_millis(1),
        );
        assert_eq!(pkg.time_remaining(), LOCK_PERIOD_SECS);
        assert_eq!(pkg.total_paid.value(), 5.0);
        assert_eq!(pkg.maturity_progress(), 0.0);
    }

    #[test]
    fn progress_is_halfway_at_half_lock() {
        let pkg = locked("x", LOCK_PERIOD_SECS / 2);
        assert!((pkg.maturity_progress() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn progress_never_negative_when_remaining_exceeds_lock() {
        let pkg = locked("x", LOCK_PERIOD_SECS * 2);
        assert_eq!(pkg.maturity_progress(), 0.0);
    }
}
