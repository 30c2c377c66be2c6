use quickcheck_macros::quickcheck;
use radbot_dashboard::domain::errors::LedgerError;
use radbot_dashboard::domain::shares::{
    LOCK_PERIOD_SECS, PackageId, SECONDS_PER_DAY, ShareAmount, SharePackage, SharePackageLedger,
    Timestamp, Usd,
};

const NOW_MS: u64 = 1_735_689_600_000;

fn package(id: &str, shares: f64, remaining: u64) -> SharePackage {
    SharePackage::restore(
        PackageId::from(id),
        ShareAmount::from(shares),
        Timestamp::from_millis(NOW_MS),
        Usd::from(1.2),
        Usd::from(shares * 1.2),
        remaining,
    )
}

#[quickcheck]
fn ticks_count_down_and_stop_at_zero(initial: u16, ticks: u16) -> bool {
    let mut pkg = package("q", 10.0, initial as u64);
    for _ in 0..ticks {
        pkg.tick();
    }
    pkg.time_remaining() == (initial as u64).saturating_sub(ticks as u64)
        && pkg.is_redeemable() == (pkg.time_remaining() == 0)
}

#[quickcheck]
fn redeemable_never_exceeds_total(lots: Vec<(u8, u16)>, ticks: u8) -> bool {
    let mut ledger = SharePackageLedger::from_packages(
        lots.iter()
            .enumerate()
            .map(|(i, (shares, remaining))| package(&i.to_string(), *shares as f64, *remaining as u64))
            .collect(),
    );
    for _ in 0..ticks {
        ledger.tick();
    }
    ledger.redeemable_shares() <= ledger.total_shares() + 1e-9
}

#[test]
fn sample_ledger_has_one_matured_lot() {
    let ledger = SharePackageLedger::sample(Timestamp::from_millis(NOW_MS));

    assert_eq!(ledger.len(), 3);
    assert_eq!(ledger.total_shares(), 425.0);
    assert_eq!(ledger.redeemable_shares(), 250.0);

    let matured = ledger.get(&PackageId::from("2")).unwrap();
    assert!(matured.is_redeemable());
    assert_eq!(matured.total_paid.value(), 287.5);
}

#[test]
fn two_day_package_matures_after_exactly_two_days_of_ticks() {
    let mut ledger = SharePackageLedger::from_packages(vec![package("3", 75.0, 2 * SECONDS_PER_DAY)]);
    let id = PackageId::from("3");

    for _ in 0..(2 * SECONDS_PER_DAY - 1) {
        assert!(ledger.tick().is_empty());
    }
    assert_eq!(ledger.get(&id).unwrap().time_remaining(), 1);

    assert_eq!(ledger.tick(), vec![id.clone()]);
    assert!(ledger.get(&id).unwrap().is_redeemable());

    // Further ticks leave a matured package alone.
    assert!(ledger.tick().is_empty());
    assert_eq!(ledger.get(&id).unwrap().time_remaining(), 0);
}

#[test]
fn redeeming_a_locked_package_fails_and_changes_nothing() {
    let ledger = SharePackageLedger::sample(Timestamp::from_millis(NOW_MS));
    let before = ledger.clone();

    let err = ledger.redeem(&PackageId::from("1")).unwrap_err();

    assert_eq!(err, LedgerError::NotRedeemable(PackageId::from("1")));
    assert_eq!(ledger, before);
}

#[test]
fn redeeming_a_matured_package_names_its_shares() {
    let ledger = SharePackageLedger::sample(Timestamp::from_millis(NOW_MS));

    let intent = ledger.redeem(&PackageId::from("2")).unwrap();

    assert_eq!(intent.package_id, PackageId::from("2"));
    assert_eq!(intent.shares.value(), 250.0);
    // The lot stays in the ledger and can be redeemed again.
    assert!(ledger.redeem(&PackageId::from("2")).is_ok());
}

#[test]
fn unknown_package_is_not_redeemable() {
    let ledger = SharePackageLedger::sample(Timestamp::from_millis(NOW_MS));
    let before = ledger.clone();

    let result = ledger.redeem(&PackageId::from("404"));

    assert_eq!(result, Err(LedgerError::NotRedeemable(PackageId::from("404"))));
    assert_eq!(ledger, before);
}

#[test]
fn fresh_purchase_locks_for_seven_days() {
    let pkg = SharePackage::purchase(
        PackageId::from("new"),
        ShareAmount::from(40.0),
        Usd::from(1.25),
        Timestamp::from_millis(NOW_MS),
    );
    assert_eq!(pkg.time_remaining(), LOCK_PERIOD_SECS);
    assert_eq!(pkg.total_paid.value(), 50.0);
    assert_eq!(pkg.maturity_progress(), 0.0);
}
