use super::*;
use crate::fixtures;

fn reward_costing(points: u32) -> Reward {
    fixtures::rewards()
        .into_iter()
        .find(|r| r.points == points)
        .unwrap()
}

#[test]
fn test_default_balance_is_starting_points() {
    assert_eq!(PointsLedger::default().balance(), 285);
}

#[test]
fn test_redeemable_rewards_at_starting_balance() {
    let ledger = PointsLedger::default();
    let flags: Vec<(u32, bool)> = fixtures::rewards()
        .iter()
        .map(|r| (r.points, ledger.can_redeem(r)))
        .collect();
    assert_eq!(
        flags,
        vec![(50, true), (150, true), (200, true), (500, false)]
    );
}

#[test]
fn test_can_redeem_boundary_is_inclusive() {
    let ledger = PointsLedger::new(150);
    assert!(ledger.can_redeem(&reward_costing(150)));
    assert!(!ledger.can_redeem(&reward_costing(200)));
}

#[test]
fn test_redeem_deducts_cost() {
    let mut ledger = PointsLedger::default();
    let remaining = ledger.redeem(&reward_costing(200)).unwrap();
    assert_eq!(remaining, 85);
    assert_eq!(ledger.balance(), 85);

    // 余额变化后，兑换资格随之变化
    assert!(ledger.can_redeem(&reward_costing(50)));
    assert!(!ledger.can_redeem(&reward_costing(150)));
}

#[test]
fn test_redeem_insufficient_leaves_balance_untouched() {
    let mut ledger = PointsLedger::default();
    let err = ledger.redeem(&reward_costing(500)).unwrap_err();
    assert_eq!(
        err,
        RedeemError::InsufficientPoints {
            cost: 500,
            balance: 285
        }
    );
    assert_eq!(ledger.balance(), 285);
    assert_eq!(err.to_string(), "Not enough points: 500 needed, 285 available");
}
