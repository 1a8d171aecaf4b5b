mod common;

use anchor_lang::prelude::Pubkey;
use proptest::prelude::*;

use ante_ledger::errors::AnteError;
use ante_ledger::odds::{compute_odds, imbalance_component, time_component};
use ante_ledger::state::*;
use common::*;

fn ante_with(for_total: u64, against_total: u64) -> Ante {
    Ante {
        for_total,
        against_total,
        staking_start_time: START,
        staking_deadline: START + DAY,
        unstaking_deadline: START + 7 * DAY,
        ..Ante::default()
    }
}

proptest! {
    /// Same inputs, same odds.
    #[test]
    fn odds_are_deterministic(
        for_total in 0u64..1_000_000_000_000,
        against_total in 0u64..1_000_000_000_000,
        amount in 1u64..1_000_000_000_000,
        is_for in any::<bool>(),
        offset in 0i64..=DAY,
    ) {
        let ante = ante_with(for_total, against_total);
        let side = Side::from(is_for);
        let first = compute_odds(&ante, amount, side, START + offset);
        let again = compute_odds(&ante.clone(), amount, side, START + offset);
        prop_assert_eq!(first, again);
    }

    /// Time factor stays in [100, 150] and never rises as time passes.
    #[test]
    fn time_component_bounded_and_decaying(
        window in 1i64..10 * DAY,
        t1 in 0i64..20 * DAY,
        dt in 0i64..DAY,
    ) {
        let a = time_component(START, START + window, START + t1);
        let b = time_component(START, START + window, START + t1 + dt);
        prop_assert!((100..=150).contains(&a));
        prop_assert!(b <= a, "time factor rose from {} to {}", a, b);
    }

    /// Imbalance stays in [100, 200].
    #[test]
    fn imbalance_bounded(
        for_total in 0u64..u64::MAX / 4,
        against_total in 0u64..u64::MAX / 4,
        amount in 0u64..u64::MAX / 4,
        is_for in any::<bool>(),
    ) {
        let side = Side::from(is_for);
        let imbalance = imbalance_component(for_total, against_total, amount, side);
        prop_assert!((100..=200).contains(&imbalance));
    }

    /// With no side flips, side totals equal the per-side sum of stakes
    /// after every deposit.
    #[test]
    fn totals_match_stakes(
        deposits in prop::collection::vec((0usize..5, 1u64..1_000_000, 0i64..=DAY), 1..40),
    ) {
        let mut market = Market::literal();
        let stakers: Vec<Pubkey> = (0..5).map(|_| Pubkey::new_unique()).collect();

        let mut deposits = deposits;
        deposits.sort_by_key(|(_, _, at)| *at);

        for (who, amount, offset) in deposits {
            let side = Side::from(who % 2 == 0);
            market.deposit(stakers[who], amount, side, START + offset).unwrap();

            prop_assert_eq!(market.ante.for_total, market.staked_on(Side::For));
            prop_assert_eq!(market.ante.against_total, market.staked_on(Side::Against));
        }
        prop_assert_eq!(market.vault.deposited, market.ante.total_staked());
    }

    /// Under the strict side policy, random sides never break the totals:
    /// flips are refused and leave nothing behind.
    #[test]
    fn strict_policy_keeps_totals_consistent(
        deposits in prop::collection::vec((0usize..4, 1u64..1_000_000, any::<bool>()), 1..40),
    ) {
        let mut market = Market::open(OddsPolicy::Weighted, SidePolicy::Reject);
        let stakers: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();

        for (i, (who, amount, is_for)) in deposits.into_iter().enumerate() {
            let at = START + i as i64 * 60;
            match market.deposit(stakers[who], amount, Side::from(is_for), at) {
                Ok(_) => {}
                Err(err) => {
                    prop_assert_eq!(err, ante_err(AnteError::SideMismatch));
                }
            }
        }

        prop_assert_eq!(market.ante.for_total, market.staked_on(Side::For));
        prop_assert_eq!(market.ante.against_total, market.staked_on(Side::Against));
        prop_assert_eq!(market.vault.deposited, market.ante.total_staked());
    }

    /// Weighted odds always sit between the lowest and highest quote.
    #[test]
    fn weighted_odds_stay_within_quotes(
        amounts in prop::collection::vec((1u64..1_000_000, 0i64..=DAY), 1..10),
    ) {
        let mut market = Market::open(OddsPolicy::Weighted, SidePolicy::Reject);
        let staker = Pubkey::new_unique();
        let mut amounts = amounts;
        amounts.sort_by_key(|(_, at)| *at);

        let mut quotes = Vec::new();
        for (amount, offset) in amounts {
            quotes.push(market.deposit(staker, amount, Side::For, START + offset).unwrap());
        }

        let recorded = market.stake(&staker).odds;
        let lo = *quotes.iter().min().unwrap();
        let hi = *quotes.iter().max().unwrap();
        prop_assert!(recorded >= lo && recorded <= hi, "{} outside [{}, {}]", recorded, lo, hi);
    }
}
