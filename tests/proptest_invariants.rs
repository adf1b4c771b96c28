//! Property-based tests for cost engine invariants.
//!
//! These tests use proptest to verify that the decomposition identities and
//! the selection and accumulation rules hold across random transactions.

use nanotca::{Cost, CostEngine, Fee, ImplementationShortfallEngine, Transaction};
use proptest::prelude::*;

/// Generate a price in a realistic range
fn price_strategy() -> impl Strategy<Value = f64> {
    0.01f64..1_000.0
}

/// Generate a planned quantity
fn shares_strategy() -> impl Strategy<Value = f64> {
    1.0f64..100_000.0
}

fn fee_strategy() -> impl Strategy<Value = Fee> {
    (0.0f64..500.0).prop_map(Fee::new)
}

/// A fully executed transaction
fn full_fill_strategy() -> impl Strategy<Value = Transaction> {
    (
        shares_strategy(),
        price_strategy(),
        price_strategy(),
        price_strategy(),
        fee_strategy(),
    )
        .prop_map(|(shares, delay, avg, decision, fee)| {
            Transaction::new(shares, shares, delay, avg, decision).with_fee(fee)
        })
}

/// A partially executed transaction with an end price
fn partial_fill_strategy() -> impl Strategy<Value = Transaction> {
    (
        shares_strategy(),
        0.0f64..1.0,
        price_strategy(),
        price_strategy(),
        price_strategy(),
        price_strategy(),
        fee_strategy(),
    )
        .prop_filter_map(
            "fill ratio rounded to a full fill",
            |(shares, ratio, delay, avg, decision, end, fee)| {
                let executed = shares * ratio;
                (executed != shares).then(|| {
                    Transaction::new(shares, executed, delay, avg, decision)
                        .with_end_price(end)
                        .with_fee(fee)
                })
            },
        )
}

fn any_transaction_strategy() -> impl Strategy<Value = Transaction> {
    prop_oneof![full_fill_strategy(), partial_fill_strategy()]
}

fn records_for(tx: &Transaction) -> usize {
    if tx.is_fully_executed() { 1 } else { 2 }
}

fn assert_identities(cost: &Cost) -> Result<(), TestCaseError> {
    prop_assert_eq!(cost.execution_cost(), cost.delay_cost() + cost.trading_cost());
    prop_assert_eq!(
        cost.total_cost(),
        cost.execution_cost() + cost.opportunity_cost() + cost.fee_cost()
    );
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    // ========================================================================
    // SELECTION
    // ========================================================================

    /// Full fills yield one record with no delay or opportunity component
    #[test]
    fn full_fill_single_record(tx in full_fill_strategy()) {
        let mut engine = ImplementationShortfallEngine::new();
        prop_assert_eq!(engine.run(&tx, true).unwrap(), 1);

        let cost = &engine.results()[0];
        let fee = tx.fee.unwrap().total_fee();
        prop_assert_eq!(cost.delay_cost(), 0.0);
        prop_assert_eq!(cost.opportunity_cost(), 0.0);
        prop_assert_eq!(
            cost.trading_cost(),
            tx.share_num * (tx.execute_avg_price - tx.determined_price) + fee
        );
        prop_assert_eq!(cost.fee_cost(), fee);
    }

    /// Partial fills yield Opportunity Cost then Expanded IS
    #[test]
    fn partial_fill_two_records(tx in partial_fill_strategy()) {
        let mut engine = ImplementationShortfallEngine::new();
        prop_assert_eq!(engine.run(&tx, true).unwrap(), 2);

        let results = engine.results();
        prop_assert!(results[0].cost_name().starts_with("Opportunity Cost"));
        prop_assert!(results[1].cost_name().starts_with("Expanded IS Cost"));
    }

    // ========================================================================
    // DECOMPOSITION IDENTITIES
    // ========================================================================

    /// Aggregates always equal the sum of their parts
    #[test]
    fn aggregate_identities(tx in any_transaction_strategy()) {
        let mut engine = ImplementationShortfallEngine::new();
        engine.run(&tx, true).unwrap();
        for cost in engine.results() {
            assert_identities(cost)?;
        }
    }

    /// Perold and Wagner split the same shortfall differently
    #[test]
    fn partial_methodologies_same_total(tx in partial_fill_strategy()) {
        let mut engine = ImplementationShortfallEngine::new();
        engine.run(&tx, true).unwrap();
        let results = engine.results();
        let diff = (results[0].total_cost() - results[1].total_cost()).abs();
        // Terms are bounded by shares × price; the totals themselves may cancel to ~0
        let prices = tx.delay_price + tx.execute_avg_price + tx.determined_price
            + tx.end_price.unwrap_or(0.0);
        let scale = tx.share_num * prices;
        prop_assert!(diff <= scale * 1e-9, "totals differ by {}", diff);
    }

    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Running with reset twice gives the same records as running once
    #[test]
    fn reset_run_is_idempotent(tx in any_transaction_strategy()) {
        let mut engine = ImplementationShortfallEngine::new();
        engine.run(&tx, true).unwrap();
        let first = engine.results().to_vec();
        engine.run(&tx, true).unwrap();
        prop_assert_eq!(engine.results(), first.as_slice());
    }

    /// A batch appends to whatever is already accumulated
    #[test]
    fn batch_appends(
        seed in any_transaction_strategy(),
        batch in prop::collection::vec(any_transaction_strategy(), 0..20),
    ) {
        let mut engine = ImplementationShortfallEngine::new();
        engine.run(&seed, true).unwrap();
        let before = engine.results().len();

        let expected: usize = batch.iter().map(records_for).sum();
        prop_assert_eq!(engine.run_batch(&batch).unwrap(), expected);
        prop_assert_eq!(engine.results().len(), before + expected);
        prop_assert_eq!(engine.transactions().len(), 1 + batch.len());
    }

    /// Reset always empties the engine
    #[test]
    fn reset_empties(batch in prop::collection::vec(any_transaction_strategy(), 0..20)) {
        let mut engine = ImplementationShortfallEngine::new();
        engine.run_batch(&batch).unwrap();
        engine.reset();
        prop_assert!(engine.results().is_empty());
        prop_assert!(engine.transactions().is_empty());
    }
}
