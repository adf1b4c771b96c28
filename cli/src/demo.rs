//! Built-in demo session.

use nanotca::{CostEngine, Fee, ImplementationShortfallEngine, Transaction};

use crate::error::Result;

/// A partial fill: 4000 of 5000 shares.
pub fn partial_fill() -> Transaction {
    Transaction::new(5000.0, 4000.0, 10.25, 10.5, 10.0)
        .with_name("tran1")
        .with_end_price(11.0)
        .with_fee(Fee::new(80.0))
}

/// A complete fill of the same order.
pub fn complete_fill() -> Transaction {
    Transaction::new(5000.0, 5000.0, 10.25, 10.5, 10.0)
        .with_name("tran2")
        .with_end_price(11.0)
        .with_fee(Fee::new(100.0))
}

/// One step of the demo: a title and the table printed after it.
#[derive(Debug, Clone)]
pub struct DemoStep {
    pub title: &'static str,
    pub table: String,
    pub records: usize,
}

/// Run the demo session and collect a table after each step.
///
/// Transaction 1 alone, transaction 2 alone, then a batch of
/// `[tran2, tran2, tran1, tran1]` appended to the previous result.
pub fn run_demo() -> Result<Vec<DemoStep>> {
    let tran1 = partial_fill();
    let tran2 = complete_fill();
    let mut engine = ImplementationShortfallEngine::new();
    let mut steps = Vec::with_capacity(3);

    engine.run(&tran1, true)?;
    steps.push(step("Transaction 1:", &engine));

    engine.run(&tran2, true)?;
    steps.push(step("Transaction 2:", &engine));

    engine.run_batch([&tran2, &tran2, &tran1, &tran1])?;
    steps.push(step("Transaction batch:", &engine));

    Ok(steps)
}

fn step(title: &'static str, engine: &ImplementationShortfallEngine) -> DemoStep {
    DemoStep {
        title,
        table: engine.report().to_string(),
        records: engine.results().len(),
    }
}
