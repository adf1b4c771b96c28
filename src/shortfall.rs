//! Implementation shortfall engine.

use log::{debug, trace};

use crate::cost::Cost;
use crate::engine::CostEngine;
use crate::error::TcaError;
use crate::methodology::Methodology;
use crate::report::CostReport;
use crate::transaction::Transaction;

/// Costs transactions with the implementation shortfall methodologies.
///
/// A fully executed transaction yields one Complete Execution record. A
/// partial fill yields an Opportunity Cost record followed by an Expanded IS
/// record.
///
/// ```
/// use nanotca::{CostEngine, Fee, ImplementationShortfallEngine, Transaction};
///
/// let mut engine = ImplementationShortfallEngine::new();
/// let tx = Transaction::new(5000.0, 5000.0, 10.25, 10.5, 10.0)
///     .with_name("tran2")
///     .with_fee(Fee::new(100.0));
///
/// engine.run(&tx, true).unwrap();
/// assert_eq!(engine.results().len(), 1);
/// assert_eq!(engine.results()[0].total_cost(), 2700.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ImplementationShortfallEngine {
    results: Vec<Cost>,
    transactions: Vec<Transaction>,
}

impl ImplementationShortfallEngine {
    /// Create an engine with no results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table view over the accumulated results.
    pub fn report(&self) -> CostReport<'_> {
        CostReport::new(&self.results)
    }
}

impl CostEngine for ImplementationShortfallEngine {
    fn run(&mut self, transaction: &Transaction, reset: bool) -> Result<usize, TcaError> {
        if reset {
            self.reset();
        }

        let methodologies = Methodology::select(transaction);
        debug!(
            "costing {} with {}",
            transaction.name().unwrap_or("<unnamed>"),
            methodologies
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(" + ")
        );

        // Compute everything before appending so a failure leaves no partial records
        let costs = methodologies
            .iter()
            .map(|m| m.compute(transaction))
            .collect::<Result<Vec<_>, _>>()?;

        for cost in &costs {
            trace!("{cost}");
        }
        let appended = costs.len();
        self.results.extend(costs);
        self.transactions.push(transaction.clone());
        Ok(appended)
    }

    fn reset(&mut self) {
        self.results.clear();
        self.transactions.clear();
    }

    fn results(&self) -> &[Cost] {
        &self.results
    }

    fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}
