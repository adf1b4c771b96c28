//! The cost engine contract.

use crate::cost::Cost;
use crate::error::TcaError;
use crate::transaction::Transaction;

/// A transaction cost analysis engine.
///
/// Engines accumulate [`Cost`] records across runs until [`reset`](Self::reset)
/// is called, along with the transactions that produced them.
pub trait CostEngine {
    /// Cost one transaction and append its records to the results.
    ///
    /// With `reset`, previous results are cleared first. Returns the number of
    /// records appended. On error nothing is appended for this transaction.
    fn run(&mut self, transaction: &Transaction, reset: bool) -> Result<usize, TcaError>;

    /// Clear accumulated results and transaction history.
    fn reset(&mut self);

    /// Accumulated cost records, in the order they were produced.
    fn results(&self) -> &[Cost];

    /// Transactions costed since the last reset.
    fn transactions(&self) -> &[Transaction];

    /// Cost every transaction in order, appending without clearing.
    ///
    /// Does not reset before the first transaction either. Stops at the first
    /// error; records from earlier transactions in the batch are kept.
    /// Returns the number of records appended.
    fn run_batch<'a, I>(&mut self, transactions: I) -> Result<usize, TcaError>
    where
        I: IntoIterator<Item = &'a Transaction>,
        Self: Sized,
    {
        let mut appended = 0;
        for transaction in transactions {
            appended += self.run(transaction, false)?;
        }
        Ok(appended)
    }
}
