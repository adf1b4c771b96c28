//! Implementation shortfall methodologies.
//!
//! | Methodology | Applies to | Components |
//! |-------------|------------|------------|
//! | **Complete Execution** | full fills | trading (fee folded in), fee |
//! | **Opportunity Cost** (Perold) | partial fills | trading, opportunity, fee |
//! | **Expanded IS** (Wagner) | partial fills | delay, trading, opportunity, fee |
//!
//! Complete Execution adds the fee into `trading_cost` and also reports it as
//! `fee_cost`, so its `total_cost` counts the commission twice.

use std::fmt;

use crate::cost::Cost;
use crate::error::TcaError;
use crate::transaction::Transaction;

/// A cost decomposition formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Methodology {
    /// Whole order filled: all shortfall is trading cost.
    CompleteExecution,
    /// Perold: executed shares against the decision price, unexecuted shares
    /// valued at the drift to the end price.
    OpportunityCost,
    /// Wagner: splits out the delay before the order reached the market.
    ExpandedImplementationShortfall,
}

const FULL_FILL: &[Methodology] = &[Methodology::CompleteExecution];
const PARTIAL_FILL: &[Methodology] = &[
    Methodology::OpportunityCost,
    Methodology::ExpandedImplementationShortfall,
];

impl Methodology {
    /// The methodologies that apply to `transaction`, in output order.
    pub fn select(transaction: &Transaction) -> &'static [Methodology] {
        if transaction.is_fully_executed() {
            FULL_FILL
        } else {
            PARTIAL_FILL
        }
    }

    /// Prefix of the cost names this methodology emits.
    pub fn label(&self) -> &'static str {
        match self {
            Methodology::CompleteExecution => "Execution Cost",
            Methodology::OpportunityCost => "Opportunity Cost",
            Methodology::ExpandedImplementationShortfall => "Expanded IS Cost",
        }
    }

    /// Cost name for `transaction`: the label, then the transaction name if any.
    pub fn cost_name(&self, transaction: &Transaction) -> String {
        match transaction.name() {
            Some(name) => format!("{} {}", self.label(), name),
            None => self.label().to_string(),
        }
    }

    /// Decompose the cost of `transaction`.
    ///
    /// Does not check that the methodology fits the fill state; use
    /// [`Methodology::select`] for that.
    pub fn compute(&self, transaction: &Transaction) -> Result<Cost, TcaError> {
        let t = transaction;
        match self {
            Methodology::CompleteExecution => {
                let fee = total_fee(t)?;
                let executed_cost = t.share_num * (t.execute_avg_price - t.determined_price) + fee;
                Ok(Cost::new(self.cost_name(t), 0.0, executed_cost, 0.0, fee))
            }
            Methodology::OpportunityCost => {
                let end_price = end_price(t)?;
                let fee = total_fee(t)?;
                let executed_cost = t.execute_num * (t.execute_avg_price - t.determined_price);
                let opportunity_cost = (t.share_num - t.execute_num) * (end_price - t.determined_price);
                Ok(Cost::new(
                    self.cost_name(t),
                    0.0,
                    executed_cost,
                    opportunity_cost,
                    fee,
                ))
            }
            Methodology::ExpandedImplementationShortfall => {
                let end_price = end_price(t)?;
                let fee = total_fee(t)?;
                let delay_cost = t.share_num * (t.delay_price - t.determined_price);
                let trading_cost = t.execute_num * (t.execute_avg_price - t.delay_price);
                let opportunity_cost = (t.share_num - t.execute_num) * (end_price - t.delay_price);
                Ok(Cost::new(
                    self.cost_name(t),
                    delay_cost,
                    trading_cost,
                    opportunity_cost,
                    fee,
                ))
            }
        }
    }
}

impl fmt::Display for Methodology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Methodology::CompleteExecution => write!(f, "Complete Execution"),
            Methodology::OpportunityCost => write!(f, "Opportunity Cost"),
            Methodology::ExpandedImplementationShortfall => {
                write!(f, "Expanded Implementation Shortfall")
            }
        }
    }
}

/// Name used in error messages.
fn display_name(t: &Transaction) -> String {
    t.name().unwrap_or("<unnamed>").to_string()
}

fn total_fee(t: &Transaction) -> Result<f64, TcaError> {
    t.fee
        .as_ref()
        .map(|fee| fee.total_fee())
        .ok_or_else(|| TcaError::MissingFee {
            transaction: display_name(t),
        })
}

fn end_price(t: &Transaction) -> Result<f64, TcaError> {
    t.end_price.ok_or_else(|| TcaError::MissingEndPrice {
        transaction: display_name(t),
    })
}
