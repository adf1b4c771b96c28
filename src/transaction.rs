//! Trade lifecycle facts fed to a cost engine.

use crate::error::ValidationError;
use crate::fee::Fee;

/// One trade, from the decision to trade through the end of the measurement
/// period.
///
/// Quantities are shares (fractional allowed) and prices are in a single,
/// caller-chosen currency unit; every cost comes out in `price × shares`.
///
/// ```
/// use nanotca::{Fee, Transaction};
///
/// let tx = Transaction::new(5000.0, 4000.0, 10.25, 10.5, 10.0)
///     .with_name("tran1")
///     .with_end_price(11.0)
///     .with_fee(Fee::new(80.0));
///
/// assert!(!tx.is_fully_executed());
/// assert_eq!(tx.is_valid(), Some(true));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transaction {
    /// Optional label, carried into cost names
    pub name: Option<String>,
    /// Planned quantity
    pub share_num: f64,
    /// Quantity actually executed
    pub execute_num: f64,
    /// Price when the order reached the market
    pub delay_price: f64,
    /// Volume-weighted average price of the executed quantity
    pub execute_avg_price: f64,
    /// Decision price at order creation (the benchmark)
    pub determined_price: f64,
    /// Price at the close of the measurement period; needed for partial fills
    pub end_price: Option<f64>,
    /// Fee charged for the transaction
    pub fee: Option<Fee>,
}

impl Transaction {
    /// Create an unnamed transaction with no end price and no fee.
    pub fn new(
        share_num: f64,
        execute_num: f64,
        delay_price: f64,
        execute_avg_price: f64,
        determined_price: f64,
    ) -> Self {
        Self {
            name: None,
            share_num,
            execute_num,
            delay_price,
            execute_avg_price,
            determined_price,
            end_price: None,
            fee: None,
        }
    }

    /// Attach a label.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Attach the end-of-period price.
    pub fn with_end_price(mut self, end_price: f64) -> Self {
        self.end_price = Some(end_price);
        self
    }

    /// Attach a fee.
    pub fn with_fee(mut self, fee: Fee) -> Self {
        self.fee = Some(fee);
        self
    }

    /// The label, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// True when every planned share was executed.
    ///
    /// Exact float equality: 4999.9999 of 5000 is a partial fill.
    #[inline]
    pub fn is_fully_executed(&self) -> bool {
        self.share_num == self.execute_num
    }

    /// Whether a partially executed transaction can be costed.
    ///
    /// Returns `None` for a fully executed transaction (the question does not
    /// apply), otherwise `Some(true)` iff an end price is present.
    pub fn is_valid(&self) -> Option<bool> {
        if self.is_fully_executed() {
            None
        } else {
            Some(self.end_price.is_some())
        }
    }

    /// Check the transaction for domain-nonsensical values.
    ///
    /// Reports the first problem found. Engines never call this; it exists
    /// for callers that want to screen inputs before costing them.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let quantities = [("share_num", self.share_num), ("execute_num", self.execute_num)];
        let mut prices = vec![
            ("delay_price", self.delay_price),
            ("execute_avg_price", self.execute_avg_price),
            ("determined_price", self.determined_price),
        ];
        if let Some(end_price) = self.end_price {
            prices.push(("end_price", end_price));
        }

        for &(field, value) in quantities.iter().chain(prices.iter()) {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { field });
            }
        }
        if self.fee.is_some_and(|fee| !fee.total_fee().is_finite()) {
            return Err(ValidationError::NonFinite { field: "commission" });
        }

        for &(field, value) in &quantities {
            if value < 0.0 {
                return Err(ValidationError::NegativeQuantity { field });
            }
        }
        for &(field, value) in &prices {
            if value < 0.0 {
                return Err(ValidationError::NegativePrice { field });
            }
        }

        if self.execute_num > self.share_num {
            return Err(ValidationError::OverExecuted {
                share_num: self.share_num,
                execute_num: self.execute_num,
            });
        }
        Ok(())
    }
}
