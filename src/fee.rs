//! Explicit trading fees.

/// Commission charged for one transaction.
///
/// Only a flat commission is modelled today; [`Fee::total_fee`] is the single
/// place the engine reads fees from, so richer fee schedules can be added
/// without touching the cost formulas.
///
/// ```
/// use nanotca::Fee;
///
/// let fee = Fee::new(80.0);
/// assert_eq!(fee.total_fee(), 80.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fee {
    /// Flat commission for the whole transaction
    pub commission: f64,
}

impl Fee {
    /// Create a fee from a flat commission.
    pub fn new(commission: f64) -> Self {
        Self { commission }
    }

    /// A fee of zero (commission-free venue).
    pub fn zero() -> Self {
        Self { commission: 0.0 }
    }

    /// Total fee charged for the transaction.
    #[inline]
    pub fn total_fee(&self) -> f64 {
        self.commission
    }
}

impl Default for Fee {
    fn default() -> Self {
        Self::zero()
    }
}
