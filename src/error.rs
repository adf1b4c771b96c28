//! Error types for cost analysis and transaction checks.

/// Errors returned when a transaction lacks an input its methodology needs.
///
/// The engine does not pre-validate transactions; these are raised at the
/// point a formula needs the missing value, before any cost is recorded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TcaError {
    /// The transaction carries no fee.
    #[error("transaction {transaction} has no fee")]
    MissingFee { transaction: String },

    /// A partially executed transaction has no end-of-period price.
    #[error("transaction {transaction} is partially executed but has no end price")]
    MissingEndPrice { transaction: String },
}

/// Domain problems reported by [`Transaction::validate`](crate::Transaction::validate).
///
/// The engine never calls `validate`; suspicious inputs still produce
/// numerically well-defined costs.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValidationError {
    /// A quantity, price or commission is NaN or infinite.
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    /// A share quantity is negative.
    #[error("{field} must not be negative")]
    NegativeQuantity { field: &'static str },

    /// A price is negative.
    #[error("{field} must not be negative")]
    NegativePrice { field: &'static str },

    /// More shares executed than were planned.
    #[error("executed {execute_num} shares but only {share_num} were planned")]
    OverExecuted { share_num: f64, execute_num: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = TcaError::MissingFee {
            transaction: "tran1".into(),
        };
        assert_eq!(err.to_string(), "transaction tran1 has no fee");

        let err = ValidationError::OverExecuted {
            share_num: 100.0,
            execute_num: 120.0,
        };
        assert_eq!(
            err.to_string(),
            "executed 120 shares but only 100 were planned"
        );
    }

    #[test]
    fn is_error() {
        let err: Box<dyn std::error::Error> = Box::new(TcaError::MissingEndPrice {
            transaction: "t".into(),
        });
        assert!(err.to_string().contains("end price"));
    }
}
