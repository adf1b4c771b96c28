//! Decomposed cost records.

use std::fmt;

/// The cost of one transaction under one methodology.
///
/// `execution_cost` and `total_cost` are derived once at construction and
/// cannot be set independently:
///
/// - `execution_cost = delay_cost + trading_cost`
/// - `total_cost = execution_cost + opportunity_cost + fee_cost`
///
/// ```
/// use nanotca::Cost;
///
/// let cost = Cost::new("Expanded IS Cost tran1", 1250.0, 1000.0, 750.0, 80.0);
/// assert_eq!(cost.execution_cost(), 2250.0);
/// assert_eq!(cost.total_cost(), 3080.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cost {
    cost_name: String,
    delay_cost: f64,
    trading_cost: f64,
    opportunity_cost: f64,
    fee_cost: f64,
    execution_cost: f64,
    total_cost: f64,
}

/// A single cell of a [`Cost`] record, looked up by field name.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CostValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl fmt::Display for CostValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostValue::Text(s) => f.pad(s),
            CostValue::Number(n) => fmt::Display::fmt(n, f),
        }
    }
}

impl Cost {
    /// Every field of a cost record, sorted by name.
    ///
    /// Report columns follow this order.
    pub const FIELDS: [&'static str; 7] = [
        "cost_name",
        "delay_cost",
        "execution_cost",
        "fee_cost",
        "opportunity_cost",
        "total_cost",
        "trading_cost",
    ];

    /// Build a cost record and derive its aggregates.
    pub fn new(
        cost_name: impl Into<String>,
        delay_cost: f64,
        trading_cost: f64,
        opportunity_cost: f64,
        fee_cost: f64,
    ) -> Self {
        let execution_cost = trading_cost + delay_cost;
        let total_cost = execution_cost + opportunity_cost + fee_cost;
        Self {
            cost_name: cost_name.into(),
            delay_cost,
            trading_cost,
            opportunity_cost,
            fee_cost,
            execution_cost,
            total_cost,
        }
    }

    /// Which methodology (and transaction) produced this record.
    pub fn cost_name(&self) -> &str {
        &self.cost_name
    }

    /// Cost of the price move between decision and market arrival.
    #[inline]
    pub fn delay_cost(&self) -> f64 {
        self.delay_cost
    }

    /// Cost incurred while executing.
    #[inline]
    pub fn trading_cost(&self) -> f64 {
        self.trading_cost
    }

    /// Implicit cost of the shares left unexecuted.
    #[inline]
    pub fn opportunity_cost(&self) -> f64 {
        self.opportunity_cost
    }

    /// Explicit fees.
    #[inline]
    pub fn fee_cost(&self) -> f64 {
        self.fee_cost
    }

    /// `delay_cost + trading_cost`.
    #[inline]
    pub fn execution_cost(&self) -> f64 {
        self.execution_cost
    }

    /// `execution_cost + opportunity_cost + fee_cost`.
    #[inline]
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Look up a field by its name in [`Cost::FIELDS`].
    ///
    /// Returns `None` for unknown names.
    pub fn value(&self, field: &str) -> Option<CostValue<'_>> {
        let value = match field {
            "cost_name" => CostValue::Text(&self.cost_name),
            "delay_cost" => CostValue::Number(self.delay_cost),
            "execution_cost" => CostValue::Number(self.execution_cost),
            "fee_cost" => CostValue::Number(self.fee_cost),
            "opportunity_cost" => CostValue::Number(self.opportunity_cost),
            "total_cost" => CostValue::Number(self.total_cost),
            "trading_cost" => CostValue::Number(self.trading_cost),
            _ => return None,
        };
        Some(value)
    }

    /// All fields in [`Cost::FIELDS`] order.
    pub fn values(&self) -> [CostValue<'_>; 7] {
        [
            CostValue::Text(&self.cost_name),
            CostValue::Number(self.delay_cost),
            CostValue::Number(self.execution_cost),
            CostValue::Number(self.fee_cost),
            CostValue::Number(self.opportunity_cost),
            CostValue::Number(self.total_cost),
            CostValue::Number(self.trading_cost),
        ]
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: delay={} trading={} opportunity={} fee={} (execution={}, total={})",
            self.cost_name,
            self.delay_cost,
            self.trading_cost,
            self.opportunity_cost,
            self.fee_cost,
            self.execution_cost,
            self.total_cost
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_fields() {
        let cost = Cost::new("Opportunity Cost tran1", 0.0, 2000.0, 1000.0, 80.0);
        assert_eq!(cost.execution_cost(), 2000.0);
        assert_eq!(cost.total_cost(), 3080.0);
    }

    #[test]
    fn fields_are_sorted() {
        let mut sorted = Cost::FIELDS;
        sorted.sort_unstable();
        assert_eq!(sorted, Cost::FIELDS);
    }

    #[test]
    fn values_follow_field_order() {
        let cost = Cost::new("x", 1.0, 2.0, 3.0, 4.0);
        let values = cost.values();
        for (field, value) in Cost::FIELDS.iter().zip(values.iter()) {
            assert_eq!(cost.value(field), Some(*value), "mismatch for {field}");
        }
        assert_eq!(cost.value("execution_cost"), Some(CostValue::Number(3.0)));
        assert_eq!(cost.value("total_cost"), Some(CostValue::Number(10.0)));
    }

    #[test]
    fn unknown_field() {
        let cost = Cost::new("x", 0.0, 0.0, 0.0, 0.0);
        assert_eq!(cost.value("slippage"), None);
    }

    #[test]
    fn display() {
        let cost = Cost::new("Execution Cost tran2", 0.0, 2600.0, 0.0, 100.0);
        assert_eq!(
            cost.to_string(),
            "Execution Cost tran2: delay=0 trading=2600 opportunity=0 fee=100 (execution=2600, total=2700)"
        );
    }

    #[test]
    fn value_display_pads_text() {
        assert_eq!(format!("{:<6}|", CostValue::Text("ab")), "ab    |");
        assert_eq!(format!("{:>6}|", CostValue::Number(2.5)), "   2.5|");
    }
}
