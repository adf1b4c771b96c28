//! Orchestration: screen → cost → render.

use std::fmt;

use log::{info, warn};
use nanotca::{CostEngine, ImplementationShortfallEngine, Transaction, ValidationError};

use crate::config::OutputFormat;
use crate::error::{Error, Result};

/// Outcome of screening one transaction.
#[derive(Debug, Clone)]
pub struct CheckLine {
    pub index: usize,
    pub name: Option<String>,
    pub problem: Option<ValidationError>,
}

/// Screening results for a whole input file.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub lines: Vec<CheckLine>,
}

impl CheckReport {
    /// Number of transactions with a problem.
    pub fn failures(&self) -> usize {
        self.lines.iter().filter(|l| l.problem.is_some()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.failures() > 0
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TRANSACTION CHECKS:")?;
        for line in &self.lines {
            let name = line.name.as_deref().unwrap_or("<unnamed>");
            match &line.problem {
                None => writeln!(f, "  [PASS] #{} {}", line.index + 1, name)?,
                Some(p) => writeln!(f, "  [FAIL] #{} {}: {}", line.index + 1, name, p)?,
            }
        }
        Ok(())
    }
}

/// Run `Transaction::validate` over every transaction.
pub fn check(transactions: &[Transaction]) -> CheckReport {
    let lines = transactions
        .iter()
        .enumerate()
        .map(|(index, tx)| CheckLine {
            index,
            name: tx.name.clone(),
            problem: tx.validate().err(),
        })
        .collect();
    CheckReport { lines }
}

/// Cost every transaction on a fresh engine.
///
/// Suspicious transactions are logged and costed anyway; only missing
/// engine inputs abort the run.
pub fn analyze(transactions: &[Transaction]) -> Result<ImplementationShortfallEngine> {
    let report = check(transactions);
    for line in &report.lines {
        if let Some(problem) = &line.problem {
            warn!(
                "Transaction #{} ({}): {problem}",
                line.index + 1,
                line.name.as_deref().unwrap_or("<unnamed>")
            );
        }
    }

    let mut engine = ImplementationShortfallEngine::new();
    engine.reset();
    let records = engine.run_batch(transactions)?;
    info!(
        "Costed {} transactions into {records} records",
        transactions.len()
    );
    Ok(engine)
}

/// Render the engine's results in the requested format.
pub fn render(engine: &ImplementationShortfallEngine, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(engine.report().to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(engine.results()).map_err(Error::from),
    }
}
