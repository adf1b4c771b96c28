//! TOML input loading and validation.

use std::path::Path;

use nanotca::{Fee, Transaction};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Top-level input file: output settings plus the transactions to cost.
#[derive(Debug, Clone, Deserialize)]
pub struct Input {
    #[serde(default)]
    pub output: OutputConfig,
    pub transactions: Vec<TransactionEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

/// One `[[transactions]]` table.
///
/// A missing `commission` means no fee at all, which the engine rejects;
/// write `commission = 0` for a commission-free trade.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionEntry {
    #[serde(default)]
    pub name: Option<String>,
    pub share_num: f64,
    pub execute_num: f64,
    pub delay_price: f64,
    pub execute_avg_price: f64,
    pub determined_price: f64,
    #[serde(default)]
    pub end_price: Option<f64>,
    #[serde(default)]
    pub commission: Option<f64>,
}

impl TransactionEntry {
    pub fn to_transaction(&self) -> Transaction {
        Transaction {
            name: self.name.clone(),
            share_num: self.share_num,
            execute_num: self.execute_num,
            delay_price: self.delay_price,
            execute_avg_price: self.execute_avg_price,
            determined_price: self.determined_price,
            end_price: self.end_price,
            fee: self.commission.map(Fee::new),
        }
    }
}

impl Input {
    /// Load input from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::InputRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&contents)
    }

    /// Parse from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let input: Input = toml::from_str(contents)?;
        input.validate()?;
        Ok(input)
    }

    /// Structural checks only; domain checks are `Transaction::validate`.
    fn validate(&self) -> Result<()> {
        if self.transactions.is_empty() {
            return Err(Error::Input("transactions list is empty".into()));
        }
        for (i, t) in self.transactions.iter().enumerate() {
            if t.name.as_deref().is_some_and(str::is_empty) {
                return Err(Error::Input(format!(
                    "transaction #{} has an empty name; omit it instead",
                    i + 1
                )));
            }
        }
        Ok(())
    }

    /// Transactions in file order.
    pub fn to_transactions(&self) -> Vec<Transaction> {
        self.transactions
            .iter()
            .map(TransactionEntry::to_transaction)
            .collect()
    }
}
