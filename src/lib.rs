//! # nanotca
//!
//! A deterministic implementation shortfall engine for transaction cost analysis.
//!
//! ## Features
//!
//! - **Complete Execution**: full fills, all shortfall attributed to trading
//! - **Opportunity Cost** (Perold): prices the unexecuted remainder at the end price
//! - **Expanded Implementation Shortfall** (Wagner): separates delay from trading cost
//! - **Batch accumulation**: cost many transactions into one ordered result set
//! - **Org-mode tables**: render results with a fixed, sorted column order
//!
//! ## Quick Start
//!
//! ```
//! use nanotca::{CostEngine, Fee, ImplementationShortfallEngine, Transaction};
//!
//! let mut engine = ImplementationShortfallEngine::new();
//!
//! // Planned 5000 shares, filled 4000
//! let tx = Transaction::new(5000.0, 4000.0, 10.25, 10.5, 10.0)
//!     .with_name("tran1")
//!     .with_end_price(11.0)
//!     .with_fee(Fee::new(80.0));
//!
//! engine.run(&tx, true).unwrap();
//!
//! let results = engine.results();
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].cost_name(), "Opportunity Cost tran1");
//! assert_eq!(results[0].opportunity_cost(), 1000.0);
//! assert_eq!(results[1].cost_name(), "Expanded IS Cost tran1");
//! assert_eq!(results[1].delay_cost(), 1250.0);
//! ```
//!
//! ## Methodology Selection
//!
//! | Fill state | Records |
//! |------------|---------|
//! | `execute_num == share_num` | Complete Execution |
//! | otherwise | Opportunity Cost, then Expanded IS |
//!
//! ## Batches
//!
//! `run_batch` appends and never clears, so reset first for a clean batch:
//!
//! ```
//! use nanotca::{CostEngine, Fee, ImplementationShortfallEngine, Transaction};
//!
//! let full = Transaction::new(5000.0, 5000.0, 10.25, 10.5, 10.0)
//!     .with_fee(Fee::new(100.0));
//! let partial = Transaction::new(5000.0, 4000.0, 10.25, 10.5, 10.0)
//!     .with_end_price(11.0)
//!     .with_fee(Fee::new(80.0));
//!
//! let mut engine = ImplementationShortfallEngine::new();
//! engine.reset();
//! engine.run_batch([&full, &partial]).unwrap();
//! assert_eq!(engine.results().len(), 3);
//!
//! println!("{}", engine.report());
//! ```

mod cost;
mod engine;
mod error;
mod fee;
pub mod methodology;
mod report;
mod shortfall;
mod transaction;

// Re-export public API
pub use cost::{Cost, CostValue};
pub use engine::CostEngine;
pub use error::{TcaError, ValidationError};
pub use fee::Fee;
pub use methodology::Methodology;
pub use report::CostReport;
pub use shortfall::ImplementationShortfallEngine;
pub use transaction::Transaction;
