//! nanotca-cli: command-line transaction cost analysis.
//!
//! Reads transactions from a TOML file (or uses the built-in demo set), runs
//! them through the implementation shortfall engine, and prints the cost
//! breakdown as an org-mode table or JSON.

pub mod config;
pub mod demo;
pub mod error;
pub mod run;
