//! Payroll Calculation & Attendance Aggregation Engine
//!
//! This crate turns an employee's base compensation plus a period's
//! attendance records into a payroll line, and enforces the idempotence
//! and uniqueness rules around recomputing and re-saving that line.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod filter;
pub mod ledger;
pub mod models;
pub mod store;
