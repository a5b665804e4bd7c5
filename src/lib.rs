//! Timesheet Payroll Engine
//!
//! This crate records hourly employees' clock-in and clock-out events and
//! calculates hours worked, wages per date, wages per employee and payroll
//! totals across employees.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
mod recorder;
pub mod timestamp;
