//! Configuration loading and management for the Payroll Engine.
//!
//! This module provides functionality to load the payroll configuration from
//! a YAML file: the reporting currency, money rounding and server settings.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config").unwrap();
//! println!("Amounts reported in {}", loader.config().currency);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader, MAX_MONEY_DECIMAL_PLACES};
pub use types::{PayrollConfig, ServerConfig};
