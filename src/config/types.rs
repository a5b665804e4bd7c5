//! Configuration types for the Payroll Engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `payroll.yaml`.

use serde::Deserialize;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    /// Socket address the API listens on (e.g., "127.0.0.1:3000").
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// The complete payroll configuration.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollConfig;
///
/// let config = PayrollConfig::default();
/// assert_eq!(config.currency, "AUD");
/// assert_eq!(config.money_decimal_places, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PayrollConfig {
    /// Currency code reported alongside amounts.
    pub currency: String,
    /// Decimal places money amounts are rounded to in payroll summaries.
    pub money_decimal_places: u32,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            currency: "AUD".to_string(),
            money_decimal_places: 2,
            server: ServerConfig::default(),
        }
    }
}
