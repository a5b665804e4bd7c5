//! Application state for the Payroll Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, PayrollConfig};

/// Shared application state.
///
/// Holds the loaded payroll configuration. Requests carry their own employee
/// records, so nothing else is shared between handlers.
#[derive(Clone)]
pub struct AppState {
    /// The loaded payroll configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        self.config.config()
    }
}
