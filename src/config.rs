//! Runtime configuration of the reconciler

use crate::orderbook::OrderBookError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Settings for the controller and its owning thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcilerConfig {
    /// Capacity of the command queue feeding the owning thread
    pub command_capacity: usize,

    /// Drop snapshots that are not newer than the applied state
    pub enforce_sequence: bool,

    /// Drop the pending best-order selection when the view is cleared
    pub discard_selection_on_clear: bool,
}

impl Default for ReconcilerConfig {
    fn default() -> Self {
        Self {
            command_capacity: 64,
            enforce_sequence: true,
            discard_selection_on_clear: true,
        }
    }
}

impl ReconcilerConfig {
    /// Parse a JSON document; missing keys take their default value
    pub fn from_json(json: &str) -> Result<Self, OrderBookError> {
        let config: ReconcilerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, OrderBookError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|err| OrderBookError::InvalidConfig {
            message: format!("cannot read {}: {}", path.display(), err),
        })?;
        debug!("Loading reconciler configuration from {}", path.display());
        Self::from_json(&json)
    }

    /// Check the values are usable
    pub fn validate(&self) -> Result<(), OrderBookError> {
        if self.command_capacity == 0 {
            return Err(OrderBookError::InvalidConfig {
                message: "command_capacity must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
