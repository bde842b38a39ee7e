//! Order book view error types

use std::fmt;
use uuid::Uuid;

/// Errors that can occur within the order book view.
///
/// None of them is fatal: every failure is local to one operation and the next
/// refresh cycle starts from a consistent state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderBookError {
    /// No best order with this uuid is displayed
    OrderNotFound(String),

    /// A best order without a rel coin was selected in buy mode
    MissingRelCoin {
        /// Key of the offending entry
        uuid: Uuid,
    },

    /// The trading page refused to switch to the selected coin
    PairSwitchRejected {
        /// Coin that could not be set
        coin: String,
    },

    /// The owning context has stopped and no longer accepts commands
    ReconcilerClosed,

    /// Configuration could not be read or is inconsistent
    InvalidConfig {
        /// Description of the error
        message: String,
    },
}

impl fmt::Display for OrderBookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderBookError::OrderNotFound(uuid) => write!(f, "Order not found: {}", uuid),
            OrderBookError::MissingRelCoin { uuid } => {
                write!(f, "Order {} has no rel coin to trade against", uuid)
            }
            OrderBookError::PairSwitchRejected { coin } => {
                write!(f, "Unable to set {} as rel coin", coin)
            }
            OrderBookError::ReconcilerClosed => write!(f, "Reconciler is closed"),
            OrderBookError::InvalidConfig { message } => {
                write!(f, "Invalid configuration: {}", message)
            }
        }
    }
}

impl std::error::Error for OrderBookError {}

impl From<serde_json::Error> for OrderBookError {
    fn from(err: serde_json::Error) -> Self {
        OrderBookError::InvalidConfig {
            message: err.to_string(),
        }
    }
}
