//! Dedicated owning thread for a controller.
//!
//! Snapshots and suggestions arrive from I/O and background work on arbitrary
//! threads. They are queued here and applied one at a time, in arrival order,
//! on the thread that owns the controller.

use super::controller::OrderBookController;
use super::error::OrderBookError;
use super::sequence::SnapshotOutcome;
use super::snapshot::OrderBookSnapshot;
use crossbeam::channel::{Sender, bounded};
use std::fmt;
use std::thread::{self, JoinHandle};
use tracing::{debug, error, trace};

type Inspector = Box<dyn FnOnce(&OrderBookController) + Send>;

/// Work item executed on the owning thread
pub enum ReconcileCommand {
    /// Apply a steady-state snapshot
    Refresh(OrderBookSnapshot),
    /// Apply a structural snapshot after a pair switch
    Reset(OrderBookSnapshot),
    /// Clear the whole view
    Clear,
    /// Reprocess or clear best orders depending on the entered volume
    RefreshBestOrders,
    /// Select a best order; the result is sent back on `reply`
    SelectBestOrder {
        /// Key of the best order
        uuid: String,
        /// Where to deliver the result
        reply: Sender<Result<(), OrderBookError>>,
    },
    /// Run a read-only closure against the controller
    Inspect(Inspector),
    /// Stop the loop after the commands queued before it
    Shutdown,
}

impl fmt::Debug for ReconcileCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileCommand::Refresh(snapshot) => {
                write!(f, "Refresh({} #{})", snapshot.pair, snapshot.sequence)
            }
            ReconcileCommand::Reset(snapshot) => {
                write!(f, "Reset({} #{})", snapshot.pair, snapshot.sequence)
            }
            ReconcileCommand::Clear => write!(f, "Clear"),
            ReconcileCommand::RefreshBestOrders => write!(f, "RefreshBestOrders"),
            ReconcileCommand::SelectBestOrder { uuid, .. } => write!(f, "SelectBestOrder({uuid})"),
            ReconcileCommand::Inspect(_) => write!(f, "Inspect"),
            ReconcileCommand::Shutdown => write!(f, "Shutdown"),
        }
    }
}

/// Apply one command. Returns `false` when the loop should stop.
fn execute(controller: &mut OrderBookController, command: ReconcileCommand) -> bool {
    trace!("Executing {:?}", command);
    match command {
        ReconcileCommand::Refresh(snapshot) => {
            if controller.refresh_orderbook(snapshot) == SnapshotOutcome::Stale {
                debug!("Stale refresh dropped");
            }
        }
        ReconcileCommand::Reset(snapshot) => {
            if controller.reset_orderbook(snapshot) == SnapshotOutcome::Stale {
                debug!("Stale reset dropped");
            }
        }
        ReconcileCommand::Clear => controller.clear_orderbook(),
        ReconcileCommand::RefreshBestOrders => controller.refresh_best_orders(),
        ReconcileCommand::SelectBestOrder { uuid, reply } => {
            let result = controller.select_best_order(&uuid);
            // The caller may have given up waiting.
            let _ = reply.send(result);
        }
        ReconcileCommand::Inspect(inspect) => inspect(controller),
        ReconcileCommand::Shutdown => return false,
    }
    true
}

/// Handle to a controller running on its own thread.
///
/// Dropping the handle closes the queue; the thread drains what was queued
/// and exits.
pub struct ReconcilerHandle {
    commands: Sender<ReconcileCommand>,
    thread: Option<JoinHandle<OrderBookController>>,
}

/// Move `controller` onto a new owning thread.
///
/// The command queue is bounded by the controller's configured
/// `command_capacity`; producers block while it is full.
pub fn spawn_reconciler(
    mut controller: OrderBookController,
) -> Result<ReconcilerHandle, OrderBookError> {
    controller.config().validate()?;
    let (commands, queue) = bounded::<ReconcileCommand>(controller.config().command_capacity);

    let thread = thread::Builder::new()
        .name("orderbook-reconciler".to_string())
        .spawn(move || {
            debug!("Reconciler started");
            for command in queue.iter() {
                if !execute(&mut controller, command) {
                    break;
                }
            }
            // Dropping queued commands closes their reply channels.
            let dropped = queue.try_iter().count();
            drop(queue);
            debug!("Reconciler stopped ({} queued commands dropped)", dropped);
            controller
        })
        .map_err(|err| {
            error!("Unable to start reconciler thread: {}", err);
            OrderBookError::ReconcilerClosed
        })?;

    Ok(ReconcilerHandle {
        commands,
        thread: Some(thread),
    })
}

impl ReconcilerHandle {
    fn send(&self, command: ReconcileCommand) -> Result<(), OrderBookError> {
        self.commands
            .send(command)
            .map_err(|_| OrderBookError::ReconcilerClosed)
    }

    /// A sender for producers on other threads (transport, aggregation)
    pub fn sender(&self) -> Sender<ReconcileCommand> {
        self.commands.clone()
    }

    /// Queue a steady-state snapshot
    pub fn refresh_orderbook(&self, snapshot: OrderBookSnapshot) -> Result<(), OrderBookError> {
        self.send(ReconcileCommand::Refresh(snapshot))
    }

    /// Queue a structural snapshot
    pub fn reset_orderbook(&self, snapshot: OrderBookSnapshot) -> Result<(), OrderBookError> {
        self.send(ReconcileCommand::Reset(snapshot))
    }

    /// Queue a clear of the whole view
    pub fn clear_orderbook(&self) -> Result<(), OrderBookError> {
        self.send(ReconcileCommand::Clear)
    }

    /// Queue a best-orders refresh
    pub fn refresh_best_orders(&self) -> Result<(), OrderBookError> {
        self.send(ReconcileCommand::RefreshBestOrders)
    }

    /// Select a best order and wait for the outcome
    pub fn select_best_order(&self, uuid: &str) -> Result<(), OrderBookError> {
        let (reply, outcome) = bounded(1);
        self.send(ReconcileCommand::SelectBestOrder {
            uuid: uuid.to_string(),
            reply,
        })?;
        outcome
            .recv()
            .map_err(|_| OrderBookError::ReconcilerClosed)?
    }

    /// Run `f` on the owning thread after every command queued before it, and
    /// return its result.
    pub fn inspect<R, F>(&self, f: F) -> Result<R, OrderBookError>
    where
        R: Send + 'static,
        F: FnOnce(&OrderBookController) -> R + Send + 'static,
    {
        let (reply, result) = bounded(1);
        self.send(ReconcileCommand::Inspect(Box::new(move |controller: &OrderBookController| {
            let _ = reply.send(f(controller));
        })))?;
        result.recv().map_err(|_| OrderBookError::ReconcilerClosed)
    }

    /// Stop the loop once the commands queued so far are applied
    pub fn shutdown(&self) -> Result<(), OrderBookError> {
        self.send(ReconcileCommand::Shutdown)
    }

    /// Stop the loop and get the controller back
    pub fn join(mut self) -> Result<OrderBookController, OrderBookError> {
        // A closed queue means the loop already stopped.
        let _ = self.shutdown();
        self.thread
            .take()
            .ok_or(OrderBookError::ReconcilerClosed)?
            .join()
            .map_err(|_| {
                error!("Reconciler thread panicked");
                OrderBookError::ReconcilerClosed
            })
    }
}
