//! Background execution of store requests.
//!
//! The UI loop must never block on the network, so store calls run on a
//! dedicated worker thread: user actions dispatch [`StoreCommand`]s through
//! a [`StoreHandle`] and the matching [`StoreEvent`] completion arrives on a
//! channel the UI loop drains each tick. Dispatch never waits; independent
//! actions are not serialized against each other from the caller's point of
//! view, and each completion carries enough context to be applied on its
//! own. There is no cancellation: a dispatched request always produces a
//! completion (or the process exits first).

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::{debug, info};

use crate::domain::{Product, ProductDraft, ProductStore, StoreResult};

/// A request for the store worker.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreCommand {
    FetchAll,
    Create(ProductDraft),
    Delete(String),
}

/// Completion of a store request.
///
/// Delete completions carry the identifier they were dispatched with so the
/// collection can be updated without tracking in-flight requests.
#[derive(Debug)]
pub enum StoreEvent {
    LoadCompleted(StoreResult<Vec<Product>>),
    DeleteCompleted { id: String, result: StoreResult<()> },
    CreateCompleted(StoreResult<Product>),
}

/// Cheap, cloneable dispatcher for store requests.
#[derive(Clone)]
pub struct StoreHandle {
    commands: Sender<StoreCommand>,
}

impl StoreHandle {
    pub(crate) fn new(commands: Sender<StoreCommand>) -> Self {
        Self { commands }
    }

    /// Requests the full catalog. Issued once, at mount.
    pub fn fetch_all(&self) {
        self.dispatch(StoreCommand::FetchAll);
    }

    /// Requests creation of a drafted product.
    pub fn create(&self, draft: ProductDraft) {
        self.dispatch(StoreCommand::Create(draft));
    }

    /// Requests deletion of a product by identifier.
    pub fn delete(&self, id: String) {
        self.dispatch(StoreCommand::Delete(id));
    }

    fn dispatch(&self, command: StoreCommand) {
        // The worker outlives every handle; a send can only fail during
        // shutdown, when the completion would be dropped anyway.
        if self.commands.send(command).is_err() {
            debug!("store worker gone, command dropped");
        }
    }
}

/// Spawns the worker thread around a store implementation.
///
/// Returns the dispatch handle and the completion channel. The thread exits
/// once every handle is dropped.
pub fn spawn(store: Box<dyn ProductStore>) -> (StoreHandle, Receiver<StoreEvent>) {
    let (command_tx, command_rx) = mpsc::channel::<StoreCommand>();
    let (event_tx, event_rx) = mpsc::channel::<StoreEvent>();

    thread::spawn(move || {
        info!("store worker started");
        while let Ok(command) = command_rx.recv() {
            debug!("executing {command:?}");
            let event = match command {
                StoreCommand::FetchAll => StoreEvent::LoadCompleted(store.fetch_all()),
                StoreCommand::Create(draft) => StoreEvent::CreateCompleted(store.create(&draft)),
                StoreCommand::Delete(id) => {
                    let result = store.delete(&id);
                    StoreEvent::DeleteCompleted { id, result }
                }
            };
            if event_tx.send(event).is_err() {
                break;
            }
        }
        info!("store worker stopped");
    });

    (StoreHandle::new(command_tx), event_rx)
}
