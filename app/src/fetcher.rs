//! Runs fetch tickets off the UI thread.
//!
//! # Design
//! Every ticket's request executes on its own worker thread and the result
//! comes back over one `mpsc` channel, tagged with the ticket. Nothing here
//! decides whether a result is still wanted; `Controller::complete` drops
//! superseded ones when the event loop applies them.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use rickdex_core::{ApiError, FetchTicket, HttpRequest, HttpResponse};

use crate::transport::Transport;

/// A finished fetch waiting to be applied.
#[derive(Debug)]
pub struct Completion {
    pub ticket: FetchTicket,
    pub outcome: Result<HttpResponse, ApiError>,
}

pub struct Fetcher<T: Transport> {
    transport: Arc<T>,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
}

impl<T: Transport> Fetcher<T> {
    pub fn new(transport: T) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            transport: Arc::new(transport),
            tx,
            rx,
        }
    }

    /// Start executing `request` for `ticket`. A request that could not be
    /// built completes immediately with its error.
    pub fn spawn(&self, ticket: FetchTicket, request: Result<HttpRequest, ApiError>) {
        let request = match request {
            Ok(request) => request,
            Err(e) => {
                let _ = self.tx.send(Completion {
                    ticket,
                    outcome: Err(e),
                });
                return;
            }
        };

        let transport = Arc::clone(&self.transport);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let outcome = transport.execute(request);
            // The receiver lives as long as the fetcher; a failed send only
            // happens during shutdown.
            let _ = tx.send(Completion { ticket, outcome });
        });
    }

    /// Block until the next fetch finishes, in completion order.
    pub fn recv(&self) -> Option<Completion> {
        self.rx.recv().ok()
    }
}
