// Copyright 2026 the Trimline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background decoding with last-request-wins delivery.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use tracing::{debug, warn};

use crate::error::AssetError;
use crate::source::{AssetKind, AssetSource, load};
use crate::sprite::Bitmap;

/// Identifies one [`Loader::request`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// A finished load.
#[derive(Debug)]
pub struct Completion {
    /// The request this answers.
    pub ticket: Ticket,
    /// The decoded bitmap, or why it could not be produced.
    pub result: Result<Bitmap, AssetError>,
}

struct Job {
    ticket: Ticket,
    source: AssetSource,
    kind: AssetKind,
}

/// Decodes assets on a worker thread.
///
/// Requests are processed in order, but only the most recent one is delivered: a new
/// [`request`](Self::request) supersedes any request still in flight, and its result is
/// dropped when it arrives. Each delivered completion is returned exactly once.
#[derive(Debug)]
pub struct Loader {
    jobs: Sender<Job>,
    results: Receiver<Completion>,
    next: u64,
    in_flight: Option<Ticket>,
}

impl Loader {
    /// Start the worker thread.
    pub fn new() -> Result<Self, AssetError> {
        let (jobs, job_rx) = mpsc::channel::<Job>();
        let (result_tx, results) = mpsc::channel();
        thread::Builder::new()
            .name("trimline-loader".into())
            .spawn(move || {
                for job in job_rx {
                    let result = load(&job.source, &job.kind);
                    if let Err(err) = &result {
                        warn!(source = %job.source.describe(), %err, "asset load failed");
                    }
                    let completion = Completion {
                        ticket: job.ticket,
                        result,
                    };
                    if result_tx.send(completion).is_err() {
                        break;
                    }
                }
            })
            .map_err(|err| {
                warn!(%err, "could not spawn asset worker");
                AssetError::WorkerGone
            })?;
        Ok(Self {
            jobs,
            results,
            next: 0,
            in_flight: None,
        })
    }

    /// Queue a load, superseding any request still in flight.
    pub fn request(&mut self, source: AssetSource, kind: AssetKind) -> Result<Ticket, AssetError> {
        self.next += 1;
        let ticket = Ticket(self.next);
        if let Some(stale) = self.in_flight.replace(ticket) {
            debug!(?stale, ?ticket, "asset request superseded");
        }
        self.jobs
            .send(Job {
                ticket,
                source,
                kind,
            })
            .map_err(|_| {
                self.in_flight = None;
                AssetError::WorkerGone
            })?;
        Ok(ticket)
    }

    /// True while the latest request has not been delivered yet.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Deliver the latest request's result if it is ready, without blocking.
    pub fn poll(&mut self) -> Option<Completion> {
        let latest = self.in_flight?;
        loop {
            match self.results.try_recv() {
                Ok(completion) => {
                    if let Some(done) = self.accept(latest, completion) {
                        return Some(done);
                    }
                }
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => return Some(self.worker_gone(latest)),
            }
        }
    }

    /// Block until the latest request's result is ready.
    ///
    /// Returns `None` if nothing is in flight.
    pub fn wait(&mut self) -> Option<Completion> {
        let latest = self.in_flight?;
        loop {
            match self.results.recv() {
                Ok(completion) => {
                    if let Some(done) = self.accept(latest, completion) {
                        return Some(done);
                    }
                }
                Err(_) => return Some(self.worker_gone(latest)),
            }
        }
    }

    fn accept(&mut self, latest: Ticket, completion: Completion) -> Option<Completion> {
        if completion.ticket == latest {
            self.in_flight = None;
            Some(completion)
        } else {
            debug!(ticket = ?completion.ticket, "stale asset result dropped");
            None
        }
    }

    fn worker_gone(&mut self, latest: Ticket) -> Completion {
        self.in_flight = None;
        Completion {
            ticket: latest,
            result: Err(AssetError::WorkerGone),
        }
    }
}
