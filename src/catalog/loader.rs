//! Catalog loader
//!
//! Orchestrates one fetch per activation and hands outcomes to the UI loop
//! as messages. Each activation bumps a generation counter; an outcome
//! tagged with an older generation is discarded, so overlapping fetches
//! resolve to whichever activation is newest. Failures settle as `Failed`
//! with the fixed friendly message while the raw detail goes to the
//! diagnostics sink.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::catalog::source::{CatalogError, CatalogSource};
use crate::diag::DiagnosticsSink;
use crate::models::{messages, CatalogEntry, CatalogLoadState};

/// Outcome of one fetch attempt, tagged with its activation generation
#[derive(Debug)]
struct Outcome {
    generation: u64,
    result: Result<Vec<CatalogEntry>, CatalogError>,
}

/// Drives the home screen's `CatalogLoadState`
pub struct CatalogLoader {
    generation: u64,
    tx: mpsc::UnboundedSender<Outcome>,
    rx: mpsc::UnboundedReceiver<Outcome>,
    diag: Arc<dyn DiagnosticsSink>,
}

impl CatalogLoader {
    pub fn new(diag: Arc<dyn DiagnosticsSink>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            generation: 0,
            tx,
            rx,
            diag,
        }
    }

    /// Start exactly one fetch from `source`.
    ///
    /// Supersedes any in-flight attempt: the caller should treat the state
    /// as `Loading` until an outcome for this activation arrives.
    pub fn activate<S>(&mut self, source: S)
    where
        S: CatalogSource + Send + Sync + 'static,
    {
        self.generation += 1;
        let generation = self.generation;
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = source.fetch().await;
            // Receiver gone means the screen is torn down; nothing to do
            let _ = tx.send(Outcome { generation, result });
        });
    }

    /// Skip the fetch entirely and settle as `Loaded(entries)`.
    ///
    /// The outcome is queued before this returns, so the next drain observes
    /// the settled state with no `Loading` flash.
    pub fn activate_fixed(&mut self, entries: Vec<CatalogEntry>) {
        self.generation += 1;
        let _ = self.tx.send(Outcome {
            generation: self.generation,
            result: Ok(entries),
        });
    }

    /// Drain settled outcomes without blocking.
    ///
    /// Returns the new load state if an outcome for the current activation
    /// arrived; stale outcomes are dropped on the floor.
    pub fn poll(&mut self) -> Option<CatalogLoadState> {
        let mut settled = None;
        while let Ok(outcome) = self.rx.try_recv() {
            if outcome.generation != self.generation {
                continue;
            }
            settled = Some(self.settle(outcome.result));
        }
        settled
    }

    /// Await the next current-activation outcome (CLI and tests).
    pub async fn settled(&mut self) -> CatalogLoadState {
        loop {
            // The loader holds its own sender, so recv cannot return None
            if let Some(outcome) = self.rx.recv().await {
                if outcome.generation != self.generation {
                    continue;
                }
                return self.settle(outcome.result);
            }
        }
    }

    fn settle(&self, result: Result<Vec<CatalogEntry>, CatalogError>) -> CatalogLoadState {
        match result {
            Ok(entries) => CatalogLoadState::Loaded(entries),
            Err(err) => {
                self.diag.record_error("catalog fetch", &err.to_string());
                CatalogLoadState::Failed(messages::CATALOG_FAILED.to_string())
            }
        }
    }
}
