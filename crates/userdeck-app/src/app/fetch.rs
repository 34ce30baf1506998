use tokio::sync::mpsc;
use tracing::{debug, info};

use userdeck_core::{FetchOutcome, FetchTask};

use crate::event::AppEvent;

use super::App;

impl App {
    /// Puts the directory back into Loading and issues a fresh request,
    /// cancelling any request still in flight.
    pub(super) fn start_fetch(&mut self) {
        self.fetch_task = None;
        let seq = self.directory.begin_fetch();
        debug!("Directory fetch {seq} starting against {}", self.endpoint);

        let (tx, mut rx) = mpsc::channel::<FetchOutcome>(1);
        self.fetch_task = Some(FetchTask::spawn(self.source.clone(), tx));

        let app_tx = self.app_tx.clone();
        tokio::spawn(async move {
            if let Some(outcome) = rx.recv().await {
                let _ = app_tx.send(AppEvent::FetchFinished { seq, outcome });
            }
        });
    }

    pub(super) fn retry_fetch(&mut self) {
        if !self.directory.can_retry() {
            debug!("Retry ignored: directory is not in a failed state");
            return;
        }
        info!("Retrying user fetch");
        self.start_fetch();
    }

    pub(super) fn finish_fetch(&mut self, seq: u64, outcome: FetchOutcome) {
        // The directory logs and drops results it no longer waits for.
        if self.directory.apply_fetch(seq, outcome) {
            self.fetch_task = None;
        }
    }
}
