use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::client::UserSource;
use crate::error::FetchError;
use crate::user::UserRecord;

pub type FetchOutcome = Result<Vec<UserRecord>, FetchError>;

/// One in-flight directory request.
///
/// The outcome is delivered at most once on the channel passed to
/// [`FetchTask::spawn`]. Once the task is stopped or dropped the outcome is
/// discarded, even if the request already completed.
pub struct FetchTask {
    cancel: CancellationToken,
}

impl FetchTask {
    pub fn spawn(source: Arc<dyn UserSource>, tx: mpsc::Sender<FetchOutcome>) -> Self {
        let cancel = CancellationToken::new();
        let cancel_clone = cancel.clone();

        tokio::spawn(async move {
            info!("User fetch started");
            let outcome = tokio::select! {
                biased;
                _ = cancel_clone.cancelled() => {
                    info!("User fetch cancelled");
                    return;
                }
                outcome = source.fetch_users() => outcome,
            };

            if cancel_clone.is_cancelled() {
                debug!("User fetch finished after cancellation; dropping result");
                return;
            }

            match &outcome {
                Ok(users) => info!("User fetch finished with {} records", users.len()),
                Err(e) => warn!("User fetch failed: {e}"),
            }
            let _ = tx.send(outcome).await;
        });

        Self { cancel }
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for FetchTask {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
