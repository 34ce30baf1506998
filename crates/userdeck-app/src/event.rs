use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc;
use userdeck_core::FetchOutcome;

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    #[allow(dead_code)]
    Resize(u16, u16),
    /// A directory fetch resolved. `seq` identifies the fetch it belongs to.
    FetchFinished { seq: u64, outcome: FetchOutcome },
}

pub struct EventHandler {
    tx: mpsc::UnboundedSender<AppEvent>,
    rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let input_tx = tx.clone();
        tokio::spawn(async move {
            let mut tick_interval = tokio::time::interval(tick_rate);
            loop {
                let event = tokio::select! {
                    _ = tick_interval.tick() => AppEvent::Tick,
                    maybe = poll_crossterm_event() => match maybe {
                        Some(e) => e,
                        None => continue,
                    },
                };
                if input_tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { tx, rx }
    }

    /// Sender for background tasks that report back into the event loop.
    pub fn app_tx(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> anyhow::Result<AppEvent> {
        self.rx.recv().await.ok_or_else(|| anyhow::anyhow!("Event channel closed"))
    }

    pub fn drain_pending(&mut self) -> Vec<AppEvent> {
        let mut pending = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            pending.push(event);
        }
        pending
    }
}

async fn poll_crossterm_event() -> Option<AppEvent> {
    let event = tokio::task::spawn_blocking(|| {
        if event::poll(Duration::from_millis(50)).ok()? {
            event::read().ok()
        } else {
            None
        }
    })
    .await
    .ok()??;

    match event {
        Event::Key(key) => Some(AppEvent::Key(key)),
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}
