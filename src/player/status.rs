//! Playback status subscription
//!
//! A player's status stream is consumed through an owned `StatusFeed`.
//! Dropping the feed releases the subscription on every exit path: the
//! watcher task is aborted and the channel closes, so no event can reach a
//! screen that has been torn down.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::models::StatusEvent;

/// Sender half handed to whatever produces status events
pub type StatusSender = mpsc::UnboundedSender<StatusEvent>;

/// Owned subscription to a player's status stream
pub struct StatusFeed {
    rx: mpsc::UnboundedReceiver<StatusEvent>,
    watcher: Option<JoinHandle<()>>,
}

impl StatusFeed {
    /// Feed backed by a watcher task that must die with the subscription
    pub fn new(rx: mpsc::UnboundedReceiver<StatusEvent>, watcher: Option<JoinHandle<()>>) -> Self {
        Self { rx, watcher }
    }

    /// Bare channel pair with no watcher (synthetic feeds in tests)
    pub fn channel() -> (StatusSender, StatusFeed) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, StatusFeed::new(rx, None))
    }

    /// Next queued event, without blocking
    pub fn try_next(&mut self) -> Option<StatusEvent> {
        self.rx.try_recv().ok()
    }

    /// Await the next event; `None` once the producer is gone
    pub async fn next(&mut self) -> Option<StatusEvent> {
        self.rx.recv().await
    }
}

impl Drop for StatusFeed {
    fn drop(&mut self) {
        if let Some(watcher) = self.watcher.take() {
            watcher.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlayerStatus;

    #[tokio::test]
    async fn test_feed_delivers_events_in_order() {
        let (tx, mut feed) = StatusFeed::channel();
        tx.send(StatusEvent::loading()).unwrap();
        tx.send(StatusEvent::ready()).unwrap();

        assert_eq!(feed.try_next().unwrap().status, PlayerStatus::Loading);
        assert_eq!(feed.try_next().unwrap().status, PlayerStatus::ReadyToPlay);
        assert!(feed.try_next().is_none());
    }

    #[tokio::test]
    async fn test_dropping_feed_closes_subscription() {
        let (tx, feed) = StatusFeed::channel();
        drop(feed);
        assert!(tx.send(StatusEvent::ready()).is_err());
    }

    #[tokio::test]
    async fn test_dropping_feed_aborts_watcher() {
        let (_tx, rx) = mpsc::unbounded_channel();
        // Would run forever if the subscription did not release it
        let watcher = tokio::spawn(std::future::pending::<()>());
        let probe = watcher.abort_handle();

        let feed = StatusFeed::new(rx, Some(watcher));
        drop(feed);

        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        assert!(probe.is_finished());
    }
}
