//! Async driver for the invitation page.
//!
//! Owns an [`InviteView`] and performs the commands it emits: lookups run
//! as tokio tasks, and the minimum-loading reveal is a separate timer task.
//! While the loader is visible it also fetches the segment asset once per
//! appearance. Every change is published as a [`PageSnapshot`] on a
//! `watch` channel.

use std::sync::Arc;
use std::time::Duration;

use invite_db::models::SegmentAsset;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::client::{InviteLookup, SegmentFeed};
use crate::error::{ClientError, ViewError};
use crate::query::PageQuery;
use crate::state::{Command, InviteView, ViewEvent, ViewState};

/// Everything needed to draw the page at one moment.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSnapshot {
    pub view: ViewState,
    /// Loader artwork; only present while the loader is visible.
    pub segments: Option<SegmentAsset>,
}

enum Message {
    View(ViewEvent),
    Segments {
        epoch: u64,
        result: Result<SegmentAsset, ClientError>,
    },
}

/// Handle to a running page. Dropping it stops the driver.
pub struct PageHandle {
    tx: mpsc::UnboundedSender<Message>,
    snapshots: watch::Receiver<PageSnapshot>,
    task: JoinHandle<()>,
}

impl PageHandle {
    /// Report the page's current query string.
    pub fn navigate(&self, query: PageQuery) -> Result<(), ViewError> {
        self.tx
            .send(Message::View(ViewEvent::ParamsChanged(query)))
            .map_err(|_| ViewError::DriverStopped)
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> PageSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receiver that sees every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<PageSnapshot> {
        self.snapshots.clone()
    }

    /// Wait until the page leaves the loading state.
    pub async fn settled(&mut self) -> Result<ViewState, ViewError> {
        let snapshot = self
            .snapshots
            .wait_for(|s| !s.view.is_loading())
            .await
            .map_err(|_| ViewError::DriverStopped)?;
        Ok(snapshot.view.clone())
    }
}

impl Drop for PageHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Start a page driver on the current tokio runtime.
///
/// The page starts in the loading state; call [`PageHandle::navigate`]
/// with the page's query to begin.
pub fn spawn_page<L, S>(lookup: Arc<L>, feed: Arc<S>, min_loading: Duration) -> PageHandle
where
    L: InviteLookup,
    S: SegmentFeed,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let view = InviteView::new(min_loading);
    let (snapshot_tx, snapshots) = watch::channel(PageSnapshot {
        view: view.state().clone(),
        segments: None,
    });

    let driver = Driver {
        view,
        lookup,
        feed,
        tx: tx.clone(),
        snapshots: snapshot_tx,
        segments: None,
        loader_epoch: 0,
    };
    let task = tokio::spawn(driver.run(rx));

    PageHandle {
        tx,
        snapshots,
        task,
    }
}

struct Driver<L, S> {
    view: InviteView,
    lookup: Arc<L>,
    feed: Arc<S>,
    tx: mpsc::UnboundedSender<Message>,
    snapshots: watch::Sender<PageSnapshot>,
    segments: Option<SegmentAsset>,
    loader_epoch: u64,
}

impl<L: InviteLookup, S: SegmentFeed> Driver<L, S> {
    async fn run(mut self, mut rx: mpsc::UnboundedReceiver<Message>) {
        // The loader is up from the first frame.
        self.show_loader();
        self.publish();

        while let Some(message) = rx.recv().await {
            match message {
                Message::View(event) => {
                    let was_loading = self.view.state().is_loading();
                    if let Some(command) = self.view.handle(event, Instant::now()) {
                        self.execute(command);
                    }

                    match (was_loading, self.view.state().is_loading()) {
                        (false, true) => self.show_loader(),
                        (true, false) => self.hide_loader(),
                        _ => {}
                    }
                }
                Message::Segments { epoch, result } => {
                    if epoch != self.loader_epoch || !self.view.state().is_loading() {
                        continue;
                    }
                    match result {
                        Ok(asset) => self.segments = Some(asset),
                        Err(err) => {
                            tracing::warn!(error = %err, "Failed to load ganesha segments");
                        }
                    }
                }
            }

            self.publish();
        }
    }

    fn execute(&self, command: Command) {
        let tx = self.tx.clone();
        match command {
            Command::Lookup { token, names } => {
                let lookup = Arc::clone(&self.lookup);
                tokio::spawn(async move {
                    let event = match lookup.lookup(&names).await {
                        Ok(record) => ViewEvent::LookupResolved { token, record },
                        Err(err) => {
                            tracing::warn!(
                                error = %err,
                                bride = %names.bride,
                                groom = %names.groom,
                                "Invitation lookup failed",
                            );
                            ViewEvent::LookupFailed {
                                token,
                                message: err.user_message(),
                            }
                        }
                    };
                    let _ = tx.send(Message::View(event));
                });
            }
            Command::RevealAt { token, deadline } => {
                tokio::spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    let _ = tx.send(Message::View(ViewEvent::RevealDue { token }));
                });
            }
        }
    }

    fn show_loader(&mut self) {
        self.loader_epoch += 1;
        self.segments = None;

        let epoch = self.loader_epoch;
        let feed = Arc::clone(&self.feed);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = feed.segments().await;
            let _ = tx.send(Message::Segments { epoch, result });
        });
    }

    fn hide_loader(&mut self) {
        self.loader_epoch += 1;
        self.segments = None;
    }

    fn publish(&self) {
        self.snapshots.send_replace(PageSnapshot {
            view: self.view.state().clone(),
            segments: self.segments.clone(),
        });
    }
}
