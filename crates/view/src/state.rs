//! Invitation page state machine.
//!
//! The page starts in [`ViewState::Loading`]. A [`ViewEvent::ParamsChanged`]
//! either fails immediately (names missing) or starts a lookup tagged with a
//! fresh [`RequestToken`]. A successful lookup is only revealed once the
//! minimum loading duration has passed since the lookup started; failures
//! are shown at once. Events carrying a token other than the current one
//! are stale and ignored.
//!
//! The machine performs no I/O. It returns a [`Command`] for the driver to
//! carry out and takes the current time as an argument.

use std::time::Duration;

use invite_core::slug::NamePair;
use invite_db::models::InvitationRecord;
use tokio::time::Instant;

use crate::error::LOOKUP_FAILED_MESSAGE;
use crate::query::PageQuery;

/// Shown when the page URL lacks a name.
pub const MISSING_NAMES_MESSAGE: &str =
    "Please provide bride and groom names in the URL (e.g., /?bride=Kavya&groom=Vaibhav)";

/// Default minimum time the loader stays up after a lookup starts.
pub const DEFAULT_MIN_LOADING: Duration = Duration::from_millis(5000);

/// Identifies one lookup. Strictly increasing per [`InviteView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// What the page is showing.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Success(InvitationRecord),
    Error(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

/// Inputs to the machine.
#[derive(Debug, Clone)]
pub enum ViewEvent {
    /// The page's query string was read or changed.
    ParamsChanged(PageQuery),
    /// A lookup returned a record.
    LookupResolved {
        token: RequestToken,
        record: InvitationRecord,
    },
    /// A lookup failed; `message` is what the user should see.
    LookupFailed { token: RequestToken, message: String },
    /// The reveal timer scheduled by [`Command::RevealAt`] fired.
    RevealDue { token: RequestToken },
}

/// Work the driver must perform after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Start a lookup and report back with `token`.
    Lookup { token: RequestToken, names: NamePair },
    /// Send [`ViewEvent::RevealDue`] with `token` at `deadline`.
    RevealAt { token: RequestToken, deadline: Instant },
}

/// The lookup currently allowed to change the page.
#[derive(Debug)]
struct InFlight {
    token: RequestToken,
    started_at: Instant,
    resolved: Option<InvitationRecord>,
}

#[derive(Debug)]
pub struct InviteView {
    state: ViewState,
    min_loading: Duration,
    last_token: u64,
    current: Option<InFlight>,
    last_query: Option<PageQuery>,
}

impl InviteView {
    pub fn new(min_loading: Duration) -> Self {
        Self {
            state: ViewState::Loading,
            min_loading,
            last_token: 0,
            current: None,
            last_query: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Token of the lookup that may still change the page, if any.
    pub fn current_token(&self) -> Option<RequestToken> {
        self.current.as_ref().map(|f| f.token)
    }

    /// Apply an event at time `now`.
    pub fn handle(&mut self, event: ViewEvent, now: Instant) -> Option<Command> {
        match event {
            ViewEvent::ParamsChanged(query) => self.params_changed(query, now),
            ViewEvent::LookupResolved { token, record } => self.resolved(token, record, now),
            ViewEvent::LookupFailed { token, message } => {
                self.failed(token, message);
                None
            }
            ViewEvent::RevealDue { token } => {
                self.reveal(token);
                None
            }
        }
    }

    fn params_changed(&mut self, query: PageQuery, now: Instant) -> Option<Command> {
        if self.last_query.as_ref() == Some(&query) {
            return None;
        }
        self.last_query = Some(query.clone());

        let names = match query.names() {
            Ok(names) => names,
            Err(_) => {
                tracing::debug!("Page opened without bride and groom names");
                self.current = None;
                self.state = ViewState::Error(MISSING_NAMES_MESSAGE.to_string());
                return None;
            }
        };

        self.last_token += 1;
        let token = RequestToken(self.last_token);
        self.current = Some(InFlight {
            token,
            started_at: now,
            resolved: None,
        });
        self.state = ViewState::Loading;

        Some(Command::Lookup { token, names })
    }

    fn resolved(
        &mut self,
        token: RequestToken,
        record: InvitationRecord,
        now: Instant,
    ) -> Option<Command> {
        let deadline = match self.current.as_ref() {
            Some(flight) if flight.token == token && flight.resolved.is_none() => {
                flight.started_at + self.min_loading
            }
            _ => {
                tracing::debug!(?token, "Discarding stale lookup result");
                return None;
            }
        };

        if now >= deadline {
            self.current = None;
            self.state = ViewState::Success(record);
            return None;
        }

        if let Some(flight) = self.current.as_mut() {
            flight.resolved = Some(record);
        }
        Some(Command::RevealAt { token, deadline })
    }

    fn failed(&mut self, token: RequestToken, message: String) {
        if self.current_token() != Some(token) {
            tracing::debug!(?token, "Discarding stale lookup failure");
            return;
        }

        let message = if message.trim().is_empty() {
            LOOKUP_FAILED_MESSAGE.to_string()
        } else {
            message
        };

        self.current = None;
        self.state = ViewState::Error(message);
    }

    fn reveal(&mut self, token: RequestToken) {
        let record = match self.current.as_mut() {
            Some(flight) if flight.token == token => flight.resolved.take(),
            _ => None,
        };

        if let Some(record) = record {
            self.current = None;
            self.state = ViewState::Success(record);
        }
    }
}

impl Default for InviteView {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LOADING)
    }
}
