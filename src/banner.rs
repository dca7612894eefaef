//! Single-slot transient status banner.
//!
//! Every `show` replaces the visible message and re-arms the hide timer; at
//! most one timer is pending at any moment. Updates can carry a submission
//! [`Ticket`] so that a response arriving late cannot overwrite the banner of
//! a request that was submitted after it.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

pub const DEFAULT_HIDE_AFTER: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_class(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BannerOrdering {
    /// Updates for older submissions are dropped once a newer one has shown.
    #[default]
    Submission,
    /// Whatever arrives last is shown.
    Arrival,
}

impl BannerOrdering {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "submission" => Some(BannerOrdering::Submission),
            "arrival" => Some(BannerOrdering::Arrival),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Default)]
struct Slot {
    current: Option<StatusMessage>,
    generation: u64,
    issued: u64,
    shown: u64,
    timer: Option<JoinHandle<()>>,
}

#[derive(Clone)]
pub struct StatusBanner {
    slot: Arc<Mutex<Slot>>,
    hide_after: Duration,
    ordering: BannerOrdering,
}

impl Default for StatusBanner {
    fn default() -> Self {
        Self::new(DEFAULT_HIDE_AFTER, BannerOrdering::default())
    }
}

impl StatusBanner {
    pub fn new(hide_after: Duration, ordering: BannerOrdering) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            hide_after,
            ordering,
        }
    }

    pub fn hide_after(&self) -> Duration {
        self.hide_after
    }

    /// Reserves a position in submission order for a request about to be sent.
    pub async fn ticket(&self) -> Ticket {
        let mut slot = self.slot.lock().await;
        slot.issued += 1;
        Ticket(slot.issued)
    }

    pub async fn show(&self, text: impl Into<String>, severity: Severity) {
        let ticket = self.ticket().await;
        self.show_for(ticket, text, severity).await;
    }

    /// Shows a message on behalf of the request holding `ticket`. Returns
    /// false when the update was discarded as stale.
    pub async fn show_for(&self, ticket: Ticket, text: impl Into<String>, severity: Severity) -> bool {
        let text = text.into();
        let mut slot = self.slot.lock().await;

        if self.ordering == BannerOrdering::Submission && ticket.0 < slot.shown {
            debug!(ticket = ticket.0, shown = slot.shown, "dropping stale status update");
            return false;
        }
        slot.shown = slot.shown.max(ticket.0);

        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.generation += 1;
        slot.current = Some(StatusMessage { text, severity });

        let generation = slot.generation;
        let shared = Arc::clone(&self.slot);
        let hide_after = self.hide_after;
        slot.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(hide_after).await;
            let mut slot = shared.lock().await;
            if slot.generation == generation {
                slot.current = None;
                slot.timer = None;
            }
        }));
        true
    }

    pub async fn clear(&self) {
        let mut slot = self.slot.lock().await;
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.generation += 1;
        slot.current = None;
    }

    pub async fn current(&self) -> Option<StatusMessage> {
        self.slot.lock().await.current.clone()
    }

    pub async fn has_pending_timer(&self) -> bool {
        self.slot.lock().await.timer.is_some()
    }
}
