//! Reminder scheduling service
//!
//! Async wrapper around the shared in-memory [`ReminderStore`]. All
//! mutations are single-writer (the interacting user); the lock only
//! guards against handler interleaving. Invalid input never surfaces as an
//! error: it is normalized or the operation is silently ignored.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use shared::{classify_urgency, Reminder, ReminderStore, UrgencyTier};
use tokio::sync::RwLock;

/// Shared handle to the session's reminder collection
pub type SharedReminderStore = Arc<RwLock<ReminderStore>>;

/// Input for adding a care task
#[derive(Debug, Deserialize)]
pub struct CreateReminderInput {
    pub text: String,
    /// Days between repetitions; absent or non-positive values fall back
    /// to the 7-day default
    pub frequency_days: Option<i64>,
}

/// A reminder as displayed, with its derived urgency tier
#[derive(Debug, Clone, Serialize)]
pub struct ReminderView {
    pub id: i64,
    pub text: String,
    pub frequency_days: u32,
    pub next_reminder_date: NaiveDate,
    pub urgency: UrgencyTier,
}

impl ReminderView {
    fn from_reminder(reminder: Reminder, today: NaiveDate) -> Self {
        Self {
            id: reminder.id,
            text: reminder.text,
            frequency_days: reminder.frequency_days,
            urgency: classify_urgency(reminder.next_reminder_date, today),
            next_reminder_date: reminder.next_reminder_date,
        }
    }
}

/// Service for managing the care reminder schedule
#[derive(Clone)]
pub struct ReminderService {
    store: SharedReminderStore,
}

impl ReminderService {
    pub fn new(store: SharedReminderStore) -> Self {
        Self { store }
    }

    /// Add a task. Returns `None` when the submission was ignored
    /// (blank text).
    pub async fn add(&self, input: CreateReminderInput) -> Option<ReminderView> {
        let today = today_local();
        let mut store = self.store.write().await;

        let id = store.add(&input.text, input.frequency_days, today)?;
        store
            .get(id)
            .cloned()
            .map(|r| ReminderView::from_reminder(r, today))
    }

    /// Delete a task; unknown ids are ignored
    pub async fn delete(&self, id: i64) -> bool {
        self.store.write().await.delete(id)
    }

    /// Complete a task, restarting its cycle from today. Returns `None`
    /// for unknown ids.
    pub async fn complete(&self, id: i64) -> Option<ReminderView> {
        let today = today_local();
        self.store
            .write()
            .await
            .complete(id, today)
            .map(|r| ReminderView::from_reminder(r, today))
    }

    /// All tasks, soonest due first, with display urgency
    pub async fn list(&self) -> Vec<ReminderView> {
        let today = today_local();
        self.store
            .read()
            .await
            .list()
            .into_iter()
            .map(|r| ReminderView::from_reminder(r, today))
            .collect()
    }
}

/// Today as a local calendar date; urgency boundaries follow the user's
/// midnight, not UTC's
fn today_local() -> NaiveDate {
    Local::now().date_naive()
}
