//! In-memory reminder scheduler
//!
//! Owns the session's care tasks, computes next-due dates, and produces the
//! display ordering. Nothing here is persisted; the list lives and dies with
//! the session. No operation returns an error for malformed input: bad
//! values are normalized or the call is silently ignored.

use chrono::{NaiveDate, Utc};

use crate::models::{next_due_date, Reminder};
use crate::validation::{normalize_frequency_days, normalize_task_text};

/// Unordered collection of reminders, keyed by identifier
///
/// Insertion order is preserved so that `list` can break due-date ties
/// stably.
#[derive(Debug, Default)]
pub struct ReminderStore {
    reminders: Vec<Reminder>,
    last_id: i64,
}

impl ReminderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a care task.
    ///
    /// Returns the new reminder's id, or `None` when the text is empty
    /// after trimming (the submission is ignored, not an error). An absent
    /// or non-positive frequency falls back to the 7-day default. The new
    /// task is due `frequency_days` calendar days from `today`.
    pub fn add(&mut self, text: &str, frequency_days: Option<i64>, today: NaiveDate) -> Option<i64> {
        let text = normalize_task_text(text)?;
        let frequency_days = normalize_frequency_days(frequency_days);
        let id = self.next_id();

        self.reminders.push(Reminder {
            id,
            text,
            frequency_days,
            next_reminder_date: next_due_date(today, frequency_days),
        });

        Some(id)
    }

    /// Remove a task. Unknown ids are ignored.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.reminders.len();
        self.reminders.retain(|r| r.id != id);
        self.reminders.len() != before
    }

    /// Mark a task done, restarting its cycle from `today`.
    ///
    /// The new due date is always `today + frequency_days`, never computed
    /// from the missed date: completing late does not accumulate backlog.
    /// Unknown ids are ignored.
    pub fn complete(&mut self, id: i64, today: NaiveDate) -> Option<Reminder> {
        let reminder = self.reminders.iter_mut().find(|r| r.id == id)?;
        reminder.next_reminder_date = next_due_date(today, reminder.frequency_days);
        Some(reminder.clone())
    }

    /// All tasks, soonest due first. Ties keep insertion order.
    pub fn list(&self) -> Vec<Reminder> {
        let mut reminders = self.reminders.clone();
        // sort_by_key is stable, so equal dates stay in insertion order
        reminders.sort_by_key(|r| r.next_reminder_date);
        reminders
    }

    pub fn get(&self, id: i64) -> Option<&Reminder> {
        self.reminders.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }

    /// Ids are derived from the current time in milliseconds, clamped to be
    /// strictly increasing so two adds in the same millisecond stay unique.
    fn next_id(&mut self) -> i64 {
        let id = Utc::now().timestamp_millis().max(self.last_id + 1);
        self.last_id = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_add_assigns_unique_increasing_ids() {
        let mut store = ReminderStore::new();
        let today = date("2024-01-10");

        let a = store.add("Water Snake Plant", Some(14), today).unwrap();
        let b = store.add("Fertilize Pothos", Some(30), today).unwrap();
        let c = store.add("Mist Calathea", Some(7), today).unwrap();

        assert!(a < b && b < c);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut store = ReminderStore::new();
        let today = date("2024-01-10");

        assert!(store.add("", Some(7), today).is_none());
        assert!(store.add("   \t ", Some(7), today).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_trims_text() {
        let mut store = ReminderStore::new();
        let id = store.add("  Water the Monstera  ", Some(7), date("2024-01-10")).unwrap();
        assert_eq!(store.get(id).unwrap().text, "Water the Monstera");
    }

    #[test]
    fn test_invalid_frequency_defaults_to_seven_days() {
        let mut store = ReminderStore::new();
        let today = date("2024-01-10");

        let id = store.add("Check humidity", Some(0), today).unwrap();
        let reminder = store.get(id).unwrap();
        assert_eq!(reminder.frequency_days, 7);
        assert_eq!(reminder.next_reminder_date, date("2024-01-17"));

        let id = store.add("Rotate pot", None, today).unwrap();
        assert_eq!(store.get(id).unwrap().frequency_days, 7);
    }

    #[test]
    fn test_complete_restarts_cycle_from_today() {
        let mut store = ReminderStore::new();
        let id = store.add("Water Snake Plant", Some(14), date("2024-01-01")).unwrap();

        // Completed twelve days late: due date restarts from the completion
        // day, not from the missed date
        let updated = store.complete(id, date("2024-01-27")).unwrap();
        assert_eq!(updated.next_reminder_date, date("2024-02-10"));
    }

    #[test]
    fn test_complete_unknown_id_is_noop() {
        let mut store = ReminderStore::new();
        store.add("Water Snake Plant", Some(14), date("2024-01-10"));
        assert!(store.complete(42, date("2024-01-10")).is_none());
    }

    #[test]
    fn test_delete_unknown_id_leaves_collection_unchanged() {
        let mut store = ReminderStore::new();
        store.add("Water Snake Plant", Some(14), date("2024-01-10"));

        assert!(!store.delete(42));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_list_sorts_by_due_date() {
        let mut store = ReminderStore::new();
        let today = date("2024-01-10");

        store.add("later", Some(30), today);
        store.add("soonest", Some(2), today);
        store.add("middle", Some(7), today);

        let texts: Vec<_> = store.list().into_iter().map(|r| r.text).collect();
        assert_eq!(texts, ["soonest", "middle", "later"]);
    }

    #[test]
    fn test_list_ties_keep_insertion_order() {
        let mut store = ReminderStore::new();
        let today = date("2024-01-10");

        store.add("first", Some(7), today);
        store.add("second", Some(7), today);
        store.add("third", Some(7), today);

        let texts: Vec<_> = store.list().into_iter().map(|r| r.text).collect();
        assert_eq!(texts, ["first", "second", "third"]);
    }
}
