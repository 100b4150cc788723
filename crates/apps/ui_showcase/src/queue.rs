//! Caller-side notification list backing the organism gallery.

use atomic_ui::{AlertVariant, Notification};
use leptos::logging;
use serde::Deserialize;

const DEMO_FIXTURE: &str = include_str!("../fixtures/notifications.json");

#[derive(Debug, Deserialize)]
struct FixtureEntry {
    variant: AlertVariant,
    message: String,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered list of notifications with sequential string ids.
///
/// Ids are never reused, including after [`NotificationQueue::clear`].
pub struct NotificationQueue {
    items: Vec<Notification>,
    last_id: u64,
}

impl NotificationQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a queue from a JSON array of `{ variant, message, title? }` entries.
    pub fn from_fixture(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<FixtureEntry> = serde_json::from_str(json)?;
        let mut queue = Self::new();
        for entry in entries {
            queue.push(entry.variant, entry.message, entry.title);
        }
        Ok(queue)
    }

    /// Queue seeded from the bundled demo fixture, or empty if it fails to parse.
    pub fn demo() -> Self {
        match Self::from_fixture(DEMO_FIXTURE) {
            Ok(queue) => queue,
            Err(err) => {
                logging::warn!("notification fixture parse failed: {err}");
                Self::new()
            }
        }
    }

    /// Appends a notification and returns its id.
    pub fn push(
        &mut self,
        variant: AlertVariant,
        message: impl Into<String>,
        title: Option<String>,
    ) -> String {
        self.last_id += 1;
        let id = self.last_id.to_string();
        let mut notification = Notification::new(id.clone(), variant, message);
        notification.title = title;
        self.items.push(notification);
        id
    }

    /// Removes the notification with `id`. Returns `false` when it is not queued.
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|notification| notification.id != id);
        self.items.len() != before
    }

    /// Drops every notification.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Notifications in insertion order.
    pub fn as_slice(&self) -> &[Notification] {
        &self.items
    }

    /// Number of queued notifications.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(queue: &NotificationQueue) -> Vec<&str> {
        queue.as_slice().iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn push_assigns_sequential_ids() {
        let mut queue = NotificationQueue::new();
        assert_eq!(queue.push(AlertVariant::Info, "one", None), "1");
        assert_eq!(queue.push(AlertVariant::Error, "two", Some("Oops".into())), "2");

        assert_eq!(ids(&queue), vec!["1", "2"]);
        assert_eq!(queue.as_slice()[1].title.as_deref(), Some("Oops"));
    }

    #[test]
    fn dismiss_removes_only_the_matching_id() {
        let mut queue = NotificationQueue::new();
        for message in ["a", "b", "c"] {
            queue.push(AlertVariant::Success, message, None);
        }

        assert!(queue.dismiss("2"));
        assert_eq!(ids(&queue), vec!["1", "3"]);
        assert!(!queue.dismiss("2"));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn ids_stay_unique_after_clear() {
        let mut queue = NotificationQueue::new();
        queue.push(AlertVariant::Warning, "first", None);
        queue.clear();
        assert!(queue.is_empty());

        assert_eq!(queue.push(AlertVariant::Warning, "second", None), "2");
    }

    #[test]
    fn bundled_fixture_seeds_every_variant() {
        let queue = NotificationQueue::demo();
        let variants: Vec<_> = queue.as_slice().iter().map(|n| n.variant).collect();

        assert_eq!(variants, AlertVariant::ALL.to_vec());
        assert_eq!(ids(&queue), vec!["1", "2", "3", "4"]);
        assert_eq!(queue.as_slice()[0].title.as_deref(), Some("Deploy finished"));
        assert_eq!(queue.as_slice()[1].title, None);
    }

    #[test]
    fn malformed_fixture_is_an_error() {
        assert!(NotificationQueue::from_fixture(r#"[{"variant":"loud","message":"x"}]"#).is_err());
        assert!(NotificationQueue::from_fixture("{}").is_err());
    }
}
