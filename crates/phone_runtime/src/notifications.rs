//! Notification centre state, owned by the runtime and passed down explicitly.

use phone_app_contract::AppId;
use serde::{Deserialize, Serialize};

/// Notifications kept before the oldest is dropped.
pub const NOTIFICATION_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
/// Notification identifier, unique for the session.
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One notification-centre entry.
pub struct Notification {
    /// Identifier.
    pub id: NotificationId,
    /// Title line.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Posting app, if any.
    pub app_id: Option<AppId>,
    /// Unix milliseconds at posting time.
    pub posted_at_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Newest-first notification list.
pub struct NotificationCenterState {
    next_id: u64,
    entries: Vec<Notification>,
}

impl Default for NotificationCenterState {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }
}

impl NotificationCenterState {
    /// Entries, newest first.
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the centre is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Posts a notification at the top of the list.
    pub fn push(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        app_id: Option<AppId>,
        posted_at_ms: u64,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.entries.insert(
            0,
            Notification {
                id,
                title: title.into(),
                body: body.into(),
                app_id,
                posted_at_ms,
            },
        );
        self.entries.truncate(NOTIFICATION_LIMIT);
        id
    }

    /// Removes one notification.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        self.entries.len() != before
    }

    /// Removes every notification.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
