//! Groups raw notifications into display entries.
//!
//! Notifications of the same recognized kind about the same event merge into
//! one entry; everything else stays a singleton. The whole pass is a pure
//! function of its input.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use snapshare_core::types::id::{EventId, NotificationId};
use snapshare_entity::notification::{GroupKey, Notification, NotificationGroup, NotificationKind};

/// Returns the display entry `notification` belongs to.
pub fn group_key(notification: &Notification) -> GroupKey {
    match notification.event_ref {
        Some(event_id) if notification.kind.is_recognized() => GroupKey::Event {
            event_id,
            kind: notification.kind.clone(),
        },
        _ => GroupKey::Single {
            id: notification.id,
        },
    }
}

/// Running state for one group during the fold.
struct Accumulator {
    key: GroupKey,
    kind: NotificationKind,
    event_ref: Option<EventId>,
    /// Earliest member seen so far and its sender.
    anchor: (DateTime<Utc>, String),
    /// Newest member carrying a non-empty title.
    title: Option<(DateTime<Utc>, String)>,
    latest_at: DateTime<Utc>,
    all_read: bool,
    members: Vec<NotificationId>,
    /// Own message of the first member, used verbatim for singletons.
    message: String,
}

impl Accumulator {
    fn start(key: GroupKey, n: &Notification) -> Self {
        Self {
            key,
            kind: n.kind.clone(),
            event_ref: n.event_ref,
            anchor: (n.created_at, n.sender_name.clone()),
            title: usable_title(n).map(|t| (n.created_at, t.to_string())),
            latest_at: n.created_at,
            all_read: n.read,
            members: vec![n.id],
            message: n.message.clone(),
        }
    }

    fn absorb(&mut self, n: &Notification) {
        // Input is newest first, so ties go to the later record.
        if n.created_at <= self.anchor.0 {
            self.anchor = (n.created_at, n.sender_name.clone());
        }
        if let Some(t) = usable_title(n) {
            let newer = self.title.as_ref().is_none_or(|(at, _)| n.created_at > *at);
            if newer {
                self.title = Some((n.created_at, t.to_string()));
            }
        }
        self.latest_at = self.latest_at.max(n.created_at);
        self.all_read &= n.read;
        self.members.push(n.id);
    }

    fn finish(self) -> NotificationGroup {
        let count = self.members.len();
        let (_, sender_name) = self.anchor;
        let event_title = self.title.map(|(_, t)| t);
        let message = if count == 1 {
            self.message
        } else {
            self.kind
                .group_summary(&sender_name, count, event_title.as_deref())
        };

        NotificationGroup {
            key: self.key,
            kind: self.kind,
            event_ref: self.event_ref,
            sender_name,
            event_title,
            message,
            count,
            latest_at: self.latest_at,
            read: self.all_read,
            member_ids: self.members,
        }
    }
}

fn usable_title(n: &Notification) -> Option<&str> {
    n.event_title.as_deref().filter(|t| !t.trim().is_empty())
}

/// Groups `notifications` (newest first, as listed by the store) into
/// display entries ordered by most recent activity.
///
/// Entries with equal activity time keep the order in which their first
/// member appeared.
pub fn group_notifications(notifications: &[Notification]) -> Vec<NotificationGroup> {
    let (_, accumulators) = notifications.iter().fold(
        (HashMap::<GroupKey, usize>::new(), Vec::<Accumulator>::new()),
        |(mut index, mut accs), n| {
            let key = group_key(n);
            match index.get(&key) {
                Some(&slot) => accs[slot].absorb(n),
                None => {
                    index.insert(key.clone(), accs.len());
                    accs.push(Accumulator::start(key, n));
                }
            }
            (index, accs)
        },
    );

    let mut groups: Vec<NotificationGroup> =
        accumulators.into_iter().map(Accumulator::finish).collect();
    groups.sort_by(|a, b| b.latest_at.cmp(&a.latest_at));
    groups
}
