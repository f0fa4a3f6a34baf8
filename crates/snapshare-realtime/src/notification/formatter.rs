//! Notification message formatting.

use snapshare_entity::notification::NotificationKind;

/// Action-specific data some templates need.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detail<'a> {
    /// Nothing beyond the sender.
    None,
    /// Number of uploaded items.
    MediaCount(u32),
    /// Direct message body.
    Message(&'a str),
}

/// Formats the single-notification text for each kind.
pub struct NotificationFormatter;

impl NotificationFormatter {
    /// Builds the message stored on a new notification.
    pub fn compose(
        kind: &NotificationKind,
        sender: &str,
        event_title: Option<&str>,
        detail: Detail<'_>,
    ) -> String {
        match kind {
            NotificationKind::EventFollow | NotificationKind::NewFollower => {
                format!("{sender} started following you.")
            }
            NotificationKind::ViewEvent => format!("{sender} viewed your event."),
            NotificationKind::LikeEvent => format!("{sender} liked your event."),
            NotificationKind::CollaborationRequested => {
                format!("{sender} requested to collaborate on your event.")
            }
            NotificationKind::CollaborationAccepted => {
                format!("{sender} accepted your collaboration request.")
            }
            NotificationKind::MediaAdded => Self::media_added(sender, event_title, detail),
            NotificationKind::NewMessage => match detail {
                Detail::Message(content) => format!("{sender} sent you a message: \"{content}\""),
                _ => format!("{sender} sent you a message."),
            },
            NotificationKind::Other(_) => format!("You have a new notification from {sender}."),
        }
    }

    fn media_added(sender: &str, event_title: Option<&str>, detail: Detail<'_>) -> String {
        let count = match detail {
            Detail::MediaCount(n) => n.max(1),
            _ => 1,
        };
        let items = if count == 1 {
            "a new photo".to_string()
        } else {
            format!("{count} new photos")
        };
        match event_title {
            Some(title) => format!("{sender} added {items} to \"{title}\"."),
            None => format!("{sender} added {items} to an event you follow."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_message() {
        let msg = NotificationFormatter::compose(
            &NotificationKind::EventFollow,
            "Uma",
            Some("Beach Day"),
            Detail::None,
        );
        assert_eq!(msg, "Uma started following you.");
    }

    #[test]
    fn test_message_quotes_content() {
        let msg = NotificationFormatter::compose(
            &NotificationKind::NewMessage,
            "Uma",
            None,
            Detail::Message("see you there"),
        );
        assert_eq!(msg, "Uma sent you a message: \"see you there\"");
    }

    #[test]
    fn test_media_added_uses_count_and_title() {
        let msg = NotificationFormatter::compose(
            &NotificationKind::MediaAdded,
            "Uma",
            Some("Beach Day"),
            Detail::MediaCount(3),
        );
        assert_eq!(msg, "Uma added 3 new photos to \"Beach Day\".");

        let msg = NotificationFormatter::compose(
            &NotificationKind::MediaAdded,
            "Uma",
            None,
            Detail::None,
        );
        assert_eq!(msg, "Uma added a new photo to an event you follow.");
    }
}
