//! Notification type enumeration.

use serde::{Deserialize, Serialize};

/// What happened, from the recipient's point of view.
///
/// Stored as a snake_case string. Strings outside the known set decode to
/// [`NotificationKind::Other`], which is never grouped.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationKind {
    /// Someone followed the recipient's event.
    EventFollow,
    /// Someone viewed the recipient's event.
    ViewEvent,
    /// Someone liked the recipient's event.
    LikeEvent,
    /// Someone asked to collaborate on the recipient's event.
    CollaborationRequested,
    /// The recipient's collaboration request was accepted.
    CollaborationAccepted,
    /// Media was added to an event the recipient follows.
    MediaAdded,
    /// Someone sent the recipient a message.
    NewMessage,
    /// Someone followed the recipient.
    NewFollower,
    /// A type this build does not know.
    Other(String),
}

impl NotificationKind {
    /// Return the stored string form.
    pub fn as_str(&self) -> &str {
        match self {
            Self::EventFollow => "event_follow",
            Self::ViewEvent => "view_event",
            Self::LikeEvent => "like_event",
            Self::CollaborationRequested => "collaboration_requested",
            Self::CollaborationAccepted => "collaboration_accepted",
            Self::MediaAdded => "media_added",
            Self::NewMessage => "new_message",
            Self::NewFollower => "new_follower",
            Self::Other(raw) => raw,
        }
    }

    /// Parse the stored string form.
    pub fn parse(value: &str) -> Self {
        match value {
            "event_follow" => Self::EventFollow,
            "view_event" => Self::ViewEvent,
            "like_event" => Self::LikeEvent,
            "collaboration_requested" => Self::CollaborationRequested,
            "collaboration_accepted" => Self::CollaborationAccepted,
            "media_added" => Self::MediaAdded,
            "new_message" => Self::NewMessage,
            "new_follower" => Self::NewFollower,
            other => Self::Other(other.to_string()),
        }
    }

    /// Whether notifications of this kind may merge into one display entry.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// Summary line for a group of `count` notifications of this kind.
    ///
    /// `anchor` is the first sender seen; `title` is the event title if any
    /// member carried one.
    pub fn group_summary(&self, anchor: &str, count: usize, title: Option<&str>) -> String {
        let others = count.saturating_sub(1);
        let noun = if others == 1 { "other" } else { "others" };
        let target = match title {
            Some(t) => format!("\"{t}\""),
            None => "your event".to_string(),
        };

        match self {
            Self::EventFollow => {
                format!("{anchor} and {others} {noun} started following {target}.")
            }
            Self::ViewEvent => format!("{anchor} and {others} {noun} viewed {target}."),
            Self::LikeEvent => format!("{anchor} and {others} {noun} liked {target}."),
            Self::CollaborationRequested => {
                format!("{anchor} and {others} {noun} requested to collaborate on {target}.")
            }
            Self::CollaborationAccepted => format!(
                "{anchor} and {others} {noun} accepted your collaboration requests for {target}."
            ),
            Self::MediaAdded => format!("{anchor} and {others} {noun} added media to {target}."),
            Self::NewMessage => {
                format!("{anchor} and {others} {noun} sent you messages about {target}.")
            }
            Self::NewFollower => {
                format!("{anchor} and {others} {noun} started following you.")
            }
            Self::Other(_) => format!("{anchor} and {others} {noun} sent you notifications."),
        }
    }
}

impl From<String> for NotificationKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<NotificationKind> for String {
    fn from(kind: NotificationKind) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_strings_parse() {
        for raw in [
            "event_follow",
            "view_event",
            "like_event",
            "collaboration_requested",
            "collaboration_accepted",
            "media_added",
            "new_message",
            "new_follower",
        ] {
            let kind = NotificationKind::parse(raw);
            assert!(kind.is_recognized(), "{raw} should be recognized");
            assert_eq!(kind.as_str(), raw);
        }
    }

    #[test]
    fn test_unknown_string_is_other() {
        let kind = NotificationKind::parse("event_archived");
        assert_eq!(kind, NotificationKind::Other("event_archived".into()));
        assert!(!kind.is_recognized());
        assert_eq!(kind.to_string(), "event_archived");
    }

    #[test]
    fn test_serde_uses_plain_string() {
        let json = serde_json::to_string(&NotificationKind::LikeEvent).unwrap();
        assert_eq!(json, "\"like_event\"");
        let back: NotificationKind = serde_json::from_str("\"media_added\"").unwrap();
        assert_eq!(back, NotificationKind::MediaAdded);
    }

    #[test]
    fn test_group_summary_pluralization() {
        let kind = NotificationKind::EventFollow;
        assert_eq!(
            kind.group_summary("Uma", 4, Some("Beach Day")),
            "Uma and 3 others started following \"Beach Day\"."
        );
        assert_eq!(
            kind.group_summary("Uma", 2, None),
            "Uma and 1 other started following your event."
        );
    }
}
