//! Media upload fan-out to event followers.

use snapshare_core::events::{Actor, DomainAction, DomainEvent};
use snapshare_core::types::id::{EventId, UserId};
use snapshare_entity::notification::NotificationKind;
use snapshare_service::group_notifications;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_media_reaches_every_follower_except_uploader() {
    let app = TestApp::new();
    let event = EventId::new();
    let uploader = UserId::new();
    let (online, offline) = (UserId::new(), UserId::new());
    app.directory.add_user(uploader, "Uma");
    app.directory.add_event(event, Some("Beach Day"));
    for follower in [uploader, online, offline, online] {
        app.directory.add_follower(event, follower);
    }
    let (_conn, mut frames) = app.state.connections.register(online);

    let deliveries = app
        .state
        .listeners
        .handle(&DomainEvent::new(DomainAction::MediaAdded {
            actor: Actor::User { id: uploader },
            event_id: event,
            media_count: 3,
        }))
        .await;

    assert_eq!(deliveries.len(), 2);
    assert!(deliveries.iter().all(|d| d.is_stored()));
    assert_eq!(deliveries.iter().filter(|d| d.is_pushed()).count(), 1);
    assert_eq!(app.store.len(), 2);

    let frame: serde_json::Value = serde_json::from_str(&frames.recv().await.unwrap()).unwrap();
    assert_eq!(
        frame["notification"]["message"],
        "Uma added 3 new photos to \"Beach Day\"."
    );
}

#[tokio::test]
async fn test_repeated_uploads_group_per_follower() {
    let app = TestApp::new();
    let event = EventId::new();
    let follower = UserId::new();
    app.directory.add_event(event, Some("Hike"));
    app.directory.add_follower(event, follower);

    for name in ["Uma", "Bo"] {
        app.state
            .listeners
            .handle(&DomainEvent::new(DomainAction::MediaAdded {
                actor: Actor::Guest { name: name.into() },
                event_id: event,
                media_count: 1,
            }))
            .await;
    }

    let ctx = snapshare_service::RequestContext::new(follower);
    let records = app.state.notification_service.list(&ctx).await.unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|n| n.kind == NotificationKind::MediaAdded));

    let groups = group_notifications(&records);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].message, "Uma and 1 other added media to \"Hike\".");
}

#[tokio::test]
async fn test_event_without_followers_writes_nothing() {
    let app = TestApp::new();
    let deliveries = app
        .state
        .listeners
        .handle(&DomainEvent::new(DomainAction::MediaAdded {
            actor: Actor::Guest { name: "Uma".into() },
            event_id: EventId::new(),
            media_count: 2,
        }))
        .await;

    assert!(deliveries.iter().all(|d| !d.is_stored()));
    assert!(app.store.is_empty());
}
