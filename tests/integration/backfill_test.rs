//! Title backfill over records stored before the event had a title.

use chrono::{Duration, Utc};

use snapshare_core::types::id::{EventId, NotificationId, UserId};
use snapshare_entity::notification::{NewNotification, NotificationKind};
use snapshare_service::{BackfillReport, RequestContext, TitleBackfill};

use crate::helpers::TestApp;

#[tokio::test]
async fn test_backfill_fills_group_titles_once() {
    let app = TestApp::new();
    let (author, event) = (UserId::new(), EventId::new());
    for (i, name) in ["Uma", "Bo"].into_iter().enumerate() {
        app.store.seed(
            NewNotification {
                recipient: author,
                kind: NotificationKind::LikeEvent,
                message: format!("{name} liked your event."),
                sender_name: name.into(),
                event_ref: Some(event),
                event_title: None,
            }
            .into_notification(NotificationId::new(), Utc::now() - Duration::minutes(10 - i as i64)),
        );
    }
    let ctx = RequestContext::new(author);

    let before = app.state.notification_service.list_grouped(&ctx).await.unwrap();
    assert_eq!(before[0].message, "Uma and 1 other liked your event.");

    app.directory.add_event(event, Some("Beach Day"));
    let backfill = TitleBackfill::new(
        app.store.clone(),
        app.directory.clone(),
        100,
    );

    let first = backfill.run().await.unwrap();
    assert_eq!(first.events_titled, 1);
    assert_eq!(first.records_updated, 2);
    assert_eq!(backfill.run().await.unwrap(), BackfillReport::default());

    let after = app.state.notification_service.list_grouped(&ctx).await.unwrap();
    assert_eq!(after[0].message, "Uma and 1 other liked \"Beach Day\".");
}
