//! Action intake through storage, push, grouping and bulk actions.

use std::time::Duration;

use axum::http::StatusCode;
use serde_json::{Value, json};

use snapshare_core::types::id::{EventId, UserId};

use crate::helpers::TestApp;

fn follow(name: &str, event: EventId, author: UserId) -> Value {
    json!({
        "action": "event_followed",
        "actor": { "kind": "guest", "name": name },
        "event_id": event,
        "author_id": author,
    })
}

#[tokio::test]
async fn test_followers_collapse_into_one_group_and_are_pushed() {
    let app = TestApp::new();
    let (author, event) = (UserId::new(), EventId::new());
    app.directory.add_event(event, Some("Beach Day"));
    let (_conn, mut frames) = app.state.connections.register(author);

    for (i, name) in ["Uma", "Bo", "Cy", "Di"].into_iter().enumerate() {
        let (status, _) = app
            .request("POST", "/api/actions", None, Some(follow(name, event, author)))
            .await;
        assert_eq!(status, StatusCode::ACCEPTED);
        // One at a time, so creation order matches submission order.
        app.wait_for_records(author, i + 1).await;
    }

    let (status, body) = app
        .request("GET", "/api/notifications/grouped", Some(author), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    let groups = body["data"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["count"], 4);
    assert_eq!(groups[0]["sender_name"], "Uma");
    assert_eq!(
        groups[0]["message"],
        "Uma and 3 others started following \"Beach Day\"."
    );
    assert_eq!(groups[0]["read"], false);

    let mut pushed = Vec::new();
    for _ in 0..4 {
        let frame = tokio::time::timeout(Duration::from_secs(1), frames.recv())
            .await
            .unwrap()
            .unwrap();
        pushed.push(serde_json::from_str::<Value>(&frame).unwrap());
    }
    assert_eq!(pushed.len(), 4);
    assert!(pushed.iter().all(|f| f["type"] == "notification"));
    assert_eq!(pushed[0]["notification"]["message"], "Uma started following you.");
}

#[tokio::test]
async fn test_bulk_read_and_delete_only_touch_callers_records() {
    let app = TestApp::new();
    let (alice, bob, event) = (UserId::new(), UserId::new(), EventId::new());

    for recipient in [alice, alice, bob] {
        let action = json!({
            "action": "event_liked",
            "actor": { "kind": "guest", "name": "Sam" },
            "event_id": event,
            "author_id": recipient,
        });
        app.request("POST", "/api/actions", None, Some(action)).await;
    }
    let alice_list = app.wait_for_records(alice, 2).await;
    let bob_list = app.wait_for_records(bob, 1).await;

    let alice_id = alice_list["data"][0]["id"].clone();
    let bob_id = bob_list["data"][0]["id"].clone();

    let (status, body) = app
        .request(
            "POST",
            "/api/notifications/read",
            Some(alice),
            Some(json!({ "ids": [alice_id, bob_id] })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["affected"], 1);

    let (_, body) = app
        .request("GET", "/api/notifications/unread-count", Some(bob), None)
        .await;
    assert_eq!(body["data"]["count"], 1);

    let (_, body) = app
        .request(
            "DELETE",
            "/api/notifications",
            Some(alice),
            Some(json!({ "ids": [bob_id] })),
        )
        .await;
    assert_eq!(body["data"]["affected"], 0);
    assert_eq!(app.store.len(), 3);
}

#[tokio::test]
async fn test_group_delete_removes_every_member() {
    let app = TestApp::new();
    let (author, event) = (UserId::new(), EventId::new());

    for name in ["A", "B", "C"] {
        let action = json!({
            "action": "event_viewed",
            "actor": { "kind": "guest", "name": name },
            "event_id": event,
            "author_id": author,
        });
        app.request("POST", "/api/actions", None, Some(action)).await;
    }
    app.wait_for_records(author, 3).await;

    let (_, body) = app
        .request("GET", "/api/notifications/grouped", Some(author), None)
        .await;
    let key = body["data"][0]["key"].clone();

    let (status, body) = app
        .request(
            "POST",
            "/api/notifications/groups/delete",
            Some(author),
            Some(json!({ "key": key })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["affected"], 3);
    assert!(app.store.is_empty());

    let (status, body) = app
        .request(
            "POST",
            "/api/notifications/groups/delete",
            Some(author),
            Some(json!({ "key": key })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}
