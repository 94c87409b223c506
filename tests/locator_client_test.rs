mod common;

use axum::http::StatusCode;
use common::FakeController;
use serde_json::json;
use stockroom::locator::{LocatorChannel, LocatorClient, LocatorError, LocatorState};
use stockroom::rack::RackLayout;

#[tokio::test]
async fn push_posts_the_full_state() {
    let controller = FakeController::new();
    let client = LocatorClient::new(&controller.start().await);
    let layout = RackLayout::default();

    client
        .push(&LocatorState::highlight(&layout, Some(12)).unwrap())
        .await
        .unwrap();
    client.push(&LocatorState::standby(&layout)).await.unwrap();

    let received = controller.received();
    assert_eq!(received.len(), 2);

    let highlight = &received[0];
    assert_eq!(highlight["on"], json!(true));
    assert!(highlight.get("bri").is_none());
    let segments = highlight["seg"].as_array().unwrap();
    assert_eq!(segments.len(), 25);
    assert_eq!(
        segments[12],
        json!({"id": 12, "start": 168, "stop": 181, "col": [[255, 180, 0]], "bri": 255})
    );
    assert_eq!(segments[0]["col"], json!([[20, 20, 20]]));

    let standby = &received[1];
    assert_eq!(standby["bri"], json!(102));
    assert_eq!(standby["seg"][0]["stop"], json!(349));
    assert_eq!(standby["seg"][0]["fx"], json!(9));
}

#[tokio::test]
async fn controller_error_status_is_reported() {
    let controller = FakeController::answering(StatusCode::INTERNAL_SERVER_ERROR);
    let client = LocatorClient::new(&controller.start().await);

    let err = client
        .push(&LocatorState::standby(&RackLayout::default()))
        .await
        .unwrap_err();
    assert!(matches!(err, LocatorError::HttpStatus(500)));
}

#[tokio::test]
async fn channel_delivers_every_state_before_shutdown_completes() {
    let controller = FakeController::new();
    let client = LocatorClient::new(&controller.start().await);
    let (channel, worker) = LocatorChannel::new(client);
    let worker = tokio::spawn(worker.run());

    let layout = RackLayout::default();
    for index in 0..5 {
        channel.send(LocatorState::highlight(&layout, Some(index)).unwrap());
    }
    drop(channel);
    worker.await.unwrap();

    // Pushes are unordered, but none are dropped.
    let mut lit: Vec<u64> = controller
        .received()
        .iter()
        .map(|state| {
            state["seg"]
                .as_array()
                .unwrap()
                .iter()
                .find(|s| s["bri"] == json!(255))
                .and_then(|s| s["id"].as_u64())
                .unwrap()
        })
        .collect();
    lit.sort();
    assert_eq!(lit, vec![0, 1, 2, 3, 4]);
}

#[tokio::test]
async fn failed_pushes_are_swallowed() {
    let controller = FakeController::answering(StatusCode::SERVICE_UNAVAILABLE);
    let (channel, worker) = LocatorChannel::new(LocatorClient::new(&controller.start().await));
    let worker = tokio::spawn(worker.run());

    channel.send(LocatorState::standby(&RackLayout::default()));
    drop(channel);

    worker.await.unwrap();
    assert_eq!(controller.received().len(), 1);
}
