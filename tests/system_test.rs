mod common;

use common::{stock, FakeController, FakeInventory};
use serde_json::json;
use stockroom::browser::{BrowserError, Located};
use stockroom::config::StockroomConfig;
use stockroom::lifecycle::StockroomSystem;
use stockroom::model::{InlineStep, RecordId, ScanMode};
use stockroom::rack::RackLayout;
use stockroom::scan::ScanError;

async fn system() -> (StockroomSystem, FakeInventory, FakeController) {
    let inventory = FakeInventory::with_records(stock());
    let controller = FakeController::new();
    let config = StockroomConfig {
        backend_url: inventory.start().await,
        locator_url: Some(controller.start().await),
        layout: RackLayout::default(),
        request_timeout: None,
    };
    let system = StockroomSystem::new(&config).unwrap();
    (system, inventory, controller)
}

/// Full end-to-end run against both fakes.
#[tokio::test]
async fn scan_locate_and_adjust_end_to_end() {
    let (mut system, inventory, controller) = system().await;
    let browser = &mut system.browser;

    assert_eq!(browser.refresh().await.unwrap(), 3);

    // Scan in, then out within stock.
    let outcome = browser.scan("400123", 2, ScanMode::In).await.unwrap().unwrap();
    assert_eq!(outcome.record.quantity, 7);
    let outcome = browser.scan("400123", 7, ScanMode::Out).await.unwrap().unwrap();
    assert_eq!(outcome.record.quantity, 0);
    assert_eq!(inventory.quantity_of(1), Some(0));

    // Unknown barcode is an answer, not a failure.
    assert!(browser.scan("UNKNOWN123", 1, ScanMode::In).await.unwrap().is_none());

    // Locate lights C3.
    let located = browser.locate("Blue Hoodie").await.unwrap();
    let Located::Highlighted { record, coordinate } = located else {
        panic!("Expected a highlighted box");
    };
    assert_eq!(coordinate.to_string(), "C3");
    assert_eq!(record.quantity, 0);

    // Inline +1 from the box contents.
    let members = browser.box_contents(coordinate).await.unwrap();
    let adjusted = browser.adjust(&members[0], InlineStep::PlusOne).await.unwrap();
    assert_eq!(adjusted.record.quantity, 1);
    assert_eq!(inventory.quantity_of(1), Some(1));

    system.shutdown().await.unwrap();

    let received = controller.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0]["seg"][12]["col"], json!([[255, 180, 0]]));
}

#[tokio::test]
async fn rejected_scan_changes_nothing_locally() {
    let (system, inventory, _) = system().await;
    let browser = &system.browser;
    browser.refresh().await.unwrap();

    let err = browser.scan("400124", 5, ScanMode::Out).await.unwrap_err();
    assert!(matches!(err, BrowserError::Scan(ScanError::Transport(_))));
    assert_eq!(inventory.quantity_of(2), Some(2));

    let members = browser.box_contents("A1".parse().unwrap()).await.unwrap();
    assert_eq!(members[0].id, RecordId(2));
    assert_eq!(members[0].quantity, 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn lights_failing_never_fails_inventory_work() {
    let inventory = FakeInventory::with_records(stock());
    let config = StockroomConfig {
        backend_url: inventory.start().await,
        // Nothing listens here.
        locator_url: Some("http://127.0.0.1:9".into()),
        layout: RackLayout::default(),
        request_timeout: None,
    };
    let mut system = StockroomSystem::new(&config).unwrap();

    system.browser.refresh().await.unwrap();
    let located = system.browser.locate("red cap").await.unwrap();
    assert!(matches!(located, Located::Highlighted { .. }));
    system.browser.standby();

    system.shutdown().await.unwrap();
}
