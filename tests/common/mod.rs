//! In-process fakes of the inventory service and the lighting controller.
#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use stockroom::model::{InventoryRecord, NewRecord, RecordUpdate, ScanMode, ScanRequest};

type Reply = (StatusCode, Json<Value>);

fn not_found() -> Reply {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Item not found"})))
}

/// Binds `router` to an ephemeral localhost port and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    format!("http://{addr}")
}

// --- Inventory service ---

/// Mirrors the real service: `out` scans beyond stock are rejected with 400.
#[derive(Clone, Default)]
pub struct FakeInventory {
    pub records: Arc<Mutex<Vec<InventoryRecord>>>,
}

impl FakeInventory {
    pub fn with_records(records: Vec<InventoryRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    pub fn quantity_of(&self, id: u64) -> Option<u32> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id.0 == id)
            .map(|r| r.quantity)
    }

    pub async fn start(&self) -> String {
        let router = Router::new()
            .route("/inventory/", get(list).post(create))
            .route("/inventory/barcode/{barcode}", get(by_barcode))
            .route("/inventory/scan", post(scan))
            .route("/inventory/{id}", put(update).delete(delete))
            .with_state(self.clone());
        serve(router).await
    }
}

/// Adds the extra columns the real service sends.
fn wire(record: &InventoryRecord) -> Value {
    let mut value = serde_json::to_value(record).unwrap();
    value["profit"] = json!(1.5);
    value["date_of_input"] = json!("2024-03-01T10:00:00");
    if record.barcode.is_empty() {
        value["barcode"] = Value::Null;
    }
    value
}

async fn list(State(inv): State<FakeInventory>) -> Json<Value> {
    let records = inv.records.lock().unwrap();
    Json(Value::Array(records.iter().map(wire).collect()))
}

async fn by_barcode(State(inv): State<FakeInventory>, Path(barcode): Path<String>) -> Reply {
    let records = inv.records.lock().unwrap();
    match records.iter().find(|r| r.barcode == barcode) {
        Some(record) => (StatusCode::OK, Json(wire(record))),
        None => not_found(),
    }
}

async fn scan(State(inv): State<FakeInventory>, Json(request): Json<ScanRequest>) -> Reply {
    let mut records = inv.records.lock().unwrap();
    let Some(record) = records.iter_mut().find(|r| r.barcode == request.barcode) else {
        return not_found();
    };
    if request.mode == ScanMode::Out && record.quantity < request.quantity {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"detail": "Not enough quantity in stock."})),
        );
    }
    record.quantity = request.mode.apply(record.quantity, request.quantity);
    let verb = match request.mode {
        ScanMode::In => "Added",
        ScanMode::Out => "Removed",
    };
    (
        StatusCode::OK,
        Json(json!({
            "message": format!("{verb} {} to {}. New quantity: {}", request.quantity, record.item_name, record.quantity)
        })),
    )
}

async fn create(State(inv): State<FakeInventory>, Json(new): Json<NewRecord>) -> Reply {
    let mut records = inv.records.lock().unwrap();
    let id = records.iter().map(|r| r.id.0).max().unwrap_or(0) + 1;
    let mut record = InventoryRecord::new(id, new.item_name, format!("{:012}", 500_000 + id), new.quantity);
    record.location = new.location;
    record.category = new.category;
    records.push(record.clone());
    (StatusCode::OK, Json(wire(&record)))
}

async fn update(
    State(inv): State<FakeInventory>,
    Path(id): Path<u64>,
    Json(update): Json<RecordUpdate>,
) -> Reply {
    let mut records = inv.records.lock().unwrap();
    let Some(record) = records.iter_mut().find(|r| r.id.0 == id) else {
        return not_found();
    };
    if let Some(name) = update.item_name {
        record.item_name = name;
    }
    if let Some(quantity) = update.quantity {
        record.quantity = quantity;
    }
    if update.location.is_some() {
        record.location = update.location;
    }
    (StatusCode::OK, Json(wire(record)))
}

async fn delete(State(inv): State<FakeInventory>, Path(id): Path<u64>) -> Reply {
    let mut records = inv.records.lock().unwrap();
    let before = records.len();
    records.retain(|r| r.id.0 != id);
    if records.len() == before {
        return not_found();
    }
    (StatusCode::OK, Json(json!({"ok": true})))
}

// --- Lighting controller ---

/// Records every state body it receives and answers with `status`.
#[derive(Clone)]
pub struct FakeController {
    pub received: Arc<Mutex<Vec<Value>>>,
    status: StatusCode,
}

impl FakeController {
    pub fn new() -> Self {
        Self::answering(StatusCode::OK)
    }

    pub fn answering(status: StatusCode) -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
            status,
        }
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }

    pub async fn start(&self) -> String {
        let router = Router::new()
            .route("/json/state", post(receive_state))
            .with_state(self.clone());
        serve(router).await
    }
}

async fn receive_state(State(controller): State<FakeController>, Json(body): Json<Value>) -> StatusCode {
    controller.received.lock().unwrap().push(body);
    controller.status
}

pub fn stock() -> Vec<InventoryRecord> {
    vec![
        InventoryRecord::new(1, "Blue Hoodie", "400123", 5).with_location("C3"),
        InventoryRecord::new(2, "Red Cap", "400124", 2).with_location("A1"),
        InventoryRecord::new(3, "Loose Socks", "", 8),
    ]
}
