use crate::rack::RackCoordinate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Identifier assigned by the inventory service. Never generated locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// An inventory record as owned by the inventory service. Fields not listed
/// here (profit, timestamps, ...) are ignored on decode.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing the process-local copy to live in a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for InventoryRecord`](#impl-ActorEntity-for-InventoryRecord)
/// for the custom actions ([`RecordAction`](crate::inventory_actor::RecordAction)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: RecordId,
    pub item_name: String,
    /// Empty when the service has no barcode on file; an empty barcode never matches a lookup.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub barcode: String,
    pub quantity: u32,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub supplier: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
    #[serde(default)]
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl InventoryRecord {
    /// Creates a record with only the required fields set.
    ///
    /// # Arguments
    /// * `id` - Identifier assigned by the inventory service
    /// * `item_name` - Display name
    /// * `barcode` - Scan key
    /// * `quantity` - Units on hand
    pub fn new(
        id: impl Into<RecordId>,
        item_name: impl Into<String>,
        barcode: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            item_name: item_name.into(),
            barcode: barcode.into(),
            quantity,
            location: None,
            category: None,
            supplier: None,
            cost: None,
            sale_price: None,
            notes: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// The rack box this record reports, if its location parses as a coordinate.
    pub fn coordinate(&self) -> Option<RackCoordinate> {
        self.location.as_deref()?.parse().ok()
    }

    /// Exact barcode match. Empty barcodes never match.
    pub fn has_barcode(&self, barcode: &str) -> bool {
        !self.barcode.is_empty() && self.barcode == barcode
    }

    /// Exact case-insensitive item name match, or exact barcode match.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim();
        !query.is_empty()
            && (self.item_name.trim().to_lowercase() == query.to_lowercase()
                || self.has_barcode(query))
    }
}

/// Payload for `POST /inventory/`. The service assigns the id and barcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRecord {
    pub item_name: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payload for `PUT /inventory/{id}`; unset fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_service_payload_and_ignores_extras() {
        let json = r#"{
            "id": 7, "item_name": "Blue Hoodie", "barcode": null, "quantity": 3,
            "location": "c3", "profit": 4.5, "date_of_input": "2024-01-01T00:00:00"
        }"#;
        let record: InventoryRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, RecordId(7));
        assert_eq!(record.barcode, "");
        assert_eq!(record.category, None);
        assert_eq!(record.coordinate(), Some(RackCoordinate::new('C', 3)));
    }

    #[test]
    fn negative_quantity_is_rejected_at_the_boundary() {
        let json = r#"{"id": 1, "item_name": "x", "barcode": "1", "quantity": -2}"#;
        assert!(serde_json::from_str::<InventoryRecord>(json).is_err());
    }

    #[test]
    fn query_matches_name_case_insensitively_or_exact_barcode() {
        let record = InventoryRecord::new(1, "Blue Hoodie", "400123", 2);
        assert!(record.matches_query("blue hoodie"));
        assert!(record.matches_query("  BLUE HOODIE "));
        assert!(record.matches_query("400123"));
        assert!(!record.matches_query("Blue"));
        assert!(!record.matches_query("40012"));
        assert!(!record.matches_query(""));
    }

    #[test]
    fn empty_barcode_never_matches() {
        let record = InventoryRecord::new(1, "Loose Socks", "", 2);
        assert!(!record.has_barcode(""));
        assert!(!record.matches_query("   "));
    }

    #[test]
    fn unparseable_location_has_no_coordinate() {
        let record = InventoryRecord::new(1, "Cap", "9", 1).with_location("back room");
        assert_eq!(record.coordinate(), None);
    }

    #[test]
    fn update_omits_unset_fields() {
        let update = RecordUpdate {
            quantity: Some(4),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"quantity":4}"#);
    }
}
