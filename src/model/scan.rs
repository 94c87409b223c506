use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Direction of a stock scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanMode {
    /// Goods arriving: quantity goes up.
    In,
    /// Goods leaving: quantity goes down, never below zero.
    Out,
}

impl ScanMode {
    /// The quantity after scanning `delta` units in this direction.
    ///
    /// `In` saturates at `u32::MAX`; `Out` clamps at zero instead of failing.
    /// The inventory service is expected to apply the same rule.
    pub fn apply(self, quantity: u32, delta: u32) -> u32 {
        match self {
            ScanMode::In => quantity.saturating_add(delta),
            ScanMode::Out => quantity.saturating_sub(delta),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScanMode::In => "in",
            ScanMode::Out => "out",
        }
    }
}

impl Display for ScanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One press of a box-contents `+1` / `-1` button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStep {
    PlusOne,
    MinusOne,
}

impl InlineStep {
    pub fn mode(self) -> ScanMode {
        match self {
            InlineStep::PlusOne => ScanMode::In,
            InlineStep::MinusOne => ScanMode::Out,
        }
    }
}

/// Body of `POST /inventory/scan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub barcode: String,
    pub quantity: u32,
    pub mode: ScanMode,
}

/// Success payload of `POST /inventory/scan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanAck {
    #[serde(default)]
    pub message: String,
}
