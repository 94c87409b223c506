//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//! Levels come from `RUST_LOG`; the compact format hides the module prefix
//! (`with_target(false)`) and shows spans inline.
//!
//! ## What Gets Traced
//!
//! - **Cache lifecycle**: actor start, stop and final record count
//! - **Cache operations**: load, upsert, get, find, update, delete and quantity actions
//! - **Scans**: barcode, mode and delta on the `apply_scan` span, the outcome at `info`
//! - **Locator**: pushes at `debug`, failed pushes at `warn`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info stockroom scan 400123 2 --mode out
//!
//! # Show payloads
//! RUST_LOG=debug stockroom locate "Blue Hoodie"
//!
//! # Only the locator
//! RUST_LOG=stockroom::locator=debug stockroom standby
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**, scanning two units out of a known barcode:
//!
//! ```text
//! INFO Actor started entity_type="InventoryRecord"
//! INFO Loaded entity_type="InventoryRecord" size=42
//! INFO refresh: Cache refreshed count=42
//! INFO apply_scan: Scan applied id=item_7 barcode=400123 mode=out delta=2 quantity=3
//! ```
//!
//! **With `RUST_LOG=debug`** the same run also shows the lookups:
//!
//! ```text
//! DEBUG resolve_by_barcode: Resolved barcode="400123" id=item_7 quantity=5
//! DEBUG apply_scan:adjust_quantity: Adjusting 2 units out for item_7
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
