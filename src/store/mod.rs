//! The entity store: single source of truth for every record in the system.
//!
//! The store is an owned aggregate passed explicitly into every command;
//! nothing in the crate holds entity state outside of it.

pub mod persist;

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::events::Event;
use crate::models::{
    ActivityRecord, Customer, FinanceEntry, Item, PurchaseOrder, ReturnRecord, SalesOrder,
    Shipment, Vendor, WorkOrder,
};

/// Current schema version of the persisted document.
pub const SCHEMA_VERSION: u32 = 1;

/// Maximum number of activity records retained (ring buffer capacity).
pub const ACTIVITY_CAP: usize = 25;

/// Metadata heading the persisted document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreMeta {
    pub schema_version: u32,
    pub created_at: DateTime<Utc>,
}

impl Default for StoreMeta {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            created_at: Utc::now(),
        }
    }
}

/// The full entity store. Collections keep records in creation order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub meta: StoreMeta,
    #[serde(default)]
    pub vendors: Vec<Vendor>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub purchase_orders: Vec<PurchaseOrder>,
    #[serde(default)]
    pub work_orders: Vec<WorkOrder>,
    #[serde(default)]
    pub sales_orders: Vec<SalesOrder>,
    #[serde(default)]
    pub shipments: Vec<Shipment>,
    #[serde(default)]
    pub returns: Vec<ReturnRecord>,
    #[serde(default)]
    pub finance: Vec<FinanceEntry>,
    /// Activity feed, newest first.
    #[serde(default)]
    pub activity: VecDeque<ActivityRecord>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // Lookup helpers. All are by-id linear scans; collections are small
    // by construction in a single-user store.

    pub fn vendor(&self, id: Uuid) -> Option<&Vendor> {
        self.vendors.iter().find(|v| v.id == id)
    }

    pub fn customer(&self, id: Uuid) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn item(&self, id: Uuid) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn item_mut(&mut self, id: Uuid) -> Option<&mut Item> {
        self.items.iter_mut().find(|i| i.id == id)
    }

    pub fn purchase_order(&self, id: Uuid) -> Option<&PurchaseOrder> {
        self.purchase_orders.iter().find(|po| po.id == id)
    }

    pub fn purchase_order_mut(&mut self, id: Uuid) -> Option<&mut PurchaseOrder> {
        self.purchase_orders.iter_mut().find(|po| po.id == id)
    }

    pub fn work_order(&self, id: Uuid) -> Option<&WorkOrder> {
        self.work_orders.iter().find(|wo| wo.id == id)
    }

    pub fn work_order_mut(&mut self, id: Uuid) -> Option<&mut WorkOrder> {
        self.work_orders.iter_mut().find(|wo| wo.id == id)
    }

    pub fn sales_order(&self, id: Uuid) -> Option<&SalesOrder> {
        self.sales_orders.iter().find(|so| so.id == id)
    }

    pub fn sales_order_mut(&mut self, id: Uuid) -> Option<&mut SalesOrder> {
        self.sales_orders.iter_mut().find(|so| so.id == id)
    }

    pub fn shipment(&self, id: Uuid) -> Option<&Shipment> {
        self.shipments.iter().find(|sh| sh.id == id)
    }

    pub fn shipment_mut(&mut self, id: Uuid) -> Option<&mut Shipment> {
        self.shipments.iter_mut().find(|sh| sh.id == id)
    }

    pub fn finance_entry(&self, id: Uuid) -> Option<&FinanceEntry> {
        self.finance.iter().find(|f| f.id == id)
    }

    /// Records a domain event into the activity feed, evicting the oldest
    /// record once the buffer holds [`ACTIVITY_CAP`] entries.
    pub fn record(&mut self, event: Event) {
        self.activity.push_front(ActivityRecord::new(event.describe()));
        self.activity.truncate(ACTIVITY_CAP);
    }

    /// Up to `limit` activity records, newest first.
    pub fn recent_activity(&self, limit: usize) -> Vec<&ActivityRecord> {
        self.activity.iter().take(limit).collect()
    }

    /// Serializes the full store as a pretty-printed versioned JSON document.
    pub fn to_backup_json(&self) -> Result<String, ServiceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a backup document, replacing the entire store on success.
    ///
    /// A document qualifies only when it carries at minimum the `items` and
    /// `finance` collections; anything else is rejected outright rather than
    /// partially merged. Missing optional collections default to empty.
    pub fn from_backup_json(json: &str) -> Result<Store, ServiceError> {
        let value: serde_json::Value = serde_json::from_str(json)
            .map_err(|e| ServiceError::ImportFormatError(format!("Invalid JSON: {}", e)))?;

        let object = value
            .as_object()
            .ok_or_else(|| ServiceError::ImportFormatError("Document is not an object".into()))?;

        for required in ["items", "finance"] {
            if !object.get(required).map(|v| v.is_array()).unwrap_or(false) {
                return Err(ServiceError::ImportFormatError(format!(
                    "Missing required collection '{}'",
                    required
                )));
            }
        }

        serde_json::from_value(value)
            .map_err(|e| ServiceError::ImportFormatError(format!("Malformed document: {}", e)))
    }

    /// Flattened CSV view of the finance ledger.
    ///
    /// Columns: `TYPE,DATE,CATEGORY,AMOUNT,NOTE,REF`. Embedded commas in
    /// free-text fields are replaced with spaces to keep rows parseable.
    pub fn export_finance_csv(&self) -> String {
        let mut rows = vec!["TYPE,DATE,CATEGORY,AMOUNT,NOTE,REF".to_string()];
        for entry in &self.finance {
            rows.push(format!(
                "{},{},{},{},{},{}",
                entry.entry_type,
                entry.date,
                entry.category.replace(',', " "),
                entry.amount,
                entry.note.as_deref().unwrap_or("").replace(',', " "),
                entry.source.ref_code()
            ));
        }
        rows.join("\n")
    }
}
