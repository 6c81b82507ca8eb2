use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Define the various events that can occur in the system.
//
// Every mutating command records exactly one event into the store's
// activity feed; `describe` produces the human-readable feed text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    // Master data events
    VendorAdded { vendor_id: Uuid, name: String },
    VendorDeleted(Uuid),
    CustomerAdded { customer_id: Uuid, name: String },
    CustomerDeleted(Uuid),
    ItemAdded { item_id: Uuid, name: String },
    ItemDeleted(Uuid),

    // Purchasing events
    PurchaseOrderCreated(Uuid),
    PurchaseOrderReceived {
        purchase_order_id: Uuid,
        quantity: i64,
        total: Decimal,
    },

    // Inventory events
    StockAdjusted { item_id: Uuid, name: String, delta: i64 },

    // Production events
    WorkOrderCreated(Uuid),
    WorkOrderCompleted {
        work_order_id: Uuid,
        consumed: i64,
        produced: i64,
    },

    // Sales events
    SalesOrderCreated(Uuid),
    SalesOrderInvoiced { sales_order_id: Uuid, total: Decimal },
    SalesOrderShipped {
        sales_order_id: Uuid,
        shipment_id: Uuid,
    },
    ShipmentDelivered {
        shipment_id: Uuid,
        sales_order_id: Uuid,
        quantity: i64,
    },

    // Return events
    CustomerReturnRecorded { item_id: Uuid, quantity: i64 },
    VendorReturnRecorded { item_id: Uuid, quantity: i64 },

    // Finance events
    ManualEntryAdded { entry_id: Uuid, amount: Decimal },
    ManualEntryDeleted(Uuid),

    // Store-level events
    StoreReset,
    BackupImported,
}

impl Event {
    /// Human-readable feed text for this event.
    pub fn describe(&self) -> String {
        match self {
            Event::VendorAdded { name, .. } => format!("Added vendor {}", name),
            Event::VendorDeleted(id) => format!("Deleted vendor {}", id),
            Event::CustomerAdded { name, .. } => format!("Added customer {}", name),
            Event::CustomerDeleted(id) => format!("Deleted customer {}", id),
            Event::ItemAdded { name, .. } => format!("Added item {}", name),
            Event::ItemDeleted(id) => format!("Deleted item {}", id),
            Event::PurchaseOrderCreated(id) => format!("Created purchase order {}", id),
            Event::PurchaseOrderReceived { quantity, total, .. } => {
                format!("Received purchase order ({} units in, expense {})", quantity, total)
            }
            Event::StockAdjusted { name, delta, .. } => {
                format!("Stock adjustment for {}: {:+}", name, delta)
            }
            Event::WorkOrderCreated(id) => format!("Created work order {}", id),
            Event::WorkOrderCompleted { consumed, produced, .. } => {
                format!("Completed work order ({} consumed, {} produced)", consumed, produced)
            }
            Event::SalesOrderCreated(id) => format!("Created sales order {}", id),
            Event::SalesOrderInvoiced { total, .. } => {
                format!("Invoiced sales order (income {})", total)
            }
            Event::SalesOrderShipped { shipment_id, .. } => {
                format!("Created shipment {} from sales order", shipment_id)
            }
            Event::ShipmentDelivered { quantity, .. } => {
                format!("Delivered shipment ({} units out)", quantity)
            }
            Event::CustomerReturnRecorded { quantity, .. } => {
                format!("Customer return ({} units restocked)", quantity)
            }
            Event::VendorReturnRecorded { quantity, .. } => {
                format!("Vendor return ({} units out)", quantity)
            }
            Event::ManualEntryAdded { amount, .. } => {
                format!("Recorded manual finance entry ({})", amount)
            }
            Event::ManualEntryDeleted(id) => format!("Deleted finance entry {}", id),
            Event::StoreReset => "Reset all data".to_string(),
            Event::BackupImported => "Imported backup".to_string(),
        }
    }
}
