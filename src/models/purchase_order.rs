use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Enum representing the possible statuses of a purchase order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PurchaseOrderStatus {
    Open,
    Received,
}

/// A purchase order for a single item from a vendor.
///
/// `total` is computed as quantity × unit price at creation and is
/// immutable afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: Uuid,
    pub date: NaiveDate,
    pub vendor_id: Uuid,
    pub item_id: Uuid,
    pub quantity: i64,
    pub unit_price: Decimal,
    pub total: Decimal,
    pub status: PurchaseOrderStatus,
}

impl PurchaseOrder {
    pub fn new(date: NaiveDate, vendor_id: Uuid, item_id: Uuid, quantity: i64, unit_price: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            vendor_id,
            item_id,
            quantity,
            unit_price,
            total: Decimal::from(quantity) * unit_price,
            status: PurchaseOrderStatus::Open,
        }
    }
}
