use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Enum representing the possible statuses of a shipment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ShipmentStatus {
    Pending,
    Delivered,
}

/// A shipment created when a sales order enters shipping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub id: Uuid,
    pub sales_order_id: Uuid,
    pub date: NaiveDate,
    pub status: ShipmentStatus,
}

impl Shipment {
    pub fn new(sales_order_id: Uuid, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            sales_order_id,
            date,
            status: ShipmentStatus::Pending,
        }
    }
}
